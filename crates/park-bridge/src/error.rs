use park_core::SlotId;
use park_sim::SimError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    /// The host asked about a slot the simulation does not know.
    #[error("slot {slot} out of range (park has {slot_count} slots)")]
    InvalidSlotIndex { slot: SlotId, slot_count: usize },

    #[error(transparent)]
    Sim(#[from] SimError),
}

pub type BridgeResult<T> = Result<T, BridgeError>;
