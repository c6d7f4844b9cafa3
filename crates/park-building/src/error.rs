//! Building-subsystem error type.

use thiserror::Error;

use park_core::{BuildingId, SlotId};

/// Errors produced by `park-building`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildingError {
    /// The host referred to a slot past the end of the slot table.  A caller
    /// bug, rejected before it reaches the pool.
    #[error("slot {slot} out of range (park has {slot_count} slots)")]
    InvalidSlotIndex { slot: SlotId, slot_count: usize },

    /// The slot exists but holds no usable building any more (demolished or
    /// replaced since the guest was assigned).  Non-fatal.
    #[error("slot {0} no longer holds a usable building")]
    StaleBuildingReference(SlotId),

    #[error("building {0} is not in the catalog")]
    UnknownBuilding(BuildingId),
}

pub type BuildingResult<T> = Result<T, BuildingError>;
