//! Slot occupancy table: `slot → building | empty`.

use park_core::{BuildingId, SlotId};

use crate::{BuildingError, BuildingResult};

/// Which building occupies each slot.  Owned by the host; the engine reads
/// it only when rebuilding the context cache.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotTable {
    slots: Vec<Option<BuildingId>>,
}

impl SlotTable {
    /// `slot_count` empty slots.
    pub fn new(slot_count: usize) -> Self {
        Self { slots: vec![None; slot_count] }
    }

    pub fn from_slots(slots: Vec<Option<BuildingId>>) -> Self {
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Building at `slot`, `None` if empty or out of range.
    #[inline]
    pub fn get(&self, slot: SlotId) -> Option<BuildingId> {
        self.slots.get(slot.index()).copied().flatten()
    }

    /// Put `building` in `slot`, returning whatever was there.
    pub fn place(&mut self, slot: SlotId, building: BuildingId) -> BuildingResult<Option<BuildingId>> {
        let entry = self.entry_mut(slot)?;
        Ok(entry.replace(building))
    }

    /// Empty `slot`, returning the demolished building.
    pub fn clear(&mut self, slot: SlotId) -> BuildingResult<Option<BuildingId>> {
        let entry = self.entry_mut(slot)?;
        Ok(entry.take())
    }

    /// `(slot, building)` for every occupied slot in ascending order.
    pub fn occupied(&self) -> impl Iterator<Item = (SlotId, BuildingId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, b)| b.map(|b| (SlotId(i as u16), b)))
    }

    fn entry_mut(&mut self, slot: SlotId) -> BuildingResult<&mut Option<BuildingId>> {
        let slot_count = self.slots.len();
        self.slots
            .get_mut(slot.index())
            .ok_or(BuildingError::InvalidSlotIndex { slot, slot_count })
    }
}
