//! A by-value copy of one guest row.

use park_core::{GuestId, GuestMood, GuestState, GuestType, SlotId};

/// Snapshot of a single active guest, as returned by
/// [`GuestPool::get`][crate::GuestPool::get].
///
/// Hot loops should read the pool's arrays directly; `GuestView` is for
/// observers, debugging and tests.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuestView {
    pub id:                GuestId,
    pub state:             GuestState,
    pub mood:              GuestMood,
    pub guest_type:        GuestType,
    pub satisfaction:      f32,
    pub current_building:  SlotId,
    pub previous_building: SlotId,
    pub dwell_remaining:   u32,
    pub ticks_at_building: u32,
    pub spend_accumulator: f64,
    pub arrival_seq:       u64,
}
