//! Plain data row types written by output backends.

use park_core::{GuestMood, GuestState, GuestType};

/// One guest's state at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuestSnapshotRow {
    pub guest_id:      u32,
    pub tick:          u64,
    pub state:         GuestState,
    pub mood:          GuestMood,
    pub guest_type:    GuestType,
    pub satisfaction:  f32,
    /// `u16::MAX` when the guest is not assigned to a slot.
    pub current_slot:  u16,
    /// `u16::MAX` before the guest's first completed visit.
    pub previous_slot: u16,
}

/// Summary statistics for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:               u64,
    /// Simulated days elapsed at the end of the tick.
    pub day:                f64,
    pub processed:          u32,
    pub visits_started:     u32,
    pub purchases:          u32,
    pub income:             f64,
    pub departures_happy:   u32,
    pub departures_neutral: u32,
    pub departures_unhappy: u32,
    pub stale_releases:     u32,
    pub active:             u32,
}
