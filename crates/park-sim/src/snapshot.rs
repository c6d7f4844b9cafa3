//! Per-tick read-only inputs from the host.

use park_core::GuestTypeMix;

/// Park-wide values the host computes from systems outside the guest
/// simulation.  Passed by reference into every tick and never retained.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParkSnapshot {
    /// Global appeal score, `0..=100`.  Guest satisfaction drifts toward
    /// `appeal / 100`.
    pub appeal: f64,
    /// Distribution new arrivals are drawn from.
    pub arrival_mix: GuestTypeMix,
}

impl ParkSnapshot {
    pub fn new(appeal: f64, arrival_mix: GuestTypeMix) -> Self {
        Self { appeal, arrival_mix }
    }

    /// Satisfaction target in `[0, 1]`.  A non-finite appeal counts as 0.
    #[inline]
    pub fn target_satisfaction(&self) -> f64 {
        if self.appeal.is_finite() { (self.appeal / 100.0).clamp(0.0, 1.0) } else { 0.0 }
    }
}

impl Default for ParkSnapshot {
    fn default() -> Self {
        Self { appeal: 50.0, arrival_mix: GuestTypeMix::uniform() }
    }
}
