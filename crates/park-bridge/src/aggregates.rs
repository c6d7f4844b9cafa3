//! Values the host stores and persists.

use park_core::{GuestBreakdown, GuestTypeMix, MoodCounts, SimClock};
use park_sim::TickReport;

/// Result of one bridge tick: the engine's report plus fresh aggregates.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickSummary {
    pub report:    TickReport,
    pub breakdown: GuestBreakdown,
    pub type_mix:  GuestTypeMix,
}

/// Everything needed to rebuild the guest population after a load.
///
/// Individual guests are not saved; [`GuestBridge::restore`] re-seeds the
/// pool from these aggregates.
///
/// [`GuestBridge::restore`]: crate::GuestBridge::restore
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuestAggregates {
    pub breakdown: GuestBreakdown,
    pub type_mix:  GuestTypeMix,
    pub clock:     SimClock,
}

/// Running totals since the last [`take_day_tally`](crate::GuestBridge::take_day_tally).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayTally {
    pub ticks:          u64,
    /// Simulated days covered.
    pub days:           f64,
    pub income:         f64,
    pub visits_started: u32,
    pub purchases:      u32,
    pub departures:     MoodCounts,
    pub arrivals:       u32,
    /// Arrivals dropped because the pool was full.
    pub rejected:       u32,
    /// Guests culled by `force_remove_guests`.
    pub removed:        u32,
}

impl DayTally {
    pub(crate) fn record(&mut self, report: &TickReport) {
        self.ticks += 1;
        self.days += report.delta_day;
        self.income += report.income;
        self.visits_started += report.visits_started;
        self.purchases += report.purchases;
        self.departures.merge(&report.departures);
    }
}
