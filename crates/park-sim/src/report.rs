//! Per-tick results returned by the engine.

use park_core::{MoodCounts, Tick};

/// What happened during one `Engine::tick`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickReport {
    pub tick: Tick,
    /// Simulated days covered by this tick.
    pub delta_day: f64,
    /// Guests stepped this tick (all of them unless time slicing is active).
    pub processed: u32,
    /// Idle guests that picked a destination.
    pub visits_started: u32,
    /// Successful shop purchase rolls.
    pub purchases: u32,
    /// Money generated, drained from the per-guest accumulators.
    pub income: f64,
    /// Guests that left the park, by mood at departure.
    pub departures: MoodCounts,
    /// Guests released because their building vanished, changed or shrank.
    pub stale_releases: u32,
    /// `true` if this tick finished a full pass over the pool.
    pub sweep_complete: bool,
    /// Live guests after the tick.
    pub active_after: u32,
}

impl TickReport {
    /// Fold a later tick into this one.  `tick` and `active_after` take the
    /// later values; counters and income add up.
    pub fn merge(&mut self, later: &TickReport) {
        self.tick = later.tick;
        self.delta_day += later.delta_day;
        self.processed += later.processed;
        self.visits_started += later.visits_started;
        self.purchases += later.purchases;
        self.income += later.income;
        self.departures.merge(&later.departures);
        self.stale_releases += later.stale_releases;
        self.sweep_complete |= later.sweep_complete;
        self.active_after = later.active_after;
    }
}
