//! Simulation observer trait for progress reporting and data collection.

use park_core::Tick;
use park_guest::GuestPool;

use crate::TickReport;

/// Callbacks invoked by [`Engine::tick_observed`][crate::Engine::tick_observed]
/// and [`Engine::run_ticks`][crate::Engine::run_ticks].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example
///
/// ```rust,ignore
/// struct IncomePrinter;
///
/// impl SimObserver for IncomePrinter {
///     fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
///         println!("{tick}: earned {:.2}", report.income);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with that tick's report.
    fn on_tick_end(&mut self, _tick: Tick, _report: &TickReport) {}

    /// Called every `config.snapshot_interval_ticks` ticks, after
    /// `on_tick_end`.
    ///
    /// Provides read-only access to the whole pool so output writers can
    /// record per-guest rows without the engine knowing any output format.
    fn on_snapshot(&mut self, _tick: Tick, _pool: &GuestPool) {}

    /// Called once after `run_ticks` finishes.  `next_tick` is the tick the
    /// engine will process next.
    fn on_run_end(&mut self, _next_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
