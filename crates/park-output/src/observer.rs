//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use park_core::{GuestMood, Tick};
use park_guest::GuestPool;
use park_sim::{SimObserver, TickReport};

use crate::row::{GuestSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes tick summaries and guest snapshots to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  Check them with [`take_error`][Self::take_error].
/// `run_ticks` finishes the writer itself; hosts stepping with
/// `tick_observed` call [`finish`][Self::finish] when done.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:       W,
    elapsed_days: f64,
    /// Reused between snapshots.
    rows:         Vec<GuestSnapshotRow>,
    last_error:   Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// `start_day` is the engine clock's elapsed days when observation
    /// starts, so the `day` column matches a resumed game.
    pub fn new(writer: W, start_day: f64) -> Self {
        Self { writer, elapsed_days: start_day, rows: Vec::new(), last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer and surface any stored error.
    pub fn finish(&mut self) -> OutputResult<()> {
        let result = self.writer.finish();
        self.store_err(result);
        match self.take_error() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
        self.elapsed_days += report.delta_day;
        let row = TickSummaryRow {
            tick:               tick.0,
            day:                self.elapsed_days,
            processed:          report.processed,
            visits_started:     report.visits_started,
            purchases:          report.purchases,
            income:             report.income,
            departures_happy:   report.departures.get(GuestMood::Happy),
            departures_neutral: report.departures.get(GuestMood::Neutral),
            departures_unhappy: report.departures.get(GuestMood::Unhappy),
            stale_releases:     report.stale_releases,
            active:             report.active_after,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, pool: &GuestPool) {
        self.rows.clear();
        pool.for_each_active(|g| {
            let i = g.index();
            self.rows.push(GuestSnapshotRow {
                guest_id:      g.0,
                tick:          tick.0,
                state:         pool.state[i],
                mood:          pool.mood[i],
                guest_type:    pool.guest_type[i],
                satisfaction:  pool.satisfaction[i],
                current_slot:  pool.current_building[i].0,
                previous_slot: pool.previous_building[i].0,
            });
        });

        if !self.rows.is_empty() {
            let result = self.writer.write_snapshots(&self.rows);
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, _next_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
