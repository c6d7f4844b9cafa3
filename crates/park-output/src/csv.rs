//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `guest_snapshots.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{GuestSnapshotRow, OutputResult, TickSummaryRow};

pub const SNAPSHOT_HEADERS: [&str; 8] = [
    "guest_id", "tick", "state", "mood", "guest_type", "satisfaction", "current_slot", "previous_slot",
];

pub const SUMMARY_HEADERS: [&str; 11] = [
    "tick",
    "day",
    "processed",
    "visits_started",
    "purchases",
    "income",
    "departures_happy",
    "departures_neutral",
    "departures_unhappy",
    "stale_releases",
    "active",
];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("guest_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADERS)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADERS)?;

        Ok(Self { snapshots, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[GuestSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.guest_id.to_string(),
                row.tick.to_string(),
                row.state.name().to_string(),
                row.mood.name().to_string(),
                row.guest_type.name().to_string(),
                format!("{:.4}", row.satisfaction),
                row.current_slot.to_string(),
                row.previous_slot.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            format!("{:.4}", row.day),
            row.processed.to_string(),
            row.visits_started.to_string(),
            row.purchases.to_string(),
            format!("{:.2}", row.income),
            row.departures_happy.to_string(),
            row.departures_neutral.to_string(),
            row.departures_unhappy.to_string(),
            row.stale_releases.to_string(),
            row.active.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
