//! The `OutputWriter` trait implemented by backend writers.

use crate::{GuestSnapshotRow, OutputResult, TickSummaryRow};

/// A sink for per-tick summaries and periodic guest snapshots.
///
/// Errors are returned to the caller; [`SimOutputObserver`] stores them
/// because observer hooks cannot fail.
///
/// [`SimOutputObserver`]: crate::SimOutputObserver
pub trait OutputWriter {
    /// Write a batch of guest rows from one snapshot.
    fn write_snapshots(&mut self, rows: &[GuestSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
