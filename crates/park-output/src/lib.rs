//! `park-output` — simulation output writers.
//!
//! | Backend | Files created                                  |
//! |---------|------------------------------------------------|
//! | CSV     | `guest_snapshots.csv`, `tick_summaries.csv`    |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `park_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use park_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, engine.clock().elapsed_days);
//! engine.run_ticks(600, 1.0 / 60.0, &snapshot, &slots, &catalog, &mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{GuestSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
