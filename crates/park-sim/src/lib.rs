//! `park-sim` — the guest tick loop.
//!
//! # Tick loop
//!
//! ```text
//! tick(delta_day, snapshot, slots, catalog):
//!   ① Cache     — rebuild BuildingContexts if dirty; reconcile occupancy
//!                 (release guests at changed/removed slots, evict overflow).
//!   ② Step      — for each active guest in ascending index order
//!                 (or the next batches from the cursor when time-sliced):
//!                   Idle       → select_building → AtBuilding | Traveling
//!                   Traveling  → count down → AtBuilding
//!                   AtBuilding → count down, shop roll; at 0 release and
//!                                roll departure → Idle | Leaving
//!   ③ Mood      — drift satisfaction toward appeal / 100; reclassify.
//!   ④ Rollup    — drain spend into income; tally and remove Leaving guests.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use park_building::{SlotTable, StaticCatalog};
//! use park_core::{GuestTypeMix, SimConfig};
//! use park_sim::{EngineBuilder, ParkSnapshot};
//!
//! let mut engine = EngineBuilder::new(SimConfig::with_capacity(1_000)).build()?;
//! engine.add_guests(100, &GuestTypeMix::uniform());
//! let report = engine.tick(1.0 / 60.0, &ParkSnapshot::default(), &slots, &catalog);
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod report;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use builder::EngineBuilder;
pub use engine::{AddOutcome, Engine, RemovalPreference};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::TickReport;
pub use snapshot::ParkSnapshot;
