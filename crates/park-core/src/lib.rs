//! `park-core` — foundational types for the park guest simulation.
//!
//! This crate is a dependency of every other `park-*` crate.  It has no
//! `park-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`ids`]         | `GuestId`, `SlotId`, `BuildingId`                          |
//! | [`guest`]       | `GuestType`, `GuestMood`, `GuestState`, `TypeAffinity`     |
//! | [`aggregate`]   | `MoodCounts`, `GuestBreakdown`, `GuestTypeMix`             |
//! | [`config`]      | `SimConfig` and its grouped sections                       |
//! | [`constants`]   | Default tuning values used by `SimConfig::default()`       |
//! | [`rng`]         | `RandomSource` trait, `SimRng`, `ScriptedRng`              |
//! | [`time`]        | `Tick`, `SimClock`                                         |
//! | [`error`]       | `ParkError`, `ParkResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids, config, aggregates. |

pub mod aggregate;
pub mod config;
pub mod constants;
pub mod error;
pub mod guest;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use aggregate::{GuestBreakdown, GuestTypeMix, MoodCounts, TypeCounts};
pub use config::{MoodConfig, SelectionWeights, SimConfig, SlicingConfig, VisitConfig};
pub use error::{ParkError, ParkResult};
pub use guest::{GuestMood, GuestState, GuestType, TypeAffinity};
pub use ids::{BuildingId, GuestId, SlotId};
pub use rng::{RandomSource, ScriptedRng, SimRng};
pub use time::{SimClock, Tick};
