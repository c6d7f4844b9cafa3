//! `park-building` — what the simulation knows about buildings.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`catalog`]  | `BuildingAttributes`, `BuildingCatalog` trait, `StaticCatalog`  |
//! | [`slots`]    | `SlotTable` — which building occupies which slot                |
//! | [`context`]  | `BuildingContext`, `BuildingContextCache` (per-slot, dirty flag) |
//! | [`selector`] | `select_building` — weighted destination choice                 |
//! | [`error`]    | `BuildingError`, `BuildingResult<T>`                            |
//!
//! # Data flow
//!
//! The host owns the slot table and the catalog.  When either changes it
//! marks the cache dirty; the engine rebuilds the cache at the start of the
//! next tick.  From then on the hot loop reads only the slot-indexed
//! `BuildingContext` array and never touches the catalog.

pub mod catalog;
pub mod context;
pub mod error;
pub mod selector;
pub mod slots;


pub use catalog::{BuildingAttributes, BuildingCatalog, StaticCatalog};
pub use context::{BuildingContext, BuildingContextCache, RebuildStats};
pub use error::{BuildingError, BuildingResult};
pub use selector::{attraction_weight, select_building};
pub use slots::SlotTable;
