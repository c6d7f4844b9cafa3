//! `park-bridge` — the host-facing facade over the guest simulation.
//!
//! The host never touches individual guests.  It drives the simulation
//! through [`GuestBridge`] and reads back two aggregates:
//!
//! - [`GuestBreakdown`](park_core::GuestBreakdown): happy / neutral / unhappy counts;
//! - [`GuestTypeMix`](park_core::GuestTypeMix): percentage of guests per type.
//!
//! Saves keep only [`GuestAggregates`]; [`GuestBridge::restore`] re-seeds the
//! pool from them.
//!
//! ```rust,ignore
//! let mut bridge = GuestBridge::new(SimConfig::with_capacity(10_000))?;
//! let view = ParkView::new(&slots, &catalog, appeal, arrival_mix);
//! let summary = bridge.tick(1.0 / 60.0, &view);
//! bridge.add_guests(250); // typed from `view.arrival_mix`
//! store(summary.breakdown, summary.type_mix);
//! ```

pub mod aggregates;
pub mod bridge;
pub mod error;
pub mod view;


pub use aggregates::{DayTally, GuestAggregates, TickSummary};
pub use bridge::GuestBridge;
pub use error::{BridgeError, BridgeResult};
pub use view::ParkView;

pub use park_sim::{AddOutcome, RemovalPreference};
