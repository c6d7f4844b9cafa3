//! `park-guest` — Structure-of-Arrays guest storage.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`pool`]    | `GuestPool` (parallel arrays, free list, active count)     |
//! | [`view`]    | `GuestView` — copy of one row for inspection and tests     |
//! | [`error`]   | `PoolError`, `PoolResult<T>`                               |
//!
//! The pool owns every per-guest value.  Nothing else in the simulation
//! holds guest data; other components refer to guests only by `GuestId`.

pub mod error;
pub mod pool;
pub mod view;


pub use error::{PoolError, PoolResult};
pub use pool::GuestPool;
pub use view::GuestView;
