//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `ParkError` where they
//! need to surface a configuration problem.

use thiserror::Error;

/// The base error type for `park-core`.
#[derive(Debug, Error)]
pub enum ParkError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `park-core`.
pub type ParkResult<T> = Result<T, ParkError>;
