use park_core::GuestId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoolError {
    /// Every slot is in use.  Non-fatal: the arrival is dropped.
    #[error("guest pool is full ({capacity} guests)")]
    Full { capacity: usize },

    #[error("guest {0} is not active")]
    NotActive(GuestId),
}

pub type PoolResult<T> = Result<T, PoolError>;
