use park_core::ParkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Park(#[from] ParkError),
}

pub type SimResult<T> = Result<T, SimError>;
