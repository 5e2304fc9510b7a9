//! Error types for the SDK.

use crate::observability::ObservabilityError;
use modreg_core::TransportError;
use thiserror::Error;

/// The main error type for SDK operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Wire-layer failure, passed through from the transport untouched.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Tracing-backend lifecycle failure.
    #[error("observability error: {0}")]
    Observability(#[from] ObservabilityError),
}

/// Result type alias for SDK operations.
pub type Result<T> = std::result::Result<T, Error>;
