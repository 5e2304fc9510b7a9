//! Error types for the wire layer.

use thiserror::Error;

/// Result type alias for wire-layer operations.
pub type Result<T> = std::result::Result<T, TransportError>;

/// Errors surfaced by the transport and stub layer.
///
/// Stubs and the clients above them never translate or wrap these: whatever
/// the transport reports is what the caller sees.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The call was cancelled before the round trip completed.
    #[error("call cancelled")]
    Cancelled,

    /// The per-client timeout elapsed before a reply arrived.
    #[error("deadline exceeded")]
    DeadlineExceeded,

    /// The transport could not reach the remote endpoint.
    #[error("connection failed: {0}")]
    Connect(String),

    /// The remote service answered with a protocol-level error.
    #[error("remote error (code {code}): {message}")]
    Status {
        /// Wire-level status code reported by the remote service.
        code: u32,
        /// Message reported by the remote service.
        message: String,
    },

    /// The configured address could not be parsed into a URL.
    #[error("invalid address: {0}")]
    InvalidAddress(#[from] url::ParseError),

    /// A wire payload could not be encoded or decoded.
    #[error("payload codec error: {0}")]
    Codec(#[from] serde_json::Error),
}
