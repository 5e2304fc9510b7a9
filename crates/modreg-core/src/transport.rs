//! The transport capability injected into generated-style stubs.

use crate::envelope::Metadata;
use crate::error::Result;
use async_trait::async_trait;
use url::Url;

/// A single unary call handed to the transport.
#[derive(Debug, Clone)]
pub struct UnaryCall {
    /// Fully-resolved URL for the procedure.
    pub url: Url,
    /// Procedure path, e.g. `registry.v1.DownloadService/Download`.
    pub procedure: &'static str,
    /// Request headers.
    pub metadata: Metadata,
    /// Serialized request message.
    pub payload: serde_json::Value,
}

/// The reply the transport produced for a unary call.
#[derive(Debug, Clone)]
pub struct UnaryReply {
    /// Reply headers and trailers.
    pub metadata: Metadata,
    /// Serialized response message.
    pub payload: serde_json::Value,
}

/// Duck-typed HTTP client capability.
///
/// The concrete implementation (connection pooling, TLS, compression,
/// interceptors) is supplied by the host application; tests substitute
/// fakes. Implementations must be safe to share across tasks behind an
/// `Arc`.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issue one unary round trip.
    ///
    /// # Errors
    ///
    /// Returns whatever failure the transport encountered; the stub layer
    /// passes it through untouched.
    async fn unary(&self, call: UnaryCall) -> Result<UnaryReply>;
}
