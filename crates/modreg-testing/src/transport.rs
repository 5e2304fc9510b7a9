//! Fake transports for exercising clients without a network stack.

use async_trait::async_trait;
use modreg_core::{HttpClient, Metadata, Result, TransportError, UnaryCall, UnaryReply};
use parking_lot::Mutex;

/// A transport answering each procedure with a canned JSON payload.
///
/// Calls are recorded so tests can assert on what the stub sent. A call to
/// a procedure with no configured reply fails with a not-found status.
#[derive(Default)]
pub struct StaticHttpClient {
    replies: Mutex<Vec<(String, serde_json::Value)>>,
    calls: Mutex<Vec<UnaryCall>>,
}

impl StaticHttpClient {
    /// Create a transport with no replies configured.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the reply payload for a procedure.
    pub fn reply_with(&self, procedure: &str, payload: serde_json::Value) {
        self.replies.lock().push((procedure.to_owned(), payload));
    }

    /// The calls observed so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<UnaryCall> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl HttpClient for StaticHttpClient {
    async fn unary(&self, call: UnaryCall) -> Result<UnaryReply> {
        self.calls.lock().push(call.clone());
        let payload = self
            .replies
            .lock()
            .iter()
            .find(|(procedure, _)| procedure == call.procedure)
            .map(|(_, payload)| payload.clone());
        match payload {
            Some(payload) => {
                let mut metadata = Metadata::new();
                metadata.insert("x-test-reply", "1");
                Ok(UnaryReply { metadata, payload })
            }
            None => Err(TransportError::Status {
                code: 404,
                message: format!("no reply configured for {}", call.procedure),
            }),
        }
    }
}

/// A transport that fails every call with a configured remote status.
pub struct FailingHttpClient {
    code: u32,
    message: String,
}

impl FailingHttpClient {
    /// Create a transport failing with the given status.
    #[must_use]
    pub fn new(code: u32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[async_trait]
impl HttpClient for FailingHttpClient {
    async fn unary(&self, _call: UnaryCall) -> Result<UnaryReply> {
        Err(TransportError::Status {
            code: self.code,
            message: self.message.clone(),
        })
    }
}

/// A transport whose calls never complete, for cancellation tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingHttpClient;

impl PendingHttpClient {
    /// Create a never-resolving transport.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HttpClient for PendingHttpClient {
    async fn unary(&self, _call: UnaryCall) -> Result<UnaryReply> {
        std::future::pending().await
    }
}
