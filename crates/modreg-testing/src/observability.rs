//! Fake tracing backends for lifecycle tests.

use async_trait::async_trait;
use modreg::observability::{ObservabilityError, Span, Tracer, TracerOptions, TracerProvider};
use modreg_core::CancellationToken;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// A tracing backend that counts invocations and can inject a shutdown
/// failure.
#[derive(Default)]
pub struct FakeTracerProvider {
    fail: Option<String>,
    tracer_calls: AtomicUsize,
    shutdown_calls: AtomicUsize,
    token_cancelled_at_shutdown: AtomicBool,
}

impl FakeTracerProvider {
    /// A backend whose shutdown succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose shutdown fails with the given message.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail: Some(message.into()),
            ..Self::default()
        }
    }

    /// Number of `tracer` calls observed.
    #[must_use]
    pub fn tracer_calls(&self) -> usize {
        self.tracer_calls.load(Ordering::SeqCst)
    }

    /// Number of `shutdown` calls observed.
    #[must_use]
    pub fn shutdown_calls(&self) -> usize {
        self.shutdown_calls.load(Ordering::SeqCst)
    }

    /// Whether the token passed to `shutdown` was already cancelled.
    #[must_use]
    pub fn token_cancelled_at_shutdown(&self) -> bool {
        self.token_cancelled_at_shutdown.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TracerProvider for FakeTracerProvider {
    fn tracer(&self, _name: &str, _options: TracerOptions) -> Arc<dyn Tracer> {
        self.tracer_calls.fetch_add(1, Ordering::SeqCst);
        Arc::new(CountingTracer::default())
    }

    async fn shutdown(&self, cancel: &CancellationToken) -> Result<(), ObservabilityError> {
        self.shutdown_calls.fetch_add(1, Ordering::SeqCst);
        self.token_cancelled_at_shutdown
            .store(cancel.is_cancelled(), Ordering::SeqCst);
        match &self.fail {
            Some(message) => Err(ObservabilityError::Flush(message.clone())),
            None => Ok(()),
        }
    }
}

/// A tracer that counts the spans it starts.
#[derive(Default)]
pub struct CountingTracer {
    spans: AtomicUsize,
}

impl CountingTracer {
    /// Number of spans started on this tracer.
    #[must_use]
    pub fn spans_started(&self) -> usize {
        self.spans.load(Ordering::SeqCst)
    }
}

impl Tracer for CountingTracer {
    fn start_span(&self, _name: &str) -> Box<dyn Span> {
        self.spans.fetch_add(1, Ordering::SeqCst);
        Box::new(CountingSpan)
    }
}

struct CountingSpan;

impl Span for CountingSpan {
    fn end(&mut self) {}
}
