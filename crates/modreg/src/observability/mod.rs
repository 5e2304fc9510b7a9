//! Tracer-provider abstraction with an explicit shutdown lifecycle.
//!
//! The host application supplies any tracing backend that satisfies
//! [`TracerProvider`]; the rest of the process manages it through the
//! uniform [`Closer`] surface produced by [`new_tracer_provider_closer`],
//! so lifecycle code never depends on the concrete tracing library.
//!
//! # Example
//!
//! ```ignore
//! let provider = Arc::new(MyBackend::new());
//! let closer = new_tracer_provider_closer(provider);
//!
//! let tracer = closer.tracer("modreg", TracerOptions::new());
//! let mut span = tracer.start_span("download");
//! // ... do work ...
//! span.end();
//!
//! // at process teardown, exactly once:
//! closer.close(&cancel).await?;
//! ```

use async_trait::async_trait;
use modreg_core::CancellationToken;
use std::sync::Arc;
use thiserror::Error;

#[cfg(feature = "otel")]
pub mod otel;

/// Errors reported by the tracing-backend lifecycle.
///
/// Never fatal by itself; the owning process decides whether to log, exit
/// non-zero, or ignore.
#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// Shutdown was cancelled before the backend finished flushing.
    #[error("shutdown cancelled")]
    Cancelled,

    /// The backend failed to flush or stop.
    #[error("flush failed: {0}")]
    Flush(String),
}

/// An in-flight span handle.
pub trait Span: Send {
    /// End the span, recording its duration.
    fn end(&mut self);
}

/// A named tracer capable of starting spans.
pub trait Tracer: Send + Sync {
    /// Start a span with the given name.
    fn start_span(&self, name: &str) -> Box<dyn Span>;
}

/// Options applied when obtaining a named tracer.
#[derive(Debug, Clone, Default)]
pub struct TracerOptions {
    instrumentation_version: Option<String>,
    schema_url: Option<String>,
}

impl TracerOptions {
    /// Create options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the version of the instrumented library.
    #[must_use]
    pub fn with_instrumentation_version(mut self, version: impl Into<String>) -> Self {
        self.instrumentation_version = Some(version.into());
        self
    }

    /// Record the telemetry schema URL.
    #[must_use]
    pub fn with_schema_url(mut self, schema_url: impl Into<String>) -> Self {
        self.schema_url = Some(schema_url.into());
        self
    }

    /// The recorded instrumentation version, if any.
    #[must_use]
    pub fn instrumentation_version(&self) -> Option<&str> {
        self.instrumentation_version.as_deref()
    }

    /// The recorded schema URL, if any.
    #[must_use]
    pub fn schema_url(&self) -> Option<&str> {
        self.schema_url.as_deref()
    }
}

/// The capability a tracing backend must provide.
///
/// `tracer` must be safe to call concurrently for the same or different
/// names. `shutdown` is expected to be called at most once, from a single
/// coordinating task, after all concurrent users have quiesced; enforcing
/// that ordering is the caller's job.
#[async_trait]
pub trait TracerProvider: Send + Sync {
    /// Obtain a named tracer.
    fn tracer(&self, name: &str, options: TracerOptions) -> Arc<dyn Tracer>;

    /// Flush and stop the backend.
    ///
    /// Blocks until the flush completes or `cancel` fires, whichever comes
    /// first.
    ///
    /// # Errors
    ///
    /// Returns an error if the flush could not complete.
    async fn shutdown(&self, cancel: &CancellationToken) -> Result<(), ObservabilityError>;
}

/// A uniformly closable resource.
///
/// Process-wide lifecycle code holds resources through this surface alone,
/// agnostic to what kind of resource it is closing.
#[async_trait]
pub trait Closer: Send + Sync {
    /// Release the resource.
    ///
    /// # Errors
    ///
    /// Returns the underlying release failure unchanged.
    async fn close(&self, cancel: &CancellationToken) -> Result<(), ObservabilityError>;
}

/// A tracer provider that can also be closed through the uniform surface.
pub trait TracerProviderCloser: TracerProvider + Closer {}

impl<T: TracerProvider + Closer> TracerProviderCloser for T {}

/// Wrap a tracing backend into a process-wide closable resource.
///
/// The returned value serves `tracer` calls by delegating to the backend;
/// its `close` calls the backend's `shutdown` with the token supplied at
/// close time and propagates the backend's error unchanged. The active to
/// closed transition is driven externally, exactly once, at process
/// teardown.
#[must_use]
pub fn new_tracer_provider_closer(
    provider: Arc<dyn TracerProvider>,
) -> Arc<dyn TracerProviderCloser> {
    Arc::new(ProviderCloser { provider })
}

struct ProviderCloser {
    provider: Arc<dyn TracerProvider>,
}

#[async_trait]
impl TracerProvider for ProviderCloser {
    fn tracer(&self, name: &str, options: TracerOptions) -> Arc<dyn Tracer> {
        self.provider.tracer(name, options)
    }

    async fn shutdown(&self, cancel: &CancellationToken) -> Result<(), ObservabilityError> {
        self.provider.shutdown(cancel).await
    }
}

#[async_trait]
impl Closer for ProviderCloser {
    async fn close(&self, cancel: &CancellationToken) -> Result<(), ObservabilityError> {
        tracing::debug!("shutting down tracer provider");
        self.provider.shutdown(cancel).await
    }
}

/// A backend that records nothing: the disabled-tracing path.
///
/// Every tracer it hands out starts no-op spans, and shutdown always
/// succeeds immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTracerProvider;

#[async_trait]
impl TracerProvider for NoopTracerProvider {
    fn tracer(&self, _name: &str, _options: TracerOptions) -> Arc<dyn Tracer> {
        Arc::new(NoopTracer)
    }

    async fn shutdown(&self, _cancel: &CancellationToken) -> Result<(), ObservabilityError> {
        Ok(())
    }
}

struct NoopTracer;

impl Tracer for NoopTracer {
    fn start_span(&self, _name: &str) -> Box<dyn Span> {
        Box::new(NoopSpan)
    }
}

struct NoopSpan;

impl Span for NoopSpan {
    fn end(&mut self) {}
}
