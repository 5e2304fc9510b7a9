//! OpenTelemetry backend adapter.
//!
//! Implements [`TracerProvider`] for the OpenTelemetry SDK tracer provider,
//! so an application already running OpenTelemetry can hand its provider to
//! [`new_tracer_provider_closer`](super::new_tracer_provider_closer)
//! unchanged.

use super::{ObservabilityError, Span, Tracer, TracerOptions, TracerProvider};
use async_trait::async_trait;
use modreg_core::CancellationToken;
use opentelemetry::trace::{Span as _, Tracer as _, TracerProvider as _};
use std::sync::Arc;

/// Adapter around an OpenTelemetry SDK tracer provider.
#[derive(Clone)]
pub struct OtelTracerProvider {
    provider: opentelemetry_sdk::trace::TracerProvider,
}

impl OtelTracerProvider {
    /// Wrap an SDK tracer provider.
    #[must_use]
    pub fn new(provider: opentelemetry_sdk::trace::TracerProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl TracerProvider for OtelTracerProvider {
    fn tracer(&self, name: &str, options: TracerOptions) -> Arc<dyn Tracer> {
        let tracer = self.provider.versioned_tracer(
            name.to_owned(),
            options.instrumentation_version().map(str::to_owned),
            options.schema_url().map(str::to_owned),
            None,
        );
        Arc::new(OtelTracer { tracer })
    }

    async fn shutdown(&self, cancel: &CancellationToken) -> Result<(), ObservabilityError> {
        // force_flush blocks on exporter I/O; keep it off the async runtime.
        let provider = self.provider.clone();
        let flush = tokio::task::spawn_blocking(move || -> Result<(), ObservabilityError> {
            for result in provider.force_flush() {
                result.map_err(|e| ObservabilityError::Flush(e.to_string()))?;
            }
            Ok(())
        });
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(ObservabilityError::Cancelled),
            joined = flush => joined.map_err(|e| ObservabilityError::Flush(e.to_string()))?,
        }
    }
}

struct OtelTracer {
    tracer: opentelemetry_sdk::trace::Tracer,
}

impl Tracer for OtelTracer {
    fn start_span(&self, name: &str) -> Box<dyn Span> {
        Box::new(OtelSpan {
            span: self.tracer.start(name.to_owned()),
        })
    }
}

struct OtelSpan {
    span: opentelemetry_sdk::trace::Span,
}

impl Span for OtelSpan {
    fn end(&mut self) {
        self.span.end();
    }
}
