//! Rust SDK for the modreg module registry.
//!
//! This crate provides stable, domain-typed clients for the registry's
//! remote services, plus a tracing-backend abstraction that lets a host
//! application plug in any distributed-tracing implementation and manage
//! its lifecycle uniformly.
//!
//! # Quick Start
//!
//! ```ignore
//! use modreg::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let http_client: Arc<dyn HttpClient> = Arc::new(MyTransport::new());
//!     let client = DownloadServiceClient::new(
//!         http_client,
//!         "https://registry.example.com",
//!         ClientOptions::new(),
//!     );
//!
//!     let cancel = CancellationToken::new();
//!     let module = client.download(&cancel, "acme", "widgets", "main").await?;
//!     println!("downloaded: {:?}", module.map(|m| m.name));
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`client`] - Domain-typed clients for the registry services
//! - [`observability`] - Tracer-provider abstraction and lifecycle wrapper
//! - [`error`] - Error types
//!
//! # Feature Flags
//!
//! - `otel` - OpenTelemetry adapter for the tracer-provider abstraction

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod client;
pub mod error;
pub mod observability;

pub mod prelude {
    //! Convenient re-exports for common usage.
    //!
    //! ```ignore
    //! use modreg::prelude::*;
    //! ```

    pub use crate::client::{DownloadServiceClient, RepositoryServiceClient};
    pub use crate::error::Error;
    pub use crate::observability::{
        new_tracer_provider_closer, Closer, NoopTracerProvider, Tracer, TracerOptions,
        TracerProvider, TracerProviderCloser,
    };
    pub use modreg_core::proto::{Module, Repository};
    pub use modreg_core::{CancellationToken, ClientOptions, HttpClient, TransportError};
}

pub use modreg_core::{CancellationToken, ClientOptions, HttpClient, TransportError};
