//! Testing utilities for the modreg SDK.
//!
//! This crate provides fake transports and fake tracing backends so client
//! and lifecycle behavior can be exercised without a network stack or a
//! real tracing library.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod fixtures;
pub mod observability;
pub mod transport;

pub use observability::{CountingTracer, FakeTracerProvider};
pub use transport::{FailingHttpClient, PendingHttpClient, StaticHttpClient};
