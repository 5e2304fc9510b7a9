//! Low-level wire bindings for the modreg registry SDK.
//!
//! This crate provides a stable abstraction over the generated wire layer,
//! isolating the rest of the SDK from changes in the wire schema and in the
//! transport implementation underneath it.
//!
//! Most users should use the high-level `modreg` crate instead.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod envelope;
pub mod error;
pub mod options;
pub mod proto;
pub mod stub;
pub mod transport;

pub use envelope::{Metadata, Request, Response};
pub use error::{Result, TransportError};
pub use options::ClientOptions;
pub use stub::{DownloadServiceStub, RepositoryServiceStub};
pub use transport::{HttpClient, UnaryCall, UnaryReply};

pub use tokio_util::sync::CancellationToken;
pub use url::Url;
