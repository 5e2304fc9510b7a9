//! Generated-style stubs for the registry services.
//!
//! One stub per remote service, each bound at construction to a transport,
//! an address, and client options. The shape mirrors what the schema
//! code-generation pipeline emits, so adding a service stays mechanical:
//! declare its procedures and delegate every operation to the shared unary
//! driver.

use crate::envelope::{Request, Response};
use crate::error::{Result, TransportError};
use crate::options::ClientOptions;
use crate::proto::{
    DownloadRequest, DownloadResponse, GetRepositoryByFullNameRequest,
    GetRepositoryByFullNameResponse, GetRepositoryRequest, GetRepositoryResponse,
};
use crate::transport::{HttpClient, UnaryCall, UnaryReply};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use url::Url;

/// Procedure paths for the registry's v1 services.
pub mod procedures {
    /// Download a module.
    pub const DOWNLOAD: &str = "registry.v1.DownloadService/Download";
    /// Fetch a repository by id.
    pub const GET_REPOSITORY: &str = "registry.v1.RepositoryService/GetRepository";
    /// Fetch a repository by its full name.
    pub const GET_REPOSITORY_BY_FULL_NAME: &str =
        "registry.v1.RepositoryService/GetRepositoryByFullName";
}

/// Stub for the download service.
#[derive(Clone)]
pub struct DownloadServiceStub {
    inner: StubInner,
}

impl DownloadServiceStub {
    /// Bind a stub to a transport, an address, and client options.
    ///
    /// Performs no I/O; an unusable address only surfaces once a call is
    /// made.
    #[must_use]
    pub fn new(
        http_client: Arc<dyn HttpClient>,
        address: impl Into<String>,
        options: ClientOptions,
    ) -> Self {
        Self {
            inner: StubInner::new(http_client, address, options),
        }
    }

    /// The address this stub is bound to.
    #[must_use]
    pub fn address(&self) -> &str {
        self.inner.address()
    }

    /// Issue the download RPC.
    ///
    /// # Errors
    ///
    /// Returns the transport's failure untouched.
    pub async fn download(
        &self,
        cancel: &CancellationToken,
        request: Request<DownloadRequest>,
    ) -> Result<Response<DownloadResponse>> {
        self.inner.unary(cancel, procedures::DOWNLOAD, request).await
    }
}

/// Stub for the repository service.
#[derive(Clone)]
pub struct RepositoryServiceStub {
    inner: StubInner,
}

impl RepositoryServiceStub {
    /// Bind a stub to a transport, an address, and client options.
    ///
    /// Performs no I/O; an unusable address only surfaces once a call is
    /// made.
    #[must_use]
    pub fn new(
        http_client: Arc<dyn HttpClient>,
        address: impl Into<String>,
        options: ClientOptions,
    ) -> Self {
        Self {
            inner: StubInner::new(http_client, address, options),
        }
    }

    /// The address this stub is bound to.
    #[must_use]
    pub fn address(&self) -> &str {
        self.inner.address()
    }

    /// Issue the get-repository RPC.
    ///
    /// # Errors
    ///
    /// Returns the transport's failure untouched.
    pub async fn get_repository(
        &self,
        cancel: &CancellationToken,
        request: Request<GetRepositoryRequest>,
    ) -> Result<Response<GetRepositoryResponse>> {
        self.inner
            .unary(cancel, procedures::GET_REPOSITORY, request)
            .await
    }

    /// Issue the get-repository-by-full-name RPC.
    ///
    /// # Errors
    ///
    /// Returns the transport's failure untouched.
    pub async fn get_repository_by_full_name(
        &self,
        cancel: &CancellationToken,
        request: Request<GetRepositoryByFullNameRequest>,
    ) -> Result<Response<GetRepositoryByFullNameResponse>> {
        self.inner
            .unary(cancel, procedures::GET_REPOSITORY_BY_FULL_NAME, request)
            .await
    }
}

/// Per-stub state shared by every service, plus the unary call driver.
#[derive(Clone)]
struct StubInner {
    http_client: Arc<dyn HttpClient>,
    address: String,
    options: ClientOptions,
}

impl StubInner {
    fn new(
        http_client: Arc<dyn HttpClient>,
        address: impl Into<String>,
        options: ClientOptions,
    ) -> Self {
        Self {
            http_client,
            address: address.into(),
            options,
        }
    }

    fn address(&self) -> &str {
        &self.address
    }

    fn procedure_url(&self, procedure: &str) -> Result<Url> {
        let url = format!("{}/{}", self.address.trim_end_matches('/'), procedure);
        Ok(Url::parse(&url)?)
    }

    /// Drive one unary round trip: serialize, dispatch, deserialize.
    ///
    /// Exactly one transport call per invocation; no retries, no caching.
    async fn unary<Req, Resp>(
        &self,
        cancel: &CancellationToken,
        procedure: &'static str,
        request: Request<Req>,
    ) -> Result<Response<Resp>>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let url = self.procedure_url(procedure)?;
        let (message, mut metadata) = request.into_parts();
        for (name, value) in self.options.headers() {
            metadata.insert(name, value);
        }
        if let Some(user_agent) = self.options.user_agent() {
            metadata.insert("user-agent", user_agent);
        }
        let payload = serde_json::to_value(&message)?;
        let call = UnaryCall {
            url,
            procedure,
            metadata,
            payload,
        };

        tracing::debug!(procedure = %procedure, "sending unary request");
        let reply = self.round_trip(cancel, call).await?;
        let message: Resp = serde_json::from_value(reply.payload)?;
        Ok(Response::new(message, reply.metadata))
    }

    /// Race the transport call against cancellation and the client timeout.
    async fn round_trip(&self, cancel: &CancellationToken, call: UnaryCall) -> Result<UnaryReply> {
        let procedure = call.procedure;
        let fut = self.http_client.unary(call);
        let result = match self.options.timeout() {
            Some(limit) => {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => Err(TransportError::Cancelled),
                    outcome = tokio::time::timeout(limit, fut) => match outcome {
                        Ok(result) => result,
                        Err(_) => Err(TransportError::DeadlineExceeded),
                    },
                }
            }
            None => {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => Err(TransportError::Cancelled),
                    result = fut => result,
                }
            }
        };
        if let Err(ref error) = result {
            tracing::debug!(procedure = %procedure, error = %error, "unary request failed");
        }
        result
    }
}
