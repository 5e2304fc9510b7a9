//! Domain-typed clients for the registry services.
//!
//! Each client wraps one generated-style stub behind a stable surface:
//! domain parameters in, domain objects out, wire envelopes hidden. Errors
//! from the transport pass through untouched; callers classify them with
//! whatever contract the transport layer defines.
//!
//! # Example
//!
//! ```ignore
//! let client = DownloadServiceClient::new(http_client, address, ClientOptions::new());
//! let module = client.download(&cancel, "acme", "widgets", "main").await?;
//! ```

use modreg_core::proto::{
    DownloadRequest, GetRepositoryByFullNameRequest, GetRepositoryRequest, Module, Repository,
};
use modreg_core::{
    CancellationToken, ClientOptions, DownloadServiceStub, HttpClient, RepositoryServiceStub,
    Request, Result,
};
use std::sync::Arc;

/// Client for the download service.
pub struct DownloadServiceClient {
    stub: DownloadServiceStub,
}

impl DownloadServiceClient {
    /// Create a client bound to a transport, an address, and client options.
    ///
    /// Performs no I/O.
    #[must_use]
    pub fn new(
        http_client: Arc<dyn HttpClient>,
        address: impl Into<String>,
        options: ClientOptions,
    ) -> Self {
        Self {
            stub: DownloadServiceStub::new(http_client, address, options),
        }
    }

    /// Download the module identified by `owner/repository` at `reference`.
    ///
    /// One blocking round trip; no retries. Returns `None` when the service
    /// answers without a module payload.
    ///
    /// # Errors
    ///
    /// Any transport or remote failure is returned untouched.
    pub async fn download(
        &self,
        cancel: &CancellationToken,
        owner: &str,
        repository: &str,
        reference: &str,
    ) -> Result<Option<Module>> {
        let response = self
            .stub
            .download(
                cancel,
                Request::new(DownloadRequest {
                    owner: owner.to_owned(),
                    repository: repository.to_owned(),
                    reference: reference.to_owned(),
                }),
            )
            .await?;
        Ok(response.into_message().module)
    }
}

impl std::fmt::Debug for DownloadServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloadServiceClient")
            .field("address", &self.stub.address())
            .finish()
    }
}

/// Client for the repository service.
pub struct RepositoryServiceClient {
    stub: RepositoryServiceStub,
}

impl RepositoryServiceClient {
    /// Create a client bound to a transport, an address, and client options.
    ///
    /// Performs no I/O.
    #[must_use]
    pub fn new(
        http_client: Arc<dyn HttpClient>,
        address: impl Into<String>,
        options: ClientOptions,
    ) -> Self {
        Self {
            stub: RepositoryServiceStub::new(http_client, address, options),
        }
    }

    /// Fetch a repository by its id.
    ///
    /// Returns `None` when the service answers without a repository payload.
    ///
    /// # Errors
    ///
    /// Any transport or remote failure is returned untouched.
    pub async fn get_repository(
        &self,
        cancel: &CancellationToken,
        id: &str,
    ) -> Result<Option<Repository>> {
        let response = self
            .stub
            .get_repository(
                cancel,
                Request::new(GetRepositoryRequest { id: id.to_owned() }),
            )
            .await?;
        Ok(response.into_message().repository)
    }

    /// Fetch a repository by its `owner/name` full name.
    ///
    /// Returns `None` when the service answers without a repository payload.
    ///
    /// # Errors
    ///
    /// Any transport or remote failure is returned untouched.
    pub async fn get_repository_by_full_name(
        &self,
        cancel: &CancellationToken,
        full_name: &str,
    ) -> Result<Option<Repository>> {
        let response = self
            .stub
            .get_repository_by_full_name(
                cancel,
                Request::new(GetRepositoryByFullNameRequest {
                    full_name: full_name.to_owned(),
                }),
            )
            .await?;
        Ok(response.into_message().repository)
    }
}

impl std::fmt::Debug for RepositoryServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepositoryServiceClient")
            .field("address", &self.stub.address())
            .finish()
    }
}
