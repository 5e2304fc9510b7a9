//! Wire message types for the registry services.
//!
//! These structs mirror what the schema code-generation pipeline emits for
//! the registry's v1 services; they carry no behavior beyond serialization.

use serde::{Deserialize, Serialize};

/// A resolved module, the artifact returned by a download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Module name.
    pub name: String,
    /// Commit the requested reference resolved to.
    #[serde(default)]
    pub commit: String,
    /// Files making up the module.
    #[serde(default)]
    pub files: Vec<ModuleFile>,
}

/// A single file within a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleFile {
    /// Path of the file within the module, relative to the module root.
    pub path: String,
    /// File contents.
    #[serde(default)]
    pub content: String,
}

/// Request message for the download operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRequest {
    /// Owner of the repository to download from.
    pub owner: String,
    /// Repository to download from.
    pub repository: String,
    /// Reference to resolve: a branch, tag, or commit.
    pub reference: String,
}

/// Response message for the download operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadResponse {
    /// The resolved module, if the service produced one.
    #[serde(default)]
    pub module: Option<Module>,
}

/// Visibility of a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Readable by anyone.
    Public,
    /// Readable by the owner and collaborators only.
    Private,
}

/// A repository registered with the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Opaque repository id.
    pub id: String,
    /// Owner of the repository.
    pub owner: String,
    /// Repository name.
    pub name: String,
    /// Repository visibility.
    pub visibility: Visibility,
}

/// Request message for fetching a repository by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRepositoryRequest {
    /// Id of the repository to fetch.
    pub id: String,
}

/// Response message for fetching a repository by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRepositoryResponse {
    /// The repository, if the service found one.
    #[serde(default)]
    pub repository: Option<Repository>,
}

/// Request message for fetching a repository by its `owner/name` full name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRepositoryByFullNameRequest {
    /// Full name of the repository, e.g. `acme/widgets`.
    pub full_name: String,
}

/// Response message for fetching a repository by full name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRepositoryByFullNameResponse {
    /// The repository, if the service found one.
    #[serde(default)]
    pub repository: Option<Repository>,
}
