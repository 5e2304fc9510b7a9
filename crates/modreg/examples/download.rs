//! Example: Download a module through an in-process transport.
//!
//! The SDK is transport-agnostic: any `HttpClient` implementation can be
//! injected. This example wires in a tiny in-process transport so it runs
//! without a registry server:
//!
//! ```bash
//! cargo run --example download
//! ```

use async_trait::async_trait;
use modreg::prelude::*;
use modreg_core::{Metadata, Result as WireResult, UnaryCall, UnaryReply};
use std::sync::Arc;

/// A transport that answers every download with a canned module.
struct InProcessTransport;

#[async_trait]
impl HttpClient for InProcessTransport {
    async fn unary(&self, call: UnaryCall) -> WireResult<UnaryReply> {
        tracing::info!(procedure = %call.procedure, url = %call.url, "handling call in process");
        Ok(UnaryReply {
            metadata: Metadata::new(),
            payload: serde_json::json!({
                "module": {
                    "name": "acme/widgets",
                    "commit": "0123abcd",
                    "files": [{"path": "widgets.schema", "content": "message Widget {}"}],
                }
            }),
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let transport: Arc<dyn HttpClient> = Arc::new(InProcessTransport);
    let client = DownloadServiceClient::new(
        transport,
        "https://registry.example.com",
        ClientOptions::new().with_user_agent("modreg-example/0.1"),
    );

    let cancel = CancellationToken::new();
    let module = client
        .download(&cancel, "acme", "widgets", "main")
        .await?
        .expect("in-process transport always answers with a module");

    tracing::info!(
        module = %module.name,
        commit = %module.commit,
        files = module.files.len(),
        "download complete"
    );
    Ok(())
}
