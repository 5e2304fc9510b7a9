//! Tests for the domain-typed registry clients.
//!
//! All of these run against fake transports from `modreg-testing`; no
//! network stack is involved.

use modreg::prelude::*;
use modreg_core::stub::procedures;
use modreg_testing::fixtures::{self, TEST_ADDRESS, TEST_OWNER, TEST_REPOSITORY};
use modreg_testing::{FailingHttpClient, PendingHttpClient, StaticHttpClient};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

fn download_client(transport: Arc<dyn HttpClient>) -> DownloadServiceClient {
    DownloadServiceClient::new(transport, TEST_ADDRESS, ClientOptions::new())
}

#[tokio::test]
async fn download_returns_exactly_the_module_payload() {
    let transport = Arc::new(StaticHttpClient::new());
    transport.reply_with(procedures::DOWNLOAD, json!({"module": {"name": "example"}}));
    let client = download_client(transport);

    let cancel = CancellationToken::new();
    let module = client
        .download(&cancel, TEST_OWNER, TEST_REPOSITORY, "main")
        .await
        .expect("download should succeed")
        .expect("service answered with a module");

    assert_eq!(module.name, "example");
    assert_eq!(module.commit, "");
    assert!(module.files.is_empty());
}

#[tokio::test]
async fn download_with_full_module_payload() {
    let transport = Arc::new(StaticHttpClient::new());
    transport.reply_with(
        procedures::DOWNLOAD,
        json!({
            "module": {
                "name": "example",
                "commit": "0123abcd",
                "files": [{"path": "widgets.schema", "content": "message Widget {}"}],
            }
        }),
    );
    let client = download_client(transport);

    let cancel = CancellationToken::new();
    let module = client
        .download(&cancel, TEST_OWNER, TEST_REPOSITORY, "0123abcd")
        .await
        .expect("download should succeed")
        .expect("service answered with a module");

    assert_eq!(module.commit, "0123abcd");
    assert_eq!(module.files.len(), 1);
    assert_eq!(module.files[0].path, "widgets.schema");
}

#[tokio::test]
async fn download_without_module_payload_returns_none() {
    let transport = Arc::new(StaticHttpClient::new());
    transport.reply_with(procedures::DOWNLOAD, json!({}));
    let client = download_client(transport);

    let cancel = CancellationToken::new();
    let module = client
        .download(&cancel, TEST_OWNER, TEST_REPOSITORY, "main")
        .await
        .expect("download should succeed");
    assert!(module.is_none());
}

#[tokio::test]
async fn transport_error_passes_through_unwrapped() {
    let transport = Arc::new(FailingHttpClient::new(14, "unavailable"));
    let client = download_client(transport);

    let cancel = CancellationToken::new();
    let reference = fixtures::unique_reference("ref");
    let error = client
        .download(&cancel, TEST_OWNER, TEST_REPOSITORY, &reference)
        .await
        .expect_err("transport failure must surface");

    match error {
        TransportError::Status { code, message } => {
            assert_eq!(code, 14);
            assert_eq!(message, "unavailable");
        }
        other => panic!("expected the transport's status error, got {other:?}"),
    }
}

#[tokio::test]
async fn cancellation_mid_flight_returns_promptly() {
    let transport = Arc::new(PendingHttpClient::new());
    let client = download_client(transport);

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        trigger.cancel();
    });

    let result = tokio::time::timeout(
        Duration::from_secs(2),
        client.download(&cancel, TEST_OWNER, TEST_REPOSITORY, "main"),
    )
    .await
    .expect("cancelled call must not hang");
    assert!(matches!(result, Err(TransportError::Cancelled)));
}

#[tokio::test]
async fn concurrent_downloads_are_independent() {
    let transport = Arc::new(StaticHttpClient::new());
    transport.reply_with(procedures::DOWNLOAD, json!({"module": {"name": "example"}}));
    let client = Arc::new(download_client(transport.clone()));

    let mut handles = Vec::new();
    for _ in 0..16 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            let cancel = CancellationToken::new();
            client
                .download(&cancel, TEST_OWNER, TEST_REPOSITORY, "main")
                .await
        }));
    }
    for handle in handles {
        let module = handle
            .await
            .expect("task should not panic")
            .expect("download should succeed")
            .expect("service answered with a module");
        assert_eq!(module.name, "example");
    }
    assert_eq!(transport.calls().len(), 16);
}

#[tokio::test]
async fn repository_client_unwraps_its_envelope() {
    let transport = Arc::new(StaticHttpClient::new());
    transport.reply_with(
        procedures::GET_REPOSITORY,
        json!({
            "repository": {
                "id": "repo-1",
                "owner": TEST_OWNER,
                "name": TEST_REPOSITORY,
                "visibility": "public",
            }
        }),
    );
    let client = RepositoryServiceClient::new(transport, TEST_ADDRESS, ClientOptions::new());

    let cancel = CancellationToken::new();
    let repository = client
        .get_repository(&cancel, "repo-1")
        .await
        .expect("lookup should succeed")
        .expect("service answered with a repository");

    assert_eq!(repository.id, "repo-1");
    assert_eq!(repository.owner, TEST_OWNER);
    assert_eq!(repository.name, TEST_REPOSITORY);
}

#[tokio::test]
async fn repository_lookup_by_full_name_sends_the_full_name() {
    let transport = Arc::new(StaticHttpClient::new());
    transport.reply_with(procedures::GET_REPOSITORY_BY_FULL_NAME, json!({}));
    let client =
        RepositoryServiceClient::new(transport.clone(), TEST_ADDRESS, ClientOptions::new());

    let cancel = CancellationToken::new();
    let repository = client
        .get_repository_by_full_name(&cancel, "acme/widgets")
        .await
        .expect("lookup should succeed");
    assert!(repository.is_none());

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].payload, json!({"full_name": "acme/widgets"}));
}
