//! Tests for the generated-style stubs: URL construction, option
//! application, and cancellation behavior at the wire seam.

use modreg_core::proto::DownloadRequest;
use modreg_core::stub::procedures;
use modreg_core::{
    CancellationToken, ClientOptions, DownloadServiceStub, Request, TransportError,
};
use modreg_testing::fixtures::TEST_ADDRESS;
use modreg_testing::{PendingHttpClient, StaticHttpClient};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

fn download_request() -> Request<DownloadRequest> {
    Request::new(DownloadRequest {
        owner: "acme".into(),
        repository: "widgets".into(),
        reference: "main".into(),
    })
}

#[tokio::test]
async fn stub_builds_procedure_url_from_address() {
    let transport = Arc::new(StaticHttpClient::new());
    transport.reply_with(procedures::DOWNLOAD, json!({}));
    let stub = DownloadServiceStub::new(transport.clone(), TEST_ADDRESS, ClientOptions::new());

    let cancel = CancellationToken::new();
    stub.download(&cancel, download_request())
        .await
        .expect("download should succeed");

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].url.as_str(),
        "https://registry.test.invalid/registry.v1.DownloadService/Download"
    );
    assert_eq!(calls[0].procedure, procedures::DOWNLOAD);
}

#[tokio::test]
async fn stub_serializes_request_message() {
    let transport = Arc::new(StaticHttpClient::new());
    transport.reply_with(procedures::DOWNLOAD, json!({}));
    let stub = DownloadServiceStub::new(transport.clone(), TEST_ADDRESS, ClientOptions::new());

    let cancel = CancellationToken::new();
    stub.download(&cancel, download_request())
        .await
        .expect("download should succeed");

    let calls = transport.calls();
    assert_eq!(
        calls[0].payload,
        json!({"owner": "acme", "repository": "widgets", "reference": "main"})
    );
}

#[tokio::test]
async fn client_options_headers_reach_the_transport() {
    let transport = Arc::new(StaticHttpClient::new());
    transport.reply_with(procedures::DOWNLOAD, json!({}));
    let options = ClientOptions::new()
        .with_header("x-test", "1")
        .with_user_agent("modreg-test/0.1");
    let stub = DownloadServiceStub::new(transport.clone(), TEST_ADDRESS, options);

    let cancel = CancellationToken::new();
    stub.download(&cancel, download_request())
        .await
        .expect("download should succeed");

    let calls = transport.calls();
    assert_eq!(calls[0].metadata.get("x-test"), Some("1"));
    assert_eq!(calls[0].metadata.get("user-agent"), Some("modreg-test/0.1"));
}

#[tokio::test]
async fn request_headers_are_preserved_alongside_client_headers() {
    let transport = Arc::new(StaticHttpClient::new());
    transport.reply_with(procedures::DOWNLOAD, json!({}));
    let options = ClientOptions::new().with_header("x-client", "c");
    let stub = DownloadServiceStub::new(transport.clone(), TEST_ADDRESS, options);

    let cancel = CancellationToken::new();
    let request = download_request().with_header("x-request", "r");
    stub.download(&cancel, request)
        .await
        .expect("download should succeed");

    let calls = transport.calls();
    assert_eq!(calls[0].metadata.get("x-request"), Some("r"));
    assert_eq!(calls[0].metadata.get("x-client"), Some("c"));
}

#[tokio::test]
async fn unparseable_address_fails_at_call_time_not_construction() {
    let transport = Arc::new(StaticHttpClient::new());
    let stub = DownloadServiceStub::new(transport, "not a url", ClientOptions::new());
    assert_eq!(stub.address(), "not a url");

    let cancel = CancellationToken::new();
    let result = stub.download(&cancel, download_request()).await;
    assert!(matches!(result, Err(TransportError::InvalidAddress(_))));
}

#[tokio::test]
async fn pre_cancelled_token_short_circuits_the_call() {
    let transport = Arc::new(PendingHttpClient::new());
    let stub = DownloadServiceStub::new(transport, TEST_ADDRESS, ClientOptions::new());

    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = tokio::time::timeout(
        Duration::from_secs(1),
        stub.download(&cancel, download_request()),
    )
    .await
    .expect("cancelled call should return promptly");
    assert!(matches!(result, Err(TransportError::Cancelled)));
}

#[tokio::test]
async fn client_timeout_produces_deadline_exceeded() {
    let transport = Arc::new(PendingHttpClient::new());
    let options = ClientOptions::new().with_timeout(Duration::from_millis(20));
    let stub = DownloadServiceStub::new(transport, TEST_ADDRESS, options);

    let cancel = CancellationToken::new();
    let result = tokio::time::timeout(
        Duration::from_secs(1),
        stub.download(&cancel, download_request()),
    )
    .await
    .expect("timed-out call should return promptly");
    assert!(matches!(result, Err(TransportError::DeadlineExceeded)));
}

#[tokio::test]
async fn malformed_reply_payload_surfaces_as_codec_error() {
    let transport = Arc::new(StaticHttpClient::new());
    transport.reply_with(procedures::DOWNLOAD, json!({"module": 42}));
    let stub = DownloadServiceStub::new(transport, TEST_ADDRESS, ClientOptions::new());

    let cancel = CancellationToken::new();
    let result = stub.download(&cancel, download_request()).await;
    assert!(matches!(result, Err(TransportError::Codec(_))));
}

#[tokio::test]
async fn reply_metadata_stays_in_the_envelope() {
    let transport = Arc::new(StaticHttpClient::new());
    transport.reply_with(procedures::DOWNLOAD, json!({}));
    let stub = DownloadServiceStub::new(transport, TEST_ADDRESS, ClientOptions::new());

    let cancel = CancellationToken::new();
    let response = stub
        .download(&cancel, download_request())
        .await
        .expect("download should succeed");
    assert_eq!(response.metadata().get("x-test-reply"), Some("1"));
    assert!(response.message().module.is_none());
}
