//! Integration tests for the download module.
//!
//! These tests verify the full download flow with mock HTTP servers.

use doc_mirror::download::{DownloadError, FileDownloader, to_local_path};
use doc_mirror::http::{HttpSettings, build_http_client};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn downloader() -> FileDownloader {
    let settings = HttpSettings {
        timeout_secs: 5,
        follow_redirects: true,
    };
    FileDownloader::new(build_http_client(&settings).expect("client should build"))
}

/// Helper to create a mock server with a file endpoint.
async fn setup_mock_file(path_str: &str, content: &str) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(path_str))
        .respond_with(ResponseTemplate::new(200).set_body_string(content))
        .mount(&mock_server)
        .await;

    mock_server
}

#[tokio::test]
async fn test_download_full_flow_preserves_content() {
    let content = "# Messages API\n\nSend a message.\n";
    let mock_server = setup_mock_file("/en/api/messages.md", content).await;
    let temp_dir = TempDir::new().expect("failed to create temp dir");

    let url = format!("{}/en/api/messages.md", mock_server.uri());
    let target = to_local_path(&url, temp_dir.path(), "local").expect("path should map");
    let result = downloader().download(&url, &target).await;

    assert!(
        result.is_ok(),
        "Download should succeed: {:?}",
        result.err()
    );
    assert_eq!(result.unwrap(), content.len());
    assert_eq!(
        target,
        temp_dir
            .path()
            .join("local")
            .join("en")
            .join("api")
            .join("messages.md")
    );
    assert_eq!(std::fs::read_to_string(&target).unwrap(), content);
}

#[tokio::test]
async fn test_download_creates_missing_parent_directories() {
    let mock_server = setup_mock_file("/deep/doc.md", "deep").await;
    let temp_dir = TempDir::new().expect("failed to create temp dir");

    // Target whose directory chain does not exist yet.
    let target = temp_dir.path().join("x").join("y").join("z").join("doc.md");
    let url = format!("{}/deep/doc.md", mock_server.uri());

    downloader()
        .download(&url, &target)
        .await
        .expect("download should create directories");

    assert!(target.is_file());
    assert_eq!(std::fs::read_to_string(&target).unwrap(), "deep");
}

#[tokio::test]
async fn test_download_overwrites_existing_file() {
    let mock_server = setup_mock_file("/doc.md", "fresh").await;
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let target = temp_dir.path().join("doc.md");
    std::fs::write(&target, "stale content that is longer").unwrap();

    let url = format!("{}/doc.md", mock_server.uri());
    downloader().download(&url, &target).await.unwrap();

    assert_eq!(std::fs::read_to_string(&target).unwrap(), "fresh");
}

#[tokio::test]
async fn test_download_handles_404_gracefully() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().expect("failed to create temp dir");

    Mock::given(method("GET"))
        .and(path("/not-found.md"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let url = format!("{}/not-found.md", mock_server.uri());
    let target = temp_dir.path().join("not-found.md");
    let result = downloader().download(&url, &target).await;

    match result {
        Err(DownloadError::HttpStatus { status, .. }) => assert_eq!(status, 404),
        other => panic!("Expected HttpStatus error, got: {other:?}"),
    }
    assert!(!target.exists(), "No file should be written on HTTP error");
}

#[tokio::test]
async fn test_download_handles_500_gracefully() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().expect("failed to create temp dir");

    Mock::given(method("GET"))
        .and(path("/error.md"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let url = format!("{}/error.md", mock_server.uri());
    let result = downloader()
        .download(&url, &temp_dir.path().join("error.md"))
        .await;

    assert!(matches!(
        result,
        Err(DownloadError::HttpStatus { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_download_write_failure_is_io_error() {
    let mock_server = setup_mock_file("/doc.md", "content").await;
    let temp_dir = TempDir::new().expect("failed to create temp dir");

    // A directory occupies the target path, so the write must fail.
    let target = temp_dir.path().join("doc.md");
    std::fs::create_dir_all(&target).unwrap();

    let url = format!("{}/doc.md", mock_server.uri());
    let result = downloader().download(&url, &target).await;

    assert!(
        matches!(result, Err(DownloadError::Io { .. })),
        "Expected Io error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_download_network_error_on_unreachable_host() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let result = downloader()
        .download("http://127.0.0.1:9/doc.md", &temp_dir.path().join("doc.md"))
        .await;

    assert!(matches!(
        result,
        Err(DownloadError::Network { .. } | DownloadError::Timeout { .. })
    ));
}
