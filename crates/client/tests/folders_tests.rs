//! Folder endpoint tests.
//!
//! This module tests the Grafana folder API:
//! - Creating folders
//! - Resolving a folder by title
//! - The find-or-create flow
//!
//! # Invariants
//! - Title matching is case-insensitive and covers the whole title
//! - A failed listing is never reported as `FolderNotFound`

mod common;

use common::*;
use wiremock::matchers::{body_json, method, path, query_param};

#[tokio::test]
async fn test_create_folder_returns_created_folder() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/folders"))
        .and(body_json(serde_json::json!({"title": "Department ABC"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("folders/create_folder.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, TEST_TOKEN);
    let folder = client.create_folder("Department ABC").await.unwrap();

    assert_eq!(folder.id, 1);
    assert_eq!(folder.uid, "nErXDvCkzz");
    assert_eq!(folder.title, "Department ABC");
}

#[tokio::test]
async fn test_create_folder_failure_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/folders"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "message": "The folder has been changed by someone else",
            "status": "version-mismatch"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, TEST_TOKEN);
    let err = client.create_folder("Department ABC").await.unwrap_err();

    match err {
        ClientError::ApiError {
            status,
            message,
            status_text,
            url,
        } => {
            assert_eq!(status, 400);
            assert_eq!(message, "The folder has been changed by someone else");
            assert_eq!(status_text.as_deref(), Some("version-mismatch"));
            assert!(url.ends_with("/api/folders"));
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_folder_invalid_body_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/folders"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, TEST_TOKEN);
    let err = client.create_folder("Department ABC").await.unwrap_err();

    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_list_folders_requests_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/folders"))
        .and(query_param("limit", "1000"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("folders/list_folders.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let folders = endpoints::list_folders(
        &Client::new(),
        &mock_server.uri(),
        &grafana_client::AuthStrategy::from_token(TEST_TOKEN),
        None,
    )
    .await
    .unwrap();

    assert_eq!(folders.len(), 3);
    assert_eq!(folders[0].title, "Department ABC");
    assert_eq!(folders[2].title, "Infrastructure");
}

#[tokio::test]
async fn test_get_folder_by_title_ignores_case() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/folders"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("folders/list_folders.json")),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, TEST_TOKEN);
    let folder = client.get_folder_by_title("test folder").await.unwrap();

    assert_eq!(folder.id, 2);
    assert_eq!(folder.uid, "k3S1cklGk");
    assert_eq!(folder.title, "Test folder");
}

#[tokio::test]
async fn test_get_folder_by_title_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/folders"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("folders/list_folders.json")),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, TEST_TOKEN);

    let err = client.get_folder_by_title("Unknown folder").await.unwrap_err();
    assert!(matches!(err, ClientError::FolderNotFound));

    // Substrings of an existing title do not match.
    let err = client.get_folder_by_title("Test").await.unwrap_err();
    assert!(matches!(err, ClientError::FolderNotFound));
}

#[tokio::test]
async fn test_get_folder_by_title_empty_listing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/folders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, TEST_TOKEN);
    let err = client.get_folder_by_title("Test folder").await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_get_folder_by_title_listing_failure_is_not_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/folders"))
        .respond_with(ResponseTemplate::new(403).set_body_string("{}}"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, TEST_TOKEN);
    let err = client.get_folder_by_title("Test folder").await.unwrap_err();

    assert!(!matches!(err, ClientError::FolderNotFound));
    assert!(!err.is_not_found());
    assert_eq!(err.status(), Some(403));
}

#[tokio::test]
async fn test_find_or_create_folder_returns_existing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/folders"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("folders/list_folders.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/folders"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, TEST_TOKEN);
    let folder = client.find_or_create_folder("INFRASTRUCTURE").await.unwrap();

    assert_eq!(folder.id, 3);
    assert_eq!(folder.title, "Infrastructure");
}

#[tokio::test]
async fn test_find_or_create_folder_creates_missing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/folders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/folders"))
        .and(body_json(serde_json::json!({"title": "Department ABC"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("folders/create_folder.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, TEST_TOKEN);
    let folder = client.find_or_create_folder("Department ABC").await.unwrap();

    assert_eq!(folder.uid, "nErXDvCkzz");
}

#[tokio::test]
async fn test_find_or_create_folder_does_not_create_on_listing_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/folders"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({"message": "db locked"})),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/folders"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, TEST_TOKEN);
    let err = client.find_or_create_folder("Department ABC").await.unwrap_err();

    match err {
        ClientError::ApiError {
            status, message, ..
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "db locked");
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }
}
