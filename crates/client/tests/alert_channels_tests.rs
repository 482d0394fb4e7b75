//! Alert notification channel endpoint tests.
//!
//! # Invariants
//! - Name matching is case-insensitive and covers the whole name
//! - A failed listing is never reported as `AlertChannelNotFound`

mod common;

use common::*;
use wiremock::matchers::{method, path};

async fn mount_channels(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/alert-notifications"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("alert_channels/list_alert_channels.json")),
        )
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_list_alert_channels() {
    let mock_server = MockServer::start().await;
    mount_channels(&mock_server).await;

    let client = client_for(&mock_server, TEST_TOKEN);
    let channels = client.list_alert_channels().await.unwrap();

    assert_eq!(channels.len(), 2);
    assert_eq!(channels[0].name, "Team A");
    assert_eq!(channels[0].channel_type, "email");
    assert!(!channels[0].is_default);
    assert_eq!(channels[0].settings["addresses"], "dev@grafana.com");
}

#[tokio::test]
async fn test_get_alert_channel_by_name() {
    let mock_server = MockServer::start().await;
    mount_channels(&mock_server).await;

    let client = client_for(&mock_server, TEST_TOKEN);
    let channel = client.get_alert_channel_by_name("team b").await.unwrap();

    assert_eq!(channel.id, 2);
    assert_eq!(channel.uid, "team-b-email-notifier");
    assert_eq!(channel.name, "Team B");
    assert_eq!(channel.channel_type, "email");
}

#[tokio::test]
async fn test_get_alert_channel_by_name_not_found() {
    let mock_server = MockServer::start().await;
    mount_channels(&mock_server).await;

    let client = client_for(&mock_server, TEST_TOKEN);

    let err = client.get_alert_channel_by_name("Team C").await.unwrap_err();
    assert!(matches!(err, ClientError::AlertChannelNotFound));

    let err = client.get_alert_channel_by_name("Team").await.unwrap_err();
    assert!(matches!(err, ClientError::AlertChannelNotFound));
}

#[tokio::test]
async fn test_get_alert_channel_by_name_listing_failure_is_not_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/alert-notifications"))
        .respond_with(ResponseTemplate::new(403).set_body_string("{}}"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, TEST_TOKEN);
    let err = client.get_alert_channel_by_name("Team A").await.unwrap_err();

    assert!(!matches!(err, ClientError::AlertChannelNotFound));
    assert!(err.is_auth_error());
}

#[tokio::test]
async fn test_list_alert_channels_tolerates_missing_optional_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/alert-notifications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 7, "name": "Pager", "type": "pagerduty"}
        ])))
        .mount(&mock_server)
        .await;

    let channels = endpoints::list_alert_channels(
        &Client::new(),
        &mock_server.uri(),
        &grafana_client::AuthStrategy::Anonymous,
        None,
    )
    .await
    .unwrap();

    assert_eq!(channels.len(), 1);
    assert_eq!(channels[0].uid, "");
    assert!(channels[0].settings.is_empty());
}
