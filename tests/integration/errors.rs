//! Error normalization as seen by callers.

use std::time::Duration;

use serde_json::json;
use sforce::{ClientConfig, ErrorKind, SalesforceRestClient, SfHttpClient, DEFAULT_API_VERSION};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::mock_client;

#[tokio::test]
async fn test_api_error_exposes_code_fields_and_raw_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/data/v62.0/sobjects/Contact"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!([{
            "message": "Required fields are missing: [LastName]",
            "errorCode": "REQUIRED_FIELD_MISSING",
            "fields": ["LastName"]
        }])))
        .mount(&server)
        .await;

    let client = mock_client(&server.uri());
    let mut contact = client.sobject("Contact").set("FirstName", "Ada");
    let err = client
        .create_sobject(&mut contact, &[], false, None)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(400));
    match err.kind {
        ErrorKind::Api {
            ref error_code,
            ref fields,
            ref body,
            ..
        } => {
            assert_eq!(error_code, "REQUIRED_FIELD_MISSING");
            assert_eq!(fields, &vec!["LastName".to_string()]);
            assert!(body.contains("Required fields are missing"));
        }
        ref other => panic!("unexpected kind: {other:?}"),
    }
    assert_eq!(contact.id(), "");
}

#[tokio::test]
async fn test_error_message_redacts_tokens() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!([{
            "message": "Session expired or invalid: 00Dxx0000001gEF!AQcAQH3k9s7LKbp.secret",
            "errorCode": "INVALID_SESSION_ID"
        }])))
        .mount(&server)
        .await;

    let client = mock_client(&server.uri());
    let err = client.describe_global().await.unwrap_err();

    let rendered = err.to_string();
    assert!(rendered.contains("INVALID_SESSION_ID"));
    assert!(!rendered.contains("AQcAQH3k9s7LKbp"), "leaked token: {rendered}");
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let http = SfHttpClient::new(
        ClientConfig::builder()
            .with_timeout(Duration::from_millis(100))
            .build(),
    )
    .unwrap();
    let client = SalesforceRestClient::new(http, server.uri(), DEFAULT_API_VERSION).unwrap();

    let err = client.describe_global().await.unwrap_err();
    assert!(err.is_transport(), "unexpected error: {err:?}");
}

#[tokio::test]
async fn test_dropping_the_future_cancels_the_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let client = mock_client(&server.uri());
    let result = tokio::time::timeout(Duration::from_millis(100), client.describe_global()).await;
    assert!(result.is_err(), "operation should have been cancelled");
}
