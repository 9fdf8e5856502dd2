//! REST API scenarios against a mock server.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::mock_client;

const CASE_ID: &str = "500xx000003DGb2AAG";

// ============================================================================
// Create → Get → Delete
// ============================================================================

#[tokio::test]
async fn test_case_lifecycle() {
    let server = MockServer::start().await;
    let record_path = format!("/services/data/v62.0/sobjects/Case/{CASE_ID}");

    Mock::given(method("POST"))
        .and(path("/services/data/v62.0/sobjects/Case"))
        .and(body_json(json!({
            "Subject": "Printer on fire",
            "Priority": "High"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": CASE_ID,
            "success": true,
            "errors": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(record_path.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "attributes": {"type": "Case", "url": record_path},
            "Id": CASE_ID,
            "Subject": "Printer on fire",
            "Priority": "High",
            "Status": "New",
            "CaseNumber": "00001026"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(record_path.as_str()))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server.uri());

    let mut case = client
        .sobject("Case")
        .set("Subject", "Printer on fire")
        .set("Priority", "High");

    client
        .create_sobject(&mut case, &[], false, None)
        .await
        .expect("create should succeed");
    assert_eq!(case.id(), CASE_ID);

    let mut fetched = client.sobject("Case").with_id(case.id());
    client
        .get_sobject(&mut fetched)
        .await
        .expect("get should succeed");
    assert_eq!(fetched.string_field("Status"), "New");
    assert_eq!(fetched.string_field("CaseNumber"), "00001026");
    assert_eq!(fetched.attributes_url(), record_path);

    client
        .delete_sobject(&fetched)
        .await
        .expect("delete should succeed");
}

// ============================================================================
// Update round trip
// ============================================================================

#[tokio::test]
async fn test_queried_record_updates_without_metadata() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/query"))
        .and(query_param("q", "SELECT Id, Name, Industry FROM Account LIMIT 1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalSize": 1,
            "done": true,
            "records": [{
                "attributes": {"type": "Account", "url": "/services/data/v62.0/sobjects/Account/001xx"},
                "Id": "001xx",
                "Name": "Acme",
                "Industry": null
            }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/services/data/v62.0/sobjects/Account/001xx"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"Name": "Acme Corp", "Industry": null})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server.uri());
    let page = client
        .query("SELECT Id, Name, Industry FROM Account LIMIT 1", None)
        .await
        .expect("query should succeed");

    let mut account = page.records.into_iter().next().expect("one record");
    account.insert("Name", "Acme Corp");

    client
        .update_sobject(&account, &[], None)
        .await
        .expect("update should succeed");
}

// ============================================================================
// Pagination
// ============================================================================

#[tokio::test]
async fn test_query_more_walks_continuation_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalSize": 2,
            "done": false,
            "nextRecordsUrl": "/services/data/v62.0/query/01gxx-1",
            "records": [{"attributes": {"type": "Contact"}, "Id": "003a"}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/query/01gxx-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalSize": 2,
            "done": true,
            "records": [{"attributes": {"type": "Contact"}, "Id": "003b"}]
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server.uri());
    let first = client.query("SELECT Id FROM Contact", None).await.unwrap();
    assert_eq!(first.records[0].id(), "003a");

    let second = client
        .query_more(&first)
        .await
        .unwrap()
        .expect("a second page");
    assert_eq!(second.records[0].id(), "003b");
    assert!(client.query_more(&second).await.unwrap().is_none());
}

// ============================================================================
// Describe and download
// ============================================================================

#[tokio::test]
async fn test_describe_global_then_download() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/sobjects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "encoding": "UTF-8",
            "maxBatchSize": 200,
            "sobjects": [{"name": "Account"}, {"name": "ContentVersion"}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/sobjects/ContentVersion/068xx/VersionData"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.7 fake".to_vec()))
        .mount(&server)
        .await;

    let client = mock_client(&server.uri());
    let global = client.describe_global().await.unwrap();
    assert!(global.sobject_names().contains(&"ContentVersion"));

    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("contract.pdf");
    let written = client.download_file("068xx", &destination).await.unwrap();

    assert_eq!(written, 13);
    assert_eq!(std::fs::read(&destination).unwrap(), b"%PDF-1.7 fake");
}

#[tokio::test]
async fn test_concurrent_operations_share_one_client() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/sobjects/Account/describe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Account"})))
        .expect(8)
        .mount(&server)
        .await;

    let client = mock_client(&server.uri());
    let mut handles = Vec::new();
    for _ in 0..8 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.describe_sobject(&client.sobject("Account")).await
        }));
    }

    for handle in handles {
        let meta = handle.await.unwrap().unwrap();
        assert_eq!(meta.name(), "Account");
    }
}
