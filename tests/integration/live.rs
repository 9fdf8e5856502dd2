//! Live-org tests using SF_INSTANCE_URL / SF_ACCESS_TOKEN.

use super::common::live_client;

#[tokio::test]
#[ignore = "requires a real Salesforce org"]
async fn test_live_case_lifecycle() {
    let client = live_client();

    let mut case = client
        .sobject("Case")
        .set("Subject", "sforce integration test")
        .set("Origin", "Web");

    client
        .create_sobject(&mut case, &[], false, None)
        .await
        .expect("create should succeed");
    assert!(!case.id().is_empty());
    tracing::info!(id = case.id(), "Created case");

    let mut fetched = client.sobject("Case").with_id(case.id());
    client
        .get_sobject(&mut fetched)
        .await
        .expect("get should succeed");
    assert_eq!(fetched.string_field("Subject"), "sforce integration test");

    client
        .delete_sobject(&fetched)
        .await
        .expect("delete should succeed");

    let err = client.get_sobject(&mut fetched).await.unwrap_err();
    assert!(err.is_not_found(), "expected 404 after delete: {err:?}");
}

#[tokio::test]
#[ignore = "requires a real Salesforce org"]
async fn test_live_describe_and_query() {
    let client = live_client();

    let global = client.describe_global().await.expect("describe global");
    assert!(global.sobject_names().contains(&"Account"));

    let meta = client
        .describe_sobject(&client.sobject("Account"))
        .await
        .expect("describe Account");
    assert_eq!(meta.name(), "Account");

    let records = client
        .query_all("SELECT Id, Name FROM Account LIMIT 5")
        .await
        .expect("query should succeed");
    for record in &records {
        assert_eq!(record.sobject_type(), "Account");
    }
}
