use std::sync::Once;

use sforce::{ClientConfig, SalesforceRestClient, SfHttpClient, DEFAULT_API_VERSION};

static TRACING: Once = Once::new();

/// Route `tracing` output through the test harness.
///
/// Honors `RUST_LOG`, defaulting to debug output from the sforce crates.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sforce_client=debug,sforce_rest=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// A REST client pointed at `base_url` with a fixed test token.
pub fn mock_client(base_url: &str) -> SalesforceRestClient {
    init_tracing();
    let http = SfHttpClient::new(ClientConfig::builder().with_tracing(true).build())
        .expect("Failed to create HTTP client");
    SalesforceRestClient::new(http, base_url, DEFAULT_API_VERSION)
        .expect("Failed to create REST client")
        .with_access_token("00Dxx0000001gEF!integration.token")
}

/// A REST client for the org named by `SF_INSTANCE_URL` / `SF_ACCESS_TOKEN`.
///
/// Panics with a helpful message when either variable is missing; live
/// tests should fail loudly rather than skip.
pub fn live_client() -> SalesforceRestClient {
    init_tracing();

    let instance_url = std::env::var("SF_INSTANCE_URL")
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| panic!("SF_INSTANCE_URL must be set for live integration tests"));
    let access_token = std::env::var("SF_ACCESS_TOKEN")
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| panic!("SF_ACCESS_TOKEN must be set for live integration tests"));
    let api_version =
        std::env::var("SF_API_VERSION").unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());

    let http = SfHttpClient::default_client().expect("Failed to create HTTP client");
    SalesforceRestClient::new(http, instance_url, api_version)
        .expect("Failed to create REST client")
        .with_access_token(access_token)
}
