//! # sforce
//!
//! A Salesforce REST API client library for Rust, built around a generic
//! record type that round-trips through JSON without losing fields.
//!
//! This library makes exactly one HTTP request per operation and leaves
//! retries, caching and token acquisition to the caller.
//!
//! ## Security
//!
//! - Access tokens are redacted in Debug output
//! - Tracing spans skip record payloads and credentials
//! - Error messages sanitize anything that looks like a token or session id
//!
//! ## Crates
//!
//! - **sforce-client** - HTTP transport: request building, dispatch, error normalization
//! - **sforce-rest** - REST API: SObject CRUD, upsert, query, describe, file download
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sforce::{SalesforceRestClient, SfHttpClient, DEFAULT_API_VERSION};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SalesforceRestClient::new(
//!         SfHttpClient::default_client()?,
//!         std::env::var("SF_INSTANCE_URL")?,
//!         DEFAULT_API_VERSION,
//!     )?
//!     .with_access_token(std::env::var("SF_ACCESS_TOKEN")?);
//!
//!     let accounts = client
//!         .query_all("SELECT Id, Name FROM Account LIMIT 10")
//!         .await?;
//!
//!     for account in accounts {
//!         println!("{}", account.string_field("Name"));
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
pub use sforce_client as client;
pub use sforce_rest as rest;

// Re-export commonly used types at the top level
pub use sforce_client::{ClientConfig, SfHttpClient, DEFAULT_API_VERSION};
pub use sforce_rest::{
    Error, ErrorKind, QueryResult, Result, SObject, SObjectMeta, SalesforceRestClient,
    UpsertResult,
};
