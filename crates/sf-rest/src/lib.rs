//! # sforce-rest
//!
//! Salesforce REST API client built around a generic, schema-free record.
//!
//! ## Features
//!
//! - **SObject CRUD** - Create, Read, Update, Delete individual records
//! - **Upsert** - Insert or update by external id
//! - **SOQL Query** - Single pages, continuation pages, or every page
//! - **Describe** - Object metadata and the global object list
//! - **File download** - Stream ContentVersion data to disk
//!
//! Records are [`SObject`]s: an ordered JSON object whose type lives under
//! `attributes.type` and whose id is the `Id` field, exactly as the REST API
//! sends them.
//!
//! ## Example
//!
//! ```rust,ignore
//! use sforce_rest::{SalesforceRestClient, SfHttpClient, DEFAULT_API_VERSION};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sforce_rest::Error> {
//!     let client = SalesforceRestClient::new(
//!         SfHttpClient::default_client()?,
//!         "https://myorg.my.salesforce.com",
//!         DEFAULT_API_VERSION,
//!     )?
//!     .with_access_token("access_token_here");
//!
//!     // Create
//!     let mut account = client.sobject("Account").set("Name", "New Account");
//!     client.create_sobject(&mut account, &[], false, None).await?;
//!
//!     // Update
//!     account.insert("Name", "Updated");
//!     client.update_sobject(&account, &[], None).await?;
//!
//!     // Query
//!     let page = client
//!         .query("SELECT Id, Name FROM Account LIMIT 10", None)
//!         .await?;
//!     for record in &page.records {
//!         println!("{} {}", record.id(), record.string_field("Name"));
//!     }
//!
//!     // Delete
//!     client.delete_sobject(&account).await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod describe;
mod error;
mod query;
mod sobject;

// Main client
pub use client::SalesforceRestClient;

// Records and results
pub use sobject::{
    CreateResult, SObject, SalesforceError, UpsertResult, ATTRIBUTES_KEY, DEFAULT_BLACKLIST,
    ID_KEY,
};

// Query and describe
pub use describe::SObjectMeta;
pub use query::QueryResult;

// Errors
pub use error::{Error, ErrorKind, Result, UNKNOWN_ERROR_CODE};

// Transport
pub use sforce_client::{ClientConfig, ClientConfigBuilder, SfHttpClient, DEFAULT_API_VERSION};

