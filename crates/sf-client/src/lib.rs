//! # sforce-client
//!
//! HTTP transport for the Salesforce REST API.
//!
//! This crate is the "send a request, get a response" layer the REST client
//! is built on. It owns:
//! - Request building (method, URL, headers, query string, JSON body)
//! - A single dispatch routine with default-header handling
//! - Normalization of non-2xx responses into [`ErrorKind`]
//! - Transport configuration (timeouts, pooling, compression, user agent)
//!
//! Every call is exactly one round trip. Retry policy belongs to the caller.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                SalesforceRestClient (sforce-rest)           │
//! │  - SObject CRUD, query, describe, file download             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    SfHttpClient                             │
//! │  - Default headers (replaced, never merged)                 │
//! │  - Non-2xx → SalesforceApi / Http error with raw body       │
//! │  - Request/response tracing                                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use sforce_client::{ClientConfig, SfHttpClient};
//!
//! let http = SfHttpClient::new(ClientConfig::default())?;
//! let response = http
//!     .execute(http.get("https://myorg.my.salesforce.com/services/data/v62.0/limits"))
//!     .await?;
//! let limits: serde_json::Value = response.json().await?;
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;

pub use client::SfHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use request::{RequestBuilder, RequestMethod, AUTO_ASSIGN_HEADER, DUPLICATE_RULE_HEADER};
pub use response::Response;

/// Default Salesforce API version, including the `v` prefix the REST
/// endpoints expect.
pub const DEFAULT_API_VERSION: &str = "v62.0";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("sforce/", env!("CARGO_PKG_VERSION"));
