//! Salesforce REST API client.
//!
//! `SalesforceRestClient` maps [`SObject`] records onto the fixed set of
//! SObject REST endpoints. Transport concerns (TLS, timeouts, pooling) are
//! owned by the injected [`SfHttpClient`].

use std::fmt;

use serde::de::DeserializeOwned;
use sforce_client::{RequestBuilder, Response, SfHttpClient};

use crate::error::{Error, ErrorKind, Result};
use crate::sobject::SObject;

mod binary;
mod crud;
mod describe;
mod query;

/// Salesforce REST API client.
///
/// Holds only read-only configuration, so a single instance (or cheap
/// clones of it) can serve concurrent operations. Every operation is one
/// HTTP round trip; dropping the returned future cancels the request.
///
/// # Example
///
/// ```rust,ignore
/// use sforce_rest::{SalesforceRestClient, SfHttpClient, DEFAULT_API_VERSION};
///
/// let client = SalesforceRestClient::new(
///     SfHttpClient::default_client()?,
///     "https://myorg.my.salesforce.com",
///     DEFAULT_API_VERSION,
/// )?
/// .with_access_token(token);
///
/// let mut case = client.sobject("Case").set("Subject", "Printer on fire");
/// client.create_sobject(&mut case, &[], false, None).await?;
/// println!("created {}", case.id());
///
/// client.delete_sobject(&case).await?;
/// ```
#[derive(Clone)]
pub struct SalesforceRestClient {
    http: SfHttpClient,
    base_url: String,
    api_version: String,
    access_token: Option<String>,
}

impl fmt::Debug for SalesforceRestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SalesforceRestClient")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish_non_exhaustive()
    }
}

impl SalesforceRestClient {
    /// Create a new REST client.
    ///
    /// `base_url` is the org's instance URL; a single trailing `/` is
    /// stripped. `api_version` is used verbatim in
    /// `/services/data/{api_version}/`, so include the `v` prefix the
    /// endpoint expects (e.g. `"v62.0"`).
    pub fn new(
        http: SfHttpClient,
        base_url: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Result<Self> {
        let mut base_url = base_url.into();
        if base_url.ends_with('/') {
            base_url.pop();
        }

        url::Url::parse(&base_url).map_err(|e| {
            Error::with_source(
                ErrorKind::Validation(format!("Invalid base URL '{}': {}", base_url, e)),
                e,
            )
        })?;

        Ok(Self {
            http,
            base_url,
            api_version: api_version.into(),
            access_token: None,
        })
    }

    /// Send `token` as a bearer token on every request.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// The normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The API version segment.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// The underlying HTTP transport.
    pub fn http(&self) -> &SfHttpClient {
        &self.http
    }

    /// A new, empty record of the given type.
    pub fn sobject(&self, sobject_type: impl Into<String>) -> SObject {
        SObject::new(sobject_type)
    }

    /// Build the versioned REST URL for a resource path.
    ///
    /// Example: `rest_url("sobjects/Case")` ->
    /// `{base}/services/data/v62.0/sobjects/Case`
    pub fn rest_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!(
            "{}/services/data/{}/{}",
            self.base_url, self.api_version, path
        )
    }

    /// Build a URL from a server-supplied, already versioned path.
    ///
    /// The path must be absolute so it cannot extend the host name.
    pub(crate) fn instance_url(&self, path: &str) -> Result<String> {
        if !path.starts_with('/') {
            return Err(Error::validation(format!(
                "next records URL must start with '/': {}",
                path
            )));
        }
        Ok(format!("{}{}", self.base_url, path))
    }

    pub(crate) fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.access_token {
            Some(ref token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Dispatch a request through the transport.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let request = self.authorize(request);
        Ok(self.http.execute(request).await?)
    }

    /// Read a 2xx body and decode it, naming `operation` on failure.
    pub(crate) async fn decode<T: DeserializeOwned>(
        operation: &'static str,
        response: Response,
    ) -> Result<T> {
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| Error::decode(operation, e))
    }
}

fn require_type(record: &SObject) -> Result<&str> {
    match record.sobject_type() {
        "" => Err(Error::validation("record has no SObject type")),
        sobject_type => Ok(sobject_type),
    }
}

fn require_id(record: &SObject) -> Result<&str> {
    match record.id() {
        "" => Err(Error::validation("record has no Id")),
        id => Ok(id),
    }
}

fn segment(value: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(value)
}

#[cfg(test)]
pub(crate) fn test_client(base_url: &str) -> SalesforceRestClient {
    let http = SfHttpClient::default_client().expect("http client");
    SalesforceRestClient::new(http, base_url, "v62.0")
        .expect("valid base url")
        .with_access_token("test-token")
}
