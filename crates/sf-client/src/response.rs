//! HTTP response handling with Salesforce-specific extensions.

use serde::de::DeserializeOwned;

use crate::error::{Error, ErrorKind, Result};

/// Wrapper around a successful HTTP response.
///
/// The body is not consumed until one of [`text`](Self::text),
/// [`bytes`](Self::bytes), [`json`](Self::json) or [`chunk`](Self::chunk)
/// is called.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        let status = self.status();
        (200..300).contains(&status)
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name)?.to_str().ok()
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }

    /// Get the response body as bytes.
    pub async fn bytes(self) -> Result<bytes::Bytes> {
        self.inner.bytes().await.map_err(Into::into)
    }

    /// Deserialize the response body as JSON.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let body = self.bytes().await?;
        serde_json::from_slice(&body).map_err(Into::into)
    }

    /// Read the next chunk of the body, `None` once it is exhausted.
    ///
    /// Lets callers stream large payloads without buffering them whole.
    pub async fn chunk(&mut self) -> Result<Option<bytes::Bytes>> {
        self.inner.chunk().await.map_err(Into::into)
    }

    /// Get access to the inner reqwest::Response.
    pub fn into_inner(self) -> reqwest::Response {
        self.inner
    }
}

/// Turn a non-2xx status and its full body into an error.
///
/// Salesforce reports failures either as an array of error objects or as a
/// single object; anything else falls back to a plain [`ErrorKind::Http`].
pub(crate) fn parse_error_response(status: u16, body: String) -> Error {
    if let Ok(errors) = serde_json::from_str::<Vec<SalesforceErrorResponse>>(&body) {
        if let Some(err) = errors.into_iter().next() {
            return api_error(status, err, body);
        }
    }

    if let Ok(err) = serde_json::from_str::<SalesforceErrorResponse>(&body) {
        return api_error(status, err, body);
    }

    let message = if body.trim().is_empty() {
        "request failed".to_string()
    } else {
        sanitize_error_message(&body)
    };

    Error::new(ErrorKind::Http {
        status,
        message,
        body,
    })
}

fn api_error(status: u16, err: SalesforceErrorResponse, body: String) -> Error {
    Error::new(ErrorKind::SalesforceApi {
        status,
        error_code: err.error_code,
        message: sanitize_error_message(&err.message),
        fields: err.fields.unwrap_or_default(),
        body,
    })
}

/// Sanitize an error message to prevent exposing sensitive data.
///
/// This function:
/// - Truncates messages longer than 500 characters
/// - Removes potential tokens (anything that looks like an access token)
/// - Removes potential session IDs
fn sanitize_error_message(message: &str) -> String {
    const MAX_LENGTH: usize = 500;

    let mut sanitized = message.to_string();

    // Salesforce tokens start with the org id ("00D...") followed by "!"
    if let Ok(token_pattern) = regex_lite::Regex::new(r"00[A-Za-z0-9]{13,}[!][A-Za-z0-9_.]+") {
        sanitized = token_pattern
            .replace_all(&sanitized, "[REDACTED_TOKEN]")
            .to_string();
    }

    if let Ok(session_pattern) = regex_lite::Regex::new(r"sid=[A-Za-z0-9]{20,}") {
        sanitized = session_pattern
            .replace_all(&sanitized, "sid=[REDACTED]")
            .to_string();
    }

    if sanitized.len() > MAX_LENGTH {
        let mut cut = MAX_LENGTH;
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        sanitized.truncate(cut);
        sanitized.push_str("...[truncated]");
    }

    sanitized
}

/// Salesforce API error response format.
#[derive(Debug, serde::Deserialize)]
struct SalesforceErrorResponse {
    #[serde(alias = "errorCode")]
    error_code: String,
    message: String,
    fields: Option<Vec<String>>,
}
