//! HTTP request building with Salesforce-specific headers.

use std::collections::HashMap;
use serde::Serialize;

use crate::error::Result;

/// Header enabling a save that matches a duplicate rule.
pub const DUPLICATE_RULE_HEADER: &str = "Sforce-Duplicate-Rule-Header";

/// Header forcing assignment rules on or off.
pub const AUTO_ASSIGN_HEADER: &str = "Sforce-Auto-Assign";

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl RequestMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Patch => reqwest::Method::PATCH,
            RequestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Builder for HTTP requests with Salesforce-specific options.
///
/// Headers set here are the caller-supplied set: when any are present they
/// fully replace the client's default headers at dispatch time.
#[derive(Debug)]
pub struct RequestBuilder {
    pub(crate) method: RequestMethod,
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) query_params: Vec<(String, String)>,
    pub(crate) body: Option<serde_json::Value>,
    pub(crate) bearer_token: Option<String>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: RequestMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            query_params: Vec::new(),
            body: None,
            bearer_token: None,
        }
    }

    /// The request method.
    pub fn method(&self) -> RequestMethod {
        self.method
    }

    /// The request URL, without query parameters.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Look up a header set on this request.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Set the bearer token for authentication.
    pub fn bearer_auth(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Add a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add a query parameter. The value is percent-encoded at dispatch.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((name.into(), value.into()));
        self
    }

    /// Set JSON body.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self> {
        let value = serde_json::to_value(body)?;
        self.body = Some(value);
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        Ok(self)
    }

    /// Allow saving a record that matches a duplicate rule.
    ///
    /// Only sets the header when `allow` is true.
    pub fn allow_duplicates(self, allow: bool) -> Self {
        if allow {
            self.header(DUPLICATE_RULE_HEADER, "allowSave=true")
        } else {
            self
        }
    }

    /// Force assignment rules on (`Some(true)`) or off (`Some(false)`).
    ///
    /// `None` sends no header, leaving the org default in effect.
    pub fn auto_assign(self, auto_assign: Option<bool>) -> Self {
        match auto_assign {
            Some(true) => self.header(AUTO_ASSIGN_HEADER, "TRUE"),
            Some(false) => self.header(AUTO_ASSIGN_HEADER, "FALSE"),
            None => self,
        }
    }
}
