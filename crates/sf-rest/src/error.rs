//! Error types for sforce-rest.

/// Result type alias for sforce-rest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error code used when the server gave no structured error payload.
pub const UNKNOWN_ERROR_CODE: &str = "UNKNOWN_ERROR";

/// Error type for sforce-rest operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation(message.into()))
    }

    pub(crate) fn decode(operation: &'static str, err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Decode {
                operation,
                message: err.to_string(),
            },
            err,
        )
    }

    /// Returns true if a precondition failed before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind, ErrorKind::Validation(_))
    }

    /// Returns true if the request never got an HTTP answer.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport(_))
    }

    /// Returns true if the server reported a failure.
    pub fn is_api(&self) -> bool {
        matches!(self.kind, ErrorKind::Api { .. })
    }

    /// Returns true if a response body could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self.kind, ErrorKind::Decode { .. })
    }

    /// Returns true if the server answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// HTTP status of a server-reported failure.
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            ErrorKind::Api { status, .. } => Some(status),
            _ => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// A required value (type, id, external id, ...) was missing.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Connection failure, timeout or other transport-level error.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server reported a failure.
    ///
    /// Raised for non-2xx statuses and for 2xx payloads that report
    /// `success: false`. `body` is the raw response body.
    #[error("Salesforce API error ({status}): {error_code} - {message}")]
    Api {
        status: u16,
        error_code: String,
        message: String,
        fields: Vec<String>,
        body: String,
    },

    /// A response body was not the JSON shape the operation expects.
    #[error("Failed to decode {operation} response: {message}")]
    Decode {
        operation: &'static str,
        message: String,
    },

    /// Filesystem error while writing a download.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<sforce_client::Error> for Error {
    fn from(err: sforce_client::Error) -> Self {
        use sforce_client::ErrorKind as ClientKind;

        let kind = match &err.kind {
            ClientKind::SalesforceApi {
                status,
                error_code,
                message,
                fields,
                body,
            } => ErrorKind::Api {
                status: *status,
                error_code: error_code.clone(),
                message: message.clone(),
                fields: fields.clone(),
                body: body.clone(),
            },
            ClientKind::Http {
                status,
                message,
                body,
            } => ErrorKind::Api {
                status: *status,
                error_code: UNKNOWN_ERROR_CODE.to_string(),
                message: message.clone(),
                fields: Vec::new(),
                body: body.clone(),
            },
            ClientKind::Json(message) => ErrorKind::Decode {
                operation: "request",
                message: message.clone(),
            },
            ClientKind::Config(message) => ErrorKind::Validation(message.clone()),
            ClientKind::Timeout | ClientKind::Connection(_) | ClientKind::Other(_) => {
                ErrorKind::Transport(err.to_string())
            }
        };

        Error::with_source(kind, err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::with_source(ErrorKind::Io(err.to_string()), err)
    }
}
