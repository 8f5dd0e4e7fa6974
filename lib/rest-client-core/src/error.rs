//! Error types for rest-client.

use derive_more::{Display, Error, From};

// ============================================================================
// Transport Error
// ============================================================================

/// Failure reported by a [`Transport`](crate::Transport) while sending a request.
#[derive(Debug, Display, Error, From)]
pub enum TransportError {
    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// Request timeout.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// The request could not be turned into a wire request.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// Low-level I/O failure.
    #[display("I/O error: {_0}")]
    #[from]
    Io(std::io::Error),
}

impl TransportError {
    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

// ============================================================================
// Invalid Status Code
// ============================================================================

/// A status code whose leading digit maps to no [`StatusSeries`](crate::StatusSeries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("No matching constant for [{code}]")]
pub struct InvalidStatusCode {
    code: u16,
}

impl InvalidStatusCode {
    pub(crate) const fn new(code: u16) -> Self {
        Self { code }
    }

    /// The offending status code.
    #[must_use]
    pub const fn code(&self) -> u16 {
        self.code
    }
}

// ============================================================================
// Error Type
// ============================================================================

/// Main error type for rest-client operations.
///
/// Every variant is a client error; [`Error::Http`] is the one raised for a
/// completed exchange that returned a 4xx or 5xx status.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// The transport failed to send the request or receive a response.
    #[display("I/O error on sending Http request: {_0}")]
    #[from]
    Send(TransportError),

    /// The response status has no known series.
    #[display("Unknown status code [{}]", _0.code())]
    #[from]
    UnknownStatus(InvalidStatusCode),

    /// The response carried a 4xx or 5xx status.
    #[display("Http error {status}: {status_text}")]
    #[from(skip)]
    Http {
        /// HTTP status code.
        status: u16,
        /// Status text (reason phrase) of the response.
        status_text: String,
    },

    /// The response body could not be drained or decoded.
    #[display("I/O error: {_0}")]
    #[from]
    Read(std::io::Error),

    /// The body could not be bound to a single entity.
    #[display("Error on converting JSON to entity at '{path}': {source}")]
    #[from(skip)]
    JsonObject {
        /// JSON path to the failure (e.g. `user.address.city`).
        path: String,
        /// Parser error.
        source: serde_json::Error,
    },

    /// The body could not be bound to a list of entities.
    #[display("Error on converting JSON to a list of entity at '{path}': {source}")]
    #[from(skip)]
    JsonList {
        /// JSON path to the failure (e.g. `[2].name`).
        path: String,
        /// Parser error.
        source: serde_json::Error,
    },
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an HTTP error from status code and status text.
    #[must_use]
    pub fn http(status: u16, status_text: impl Into<String>) -> Self {
        Self::Http {
            status,
            status_text: status_text.into(),
        }
    }

    /// Human-readable message, without the detail of the underlying cause.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Send(_) => "I/O error on sending Http request".to_string(),
            Self::UnknownStatus(invalid) => format!("Unknown status code [{}]", invalid.code()),
            Self::Http { .. } => "Http error".to_string(),
            Self::Read(_) => "I/O error".to_string(),
            Self::JsonObject { .. } => "Error on converting JSON to entity".to_string(),
            Self::JsonList { .. } => "Error on converting JSON to a list of entity".to_string(),
        }
    }

    /// Returns `true` if the server answered with a 4xx or 5xx status.
    #[must_use]
    pub const fn is_http(&self) -> bool {
        matches!(self, Self::Http { .. })
    }

    /// Returns the HTTP status code if this is an HTTP error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the status text if this is an HTTP error.
    #[must_use]
    pub fn status_text(&self) -> Option<&str> {
        match self {
            Self::Http { status_text, .. } => Some(status_text),
            _ => None,
        }
    }

    /// Returns `true` if this is a client error (4xx).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    /// Returns `true` if this is a server error (5xx).
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| (500..600).contains(&s))
    }

    /// Returns `true` if this is a 404 Not Found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns the JSON path of a binding failure.
    #[must_use]
    pub fn json_path(&self) -> Option<&str> {
        match self {
            Self::JsonObject { path, .. } | Self::JsonList { path, .. } => Some(path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<u32>("oops").expect_err("invalid JSON")
    }

    #[test]
    fn error_display() {
        let err = Error::http(404, "Not Found");
        assert_eq!(err.to_string(), "Http error 404: Not Found");

        let err = Error::Send(TransportError::Timeout);
        assert_eq!(
            err.to_string(),
            "I/O error on sending Http request: request timeout"
        );

        let err = Error::UnknownStatus(InvalidStatusCode::new(600));
        assert_eq!(err.to_string(), "Unknown status code [600]");

        let err = Error::Send(TransportError::connection("refused"));
        assert_eq!(
            err.to_string(),
            "I/O error on sending Http request: connection error: refused"
        );
    }

    #[test]
    fn error_message() {
        assert_eq!(Error::http(500, "Internal Server Error").message(), "Http error");
        assert_eq!(
            Error::Send(TransportError::Timeout).message(),
            "I/O error on sending Http request"
        );
        assert_eq!(
            Error::Read(std::io::Error::other("boom")).message(),
            "I/O error"
        );
        assert_eq!(
            Error::UnknownStatus(InvalidStatusCode::new(42)).message(),
            "Unknown status code [42]"
        );

        let err = Error::JsonObject {
            path: ".".to_string(),
            source: json_error(),
        };
        assert_eq!(err.message(), "Error on converting JSON to entity");

        let err = Error::JsonList {
            path: ".".to_string(),
            source: json_error(),
        };
        assert_eq!(err.message(), "Error on converting JSON to a list of entity");
    }

    #[test]
    fn error_status() {
        let err = Error::http(404, "Not Found");
        assert!(err.is_http());
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.status_text(), Some("Not Found"));
        assert!(err.is_client_error());
        assert!(!err.is_server_error());
        assert!(err.is_not_found());

        let err = Error::http(503, "Service Unavailable");
        assert!(!err.is_client_error());
        assert!(err.is_server_error());
        assert!(!err.is_not_found());

        let err = Error::Send(TransportError::Timeout);
        assert!(!err.is_http());
        assert_eq!(err.status(), None);
        assert_eq!(err.status_text(), None);
    }

    #[test]
    fn error_source_chain() {
        assert!(Error::http(400, "Bad Request").source().is_none());

        let err = Error::UnknownStatus(InvalidStatusCode::new(700));
        let source = err.source().expect("invalid status code cause");
        assert_eq!(source.to_string(), "No matching constant for [700]");

        let err = Error::Send(TransportError::connection("refused"));
        assert!(err.source().is_some());

        let err = Error::JsonList {
            path: "[0]".to_string(),
            source: json_error(),
        };
        assert!(err.source().is_some());
        assert_eq!(err.json_path(), Some("[0]"));
    }

    #[test]
    fn transport_error_kinds() {
        assert!(TransportError::Timeout.is_timeout());
        assert!(!TransportError::Timeout.is_connection());
        assert!(TransportError::connection("refused").is_connection());
        assert_eq!(TransportError::tls("bad cert").to_string(), "TLS error: bad cert");
        assert_eq!(
            TransportError::invalid_request("no host").to_string(),
            "invalid request: no host"
        );

        let err: TransportError = std::io::Error::other("boom").into();
        assert!(matches!(err, TransportError::Io(_)));
    }
}
