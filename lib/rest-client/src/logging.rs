//! Request/response logging.
//!
//! [`LoggingTransport`] wraps another [`Transport`] and reports each exchange
//! through the `tracing` crate. It never changes the request, the response,
//! or the outcome.

use std::time::Instant;

use tracing::{Level, debug, info, span, warn};

use crate::{Request, Response, Transport, TransportError};

/// Log level for [`LoggingTransport`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Log at debug level (request/response details).
    Debug,
    /// Log at info level (summary only).
    #[default]
    Info,
}

/// Transport decorator that logs requests and responses.
///
/// # Example
///
/// ```ignore
/// use rest_client::{HyperTransport, LoggingTransport, RestClient};
///
/// let client = RestClient::new(LoggingTransport::new(HyperTransport::new()?));
/// ```
#[derive(Debug, Clone)]
pub struct LoggingTransport<T> {
    inner: T,
    level: LogLevel,
}

impl<T> LoggingTransport<T> {
    /// Wrap `inner`, logging a summary at info level.
    #[must_use]
    pub const fn new(inner: T) -> Self {
        Self {
            inner,
            level: LogLevel::Info,
        }
    }

    /// Wrap `inner`, logging request headers at debug level.
    #[must_use]
    pub const fn debug(inner: T) -> Self {
        Self {
            inner,
            level: LogLevel::Debug,
        }
    }

    /// The configured log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Unwrap the inner transport.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Transport> Transport for LoggingTransport<T> {
    fn send(&self, request: Request) -> Result<Response, TransportError> {
        let method = request.method().clone();
        let url = request.url().to_string();

        let span = span!(Level::INFO, "http_request", %method, %url);
        let _entered = span.enter();

        match self.level {
            LogLevel::Debug => {
                debug!(
                    method = %method,
                    url = %url,
                    headers = ?request.headers(),
                    "sending request"
                );
            }
            LogLevel::Info => {
                info!(method = %method, url = %url, "sending request");
            }
        }

        let start = Instant::now();
        let result = self.inner.send(request);

        // Saturating conversion to u64
        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        match &result {
            Ok(response) => {
                let status = response.status();
                match response.series() {
                    Ok(series) if !series.is_error() => {
                        info!(status, elapsed_ms, "request completed");
                    }
                    Ok(_) => warn!(status, elapsed_ms, "request failed with HTTP error"),
                    Err(_) => warn!(status, elapsed_ms, "request completed with unknown status"),
                }
            }
            Err(err) => {
                warn!(error = %err, elapsed_ms, "request failed");
            }
        }

        result
    }
}
