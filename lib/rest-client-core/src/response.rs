//! HTTP response descriptor.
//!
//! A [`Response`] exposes its status line and headers freely, but its
//! [`Body`] is a reader that can only be drained once: reading consumes the
//! response. Dropping a response, read or not, releases whatever the
//! transport attached to the body.

use std::collections::HashMap;
use std::fmt;
use std::io::Read;

use bytes::{Buf, Bytes};

use crate::{InvalidStatusCode, StatusSeries};

// ============================================================================
// Body
// ============================================================================

/// Single-consumption response body.
pub struct Body {
    reader: Box<dyn Read + Send>,
}

impl Body {
    /// Wrap any reader, typically a stream tied to an open connection.
    #[must_use]
    pub fn new(reader: impl Read + Send + 'static) -> Self {
        Self {
            reader: Box::new(reader),
        }
    }

    /// A body without content.
    #[must_use]
    pub fn empty() -> Self {
        Self::from(Bytes::new())
    }
}

impl Read for Body {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.reader.read(buf)
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Body").finish_non_exhaustive()
    }
}

impl From<Bytes> for Body {
    fn from(bytes: Bytes) -> Self {
        Self::new(bytes.reader())
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from(Bytes::from(bytes))
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Self::from(Bytes::from(text))
    }
}

impl From<&'static str> for Body {
    fn from(text: &'static str) -> Self {
        Self::from(Bytes::from_static(text.as_bytes()))
    }
}

// ============================================================================
// Response
// ============================================================================

/// HTTP response with status line, headers, and a read-once body.
#[derive(Debug)]
pub struct Response {
    status: u16,
    status_text: String,
    headers: HashMap<String, String>,
    body: Body,
}

impl Response {
    /// Creates a new response.
    #[must_use]
    pub fn new(
        status: u16,
        status_text: impl Into<String>,
        headers: HashMap<String, String>,
        body: impl Into<Body>,
    ) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            headers,
            body: body.into(),
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Status text (reason phrase).
    #[must_use]
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Series of the status code.
    pub fn series(&self) -> Result<StatusSeries, InvalidStatusCode> {
        StatusSeries::from_code(self.status)
    }

    /// Response headers.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Consume into body.
    #[must_use]
    pub fn into_body(self) -> Body {
        self.body
    }

    /// Consume into (status, status text, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (u16, String, HashMap<String, String>, Body) {
        (self.status, self.status_text, self.headers, self.body)
    }

    /// Drain the body as UTF-8 text, see [`crate::read_body`].
    pub fn text(self) -> crate::Result<String> {
        crate::read_body(self)
    }
}
