//! HTTP status series.

use derive_more::Display;

use crate::InvalidStatusCode;

/// Class of an HTTP status code, given by its leading digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum StatusSeries {
    /// 1xx.
    #[display("Informational")]
    Informational = 1,
    /// 2xx.
    #[display("Successful")]
    Successful = 2,
    /// 3xx.
    #[display("Redirection")]
    Redirection = 3,
    /// 4xx.
    #[display("Client Error")]
    ClientError = 4,
    /// 5xx.
    #[display("Server Error")]
    ServerError = 5,
}

impl StatusSeries {
    const ALL: [Self; 5] = [
        Self::Informational,
        Self::Successful,
        Self::Redirection,
        Self::ClientError,
        Self::ServerError,
    ];

    /// Classify a status code by `code / 100`.
    ///
    /// Only the leading digit is checked: `199` is informational and `599` a
    /// server error, while anything below `100` or from `600` up is rejected.
    pub fn from_code(code: u16) -> Result<Self, InvalidStatusCode> {
        let digit = code / 100;
        Self::ALL
            .into_iter()
            .find(|series| series.digit() == digit)
            .ok_or(InvalidStatusCode::new(code))
    }

    /// The designated leading digit.
    #[must_use]
    pub const fn digit(self) -> u16 {
        self as u16
    }

    /// Returns `true` for [`Self::ClientError`] and [`Self::ServerError`].
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::ClientError | Self::ServerError)
    }
}

impl TryFrom<u16> for StatusSeries {
    type Error = InvalidStatusCode;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl TryFrom<http::StatusCode> for StatusSeries {
    type Error = InvalidStatusCode;

    fn try_from(status: http::StatusCode) -> Result<Self, Self::Error> {
        Self::from_code(status.as_u16())
    }
}
