//! Response validation.

use crate::{Error, Response, Result, StatusSeries};

/// Check the status of a completed response.
///
/// Informational, successful and redirection statuses pass unchanged. A 4xx
/// or 5xx status fails with [`Error::Http`]; a status with no known series
/// fails with [`Error::UnknownStatus`]. The body is never touched.
pub fn validate(response: &Response) -> Result<()> {
    let status = response.status();
    let series = StatusSeries::from_code(status)?;

    if series.is_error() {
        return Err(Error::http(status, response.status_text()));
    }

    Ok(())
}
