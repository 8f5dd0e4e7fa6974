//! Response content reading.

use std::io::Read;

use crate::{Error, Response, Result};

/// Drain the body of `response` and decode it as UTF-8.
///
/// The response is consumed, so its body is read exactly once. Read failures
/// and invalid UTF-8 both surface as [`Error::Read`].
pub fn read_body(response: Response) -> Result<String> {
    let mut content = String::new();
    response
        .into_body()
        .read_to_string(&mut content)
        .map_err(Error::Read)?;
    Ok(content)
}
