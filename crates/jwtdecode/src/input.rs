//! Token input acquisition

use std::io::Read;

use crate::error::{Error, Result};

/// Read a token from `reader` until end-of-stream
///
/// The input must be UTF-8. Surrounding whitespace, including the trailing
/// newline of `echo`, is stripped. Blank input is rejected.
pub fn read_token<R: Read>(mut reader: R) -> Result<String> {
    let mut raw = Vec::new();
    reader
        .read_to_end(&mut raw)
        .map_err(|e| Error::InputRead(e.to_string()))?;

    let text = String::from_utf8(raw).map_err(|e| Error::InputNotUtf8(e.to_string()))?;
    let token = text.trim();
    tracing::debug!(bytes = text.len(), trimmed = token.len(), "read token input");

    if token.is_empty() {
        return Err(Error::InputEmpty);
    }

    Ok(token.to_string())
}
