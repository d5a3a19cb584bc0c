//! Base64URL decoding per RFC 4648
//!
//! JWT segments are conventionally unpadded. They are padded back to a
//! multiple of four characters and decoded with the padded URL-safe engine
//! of the `base64` crate, so a length residue of one surfaces as a decode
//! error instead of being papered over.

use std::borrow::Cow;

use crate::error::{Error, Result};
use base64::{Engine, engine::general_purpose::URL_SAFE};

/// Number of `=` characters needed to reach a multiple of four
pub fn padding_len(len: usize) -> usize {
    (4 - len % 4) % 4
}

/// Append the padding a Base64URL segment is missing
///
/// Segments whose length is already a multiple of four are returned as-is.
pub fn pad(input: &str) -> Cow<'_, str> {
    let missing = padding_len(input.len());
    tracing::debug!(len = input.len(), padding = missing, "padding segment");

    if missing == 0 {
        return Cow::Borrowed(input);
    }

    let mut padded = String::with_capacity(input.len() + missing);
    padded.push_str(input);
    padded.extend(std::iter::repeat_n('=', missing));
    Cow::Owned(padded)
}

/// Decode an unpadded (or padded) Base64URL segment to bytes
pub fn decode_bytes(input: &str) -> Result<Vec<u8>> {
    URL_SAFE
        .decode(pad(input).as_bytes())
        .map_err(|e| Error::FormatInvalidBase64(e.to_string()))
}

/// Decode a Base64URL segment to a UTF-8 string
pub fn decode_string(input: &str) -> Result<String> {
    decode_bytes(input).and_then(|bytes| {
        String::from_utf8(bytes).map_err(|e| Error::FormatInvalidUtf8(e.to_string()))
    })
}
