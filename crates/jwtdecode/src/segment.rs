//! Decoding of a single header or payload segment

use std::fmt;

use crate::error::{Error, Result};
use crate::utils::base64url;
use serde_json::Value;

/// Outcome of decoding one segment
///
/// A failed segment does not fail the token: the failure reason is kept and
/// rendered where the JSON would have been.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedSegment {
    /// Segment decoded to a JSON value
    Json(Value),

    /// Segment could not be decoded; holds `"Error decoding: <cause>"`
    Error(String),
}

impl DecodedSegment {
    /// Decode a Base64URL segment into JSON
    ///
    /// Runs Base64URL, UTF-8 and JSON decoding in order. The first failure is
    /// captured as [`DecodedSegment::Error`].
    pub fn decode(encoded: &str) -> Self {
        match Self::try_decode(encoded) {
            Ok(value) => DecodedSegment::Json(value),
            Err(e) => {
                tracing::debug!(error = %e, "failed to decode segment");
                DecodedSegment::Error(format!("Error decoding: {e}"))
            }
        }
    }

    fn try_decode(encoded: &str) -> Result<Value> {
        let json = base64url::decode_string(encoded)?;
        serde_json::from_str(&json).map_err(|e| Error::FormatInvalidJson(e.to_string()))
    }

    /// Get the decoded JSON, if any
    pub fn json(&self) -> Option<&Value> {
        match self {
            DecodedSegment::Json(value) => Some(value),
            DecodedSegment::Error(_) => None,
        }
    }

    /// Get the error message, if decoding failed
    pub fn error(&self) -> Option<&str> {
        match self {
            DecodedSegment::Json(_) => None,
            DecodedSegment::Error(msg) => Some(msg),
        }
    }
}

/// Pretty-printed JSON with 2-space indentation, or the error message as-is
impl fmt::Display for DecodedSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedSegment::Json(value) => {
                let pretty = serde_json::to_string_pretty(value).map_err(|_| fmt::Error)?;
                f.write_str(&pretty)
            }
            DecodedSegment::Error(msg) => f.write_str(msg),
        }
    }
}
