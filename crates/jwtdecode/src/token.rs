//! Unverified token splitting

use crate::error::{Error, Result};
use crate::report::Report;
use crate::segment::DecodedSegment;

/// A JWT split into its three raw segments
///
/// Nothing is decoded or verified at this stage. The segments borrow from
/// the input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnverifiedToken<'a> {
    header: &'a str,
    payload: &'a str,
    signature: &'a str,
}

impl<'a> UnverifiedToken<'a> {
    /// Split a token string in format "header.payload.signature"
    ///
    /// Empty segments are kept, so `"a.b."` splits into three parts while
    /// `"a.b"` and `"a.b.c.d"` are rejected.
    pub fn from_string(token: &'a str) -> Result<Self> {
        let mut parts = token.split('.');
        let header = parts.next().ok_or(Error::FormatInvalid)?;
        let payload = parts.next().ok_or(Error::FormatInvalid)?;
        let signature = parts.next().ok_or(Error::FormatInvalid)?;
        if parts.next().is_some() {
            return Err(Error::FormatInvalid);
        }

        tracing::debug!(
            header = header.len(),
            payload = payload.len(),
            signature = signature.len(),
            "split token"
        );

        Ok(Self {
            header,
            payload,
            signature,
        })
    }

    /// Get the encoded header segment
    pub fn header(&self) -> &'a str {
        self.header
    }

    /// Get the encoded payload segment
    pub fn payload(&self) -> &'a str {
        self.payload
    }

    /// Get the signature segment
    pub fn signature(&self) -> &'a str {
        self.signature
    }

    /// Decode header and payload independently
    ///
    /// The signature is carried over verbatim and never decoded.
    pub fn decode(&self) -> Report {
        Report {
            header: DecodedSegment::decode(self.header),
            payload: DecodedSegment::decode(self.payload),
            signature: self.signature.to_string(),
        }
    }
}
