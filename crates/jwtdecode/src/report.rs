//! Report rendering

use std::fmt;

use crate::segment::DecodedSegment;

/// Decoded view of a token, ready to print
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub header: DecodedSegment,
    pub payload: DecodedSegment,
    /// Raw Base64URL signature, echoed verbatim
    pub signature: String,
}

impl Report {
    /// Whether header and payload both decoded to JSON
    pub fn is_complete(&self) -> bool {
        self.header.json().is_some() && self.payload.json().is_some()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== JWT HEADER ===")?;
        writeln!(f, "{}", self.header)?;
        writeln!(f)?;
        writeln!(f, "=== JWT PAYLOAD ===")?;
        writeln!(f, "{}", self.payload)?;
        writeln!(f)?;
        writeln!(f, "=== JWT SIGNATURE ===")?;
        writeln!(f, "Signature (base64url): {}", self.signature)?;
        writeln!(f, "Note: Signature verification requires the secret key")
    }
}
