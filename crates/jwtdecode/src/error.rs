//! Errors for jwtdecode

use thiserror::Error;

/// JWT decoding errors
///
/// Input and format errors abort a run. Segment errors never do: they are
/// rendered inline in place of the decoded JSON.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Input Errors
    // ============================================================================
    #[error("No JWT token provided")]
    InputEmpty,

    #[error("Failed to read input: {0}")]
    InputRead(String),

    #[error("Input is not valid UTF-8: {0}")]
    InputNotUtf8(String),

    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Invalid JWT format. Expected 3 parts separated by dots.")]
    FormatInvalid,

    // ============================================================================
    // Segment Errors
    // ============================================================================
    #[error("Base64URL decoding failed: {0}")]
    FormatInvalidBase64(String),

    #[error("Invalid UTF-8: {0}")]
    FormatInvalidUtf8(String),

    #[error("JSON parsing failed: {0}")]
    FormatInvalidJson(String),

    // ============================================================================
    // Output Errors
    // ============================================================================
    #[error("Failed to write output: {0}")]
    OutputWrite(String),
}

/// Result type alias for jwtdecode operations
pub type Result<T> = std::result::Result<T, Error>;
