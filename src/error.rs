//! Error types for conversion operations

use thiserror::Error;

/// Errors that can occur during HTML to Markdown conversion
///
/// String input never fails: html5ever normalizes malformed markup into a
/// best-effort tree. Only byte input can be rejected, when it is not valid for
/// the requested charset.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Character encoding error
    #[error("Encoding error: {0}")]
    EncodingError(String),
}
