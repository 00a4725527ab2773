//! Error types for format selection and serialization

use std::fmt;

/// Errors surfaced by the format layer.
///
/// Everything here is recoverable: an unknown format name or a serializer
/// failure is reported to the caller, never escalated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// No format registered under the requested name.
    FormatNotFound(String),
    /// The format exists but does not support the requested operation.
    NotSupported(String),
    /// The underlying serializer failed.
    Serialization(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format not found: {}", name),
            FormatError::NotSupported(msg) => write!(f, "Not supported: {}", msg),
            FormatError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for FormatError {}
