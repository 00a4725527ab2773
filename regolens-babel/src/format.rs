//! Format trait definition
//!
//! The uniform interface every output format implements. Formats here are
//! serialization-only: policy text is parsed by `regolens-parser`, and no
//! format reconstructs policy text from its output.

use crate::error::FormatError;
use regolens_parser::policy::ParsedPolicy;

/// Trait for policy output formats.
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "json", "yaml", "treeviz")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions conventionally used for this format's output
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Serialize a parsed policy into this format's text representation
    fn serialize(&self, policy: &ParsedPolicy) -> Result<String, FormatError>;
}
