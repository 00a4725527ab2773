//! JSON export format
//!
//! Pretty-printed (2-space indent) serialization of the canonical export
//! object.

use crate::error::FormatError;
use crate::export::export_policy;
use crate::format::Format;
use regolens_parser::policy::ParsedPolicy;

pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Canonical policy structure as pretty-printed JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn serialize(&self, policy: &ParsedPolicy) -> Result<String, FormatError> {
        serde_json::to_string_pretty(&export_policy(policy))
            .map_err(|e| FormatError::Serialization(e.to_string()))
    }
}
