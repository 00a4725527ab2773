//! YAML export format

use crate::error::FormatError;
use crate::export::export_policy;
use crate::format::Format;
use regolens_parser::policy::ParsedPolicy;

pub struct YamlFormat;

impl Format for YamlFormat {
    fn name(&self) -> &str {
        "yaml"
    }

    fn description(&self) -> &str {
        "Canonical policy structure as YAML"
    }

    fn file_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }

    fn serialize(&self, policy: &ParsedPolicy) -> Result<String, FormatError> {
        serde_yaml::to_string(&export_policy(policy))
            .map_err(|e| FormatError::Serialization(e.to_string()))
    }
}
