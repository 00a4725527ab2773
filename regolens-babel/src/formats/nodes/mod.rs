//! Node-list format
//!
//! The visualization tree as pretty-printed JSON, for renderers that consume
//! flat `key`/`parentKey` node lists.

use crate::error::FormatError;
use crate::format::Format;
use crate::tree::build_tree;
use regolens_parser::policy::ParsedPolicy;

pub struct NodesFormat;

impl Format for NodesFormat {
    fn name(&self) -> &str {
        "nodes"
    }

    fn description(&self) -> &str {
        "Visualization tree as a flat JSON node list"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn serialize(&self, policy: &ParsedPolicy) -> Result<String, FormatError> {
        serde_json::to_string_pretty(&build_tree(&policy.blocks))
            .map_err(|e| FormatError::Serialization(e.to_string()))
    }
}
