//! Structural Exporter
//!
//! Converts grouped rule blocks into the canonical nested export object:
//! the declared package plus one policy entry per rule, each carrying its
//! raw condition lines. Fact typing is deliberately dropped here — the
//! export consumer wants the policy text structure, not the classification.

use crate::error::FormatError;
use regolens_parser::policy::{ParsedPolicy, RuleBlock};
use serde::{Deserialize, Serialize};

/// One exported rule: its signature and raw condition lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportPolicy {
    pub id: String,
    pub conditions: Vec<String>,
}

/// The canonical export object for a policy file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub package: Option<String>,
    pub policies: Vec<ExportPolicy>,
}

/// Build the export object from rule blocks and an explicit package name.
///
/// Conditions are the raw text of every non-head line that contributed at
/// least one fact to the block, in source order. A line yielding several
/// facts contributes once; identical text on different lines is preserved.
pub fn export(blocks: &[RuleBlock], package: Option<&str>) -> ExportDocument {
    let policies = blocks
        .iter()
        .map(|block| ExportPolicy {
            id: block.head_text.clone(),
            conditions: condition_lines(block),
        })
        .collect();

    ExportDocument {
        package: package.map(str::to_string),
        policies,
    }
}

/// Build the export object for a parsed policy, using its declared package.
pub fn export_policy(policy: &ParsedPolicy) -> ExportDocument {
    export(&policy.blocks, policy.package.as_deref())
}

fn condition_lines(block: &RuleBlock) -> Vec<String> {
    let mut conditions = Vec::new();
    let mut last_line = block.start_line;
    for fact in block.body_facts() {
        if fact.source_line != last_line {
            conditions.push(fact.raw_text.clone());
            last_line = fact.source_line;
        }
    }
    conditions
}

/// Serialize the export object as `"json"` (pretty, 2-space indent) or
/// `"yaml"`. Any other format name is a recoverable error.
pub fn serialize(document: &ExportDocument, format: &str) -> Result<String, FormatError> {
    match format {
        "json" => serde_json::to_string_pretty(document)
            .map_err(|e| FormatError::Serialization(e.to_string())),
        "yaml" => {
            serde_yaml::to_string(document).map_err(|e| FormatError::Serialization(e.to_string()))
        }
        other => Err(FormatError::FormatNotFound(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regolens_parser::policy::parse_policy;

    const POLICY: &str = r#"package terraform.s3

# keep buckets private
deny[msg] {
  resource.type == "aws_s3_bucket"
  not resource.change.after.private
  msg == "bucket must be private"
}

allow {
  input.override == true
}
"#;

    #[test]
    fn test_export_maps_blocks_to_policies() {
        let parsed = parse_policy(POLICY);
        let document = export_policy(&parsed);

        assert_eq!(document.package.as_deref(), Some("terraform.s3"));
        assert_eq!(document.policies.len(), 2);

        let deny = &document.policies[0];
        assert_eq!(deny.id, "deny[msg]");
        assert_eq!(
            deny.conditions,
            vec![
                r#"resource.type == "aws_s3_bucket""#,
                "not resource.change.after.private",
                r#"msg == "bucket must be private""#,
            ]
        );

        let allow = &document.policies[1];
        assert_eq!(allow.id, "allow");
        assert_eq!(allow.conditions, vec!["input.override == true"]);
    }

    #[test]
    fn test_multi_fact_line_contributes_one_condition() {
        let parsed = parse_policy("deny {\n  not input.vpc\n}\n");
        let document = export_policy(&parsed);
        assert_eq!(document.policies[0].conditions, vec!["not input.vpc"]);
    }

    #[test]
    fn test_duplicate_lines_are_preserved() {
        let parsed = parse_policy("deny {\n  not input.a\n  not input.a\n}\n");
        let document = export_policy(&parsed);
        assert_eq!(
            document.policies[0].conditions,
            vec!["not input.a", "not input.a"]
        );
    }

    #[test]
    fn test_explicit_package_override() {
        let parsed = parse_policy("deny {\n}\n");
        let document = export(&parsed.blocks, Some("override.pkg"));
        assert_eq!(document.package.as_deref(), Some("override.pkg"));
    }

    #[test]
    fn test_empty_input_exports_empty_document() {
        let document = export(&[], None);
        assert_eq!(document.package, None);
        assert!(document.policies.is_empty());
    }

    #[test]
    fn test_unsupported_format_is_recoverable() {
        let document = export(&[], None);
        let err = serialize(&document, "toml").unwrap_err();
        assert_eq!(err, FormatError::FormatNotFound("toml".to_string()));
    }

    #[test]
    fn test_json_output_uses_two_space_indent() {
        let parsed = parse_policy("deny {\n  input.a == 1\n}\n");
        let json = serialize(&export_policy(&parsed), "json").unwrap();
        assert!(json.contains("\n  \"policies\""));
        assert!(json.contains("\n      \"id\": \"deny\""));
    }
}
