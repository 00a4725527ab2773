//! Line Classification
//!
//! Per-line pattern matching for policy text. Each entry in the classifier
//! table pairs a predicate with a fact builder; a line is tested against every
//! entry, in table order, and may therefore yield several facts. Adding a new
//! recognized pattern means adding a table entry; the grouping and export
//! algorithms never change.
//!
//! The patterns are heuristics over trimmed lines, not grammar rules. Two
//! historically inconsistent field spellings exist in real policy files
//! (`resource.type` vs `resource_change.type`, and the matching change-state
//! paths); both are accepted.

use crate::policy::fact::{Fact, FactKind, UNKNOWN_VALUE};
use once_cell::sync::Lazy;
use regex::Regex;

static RESOURCE_TYPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:resource|resource_change)\.type\s*==\s*"([^"]*)""#)
        .expect("resource type pattern")
});

static MESSAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"msg\s*==\s*"([^"]*)""#).expect("message pattern"));

static INPUT_VARIABLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"input\.(\w+)").expect("input variable pattern"));

static NEGATION_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bnot\b").expect("negation token pattern"));

static QUOTED_SPAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""[^"]*""#).expect("quoted span pattern"));

/// A single entry of the classifier table.
struct ClassifierRule {
    matches: fn(&str) -> bool,
    build: fn(&str, usize) -> Fact,
}

/// Classification order is fixed so downstream output is deterministic.
const CLASSIFIER_TABLE: &[ClassifierRule] = &[
    ClassifierRule {
        matches: is_resource_type_check,
        build: build_resource_type,
    },
    ClassifierRule {
        matches: is_change_after_check,
        build: build_change_after,
    },
    ClassifierRule {
        matches: is_change_before_check,
        build: build_change_before,
    },
    ClassifierRule {
        matches: is_negation,
        build: build_negation,
    },
    ClassifierRule {
        matches: is_message,
        build: build_message,
    },
    ClassifierRule {
        matches: is_input_condition,
        build: build_input_condition,
    },
];

/// Classify one trimmed line into zero or more facts.
///
/// Rule heads are not handled here; the grouper detects them first and head
/// lines contribute only their `RuleHead` fact.
pub fn classify_line(line: &str, line_number: usize) -> Vec<Fact> {
    CLASSIFIER_TABLE
        .iter()
        .filter(|rule| (rule.matches)(line))
        .map(|rule| (rule.build)(line, line_number))
        .collect()
}

/// Check if a trimmed line opens a `deny`/`allow` rule.
pub fn is_rule_head(line: &str) -> bool {
    line.starts_with("deny") || line.starts_with("allow")
}

/// The rule signature: everything before the opening brace, trimmed.
/// A head line without a brace is its own signature.
pub fn head_text(line: &str) -> &str {
    line.split('{').next().unwrap_or(line).trim()
}

/// Build the fact for a rule-head line.
pub fn rule_head_fact(line: &str, line_number: usize) -> Fact {
    Fact::new(FactKind::RuleHead, line, line_number).with_value(head_text(line))
}

/// Extract the declared package name from a `package <name>` line.
pub fn package_name(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("package")?;
    let name = rest.trim();
    if name.is_empty() {
        None
    } else {
        name.split_whitespace().next()
    }
}

/// Extract every `input.<name>` variable reference on a line, in order.
pub fn input_variables(line: &str) -> Vec<&str> {
    INPUT_VARIABLE_RE
        .captures_iter(line)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Extract the quoted message from a `msg == "..."` comparison.
/// Falls back to the `"unknown"` sentinel when no quoted comparison exists.
pub fn extract_message(line: &str) -> &str {
    MESSAGE_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(UNKNOWN_VALUE)
}

fn is_resource_type_check(line: &str) -> bool {
    line.contains("resource.type") || line.contains("resource_change.type")
}

fn build_resource_type(line: &str, line_number: usize) -> Fact {
    let value = RESOURCE_TYPE_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(UNKNOWN_VALUE);
    Fact::new(FactKind::ResourceType, line, line_number).with_value(value)
}

fn is_change_after_check(line: &str) -> bool {
    line.contains("resource_change.change.after") || line.contains("resource.change.after")
}

fn build_change_after(line: &str, line_number: usize) -> Fact {
    Fact::new(FactKind::ChangeAfter, line, line_number)
}

fn is_change_before_check(line: &str) -> bool {
    line.contains("resource_change.change.before") || line.contains("resource.change.before")
}

fn build_change_before(line: &str, line_number: usize) -> Fact {
    Fact::new(FactKind::ChangeBefore, line, line_number)
}

/// The `not` token only counts outside quoted strings; a message like
/// `"bucket not private"` is text, not a negated condition.
fn is_negation(line: &str) -> bool {
    NEGATION_TOKEN_RE.is_match(&QUOTED_SPAN_RE.replace_all(line, "\"\""))
}

fn build_negation(line: &str, line_number: usize) -> Fact {
    Fact::new(FactKind::Negation, line, line_number)
}

fn is_message(line: &str) -> bool {
    line.contains("msg")
}

fn build_message(line: &str, line_number: usize) -> Fact {
    Fact::new(FactKind::Message, line, line_number).with_value(extract_message(line))
}

fn is_input_condition(line: &str) -> bool {
    line.contains("input.")
}

fn build_input_condition(line: &str, line_number: usize) -> Fact {
    Fact::new(FactKind::InputCondition, line, line_number).with_value(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_type_both_spellings() {
        let facts = classify_line(r#"resource.type == "aws_s3_bucket""#, 3);
        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].kind, FactKind::ResourceType);
        assert_eq!(facts[0].extracted_value.as_deref(), Some("aws_s3_bucket"));

        let facts = classify_line(r#"resource_change.type == "aws_vpc""#, 7);
        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].extracted_value.as_deref(), Some("aws_vpc"));
        assert_eq!(facts[0].source_line, 7);
    }

    #[test]
    fn test_resource_type_without_quoted_value_is_unknown() {
        let facts = classify_line("resource.type == bucket_type", 1);
        assert_eq!(facts[0].kind, FactKind::ResourceType);
        assert_eq!(facts[0].extracted_value.as_deref(), Some("unknown"));
    }

    #[test]
    fn test_change_state_markers() {
        let facts = classify_line("resource_change.change.after.acl", 1);
        assert_eq!(facts[0].kind, FactKind::ChangeAfter);
        assert!(facts[0].extracted_value.is_none());

        let facts = classify_line("resource.change.before.tags", 1);
        assert_eq!(facts[0].kind, FactKind::ChangeBefore);
    }

    #[test]
    fn test_line_with_multiple_facts_keeps_fixed_order() {
        let facts = classify_line("not input.vpc_configuration", 4);
        let kinds: Vec<_> = facts.iter().map(|f| f.kind).collect();
        assert_eq!(kinds, vec![FactKind::Negation, FactKind::InputCondition]);
        assert_eq!(
            facts[1].extracted_value.as_deref(),
            Some("not input.vpc_configuration")
        );
    }

    #[test]
    fn test_message_extraction() {
        let facts = classify_line(r#"msg == "bucket not private""#, 2);
        assert_eq!(facts[0].kind, FactKind::Message);
        assert_eq!(
            facts[0].extracted_value.as_deref(),
            Some("bucket not private")
        );

        let facts = classify_line(r#"msg = sprintf("S3 bucket '%s'", [name])"#, 2);
        assert_eq!(facts[0].kind, FactKind::Message);
        assert_eq!(facts[0].extracted_value.as_deref(), Some("unknown"));
    }

    #[test]
    fn test_rule_head_detection_and_signature() {
        assert!(is_rule_head("deny[msg] {"));
        assert!(is_rule_head("allow {"));
        assert!(!is_rule_head("# deny everything"));

        assert_eq!(head_text("deny[msg] {"), "deny[msg]");
        assert_eq!(head_text("allow {"), "allow");
        assert_eq!(head_text("deny[msg]"), "deny[msg]");
    }

    #[test]
    fn test_package_name() {
        assert_eq!(package_name("package aws.s3.policies"), Some("aws.s3.policies"));
        assert_eq!(package_name("package"), None);
        assert_eq!(package_name("deny[msg] {"), None);
    }

    #[test]
    fn test_negation_ignores_quoted_text_and_partial_words() {
        assert!(!classify_line(r#"msg == "bucket not private""#, 1)
            .iter()
            .any(|f| f.kind == FactKind::Negation));
        assert!(classify_line("not resource.change.after.vpc_configuration", 1)
            .iter()
            .any(|f| f.kind == FactKind::Negation));
        assert!(classify_line("value not in allowed_ports", 1)
            .iter()
            .any(|f| f.kind == FactKind::Negation));
        assert!(classify_line("annotation == true", 1).is_empty());
    }

    #[test]
    fn test_unmatched_line_yields_no_facts() {
        assert!(classify_line("}", 9).is_empty());
        assert!(classify_line("", 1).is_empty());
        assert!(classify_line("# a comment", 1).is_empty());
    }
}
