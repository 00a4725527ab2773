//! Lint checks
//!
//! One function per check, each returning its findings in ascending line
//! order. The checks share the classifier vocabulary from `regolens-parser`
//! (rule-head detection, message extraction, `input.` references) rather than
//! re-deriving their own patterns.
//!
//! These are line heuristics in the same spirit as the classifier. The
//! unused-variable check in particular is a token-presence test, not dataflow
//! analysis; it treats `input.<name>` references as declarations and any other
//! occurrence of the name as a use.

use crate::diagnostics::Diagnostic;
use once_cell::sync::Lazy;
use regex::Regex;
use regolens_parser::policy::line_classification::{
    extract_message, input_variables, is_rule_head,
};
use regolens_parser::policy::PolicyDocument;

static WORD_TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("word token pattern"));

/// Check 1: every `allow` rule should have a `deny` counterpart and vice versa.
pub fn check_rule_pairing(document: &PolicyDocument) -> Vec<Diagnostic> {
    let has_allow = any_line_starts_with(document, "allow");
    let has_deny = any_line_starts_with(document, "deny");

    document
        .trimmed_lines()
        .filter_map(|(number, line)| {
            let paired = if line.starts_with("allow") {
                has_deny
            } else if line.starts_with("deny") {
                has_allow
            } else {
                return None;
            };
            if paired {
                None
            } else {
                Some(Diagnostic::warning(
                    number,
                    "Missing corresponding allow/deny rule for this policy.",
                ))
            }
        })
        .collect()
}

/// Check 2: long lines hurt review; recommend a break.
pub fn check_line_length(document: &PolicyDocument, max_line_length: usize) -> Vec<Diagnostic> {
    document
        .trimmed_lines()
        .filter(|(_, line)| line.chars().count() > max_line_length)
        .map(|(number, _)| {
            Diagnostic::warning(
                number,
                "Line is too long. Consider breaking it into multiple lines.",
            )
        })
        .collect()
}

/// Check 3: `input.<name>` references whose name appears nowhere outside
/// `input.` expressions. Whole-document findings, one per unused name, in
/// first-reference order.
pub fn check_unused_variables(document: &PolicyDocument) -> Vec<Diagnostic> {
    let mut declared: Vec<&str> = Vec::new();
    for (_, line) in document.trimmed_lines() {
        for name in input_variables(line) {
            if !declared.contains(&name) {
                declared.push(name);
            }
        }
    }

    let mut used: Vec<&str> = Vec::new();
    for (_, line) in document.trimmed_lines() {
        if line.contains("input.") {
            continue;
        }
        for token in WORD_TOKEN_RE.find_iter(line) {
            used.push(token.as_str());
        }
    }

    declared
        .into_iter()
        .filter(|name| !used.contains(name))
        .map(|name| {
            Diagnostic::document_warning(format!(
                "Unused variable '{name}' detected. Review your policy for optimization."
            ))
        })
        .collect()
}

/// Check 4: quoted rule messages shorter than the threshold read as noise.
/// Rule signatures like `deny[msg]` mention `msg` without carrying a message
/// and are skipped.
pub fn check_message_descriptiveness(
    document: &PolicyDocument,
    min_message_length: usize,
) -> Vec<Diagnostic> {
    document
        .trimmed_lines()
        .filter(|(_, line)| line.contains("msg") && !is_rule_head(line))
        .filter(|(_, line)| extract_message(line).chars().count() < min_message_length)
        .map(|(number, _)| {
            Diagnostic::warning(
                number,
                format!(
                    "Message should be more descriptive (at least {min_message_length} characters)."
                ),
            )
        })
        .collect()
}

/// Check 5: every rule head should be preceded, anywhere above it, by at
/// least one `#` comment line.
pub fn check_comment_presence(document: &PolicyDocument) -> Vec<Diagnostic> {
    let mut comment_seen_before: Vec<usize> = Vec::new();
    for (number, line) in document.trimmed_lines() {
        if line.starts_with('#') {
            comment_seen_before.push(number);
        }
    }

    document
        .trimmed_lines()
        .filter(|(_, line)| is_rule_head(line))
        .filter(|(number, _)| !comment_seen_before.iter().any(|c| c < number))
        .map(|(number, _)| {
            Diagnostic::warning(number, "Consider adding a comment to describe this rule.")
        })
        .collect()
}

/// Check 6: comparing against `false` or `null` usually means the author
/// wanted `not` or absence checks; Rego treats these comparisons differently
/// than most languages.
pub fn check_logical_errors(document: &PolicyDocument) -> Vec<Diagnostic> {
    document
        .trimmed_lines()
        .filter(|(_, line)| line.contains("== false") || line.contains("== null"))
        .map(|(number, _)| {
            Diagnostic::warning(
                number,
                "Comparison with 'false' or 'null' may not behave as expected. Review this condition.",
            )
        })
        .collect()
}

/// Check 7: `not false` / `not null` almost always indicates a mistaken
/// negation.
pub fn check_negation_sanity(document: &PolicyDocument) -> Vec<Diagnostic> {
    document
        .trimmed_lines()
        .filter(|(_, line)| line.contains("not false") || line.contains("not null"))
        .map(|(number, _)| {
            Diagnostic::warning(
                number,
                "Negating 'false' or 'null' is likely incorrect. Double check this condition.",
            )
        })
        .collect()
}

/// Check 8: when both rule kinds are present, remind the author that their
/// evaluation order matters. One whole-document finding.
pub fn check_rule_co_presence(document: &PolicyDocument) -> Vec<Diagnostic> {
    if any_line_starts_with(document, "allow") && any_line_starts_with(document, "deny") {
        vec![Diagnostic::document_warning(
            "Policy defines both allow and deny rules. Double check the evaluation order.",
        )]
    } else {
        Vec::new()
    }
}

fn any_line_starts_with(document: &PolicyDocument, keyword: &str) -> bool {
    document
        .trimmed_lines()
        .any(|(_, line)| line.starts_with(keyword))
}
