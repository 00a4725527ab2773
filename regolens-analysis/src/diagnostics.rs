//! Diagnostic collection for editor lint display
//!
//! Structured warning information consumable by an editor integration:
//! per-line findings carry a 1-indexed line number, whole-document findings
//! carry none. Findings are never fatal; policy text that matches nothing
//! simply produces an empty list.

use crate::checks;
use regolens_parser::policy::PolicyDocument;
use serde::Serialize;
use std::fmt;

/// Diagnostic severity levels.
///
/// The full scale exists for editor protocol compatibility, but every check
/// in this engine emits `Warning`; policy style findings are advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Information,
    Hint,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticSeverity::Error => write!(f, "error"),
            DiagnosticSeverity::Warning => write!(f, "warning"),
            DiagnosticSeverity::Information => write!(f, "info"),
            DiagnosticSeverity::Hint => write!(f, "hint"),
        }
    }
}

/// A single lint finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// 1-indexed line, or `None` for whole-document findings.
    pub line: Option<usize>,
    pub message: String,
    pub severity: DiagnosticSeverity,
}

impl Diagnostic {
    pub fn warning(line: usize, message: impl Into<String>) -> Self {
        Self {
            line: Some(line),
            message: message.into(),
            severity: DiagnosticSeverity::Warning,
        }
    }

    pub fn document_warning(message: impl Into<String>) -> Self {
        Self {
            line: None,
            message: message.into(),
            severity: DiagnosticSeverity::Warning,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{} [line {}]: {}", self.severity, line, self.message),
            None => write!(f, "{} [policy]: {}", self.severity, self.message),
        }
    }
}

/// Tunable thresholds for the lint checks.
///
/// Defaults match the historical behavior: 100-character lines, 10-character
/// minimum messages, comment requirement on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintOptions {
    pub max_line_length: usize,
    pub min_message_length: usize,
    pub require_comments: bool,
}

impl Default for LintOptions {
    fn default() -> Self {
        Self {
            max_line_length: 100,
            min_message_length: 10,
            require_comments: true,
        }
    }
}

/// Lint a document with default options.
pub fn lint(document: &PolicyDocument) -> Vec<Diagnostic> {
    lint_with_options(document, &LintOptions::default())
}

/// Run every check in its fixed order.
///
/// Checks are independent; the fixed sequence (and ascending line order
/// within each check) exists so repeated runs over identical text produce
/// byte-identical output for the editor to diff against.
pub fn lint_with_options(document: &PolicyDocument, options: &LintOptions) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    diagnostics.extend(checks::check_rule_pairing(document));
    diagnostics.extend(checks::check_line_length(document, options.max_line_length));
    diagnostics.extend(checks::check_unused_variables(document));
    diagnostics.extend(checks::check_message_descriptiveness(
        document,
        options.min_message_length,
    ));
    if options.require_comments {
        diagnostics.extend(checks::check_comment_presence(document));
    }
    diagnostics.extend(checks::check_logical_errors(document));
    diagnostics.extend(checks::check_negation_sanity(document));
    diagnostics.extend(checks::check_rule_co_presence(document));

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_lints_clean() {
        assert!(lint(&PolicyDocument::new("")).is_empty());
    }

    #[test]
    fn test_lint_is_idempotent() {
        let source = "deny[msg] {\n  msg == \"no\"\n}\n";
        let doc = PolicyDocument::new(source);
        assert_eq!(lint(&doc), lint(&doc));
    }

    #[test]
    fn test_severity_is_always_warning() {
        let source = "allow {\n  input.a == false\n  not null\n}\n";
        for diagnostic in lint(&PolicyDocument::new(source)) {
            assert_eq!(diagnostic.severity, DiagnosticSeverity::Warning);
        }
    }
}
