//! # regolens-analysis
//!
//! Lint diagnostics and completion support for Rego-style policy files.
//!
//! The diagnostics engine runs a fixed sequence of independent checks over the
//! line stream of a [`regolens_parser::policy::PolicyDocument`] and produces
//! ordered, non-fatal findings. Like the parser, it is a pure function of the
//! input text: no state survives a call, and identical input yields identical
//! diagnostics in identical order.

#![allow(rustdoc::invalid_html_tags)]

pub mod checks;
pub mod completion;
pub mod diagnostics;

pub use diagnostics::{lint, lint_with_options, Diagnostic, DiagnosticSeverity, LintOptions};
