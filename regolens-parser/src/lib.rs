//! # regolens-parser
//!
//! Line-oriented analysis model for Rego-style deny/allow policy files.
//!
//! This crate deliberately does not implement a grammar-correct Rego parser.
//! Policy tooling (linting, visualization, export) needs approximate structural
//! understanding, and the rule files it targets are line-disciplined enough that
//! per-line pattern classification recovers everything the downstream consumers
//! use. There is no AST and no evaluator; a line is classified into zero or more
//! facts, and facts are grouped into rule blocks.
//!
//! Layout:
//!
//! src/policy
//!   ├── document.rs             Source text wrapper with 1-indexed line access
//!   ├── fact.rs                 Classified line units (Fact / FactKind)
//!   ├── line_classification.rs  Per-line pattern table
//!   └── rule_grouping.rs        RuleBlock grouping and package extraction

#![allow(rustdoc::invalid_html_tags)]

pub mod policy;
