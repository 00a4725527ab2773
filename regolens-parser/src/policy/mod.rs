//! Main module for policy analysis functionality

pub mod document;
pub mod fact;
pub mod line_classification;
pub mod rule_grouping;

pub use document::PolicyDocument;
pub use fact::{Fact, FactKind};
pub use rule_grouping::{group, parse_policy, ParsedPolicy, RuleBlock};
