//! Facts
//!
//! A fact is a classified, semantically tagged piece of information extracted
//! from a single line of policy text. One line may yield several facts (a
//! condition line can carry both a negation and an `input.` reference).

use serde::{Deserialize, Serialize};

/// What a classified line fragment means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FactKind {
    /// A `deny`/`allow` rule signature.
    RuleHead,
    /// A resource-type comparison against a quoted string.
    ResourceType,
    /// Evaluation of the post-change state of a resource.
    ChangeAfter,
    /// Evaluation of the pre-change state of a resource.
    ChangeBefore,
    /// A negated condition.
    Negation,
    /// A `msg` assignment or comparison.
    Message,
    /// Any other condition referencing `input.`.
    InputCondition,
}

/// Extraction sentinel used when a pattern matches but no quoted value is found.
pub const UNKNOWN_VALUE: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub kind: FactKind,
    pub raw_text: String,
    pub extracted_value: Option<String>,
    /// 1-indexed line the fact was extracted from.
    pub source_line: usize,
}

impl Fact {
    pub fn new(kind: FactKind, raw_text: impl Into<String>, source_line: usize) -> Self {
        Self {
            kind,
            raw_text: raw_text.into(),
            extracted_value: None,
            source_line,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.extracted_value = Some(value.into());
        self
    }

    /// Human-readable rendering used by tree visualization.
    pub fn display_label(&self) -> String {
        let value = self.extracted_value.as_deref();
        match self.kind {
            FactKind::RuleHead => value.unwrap_or(&self.raw_text).to_string(),
            FactKind::ResourceType => {
                format!("Resource Type: {}", value.unwrap_or(UNKNOWN_VALUE))
            }
            FactKind::ChangeAfter => "Evaluating Change After".to_string(),
            FactKind::ChangeBefore => "Evaluating Change Before".to_string(),
            FactKind::Negation => "Not Condition Applied".to_string(),
            FactKind::Message => format!("Message: {}", value.unwrap_or(UNKNOWN_VALUE)),
            FactKind::InputCondition => {
                format!("Condition: {}", value.unwrap_or(&self.raw_text))
            }
        }
    }
}
