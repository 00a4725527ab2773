//! Rule Grouping
//!
//! Single-pass segmentation of a policy document into rule blocks. A block
//! spans from its `deny`/`allow` head to just before the next head (or end of
//! file). Lines before the first head open no block and contribute nothing
//! here; the package declaration is picked up separately by [`parse_policy`].

use crate::policy::document::PolicyDocument;
use crate::policy::fact::{Fact, FactKind};
use crate::policy::line_classification::{
    classify_line, is_rule_head, package_name, rule_head_fact,
};
use serde::Serialize;

/// One logical `deny`/`allow` rule.
///
/// Invariants: `facts[0]` is the `RuleHead`; `start_line < end_line`;
/// `end_line` is exclusive (the next head's line, or one past the last line).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleBlock {
    pub head_text: String,
    pub facts: Vec<Fact>,
    pub start_line: usize,
    pub end_line: usize,
}

impl RuleBlock {
    fn open(head_line: &str, line_number: usize) -> Self {
        let head = rule_head_fact(head_line, line_number);
        Self {
            head_text: head
                .extracted_value
                .clone()
                .unwrap_or_else(|| head_line.to_string()),
            facts: vec![head],
            start_line: line_number,
            end_line: line_number,
        }
    }

    fn close(mut self, end_line: usize) -> Self {
        self.end_line = end_line;
        self
    }

    /// Facts other than the rule head.
    pub fn body_facts(&self) -> &[Fact] {
        &self.facts[1..]
    }
}

/// A fully scanned policy file: the declared package plus its rule blocks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedPolicy {
    pub package: Option<String>,
    pub blocks: Vec<RuleBlock>,
}

impl ParsedPolicy {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Group a document into ordered, non-overlapping rule blocks.
pub fn group(document: &PolicyDocument) -> Vec<RuleBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<RuleBlock> = None;

    for (number, line) in document.trimmed_lines() {
        if is_rule_head(line) {
            if let Some(open) = current.take() {
                blocks.push(open.close(number));
            }
            current = Some(RuleBlock::open(line, number));
            continue;
        }
        if let Some(open) = current.as_mut() {
            open.facts.extend(classify_line(line, number));
        }
    }

    if let Some(open) = current.take() {
        blocks.push(open.close(document.line_count() + 1));
    }

    blocks
}

/// Scan raw policy text into its package declaration and rule blocks.
///
/// The first `package <name>` line wins; later declarations are ignored,
/// matching how the rest of the pipeline treats the document as one package.
pub fn parse_policy(source: &str) -> ParsedPolicy {
    let document = PolicyDocument::new(source);
    let package = document
        .trimmed_lines()
        .find_map(|(_, line)| package_name(line))
        .map(str::to_string);

    ParsedPolicy {
        package,
        blocks: group(&document),
    }
}
