//! Tree visualization - text rendering
//!
//! Connector-drawn text rendering of the policy tree for terminals. Each rule
//! block is one chain; the block marker alternates with the group tag so
//! adjacent rules stay visually distinct without color.
//!
//! ## Example
//!
//! ```text
//! ● deny[msg]
//! └─ Resource Type: aws_s3_bucket
//!    └─ Message: bucket not private
//! ○ allow
//! └─ Condition: input.override == true
//! ```

use crate::error::FormatError;
use crate::format::Format;
use crate::tree::{build_tree, TreeNode};
use regolens_parser::policy::ParsedPolicy;
use std::collections::HashMap;

fn group_marker(group_tag: u8, alternate: bool) -> &'static str {
    if !alternate || group_tag % 2 == 0 {
        "●"
    } else {
        "○"
    }
}

/// Render the flat node list as an indented connector tree.
///
/// The node list is a sequence of linear chains; a node without a parent
/// starts a new chain at depth zero.
pub fn render_nodes(nodes: &[TreeNode], alternate_markers: bool) -> String {
    let mut output = String::new();
    let mut depth = 0usize;

    for node in nodes {
        if node.parent_key.is_none() {
            depth = 0;
            output.push_str(&format!(
                "{} {}\n",
                group_marker(node.group_tag, alternate_markers),
                node.label
            ));
        } else {
            output.push_str(&format!("{}└─ {}\n", "   ".repeat(depth), node.label));
            depth += 1;
        }
    }

    output
}

pub fn to_treeviz_str(policy: &ParsedPolicy) -> String {
    to_treeviz_str_with_params(policy, &HashMap::new())
}

/// Convert a policy to treeviz text with optional parameters
///
/// # Parameters
///
/// - `"color-groups"`: when set to `"false"`, every block uses the same
///   marker instead of alternating per group tag
pub fn to_treeviz_str_with_params(
    policy: &ParsedPolicy,
    params: &HashMap<String, String>,
) -> String {
    let alternate = params
        .get("color-groups")
        .map(|v| v.to_lowercase() != "false")
        .unwrap_or(true);

    render_nodes(&build_tree(&policy.blocks), alternate)
}

pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Rule structure as a plain-text tree"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree"]
    }

    fn serialize(&self, policy: &ParsedPolicy) -> Result<String, FormatError> {
        Ok(to_treeviz_str(policy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regolens_parser::policy::parse_policy;

    #[test]
    fn test_render_alternates_markers_and_indents_chains() {
        let policy = parse_policy(
            "deny[msg] {\n  resource.type == \"aws_s3_bucket\"\n  msg == \"bucket must stay private\"\n}\nallow {\n  input.override == true\n}\n",
        );
        let rendered = to_treeviz_str(&policy);
        let expected = "\
● deny[msg]
└─ Resource Type: aws_s3_bucket
   └─ Message: bucket must stay private
○ allow
└─ Condition: input.override == true
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_color_groups_param_disables_marker_alternation() {
        let policy = parse_policy("deny {\n}\nallow {\n}\n");
        let params = HashMap::from([("color-groups".to_string(), "false".to_string())]);
        let rendered = to_treeviz_str_with_params(&policy, &params);
        assert_eq!(rendered, "● deny\n● allow\n");
    }

    #[test]
    fn test_empty_policy_renders_empty() {
        assert_eq!(to_treeviz_str(&parse_policy("")), "");
    }
}
