//! Tree Builder
//!
//! Flattens rule blocks into the node list a hierarchical renderer consumes.
//! Keys are assigned sequentially across the whole document; each block's
//! facts form a linear chain rooted at the rule head, and the group tag
//! alternates per block so renderers can alternate styling.

use regolens_parser::policy::RuleBlock;
use serde::{Deserialize, Serialize};

/// One node of the visualization tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    pub key: u32,
    /// `None` only for the head of each rule block.
    pub parent_key: Option<u32>,
    pub label: String,
    /// Alternates 0/1 per rule block for visual grouping.
    pub group_tag: u8,
}

/// Flatten blocks into renderer nodes.
///
/// Every fact becomes one node. The first fact of a block is a root; every
/// later fact chains to the immediately previous fact of the same block, so
/// the parent key is always the node's own key minus one. The counter is
/// local to the call.
pub fn build_tree(blocks: &[RuleBlock]) -> Vec<TreeNode> {
    let mut nodes = Vec::new();
    let mut next_key: u32 = 0;

    for (block_index, block) in blocks.iter().enumerate() {
        let group_tag = (block_index % 2) as u8;
        for (fact_index, fact) in block.facts.iter().enumerate() {
            let key = next_key;
            next_key += 1;
            nodes.push(TreeNode {
                key,
                parent_key: if fact_index == 0 { None } else { Some(key - 1) },
                label: fact.display_label(),
                group_tag,
            });
        }
    }

    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use regolens_parser::policy::parse_policy;

    fn blocks_for(source: &str) -> Vec<RuleBlock> {
        parse_policy(source).blocks
    }

    #[test]
    fn test_each_block_is_a_linear_chain() {
        let blocks = blocks_for(
            "deny[msg] {\n  resource.type == \"aws_vpc\"\n  msg == \"vpc required here\"\n}\nallow {\n  input.override == true\n}\n",
        );
        let nodes = build_tree(&blocks);

        let total_facts: usize = blocks.iter().map(|b| b.facts.len()).sum();
        assert_eq!(nodes.len(), total_facts);

        // Block 1: head + resource + message
        assert_eq!(nodes[0].parent_key, None);
        assert_eq!(nodes[0].label, "deny[msg]");
        assert_eq!(nodes[1].parent_key, Some(0));
        assert_eq!(nodes[1].label, "Resource Type: aws_vpc");
        assert_eq!(nodes[2].parent_key, Some(1));

        // Block 2 restarts the chain with a fresh root.
        assert_eq!(nodes[3].parent_key, None);
        assert_eq!(nodes[3].label, "allow");
        assert_eq!(nodes[4].parent_key, Some(3));
    }

    #[test]
    fn test_group_tag_alternates_per_block() {
        let blocks = blocks_for("deny {\n}\nallow {\n}\ndeny[a] {\n}\n");
        let nodes = build_tree(&blocks);
        let tags: Vec<_> = nodes.iter().map(|n| n.group_tag).collect();
        assert_eq!(tags, vec![0, 1, 0]);
    }

    // Chains stay intact for even fact counts, where parent arithmetic based
    // on a shared counter minus two visibly breaks (it would link the second
    // fact of a block to the previous block's tail).
    #[test]
    fn test_two_fact_blocks_link_to_their_own_head() {
        let blocks = blocks_for("deny {\n  input.a == 1\n}\nallow {\n  input.b == 2\n}\n");
        let nodes = build_tree(&blocks);

        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes[1].parent_key, Some(0));
        assert_eq!(nodes[3].parent_key, Some(2));
        assert_eq!(nodes[2].parent_key, None);
    }

    #[test]
    fn test_parent_keys_point_backwards_within_the_same_block() {
        let blocks = blocks_for(
            "deny[msg] {\n  resource_change.type == \"aws_vpc\"\n  resource_change.change.after.x\n  not input.flow_logs\n  msg == \"flow logs must be on\"\n}\n",
        );
        let nodes = build_tree(&blocks);

        for node in &nodes {
            if let Some(parent) = node.parent_key {
                assert!(parent < node.key);
            }
        }
        // Exactly one root per block.
        assert_eq!(nodes.iter().filter(|n| n.parent_key.is_none()).count(), 1);
    }

    #[test]
    fn test_empty_blocks_build_empty_tree() {
        assert!(build_tree(&[]).is_empty());
    }

    #[test]
    fn test_serialized_nodes_use_renderer_field_names() {
        let nodes = build_tree(&blocks_for("deny {\n  input.a == 1\n}\n"));
        let json = serde_json::to_string(&nodes).unwrap();
        assert!(json.contains("\"parentKey\""));
        assert!(json.contains("\"groupTag\""));
    }
}
