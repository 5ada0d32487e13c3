//! The finalized, immutable syntax tree
//!
//!     An [EffectTree] can only be obtained from [SyntaxTree::finalize](super::SyntaxTree),
//!     so it is always balanced and rooted at an `effect` node. Traversal is depth-first in
//!     document order and can be run any number of times.

use super::node::{Node, NodeId};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectTree {
    nodes: Vec<Node>,
}

impl EffectTree {
    pub(super) fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn root(&self) -> &Node {
        &self.nodes[0]
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Children of `node` in insertion order
    pub fn children<'a>(&'a self, node: &'a Node) -> impl Iterator<Item = &'a Node> + 'a {
        node.children.iter().map(move |id| &self.nodes[id.0])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pre-order depth-first traversal yielding `(depth, node)`, root at depth 0
    pub fn traverse(&self) -> Traversal<'_> {
        Traversal {
            tree: self,
            stack: vec![(0, NodeId(0))],
        }
    }
}

pub struct Traversal<'a> {
    tree: &'a EffectTree,
    stack: Vec<(usize, NodeId)>,
}

impl<'a> Iterator for Traversal<'a> {
    type Item = (usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, id) = self.stack.pop()?;
        let node = &self.tree.nodes[id.0];
        self.stack
            .extend(node.children.iter().rev().map(|child| (depth + 1, *child)));
        Some((depth, node))
    }
}

#[cfg(test)]
mod tests {
    use crate::effect::range::Position;
    use crate::effect::token::Keyword;
    use crate::effect::tree::{EffectTree, NodeType, Payload, SyntaxTree};

    fn sample() -> EffectTree {
        let at = Position::default();
        let mut tree = SyntaxTree::new(Keyword::Effect.into(), None, at).expect("root");
        tree.append(NodeType::StringLiteral, Some(Payload::String("fx".into())), at)
            .expect("append");
        tree.descend(Keyword::Technique.into(), None, at).expect("descend");
        tree.descend(Keyword::Pass.into(), None, at).expect("descend");
        tree.descend(Keyword::Lighting.into(), None, at).expect("descend");
        tree.append(NodeType::Boolean, Some(Payload::Bool(true)), at)
            .expect("append");
        tree.ascend().expect("ascend");
        tree.ascend().expect("ascend");
        tree.descend(Keyword::Pass.into(), None, at).expect("descend");
        tree.ascend().expect("ascend");
        tree.ascend().expect("ascend");
        tree.finalize().expect("balanced")
    }

    #[test]
    fn test_traverse_in_document_order() {
        let tree = sample();
        let visited: Vec<_> = tree
            .traverse()
            .map(|(depth, node)| (depth, node.node_type.to_string()))
            .collect();

        assert_eq!(
            visited,
            vec![
                (0, "EFFECT".to_string()),
                (1, "STRINGLITERAL".to_string()),
                (1, "TECHNIQUE".to_string()),
                (2, "PASS".to_string()),
                (3, "LIGHTING".to_string()),
                (4, "BOOLEAN".to_string()),
                (2, "PASS".to_string()),
            ]
        );
    }

    #[test]
    fn test_traversal_is_rerunnable() {
        let tree = sample();
        let first: Vec<_> = tree.traverse().map(|(_, node)| node.id).collect();
        let second: Vec<_> = tree.traverse().map(|(_, node)| node.id).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), tree.len());
    }

    #[test]
    fn test_children_in_insertion_order() {
        let tree = sample();
        let kinds: Vec<_> = tree
            .children(tree.root())
            .map(|node| node.node_type)
            .collect();
        assert_eq!(
            kinds,
            vec![NodeType::StringLiteral, NodeType::Keyword(Keyword::Technique)]
        );
    }
}
