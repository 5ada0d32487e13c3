//! Tree construction with an explicit cursor stack
//!
//!     [SyntaxTree] is the mutable form of the tree, used while parsing. The cursor stack
//!     holds the path from the root to the current insertion point and is never empty.
//!     Three primitives mutate it:
//!
//!         descend(tag, payload): add a child under the cursor and move into it.
//!         append(tag, payload):  add a leaf child under the cursor, cursor stays.
//!         ascend():              move back to the parent.
//!
//!     Every primitive checks its invariant and reports a [StructuralError] instead of
//!     corrupting the tree. [SyntaxTree::finalize] checks that every descend was matched by
//!     an ascend and hands back the immutable [EffectTree].

use super::effect_tree::EffectTree;
use super::node::{Node, NodeId, NodeType, Payload};
use crate::effect::range::Position;
use crate::effect::token::Token;
use std::fmt;

/// A violated tree-construction invariant
///
/// These indicate a defect in the grammar tables, never a problem with the input.
#[derive(Debug, Clone, PartialEq)]
pub enum StructuralError {
    /// ascend() with the cursor already at the root
    AscendPastRoot,
    /// finalize() with blocks still open
    Unbalanced { open: usize, innermost: NodeType },
    /// A node whose payload does not fit its tag
    PayloadMismatch {
        node_type: NodeType,
        payload: Option<Payload>,
    },
    /// descend() with a value tag, which must stay a leaf
    DescendIntoValue { node_type: NodeType },
    /// A consumed token that cannot fill the argument position it was read for
    ArgumentMismatch { token: Token },
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralError::AscendPastRoot => {
                write!(f, "ascend past the root of the syntax tree")
            }
            StructuralError::Unbalanced { open, innermost } => write!(
                f,
                "syntax tree finalized with {} unclosed node(s), innermost {}",
                open, innermost
            ),
            StructuralError::PayloadMismatch { node_type, payload } => match payload {
                Some(payload) => write!(f, "{} node cannot carry payload {}", node_type, payload),
                None => write!(f, "{} node requires a payload", node_type),
            },
            StructuralError::DescendIntoValue { node_type } => {
                write!(f, "cannot descend into {} value node", node_type)
            }
            StructuralError::ArgumentMismatch { token } => {
                write!(f, "token {} does not fit its argument position", token)
            }
        }
    }
}

impl std::error::Error for StructuralError {}

#[derive(Debug, Clone)]
pub struct SyntaxTree {
    nodes: Vec<Node>,
    cursor: Vec<NodeId>,
}

impl SyntaxTree {
    /// Create a tree holding only its root, with the cursor on the root
    pub fn new(
        root_type: NodeType,
        payload: Option<Payload>,
        position: Position,
    ) -> Result<Self, StructuralError> {
        if root_type.is_value() {
            return Err(StructuralError::DescendIntoValue {
                node_type: root_type,
            });
        }
        check_payload(root_type, payload.as_ref())?;

        let root = Node::new(NodeId(0), root_type, payload, position);
        Ok(Self {
            nodes: vec![root],
            cursor: vec![NodeId(0)],
        })
    }

    /// Add a child under the cursor and move the cursor into it
    pub fn descend(
        &mut self,
        node_type: NodeType,
        payload: Option<Payload>,
        position: Position,
    ) -> Result<NodeId, StructuralError> {
        if node_type.is_value() {
            return Err(StructuralError::DescendIntoValue { node_type });
        }
        let id = self.insert(node_type, payload, position)?;
        self.cursor.push(id);
        Ok(id)
    }

    /// Add a leaf child under the cursor without moving the cursor
    pub fn append(
        &mut self,
        node_type: NodeType,
        payload: Option<Payload>,
        position: Position,
    ) -> Result<NodeId, StructuralError> {
        self.insert(node_type, payload, position)
    }

    /// Move the cursor back to the parent, returning the node that was closed
    pub fn ascend(&mut self) -> Result<NodeId, StructuralError> {
        if self.cursor.len() <= 1 {
            return Err(StructuralError::AscendPastRoot);
        }
        self.cursor.pop().ok_or(StructuralError::AscendPastRoot)
    }

    /// The node under the cursor
    pub fn current_root(&self) -> &Node {
        &self.nodes[self.cursor_id().0]
    }

    /// Number of open descends
    pub fn depth(&self) -> usize {
        self.cursor.len() - 1
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check the cursor is back at the root and freeze the tree
    pub fn finalize(self) -> Result<EffectTree, StructuralError> {
        if self.cursor.len() != 1 {
            return Err(StructuralError::Unbalanced {
                open: self.depth(),
                innermost: self.current_root().node_type,
            });
        }
        Ok(EffectTree::new(self.nodes))
    }

    fn cursor_id(&self) -> NodeId {
        // the stack always holds at least the root
        self.cursor.last().copied().unwrap_or(NodeId(0))
    }

    fn insert(
        &mut self,
        node_type: NodeType,
        payload: Option<Payload>,
        position: Position,
    ) -> Result<NodeId, StructuralError> {
        check_payload(node_type, payload.as_ref())?;

        let id = NodeId(self.nodes.len());
        let parent = self.cursor_id();
        self.nodes.push(Node::new(id, node_type, payload, position));
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }
}

fn check_payload(node_type: NodeType, payload: Option<&Payload>) -> Result<(), StructuralError> {
    if node_type.accepts(payload) {
        Ok(())
    } else {
        Err(StructuralError::PayloadMismatch {
            node_type,
            payload: payload.cloned(),
        })
    }
}
