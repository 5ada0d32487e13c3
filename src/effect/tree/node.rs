//! Syntax tree nodes
//!
//!     A node is a [NodeType] tag, an optional [Payload], its source position and the ids of
//!     its children in insertion order. Child order is significant: it is source order, and
//!     for statement nodes it is the order of the positional arguments.
//!
//!     Tags come in two families:
//!
//!         Keyword tags: blocks (`effect`, `pass`), statements (`sceneblend`, `fogdensity`)
//!         and choice markers (`add`, `srcalpha`). They never carry a payload.
//!
//!         Value tags: FLOATVALUE, UINTVALUE, STRINGLITERAL and BOOLEAN. They always carry a
//!         payload of the matching kind and are always leaves.

use crate::effect::range::Position;
use crate::effect::token::Keyword;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// The discriminator of a syntax tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeType {
    Keyword(Keyword),
    FloatValue,
    UIntValue,
    StringLiteral,
    Boolean,
}

impl NodeType {
    pub fn keyword(self) -> Option<Keyword> {
        match self {
            NodeType::Keyword(keyword) => Some(keyword),
            _ => None,
        }
    }

    /// Value tags are the leaves that carry literal payloads
    pub fn is_value(self) -> bool {
        !matches!(self, NodeType::Keyword(_))
    }

    /// Whether `payload` is what a node with this tag must carry
    pub fn accepts(self, payload: Option<&Payload>) -> bool {
        matches!(
            (self, payload),
            (NodeType::Keyword(_), None)
                | (NodeType::FloatValue, Some(Payload::Numeric(_)))
                | (NodeType::UIntValue, Some(Payload::Numeric(_)))
                | (NodeType::StringLiteral, Some(Payload::String(_)))
                | (NodeType::Boolean, Some(Payload::Bool(_)))
        )
    }
}

impl From<Keyword> for NodeType {
    fn from(keyword: Keyword) -> Self {
        NodeType::Keyword(keyword)
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeType::Keyword(keyword) => f.write_str(&keyword.as_str().to_ascii_uppercase()),
            NodeType::FloatValue => f.write_str("FLOATVALUE"),
            NodeType::UIntValue => f.write_str("UINTVALUE"),
            NodeType::StringLiteral => f.write_str("STRINGLITERAL"),
            NodeType::Boolean => f.write_str("BOOLEAN"),
        }
    }
}

/// Literal values carried by value nodes
///
/// Numbers keep their raw lexeme: the grammar position decides whether a number is a float
/// or an unsigned integer, and the resolver reports text that does not parse as either.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Bool(bool),
    Numeric(String),
    String(String),
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Bool(value) => write!(f, "{}", value),
            Payload::Numeric(text) => f.write_str(text),
            Payload::String(text) => write!(f, "\"{}\"", text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub node_type: NodeType,
    pub payload: Option<Payload>,
    pub position: Position,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(
        id: NodeId,
        node_type: NodeType,
        payload: Option<Payload>,
        position: Position,
    ) -> Self {
        Self {
            id,
            node_type,
            payload,
            position,
            children: Vec::new(),
        }
    }

    pub fn keyword(&self) -> Option<Keyword> {
        self.node_type.keyword()
    }

    pub fn child_ids(&self) -> &[NodeId] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_acceptance() {
        let number = Payload::Numeric("0.5".to_string());
        let text = Payload::String("rock".to_string());

        assert!(NodeType::FloatValue.accepts(Some(&number)));
        assert!(NodeType::UIntValue.accepts(Some(&number)));
        assert!(NodeType::StringLiteral.accepts(Some(&text)));
        assert!(NodeType::Boolean.accepts(Some(&Payload::Bool(true))));
        assert!(NodeType::Keyword(Keyword::Add).accepts(None));

        assert!(!NodeType::FloatValue.accepts(None));
        assert!(!NodeType::FloatValue.accepts(Some(&text)));
        assert!(!NodeType::Keyword(Keyword::Add).accepts(Some(&number)));
    }

    #[test]
    fn test_node_type_display() {
        assert_eq!(NodeType::Keyword(Keyword::SceneBlend).to_string(), "SCENEBLEND");
        assert_eq!(NodeType::FloatValue.to_string(), "FLOATVALUE");
        assert_eq!(NodeType::Boolean.to_string(), "BOOLEAN");
    }
}
