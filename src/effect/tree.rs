//! Syntax Tree
//!
//!     A generic ordered, rooted tree of typed nodes, built incrementally by the parser and
//!     read by the resolver.
//!
//!     Nodes live in an arena and refer to their children by [NodeId]. Construction goes
//!     through [SyntaxTree], whose cursor stack maps nested blocks in the source directly to
//!     nested subtrees: a block keyword descends, its closing brace ascends. Once parsing is
//!     done, [SyntaxTree::finalize] verifies the stack discipline and returns an immutable
//!     [EffectTree].
//!
//!     See [node] for the node tags and payload invariants.

pub mod effect_tree;
pub mod node;
pub mod syntax_tree;

pub use effect_tree::{EffectTree, Traversal};
pub use node::{Node, NodeId, NodeType, Payload};
pub use syntax_tree::{StructuralError, SyntaxTree};
