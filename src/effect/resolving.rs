//! Semantic Resolver
//!
//!     Walks a finalized [EffectTree](crate::effect::tree::EffectTree) and builds the
//!     [Effect](crate::effect::descriptors::Effect) descriptor graph.
//!
//!     The resolver is a small state machine over the tree traversal, see [resolver]. The
//!     knowledge of what each statement means is kept out of it, in two kinds of tables:
//!
//!         [mapping]:  keyword to domain enumeration, one table per enumerated argument
//!                     position, plus the scene blend and filtering presets.
//!         [schema]:   per block, statement keyword to an applier function that reads the
//!                     statement's positional arguments through an [Arguments] cursor and
//!                     writes the descriptor fields.
//!
//!     Anything the grammar could not rule out statically (a number that does not parse,
//!     a value out of its field's range, too many texture units) is reported as a
//!     [SemanticError]. Resolution stops at the first one; there are no partial results.

pub mod arguments;
pub mod mapping;
pub mod resolver;
pub mod schema;

pub use arguments::Arguments;
pub use resolver::resolve;

use crate::effect::range::Position;
use crate::effect::token::Keyword;
use crate::effect::tree::NodeType;
use std::fmt;

/// Limits applied while resolving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Texture units allowed in one pass
    pub max_texture_units: usize,
    /// `texcoordset` must be below this
    pub max_texture_coord_sets: u32,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            max_texture_units: 8,
            max_texture_coord_sets: 8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// A node the argument position does not accept
    UnknownEnumeration,
    /// Numeric text that does not parse as the field's type
    MalformedNumber,
    OutOfRange { min: u64, max: u64 },
    /// A float literal too large for an `f32`
    NotFinite,
    /// A value that must stay strictly below a configured limit
    NotBelow { limit: u64 },
    MissingArgument,
    UnexpectedArgument,
    /// A statement the enclosing block has no schema entry for
    UnexpectedStatement,
    TooManyTextureUnits { limit: usize },
}

/// A well-formed tree holding a value the descriptors cannot take
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticError {
    /// The statement being applied
    pub field: Keyword,
    /// The offending node's tag
    pub node: NodeType,
    /// The offending literal, for value nodes
    pub literal: Option<String>,
    pub reason: Reason,
    pub position: Position,
}

impl fmt::Display for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let literal = self.literal.as_deref().unwrap_or("");
        match self.reason {
            Reason::UnknownEnumeration => {
                write!(f, "'{}' does not accept {}", self.field, self.node)?
            }
            Reason::MalformedNumber => {
                write!(f, "'{}': malformed number '{}'", self.field, literal)?
            }
            Reason::OutOfRange { min, max } => write!(
                f,
                "'{}': {} is out of range {}..={}",
                self.field, literal, min, max
            )?,
            Reason::NotFinite => write!(
                f,
                "'{}': {} does not fit in a 32-bit float",
                self.field, literal
            )?,
            Reason::NotBelow { limit } => write!(
                f,
                "'{}': {} must be below the limit of {}",
                self.field, literal, limit
            )?,
            Reason::MissingArgument => write!(f, "'{}' is missing an argument", self.field)?,
            Reason::UnexpectedArgument => {
                write!(f, "'{}' has an unexpected argument {}", self.field, self.node)?
            }
            Reason::UnexpectedStatement => write!(f, "'{}' is not allowed here", self.field)?,
            Reason::TooManyTextureUnits { limit } => {
                write!(f, "pass declares more than {} texture units", limit)?
            }
        }
        write!(f, " at {}", self.position)
    }
}

impl std::error::Error for SemanticError {}
