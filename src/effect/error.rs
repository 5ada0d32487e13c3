//! Compilation errors
//!
//!     Each stage has its own error type: [LexError] from the scanner, [SyntaxError] from the
//!     parser, [StructuralError] from the syntax tree and [SemanticError] from the resolver.
//!     [CompileError] wraps whichever one stopped the compilation. A failed compilation
//!     reports exactly one error.

use crate::effect::lexing::LexError;
use crate::effect::parsing::SyntaxError;
use crate::effect::range::Position;
use crate::effect::resolving::SemanticError;
use crate::effect::tree::StructuralError;
use std::fmt;

/// The stage that rejected the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    Structural,
    Semantic,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Lexical => "lexical error",
            ErrorKind::Syntax => "syntax error",
            ErrorKind::Structural => "structural error",
            ErrorKind::Semantic => "semantic error",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CompileError {
    Lexical(LexError),
    Syntax(SyntaxError),
    Structural(StructuralError),
    Semantic(SemanticError),
}

impl CompileError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CompileError::Lexical(_) => ErrorKind::Lexical,
            CompileError::Syntax(_) => ErrorKind::Syntax,
            CompileError::Structural(_) => ErrorKind::Structural,
            CompileError::Semantic(_) => ErrorKind::Semantic,
        }
    }

    /// Where in the source the error was found, if it relates to a location
    pub fn position(&self) -> Option<Position> {
        match self {
            CompileError::Lexical(error) => Some(error.position),
            CompileError::Syntax(error) => Some(error.position),
            CompileError::Structural(_) => None,
            CompileError::Semantic(error) => Some(error.position),
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Lexical(error) => write!(f, "{}: {}", self.kind(), error),
            CompileError::Syntax(error) => write!(f, "{}: {}", self.kind(), error),
            CompileError::Structural(error) => write!(f, "{}: {}", self.kind(), error),
            CompileError::Semantic(error) => write!(f, "{}: {}", self.kind(), error),
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompileError::Lexical(error) => Some(error),
            CompileError::Syntax(error) => Some(error),
            CompileError::Structural(error) => Some(error),
            CompileError::Semantic(error) => Some(error),
        }
    }
}

impl From<LexError> for CompileError {
    fn from(error: LexError) -> Self {
        CompileError::Lexical(error)
    }
}

impl From<SyntaxError> for CompileError {
    fn from(error: SyntaxError) -> Self {
        CompileError::Syntax(error)
    }
}

impl From<StructuralError> for CompileError {
    fn from(error: StructuralError) -> Self {
        CompileError::Structural(error)
    }
}

impl From<SemanticError> for CompileError {
    fn from(error: SemanticError) -> Self {
        CompileError::Semantic(error)
    }
}
