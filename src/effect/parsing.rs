//! Parser
//!
//!     Recognizes the nested block syntax of Effect files and builds the syntax tree.
//!
//!     The grammar lives in [grammar] as static tables: blocks, the statements each block
//!     accepts, and the argument shapes of every statement. [parser::Parser] is the engine
//!     that walks those tables with one token of lookahead, pulling tokens lazily from the
//!     scanner and issuing descend/append/ascend calls on a [SyntaxTree](crate::effect::tree::SyntaxTree).
//!
//!     Parsing stops at the first error. Errors carry the offending token (or end of input),
//!     its position, and the token classes that would have been accepted there.

pub mod grammar;
pub mod parser;

pub use parser::Parser;

use crate::effect::error::CompileError;
use crate::effect::range::Position;
use crate::effect::token::{Token, TokenClass};
use crate::effect::tree::EffectTree;
use std::fmt;

/// The next token does not fit the grammar
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxError {
    /// The offending token; `None` at end of input
    pub found: Option<Token>,
    /// Sorted, deduplicated classes that would have been accepted
    pub expected: Vec<TokenClass>,
    pub position: Position,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.found {
            Some(token) => write!(f, "unexpected {} at {}", token, self.position)?,
            None => write!(f, "unexpected end of input at {}", self.position)?,
        }

        let expected: Vec<String> = self.expected.iter().map(ToString::to_string).collect();
        match expected.as_slice() {
            [] => Ok(()),
            [only] => write!(f, ", expected {}", only),
            many => write!(f, ", expected one of {}", many.join(", ")),
        }
    }
}

impl std::error::Error for SyntaxError {}

/// Parse Effect source into a finalized syntax tree
pub fn parse(source: &str) -> Result<EffectTree, CompileError> {
    Parser::new(source)?.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::token::Keyword;

    #[test]
    fn test_syntax_error_display() {
        let error = SyntaxError {
            found: Some(Token::Keyword(Keyword::Pass)),
            expected: vec![TokenClass::Keyword(Keyword::Technique), TokenClass::CloseBrace],
            position: Position::new(2, 4),
        };
        assert_eq!(
            error.to_string(),
            "unexpected 'pass' at 3:5, expected one of 'technique', '}'"
        );
    }

    #[test]
    fn test_end_of_input_display() {
        let error = SyntaxError {
            found: None,
            expected: vec![TokenClass::CloseBrace],
            position: Position::new(0, 10),
        };
        assert_eq!(error.to_string(), "unexpected end of input at 1:11, expected '}'");
    }

    #[test]
    fn test_parse_entry_point() {
        let tree = parse("effect \"a\" {\n technique {\n pass { }\n }\n}\n").expect("valid effect");
        assert_eq!(tree.len(), 4);
    }
}
