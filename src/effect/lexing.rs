//! Lexer
//!
//!     This module turns Effect source text into tokens. It has two layers:
//!
//!         1. Raw tokenization with logos. See [raw_tokens]. Whitespace and both comment
//!            styles (`// line` and `/* block */`) are skipped here, and every word is just
//!            a word.
//!
//!         2. The [Scanner](scanner::Scanner), which classifies words against the keyword
//!            table, attaches absolute spans and turns logos errors into [LexError]s with
//!            the offending character and its line/column position.
//!
//!     The parser pulls tokens from the scanner one at a time, so scanning stops as soon as
//!     parsing stops. [tokenize] collects a whole stream for tooling and tests.

pub mod raw_tokens;
pub mod scanner;

pub use scanner::Scanner;

use crate::effect::range::Position;
use crate::effect::token::SpannedToken;
use std::fmt;

/// An unrecognized character in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub character: char,
    pub position: Position,
    /// Byte offset of the character
    pub offset: usize,
}

impl LexError {
    pub fn new(character: char, position: Position, offset: usize) -> Self {
        Self {
            character,
            position,
            offset,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unrecognized character {:?} at {}",
            self.character, self.position
        )
    }
}

impl std::error::Error for LexError {}

/// Scan the whole source, stopping at the first lexical error
pub fn tokenize(source: &str) -> Result<Vec<SpannedToken>, LexError> {
    Scanner::new(source).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::token::{Keyword, Token};

    #[test]
    fn test_tokenize_collects_everything() {
        let tokens = tokenize("sceneblend add").expect("source to scan");
        let classes: Vec<_> = tokens.into_iter().map(|t| t.token).collect();
        assert_eq!(
            classes,
            vec![
                Token::Keyword(Keyword::SceneBlend),
                Token::Keyword(Keyword::Add)
            ]
        );
    }

    #[test]
    fn test_tokenize_empty_source() {
        assert_eq!(tokenize("  // nothing here\n").expect("source to scan"), vec![]);
    }

    #[test]
    fn test_tokenize_reports_first_error() {
        let error = tokenize("pass { ambient 1 # 1 }").expect_err("lex error");
        assert_eq!(error.character, '#');
        assert_eq!(error.to_string(), "unrecognized character '#' at 1:18");
    }
}
