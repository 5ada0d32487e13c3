//! Core token types shared across the scanner, parser, and tooling.
//!
//!     The scanner produces [Token]s paired with the byte span of their lexeme. The parser
//!     only ever looks at the token class; the span is kept for position reporting.
//!
//! Token Classes
//!
//!     Keyword:    one of the reserved words of [keyword::Keyword].
//!     Identifier: any other word. Identifiers are never accepted by the grammar, they
//!                 exist so that a misspelled keyword is reported as a syntax error at the
//!                 right place rather than as an unrecognized character.
//!     String:     a double quoted literal without the quotes.
//!     Number:     the raw numeric lexeme. Whether it is read as a float or an unsigned
//!                 integer is decided by the grammar position and checked by the resolver.
//!     Punctuation: `{`, `}` and `,`.

pub mod keyword;

pub use keyword::Keyword;

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// A lexical token of the Effect language
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "class", content = "text", rename_all = "kebab-case")]
pub enum Token {
    Keyword(Keyword),
    Identifier(String),
    String(String),
    Number(String),
    OpenBrace,
    CloseBrace,
    Comma,
}

impl Token {
    pub fn keyword(&self) -> Option<Keyword> {
        match self {
            Token::Keyword(keyword) => Some(*keyword),
            _ => None,
        }
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.keyword() == Some(keyword)
    }

    /// The class of this token, as used in expected-token sets
    pub fn class(&self) -> TokenClass {
        match self {
            Token::Keyword(keyword) => TokenClass::Keyword(*keyword),
            Token::Identifier(_) => TokenClass::Identifier,
            Token::String(_) => TokenClass::String,
            Token::Number(_) => TokenClass::Number,
            Token::OpenBrace => TokenClass::OpenBrace,
            Token::CloseBrace => TokenClass::CloseBrace,
            Token::Comma => TokenClass::Comma,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Keyword(keyword) => write!(f, "'{}'", keyword),
            Token::Identifier(text) => write!(f, "identifier '{}'", text),
            Token::String(text) => write!(f, "string \"{}\"", text),
            Token::Number(text) => write!(f, "number {}", text),
            Token::OpenBrace => f.write_str("'{'"),
            Token::CloseBrace => f.write_str("'}'"),
            Token::Comma => f.write_str("','"),
        }
    }
}

/// A token with the byte range of its lexeme
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Range<usize>,
}

impl SpannedToken {
    pub fn new(token: Token, span: Range<usize>) -> Self {
        Self { token, span }
    }
}

/// Token classes without lexeme text, used to describe what the parser would accept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum TokenClass {
    Keyword(Keyword),
    Identifier,
    String,
    Number,
    OpenBrace,
    CloseBrace,
    Comma,
    EndOfInput,
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenClass::Keyword(keyword) => write!(f, "'{}'", keyword),
            TokenClass::Identifier => f.write_str("identifier"),
            TokenClass::String => f.write_str("string"),
            TokenClass::Number => f.write_str("number"),
            TokenClass::OpenBrace => f.write_str("'{'"),
            TokenClass::CloseBrace => f.write_str("'}'"),
            TokenClass::Comma => f.write_str("','"),
            TokenClass::EndOfInput => f.write_str("end of input"),
        }
    }
}
