//! The scanner
//!
//!     [Scanner] wraps the logos lexer and turns raw tokens into [Token]s, classifying words
//!     against the keyword table. It is lazy: tokens are produced as the parser asks for them,
//!     and a scanner can be restarted from any byte offset with [Scanner::starting_at].
//!
//!     The sequence ends at end of input or at the first unrecognized character, which is
//!     yielded once as a [LexError]. After an error the scanner is fused.

use super::raw_tokens::RawToken;
use super::LexError;
use crate::effect::range::SourceLocation;
use crate::effect::token::{Keyword, SpannedToken, Token};
use logos::Logos;

pub struct Scanner<'source> {
    source: &'source str,
    offset: usize,
    lexer: logos::Lexer<'source, RawToken>,
    finished: bool,
}

impl<'source> Scanner<'source> {
    pub fn new(source: &'source str) -> Self {
        Self::starting_at(source, 0)
    }

    /// Start scanning at `offset`, which must fall on a character boundary
    ///
    /// Spans are reported relative to the full source, not to `offset`.
    pub fn starting_at(source: &'source str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let lexer = RawToken::lexer(&source[offset..]);
        Self {
            source,
            offset,
            lexer,
            finished: false,
        }
    }

    /// Byte offset just past the last token handed out
    pub fn position(&self) -> usize {
        self.offset + self.lexer.span().end
    }

    fn classify(raw: RawToken) -> Token {
        match raw {
            RawToken::OpenBrace => Token::OpenBrace,
            RawToken::CloseBrace => Token::CloseBrace,
            RawToken::Comma => Token::Comma,
            RawToken::Number(text) => Token::Number(text),
            RawToken::String(text) => Token::String(text),
            RawToken::Word(word) => match Keyword::from_lexeme(&word) {
                Some(keyword) => Token::Keyword(keyword),
                None => Token::Identifier(word),
            },
        }
    }
}

impl<'source> Iterator for Scanner<'source> {
    type Item = Result<SpannedToken, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = match self.lexer.next()? {
            Ok(raw) => {
                let span = self.lexer.span();
                let span = (span.start + self.offset)..(span.end + self.offset);
                let token = Self::classify(raw);
                log::trace!("scanned {} at {:?}", token, span);
                Ok(SpannedToken::new(token, span))
            }
            Err(()) => {
                self.finished = true;
                let start = self.offset + self.lexer.span().start;
                let character = self.source[start..].chars().next().unwrap_or('\0');
                let position = SourceLocation::new(self.source).byte_to_position(start);
                Err(LexError::new(character, position, start))
            }
        };

        Some(result)
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}
