//! The grammar engine
//!
//!     [Parser] pulls tokens from the [Scanner] one at a time and walks the tables of
//!     [super::grammar], turning every recognized construct into [SyntaxTree] operations:
//!
//!         block keyword      descend, then header arguments, '{', body entries, '}' ascend
//!         statement keyword  descend, then its arguments, then ascend
//!         choice keyword     append a marker leaf
//!         literal            append a value leaf carrying the raw lexeme
//!
//!     The root `effect` block is special only in that it creates the tree instead of
//!     descending into it. After its closing brace the only acceptable token is end of input.
//!
//!     On failure the parser reports the next token together with the sorted set of token
//!     classes it would have accepted in its current state and stops.

use super::grammar::{self, Arg, Block, Entry};
use super::SyntaxError;
use crate::effect::error::CompileError;
use crate::effect::lexing::Scanner;
use crate::effect::range::{Position, SourceLocation};
use crate::effect::token::{Keyword, SpannedToken, Token, TokenClass};
use crate::effect::tree::{EffectTree, NodeType, Payload, StructuralError, SyntaxTree};

pub struct Parser<'source> {
    scanner: Scanner<'source>,
    location: SourceLocation,
    end: usize,
    lookahead: Option<SpannedToken>,
    /// Classes that could have extended the statement that just ended
    continuation: Vec<TokenClass>,
}

impl<'source> Parser<'source> {
    pub fn new(source: &'source str) -> Result<Self, CompileError> {
        let mut scanner = Scanner::new(source);
        let lookahead = scanner.next().transpose()?;
        Ok(Self {
            scanner,
            location: SourceLocation::new(source),
            end: source.len(),
            lookahead,
            continuation: Vec::new(),
        })
    }

    /// Parse a complete effect
    pub fn parse(mut self) -> Result<EffectTree, CompileError> {
        let root = &grammar::EFFECT;
        let keyword = self.expect(&[TokenClass::Keyword(root.keyword)])?;
        let position = self.position_of(&keyword);
        log::debug!("opened {} block at {}", root.keyword, position);

        let mut tree = SyntaxTree::new(root.keyword.into(), None, position)?;
        self.parse_block_contents(&mut tree, root)?;

        if self.lookahead.is_some() {
            return Err(self.unexpected(vec![TokenClass::EndOfInput]).into());
        }
        Ok(tree.finalize()?)
    }

    fn parse_block(
        &mut self,
        tree: &mut SyntaxTree,
        block: &'static Block,
    ) -> Result<(), CompileError> {
        let keyword = self.bump()?;
        let position = self.position_of(&keyword);
        log::debug!("opened {} block at {}", block.keyword, position);

        tree.descend(block.keyword.into(), None, position)?;
        self.parse_block_contents(tree, block)?;
        tree.ascend()?;
        Ok(())
    }

    /// Header, braces and body of a block whose node is under the cursor
    fn parse_block_contents(
        &mut self,
        tree: &mut SyntaxTree,
        block: &'static Block,
    ) -> Result<(), CompileError> {
        self.parse_args(tree, block.header)?;
        self.expect(&[TokenClass::OpenBrace])?;

        let mut in_preamble = true;
        let mut has_required = block.required.is_none();

        loop {
            let class = self.peek_class();
            if class == TokenClass::CloseBrace && has_required {
                self.bump()?;
                return Ok(());
            }

            let entry = match class {
                TokenClass::Keyword(keyword) => block.entry(keyword, in_preamble),
                _ => None,
            };
            let Some(entry) = entry else {
                let mut expected: Vec<TokenClass> = block
                    .entries(in_preamble)
                    .map(|entry| TokenClass::Keyword(entry.keyword()))
                    .collect();
                if has_required {
                    expected.push(TokenClass::CloseBrace);
                }
                expected.append(&mut self.continuation);
                return Err(self.unexpected(expected).into());
            };

            self.continuation.clear();
            let keyword = entry.keyword();
            if !block.is_preamble(keyword) {
                in_preamble = false;
            }
            if block.required == Some(keyword) {
                has_required = true;
            }

            match entry {
                Entry::Block(nested) => self.parse_block(tree, nested)?,
                Entry::Statement { args, .. } => {
                    let token = self.bump()?;
                    tree.descend(keyword.into(), None, self.position_of(&token))?;
                    self.parse_args(tree, args)?;
                    tree.ascend()?;
                }
            }
        }
    }

    fn parse_args(
        &mut self,
        tree: &mut SyntaxTree,
        args: &'static [Arg],
    ) -> Result<(), CompileError> {
        for (index, arg) in args.iter().enumerate() {
            if index > 0 {
                self.skip_comma()?;
            }
            self.parse_arg(tree, arg)?;
        }
        Ok(())
    }

    fn parse_arg(
        &mut self,
        tree: &mut SyntaxTree,
        arg: &'static Arg,
    ) -> Result<(), CompileError> {
        match arg {
            Arg::Bool | Arg::Float | Arg::UInt | Arg::Str | Arg::Choice(_) => {
                let token = self.expect(&arg.first())?;
                let position = self.position_of(&token);
                let (node_type, payload) = leaf_for(arg, token.token)?;
                tree.append(node_type, payload, position)?;
            }
            Arg::Repeat { item, min, max } => {
                self.parse_arg(tree, item)?;
                let mut count = 1;
                while count < *max {
                    let class = self.peek_class();
                    if class == TokenClass::Comma {
                        self.bump()?;
                    } else if !item.starts_with(class) {
                        if count < *min {
                            let mut expected = item.first();
                            expected.push(TokenClass::Comma);
                            return Err(self.unexpected(expected).into());
                        }
                        self.continuation = item.first();
                        self.continuation.push(TokenClass::Comma);
                        break;
                    }
                    self.parse_arg(tree, item)?;
                    count += 1;
                }
            }
            Arg::OneOf(alternatives) => {
                let class = self.peek_class();
                let chosen = alternatives
                    .iter()
                    .find(|sequence| sequence.first().is_some_and(|arg| arg.starts_with(class)));
                match chosen {
                    Some(sequence) => self.parse_args(tree, *sequence)?,
                    None => return Err(self.unexpected(arg.first()).into()),
                }
            }
        }
        Ok(())
    }

    fn skip_comma(&mut self) -> Result<(), CompileError> {
        if self.peek_class() == TokenClass::Comma {
            self.bump()?;
        }
        Ok(())
    }

    fn peek_class(&self) -> TokenClass {
        self.lookahead
            .as_ref()
            .map_or(TokenClass::EndOfInput, |spanned| spanned.token.class())
    }

    /// Consume the lookahead token, which must exist
    fn bump(&mut self) -> Result<SpannedToken, CompileError> {
        let next = self.scanner.next().transpose()?;
        match std::mem::replace(&mut self.lookahead, next) {
            Some(token) => Ok(token),
            None => Err(self.unexpected(Vec::new()).into()),
        }
    }

    /// Consume the lookahead token if its class is one of `expected`
    fn expect(&mut self, expected: &[TokenClass]) -> Result<SpannedToken, CompileError> {
        if expected.contains(&self.peek_class()) {
            self.bump()
        } else {
            Err(self.unexpected(expected.to_vec()).into())
        }
    }

    fn unexpected(&self, mut expected: Vec<TokenClass>) -> SyntaxError {
        expected.sort();
        expected.dedup();
        let position = match &self.lookahead {
            Some(spanned) => self.position_of(spanned),
            None => self.location.byte_to_position(self.end),
        };
        SyntaxError {
            found: self.lookahead.as_ref().map(|spanned| spanned.token.clone()),
            expected,
            position,
        }
    }

    fn position_of(&self, token: &SpannedToken) -> Position {
        self.location.byte_to_position(token.span.start)
    }
}

/// The leaf node a consumed token becomes at a value argument position
fn leaf_for(arg: &Arg, token: Token) -> Result<(NodeType, Option<Payload>), StructuralError> {
    match (arg, token) {
        (Arg::Bool, Token::Keyword(keyword @ (Keyword::Enabled | Keyword::Disabled))) => Ok((
            NodeType::Boolean,
            Some(Payload::Bool(keyword == Keyword::Enabled)),
        )),
        (Arg::Float, Token::Number(text)) => {
            Ok((NodeType::FloatValue, Some(Payload::Numeric(text))))
        }
        (Arg::UInt, Token::Number(text)) => Ok((NodeType::UIntValue, Some(Payload::Numeric(text)))),
        (Arg::Str, Token::String(text)) => {
            Ok((NodeType::StringLiteral, Some(Payload::String(text))))
        }
        (Arg::Choice(set), Token::Keyword(keyword)) if set.contains(keyword) => {
            Ok((keyword.into(), None))
        }
        (_, token) => Err(StructuralError::ArgumentMismatch { token }),
    }
}
