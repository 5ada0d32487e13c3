//! Typed positional argument cursor
//!
//!     A statement node's children are its arguments, in source order. [Arguments] hands them
//!     out one at a time, already converted to the type the field needs, so appliers read
//!     like the statement they implement:
//!
//!         sceneblend srcalpha one   =>  args.choice(BLEND_FACTORS)?, args.choice(BLEND_FACTORS)?
//!
//!     Every read either succeeds or produces a [SemanticError] naming the statement, the
//!     node and the literal involved.

use super::mapping::{lookup, Table};
use super::{Reason, ResolveOptions, SemanticError};
use crate::effect::descriptors::{Colour, Vector3};
use crate::effect::token::Keyword;
use crate::effect::tree::{EffectTree, Node, NodeType, Payload};
use std::num::IntErrorKind;

pub struct Arguments<'a> {
    tree: &'a EffectTree,
    statement: &'a Node,
    keyword: Keyword,
    options: &'a ResolveOptions,
    args: Vec<&'a Node>,
    next: usize,
}

impl<'a> Arguments<'a> {
    /// Cursor over the children of a keyword node
    pub fn new(tree: &'a EffectTree, statement: &'a Node, options: &'a ResolveOptions) -> Self {
        Self {
            tree,
            statement,
            keyword: statement.keyword().unwrap_or(Keyword::Effect),
            options,
            args: tree.children(statement).collect(),
            next: 0,
        }
    }

    /// The statement these arguments belong to
    pub fn keyword(&self) -> Keyword {
        self.keyword
    }

    pub fn statement(&self) -> &'a Node {
        self.statement
    }

    pub fn options(&self) -> &'a ResolveOptions {
        self.options
    }

    pub fn peek(&self) -> Option<&'a Node> {
        self.args.get(self.next).copied()
    }

    pub fn is_exhausted(&self) -> bool {
        self.next >= self.args.len()
    }

    /// Whether the next argument is a marker found in `table`
    pub fn next_in<T: Copy>(&self, table: &[(Keyword, T)]) -> bool {
        self.peek()
            .and_then(Node::keyword)
            .is_some_and(|keyword| lookup(table, keyword).is_some())
    }

    pub fn next_is(&self, node_type: NodeType) -> bool {
        self.peek().is_some_and(|node| node.node_type == node_type)
    }

    pub fn float(&mut self) -> Result<f32, SemanticError> {
        let node = self.take()?;
        let text = self.numeric(node, NodeType::FloatValue)?;
        let value = text
            .parse::<f32>()
            .map_err(|_| self.error_at(node, Reason::MalformedNumber))?;
        if !value.is_finite() {
            return Err(self.error_at(node, Reason::NotFinite));
        }
        Ok(value)
    }

    pub fn uint(&mut self) -> Result<u32, SemanticError> {
        let node = self.take()?;
        let text = self.numeric(node, NodeType::UIntValue)?;
        text.parse::<u32>().map_err(|error| {
            let out_of_range = text.starts_with('-')
                || matches!(error.kind(), IntErrorKind::PosOverflow);
            if out_of_range {
                self.error_at(
                    node,
                    Reason::OutOfRange {
                        min: 0,
                        max: u64::from(u32::MAX),
                    },
                )
            } else {
                self.error_at(node, Reason::MalformedNumber)
            }
        })
    }

    /// An unsigned integer within `min..=max`
    pub fn uint_in(&mut self, min: u32, max: u32) -> Result<u32, SemanticError> {
        let node = self.peek();
        let value = self.uint()?;
        if (min..=max).contains(&value) {
            return Ok(value);
        }
        let reason = Reason::OutOfRange {
            min: u64::from(min),
            max: u64::from(max),
        };
        match node {
            Some(node) => Err(self.error_at(node, reason)),
            None => Err(self.error_at(self.statement, reason)),
        }
    }

    /// An unsigned integer strictly below `limit`; nothing fits a zero limit
    pub fn uint_below(&mut self, limit: u32) -> Result<u32, SemanticError> {
        let node = self.peek();
        let value = self.uint()?;
        if value < limit {
            return Ok(value);
        }
        let reason = Reason::NotBelow {
            limit: u64::from(limit),
        };
        match node {
            Some(node) => Err(self.error_at(node, reason)),
            None => Err(self.error_at(self.statement, reason)),
        }
    }

    pub fn bool(&mut self) -> Result<bool, SemanticError> {
        let node = self.take()?;
        match (&node.node_type, &node.payload) {
            (NodeType::Boolean, Some(Payload::Bool(value))) => Ok(*value),
            _ => Err(self.error_at(node, Reason::UnknownEnumeration)),
        }
    }

    pub fn string(&mut self) -> Result<String, SemanticError> {
        let node = self.take()?;
        match (&node.node_type, &node.payload) {
            (NodeType::StringLiteral, Some(Payload::String(text))) => Ok(text.clone()),
            _ => Err(self.error_at(node, Reason::UnknownEnumeration)),
        }
    }

    /// A marker mapped through `table`
    pub fn choice<T: Copy>(&mut self, table: Table<T>) -> Result<T, SemanticError> {
        let node = self.take()?;
        node.keyword()
            .and_then(|keyword| lookup(table, keyword))
            .ok_or_else(|| self.error_at(node, Reason::UnknownEnumeration))
    }

    /// Every remaining marker, mapped through `table`
    pub fn choices<T: Copy>(&mut self, table: Table<T>) -> Result<Vec<T>, SemanticError> {
        let mut values = Vec::new();
        while !self.is_exhausted() {
            values.push(self.choice(table)?);
        }
        Ok(values)
    }

    /// Consume the next argument if it is the `keyword` marker
    pub fn keyword_if(&mut self, keyword: Keyword) -> bool {
        let found = self.next_is(NodeType::Keyword(keyword));
        if found {
            self.next += 1;
        }
        found
    }

    /// Every remaining argument as a float
    pub fn floats(&mut self) -> Result<Vec<f32>, SemanticError> {
        let mut values = Vec::new();
        while !self.is_exhausted() {
            values.push(self.float()?);
        }
        Ok(values)
    }

    /// Three or four floats; alpha defaults to 1
    pub fn colour(&mut self) -> Result<Colour, SemanticError> {
        let components = self.floats()?;
        Colour::from_components(&components).ok_or_else(|| self.missing_argument())
    }

    /// Two or three floats; z defaults to 0
    pub fn vector(&mut self) -> Result<Vector3, SemanticError> {
        let components = self.floats()?;
        Vector3::from_components(&components).ok_or_else(|| self.missing_argument())
    }

    /// Cursors over each remaining child, for blocks applied as a whole
    pub fn nested(&mut self) -> Vec<Arguments<'a>> {
        let rest = self.args.split_off(self.next.min(self.args.len()));
        rest.into_iter()
            .map(|node| Arguments::new(self.tree, node, self.options))
            .collect()
    }

    /// Fail if any argument was left unread
    pub fn finish(&self) -> Result<(), SemanticError> {
        match self.peek() {
            Some(node) => Err(self.error_at(node, Reason::UnexpectedArgument)),
            None => Ok(()),
        }
    }

    pub fn error_at(&self, node: &Node, reason: Reason) -> SemanticError {
        SemanticError {
            field: self.keyword,
            node: node.node_type,
            literal: node.payload.as_ref().map(|payload| match payload {
                Payload::Numeric(text) | Payload::String(text) => text.clone(),
                Payload::Bool(value) => value.to_string(),
            }),
            reason,
            position: node.position,
        }
    }

    fn take(&mut self) -> Result<&'a Node, SemanticError> {
        let node = self.peek().ok_or_else(|| self.missing_argument())?;
        self.next += 1;
        Ok(node)
    }

    pub fn missing_argument(&self) -> SemanticError {
        SemanticError {
            field: self.keyword,
            node: self.statement.node_type,
            literal: None,
            reason: Reason::MissingArgument,
            position: self.statement.position,
        }
    }

    fn numeric(&self, node: &'a Node, expected: NodeType) -> Result<&'a str, SemanticError> {
        match &node.payload {
            Some(Payload::Numeric(text)) if node.node_type == expected => Ok(text.as_str()),
            _ => Err(self.error_at(node, Reason::UnknownEnumeration)),
        }
    }
}
