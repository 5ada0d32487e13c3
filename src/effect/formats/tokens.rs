//! Token stream format
//!
//!     One token per line: the one-based `line:column` of its first byte, padded to a
//!     column, then the token as error messages print it.
//!
//!         1:1     'effect'
//!         1:8     string "glass"
//!         1:16    '{'

use super::registry::{FormatError, Formatter};
use crate::effect::pipeline::Compilation;

pub fn to_tokens_str(compilation: &Compilation) -> String {
    let mut result = String::new();
    for token in &compilation.tokens {
        let position = compilation.location.byte_to_position(token.span.start);
        result.push_str(&format!("{:<8}{}\n", position.to_string(), token.token));
    }
    result
}

pub struct TokensFormatter;

impl Formatter for TokensFormatter {
    fn name(&self) -> &str {
        "tokens"
    }

    fn serialize(&self, compilation: &Compilation) -> Result<String, FormatError> {
        Ok(to_tokens_str(compilation))
    }

    fn description(&self) -> &str {
        "Token stream with source positions"
    }
}
