//! Output formats for compilation artifacts
//!
//!     Each format renders one view of a [Compilation](crate::effect::pipeline::Compilation):
//!
//!         tokens    the token stream, one token per line with its position
//!         treeviz   the syntax tree, one node per line with box-drawing connectors
//!         json      the resolved descriptors
//!         yaml      the resolved descriptors
//!
//!     Formats implement [Formatter] and are looked up by name in a [FormatRegistry].

pub mod json;
pub mod registry;
pub mod tokens;
pub mod treeviz;
pub mod yaml;

pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use tokens::{to_tokens_str, TokensFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
pub use yaml::YamlFormatter;
