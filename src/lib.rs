//! # effect
//!
//! Compiler front end for the Effect material description language: scans and parses
//! `.fx` source, builds a syntax tree and resolves it into renderer-ready descriptors.
//!
//! ```rust-example
//! let effect = effect::compile(r#"effect "glass" { technique { pass { sceneblend add } } }"#)?;
//! assert_eq!(effect.techniques.len(), 1);
//! ```
//!
//! ## Testing
//!
//! For fixtures and the fluent descriptor assertions, see the
//! [testing module](effect::testing).

pub mod effect;

pub use effect::error::{CompileError, ErrorKind};
pub use effect::pipeline::{compile, Compilation, Compiler};
