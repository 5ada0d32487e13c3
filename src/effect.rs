//! Main module for the Effect compiler front end
//!
//!     Stages, in pipeline order:
//!
//!         lexing      source text to tokens (logos plus a keyword classifier)
//!         parsing     tokens to a syntax tree, driven by the grammar tables
//!         tree        the syntax tree builder and the finalized tree
//!         resolving   syntax tree to descriptors
//!         descriptors the Effect / Technique / Pass / TextureUnit model
//!
//!     [pipeline] chains them, [formats] renders the artifacts, and [testing] holds the
//!     fixture loader and assertion API used by the test suites.

pub mod descriptors;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod pipeline;
pub mod range;
pub mod resolving;
pub mod testing;
pub mod token;
pub mod tree;
