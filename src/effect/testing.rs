//! Testing utilities for compiled effects
//!
//!     Two tools, meant to be used together:
//!
//!         1. [EffectSources]: loads the curated `.fx` files under `tests/fixtures`. Effect
//!            sources written inline in tests drift from the language; the fixtures are
//!            the ones kept in sync with it.
//!
//!         2. [assert_effect]: a fluent assertion API over the descriptor graph, so a test
//!            states the shape it expects instead of indexing through nested vectors.
//!
//!     ```rust-example
//!     use effect::effect::testing::{assert_effect, EffectSources};
//!
//!     let effect = EffectSources::compile("glass.fx");
//!     assert_effect(&effect)
//!         .name("glass")
//!         .technique_count(2)
//!         .technique(0, |technique| {
//!             technique.lod_level(0).pass(0, |pass| {
//!                 pass.blend(BlendFactor::SrcAlpha, BlendFactor::InvSrcAlpha)
//!                     .texture_unit_count(2)
//!             });
//!         });
//!     ```
//!
//!     Failures name the path to the failing descriptor (`techniques[0].passes[1]`), which
//!     is usually all that is needed to find the offending statement.

mod fixtures;
mod testing_assertions;

pub use fixtures::{EffectSources, FixtureError};
pub use testing_assertions::{
    assert_effect, EffectAssertion, PassAssertion, TechniqueAssertion, TextureUnitAssertion,
};
