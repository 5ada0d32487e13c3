//! Compilation pipeline
//!
//!     The stages run strictly in order, and the first failure ends the compilation:
//!
//!         source --Scanner--> tokens --Parser--> EffectTree --resolve--> Effect
//!
//!     The parser pulls tokens from its own scanner, so [compile] scans once. When the
//!     intermediate artifacts are wanted as well (the CLI formats print them),
//!     [Compiler::compile_artifacts] scans the source a second time to collect the token
//!     stream. Both runs see the same text, so they agree on every token.
//!
//!     Limits come from [ResolveOptions]. [Compiler::from_config] reads them from the shared
//!     `effect-config` settings.

use crate::effect::descriptors::Effect;
use crate::effect::error::CompileError;
use crate::effect::lexing::tokenize;
use crate::effect::parsing::Parser;
use crate::effect::range::SourceLocation;
use crate::effect::resolving::{resolve, ResolveOptions};
use crate::effect::token::SpannedToken;
use crate::effect::tree::EffectTree;
use effect_config::EffectConfig;

/// Compile with default limits
pub fn compile(source: &str) -> Result<Effect, CompileError> {
    Compiler::new().compile(source)
}

/// Every artifact of a successful compilation
#[derive(Debug, Clone)]
pub struct Compilation {
    pub tokens: Vec<SpannedToken>,
    pub tree: EffectTree,
    pub effect: Effect,
    /// Line index of the compiled source, for mapping token spans to positions
    pub location: SourceLocation,
}

#[derive(Debug, Clone, Default)]
pub struct Compiler {
    options: ResolveOptions,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ResolveOptions) -> Self {
        Self { options }
    }

    /// Limits from the `[compiler]` config section
    pub fn from_config(config: &EffectConfig) -> Self {
        Self::with_options(ResolveOptions {
            max_texture_units: config.compiler.max_texture_units,
            max_texture_coord_sets: config.compiler.max_texture_coord_sets,
        })
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    pub fn compile(&self, source: &str) -> Result<Effect, CompileError> {
        let tree = self.parse(source)?;
        self.resolve(&tree)
    }

    pub fn compile_artifacts(&self, source: &str) -> Result<Compilation, CompileError> {
        let tree = self.parse(source)?;
        let effect = self.resolve(&tree)?;
        let tokens = tokenize(source)?;
        log::debug!("collected {} tokens", tokens.len());

        Ok(Compilation {
            tokens,
            tree,
            effect,
            location: SourceLocation::new(source),
        })
    }

    fn parse(&self, source: &str) -> Result<EffectTree, CompileError> {
        let tree = Parser::new(source)?.parse()?;
        log::debug!("parsed {} syntax tree nodes", tree.len());
        Ok(tree)
    }

    fn resolve(&self, tree: &EffectTree) -> Result<Effect, CompileError> {
        let effect = resolve(tree, &self.options)?;
        log::info!(
            "compiled effect {:?}: {} technique(s)",
            effect.name,
            effect.techniques.len()
        );
        Ok(effect)
    }
}
