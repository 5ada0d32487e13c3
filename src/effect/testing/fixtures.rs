//! Loader for the curated effect fixtures

use crate::effect::descriptors::Effect;
use crate::effect::error::CompileError;
use crate::effect::pipeline::{compile, Compilation, Compiler};
use std::fmt;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum FixtureError {
    FileNotFound(String),
    IoError(String),
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureError::FileNotFound(name) => write!(f, "Fixture not found: {}", name),
            FixtureError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for FixtureError {}

impl From<std::io::Error> for FixtureError {
    fn from(err: std::io::Error) -> Self {
        FixtureError::IoError(err.to_string())
    }
}

/// Access to the `.fx` files under `tests/fixtures`
pub struct EffectSources;

impl EffectSources {
    pub fn dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
    }

    pub fn path(name: &str) -> PathBuf {
        Self::dir().join(name)
    }

    /// Fixture file names, sorted
    pub fn list() -> Result<Vec<String>, FixtureError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(Self::dir())? {
            let name = entry?.file_name().to_string_lossy().into_owned();
            if name.ends_with(".fx") {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    pub fn get_string(name: &str) -> Result<String, FixtureError> {
        let path = Self::path(name);
        if !path.exists() {
            return Err(FixtureError::FileNotFound(name.to_string()));
        }
        Ok(fs::read_to_string(path)?)
    }

    pub fn try_compile(name: &str) -> Result<Result<Effect, CompileError>, FixtureError> {
        Ok(compile(&Self::get_string(name)?))
    }

    /// Compile a fixture that is expected to be valid
    ///
    /// # Panics
    /// Panics if the fixture is missing or fails to compile.
    pub fn compile(name: &str) -> Effect {
        let source = Self::load(name);
        match compile(&source) {
            Ok(effect) => effect,
            Err(error) => panic!("Fixture {} failed to compile: {}", name, error),
        }
    }

    /// All compilation artifacts of a valid fixture
    ///
    /// # Panics
    /// Panics if the fixture is missing or fails to compile.
    pub fn artifacts(name: &str) -> Compilation {
        let source = Self::load(name);
        match Compiler::new().compile_artifacts(&source) {
            Ok(compilation) => compilation,
            Err(error) => panic!("Fixture {} failed to compile: {}", name, error),
        }
    }

    fn load(name: &str) -> String {
        match Self::get_string(name) {
            Ok(source) => source,
            Err(error) => panic!("{}", error),
        }
    }
}
