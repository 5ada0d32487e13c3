//! Technique descriptor

use super::constants::SortGroup;
use super::pass::Pass;
use serde::Serialize;

/// One way of rendering an effect, made of passes drawn in order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Technique {
    pub lod_level: u32,
    pub sort: SortGroup,
    pub receive_shadows: bool,
    pub cast_shadows: bool,
    pub passes: Vec<Pass>,
}

impl Default for Technique {
    fn default() -> Self {
        Self {
            lod_level: 0,
            sort: SortGroup::Normal,
            receive_shadows: true,
            cast_shadows: true,
            passes: Vec::new(),
        }
    }
}

impl Technique {
    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }

    pub fn texture_unit_count(&self) -> usize {
        self.passes.iter().map(|pass| pass.texture_units.len()).sum()
    }
}
