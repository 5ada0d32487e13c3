//! Effect descriptor
//!
//!     The root of the descriptor graph: a named list of alternative techniques. Which
//!     technique a renderer uses is a runtime decision; [Effect::best_technique_for_lod]
//!     implements the level-of-detail rule, and [Effect::texture_references] lists the
//!     textures a loader has to fetch before any technique can be drawn.

use super::constants::TextureType;
use super::technique::Technique;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Effect {
    pub name: String,
    pub receive_shadows: bool,
    pub cast_shadows: bool,
    pub techniques: Vec<Technique>,
}

impl Effect {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            receive_shadows: true,
            cast_shadows: true,
            techniques: Vec::new(),
        }
    }

    /// Technique for a level of detail
    ///
    /// An exact `lod_level` match wins; otherwise the technique with the closest level is
    /// chosen, the earliest declared one on ties.
    pub fn best_technique_for_lod(&self, lod: u32) -> Option<&Technique> {
        self.techniques
            .iter()
            .find(|technique| technique.lod_level == lod)
            .or_else(|| {
                self.techniques
                    .iter()
                    .min_by_key(|technique| technique.lod_level.abs_diff(lod))
            })
    }

    /// Every loadable texture, in declaration order, without duplicates
    ///
    /// Auto-generated textures are rendered at runtime and are not listed.
    pub fn texture_references(&self) -> Vec<TextureReference> {
        let mut references: Vec<TextureReference> = Vec::new();
        let units = self
            .techniques
            .iter()
            .flat_map(|technique| &technique.passes)
            .flat_map(|pass| &pass.texture_units);

        for unit in units.filter(|unit| !unit.auto_generated) {
            let Some(name) = &unit.texture_name else {
                continue;
            };
            let reference = TextureReference {
                texture_type: unit.texture_type,
                name: name.clone(),
            };
            if !references.contains(&reference) {
                references.push(reference);
            }
        }
        references
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TextureReference {
    pub texture_type: TextureType,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::descriptors::{Pass, TextureUnit};

    fn technique(lod_level: u32) -> Technique {
        Technique {
            lod_level,
            ..Technique::default()
        }
    }

    fn textured(texture_type: TextureType, name: &str, auto_generated: bool) -> TextureUnit {
        TextureUnit {
            texture_type,
            texture_name: Some(name.to_string()),
            auto_generated,
            ..TextureUnit::default()
        }
    }

    #[test]
    fn test_exact_lod_match_wins() {
        let mut effect = Effect::new("terrain");
        effect.techniques = vec![technique(0), technique(2), technique(1)];

        let chosen = effect.best_technique_for_lod(1).expect("a technique");
        assert_eq!(chosen.lod_level, 1);
    }

    #[test]
    fn test_closest_lod_first_on_ties() {
        let mut effect = Effect::new("terrain");
        effect.techniques = vec![technique(4), technique(0), technique(2), technique(6)];

        assert_eq!(effect.best_technique_for_lod(3).map(|t| t.lod_level), Some(4));
        assert_eq!(effect.best_technique_for_lod(100).map(|t| t.lod_level), Some(6));
    }

    #[test]
    fn test_no_techniques_no_choice() {
        assert!(Effect::new("empty").best_technique_for_lod(0).is_none());
    }

    #[test]
    fn test_texture_references_skip_generated_and_duplicates() {
        let pass = Pass {
            texture_units: vec![
                textured(TextureType::Texture2D, "rock.png", false),
                textured(TextureType::CubeMap, "sky", false),
                textured(TextureType::Texture2D, "reflection", true),
                textured(TextureType::Texture2D, "rock.png", false),
                textured(TextureType::Texture1D, "rock.png", false),
                TextureUnit::default(),
            ],
            ..Pass::default()
        };
        let mut effect = Effect::new("rock");
        effect.techniques = vec![Technique {
            passes: vec![pass],
            ..Technique::default()
        }];

        let names: Vec<_> = effect
            .texture_references()
            .into_iter()
            .map(|reference| (reference.texture_type, reference.name))
            .collect();
        assert_eq!(
            names,
            vec![
                (TextureType::Texture2D, "rock.png".to_string()),
                (TextureType::CubeMap, "sky".to_string()),
                (TextureType::Texture1D, "rock.png".to_string()),
            ]
        );
    }
}
