//! Fluent assertion API for effect descriptors

use crate::effect::descriptors::{
    BlendFactor, Colour, CompareFunc, Effect, Filtering, Pass, SortGroup, Technique,
    TextureType, TextureUnit,
};

// ============================================================================
// Entry Point
// ============================================================================

pub fn assert_effect(effect: &Effect) -> EffectAssertion<'_> {
    EffectAssertion { effect }
}

// ============================================================================
// Effect Assertions
// ============================================================================

pub struct EffectAssertion<'a> {
    effect: &'a Effect,
}

impl<'a> EffectAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.effect.name, expected,
            "Expected effect name {:?}, found {:?}",
            expected, self.effect.name
        );
        self
    }

    pub fn technique_count(self, expected: usize) -> Self {
        let actual = self.effect.techniques.len();
        assert_eq!(
            actual, expected,
            "Expected {} techniques, found {}",
            expected, actual
        );
        self
    }

    pub fn shadows(self, receive: bool, cast: bool) -> Self {
        assert_eq!(
            (self.effect.receive_shadows, self.effect.cast_shadows),
            (receive, cast),
            "Expected effect shadows (receive, cast) = ({}, {})",
            receive,
            cast
        );
        self
    }

    /// Assert on a technique by index
    pub fn technique<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(TechniqueAssertion<'a>),
    {
        let techniques = &self.effect.techniques;
        assert!(
            index < techniques.len(),
            "Technique index {} out of bounds (effect has {} techniques)",
            index,
            techniques.len()
        );
        assertion(TechniqueAssertion {
            technique: &techniques[index],
            context: format!("techniques[{}]", index),
        });
        self
    }
}

// ============================================================================
// Technique Assertions
// ============================================================================

pub struct TechniqueAssertion<'a> {
    technique: &'a Technique,
    context: String,
}

impl<'a> TechniqueAssertion<'a> {
    pub fn lod_level(self, expected: u32) -> Self {
        assert_eq!(
            self.technique.lod_level, expected,
            "{}: expected lod level {}, found {}",
            self.context, expected, self.technique.lod_level
        );
        self
    }

    pub fn sort(self, expected: SortGroup) -> Self {
        assert_eq!(
            self.technique.sort, expected,
            "{}: expected sort group {:?}, found {:?}",
            self.context, expected, self.technique.sort
        );
        self
    }

    pub fn shadows(self, receive: bool, cast: bool) -> Self {
        assert_eq!(
            (self.technique.receive_shadows, self.technique.cast_shadows),
            (receive, cast),
            "{}: expected shadows (receive, cast) = ({}, {})",
            self.context,
            receive,
            cast
        );
        self
    }

    pub fn pass_count(self, expected: usize) -> Self {
        let actual = self.technique.passes.len();
        assert_eq!(
            actual, expected,
            "{}: expected {} passes, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn pass<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(PassAssertion<'a>),
    {
        let passes = &self.technique.passes;
        assert!(
            index < passes.len(),
            "{}: pass index {} out of bounds ({} passes)",
            self.context,
            index,
            passes.len()
        );
        assertion(PassAssertion {
            pass: &passes[index],
            context: format!("{}.passes[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Pass Assertions
// ============================================================================

pub struct PassAssertion<'a> {
    pass: &'a Pass,
    context: String,
}

impl<'a> PassAssertion<'a> {
    /// Direct access for checks the fluent API does not cover
    pub fn pass(&self) -> &'a Pass {
        self.pass
    }

    pub fn ambient(self, expected: Colour) -> Self {
        assert_eq!(
            self.pass.material.ambient, expected,
            "{}: ambient mismatch",
            self.context
        );
        self
    }

    pub fn diffuse(self, expected: Colour) -> Self {
        assert_eq!(
            self.pass.material.diffuse, expected,
            "{}: diffuse mismatch",
            self.context
        );
        self
    }

    /// Blending is enabled with the given factors
    pub fn blend(self, source: BlendFactor, destination: BlendFactor) -> Self {
        let blend = self.pass.blend;
        assert!(blend.enabled, "{}: expected blending enabled", self.context);
        assert_eq!(
            (blend.source, blend.destination),
            (source, destination),
            "{}: blend factors mismatch",
            self.context
        );
        self
    }

    pub fn no_blend(self) -> Self {
        assert!(
            !self.pass.blend.enabled,
            "{}: expected blending disabled",
            self.context
        );
        self
    }

    pub fn alpha_test(self, func: CompareFunc, reference: f32) -> Self {
        let test = self.pass.alpha_test;
        assert!(test.enabled, "{}: expected alpha test enabled", self.context);
        assert_eq!(
            (test.func, test.reference),
            (func, reference),
            "{}: alpha test mismatch",
            self.context
        );
        self
    }

    pub fn depth(self, test: bool, write: bool) -> Self {
        assert_eq!(
            (self.pass.depth.test, self.pass.depth.write),
            (test, write),
            "{}: expected depth (test, write) = ({}, {})",
            self.context,
            test,
            write
        );
        self
    }

    pub fn lighting(self, expected: bool) -> Self {
        assert_eq!(
            self.pass.lighting, expected,
            "{}: expected lighting {}",
            self.context, expected
        );
        self
    }

    pub fn max_lights(self, expected: u32) -> Self {
        assert_eq!(
            self.pass.max_lights, expected,
            "{}: expected max lights {}, found {}",
            self.context, expected, self.pass.max_lights
        );
        self
    }

    pub fn texture_unit_count(self, expected: usize) -> Self {
        let actual = self.pass.texture_units.len();
        assert_eq!(
            actual, expected,
            "{}: expected {} texture units, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn texture_unit<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(TextureUnitAssertion<'a>),
    {
        let units = &self.pass.texture_units;
        assert!(
            index < units.len(),
            "{}: texture unit index {} out of bounds ({} units)",
            self.context,
            index,
            units.len()
        );
        assertion(TextureUnitAssertion {
            unit: &units[index],
            context: format!("{}.texture_units[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Texture Unit Assertions
// ============================================================================

pub struct TextureUnitAssertion<'a> {
    unit: &'a TextureUnit,
    context: String,
}

impl<'a> TextureUnitAssertion<'a> {
    pub fn unit(&self) -> &'a TextureUnit {
        self.unit
    }

    pub fn texture(self, texture_type: TextureType, name: &str) -> Self {
        assert_eq!(
            self.unit.texture_type, texture_type,
            "{}: texture type mismatch",
            self.context
        );
        assert_eq!(
            self.unit.texture_name.as_deref(),
            Some(name),
            "{}: texture name mismatch",
            self.context
        );
        self
    }

    pub fn coord_set(self, expected: u32) -> Self {
        assert_eq!(
            self.unit.coord_set, expected,
            "{}: expected coord set {}, found {}",
            self.context, expected, self.unit.coord_set
        );
        self
    }

    pub fn filtering(self, expected: Filtering) -> Self {
        assert_eq!(
            self.unit.filtering, expected,
            "{}: filtering mismatch",
            self.context
        );
        self
    }

    pub fn max_anisotropy(self, expected: u32) -> Self {
        assert_eq!(
            self.unit.max_anisotropy, expected,
            "{}: expected max anisotropy {}, found {}",
            self.context, expected, self.unit.max_anisotropy
        );
        self
    }

    pub fn transform_count(self, expected: usize) -> Self {
        let actual = self.unit.transforms.len();
        assert_eq!(
            actual, expected,
            "{}: expected {} transforms, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn animated(self, expected: bool) -> Self {
        assert_eq!(
            self.unit.is_animated(),
            expected,
            "{}: expected animated = {}",
            self.context,
            expected
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::pipeline::compile;

    #[test]
    fn test_fluent_chain() {
        let effect = compile(
            r#"effect "e" { technique { lodlevel 1 pass { sceneblend add maxlights 2
                textureunit { texture 2d "a.png" texcoordset 1 } } } }"#,
        )
        .expect("compiles");

        assert_effect(&effect)
            .name("e")
            .technique_count(1)
            .shadows(true, true)
            .technique(0, |technique| {
                technique.lod_level(1).pass_count(1).pass(0, |pass| {
                    pass.blend(BlendFactor::One, BlendFactor::One)
                        .max_lights(2)
                        .texture_unit_count(1)
                        .texture_unit(0, |unit| {
                            unit.texture(TextureType::Texture2D, "a.png")
                                .coord_set(1)
                                .animated(false);
                        });
                });
            });
    }

    #[test]
    #[should_panic(expected = "techniques[0].passes[0]: expected max lights 3, found 8")]
    fn test_failure_names_the_path() {
        let effect = compile(r#"effect "e" { technique { pass { } } }"#).expect("compiles");
        assert_effect(&effect).technique(0, |technique| {
            technique.pass(0, |pass| {
                pass.max_lights(3);
            });
        });
    }
}
