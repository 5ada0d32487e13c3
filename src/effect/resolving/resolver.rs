//! The resolver state machine
//!
//!     Resolution is a single pass over [EffectTree::traverse]. The resolver keeps a stack of
//!     open builders, one per nesting level below the effect itself:
//!
//!         Effect        the base, never popped
//!         Technique     opened by a TECHNIQUE node directly under the effect
//!         Pass          opened by a PASS node directly under a technique
//!         TextureUnit   opened by a TEXTUREUNIT node directly under a pass
//!
//!     For every node, in order:
//!
//!         1. Builders opened at the node's depth or deeper are finished: popped and appended
//!            to their parent, which keeps declaration order.
//!         2. A block node one level below the innermost builder opens a new builder,
//!            seeded with engine defaults.
//!         3. Any other node one level below the innermost builder is a statement, applied
//!            through the schema of that builder's block.
//!         4. Deeper nodes are statement arguments, already consumed in step 3.
//!
//!     Every block starts from engine defaults. The one inherited setting is the pair of
//!     shadow flags, which a technique takes from the effect-level `receiveshadows` and
//!     `castshadows` statements.

use super::arguments::Arguments;
use super::schema::{EFFECT_SCHEMA, PASS_SCHEMA, TECHNIQUE_SCHEMA, TEXTURE_UNIT_SCHEMA};
use super::{Reason, ResolveOptions, SemanticError};
use crate::effect::descriptors::{Effect, Pass, Technique, TextureUnit};
use crate::effect::range::Position;
use crate::effect::token::Keyword;
use crate::effect::tree::{EffectTree, Node, NodeType, Payload};

/// Build the descriptor graph for a finalized tree
pub fn resolve(tree: &EffectTree, options: &ResolveOptions) -> Result<Effect, SemanticError> {
    Resolver::new(tree, options)?.run()
}

enum Frame {
    Technique(Technique),
    Pass(Pass),
    TextureUnit(TextureUnit),
}

struct Open {
    frame: Frame,
    depth: usize,
    position: Position,
}

struct Resolver<'a> {
    tree: &'a EffectTree,
    options: &'a ResolveOptions,
    effect: Effect,
    stack: Vec<Open>,
}

impl<'a> Resolver<'a> {
    fn new(tree: &'a EffectTree, options: &'a ResolveOptions) -> Result<Self, SemanticError> {
        let root = tree.root();
        let name = match tree.children(root).next() {
            Some(Node {
                node_type: NodeType::StringLiteral,
                payload: Some(Payload::String(name)),
                ..
            }) => name.clone(),
            _ => {
                return Err(SemanticError {
                    field: Keyword::Effect,
                    node: root.node_type,
                    literal: None,
                    reason: Reason::MissingArgument,
                    position: root.position,
                })
            }
        };

        Ok(Self {
            tree,
            options,
            effect: Effect::new(name),
            stack: Vec::new(),
        })
    }

    fn run(mut self) -> Result<Effect, SemanticError> {
        let tree = self.tree;
        // the root and its name literal
        for (depth, node) in tree.traverse().skip(2) {
            while self.stack.last().is_some_and(|open| open.depth >= depth) {
                self.close();
            }

            let level = self.stack.last().map_or(0, |open| open.depth);
            if depth == level + 1 {
                self.visit(depth, node)?;
            }
        }

        while !self.stack.is_empty() {
            self.close();
        }
        log::debug!(
            "resolved effect {:?} with {} technique(s)",
            self.effect.name,
            self.effect.techniques.len()
        );
        Ok(self.effect)
    }

    /// A node directly below the innermost open builder
    fn visit(&mut self, depth: usize, node: &'a Node) -> Result<(), SemanticError> {
        let opened = match (self.stack.last_mut(), node.keyword()) {
            (None, Some(Keyword::Technique)) => Some(Frame::Technique(Technique {
                receive_shadows: self.effect.receive_shadows,
                cast_shadows: self.effect.cast_shadows,
                ..Technique::default()
            })),
            (Some(Open { frame: Frame::Technique(_), .. }), Some(Keyword::Pass)) => {
                Some(Frame::Pass(Pass::default()))
            }
            (Some(Open { frame: Frame::Pass(pass), .. }), Some(Keyword::TextureUnit)) => {
                let limit = self.options.max_texture_units;
                if pass.texture_units.len() >= limit {
                    return Err(SemanticError {
                        field: Keyword::TextureUnit,
                        node: node.node_type,
                        literal: None,
                        reason: Reason::TooManyTextureUnits { limit },
                        position: node.position,
                    });
                }
                Some(Frame::TextureUnit(TextureUnit::default()))
            }
            _ => None,
        };

        if let Some(frame) = opened {
            self.stack.push(Open {
                frame,
                depth,
                position: node.position,
            });
            return Ok(());
        }

        let mut args = Arguments::new(self.tree, node, self.options);
        match self.stack.last_mut() {
            None => EFFECT_SCHEMA.apply(&mut self.effect, &mut args),
            Some(open) => match &mut open.frame {
                Frame::Technique(technique) => TECHNIQUE_SCHEMA.apply(technique, &mut args),
                Frame::Pass(pass) => PASS_SCHEMA.apply(pass, &mut args),
                Frame::TextureUnit(unit) => TEXTURE_UNIT_SCHEMA.apply(unit, &mut args),
            },
        }
    }

    /// Pop the innermost builder and append it to its parent
    fn close(&mut self) {
        let Some(open) = self.stack.pop() else {
            return;
        };
        let parent = self.stack.last_mut().map(|parent| &mut parent.frame);

        match (parent, open.frame) {
            (None, Frame::Technique(technique)) => {
                log::debug!(
                    "resolved technique at {} with {} pass(es)",
                    open.position,
                    technique.passes.len()
                );
                self.effect.techniques.push(technique);
            }
            (Some(Frame::Technique(technique)), Frame::Pass(pass)) => {
                log::debug!(
                    "resolved pass at {} with {} texture unit(s)",
                    open.position,
                    pass.texture_units.len()
                );
                technique.passes.push(pass);
            }
            (Some(Frame::Pass(pass)), Frame::TextureUnit(unit)) => {
                log::debug!("resolved texture unit at {}", open.position);
                pass.texture_units.push(unit);
            }
            // frames are only ever opened directly under their parent kind
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::descriptors::{
        BlendFactor, Colour, CompareFunc, MaterialSource, TextureFilter, TextureType,
        TransformOp, XformType,
    };
    use crate::effect::parsing::parse;

    fn resolve_source(source: &str) -> Result<Effect, SemanticError> {
        let tree = parse(source).expect("valid syntax");
        resolve(&tree, &ResolveOptions::default())
    }

    fn single_pass(body: &str) -> Pass {
        let effect = resolve_source(&format!(
            "effect \"e\" {{ technique {{ pass {{ {} }} }} }}",
            body
        ))
        .expect("resolves");
        effect.techniques[0].passes[0].clone()
    }

    fn single_unit(body: &str) -> Result<TextureUnit, SemanticError> {
        let effect = resolve_source(&format!(
            "effect \"e\" {{ technique {{ pass {{ textureunit {{ {} }} }} }} }}",
            body
        ))?;
        Ok(effect.techniques[0].passes[0].texture_units[0].clone())
    }

    #[test]
    fn test_empty_pass_has_engine_defaults() {
        assert_eq!(single_pass(""), Pass::default());
    }

    #[test]
    fn test_order_is_preserved() {
        let effect = resolve_source(
            r#"effect "order" {
                technique { lodlevel 0 pass { maxlights 1 } pass { maxlights 2 } pass { maxlights 3 } }
                technique { lodlevel 1 pass { } }
            }"#,
        )
        .expect("resolves");

        assert_eq!(effect.name, "order");
        assert_eq!(effect.techniques.len(), 2);
        let lights: Vec<_> = effect.techniques[0]
            .passes
            .iter()
            .map(|pass| pass.max_lights)
            .collect();
        assert_eq!(lights, vec![1, 2, 3]);
        assert_eq!(effect.techniques[1].lod_level, 1);
    }

    #[test]
    fn test_material_colours_and_sources() {
        let pass = single_pass("ambient 0.1 0.2 0.3 diffuse vertexcolour");
        assert_eq!(pass.material.ambient, Colour::rgba(0.1, 0.2, 0.3, 1.0));
        assert_eq!(pass.material_sources.ambient, MaterialSource::Material);
        assert_eq!(pass.material.diffuse, Colour::WHITE);
        assert_eq!(pass.material_sources.diffuse, MaterialSource::VertexColour);
        assert!(pass.uses_vertex_colour());
    }

    #[test]
    fn test_scene_blend_presets_and_factors() {
        let pass = single_pass("sceneblend modulate");
        assert!(pass.blend.enabled);
        assert_eq!(pass.blend.source, BlendFactor::DestColour);
        assert_eq!(pass.blend.destination, BlendFactor::Zero);

        let pass = single_pass("sceneblend one, invsrcalpha");
        assert_eq!(pass.blend.source, BlendFactor::One);
        assert_eq!(pass.blend.destination, BlendFactor::InvSrcAlpha);
    }

    #[test]
    fn test_alpha_and_stencil_tests() {
        let pass = single_pass("alphatest greater 0.75 stenciltest disabled");
        assert!(pass.alpha_test.enabled);
        assert_eq!(pass.alpha_test.func, CompareFunc::Greater);
        assert_eq!(pass.alpha_test.reference, 0.75);
        assert!(!pass.stencil.enabled);

        let pass = single_pass("stenciltest equal 3 stencilmask 255");
        assert!(pass.stencil.enabled);
        assert_eq!(pass.stencil.func, CompareFunc::Equal);
        assert_eq!(pass.stencil.reference, 3);
        assert_eq!(pass.stencil.mask, 255);
    }

    #[test]
    fn test_explicit_depth_test_wins() {
        assert!(!single_pass("").depth.test);
        assert!(single_pass("depthtest enabled").depth.test);
    }

    #[test]
    fn test_fog_density_literal() {
        let pass = single_pass("fogoverride enabled fogtype exp2 fogdensity 0.25");
        assert!(pass.fog.override_scene);
        assert!((pass.fog.density - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_texture_unit_settings() {
        let unit = single_unit(
            r#"texture cubemap "sky" maxanisotropy 4 filtering anisotropic
               addressingmode v clamp texcoordset 2 colourop add texture current"#,
        )
        .expect("resolves");

        assert_eq!(unit.texture_type, TextureType::CubeMap);
        assert_eq!(unit.texture_name.as_deref(), Some("sky"));
        assert_eq!(unit.max_anisotropy, 4);
        assert_eq!(unit.filtering.min, TextureFilter::Anisotropic);
        assert_eq!(unit.filtering.mip, TextureFilter::Linear);
        assert_eq!(
            unit.addressing.v,
            crate::effect::descriptors::AddressingMode::Clamp
        );
        assert_eq!(unit.coord_set, 2);
        assert_eq!(unit.colour_op.op, crate::effect::descriptors::TextureOp::Add);
    }

    #[test]
    fn test_three_filter_kinds() {
        let unit = single_unit("filtering point linear point").expect("resolves");
        assert_eq!(unit.filtering.min, TextureFilter::Point);
        assert_eq!(unit.filtering.mag, TextureFilter::Linear);
        assert_eq!(unit.filtering.mip, TextureFilter::Point);
    }

    #[test]
    fn test_bad_filtering_shapes() {
        let error = single_unit("filtering point").expect_err("kind without preset");
        assert_eq!(error.reason, Reason::UnknownEnumeration);
        assert_eq!(error.node, NodeType::Keyword(Keyword::Point));

        let error = single_unit("filtering point linear").expect_err("two kinds");
        assert_eq!(error.reason, Reason::MissingArgument);

        let error = single_unit("filtering bilinear point point").expect_err("preset among kinds");
        assert_eq!(error.node, NodeType::Keyword(Keyword::Bilinear));
    }

    #[test]
    fn test_anisotropy_must_be_positive() {
        let error = single_unit("maxanisotropy 0").expect_err("zero anisotropy");
        assert_eq!(error.field, Keyword::MaxAnisotropy);
        assert!(matches!(error.reason, Reason::OutOfRange { min: 1, .. }));
        assert_eq!(error.literal.as_deref(), Some("0"));
    }

    #[test]
    fn test_coord_set_limit() {
        assert!(single_unit("texcoordset 7").is_ok());
        let error = single_unit("texcoordset 8").expect_err("past the limit");
        assert_eq!(error.reason, Reason::NotBelow { limit: 8 });
    }

    #[test]
    fn test_transforms_in_declaration_order() {
        let unit = single_unit(
            "scroll 0.5 0 rotateanim 0.25 wavexform { xformtype scale_y wavetype triangle amplitude 2 }",
        )
        .expect("resolves");

        assert_eq!(unit.transforms.len(), 3);
        assert!(matches!(unit.transforms[0], TransformOp::Scroll(_)));
        assert_eq!(unit.transforms[1], TransformOp::RotateAnim(0.25));
        match &unit.transforms[2] {
            TransformOp::Wave(wave) => {
                assert_eq!(wave.target, XformType::ScaleY);
                assert_eq!(wave.amplitude, 2.0);
                assert_eq!(wave.frequency, 1.0);
            }
            other => panic!("Expected a wave, got {:?}", other),
        }
    }

    #[test]
    fn test_texture_unit_limit() {
        let tree = parse(
            r#"effect "e" { technique { pass { textureunit { } textureunit { } textureunit { } } } }"#,
        )
        .expect("valid syntax");
        let options = ResolveOptions {
            max_texture_units: 2,
            ..ResolveOptions::default()
        };

        let error = resolve(&tree, &options).expect_err("three units");
        assert_eq!(error.reason, Reason::TooManyTextureUnits { limit: 2 });
        assert_eq!(error.position, Position::new(0, 64));
    }

    #[test]
    fn test_shadow_flags_seed_techniques() {
        let effect = resolve_source(
            r#"effect "e" {
                receiveshadows disabled
                technique { pass { } }
                technique { receiveshadows enabled castshadows disabled pass { } }
            }"#,
        )
        .expect("resolves");

        assert!(!effect.receive_shadows);
        assert!(!effect.techniques[0].receive_shadows);
        assert!(effect.techniques[0].cast_shadows);
        assert!(effect.techniques[1].receive_shadows);
        assert!(!effect.techniques[1].cast_shadows);
    }
}
