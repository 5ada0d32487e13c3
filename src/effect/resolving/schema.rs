//! Per-block statement schemas
//!
//!     A [Schema] maps each statement keyword a block accepts to an [Applier]: a function that
//!     reads the statement's positional arguments and writes the descriptor being built.
//!     Argument positions are explicit here. `sceneblend srcalpha one` sets the source factor
//!     from the first argument and the destination from the second because its applier says
//!     so, not because of where the grammar happened to put the nodes.

use super::arguments::Arguments;
use super::mapping;
use super::{Reason, SemanticError};
use crate::effect::descriptors::{
    AddressAxis, Colour, Combine, Effect, Filtering, Iteration, MaterialSource, Pass, Technique,
    TextureUnit, TransformOp, WaveTransform,
};
use crate::effect::token::Keyword;
use crate::effect::tree::NodeType;

pub type Applier<T> = fn(&mut T, &mut Arguments<'_>) -> Result<(), SemanticError>;

pub struct Schema<T: 'static> {
    pub block: Keyword,
    pub rules: &'static [(Keyword, Applier<T>)],
}

impl<T: 'static> Schema<T> {
    pub fn applier(&self, keyword: Keyword) -> Option<Applier<T>> {
        self.rules
            .iter()
            .find(|(key, _)| *key == keyword)
            .map(|(_, applier)| *applier)
    }

    /// Apply one statement to `target`, consuming all of its arguments
    pub fn apply(&self, target: &mut T, args: &mut Arguments<'_>) -> Result<(), SemanticError> {
        let Some(applier) = self.applier(args.keyword()) else {
            return Err(SemanticError {
                field: args.keyword(),
                node: args.statement().node_type,
                literal: None,
                reason: Reason::UnexpectedStatement,
                position: args.statement().position,
            });
        };
        applier(target, args)?;
        args.finish()
    }
}

pub static EFFECT_SCHEMA: Schema<Effect> = Schema {
    block: Keyword::Effect,
    rules: &[
        (Keyword::ReceiveShadows, |effect, args| {
            effect.receive_shadows = args.bool()?;
            Ok(())
        }),
        (Keyword::CastShadows, |effect, args| {
            effect.cast_shadows = args.bool()?;
            Ok(())
        }),
    ],
};

pub static TECHNIQUE_SCHEMA: Schema<Technique> = Schema {
    block: Keyword::Technique,
    rules: &[
        (Keyword::LodLevel, |technique, args| {
            technique.lod_level = args.uint()?;
            Ok(())
        }),
        (Keyword::Sort, |technique, args| {
            technique.sort = args.choice(mapping::SORT_GROUPS)?;
            Ok(())
        }),
        (Keyword::ReceiveShadows, |technique, args| {
            technique.receive_shadows = args.bool()?;
            Ok(())
        }),
        (Keyword::CastShadows, |technique, args| {
            technique.cast_shadows = args.bool()?;
            Ok(())
        }),
    ],
};

pub static PASS_SCHEMA: Schema<Pass> = Schema {
    block: Keyword::Pass,
    rules: &[
        (Keyword::Ambient, |pass, args| {
            let (colour, source) = material_colour(args)?;
            pass.material.ambient = colour.unwrap_or(pass.material.ambient);
            pass.material_sources.ambient = source;
            Ok(())
        }),
        (Keyword::Diffuse, |pass, args| {
            let (colour, source) = material_colour(args)?;
            pass.material.diffuse = colour.unwrap_or(pass.material.diffuse);
            pass.material_sources.diffuse = source;
            Ok(())
        }),
        (Keyword::Specular, |pass, args| {
            let (colour, source) = material_colour(args)?;
            pass.material.specular = colour.unwrap_or(pass.material.specular);
            pass.material_sources.specular = source;
            Ok(())
        }),
        (Keyword::Emissive, |pass, args| {
            let (colour, source) = material_colour(args)?;
            pass.material.emissive = colour.unwrap_or(pass.material.emissive);
            pass.material_sources.emissive = source;
            Ok(())
        }),
        (Keyword::Shininess, |pass, args| {
            pass.material.shininess = args.float()?;
            Ok(())
        }),
        (Keyword::SceneBlend, scene_blend),
        (Keyword::AlphaTest, |pass, args| {
            if args.next_is(NodeType::Boolean) {
                pass.alpha_test.enabled = args.bool()?;
            } else {
                pass.alpha_test.func = args.choice(mapping::COMPARE_FUNCS)?;
                pass.alpha_test.reference = args.float()?;
                pass.alpha_test.enabled = true;
            }
            Ok(())
        }),
        (Keyword::DepthTest, |pass, args| {
            pass.depth.test = args.bool()?;
            Ok(())
        }),
        (Keyword::DepthFunc, |pass, args| {
            pass.depth.func = args.choice(mapping::COMPARE_FUNCS)?;
            Ok(())
        }),
        (Keyword::DepthBias, |pass, args| {
            pass.depth.bias = args.float()?;
            Ok(())
        }),
        (Keyword::DepthWrite, |pass, args| {
            pass.depth.write = args.bool()?;
            Ok(())
        }),
        (Keyword::StencilTest, |pass, args| {
            if args.next_is(NodeType::Boolean) {
                pass.stencil.enabled = args.bool()?;
            } else {
                pass.stencil.func = args.choice(mapping::COMPARE_FUNCS)?;
                pass.stencil.reference = args.uint()?;
                pass.stencil.enabled = true;
            }
            Ok(())
        }),
        (Keyword::StencilMask, |pass, args| {
            pass.stencil.mask = args.uint()?;
            Ok(())
        }),
        (Keyword::StencilWriteMask, |pass, args| {
            pass.stencil.write_mask = args.uint()?;
            Ok(())
        }),
        (Keyword::StencilPass, |pass, args| {
            pass.stencil.pass = args.choice(mapping::STENCIL_OPS)?;
            Ok(())
        }),
        (Keyword::StencilFail, |pass, args| {
            pass.stencil.fail = args.choice(mapping::STENCIL_OPS)?;
            Ok(())
        }),
        (Keyword::StencilZFail, |pass, args| {
            pass.stencil.depth_fail = args.choice(mapping::STENCIL_OPS)?;
            Ok(())
        }),
        (Keyword::CullingMode, |pass, args| {
            pass.cull_mode = args.choice(mapping::CULL_MODES)?;
            Ok(())
        }),
        (Keyword::NormaliseNormals, |pass, args| {
            pass.normalise_normals = args.bool()?;
            Ok(())
        }),
        (Keyword::Lighting, |pass, args| {
            pass.lighting = args.bool()?;
            Ok(())
        }),
        (Keyword::Shading, |pass, args| {
            pass.shading = args.choice(mapping::SHADE_MODES)?;
            Ok(())
        }),
        (Keyword::ColourWrite, |pass, args| {
            pass.colour_write = args.bool()?;
            Ok(())
        }),
        (Keyword::MaxLights, |pass, args| {
            pass.max_lights = args.uint()?;
            Ok(())
        }),
        (Keyword::Iteration, |pass, args| {
            pass.iteration = Some(Iteration {
                mode: args.choice(mapping::ITERATION_MODES)?,
                light_type: args.choice(mapping::LIGHT_TYPES)?,
            });
            Ok(())
        }),
        (Keyword::FogOverride, |pass, args| {
            pass.fog.override_scene = args.bool()?;
            Ok(())
        }),
        (Keyword::FogType, |pass, args| {
            pass.fog.mode = args.choice(mapping::FOG_MODES)?;
            Ok(())
        }),
        (Keyword::FogDensity, |pass, args| {
            pass.fog.density = args.float()?;
            Ok(())
        }),
        (Keyword::FogStart, |pass, args| {
            pass.fog.start = args.float()?;
            Ok(())
        }),
        (Keyword::FogEnd, |pass, args| {
            pass.fog.end = args.float()?;
            Ok(())
        }),
        (Keyword::FogColour, |pass, args| {
            pass.fog.colour = args.colour()?;
            Ok(())
        }),
        (Keyword::Sort, |pass, args| {
            pass.sort = Some(args.choice(mapping::SORT_GROUPS)?);
            Ok(())
        }),
    ],
};

pub static TEXTURE_UNIT_SCHEMA: Schema<TextureUnit> = Schema {
    block: Keyword::TextureUnit,
    rules: &[
        (Keyword::Texture, |unit, args| {
            unit.texture_type = args.choice(mapping::TEXTURE_TYPES)?;
            unit.texture_name = Some(args.string()?);
            Ok(())
        }),
        (Keyword::AutoGenerated, |unit, args| {
            unit.auto_generated = args.bool()?;
            Ok(())
        }),
        (Keyword::TexCoordSet, |unit, args| {
            let sets = args.options().max_texture_coord_sets;
            unit.coord_set = args.uint_below(sets)?;
            Ok(())
        }),
        (Keyword::AddressingMode, |unit, args| {
            let axis = args.choice(mapping::ADDRESS_AXES)?;
            let mode = args.choice(mapping::ADDRESSING_MODES)?;
            match axis {
                AddressAxis::U => unit.addressing.u = mode,
                AddressAxis::V => unit.addressing.v = mode,
                AddressAxis::W => unit.addressing.w = mode,
            }
            Ok(())
        }),
        (Keyword::Filtering, filtering),
        (Keyword::MaxAnisotropy, |unit, args| {
            unit.max_anisotropy = args.uint_in(1, u32::MAX)?;
            Ok(())
        }),
        (Keyword::ColourOp, |unit, args| {
            unit.colour_op = combine(args)?;
            Ok(())
        }),
        (Keyword::AlphaOp, |unit, args| {
            unit.alpha_op = combine(args)?;
            Ok(())
        }),
        (Keyword::ConstantColour, |unit, args| {
            unit.constant_colour = args.colour()?;
            Ok(())
        }),
        (Keyword::TexCoordGen, |unit, args| {
            unit.texgen = args.choice(mapping::TEXGENS)?;
            Ok(())
        }),
        (Keyword::Scroll, |unit, args| {
            unit.transforms.push(TransformOp::Scroll(args.vector()?));
            Ok(())
        }),
        (Keyword::Scale, |unit, args| {
            unit.transforms.push(TransformOp::Scale(args.vector()?));
            Ok(())
        }),
        (Keyword::Rotate, |unit, args| {
            unit.transforms.push(TransformOp::Rotate(args.float()?));
            Ok(())
        }),
        (Keyword::ScrollAnim, |unit, args| {
            unit.transforms.push(TransformOp::ScrollAnim(args.vector()?));
            Ok(())
        }),
        (Keyword::ScaleAnim, |unit, args| {
            unit.transforms.push(TransformOp::ScaleAnim(args.vector()?));
            Ok(())
        }),
        (Keyword::RotateAnim, |unit, args| {
            unit.transforms.push(TransformOp::RotateAnim(args.float()?));
            Ok(())
        }),
        (Keyword::WaveXform, |unit, args| {
            let mut wave = WaveTransform::default();
            for mut statement in args.nested() {
                WAVE_SCHEMA.apply(&mut wave, &mut statement)?;
            }
            unit.transforms.push(TransformOp::Wave(wave));
            Ok(())
        }),
    ],
};

pub static WAVE_SCHEMA: Schema<WaveTransform> = Schema {
    block: Keyword::WaveXform,
    rules: &[
        (Keyword::XformType, |wave, args| {
            wave.target = args.choice(mapping::XFORM_TYPES)?;
            Ok(())
        }),
        (Keyword::WaveType, |wave, args| {
            wave.wave = args.choice(mapping::WAVE_TYPES)?;
            Ok(())
        }),
        (Keyword::Base, |wave, args| {
            wave.base = args.float()?;
            Ok(())
        }),
        (Keyword::Frequency, |wave, args| {
            wave.frequency = args.float()?;
            Ok(())
        }),
        (Keyword::Phase, |wave, args| {
            wave.phase = args.float()?;
            Ok(())
        }),
        (Keyword::Amplitude, |wave, args| {
            wave.amplitude = args.float()?;
            Ok(())
        }),
    ],
};

/// `vertexcolour` or an explicit colour, with the material source it implies
fn material_colour(
    args: &mut Arguments<'_>,
) -> Result<(Option<Colour>, MaterialSource), SemanticError> {
    if args.keyword_if(Keyword::VertexColour) {
        Ok((None, MaterialSource::VertexColour))
    } else {
        Ok((Some(args.colour()?), MaterialSource::Material))
    }
}

fn scene_blend(pass: &mut Pass, args: &mut Arguments<'_>) -> Result<(), SemanticError> {
    let (source, destination) = if args.next_in(mapping::BLEND_PRESETS) {
        args.choice(mapping::BLEND_PRESETS)?
    } else {
        (
            args.choice(mapping::BLEND_FACTORS)?,
            args.choice(mapping::BLEND_FACTORS)?,
        )
    };
    pass.blend.source = source;
    pass.blend.destination = destination;
    pass.blend.enabled = true;
    Ok(())
}

/// One preset name, or min/mag/mip filter kinds
fn filtering(unit: &mut TextureUnit, args: &mut Arguments<'_>) -> Result<(), SemanticError> {
    unit.filtering = if args.statement().child_count() == 1 {
        args.choice(mapping::FILTER_PRESETS)?
    } else {
        let kinds = args.choices(mapping::TEXTURE_FILTERS)?;
        match kinds[..] {
            [min, mag, mip] => Filtering::new(min, mag, mip),
            _ => return Err(args.missing_argument()),
        }
    };
    Ok(())
}

fn combine(args: &mut Arguments<'_>) -> Result<Combine, SemanticError> {
    Ok(Combine {
        op: args.choice(mapping::TEXTURE_OPS)?,
        arg1: args.choice(mapping::TEXTURE_ARGS)?,
        arg2: args.choice(mapping::TEXTURE_ARGS)?,
    })
}
