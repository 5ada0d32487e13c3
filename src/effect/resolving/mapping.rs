//! Keyword to domain value tables
//!
//!     One table per enumerated argument position. The keys of each table are exactly the
//!     keywords the [grammar](crate::effect::parsing::grammar) accepts in that position: its
//!     choice arguments point at these tables.

use crate::effect::descriptors::{
    AddressAxis, AddressingMode, BlendFactor, CompareFunc, CullMode, Filtering, FogMode,
    IterationMode, LightType, ShadeMode, SortGroup, StencilOp, TexGen, TextureArgument,
    TextureFilter, TextureOp, TextureType, WaveType, XformType,
};
use crate::effect::token::Keyword;

pub type Table<T> = &'static [(Keyword, T)];

pub fn lookup<T: Copy>(table: &[(Keyword, T)], keyword: Keyword) -> Option<T> {
    table
        .iter()
        .find(|(key, _)| *key == keyword)
        .map(|(_, value)| *value)
}

pub const SORT_GROUPS: Table<SortGroup> = &[
    (Keyword::Skydome, SortGroup::Skydome),
    (Keyword::Normal, SortGroup::Normal),
    (Keyword::Transparent, SortGroup::Transparent),
];

pub const BLEND_FACTORS: Table<BlendFactor> = &[
    (Keyword::One, BlendFactor::One),
    (Keyword::Zero, BlendFactor::Zero),
    (Keyword::SrcColour, BlendFactor::SrcColour),
    (Keyword::InvSrcColour, BlendFactor::InvSrcColour),
    (Keyword::SrcAlpha, BlendFactor::SrcAlpha),
    (Keyword::InvSrcAlpha, BlendFactor::InvSrcAlpha),
    (Keyword::SrcAlphaSat, BlendFactor::SrcAlphaSat),
    (Keyword::DestAlpha, BlendFactor::DestAlpha),
    (Keyword::InvDestAlpha, BlendFactor::InvDestAlpha),
    (Keyword::DestColour, BlendFactor::DestColour),
    (Keyword::InvDestColour, BlendFactor::InvDestColour),
    (Keyword::BlendFactor, BlendFactor::BlendFactor),
    (Keyword::InvBlendFactor, BlendFactor::InvBlendFactor),
    (Keyword::BothInvSrcAlpha, BlendFactor::BothInvSrcAlpha),
];

/// Scene blend shorthands as (source, destination)
pub const BLEND_PRESETS: Table<(BlendFactor, BlendFactor)> = &[
    (Keyword::Add, (BlendFactor::One, BlendFactor::One)),
    (Keyword::Modulate, (BlendFactor::DestColour, BlendFactor::Zero)),
    (
        Keyword::ColourBlend,
        (BlendFactor::SrcColour, BlendFactor::InvSrcColour),
    ),
    (
        Keyword::AlphaBlend,
        (BlendFactor::SrcAlpha, BlendFactor::InvSrcAlpha),
    ),
];

pub const COMPARE_FUNCS: Table<CompareFunc> = &[
    (Keyword::Always, CompareFunc::Always),
    (Keyword::Never, CompareFunc::Never),
    (Keyword::Less, CompareFunc::Less),
    (Keyword::LessEqual, CompareFunc::LessEqual),
    (Keyword::Equal, CompareFunc::Equal),
    (Keyword::NotEqual, CompareFunc::NotEqual),
    (Keyword::GreaterEqual, CompareFunc::GreaterEqual),
    (Keyword::Greater, CompareFunc::Greater),
];

pub const STENCIL_OPS: Table<StencilOp> = &[
    (Keyword::Keep, StencilOp::Keep),
    (Keyword::Zero, StencilOp::Zero),
    (Keyword::Replace, StencilOp::Replace),
    (Keyword::IncrSat, StencilOp::IncrSat),
    (Keyword::DecrSat, StencilOp::DecrSat),
    (Keyword::Invert, StencilOp::Invert),
    (Keyword::Incr, StencilOp::Incr),
    (Keyword::Decr, StencilOp::Decr),
];

pub const CULL_MODES: Table<CullMode> = &[
    (Keyword::None, CullMode::None),
    (Keyword::Clockwise, CullMode::Clockwise),
    (Keyword::CounterClockwise, CullMode::CounterClockwise),
];

pub const SHADE_MODES: Table<ShadeMode> = &[
    (Keyword::Flat, ShadeMode::Flat),
    (Keyword::Gouraud, ShadeMode::Gouraud),
];

pub const ITERATION_MODES: Table<IterationMode> = &[
    (Keyword::Once, IterationMode::Once),
    (Keyword::OncePerLight, IterationMode::OncePerLight),
];

pub const LIGHT_TYPES: Table<LightType> = &[
    (Keyword::Point, LightType::Point),
    (Keyword::Spot, LightType::Spot),
    (Keyword::Directional, LightType::Directional),
];

pub const FOG_MODES: Table<FogMode> = &[
    (Keyword::None, FogMode::None),
    (Keyword::Linear, FogMode::Linear),
    (Keyword::Exp, FogMode::Exp),
    (Keyword::Exp2, FogMode::Exp2),
];

pub const TEXTURE_TYPES: Table<TextureType> = &[
    (Keyword::Texture1D, TextureType::Texture1D),
    (Keyword::Texture2D, TextureType::Texture2D),
    (Keyword::CubeMap, TextureType::CubeMap),
];

pub const ADDRESS_AXES: Table<AddressAxis> = &[
    (Keyword::U, AddressAxis::U),
    (Keyword::V, AddressAxis::V),
    (Keyword::W, AddressAxis::W),
];

pub const ADDRESSING_MODES: Table<AddressingMode> = &[
    (Keyword::Wrap, AddressingMode::Wrap),
    (Keyword::Clamp, AddressingMode::Clamp),
    (Keyword::Mirror, AddressingMode::Mirror),
    (Keyword::MirrorOnce, AddressingMode::MirrorOnce),
    (Keyword::Border, AddressingMode::Border),
];

/// Filter kinds for the three-argument form of `filtering`
pub const TEXTURE_FILTERS: Table<TextureFilter> = &[
    (Keyword::Point, TextureFilter::Point),
    (Keyword::Linear, TextureFilter::Linear),
    (Keyword::Anisotropic, TextureFilter::Anisotropic),
];

/// The one-argument form of `filtering`, as min/mag/mip
pub const FILTER_PRESETS: Table<Filtering> = &[
    (
        Keyword::None,
        Filtering::new(TextureFilter::Point, TextureFilter::Point, TextureFilter::Point),
    ),
    (
        Keyword::Bilinear,
        Filtering::new(TextureFilter::Linear, TextureFilter::Linear, TextureFilter::Point),
    ),
    (
        Keyword::Trilinear,
        Filtering::new(TextureFilter::Linear, TextureFilter::Linear, TextureFilter::Linear),
    ),
    (
        Keyword::Anisotropic,
        Filtering::new(
            TextureFilter::Anisotropic,
            TextureFilter::Anisotropic,
            TextureFilter::Linear,
        ),
    ),
];

pub const TEXTURE_OPS: Table<TextureOp> = &[
    (Keyword::Disable, TextureOp::Disable),
    (Keyword::SelectArg1, TextureOp::SelectArg1),
    (Keyword::SelectArg2, TextureOp::SelectArg2),
    (Keyword::Modulate, TextureOp::Modulate),
    (Keyword::Modulate2X, TextureOp::Modulate2X),
    (Keyword::Modulate4X, TextureOp::Modulate4X),
    (Keyword::Add, TextureOp::Add),
    (Keyword::AddSigned, TextureOp::AddSigned),
    (Keyword::Subtract, TextureOp::Subtract),
    (Keyword::AddSmooth, TextureOp::AddSmooth),
    (Keyword::BlendDiffuseAlpha, TextureOp::BlendDiffuseAlpha),
    (Keyword::BlendTextureAlpha, TextureOp::BlendTextureAlpha),
    (Keyword::BlendFactorAlpha, TextureOp::BlendFactorAlpha),
    (Keyword::BlendTextureAlphaPm, TextureOp::BlendTextureAlphaPm),
    (Keyword::BlendCurrentAlpha, TextureOp::BlendCurrentAlpha),
    (Keyword::PreModulate, TextureOp::PreModulate),
    (Keyword::ModulateAlphaAddColour, TextureOp::ModulateAlphaAddColour),
    (Keyword::ModulateColourAddAlpha, TextureOp::ModulateColourAddAlpha),
    (Keyword::DotProduct3, TextureOp::DotProduct3),
    (Keyword::MultiplyAdd, TextureOp::MultiplyAdd),
    (Keyword::Lerp, TextureOp::Lerp),
];

pub const TEXTURE_ARGS: Table<TextureArgument> = &[
    (Keyword::Current, TextureArgument::Current),
    (Keyword::Texture, TextureArgument::Texture),
    (Keyword::Diffuse, TextureArgument::Diffuse),
    (Keyword::Specular, TextureArgument::Specular),
    (Keyword::Constant, TextureArgument::Constant),
];

pub const TEXGENS: Table<TexGen> = &[
    (Keyword::None, TexGen::None),
    (Keyword::SphereMap, TexGen::SphereMap),
    (Keyword::EyespaceReflection, TexGen::EyespaceReflection),
    (Keyword::EyespaceNormal, TexGen::EyespaceNormal),
];

pub const XFORM_TYPES: Table<XformType> = &[
    (Keyword::ScrollX, XformType::ScrollX),
    (Keyword::ScrollY, XformType::ScrollY),
    (Keyword::Rotate, XformType::Rotate),
    (Keyword::ScaleX, XformType::ScaleX),
    (Keyword::ScaleY, XformType::ScaleY),
];

pub const WAVE_TYPES: Table<WaveType> = &[
    (Keyword::Sine, WaveType::Sine),
    (Keyword::Square, WaveType::Square),
    (Keyword::Sawtooth, WaveType::Sawtooth),
    (Keyword::InverseSawtooth, WaveType::InverseSawtooth),
    (Keyword::Triangle, WaveType::Triangle),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::parsing::grammar::{self, KeywordSet};
    use std::collections::BTreeSet;

    fn assert_unique_keys<T>(name: &str, table: &[(Keyword, T)]) {
        let keys: BTreeSet<Keyword> = table.iter().map(|(keyword, _)| *keyword).collect();
        assert_eq!(keys.len(), table.len(), "{} repeats a keyword", name);
    }

    #[test]
    fn test_table_keys_are_unique() {
        assert_unique_keys("SORT_GROUPS", SORT_GROUPS);
        assert_unique_keys("BLEND_FACTORS", BLEND_FACTORS);
        assert_unique_keys("BLEND_PRESETS", BLEND_PRESETS);
        assert_unique_keys("COMPARE_FUNCS", COMPARE_FUNCS);
        assert_unique_keys("STENCIL_OPS", STENCIL_OPS);
        assert_unique_keys("CULL_MODES", CULL_MODES);
        assert_unique_keys("SHADE_MODES", SHADE_MODES);
        assert_unique_keys("ITERATION_MODES", ITERATION_MODES);
        assert_unique_keys("LIGHT_TYPES", LIGHT_TYPES);
        assert_unique_keys("FOG_MODES", FOG_MODES);
        assert_unique_keys("TEXTURE_TYPES", TEXTURE_TYPES);
        assert_unique_keys("ADDRESS_AXES", ADDRESS_AXES);
        assert_unique_keys("ADDRESSING_MODES", ADDRESSING_MODES);
        assert_unique_keys("TEXTURE_FILTERS", TEXTURE_FILTERS);
        assert_unique_keys("FILTER_PRESETS", FILTER_PRESETS);
        assert_unique_keys("TEXTURE_OPS", TEXTURE_OPS);
        assert_unique_keys("TEXTURE_ARGS", TEXTURE_ARGS);
        assert_unique_keys("TEXGENS", TEXGENS);
        assert_unique_keys("XFORM_TYPES", XFORM_TYPES);
        assert_unique_keys("WAVE_TYPES", WAVE_TYPES);
    }

    #[test]
    fn test_table_keys_are_the_grammar_choices() {
        assert_eq!(
            COMPARE_FUNCS.keywords(),
            COMPARE_FUNCS.iter().map(|(keyword, _)| *keyword).collect::<Vec<_>>()
        );
        assert!(KeywordSet::contains(&TEXTURE_OPS, Keyword::Modulate2X));
        assert!(!KeywordSet::contains(&TEXTURE_OPS, Keyword::Point));
    }

    #[test]
    fn test_filtering_accepts_presets_and_kinds() {
        let options = grammar::FILTER_OPTIONS.keywords();
        let mut expected: BTreeSet<Keyword> =
            FILTER_PRESETS.iter().map(|(keyword, _)| *keyword).collect();
        expected.extend(TEXTURE_FILTERS.iter().map(|(keyword, _)| *keyword));

        assert_eq!(options.len(), expected.len(), "union holds no duplicates");
        assert_eq!(options.into_iter().collect::<BTreeSet<_>>(), expected);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(
            lookup(BLEND_PRESETS, Keyword::Add),
            Some((BlendFactor::One, BlendFactor::One))
        );
        assert_eq!(lookup(COMPARE_FUNCS, Keyword::LessEqual), Some(CompareFunc::LessEqual));
        assert_eq!(lookup(COMPARE_FUNCS, Keyword::Add), None);
    }
}
