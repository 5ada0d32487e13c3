//! Renderer state enumerations
//!
//! The closed sets of values a descriptor field can take. Keyword spellings live in the
//! resolver's mapping tables; these types only know their own names.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortGroup {
    Skydome,
    #[default]
    Normal,
    Transparent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendFactor {
    One,
    Zero,
    SrcColour,
    InvSrcColour,
    SrcAlpha,
    InvSrcAlpha,
    SrcAlphaSat,
    DestAlpha,
    InvDestAlpha,
    DestColour,
    InvDestColour,
    BlendFactor,
    InvBlendFactor,
    BothInvSrcAlpha,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareFunc {
    Never,
    Less,
    LessEqual,
    Equal,
    NotEqual,
    GreaterEqual,
    Greater,
    Always,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StencilOp {
    Keep,
    Zero,
    Replace,
    IncrSat,
    DecrSat,
    Invert,
    Incr,
    Decr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CullMode {
    #[default]
    None,
    Clockwise,
    CounterClockwise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadeMode {
    Flat,
    #[default]
    Gouraud,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FogMode {
    None,
    #[default]
    Linear,
    Exp,
    Exp2,
}

/// Where a material colour channel takes its value from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialSource {
    #[default]
    Material,
    VertexColour,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IterationMode {
    Once,
    OncePerLight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LightType {
    Point,
    Spot,
    Directional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureType {
    #[serde(rename = "1d")]
    Texture1D,
    #[default]
    #[serde(rename = "2d")]
    Texture2D,
    CubeMap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressAxis {
    U,
    V,
    W,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressingMode {
    #[default]
    Wrap,
    Clamp,
    Mirror,
    MirrorOnce,
    Border,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureFilter {
    Point,
    #[default]
    Linear,
    Anisotropic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureOp {
    Disable,
    SelectArg1,
    SelectArg2,
    Modulate,
    Modulate2X,
    Modulate4X,
    Add,
    AddSigned,
    Subtract,
    AddSmooth,
    BlendDiffuseAlpha,
    BlendTextureAlpha,
    BlendFactorAlpha,
    BlendTextureAlphaPm,
    BlendCurrentAlpha,
    PreModulate,
    ModulateAlphaAddColour,
    ModulateColourAddAlpha,
    DotProduct3,
    MultiplyAdd,
    Lerp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureArgument {
    Current,
    Texture,
    Diffuse,
    Specular,
    Constant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TexGen {
    #[default]
    None,
    SphereMap,
    EyespaceReflection,
    EyespaceNormal,
}

/// The texture transform component a wave drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum XformType {
    #[default]
    ScrollX,
    ScrollY,
    Rotate,
    ScaleX,
    ScaleY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WaveType {
    #[default]
    Sine,
    Square,
    Sawtooth,
    InverseSawtooth,
    Triangle,
}
