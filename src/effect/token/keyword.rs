//! The keyword table
//!
//!     Every reserved word of the Effect language lives here, once. The table drives the
//!     scanner (lexeme to keyword lookup), the grammar (which keywords open statements and
//!     which are accepted as choices) and the syntax tree (keyword node tags).
//!
//!     Lookup is case-sensitive: `pass` is a keyword, `Pass` is an identifier.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

macro_rules! keywords {
    ($($variant:ident => $lexeme:literal,)*) => {
        /// A reserved word of the Effect language.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(into = "&'static str")]
        pub enum Keyword {
            $($variant,)*
        }

        impl Keyword {
            /// Every keyword, in table order.
            pub const ALL: &'static [Keyword] = &[$(Keyword::$variant,)*];

            /// The lexeme this keyword is written as.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Keyword::$variant => $lexeme,)*
                }
            }
        }
    };
}

keywords! {
    // Blocks
    Effect => "effect",
    Technique => "technique",
    Pass => "pass",
    TextureUnit => "textureunit",
    WaveXform => "wavexform",

    // Effect and technique settings
    ReceiveShadows => "receiveshadows",
    CastShadows => "castshadows",
    LodLevel => "lodlevel",
    Sort => "sort",
    Skydome => "skydome",
    Normal => "normal",
    Transparent => "transparent",

    Enabled => "enabled",
    Disabled => "disabled",

    // Material
    Ambient => "ambient",
    Diffuse => "diffuse",
    Specular => "specular",
    Emissive => "emissive",
    VertexColour => "vertexcolour",
    Shininess => "shininess",

    // Scene blending
    SceneBlend => "sceneblend",
    Add => "add",
    Modulate => "modulate",
    ColourBlend => "colourblend",
    AlphaBlend => "alphablend",
    One => "one",
    Zero => "zero",
    SrcColour => "srccolour",
    InvSrcColour => "invsrccolour",
    SrcAlpha => "srcalpha",
    InvSrcAlpha => "invsrcalpha",
    SrcAlphaSat => "srcalphasat",
    DestAlpha => "destalpha",
    InvDestAlpha => "invdestalpha",
    DestColour => "destcolour",
    InvDestColour => "invdestcolour",
    BlendFactor => "blendfactor",
    InvBlendFactor => "invblendfactor",
    BothInvSrcAlpha => "bothinvsrcalpha",

    // Comparison functions
    Always => "always",
    Never => "never",
    Less => "less",
    LessEqual => "lequal",
    Equal => "equal",
    NotEqual => "notequal",
    GreaterEqual => "gequal",
    Greater => "greater",

    // Alpha and depth
    AlphaTest => "alphatest",
    DepthTest => "depthtest",
    DepthFunc => "depthfunc",
    DepthBias => "depthbias",
    DepthWrite => "depthwrite",

    // Stencil
    StencilTest => "stenciltest",
    StencilMask => "stencilmask",
    StencilWriteMask => "stencilwritemask",
    StencilPass => "stencilpass",
    StencilFail => "stencilfail",
    StencilZFail => "stencilzfail",
    Keep => "keep",
    Replace => "replace",
    IncrSat => "incrsat",
    DecrSat => "decrsat",
    Invert => "invert",
    Incr => "incr",
    Decr => "decr",

    // Rasterizer and lighting
    CullingMode => "cullingmode",
    None => "none",
    Clockwise => "clockwise",
    CounterClockwise => "counterclockwise",
    NormaliseNormals => "normalisenormals",
    Lighting => "lighting",
    Shading => "shading",
    Flat => "flat",
    Gouraud => "gouraud",
    ColourWrite => "colourwrite",
    MaxLights => "maxlights",
    Iteration => "iteration",
    Once => "once",
    OncePerLight => "onceperlight",
    Point => "point",
    Spot => "spot",
    Directional => "directional",

    // Fog
    FogOverride => "fogoverride",
    FogType => "fogtype",
    Linear => "linear",
    Exp => "exp",
    Exp2 => "exp2",
    FogDensity => "fogdensity",
    FogStart => "fogstart",
    FogEnd => "fogend",
    FogColour => "fogcolour",

    // Texture units
    Texture => "texture",
    Texture1D => "1d",
    Texture2D => "2d",
    CubeMap => "cubemap",
    AutoGenerated => "autogenerated",
    TexCoordSet => "texcoordset",
    AddressingMode => "addressingmode",
    U => "u",
    V => "v",
    W => "w",
    Wrap => "wrap",
    Clamp => "clamp",
    Mirror => "mirror",
    MirrorOnce => "mirroronce",
    Border => "border",
    Filtering => "filtering",
    Bilinear => "bilinear",
    Trilinear => "trilinear",
    Anisotropic => "anisotropic",
    MaxAnisotropy => "maxanisotropy",
    ColourOp => "colourop",
    AlphaOp => "alphaop",
    ConstantColour => "constantcolour",
    TexCoordGen => "texcoordgen",
    SphereMap => "spheremap",
    EyespaceReflection => "eyespace_reflection",
    EyespaceNormal => "eyespace_normal",
    Scroll => "scroll",
    Scale => "scale",
    Rotate => "rotate",
    ScrollAnim => "scrollanim",
    ScaleAnim => "scaleanim",
    RotateAnim => "rotateanim",

    // Texture combine operations and arguments
    Disable => "disable",
    SelectArg1 => "selectarg1",
    SelectArg2 => "selectarg2",
    Modulate2X => "modulate2x",
    Modulate4X => "modulate4x",
    AddSigned => "addsigned",
    Subtract => "subtract",
    AddSmooth => "addsmooth",
    BlendDiffuseAlpha => "blenddiffusealpha",
    BlendTextureAlpha => "blendtexturealpha",
    BlendFactorAlpha => "blendfactoralpha",
    BlendTextureAlphaPm => "blendtexturealphapm",
    BlendCurrentAlpha => "blendcurrentalpha",
    PreModulate => "premodulate",
    ModulateAlphaAddColour => "modulatealpha_addcolour",
    ModulateColourAddAlpha => "modulatecolour_addalpha",
    DotProduct3 => "dotproduct3",
    MultiplyAdd => "multiplyadd",
    Lerp => "lerp",
    Current => "current",
    Constant => "constant",

    // Wave transforms
    XformType => "xformtype",
    ScrollX => "scroll_x",
    ScrollY => "scroll_y",
    ScaleX => "scale_x",
    ScaleY => "scale_y",
    WaveType => "wavetype",
    Sine => "sine",
    Square => "square",
    Sawtooth => "sawtooth",
    InverseSawtooth => "inverse_sawtooth",
    Triangle => "triangle",
    Phase => "phase",
    Base => "base",
    Amplitude => "amplitude",
    Frequency => "frequency",
}

static KEYWORDS_BY_LEXEME: Lazy<HashMap<&'static str, Keyword>> =
    Lazy::new(|| Keyword::ALL.iter().map(|k| (k.as_str(), *k)).collect());

impl Keyword {
    /// Look a lexeme up in the keyword table.
    pub fn from_lexeme(lexeme: &str) -> Option<Keyword> {
        KEYWORDS_BY_LEXEME.get(lexeme).copied()
    }
}

impl From<Keyword> for &'static str {
    fn from(keyword: Keyword) -> Self {
        keyword.as_str()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
