//! Pass descriptor
//!
//!     A pass is one fixed-function render state configuration applied in a single draw
//!     submission. Its state is grouped the way the renderer sets it: material, blending,
//!     alpha test, depth, stencil, fog, and the loose rasterizer flags. Texture units are
//!     kept in declaration order, which is the stage order used when compositing.

use super::colour::Colour;
use super::constants::{
    BlendFactor, CompareFunc, CullMode, FogMode, IterationMode, LightType, MaterialSource,
    ShadeMode, SortGroup, StencilOp,
};
use super::texture_unit::TextureUnit;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Material {
    pub ambient: Colour,
    pub diffuse: Colour,
    pub specular: Colour,
    pub emissive: Colour,
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Colour::BLACK,
            diffuse: Colour::WHITE,
            specular: Colour::WHITE,
            emissive: Colour::BLACK,
            shininess: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MaterialSources {
    pub ambient: MaterialSource,
    pub diffuse: MaterialSource,
    pub specular: MaterialSource,
    pub emissive: MaterialSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlendState {
    pub enabled: bool,
    pub source: BlendFactor,
    pub destination: BlendFactor,
}

impl Default for BlendState {
    fn default() -> Self {
        Self {
            enabled: false,
            source: BlendFactor::SrcAlpha,
            destination: BlendFactor::InvSrcAlpha,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AlphaTest {
    pub enabled: bool,
    pub func: CompareFunc,
    pub reference: f32,
}

impl Default for AlphaTest {
    fn default() -> Self {
        Self {
            enabled: false,
            func: CompareFunc::GreaterEqual,
            reference: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DepthState {
    pub test: bool,
    pub write: bool,
    pub func: CompareFunc,
    pub bias: f32,
}

impl Default for DepthState {
    fn default() -> Self {
        Self {
            test: false,
            write: true,
            func: CompareFunc::LessEqual,
            bias: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StencilState {
    pub enabled: bool,
    pub func: CompareFunc,
    pub reference: u32,
    pub mask: u32,
    pub write_mask: u32,
    pub pass: StencilOp,
    pub fail: StencilOp,
    pub depth_fail: StencilOp,
}

impl Default for StencilState {
    fn default() -> Self {
        Self {
            enabled: false,
            func: CompareFunc::GreaterEqual,
            reference: 100,
            mask: u32::MAX,
            write_mask: u32::MAX,
            pass: StencilOp::Keep,
            fail: StencilOp::Zero,
            depth_fail: StencilOp::Zero,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FogState {
    /// Whether this pass replaces the scene fog settings
    pub override_scene: bool,
    pub mode: FogMode,
    pub density: f32,
    pub start: f32,
    pub end: f32,
    pub colour: Colour,
}

impl Default for FogState {
    fn default() -> Self {
        Self {
            override_scene: false,
            mode: FogMode::Linear,
            density: 0.5,
            start: 10.0,
            end: 1000.0,
            colour: Colour::WHITE,
        }
    }
}

/// Multi-pass lighting: run once, or once per light of a given type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Iteration {
    pub mode: IterationMode,
    pub light_type: LightType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pass {
    pub material: Material,
    pub material_sources: MaterialSources,
    pub blend: BlendState,
    pub alpha_test: AlphaTest,
    pub depth: DepthState,
    pub stencil: StencilState,
    pub cull_mode: CullMode,
    pub normalise_normals: bool,
    pub lighting: bool,
    pub shading: ShadeMode,
    pub colour_write: bool,
    pub max_lights: u32,
    pub iteration: Option<Iteration>,
    pub fog: FogState,
    /// Pass-level sort override; `None` uses the technique's group
    pub sort: Option<SortGroup>,
    pub texture_units: Vec<TextureUnit>,
}

impl Default for Pass {
    fn default() -> Self {
        Self {
            material: Material::default(),
            material_sources: MaterialSources::default(),
            blend: BlendState::default(),
            alpha_test: AlphaTest::default(),
            depth: DepthState::default(),
            stencil: StencilState::default(),
            cull_mode: CullMode::None,
            normalise_normals: false,
            lighting: false,
            shading: ShadeMode::Gouraud,
            colour_write: true,
            max_lights: 8,
            iteration: None,
            fog: FogState::default(),
            sort: None,
            texture_units: Vec::new(),
        }
    }
}

impl Pass {
    pub fn uses_vertex_colour(&self) -> bool {
        let sources = self.material_sources;
        [
            sources.ambient,
            sources.diffuse,
            sources.specular,
            sources.emissive,
        ]
        .contains(&MaterialSource::VertexColour)
    }
}
