//! Texture unit descriptor
//!
//!     One texture stage of a pass: where the texture comes from, how it is addressed and
//!     filtered, how it combines with the previous stage, and how its coordinates are
//!     generated and animated.
//!
//!     Coordinate transforms are kept as an ordered list of [TransformOp]s, as declared.
//!     [TextureUnit::transform_at] folds them into the effective transform at a point in time.

use super::animation::WaveTransform;
use super::colour::{Colour, Vector3};
use super::constants::{
    AddressingMode, TexGen, TextureArgument, TextureFilter, TextureOp, TextureType, XformType,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Addressing {
    pub u: AddressingMode,
    pub v: AddressingMode,
    pub w: AddressingMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Filtering {
    pub min: TextureFilter,
    pub mag: TextureFilter,
    pub mip: TextureFilter,
}

impl Filtering {
    pub const fn new(min: TextureFilter, mag: TextureFilter, mip: TextureFilter) -> Self {
        Self { min, mag, mip }
    }
}

/// A texture stage combine operation and its two arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Combine {
    pub op: TextureOp,
    pub arg1: TextureArgument,
    pub arg2: TextureArgument,
}

impl Default for Combine {
    fn default() -> Self {
        Self {
            op: TextureOp::Modulate,
            arg1: TextureArgument::Diffuse,
            arg2: TextureArgument::Texture,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum TransformOp {
    Scroll(Vector3),
    Scale(Vector3),
    Rotate(f32),
    ScrollAnim(Vector3),
    ScaleAnim(Vector3),
    RotateAnim(f32),
    Wave(WaveTransform),
}

/// The effective texture coordinate transform at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextureTransform {
    pub scroll: Vector3,
    pub scale: Vector3,
    pub rotate: f32,
}

impl Default for TextureTransform {
    fn default() -> Self {
        Self {
            scroll: Vector3::ZERO,
            scale: Vector3::ONE,
            rotate: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextureUnit {
    pub texture_type: TextureType,
    /// Texture path; `None` when the unit only sets stage state
    pub texture_name: Option<String>,
    /// The texture is rendered at runtime rather than loaded
    pub auto_generated: bool,
    pub coord_set: u32,
    pub addressing: Addressing,
    pub filtering: Filtering,
    pub max_anisotropy: u32,
    pub colour_op: Combine,
    pub alpha_op: Combine,
    pub constant_colour: Colour,
    pub texgen: TexGen,
    pub transforms: Vec<TransformOp>,
}

impl Default for TextureUnit {
    fn default() -> Self {
        Self {
            texture_type: TextureType::Texture2D,
            texture_name: None,
            auto_generated: false,
            coord_set: 0,
            addressing: Addressing::default(),
            filtering: Filtering::default(),
            max_anisotropy: 1,
            colour_op: Combine::default(),
            alpha_op: Combine::default(),
            constant_colour: Colour::WHITE,
            texgen: TexGen::None,
            transforms: Vec::new(),
        }
    }
}

impl TextureUnit {
    pub fn waves(&self) -> impl Iterator<Item = &WaveTransform> {
        self.transforms.iter().filter_map(|op| match op {
            TransformOp::Wave(wave) => Some(wave),
            _ => None,
        })
    }

    pub fn is_animated(&self) -> bool {
        self.transforms.iter().any(|op| {
            matches!(
                op,
                TransformOp::ScrollAnim(_)
                    | TransformOp::ScaleAnim(_)
                    | TransformOp::RotateAnim(_)
                    | TransformOp::Wave(_)
            )
        })
    }

    /// Effective transform `time` seconds after the animation started
    ///
    /// Static values are applied in declaration order (a later `scroll` replaces an earlier
    /// one), then every wave overrides the component it drives, then the constant-rate
    /// animations add `rate * time`.
    pub fn transform_at(&self, time: f32) -> TextureTransform {
        let mut transform = TextureTransform::default();
        let mut scroll_rate = Vector3::ZERO;
        let mut scale_rate = Vector3::ZERO;
        let mut rotate_rate = 0.0;

        for op in &self.transforms {
            match *op {
                TransformOp::Scroll(v) => transform.scroll = v,
                TransformOp::Scale(v) => transform.scale = v,
                TransformOp::Rotate(angle) => transform.rotate = angle,
                TransformOp::ScrollAnim(v) => scroll_rate = v,
                TransformOp::ScaleAnim(v) => scale_rate = v,
                TransformOp::RotateAnim(rate) => rotate_rate = rate,
                TransformOp::Wave(_) => {}
            }
        }

        for wave in self.waves() {
            let value = wave.sample(time);
            match wave.target {
                XformType::ScrollX => transform.scroll.x = value,
                XformType::ScrollY => transform.scroll.y = value,
                XformType::Rotate => transform.rotate = value,
                XformType::ScaleX => transform.scale.x = value,
                XformType::ScaleY => transform.scale.y = value,
            }
        }

        transform.scroll = transform.scroll + scroll_rate.scaled(time);
        transform.scale = transform.scale + scale_rate.scaled(time);
        transform.rotate += rotate_rate * time;
        transform
    }
}
