//! Descriptor Model
//!
//!     The strongly typed output of compilation. An [Effect] holds techniques, a
//!     [Technique] holds passes, a [Pass] holds render state and texture units.
//!
//!     Every type implements `Default` with the renderer's engine defaults, so a descriptor
//!     built from an empty block is exactly what the renderer would use if the block left
//!     everything unset. Descriptors are plain data: `Clone`, `PartialEq`, and `Serialize`
//!     for the output formats.

pub mod animation;
pub mod colour;
pub mod constants;
pub mod effect;
pub mod pass;
pub mod technique;
pub mod texture_unit;

pub use animation::WaveTransform;
pub use colour::{Colour, Vector3};
pub use constants::*;
pub use effect::{Effect, TextureReference};
pub use pass::{
    AlphaTest, BlendState, DepthState, FogState, Iteration, Material, MaterialSources, Pass,
    StencilState,
};
pub use technique::Technique;
pub use texture_unit::{
    Addressing, Combine, Filtering, TextureTransform, TextureUnit, TransformOp,
};
