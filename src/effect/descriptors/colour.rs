//! Colour and vector values

use serde::Serialize;

/// An RGBA colour with float channels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Colour {
    pub const WHITE: Colour = Colour::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Colour = Colour::rgba(0.0, 0.0, 0.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build from three or four components; alpha defaults to 1
    pub fn from_components(components: &[f32]) -> Option<Self> {
        match *components {
            [r, g, b] => Some(Self::rgba(r, g, b, 1.0)),
            [r, g, b, a] => Some(Self::rgba(r, g, b, a)),
            _ => None,
        }
    }
}

impl Default for Colour {
    fn default() -> Self {
        Colour::WHITE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);
    pub const ONE: Vector3 = Vector3::new(1.0, 1.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Build from two or three components; z defaults to 0
    pub fn from_components(components: &[f32]) -> Option<Self> {
        match *components {
            [x, y] => Some(Self::new(x, y, 0.0)),
            [x, y, z] => Some(Self::new(x, y, z)),
            _ => None,
        }
    }

    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }
}

impl std::ops::Add for Vector3 {
    type Output = Vector3;

    fn add(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}
