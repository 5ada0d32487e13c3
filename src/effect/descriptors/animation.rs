//! Periodic texture coordinate animation
//!
//!     A [WaveTransform] drives one component of a texture transform with a periodic
//!     function of time:
//!
//!         value(t) = base + amplitude * f((phase + t) * frequency)
//!
//!     where every f has period 1:
//!
//!         sine:             sin(2πx)
//!         triangle:         1 - 2|round(x) - x|
//!         square:           -1 for the second half of each period, 1 otherwise
//!         sawtooth:         frac(x)
//!         inverse sawtooth: 1 - frac(x)

use super::constants::{WaveType, XformType};
use serde::Serialize;
use std::f32::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaveTransform {
    pub target: XformType,
    pub wave: WaveType,
    pub base: f32,
    pub frequency: f32,
    pub phase: f32,
    pub amplitude: f32,
}

impl Default for WaveTransform {
    fn default() -> Self {
        Self {
            target: XformType::ScrollX,
            wave: WaveType::Sine,
            base: 0.0,
            frequency: 1.0,
            phase: 0.0,
            amplitude: 1.0,
        }
    }
}

impl WaveTransform {
    /// Value of the wave `time` seconds after the animation started
    pub fn sample(&self, time: f32) -> f32 {
        let x = (self.phase + time) * self.frequency;
        self.base + self.amplitude * unit_wave(self.wave, x)
    }
}

fn frac(x: f32) -> f32 {
    x - x.floor()
}

fn unit_wave(wave: WaveType, x: f32) -> f32 {
    match wave {
        WaveType::Sine => (x * TAU).sin(),
        WaveType::Triangle => 1.0 - 2.0 * (x.round() - x).abs(),
        WaveType::Square => {
            if frac(x) >= 0.5 {
                -1.0
            } else {
                1.0
            }
        }
        WaveType::Sawtooth => frac(x),
        WaveType::InverseSawtooth => 1.0 - frac(x),
    }
}
