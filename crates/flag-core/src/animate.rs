//! Per-frame animation state.
//!
//! `Animator` folds the latest gesture and panel configuration into the
//! uniform values uploaded to the GPU each frame. Gesture-driven targets are
//! approached with an exponential lerp so hand jitter never lands directly in
//! the shader. The CPU-side displacement and sprite helpers mirror what the
//! shader computes and exist so the motion model can be tested headlessly.

use crate::config::FlagConfig;
use crate::constants::*;
use crate::gesture::GestureState;
use crate::noise::noise_2d;
use glam::{Vec2, Vec3};

/// Everything the particle shader needs for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationParams {
    pub time: f32,
    pub expansion: f32,
    pub wave_strength: f32,
    pub wave_speed: f32,
    pub point_size: f32,
    pub field_color: [f32; 3],
    pub emblem_color: [f32; 3],
}

/// Smoothed animation state carried across frames.
#[derive(Clone, Copy, Debug)]
pub struct Animator {
    expansion: f32,
    wave_strength: f32,
}

impl Animator {
    pub fn new() -> Self {
        Self {
            expansion: 1.0,
            wave_strength: 0.0,
        }
    }

    pub fn expansion(&self) -> f32 {
        self.expansion
    }

    pub fn wave_strength(&self) -> f32 {
        self.wave_strength
    }

    /// Advance one frame and produce the shader parameters.
    ///
    /// The gesture distance maps onto an expansion target and a wave-strength
    /// boost of the configured base strength; with no hands both targets fall
    /// back to rest. Disabling waves zeroes the strength target and freezes
    /// the shader clock at zero so the field flattens in place.
    pub fn tick(
        &mut self,
        elapsed_secs: f32,
        gesture: GestureState,
        config: &FlagConfig,
    ) -> AnimationParams {
        let base = if config.wave_enabled {
            config.wave_strength
        } else {
            0.0
        };

        let (target_expansion, target_strength) = if gesture.has_hands {
            let d = gesture.distance;
            (
                map_linear(d, 0.0, 1.0, EXPANSION_MIN, EXPANSION_MAX),
                base * map_linear(d, 0.0, 1.0, WAVE_BOOST_MIN, WAVE_BOOST_MAX),
            )
        } else {
            (1.0, base)
        };

        self.expansion = lerp(self.expansion, target_expansion, GESTURE_SMOOTHING);
        self.wave_strength = lerp(self.wave_strength, target_strength, GESTURE_SMOOTHING);

        AnimationParams {
            time: if config.wave_enabled { elapsed_secs } else { 0.0 },
            expansion: self.expansion,
            wave_strength: self.wave_strength,
            wave_speed: config.wave_speed,
            point_size: config.point_size,
            field_color: config.palette.field,
            emblem_color: config.palette.emblem,
        }
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

pub fn map_linear(v: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    out_min + (v - in_min) / (in_max - in_min) * (out_max - out_min)
}

fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// CPU mirror of the vertex displacement: scale the rest position by the
/// expansion factor, then lift it by a noise octave plus a travelling sine.
pub fn displace(rest: Vec2, params: &AnimationParams) -> Vec3 {
    let p = rest * params.expansion;
    let phase = params.time * params.wave_speed;
    let z = noise_2d(p.x * NOISE_FREQUENCY - phase, p.y * NOISE_FREQUENCY)
        * params.wave_strength
        * NOISE_AMPLITUDE
        + (p.x * SINE_FREQUENCY - phase * SINE_SPEED_RATIO).sin() * params.wave_strength;
    Vec3::new(p.x, p.y, z)
}

/// CPU mirror of the perspective size attenuation: the projected sprite
/// diameter in pixels for a particle at `view_depth`.
pub fn sprite_size_px(point_size: f32, view_depth: f32) -> f32 {
    point_size * POINT_ATTENUATION / view_depth.max(0.001)
}

/// CPU mirror of the sprite coverage: `coord` is the offset from the sprite
/// center in [-0.5, 0.5] texture units. Returns the blended alpha, or `None`
/// where the fragment is discarded outside the disc.
pub fn sprite_alpha(coord: Vec2) -> Option<f32> {
    let dist = coord.length();
    if dist > 0.5 {
        return None;
    }
    Some(SPRITE_BASE_ALPHA * (1.0 - dist * 2.0).powf(SPRITE_FALLOFF_EXP))
}

/// CPU mirror of the depth shading applied to sprite color.
pub fn depth_brightness(z: f32) -> f32 {
    smoothstep(-DEPTH_DARKEN_EDGE, DEPTH_DARKEN_EDGE, z * DEPTH_DARKEN_SCALE + DEPTH_DARKEN_BIAS)
}
