//! Runtime configuration backing the control panel.

use crate::constants::*;
use crate::field::FlagPalette;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("particle count must be at least 1, got {0}")]
    InvalidParticleCount(i64),
}

/// Panel-adjustable settings. Fields are freely readable; the setters exist
/// to funnel raw UI input through range clamping in one place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlagConfig {
    pub particle_count: usize,
    pub wave_strength: f32,
    pub wave_speed: f32,
    pub point_size: f32,
    pub palette: FlagPalette,
    pub wave_enabled: bool,
}

impl Default for FlagConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            wave_strength: DEFAULT_WAVE_STRENGTH,
            wave_speed: DEFAULT_WAVE_SPEED,
            point_size: DEFAULT_POINT_SIZE,
            palette: FlagPalette::default(),
            wave_enabled: true,
        }
    }
}

impl FlagConfig {
    /// Counts below one are rejected outright; anything else is clamped into
    /// the supported range.
    pub fn set_particle_count(&mut self, count: i64) -> Result<(), ConfigError> {
        if count < 1 {
            return Err(ConfigError::InvalidParticleCount(count));
        }
        self.particle_count = (count as usize).clamp(PARTICLE_COUNT_MIN, PARTICLE_COUNT_MAX);
        Ok(())
    }

    /// Non-finite input leaves the current value.
    pub fn set_wave_strength(&mut self, strength: f32) {
        if strength.is_finite() {
            self.wave_strength = strength.clamp(0.0, WAVE_STRENGTH_MAX);
        }
    }

    pub fn set_wave_speed(&mut self, speed: f32) {
        if speed.is_finite() {
            self.wave_speed = speed.clamp(0.0, WAVE_SPEED_MAX);
        }
    }

    pub fn set_point_size(&mut self, size: f32) {
        if size.is_finite() {
            self.point_size = size.clamp(POINT_SIZE_MIN, POINT_SIZE_MAX);
        }
    }
}

/// Parse a `#rrggbb` color (leading `#` optional) into [0, 1] RGB.
pub fn parse_hex_color(hex: &str) -> Option<[f32; 3]> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 {
        return None;
    }
    let channel = |range| {
        hex.get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .map(|v| v as f32 / 255.0)
    };
    Some([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}
