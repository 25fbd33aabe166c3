//! Flag particle field generation.
//!
//! The field is a regular grid across a 3:2 plane with a five-pointed star
//! emblem baked into the per-particle colors. Generation is a pure function
//! of the requested density and palette; a built field is immutable and is
//! replaced wholesale when the configuration changes.

use crate::constants::*;
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI};

/// The two colors a particle can take.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlagPalette {
    pub field: [f32; 3],
    pub emblem: [f32; 3],
}

impl Default for FlagPalette {
    fn default() -> Self {
        Self {
            field: DEFAULT_FIELD_COLOR,
            emblem: DEFAULT_EMBLEM_COLOR,
        }
    }
}

/// Immutable particle field: rest positions on the flag plane plus the baked
/// color of each particle. `positions`, `colors` and `count` always agree.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 3]>,
    pub count: usize,
}

impl ParticleField {
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// The ten star vertices, outer points first, starting straight up and
/// alternating outer/inner every pi/5.
pub fn star_polygon() -> [Vec2; 10] {
    let inner = STAR_OUTER_RADIUS * STAR_INNER_RATIO;
    let mut verts = [Vec2::ZERO; 10];
    for (k, v) in verts.iter_mut().enumerate() {
        let angle = FRAC_PI_2 + k as f32 * PI / 5.0;
        let radius = if k % 2 == 0 { STAR_OUTER_RADIUS } else { inner };
        *v = Vec2::new(angle.cos(), angle.sin()) * radius;
    }
    verts
}

/// Star membership test. Points inside the inner circle and outside the
/// circumcircle short-circuit; only the annular band in between runs the
/// even-odd crossing test against the polygon.
pub fn point_in_star(p: Vec2, star: &[Vec2; 10]) -> bool {
    let inner = STAR_OUTER_RADIUS * STAR_INNER_RATIO;
    let d2 = p.length_squared();
    if d2 < inner * inner {
        return true;
    }
    if d2 > STAR_OUTER_RADIUS * STAR_OUTER_RADIUS {
        return false;
    }

    let mut inside = false;
    let mut j = star.len() - 1;
    for i in 0..star.len() {
        let (vi, vj) = (star[i], star[j]);
        if (vi.y > p.y) != (vj.y > p.y)
            && p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Build a field of roughly `count` particles with the default palette.
pub fn generate(count: usize) -> ParticleField {
    generate_with_palette(count, &FlagPalette::default())
}

/// Build a field of roughly `count` particles.
///
/// Column count is derived so the grid matches the flag's aspect ratio:
/// `cols = round(sqrt(count * W / H))`, `rows = round(count / cols)`. The
/// actual particle count is `cols * rows`, which can differ slightly from
/// the request. `count` must be at least 1; the configuration layer rejects
/// smaller values before they reach this point.
pub fn generate_with_palette(count: usize, palette: &FlagPalette) -> ParticleField {
    debug_assert!(count >= 1, "particle count must be validated upstream");

    let aspect = FLAG_WIDTH / FLAG_HEIGHT;
    let cols = ((count as f32 * aspect).sqrt().round() as usize).max(1);
    let rows = ((count as f32 / cols as f32).round() as usize).max(1);
    let step_x = FLAG_WIDTH / cols as f32;
    let step_y = FLAG_HEIGHT / rows as f32;

    let star = star_polygon();
    let total = cols * rows;
    log::debug!("field grid {cols}x{rows} ({total} particles) for request {count}");
    let mut positions = Vec::with_capacity(total);
    let mut colors = Vec::with_capacity(total);

    for i in 0..cols {
        for j in 0..rows {
            let x = i as f32 * step_x - FLAG_WIDTH / 2.0;
            let y = j as f32 * step_y - FLAG_HEIGHT / 2.0;
            positions.push([x, y, 0.0]);
            let color = if point_in_star(Vec2::new(x, y), &star) {
                palette.emblem
            } else {
                palette.field
            };
            colors.push(color);
        }
    }

    ParticleField {
        positions,
        colors,
        count: total,
    }
}
