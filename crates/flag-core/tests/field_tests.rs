use flag_core::*;
use glam::Vec2;
use std::collections::HashSet;

fn unique_component_count(field: &ParticleField, axis: usize) -> usize {
    field
        .positions
        .iter()
        .map(|p| p[axis].to_bits())
        .collect::<HashSet<_>>()
        .len()
}

fn polar(radius: f32, angle: f32) -> Vec2 {
    Vec2::new(radius * angle.cos(), radius * angle.sin())
}

#[test]
fn default_request_yields_the_documented_grid() {
    let field = generate(20_000);
    assert_eq!(field.len(), 20_068, "173 x 116 grid");
    assert_eq!(unique_component_count(&field, 0), 173);
    assert_eq!(unique_component_count(&field, 1), 116);
}

#[test]
fn grid_dimension_rounding_for_small_requests() {
    assert_eq!(generate(1).len(), 1);
    assert_eq!(generate(2).len(), 2);
    // cols = round(sqrt(10.5)) = 3, rows = round(7 / 3) = 2
    assert_eq!(generate(7).len(), 6);
}

#[test]
fn positions_and_colors_stay_paired() {
    let field = generate(5_000);
    assert_eq!(field.positions.len(), field.len());
    assert_eq!(field.colors.len(), field.len());
    assert!(!field.is_empty());
}

#[test]
fn particles_lie_flat_inside_the_flag_rectangle() {
    let field = generate(3_000);
    for p in &field.positions {
        assert!(p[0] >= -FLAG_WIDTH / 2.0 && p[0] < FLAG_WIDTH / 2.0, "x out of bounds: {}", p[0]);
        assert!(p[1] >= -FLAG_HEIGHT / 2.0 && p[1] < FLAG_HEIGHT / 2.0, "y out of bounds: {}", p[1]);
        assert_eq!(p[2], 0.0, "rest field must be planar");
    }
}

#[test]
fn every_color_comes_from_the_palette() {
    let palette = FlagPalette::default();
    let field = generate(4_000);
    for c in &field.colors {
        assert!(
            *c == palette.field || *c == palette.emblem,
            "unexpected color {c:?}"
        );
    }
}

#[test]
fn center_is_emblem_colored_and_corners_are_not() {
    let palette = FlagPalette::default();
    let field = generate(20_000);

    let near_center = field
        .positions
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            let da = a[0] * a[0] + a[1] * a[1];
            let db = b[0] * b[0] + b[1] * b[1];
            da.partial_cmp(&db).unwrap()
        })
        .map(|(i, _)| i)
        .unwrap();
    assert_eq!(field.colors[near_center], palette.emblem);

    let corner = field
        .positions
        .iter()
        .position(|p| p[0] == -FLAG_WIDTH / 2.0 && p[1] == -FLAG_HEIGHT / 2.0)
        .expect("grid must include the bottom-left corner");
    assert_eq!(field.colors[corner], palette.field);
}

#[test]
fn custom_palette_is_baked_in() {
    let palette = FlagPalette {
        field: [0.0, 0.2, 0.6],
        emblem: [1.0, 1.0, 1.0],
    };
    let field = generate_with_palette(2_000, &palette);
    assert!(field.colors.contains(&palette.field));
    assert!(field.colors.contains(&palette.emblem));
}

#[test]
fn generation_is_deterministic() {
    assert_eq!(generate(5_000), generate(5_000));
}

#[test]
fn star_polygon_alternates_outer_and_inner_radii() {
    let star = star_polygon();
    for (k, v) in star.iter().enumerate() {
        let expected = if k % 2 == 0 {
            STAR_OUTER_RADIUS
        } else {
            STAR_OUTER_RADIUS * STAR_INNER_RATIO
        };
        assert!(
            (v.length() - expected).abs() < 1e-4,
            "vertex {k} at radius {}, expected {expected}",
            v.length()
        );
    }
    // First outer vertex points straight up.
    assert!(star[0].x.abs() < 1e-4 && (star[0].y - STAR_OUTER_RADIUS).abs() < 1e-4);
}

#[test]
fn star_membership_distinguishes_spikes_from_gaps() {
    let star = star_polygon();
    let inner = STAR_OUTER_RADIUS * STAR_INNER_RATIO;
    let spike_angle = std::f32::consts::FRAC_PI_2;
    let gap_angle = spike_angle + std::f32::consts::PI / 5.0;

    assert!(point_in_star(Vec2::ZERO, &star), "center is inside");
    assert!(point_in_star(polar(inner * 0.95, gap_angle), &star), "inside the inner disc");
    assert!(point_in_star(polar(STAR_OUTER_RADIUS * 0.9, spike_angle), &star), "on a spike");
    assert!(
        !point_in_star(polar(STAR_OUTER_RADIUS * 0.9, gap_angle), &star),
        "between spikes at the same radius"
    );
    assert!(
        !point_in_star(polar(inner * 1.05, gap_angle), &star),
        "just past the inner vertex toward a gap"
    );
    assert!(!point_in_star(polar(STAR_OUTER_RADIUS * 1.1, spike_angle), &star));
    assert!(!point_in_star(Vec2::new(100.0, 100.0), &star));
}

#[test]
fn emblem_fraction_is_plausible() {
    // The star covers a small fraction of the flag; sanity-check coloring is
    // neither empty nor runaway.
    let palette = FlagPalette::default();
    let field = generate(50_000);
    let emblem = field.colors.iter().filter(|c| **c == palette.emblem).count();
    let fraction = emblem as f32 / field.len() as f32;
    assert!(fraction > 0.01 && fraction < 0.15, "emblem fraction {fraction}");
}
