#![allow(clippy::assertions_on_constants)]

use flag_core::*;

#[test]
fn flag_keeps_the_three_by_two_aspect() {
    assert_eq!(FLAG_WIDTH / FLAG_HEIGHT, 1.5);
}

#[test]
fn star_fits_inside_the_flag() {
    assert!(STAR_OUTER_RADIUS < FLAG_HEIGHT / 2.0);
    assert!(STAR_INNER_RATIO > 0.0 && STAR_INNER_RATIO < 1.0);
}

#[test]
fn landmark_indices_are_ordered_and_in_bounds() {
    assert!(WRIST < THUMB_TIP);
    assert!(THUMB_TIP < INDEX_TIP);
    assert_eq!(MIN_LANDMARKS, INDEX_TIP + 1);
    assert!(MIN_LANDMARKS <= LANDMARKS_PER_HAND);
    assert_eq!(LANDMARKS_PER_HAND, 21);
    assert_eq!(MAX_TRACKED_HANDS, 2);
}

#[test]
fn gesture_thresholds_are_consistent() {
    assert!(PINCH_THRESHOLD < PINCH_DISTANCE);
    assert!(PINCH_DISTANCE < NEUTRAL_DISTANCE);
    assert!(ACTION_COMPRESS_BELOW < NEUTRAL_DISTANCE);
    assert!(NEUTRAL_DISTANCE < ACTION_EXPAND_ABOVE);
    assert!(WRIST_RAW_MIN > 0.0 && WRIST_RAW_SPAN > 0.0);
}

#[test]
fn gesture_targets_bracket_the_rest_pose() {
    assert!(EXPANSION_MIN < 1.0 && 1.0 < EXPANSION_MAX);
    assert!(WAVE_BOOST_MIN < 1.0 && 1.0 < WAVE_BOOST_MAX);
    assert!(GESTURE_SMOOTHING > 0.0 && GESTURE_SMOOTHING < 1.0);
}

#[test]
fn panel_defaults_sit_inside_their_ranges() {
    assert!((PARTICLE_COUNT_MIN..=PARTICLE_COUNT_MAX).contains(&DEFAULT_PARTICLE_COUNT));
    assert!(DEFAULT_WAVE_STRENGTH > 0.0 && DEFAULT_WAVE_STRENGTH <= WAVE_STRENGTH_MAX);
    assert!(DEFAULT_WAVE_SPEED > 0.0 && DEFAULT_WAVE_SPEED <= WAVE_SPEED_MAX);
    assert!(DEFAULT_POINT_SIZE >= POINT_SIZE_MIN && DEFAULT_POINT_SIZE <= POINT_SIZE_MAX);
    assert!(PARTICLE_COUNT_MIN >= 1);
}

#[test]
fn camera_planes_bracket_the_scene() {
    assert!(CAMERA_NEAR > 0.0);
    assert!(CAMERA_NEAR < CAMERA_Z && CAMERA_Z < CAMERA_FAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
}

#[test]
fn default_colors_are_normalized() {
    for channel in DEFAULT_FIELD_COLOR.iter().chain(&DEFAULT_EMBLEM_COLOR) {
        assert!((0.0..=1.0).contains(channel));
    }
    assert_ne!(DEFAULT_FIELD_COLOR, DEFAULT_EMBLEM_COLOR);
}

#[test]
fn sprite_constants_are_sane() {
    assert!(POINT_ATTENUATION > 0.0);
    assert!(SPRITE_FALLOFF_EXP > 1.0, "falloff must soften the rim");
    assert!(SPRITE_BASE_ALPHA > 0.0 && SPRITE_BASE_ALPHA <= 1.0);
    assert!(DEPTH_DARKEN_SCALE > 0.0 && DEPTH_DARKEN_EDGE > 0.0);
    assert!(
        DEPTH_DARKEN_BIAS.abs() < DEPTH_DARKEN_EDGE,
        "a resting particle must sit inside the darkening ramp"
    );
}
