use flag_core::*;
use glam::Vec2;

fn hand(wrist: Vec2, thumb_tip: Vec2, index_tip: Vec2) -> HandFrame {
    let mut points = vec![Vec2::ZERO; LANDMARKS_PER_HAND];
    points[WRIST] = wrist;
    points[THUMB_TIP] = thumb_tip;
    points[INDEX_TIP] = index_tip;
    HandFrame::new(points)
}

fn open_hand(wrist: Vec2) -> HandFrame {
    hand(
        wrist,
        wrist + Vec2::new(-0.08, 0.12),
        wrist + Vec2::new(0.08, 0.12),
    )
}

fn pinched_hand(wrist: Vec2) -> HandFrame {
    hand(
        wrist,
        wrist + Vec2::new(0.01, 0.12),
        wrist + Vec2::new(0.02, 0.12),
    )
}

#[test]
fn no_hands_is_the_neutral_state() {
    let state = derive_gesture(&[]);
    assert_eq!(state, GestureState::NEUTRAL);
    assert!(!state.has_hands);
    assert_eq!(state.distance, 0.5);
    assert!(!state.is_pinching);
}

#[test]
fn neutral_is_the_default() {
    assert_eq!(GestureState::default(), GestureState::NEUTRAL);
    assert_eq!(GestureSlot::new().snapshot(), GestureState::NEUTRAL);
}

#[test]
fn single_pinched_hand_compresses() {
    let state = derive_gesture(&[pinched_hand(Vec2::new(0.5, 0.5))]);
    assert!(state.has_hands);
    assert!(state.is_pinching);
    assert_eq!(state.distance, PINCH_DISTANCE);
}

#[test]
fn single_open_hand_holds_neutral_distance() {
    let state = derive_gesture(&[open_hand(Vec2::new(0.5, 0.5))]);
    assert!(state.has_hands);
    assert!(!state.is_pinching);
    assert_eq!(state.distance, NEUTRAL_DISTANCE);
}

#[test]
fn pinch_exactly_at_threshold_does_not_trigger() {
    let thumb = Vec2::new(0.0, 0.1);
    let index = Vec2::new(PINCH_THRESHOLD, 0.1);
    let state = derive_gesture(&[hand(Vec2::new(0.0, 0.0), thumb, index)]);
    assert!(!state.is_pinching, "the pinch comparison is strict");
    assert_eq!(state.distance, NEUTRAL_DISTANCE);
}

#[test]
fn two_hands_map_wrist_spread_onto_unit_range() {
    let a = open_hand(Vec2::new(0.2, 0.5));
    let b = open_hand(Vec2::new(0.65, 0.5));
    let state = derive_gesture(&[a, b]);
    assert!(state.has_hands);
    assert!(!state.is_pinching);
    // (0.45 - 0.1) / 0.6
    assert!((state.distance - 0.583_333_3).abs() < 1e-5, "got {}", state.distance);
}

#[test]
fn two_hand_spread_clamps_at_both_ends() {
    let near = derive_gesture(&[
        open_hand(Vec2::new(0.50, 0.5)),
        open_hand(Vec2::new(0.55, 0.5)),
    ]);
    assert_eq!(near.distance, 0.0);

    let far = derive_gesture(&[
        open_hand(Vec2::new(0.1, 0.5)),
        open_hand(Vec2::new(0.9, 0.5)),
    ]);
    assert_eq!(far.distance, 1.0);
}

#[test]
fn two_hand_spread_is_monotonic() {
    let mut previous = -1.0_f32;
    for step in 0..40 {
        let raw = step as f32 * 0.02;
        let state = derive_gesture(&[
            open_hand(Vec2::new(0.1, 0.5)),
            open_hand(Vec2::new(0.1 + raw, 0.5)),
        ]);
        assert!(
            state.distance >= previous,
            "distance regressed at raw spread {raw}"
        );
        previous = state.distance;
    }
}

#[test]
fn pinching_fingers_are_ignored_while_two_hands_show() {
    let a = pinched_hand(Vec2::new(0.2, 0.5));
    let b = pinched_hand(Vec2::new(0.65, 0.5));
    let state = derive_gesture(&[a, b]);
    assert!(!state.is_pinching, "two-hand mode never reports a pinch");
}

#[test]
fn malformed_hands_are_skipped() {
    let stub = HandFrame::new(vec![Vec2::new(0.5, 0.5); 5]);
    assert!(!stub.is_usable());

    let state = derive_gesture(&[stub.clone(), pinched_hand(Vec2::new(0.5, 0.5))]);
    assert!(state.is_pinching, "the usable hand alone decides the state");

    let state = derive_gesture(&[stub.clone(), stub]);
    assert_eq!(state, GestureState::NEUTRAL);
}

#[test]
fn minimal_landmark_count_is_usable() {
    let flat: Vec<f32> = (0..MIN_LANDMARKS * 3).map(|i| i as f32 * 0.01).collect();
    let frame = HandFrame::from_flat(&flat);
    assert_eq!(frame.len(), MIN_LANDMARKS);
    assert!(frame.is_usable());
}

#[test]
fn hands_beyond_the_second_are_ignored() {
    let a = open_hand(Vec2::new(0.2, 0.5));
    let b = open_hand(Vec2::new(0.65, 0.5));
    let c = open_hand(Vec2::new(0.99, 0.99));
    let with_extra = derive_gesture(&[a.clone(), b.clone(), c]);
    assert_eq!(with_extra, derive_gesture(&[a, b]));
}

#[test]
fn from_flat_parses_triples_and_drops_depth() {
    let mut flat = Vec::new();
    for i in 0..LANDMARKS_PER_HAND {
        flat.extend_from_slice(&[i as f32, i as f32 + 0.5, 99.0]);
    }
    let frame = HandFrame::from_flat(&flat);
    assert_eq!(frame.len(), LANDMARKS_PER_HAND);
    assert!(frame.is_usable());

    // A trailing partial triple is dropped.
    let frame = HandFrame::from_flat(&[0.1, 0.2, 0.3, 0.4, 0.5]);
    assert_eq!(frame.len(), 1);

    // Extra landmarks past the known layout are ignored.
    let long: Vec<f32> = vec![0.25; (LANDMARKS_PER_HAND + 4) * 3];
    assert_eq!(HandFrame::from_flat(&long).len(), LANDMARKS_PER_HAND);

    assert!(HandFrame::from_flat(&[]).is_empty());
}

#[test]
fn action_buckets_split_the_distance_range() {
    assert_eq!(GestureAction::from_distance(0.0), GestureAction::Compressing);
    assert_eq!(GestureAction::from_distance(0.29), GestureAction::Compressing);
    assert_eq!(GestureAction::from_distance(0.3), GestureAction::Hovering);
    assert_eq!(GestureAction::from_distance(0.5), GestureAction::Hovering);
    assert_eq!(GestureAction::from_distance(0.7), GestureAction::Hovering);
    assert_eq!(GestureAction::from_distance(0.71), GestureAction::Expanding);
    assert_eq!(GestureAction::from_distance(1.0), GestureAction::Expanding);
}

#[test]
fn action_labels_match_the_overlay_copy() {
    assert_eq!(GestureAction::Compressing.label(), "COMPRESSING");
    assert_eq!(GestureAction::Hovering.label(), "HOVERING");
    assert_eq!(GestureAction::Expanding.label(), "EXPANDING");
}

#[test]
fn slot_returns_the_latest_published_state() {
    let slot = GestureSlot::new();
    let state = derive_gesture(&[pinched_hand(Vec2::new(0.4, 0.4))]);
    slot.publish(state);
    assert_eq!(slot.snapshot(), state);

    slot.publish(GestureState::NEUTRAL);
    assert_eq!(slot.snapshot(), GestureState::NEUTRAL);
}

#[test]
fn slot_is_shareable_across_threads() {
    use std::sync::Arc;

    let slot = Arc::new(GestureSlot::new());
    let writer = Arc::clone(&slot);
    let handle = std::thread::spawn(move || {
        writer.publish(GestureState {
            has_hands: true,
            distance: 0.9,
            is_pinching: false,
        });
    });
    handle.join().unwrap();
    assert_eq!(slot.snapshot().distance, 0.9);
}
