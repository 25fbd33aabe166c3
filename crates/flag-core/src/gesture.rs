//! Gesture state derived from hand-tracking landmarks.
//!
//! One `GestureState` is derived per tracker frame from whatever hands the
//! detector reported, published into a `GestureSlot`, and read back by the
//! render loop at its own rate. Derivation is stateless: each frame is
//! classified on its own, and a frame with no usable hands yields the same
//! neutral state the application starts in.

use crate::constants::*;
use glam::Vec2;
use smallvec::SmallVec;
use std::sync::{Mutex, PoisonError};

/// Snapshot of the current control gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureState {
    pub has_hands: bool,
    /// Normalized control distance in [0, 1]; 0.5 is neutral.
    pub distance: f32,
    pub is_pinching: bool,
}

impl GestureState {
    pub const NEUTRAL: GestureState = GestureState {
        has_hands: false,
        distance: NEUTRAL_DISTANCE,
        is_pinching: false,
    };
}

impl Default for GestureState {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// One detected hand: ordered 2D landmarks in normalized image coordinates.
#[derive(Clone, Debug, Default)]
pub struct HandFrame {
    points: SmallVec<[Vec2; LANDMARKS_PER_HAND]>,
}

#[derive(Clone, Copy)]
struct KeyPoints {
    wrist: Vec2,
    thumb_tip: Vec2,
    index_tip: Vec2,
}

impl HandFrame {
    pub fn new<I: IntoIterator<Item = Vec2>>(points: I) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// Parse landmarks from a flat x/y/z triple layout, dropping the depth
    /// component. A trailing partial triple is ignored.
    pub fn from_flat(flat: &[f32]) -> Self {
        Self {
            points: flat
                .chunks_exact(3)
                .take(LANDMARKS_PER_HAND)
                .map(|c| Vec2::new(c[0], c[1]))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A hand is usable when it carries every landmark the classifier reads.
    pub fn is_usable(&self) -> bool {
        self.points.len() >= MIN_LANDMARKS
    }

    fn key_points(&self) -> Option<KeyPoints> {
        Some(KeyPoints {
            wrist: *self.points.get(WRIST)?,
            thumb_tip: *self.points.get(THUMB_TIP)?,
            index_tip: *self.points.get(INDEX_TIP)?,
        })
    }
}

/// Classify one tracker frame.
///
/// Two or more usable hands: the wrist-to-wrist spread, remapped from the
/// usable band onto [0, 1]. Exactly one: a thumb-to-index pinch check with
/// discrete distance buckets. None: the neutral state. Malformed hands are
/// skipped entirely, and hands beyond the second are ignored.
pub fn derive_gesture(hands: &[HandFrame]) -> GestureState {
    let mut keys = hands.iter().filter_map(HandFrame::key_points);
    match (keys.next(), keys.next()) {
        (Some(a), Some(b)) => {
            let raw = a.wrist.distance(b.wrist);
            GestureState {
                has_hands: true,
                distance: ((raw - WRIST_RAW_MIN) / WRIST_RAW_SPAN).clamp(0.0, 1.0),
                is_pinching: false,
            }
        }
        (Some(hand), None) => {
            let is_pinching = hand.thumb_tip.distance(hand.index_tip) < PINCH_THRESHOLD;
            GestureState {
                has_hands: true,
                distance: if is_pinching {
                    PINCH_DISTANCE
                } else {
                    NEUTRAL_DISTANCE
                },
                is_pinching,
            }
        }
        _ => GestureState::default(),
    }
}

/// Coarse readout bucket for the on-screen gesture label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureAction {
    Compressing,
    Hovering,
    Expanding,
}

impl GestureAction {
    pub fn from_distance(distance: f32) -> Self {
        if distance < ACTION_COMPRESS_BELOW {
            GestureAction::Compressing
        } else if distance > ACTION_EXPAND_ABOVE {
            GestureAction::Expanding
        } else {
            GestureAction::Hovering
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GestureAction::Compressing => "COMPRESSING",
            GestureAction::Hovering => "HOVERING",
            GestureAction::Expanding => "EXPANDING",
        }
    }
}

/// Single-slot snapshot shared between the tracking producer and the render
/// consumer. `publish` replaces the whole value, `snapshot` copies it out;
/// the newest published state always wins. A poisoned lock just hands the
/// value back, there is no partially-written state to protect against.
#[derive(Debug, Default)]
pub struct GestureSlot {
    inner: Mutex<GestureState>,
}

impl GestureSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, state: GestureState) {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }

    pub fn snapshot(&self) -> GestureState {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
