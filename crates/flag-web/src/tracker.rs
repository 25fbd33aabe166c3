//! Entry points the hand-tracking glue calls from JavaScript.
//!
//! MediaPipe delivers results on the main thread; each batch is folded into a
//! `GestureState` and published for the render loop. A tracker error is not
//! fatal: the gesture resets to neutral and the animation keeps running.

use flag_core::{
    derive_gesture, GestureSlot, GestureState, HandFrame, LANDMARKS_PER_HAND, MAX_TRACKED_HANDS,
};
use smallvec::SmallVec;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackerStatus {
    Initializing,
    Active,
    Error,
}

impl TrackerStatus {
    pub fn label(self) -> &'static str {
        match self {
            TrackerStatus::Initializing => "Initializing Camera...",
            TrackerStatus::Active => "Tracking Active",
            TrackerStatus::Error => "Camera Error",
        }
    }
}

struct TrackerShared {
    slot: Rc<GestureSlot>,
    status: Cell<TrackerStatus>,
}

thread_local! {
    static TRACKER: TrackerShared = TrackerShared {
        slot: Rc::new(GestureSlot::new()),
        status: Cell::new(TrackerStatus::Initializing),
    };
}

pub fn gesture_slot() -> Rc<GestureSlot> {
    TRACKER.with(|t| t.slot.clone())
}

pub fn status() -> TrackerStatus {
    TRACKER.with(|t| t.status.get())
}

/// Landmarks arrive flattened as x/y/z triples, 21 per hand. An empty batch
/// is a valid result meaning the camera sees no hands.
#[wasm_bindgen]
pub fn on_hand_results(flat: &[f32], hand_count: usize) {
    let hands: SmallVec<[HandFrame; MAX_TRACKED_HANDS]> = flat
        .chunks_exact(LANDMARKS_PER_HAND * 3)
        .take(hand_count.min(MAX_TRACKED_HANDS))
        .map(HandFrame::from_flat)
        .collect();
    let state = derive_gesture(&hands);
    TRACKER.with(|t| {
        t.slot.publish(state);
        t.status.set(TrackerStatus::Active);
    });
}

#[wasm_bindgen]
pub fn on_tracker_error(message: &str) {
    log::error!("hand tracker error: {message}");
    TRACKER.with(|t| {
        t.slot.publish(GestureState::NEUTRAL);
        t.status.set(TrackerStatus::Error);
    });
}
