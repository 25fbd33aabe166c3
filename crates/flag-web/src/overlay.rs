//! DOM overlay: tracker status line, gesture readout, and the hands hint.

use crate::dom;
use crate::tracker::TrackerStatus;
use flag_core::{GestureAction, GestureState};
use web_sys as web;

pub fn update(document: &web::Document, status: TrackerStatus, gesture: GestureState) {
    dom::set_text(document, "tracker-status", status.label());

    if gesture.has_hands {
        let action = GestureAction::from_distance(gesture.distance);
        dom::set_style(document, "gesture-panel", "");
        dom::set_style(document, "gesture-hint", "display:none");
        dom::set_text(document, "gesture-action", action.label());
        let pct = (gesture.distance * 100.0).round() as u32;
        dom::set_style(document, "gesture-intensity", &format!("width:{pct}%"));
    } else {
        dom::set_style(document, "gesture-panel", "display:none");
        dom::set_style(document, "gesture-hint", "");
    }
}
