//! Control panel wiring. Each input funnels through the clamping setters so
//! hand-typed values can never push the config out of range.

use crate::dom;
use flag_core::{parse_hex_color, FlagConfig};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_config_panel(document: &web::Document, config: Rc<RefCell<FlagConfig>>) {
    {
        let config = config.clone();
        dom::add_input_listener(document, "particle-count", move |input| {
            if let Ok(count) = input.value().parse::<i64>() {
                if let Err(e) = config.borrow_mut().set_particle_count(count) {
                    log::warn!("particle count rejected: {e}");
                }
            }
        });
    }
    {
        let config = config.clone();
        dom::add_input_listener(document, "wave-strength", move |input| {
            if let Ok(v) = input.value().parse::<f32>() {
                config.borrow_mut().set_wave_strength(v);
            }
        });
    }
    {
        let config = config.clone();
        dom::add_input_listener(document, "wave-speed", move |input| {
            if let Ok(v) = input.value().parse::<f32>() {
                config.borrow_mut().set_wave_speed(v);
            }
        });
    }
    {
        let config = config.clone();
        dom::add_input_listener(document, "point-size", move |input| {
            if let Ok(v) = input.value().parse::<f32>() {
                config.borrow_mut().set_point_size(v);
            }
        });
    }
    {
        let config = config.clone();
        dom::add_input_listener(document, "field-color", move |input| {
            if let Some(rgb) = parse_hex_color(&input.value()) {
                config.borrow_mut().palette.field = rgb;
            }
        });
    }
    {
        let config = config.clone();
        dom::add_input_listener(document, "emblem-color", move |input| {
            if let Some(rgb) = parse_hex_color(&input.value()) {
                config.borrow_mut().palette.emblem = rgb;
            }
        });
    }
    {
        let config = config.clone();
        dom::add_input_listener(document, "wave-enabled", move |input| {
            config.borrow_mut().wave_enabled = input.checked();
        });
    }
    dom::add_click_listener(document, "fullscreen", move || {
        if let Some(doc) = dom::window_document() {
            if doc.fullscreen_element().is_some() {
                doc.exit_fullscreen();
            } else if let Some(root) = doc.document_element() {
                let _ = root.request_fullscreen();
            }
        }
    });
}
