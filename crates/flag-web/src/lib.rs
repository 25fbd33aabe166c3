#![cfg(target_arch = "wasm32")]
use flag_core::{Animator, FlagConfig, FlagPalette};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod tracker;

pub use tracker::{on_hand_results, on_tracker_error};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("flag-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas_el = document
        .get_element_by_id("flag-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #flag-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    wire_canvas_resize(&canvas);

    let config = Rc::new(RefCell::new(FlagConfig::default()));
    let gesture = tracker::gesture_slot();
    events::wire_config_panel(&document, config.clone());
    overlay::update(&document, tracker::status(), Default::default());

    let gpu = frame::init_gpu(&canvas).await;
    if gpu.is_none() {
        log::warn!("continuing without a renderer; the overlay still tracks gestures");
    }

    let ctx = frame::FrameContext {
        config,
        gesture,
        animator: Animator::new(),
        gpu,
        canvas,
        document,
        started: Instant::now(),
        field_count: 0,
        field_palette: FlagPalette::default(),
    };
    frame::start_loop(Rc::new(RefCell::new(ctx)));
    log::info!("flag-web initialized");
    Ok(())
}
