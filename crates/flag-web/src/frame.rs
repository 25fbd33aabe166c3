//! Per-frame driver: fold gesture and config into animation parameters,
//! rebuild the particle field when the panel changes it, draw.

use crate::overlay;
use crate::render;
use crate::tracker;
use flag_core::{
    generate_with_palette, pack_instances, Animator, FlagConfig, FlagPalette, GestureSlot,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub config: Rc<RefCell<FlagConfig>>,
    pub gesture: Rc<GestureSlot>,
    pub animator: Animator,
    pub gpu: Option<render::GpuState<'a>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub started: Instant,
    // Last-built field request; a mismatch against the config triggers a
    // wholesale rebuild. Zero means nothing uploaded yet.
    pub field_count: usize,
    pub field_palette: FlagPalette,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f32();
        let gesture = self.gesture.snapshot();

        let (params, count, palette) = {
            let config = self.config.borrow();
            (
                self.animator.tick(elapsed, gesture, &config),
                config.particle_count,
                config.palette,
            )
        };

        if count != self.field_count || palette != self.field_palette {
            let field = generate_with_palette(count, &palette);
            let instances = pack_instances(&field);
            if let Some(g) = &mut self.gpu {
                g.upload_instances(&instances);
            }
            self.field_count = count;
            self.field_palette = palette;
            log::info!("rebuilt particle field: {} particles", field.len());
        }

        overlay::update(&self.document, tracker::status(), gesture);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&params) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
