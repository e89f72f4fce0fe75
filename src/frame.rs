use crate::core::{FrameSchedule, Scene};
use crate::dom;
use crate::constants::INTERACTIVE_SELECTOR;
use crate::events::{self, InteractiveElements};
use crate::overlay::CursorOverlay;
use crate::render::CanvasSurface;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Scene,
    pub surface: Option<CanvasSurface>,
    pub overlay: Option<CursorOverlay>,
    pub elements: InteractiveElements,

    pub window: web::Window,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,

    pub last_instant: Instant,
}

impl FrameContext {
    /// One tick: simulate, draw the canvas, then move the cursor glyphs.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let colors = dom::read_theme_colors(&self.window, &self.document);
        self.scene.update(dt);
        if let Some(surface) = &mut self.surface {
            self.scene.render(surface, &colors);
        }
        if let Some(overlay) = &self.overlay {
            overlay.apply(&self.scene.tracker.glyphs(), &colors);
        }
        log::trace!("[frame] dt={:.4}s", dt.as_secs_f32());
    }

    pub fn resize(&mut self) {
        let (css, dpr) = dom::sync_canvas_backing_size(&self.window, &self.canvas);
        if let Some(surface) = &mut self.surface {
            surface.set_pixel_ratio(dpr);
        }
        self.scene.resize(css.x, css.y);
        self.refresh_regions();
        log::debug!("[frame] resized to {}x{} @{}x", css.x, css.y, dpr);
    }

    pub fn refresh_regions(&mut self) {
        self.elements.refresh(&mut self.scene.tracker.regions);
    }

    /// Refresh plus a new selector pass, picking up elements added since mount.
    pub fn rescan_interactive(&mut self) -> usize {
        self.refresh_regions();
        if self.overlay.is_none() {
            return 0;
        }
        events::register_matching(
            &mut self.elements,
            &self.document,
            INTERACTIVE_SELECTOR,
            &mut self.scene.tracker.regions,
        )
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running `requestAnimationFrame` loop.
pub struct AnimationLoop {
    tick: TickSlot,
    schedule: Rc<Cell<FrameSchedule>>,
}

fn request_frame(slot: &TickSlot) -> Option<i32> {
    let window = web::window()?;
    let slot = slot.borrow();
    let tick = slot.as_ref()?;
    match window.request_animation_frame(tick.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}

fn record(schedule: &Cell<FrameSchedule>, handle: Option<i32>) {
    let mut s = schedule.get();
    s.requested(handle);
    schedule.set(s);
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> AnimationLoop {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let schedule = Rc::new(Cell::new(FrameSchedule::Idle));
    let tick_clone = tick.clone();
    let schedule_clone = schedule.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        // the next frame is requested only once this one has drawn
        record(&schedule_clone, request_frame(&tick_clone));
    }) as Box<dyn FnMut()>));
    record(&schedule, request_frame(&tick));
    AnimationLoop { tick, schedule }
}

impl AnimationLoop {
    pub fn is_running(&self) -> bool {
        self.tick.borrow().is_some() && self.schedule.get().is_running()
    }

    /// Cancels the pending frame and drops the tick closure, which also
    /// breaks the closure's reference cycle back to its own slot.
    pub fn stop(&mut self) {
        let mut s = self.schedule.get();
        let pending = s.stop();
        self.schedule.set(s);
        if let Some(id) = pending {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
