//! Animated portfolio background and cursor follower.
//!
//! `core` is plain Rust and builds everywhere; the DOM glue below it is
//! compiled for `wasm32` only.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
pub use web_entry::PortfolioFx;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::constants::{DEFAULT_CANVAS_ID, INTERACTIVE_SELECTOR};
    use crate::core::{BackgroundMode, HostCapabilities, Scene};
    use crate::dom;
    use crate::events::{self, InteractiveElements, Listener};
    use crate::frame::{self, AnimationLoop, FrameContext};
    use crate::overlay::CursorOverlay;
    use crate::render::CanvasSurface;
    use instant::Instant;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys as web;

    #[wasm_bindgen(start)]
    pub fn init_logging() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("portfolio-fx loaded");
    }

    struct Mounted {
        frame_loop: AnimationLoop,
        listeners: Vec<Listener>,
        ctx: Rc<RefCell<FrameContext>>,
    }

    impl Drop for Mounted {
        fn drop(&mut self) {
            self.frame_loop.stop();
            self.listeners.clear();
            // removes the glyphs and restores the system cursor
            self.ctx.borrow_mut().overlay.take();
            log::info!("[fx] stopped");
        }
    }

    fn mount(canvas_id: &str) -> anyhow::Result<Option<Mounted>> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let Some(canvas) = document
            .get_element_by_id(canvas_id)
            .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
        else {
            log::warn!("[fx] no <canvas id=\"{}\">; nothing to draw", canvas_id);
            return Ok(None);
        };

        let caps: HostCapabilities = dom::host_capabilities(&window);
        let mut scene = Scene::new(dom::scene_config_from(&canvas));
        dom::style_background_canvas(&canvas);

        let mut surface = match CanvasSurface::from_canvas(&canvas) {
            Ok(s) => Some(s),
            Err(e) => {
                log::warn!("[fx] canvas unusable, background disabled: {:?}", e);
                None
            }
        };
        let (css, dpr) = dom::sync_canvas_backing_size(&window, &canvas);
        if let Some(s) = &mut surface {
            s.set_pixel_ratio(dpr);
        }
        scene.resize(css.x, css.y);

        let overlay = if caps.cursor_enabled() {
            match CursorOverlay::mount(&document) {
                Ok(o) => Some(o),
                Err(e) => {
                    log::warn!("[cursor] overlay failed: {:?}", e);
                    None
                }
            }
        } else {
            log::info!("[cursor] disabled for this host: {:?}", caps);
            None
        };

        let mut elements = InteractiveElements::default();
        if overlay.is_some() {
            let added = events::register_matching(
                &mut elements,
                &document,
                INTERACTIVE_SELECTOR,
                &mut scene.tracker.regions,
            );
            log::info!("[cursor] {} interactive elements registered", added);
        }

        let ctx = Rc::new(RefCell::new(FrameContext {
            scene,
            surface,
            overlay,
            elements,
            window: window.clone(),
            document: document.clone(),
            canvas,
            last_instant: Instant::now(),
        }));
        let listeners = events::wire(&window, &document, &caps, &ctx)?;
        let frame_loop = frame::start_loop(ctx.clone());
        log::info!("[fx] started at {}x{}", css.x, css.y);
        Ok(Some(Mounted {
            frame_loop,
            listeners,
            ctx,
        }))
    }

    /// JS handle owning one mounted background + cursor.
    #[wasm_bindgen]
    pub struct PortfolioFx {
        canvas_id: String,
        mounted: Option<Mounted>,
    }

    #[wasm_bindgen]
    impl PortfolioFx {
        #[wasm_bindgen(constructor)]
        pub fn new(canvas_id: Option<String>) -> PortfolioFx {
            PortfolioFx {
                canvas_id: canvas_id.unwrap_or_else(|| DEFAULT_CANVAS_ID.to_string()),
                mounted: None,
            }
        }

        /// Mounts and starts the loop. Never throws; returns whether anything
        /// was mounted.
        pub fn start(&mut self) -> bool {
            if self.mounted.is_some() {
                return true;
            }
            match mount(&self.canvas_id) {
                Ok(m) => self.mounted = m,
                Err(e) => log::error!("[fx] mount error: {:?}", e),
            }
            self.mounted.is_some()
        }

        pub fn stop(&mut self) {
            self.mounted.take();
        }

        pub fn is_running(&self) -> bool {
            self.mounted
                .as_ref()
                .map(|m| m.frame_loop.is_running())
                .unwrap_or(false)
        }

        pub fn register_interactive(&mut self, el: web::Element) -> Option<u32> {
            let m = self.mounted.as_ref()?;
            let mut ctx = m.ctx.borrow_mut();
            let FrameContext {
                scene, elements, ..
            } = &mut *ctx;
            Some(elements.register(el, &mut scene.tracker.regions))
        }

        pub fn unregister_interactive(&mut self, id: u32) -> bool {
            let Some(m) = self.mounted.as_ref() else {
                return false;
            };
            let mut ctx = m.ctx.borrow_mut();
            let FrameContext {
                scene, elements, ..
            } = &mut *ctx;
            elements.unregister(id, &mut scene.tracker.regions)
        }

        /// Re-measures tracked elements and registers matching ones added
        /// since the last scan; returns how many were new.
        pub fn refresh_interactive(&mut self) -> u32 {
            match &self.mounted {
                Some(m) => m.ctx.borrow_mut().rescan_interactive() as u32,
                None => 0,
            }
        }

        pub fn set_background(&mut self, mode: &str) -> Result<(), JsValue> {
            let mode: BackgroundMode = mode
                .parse()
                .map_err(|e: crate::core::FxError| JsValue::from_str(&e.to_string()))?;
            if let Some(m) = &self.mounted {
                m.ctx.borrow_mut().scene.set_background(mode);
            }
            Ok(())
        }
    }
}
