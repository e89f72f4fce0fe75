use crate::core::HostCapabilities;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

mod pointer;

pub use pointer::{register_matching, InteractiveElements};

/// An event listener that unregisters itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Subscribes exactly the events the capabilities call for.
pub fn wire(
    window: &web::Window,
    document: &web::Document,
    caps: &HostCapabilities,
    ctx: &Rc<RefCell<FrameContext>>,
) -> anyhow::Result<Vec<Listener>> {
    let mut listeners = Vec::new();
    for &event in caps.listened_events() {
        let listener = match event {
            "resize" => {
                let ctx = ctx.clone();
                Listener::new(window, event, move |_| ctx.borrow_mut().resize())?
            }
            "scroll" => {
                let ctx = ctx.clone();
                Listener::new(window, event, move |_| ctx.borrow_mut().refresh_regions())?
            }
            "mousemove" => pointer::wire_move(window, ctx.clone())?,
            "mouseleave" | "mouseenter" => pointer::wire_presence(document, event, ctx.clone())?,
            other => {
                log::warn!("[fx] no handler for {} events", other);
                continue;
            }
        };
        listeners.push(listener);
    }
    log::debug!("[fx] {} listeners registered", listeners.len());
    Ok(listeners)
}
