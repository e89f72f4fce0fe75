use super::Listener;
use crate::core::{InteractiveRegions, Rect, RegionSource, TrackedRegions};
use crate::dom;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_move(window: &web::Window, ctx: Rc<RefCell<FrameContext>>) -> anyhow::Result<Listener> {
    Listener::new(window, "mousemove", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            ctx.borrow_mut()
                .scene
                .tracker
                .observe(ev.client_x() as f32, ev.client_y() as f32);
        }
    })
}

pub fn wire_presence(
    document: &web::Document,
    event: &'static str,
    ctx: Rc<RefCell<FrameContext>>,
) -> anyhow::Result<Listener> {
    let entering = event == "mouseenter";
    Listener::new(document, event, move |_| {
        let mut ctx = ctx.borrow_mut();
        let tracker = &mut ctx.scene.tracker;
        if entering {
            tracker.observe_enter();
        } else {
            tracker.observe_leave();
        }
    })
}

impl RegionSource for web::Element {
    fn rect(&self) -> Rect {
        dom::element_rect(self)
    }

    fn is_attached(&self) -> bool {
        self.is_connected()
    }

    fn same_as(&self, other: &Self) -> bool {
        let other: &web::Node = other;
        self.is_same_node(Some(other))
    }
}

/// DOM elements registered as interactive, with the region id each got.
pub type InteractiveElements = TrackedRegions<web::Element>;

/// Registers every element matching `selector` that is not tracked yet.
pub fn register_matching(
    elements: &mut InteractiveElements,
    document: &web::Document,
    selector: &str,
    regions: &mut InteractiveRegions,
) -> usize {
    let Ok(nodes) = document.query_selector_all(selector) else {
        log::warn!("[cursor] bad selector {:?}", selector);
        return 0;
    };
    let candidates = (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok());
    let added = elements.register_new(candidates, regions);
    log::debug!(
        "[cursor] {} new interactive elements ({} tracked)",
        added,
        elements.len()
    );
    added
}
