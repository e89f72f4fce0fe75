use crate::constants::*;
use crate::core::{
    BackgroundMode, HostCapabilities, PointerResponse, Rect, SceneConfig, ThemeColors,
};
use glam::Vec2;
use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
pub fn set_styles(el: &web::HtmlElement, styles: &[(&str, &str)]) {
    let style = el.style();
    for (name, value) in styles {
        _ = style.set_property(name, value);
    }
}

/// Pins the canvas behind the page and makes it ignore pointer input.
pub fn style_background_canvas(canvas: &web::HtmlCanvasElement) {
    set_styles(
        canvas,
        &[
            ("position", "fixed"),
            ("top", "0"),
            ("left", "0"),
            ("width", "100%"),
            ("height", "100%"),
            ("z-index", "-1"),
            ("pointer-events", "none"),
        ],
    );
}

pub fn viewport_size(window: &web::Window) -> Vec2 {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Vec2::new(w as f32, h as f32)
}

/// Sizes the backing store to the viewport times the device pixel ratio.
/// Returns the CSS-pixel size the simulation runs in, and the ratio.
pub fn sync_canvas_backing_size(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
) -> (Vec2, f64) {
    let css = viewport_size(window);
    let dpr = window.device_pixel_ratio().max(1.0);
    canvas.set_width(((css.x as f64 * dpr) as u32).max(1));
    canvas.set_height(((css.y as f64 * dpr) as u32).max(1));
    (css, dpr)
}

pub fn element_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
}

fn media_matches(window: &web::Window, query: &str) -> bool {
    matches!(window.match_media(query), Ok(Some(mq)) if mq.matches())
}

pub fn host_capabilities(window: &web::Window) -> HostCapabilities {
    HostCapabilities {
        touch: js_sys::Reflect::has(window, &JsValue::from_str("ontouchstart")).unwrap_or(false),
        coarse_pointer: media_matches(window, QUERY_COARSE_POINTER),
        reduced_motion: media_matches(window, QUERY_REDUCED_MOTION),
        viewport_width: viewport_size(window).x as f64,
    }
}

/// Reads the accent and background tokens; any failure means fallbacks.
pub fn read_theme_colors(window: &web::Window, document: &web::Document) -> ThemeColors {
    let decl = document
        .document_element()
        .and_then(|root| window.get_computed_style(&root).ok().flatten());
    let Some(decl) = decl else {
        return ThemeColors::default();
    };
    let token = |name: &str| decl.get_property_value(name).ok();
    let (p, s, b) = (token(TOKEN_PRIMARY), token(TOKEN_SECONDARY), token(TOKEN_BACKGROUND));
    ThemeColors::from_tokens(p.as_deref(), s.as_deref(), b.as_deref())
}

/// Scene configuration from `data-*` attributes on the canvas.
pub fn scene_config_from(canvas: &web::HtmlCanvasElement) -> SceneConfig {
    let mut config = SceneConfig {
        seed: rand::random(),
        ..SceneConfig::default()
    };
    if let Some(raw) = canvas.get_attribute(ATTR_BACKGROUND) {
        match raw.parse::<BackgroundMode>() {
            Ok(mode) => config.background = mode,
            Err(e) => log::warn!("[fx] {}; keeping {:?}", e, config.background),
        }
    }
    if let Some(raw) = canvas.get_attribute(ATTR_MAX_PARTICLES) {
        match raw.trim().parse::<usize>() {
            Ok(n) => config.field.max_particles = n,
            Err(e) => log::warn!("[fx] {}=\"{}\": {}", ATTR_MAX_PARTICLES, raw, e),
        }
    }
    if let Some(raw) = canvas.get_attribute(ATTR_POINTER) {
        match raw.parse::<PointerResponse>() {
            Ok(r) => config.field.pointer_response = r,
            Err(e) => log::warn!("[fx] {}", e),
        }
    }
    config
}
