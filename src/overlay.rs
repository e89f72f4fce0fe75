use crate::constants::{Z_AURA, Z_DOT, Z_RING};
use crate::core::{GlyphLayout, ThemeColors, AURA_SIZE_PX, DOT_SIZE_PX, RING_SIZE_PX};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Ring, dot and hover aura divs that follow the eased pointer.
///
/// Dropping the overlay removes the divs and gives the page its system
/// cursor back.
pub struct CursorOverlay {
    body: web::HtmlElement,
    ring: web::HtmlElement,
    dot: web::HtmlElement,
    aura: web::HtmlElement,
}

fn glyph(
    document: &web::Document,
    size: f32,
    z: i32,
    extra: &[(&str, &str)],
) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("create_element: {:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let px = format!("{}px", size);
    let z = z.to_string();
    crate::dom::set_styles(
        &el,
        &[
            ("position", "fixed"),
            ("top", "0"),
            ("left", "0"),
            ("width", &px),
            ("height", &px),
            ("border-radius", "50%"),
            ("pointer-events", "none"),
            ("opacity", "0"),
            ("z-index", &z),
            ("will-change", "transform"),
        ],
    );
    crate::dom::set_styles(&el, extra);
    Ok(el)
}

impl CursorOverlay {
    pub fn mount(document: &web::Document) -> anyhow::Result<Self> {
        let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
        let ring = glyph(
            document,
            RING_SIZE_PX,
            Z_RING,
            &[
                ("border", "2px solid var(--primary)"),
                ("transition", "opacity 0.3s ease, border-color 0.2s ease"),
                ("mix-blend-mode", "overlay"),
                ("box-shadow", "0 0 10px rgba(129, 140, 248, 0.3)"),
            ],
        )?;
        let dot = glyph(
            document,
            DOT_SIZE_PX,
            Z_DOT,
            &[
                ("background", "var(--primary)"),
                ("transition", "opacity 0.3s ease"),
                ("box-shadow", "0 0 8px rgba(129, 140, 248, 0.6)"),
            ],
        )?;
        let aura = glyph(
            document,
            AURA_SIZE_PX,
            Z_AURA,
            &[
                ("border", "1px solid rgba(244, 114, 182, 0.2)"),
                ("transition", "opacity 0.3s ease"),
                (
                    "background",
                    "radial-gradient(circle, rgba(244, 114, 182, 0.1) 0%, transparent 70%)",
                ),
            ],
        )?;
        for el in [&aura, &ring, &dot] {
            body.append_child(el)
                .map_err(|e| anyhow::anyhow!("append_child: {:?}", e))?;
        }
        _ = body.style().set_property("cursor", "none");
        log::info!("[cursor] overlay mounted");
        Ok(Self {
            body,
            ring,
            dot,
            aura,
        })
    }

    pub fn apply(&self, layout: &GlyphLayout, colors: &ThemeColors) {
        let opacity = layout.opacity.to_string();
        _ = self.ring.style().set_property(
            "transform",
            &format!(
                "translate({:.2}px, {:.2}px) scale({})",
                layout.ring_origin.x, layout.ring_origin.y, layout.ring_scale
            ),
        );
        _ = self.ring.style().set_property("opacity", &opacity);
        let border = if layout.accent_border {
            colors.secondary
        } else {
            colors.primary
        };
        _ = self.ring.style().set_property("border-color", &border.to_css());

        _ = self.dot.style().set_property(
            "transform",
            &format!(
                "translate({:.2}px, {:.2}px) scale({})",
                layout.dot_origin.x, layout.dot_origin.y, layout.dot_scale
            ),
        );
        _ = self.dot.style().set_property("opacity", &opacity);

        _ = self.aura.style().set_property(
            "transform",
            &format!(
                "translate({:.2}px, {:.2}px)",
                layout.aura_origin.x, layout.aura_origin.y
            ),
        );
        _ = self
            .aura
            .style()
            .set_property("opacity", &layout.aura_opacity.to_string());
    }
}

impl Drop for CursorOverlay {
    fn drop(&mut self) {
        self.ring.remove();
        self.dot.remove();
        self.aura.remove();
        _ = self.body.style().set_property("cursor", "auto");
        log::info!("[cursor] overlay removed");
    }
}
