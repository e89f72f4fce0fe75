use crate::core::{Paint, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `Surface` over a 2D canvas context, in CSS pixels.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }

    /// Must be reapplied after every backing-store resize, which resets it.
    pub fn set_pixel_ratio(&mut self, dpr: f64) {
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    }

    fn gradient(&self, paint: &Paint) -> Option<web::CanvasGradient> {
        let (gradient, stops) = match paint {
            Paint::Solid(_) => return None,
            Paint::Linear { from, to, stops } => (
                self.ctx
                    .create_linear_gradient(from.x as f64, from.y as f64, to.x as f64, to.y as f64),
                stops,
            ),
            Paint::Radial {
                center,
                radius,
                stops,
            } => {
                let (x, y) = (center.x as f64, center.y as f64);
                (
                    self.ctx
                        .create_radial_gradient(x, y, 0.0, x, y, *radius as f64)
                        .ok()?,
                    stops,
                )
            }
        };
        for stop in stops {
            gradient
                .add_color_stop(stop.offset.clamp(0.0, 1.0), &stop.color.to_css())
                .ok()?;
        }
        Some(gradient)
    }

    // false if the paint could not be realised (e.g. a non-finite radius)
    fn set_fill(&self, paint: &Paint) -> bool {
        match paint {
            Paint::Solid(c) => {
                self.ctx.set_fill_style_str(&c.to_css());
                true
            }
            _ => match self.gradient(paint) {
                Some(g) => {
                    self.ctx.set_fill_style_canvas_gradient(&g);
                    true
                }
                None => false,
            },
        }
    }

    fn set_stroke(&self, paint: &Paint) -> bool {
        match paint {
            Paint::Solid(c) => {
                self.ctx.set_stroke_style_str(&c.to_css());
                true
            }
            _ => match self.gradient(paint) {
                Some(g) => {
                    self.ctx.set_stroke_style_canvas_gradient(&g);
                    true
                }
                None => false,
            },
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, paint: &Paint) {
        if self.set_fill(paint) {
            self.ctx
                .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        if radius <= 0.0 || !self.set_fill(paint) {
            return;
        }
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, paint: &Paint) {
        if !self.set_stroke(paint) {
            return;
        }
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}
