//! Drawing seam between the simulation and a concrete 2D backend.
//!
//! The browser implements [`Surface`] over `CanvasRenderingContext2d`;
//! host tests use [`RecordingSurface`] to inspect what a frame drew.

use super::color::Rgba;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

impl ColorStop {
    pub const fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

pub type Stops = SmallVec<[ColorStop; 3]>;

/// Surface extent used for layout; non-finite or non-positive sizes count
/// as zero.
#[inline]
pub fn sanitize_extent(v: f32) -> f32 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Linear { from: Vec2, to: Vec2, stops: Stops },
    Radial {
        center: Vec2,
        radius: f32,
        stops: Stops,
    },
}

impl Paint {
    /// Radial fade from `inner` at the centre to fully transparent at `radius`.
    pub fn radial_fade(center: Vec2, radius: f32, inner: Rgba) -> Self {
        let mut stops = Stops::new();
        stops.push(ColorStop::new(0.0, inner));
        stops.push(ColorStop::new(1.0, inner.with_alpha(0.0)));
        Paint::Radial {
            center,
            radius,
            stops,
        }
    }

    pub fn linear2(from: Vec2, to: Vec2, a: Rgba, b: Rgba) -> Self {
        let mut stops = Stops::new();
        stops.push(ColorStop::new(0.0, a));
        stops.push(ColorStop::new(1.0, b));
        Paint::Linear { from, to, stops }
    }

    /// Highest stop alpha; the effective opacity of the paint.
    pub fn peak_alpha(&self) -> f32 {
        match self {
            Paint::Solid(c) => c.a,
            Paint::Linear { stops, .. } | Paint::Radial { stops, .. } => {
                stops.iter().map(|s| s.color.a).fold(0.0, f32::max)
            }
        }
    }
}

pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, paint: &Paint);
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, paint: &Paint);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    Rect {
        origin: Vec2,
        size: Vec2,
        paint: Paint,
    },
    Circle {
        center: Vec2,
        radius: f32,
        paint: Paint,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        paint: Paint,
    },
}

/// Surface that keeps every command instead of drawing it.
#[derive(Default, Debug)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn rects(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, paint: &Paint) {
        self.commands.push(DrawCommand::Rect {
            origin,
            size,
            paint: paint.clone(),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            paint: paint.clone(),
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, paint: &Paint) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            paint: paint.clone(),
        });
    }
}
