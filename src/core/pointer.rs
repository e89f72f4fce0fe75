//! Pointer tracking for the cursor follower.
//!
//! The tracker keeps the last raw pointer position plus two eased
//! followers (the ring and the dot), a visibility flag, and a hover flag
//! derived from explicitly registered interactive regions.

use super::constants::*;
use fnv::FnvHashMap;
use glam::Vec2;

/// A point that closes a fixed fraction of the remaining distance per tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EasedPoint {
    pub position: Vec2,
    pub factor: f32,
}

impl EasedPoint {
    pub fn new(factor: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            factor: factor.clamp(f32::EPSILON, 1.0),
        }
    }

    #[inline]
    pub fn advance(&mut self, target: Vec2) {
        self.position += (target - self.position) * self.factor;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Hover {
    #[default]
    Default,
    Hovering,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }
}

pub type RegionId = u32;

/// Interactive regions keyed by the id handed out at registration.
#[derive(Default, Debug)]
pub struct InteractiveRegions {
    regions: FnvHashMap<RegionId, Rect>,
    next_id: RegionId,
}

impl InteractiveRegions {
    pub fn register(&mut self, rect: Rect) -> RegionId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.regions.insert(id, rect);
        id
    }

    /// Moves an existing region; returns false for an unknown id.
    pub fn update(&mut self, id: RegionId, rect: Rect) -> bool {
        match self.regions.get_mut(&id) {
            Some(r) => {
                *r = rect;
                true
            }
            None => false,
        }
    }

    pub fn unregister(&mut self, id: RegionId) -> bool {
        self.regions.remove(&id).is_some()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn hit(&self, p: Vec2) -> bool {
        self.regions.values().any(|r| r.contains(p))
    }
}

/// A page element that can be hit-tested as a rectangle.
pub trait RegionSource {
    fn rect(&self) -> Rect;
    fn is_attached(&self) -> bool;
    fn same_as(&self, other: &Self) -> bool;
}

/// Sources registered as interactive, each with the region id it got.
#[derive(Debug)]
pub struct TrackedRegions<E> {
    entries: Vec<(RegionId, E)>,
}

impl<E> Default for TrackedRegions<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<E: RegionSource> TrackedRegions<E> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn id_of(&self, source: &E) -> Option<RegionId> {
        self.entries
            .iter()
            .find(|(_, e)| e.same_as(source))
            .map(|(id, _)| *id)
    }

    /// Registers `source`, or returns the id it already has.
    pub fn register(&mut self, source: E, regions: &mut InteractiveRegions) -> RegionId {
        if let Some(id) = self.id_of(&source) {
            return id;
        }
        let id = regions.register(source.rect());
        self.entries.push((id, source));
        id
    }

    pub fn unregister(&mut self, id: RegionId, regions: &mut InteractiveRegions) -> bool {
        self.entries.retain(|(eid, _)| *eid != id);
        regions.unregister(id)
    }

    /// Registers every candidate not tracked yet; returns how many were new.
    pub fn register_new(
        &mut self,
        candidates: impl IntoIterator<Item = E>,
        regions: &mut InteractiveRegions,
    ) -> usize {
        let mut added = 0;
        for source in candidates {
            if source.is_attached() && self.id_of(&source).is_none() {
                self.register(source, regions);
                added += 1;
            }
        }
        added
    }

    /// Re-measures every source; detached ones are dropped.
    pub fn refresh(&mut self, regions: &mut InteractiveRegions) {
        self.entries.retain(|(id, source)| {
            if source.is_attached() {
                regions.update(*id, source.rect());
                true
            } else {
                regions.unregister(*id);
                false
            }
        });
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CursorParams {
    pub ring_ease: f32,
    pub dot_ease: f32,
}

impl Default for CursorParams {
    fn default() -> Self {
        Self {
            ring_ease: RING_EASE,
            dot_ease: DOT_EASE,
        }
    }
}

pub struct PointerTracker {
    raw: Option<Vec2>,
    pub ring: EasedPoint,
    pub dot: EasedPoint,
    visibility: Visibility,
    hover: Hover,
    pub regions: InteractiveRegions,
}

impl PointerTracker {
    pub fn new(params: &CursorParams) -> Self {
        Self {
            raw: None,
            ring: EasedPoint::new(params.ring_ease),
            dot: EasedPoint::new(params.dot_ease),
            visibility: Visibility::Hidden,
            hover: Hover::Default,
            regions: InteractiveRegions::default(),
        }
    }

    pub fn observe(&mut self, x: f32, y: f32) {
        let p = Vec2::new(x, y);
        self.raw = Some(p);
        self.visibility = Visibility::Visible;
        self.hover = if self.regions.hit(p) {
            Hover::Hovering
        } else {
            Hover::Default
        };
    }

    pub fn observe_leave(&mut self) {
        self.visibility = Visibility::Hidden;
    }

    pub fn observe_enter(&mut self) {
        self.visibility = Visibility::Visible;
    }

    /// Eases ring and dot toward the last raw position, hidden or not.
    pub fn tick(&mut self) {
        if let Some(target) = self.raw {
            self.ring.advance(target);
            self.dot.advance(target);
        }
    }

    pub fn raw(&self) -> Option<Vec2> {
        self.raw
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn hover(&self) -> Hover {
        self.hover
    }

    /// Pointer the particle field reacts to; none while the pointer is away.
    pub fn field_pointer(&self) -> Option<Vec2> {
        match self.visibility {
            Visibility::Visible => self.raw,
            Visibility::Hidden => None,
        }
    }

    pub fn glyphs(&self) -> GlyphLayout {
        GlyphLayout::for_state(self.ring.position, self.dot.position, self.visibility, self.hover)
    }
}

/// Where and how the overlay glyphs should be drawn this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphLayout {
    pub ring_origin: Vec2,
    pub ring_scale: f32,
    pub dot_origin: Vec2,
    pub dot_scale: f32,
    pub aura_origin: Vec2,
    pub opacity: f32,
    pub aura_opacity: f32,
    pub accent_border: bool,
}

impl GlyphLayout {
    pub fn for_state(ring: Vec2, dot: Vec2, visibility: Visibility, hover: Hover) -> Self {
        let opacity = match visibility {
            Visibility::Visible => 1.0,
            Visibility::Hidden => 0.0,
        };
        let hovering = hover == Hover::Hovering;
        Self {
            ring_origin: ring - Vec2::splat(RING_SIZE_PX * 0.5),
            ring_scale: if hovering { RING_HOVER_SCALE } else { 1.0 },
            dot_origin: dot - Vec2::splat(DOT_SIZE_PX * 0.5),
            dot_scale: if hovering { DOT_HOVER_SCALE } else { 1.0 },
            aura_origin: ring - Vec2::splat(AURA_SIZE_PX * 0.5),
            opacity,
            aura_opacity: if hovering { opacity } else { 0.0 },
            accent_border: hovering,
        }
    }
}

/// Host signals sampled once when the cursor follower mounts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HostCapabilities {
    pub touch: bool,
    pub coarse_pointer: bool,
    pub reduced_motion: bool,
    pub viewport_width: f64,
}

impl HostCapabilities {
    pub fn cursor_enabled(&self) -> bool {
        !(self.touch
            || self.coarse_pointer
            || self.reduced_motion
            || self.viewport_width < MIN_POINTER_VIEWPORT_PX)
    }

    /// DOM events the web layer subscribes to for these capabilities.
    pub fn listened_events(&self) -> &'static [&'static str] {
        if self.cursor_enabled() {
            &["resize", "scroll", "mousemove", "mouseleave", "mouseenter"]
        } else {
            &["resize"]
        }
    }
}
