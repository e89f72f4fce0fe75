// Host-side tests for pointer easing, visibility/hover state and the
// capability gate of the cursor follower.

use glam::Vec2;
use portfolio_fx::core::*;
use std::cell::Cell;
use std::rc::Rc;

fn tracker() -> PointerTracker {
    PointerTracker::new(&CursorParams::default())
}

fn desktop() -> HostCapabilities {
    HostCapabilities {
        touch: false,
        coarse_pointer: false,
        reduced_motion: false,
        viewport_width: 1440.0,
    }
}

#[test]
fn starts_hidden_and_default() {
    let t = tracker();
    assert_eq!(t.visibility(), Visibility::Hidden);
    assert_eq!(t.hover(), Hover::Default);
    assert_eq!(t.raw(), None);
    assert_eq!(t.field_pointer(), None);
}

#[test]
fn tick_before_any_observation_is_a_no_op() {
    let mut t = tracker();
    t.tick();
    assert_eq!(t.ring.position, Vec2::ZERO);
    assert_eq!(t.dot.position, Vec2::ZERO);
}

#[test]
fn one_tick_closes_the_easing_fraction() {
    let mut t = tracker();
    t.observe(100.0, 50.0);
    t.tick();
    assert!(t.ring.position.distance(Vec2::new(15.0, 7.5)) < 1e-5);
    assert!(t.dot.position.distance(Vec2::new(25.0, 12.5)) < 1e-5);

    let prev = t.ring.position;
    t.tick();
    let expected = prev + (Vec2::new(100.0, 50.0) - prev) * RING_EASE;
    assert!(t.ring.position.distance(expected) < 1e-5);
}

#[test]
fn dot_leads_ring() {
    let mut t = tracker();
    t.observe(300.0, 300.0);
    for _ in 0..10 {
        t.tick();
        let target = Vec2::new(300.0, 300.0);
        assert!(t.dot.position.distance(target) < t.ring.position.distance(target));
    }
}

#[test]
fn easing_never_overshoots_and_converges() {
    let mut t = tracker();
    t.observe(640.0, 360.0);
    let mut last = t.ring.position;
    for _ in 0..500 {
        t.tick();
        let p = t.ring.position;
        assert!(p.x >= last.x && p.x <= 640.0);
        assert!(p.y >= last.y && p.y <= 360.0);
        last = p;
    }
    assert!(t.ring.position.distance(Vec2::new(640.0, 360.0)) < 1e-3);
    assert!(t.dot.position.distance(Vec2::new(640.0, 360.0)) < 1e-3);

    // fixed point: further ticks do not move it
    let settled = t.dot.position;
    t.tick();
    assert!(t.dot.position.distance(settled) < 1e-4);
}

#[test]
fn leaving_hides_but_easing_continues_to_last_position() {
    let mut t = tracker();
    t.observe(500.0, 500.0);
    assert_eq!(t.visibility(), Visibility::Visible);
    t.tick();
    t.observe_leave();
    assert_eq!(t.visibility(), Visibility::Hidden);

    let before = t.ring.position;
    t.tick();
    let after = t.ring.position;
    assert!(after.distance(Vec2::new(500.0, 500.0)) < before.distance(Vec2::new(500.0, 500.0)));
    assert!(after.x > before.x, "must keep chasing, not reset to origin");
    assert_eq!(t.raw(), Some(Vec2::new(500.0, 500.0)));
    assert_eq!(t.field_pointer(), None);

    t.observe_enter();
    assert_eq!(t.visibility(), Visibility::Visible);
    assert_eq!(t.field_pointer(), Some(Vec2::new(500.0, 500.0)));
}

#[test]
fn hover_follows_registered_regions() {
    let mut t = tracker();
    let button = t.regions.register(Rect::new(0.0, 0.0, 100.0, 40.0));
    t.observe(10.0, 10.0);
    assert_eq!(t.hover(), Hover::Hovering);
    t.observe(200.0, 200.0);
    assert_eq!(t.hover(), Hover::Default);

    t.regions.update(button, Rect::new(150.0, 150.0, 100.0, 100.0));
    t.observe(200.0, 200.0);
    assert_eq!(t.hover(), Hover::Hovering);

    assert!(t.regions.unregister(button));
    t.observe(200.0, 200.0);
    assert_eq!(t.hover(), Hover::Default);
}

#[test]
fn hover_self_corrects_on_next_move() {
    let mut t = tracker();
    t.observe(50.0, 50.0);
    assert_eq!(t.hover(), Hover::Default);
    // a region appears under a pointer that has not moved yet
    t.regions.register(Rect::new(0.0, 0.0, 100.0, 100.0));
    assert_eq!(t.hover(), Hover::Default);
    t.observe(51.0, 50.0);
    assert_eq!(t.hover(), Hover::Hovering);

    t.regions.clear();
    t.observe(52.0, 50.0);
    assert_eq!(t.hover(), Hover::Default);
}

#[test]
fn glyph_layout_centres_and_scales() {
    let g = GlyphLayout::for_state(
        Vec2::new(100.0, 100.0),
        Vec2::new(110.0, 90.0),
        Visibility::Visible,
        Hover::Default,
    );
    assert_eq!(g.ring_origin, Vec2::new(85.0, 85.0));
    assert_eq!(g.dot_origin, Vec2::new(106.0, 86.0));
    assert_eq!((g.ring_scale, g.dot_scale), (1.0, 1.0));
    assert_eq!(g.opacity, 1.0);
    assert_eq!(g.aura_opacity, 0.0);
    assert!(!g.accent_border);

    let h = GlyphLayout::for_state(Vec2::ZERO, Vec2::ZERO, Visibility::Visible, Hover::Hovering);
    assert_eq!(h.ring_scale, RING_HOVER_SCALE);
    assert_eq!(h.dot_scale, DOT_HOVER_SCALE);
    assert_eq!(h.aura_opacity, 1.0);
    assert!(h.accent_border);

    let hidden =
        GlyphLayout::for_state(Vec2::ZERO, Vec2::ZERO, Visibility::Hidden, Hover::Hovering);
    assert_eq!(hidden.opacity, 0.0);
    assert_eq!(hidden.aura_opacity, 0.0);
}

#[test]
fn desktop_hosts_get_the_cursor() {
    let caps = desktop();
    assert!(caps.cursor_enabled());
    let events = caps.listened_events();
    for e in ["resize", "mousemove", "mouseleave", "mouseenter"] {
        assert!(events.contains(&e), "missing {}", e);
    }
}

#[test]
fn touch_only_hosts_register_no_pointer_listeners() {
    let variants = [
        HostCapabilities {
            touch: true,
            ..desktop()
        },
        HostCapabilities {
            coarse_pointer: true,
            ..desktop()
        },
        HostCapabilities {
            reduced_motion: true,
            ..desktop()
        },
        HostCapabilities {
            viewport_width: 600.0,
            ..desktop()
        },
    ];
    for caps in variants {
        assert!(!caps.cursor_enabled(), "{:?}", caps);
        assert_eq!(caps.listened_events(), &["resize"]);
    }
}

#[test]
fn easing_factor_is_kept_in_range() {
    assert_eq!(EasedPoint::new(2.0).factor, 1.0);
    assert!(EasedPoint::new(0.0).factor > 0.0);
    let mut p = EasedPoint::new(1.0);
    p.advance(Vec2::new(3.0, 4.0));
    assert_eq!(p.position, Vec2::new(3.0, 4.0));
}

// Stand-in for a page element whose layout and attachment can change.
#[derive(Clone)]
struct FakeElement {
    key: u32,
    rect: Rc<Cell<Rect>>,
    attached: Rc<Cell<bool>>,
}

impl FakeElement {
    fn new(key: u32, rect: Rect) -> Self {
        Self {
            key,
            rect: Rc::new(Cell::new(rect)),
            attached: Rc::new(Cell::new(true)),
        }
    }
}

impl RegionSource for FakeElement {
    fn rect(&self) -> Rect {
        self.rect.get()
    }

    fn is_attached(&self) -> bool {
        self.attached.get()
    }

    fn same_as(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

#[test]
fn rescanning_registers_only_new_elements() {
    let mut t = tracker();
    let mut tracked = TrackedRegions::default();
    let nav = FakeElement::new(1, Rect::new(0.0, 0.0, 100.0, 40.0));
    assert_eq!(tracked.register_new([nav.clone()], &mut t.regions), 1);

    // a section rendered after mount brings a second link
    let late = FakeElement::new(2, Rect::new(300.0, 300.0, 80.0, 30.0));
    assert_eq!(tracked.register_new([nav.clone(), late.clone()], &mut t.regions), 1);
    assert_eq!(tracked.len(), 2);
    assert_eq!(t.regions.len(), 2);

    t.observe(310.0, 310.0);
    assert_eq!(t.hover(), Hover::Hovering);

    // a repeat scan changes nothing
    assert_eq!(tracked.register_new([nav, late], &mut t.regions), 0);
    assert_eq!(t.regions.len(), 2);
}

#[test]
fn register_returns_existing_id_for_tracked_element() {
    let mut regions = InteractiveRegions::default();
    let mut tracked = TrackedRegions::default();
    let el = FakeElement::new(7, Rect::new(0.0, 0.0, 10.0, 10.0));
    let id = tracked.register(el.clone(), &mut regions);
    assert_eq!(tracked.register(el.clone(), &mut regions), id);
    assert_eq!(regions.len(), 1);
    assert_eq!(tracked.id_of(&el), Some(id));

    assert!(tracked.unregister(id, &mut regions));
    assert!(tracked.is_empty());
    assert!(regions.is_empty());
}

#[test]
fn refresh_remeasures_and_drops_detached_elements() {
    let mut t = tracker();
    let mut tracked = TrackedRegions::default();
    let moving = FakeElement::new(1, Rect::new(0.0, 0.0, 50.0, 50.0));
    let leaving = FakeElement::new(2, Rect::new(500.0, 500.0, 50.0, 50.0));
    tracked.register_new([moving.clone(), leaving.clone()], &mut t.regions);

    moving.rect.set(Rect::new(200.0, 0.0, 50.0, 50.0));
    leaving.attached.set(false);
    tracked.refresh(&mut t.regions);

    assert_eq!(tracked.len(), 1);
    assert_eq!(t.regions.len(), 1);
    t.observe(10.0, 10.0);
    assert_eq!(t.hover(), Hover::Default);
    t.observe(210.0, 10.0);
    assert_eq!(t.hover(), Hover::Hovering);
    t.observe(510.0, 510.0);
    assert_eq!(t.hover(), Hover::Default);

    // detached candidates are not picked up by a scan either
    assert_eq!(tracked.register_new([leaving], &mut t.regions), 0);
}
