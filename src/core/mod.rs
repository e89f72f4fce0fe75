//! Platform-independent simulation and drawing logic.
//!
//! Nothing in here touches the DOM, so the whole module builds and tests on
//! the host.

pub mod color;
pub mod constants;
pub mod error;
pub mod particles;
pub mod pointer;
pub mod scene;
pub mod schedule;
pub mod spring;
pub mod starfield;
pub mod surface;

pub use color::{Rgba, ThemeColors};
pub use constants::*;
pub use error::FxError;
pub use particles::{
    connection_opacity, particle_count, step_particle, Accent, FieldParams, Particle,
    ParticleField, PointerResponse,
};
pub use pointer::{
    CursorParams, EasedPoint, GlyphLayout, HostCapabilities, Hover, InteractiveRegions,
    PointerTracker, Rect, RegionId, RegionSource, TrackedRegions, Visibility,
};
pub use scene::{BackgroundMode, Scene, SceneConfig};
pub use schedule::FrameSchedule;
pub use spring::Spring2;
pub use starfield::{
    parallax_target, pulse, shooting_progress, stroke_progress, Constellation, ShootingStar, Star,
    StarTint, Starfield, StarfieldParams, Twinkle,
};
pub use surface::{
    sanitize_extent, ColorStop, DrawCommand, Paint, RecordingSurface, Stops, Surface,
};
