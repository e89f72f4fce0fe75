use super::color::ThemeColors;
use super::error::FxError;
use super::particles::{FieldParams, ParticleField};
use super::pointer::{CursorParams, PointerTracker};
use super::starfield::{Starfield, StarfieldParams};
use super::surface::{sanitize_extent, Surface};
use glam::Vec2;
use std::str::FromStr;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackgroundMode {
    #[default]
    Particles,
    Starfield,
}

impl FromStr for BackgroundMode {
    type Err = FxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "particles" => Ok(Self::Particles),
            "starfield" | "stars" => Ok(Self::Starfield),
            other => Err(FxError::UnknownBackground(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneConfig {
    pub background: BackgroundMode,
    pub field: FieldParams,
    pub cursor: CursorParams,
    pub starfield: StarfieldParams,
    pub seed: u64,
}

/// Owns everything one animated canvas needs; the web layer only feeds it
/// events and a surface.
pub struct Scene {
    background: BackgroundMode,
    pub tracker: PointerTracker,
    pub field: ParticleField,
    pub starfield: Starfield,
    width: f32,
    height: f32,
    elapsed: Duration,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        let SceneConfig {
            background,
            field,
            cursor,
            starfield,
            seed,
        } = config;
        Self {
            background,
            tracker: PointerTracker::new(&cursor),
            field: ParticleField::new(field, seed),
            // distinct stream so switching modes does not replay the field's draws
            starfield: Starfield::new(starfield, seed ^ 0x9E37_79B9_7F4A_7C15),
            width: 0.0,
            height: 0.0,
            elapsed: Duration::ZERO,
        }
    }

    pub fn background(&self) -> BackgroundMode {
        self.background
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// New surface size; the active background is rebuilt from scratch.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = sanitize_extent(width);
        self.height = sanitize_extent(height);
        self.reinitialize();
    }

    pub fn set_background(&mut self, mode: BackgroundMode) {
        if mode != self.background {
            log::info!("[scene] background {:?} -> {:?}", self.background, mode);
            self.background = mode;
            self.reinitialize();
        }
    }

    fn reinitialize(&mut self) {
        match self.background {
            BackgroundMode::Particles => self.field.initialize(self.width, self.height),
            BackgroundMode::Starfield => self.starfield.initialize(self.width, self.height),
        }
    }

    /// Simulation half of a tick; touches no surface.
    pub fn update(&mut self, dt: Duration) {
        self.elapsed += dt;
        self.tracker.tick();
        let pointer = self.tracker.field_pointer();
        match self.background {
            BackgroundMode::Particles => self.field.step(pointer),
            BackgroundMode::Starfield => self.starfield.step(pointer, dt.as_secs_f32()),
        }
    }

    pub fn render(&self, surface: &mut dyn Surface, colors: &ThemeColors) {
        let t = self.elapsed.as_secs_f32();
        match self.background {
            BackgroundMode::Particles => self.field.render(surface, colors, t),
            BackgroundMode::Starfield => self.starfield.render(surface, colors, t),
        }
    }

    pub fn tick(&mut self, dt: Duration, surface: &mut dyn Surface, colors: &ThemeColors) {
        self.update(dt);
        self.render(surface, colors);
    }
}
