use super::constants::{SPRING_DAMPING, SPRING_MAX_DT_SEC, SPRING_STIFFNESS};
use glam::Vec2;

/// Damped unit-mass spring chasing a 2D target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring2 {
    pub position: Vec2,
    pub velocity: Vec2,
    pub stiffness: f32,
    pub damping: f32,
    initialized: bool,
}

impl Default for Spring2 {
    fn default() -> Self {
        Self::new(SPRING_STIFFNESS, SPRING_DAMPING)
    }
}

impl Spring2 {
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            stiffness,
            damping,
            initialized: false,
        }
    }

    /// Places the spring at rest on `target`.
    pub fn snap(&mut self, target: Vec2) {
        self.position = target;
        self.velocity = Vec2::ZERO;
        self.initialized = true;
    }

    /// Semi-implicit Euler; long frames are split so a stalled tab cannot
    /// blow the integration up.
    pub fn step(&mut self, target: Vec2, dt_sec: f32) {
        if !self.initialized {
            self.snap(target);
            return;
        }
        if !(dt_sec.is_finite() && dt_sec > 0.0) {
            return;
        }
        let mut remaining = dt_sec;
        while remaining > 0.0 {
            let h = remaining.min(SPRING_MAX_DT_SEC);
            let accel = (target - self.position) * self.stiffness - self.velocity * self.damping;
            self.velocity += accel * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
    }
}
