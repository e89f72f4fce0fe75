use super::color::{Rgba, ThemeColors};
use super::constants::*;
use super::error::FxError;
use super::surface::{sanitize_extent, ColorStop, Paint, Stops, Surface};
use glam::Vec2;
use rand::prelude::*;
use std::str::FromStr;

/// Which way the pointer pushes particles inside the interaction radius.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerResponse {
    #[default]
    Repel,
    Attract,
}

impl FromStr for PointerResponse {
    type Err = FxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "repel" => Ok(Self::Repel),
            "attract" => Ok(Self::Attract),
            other => Err(FxError::UnknownPointerResponse(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub max_particles: usize,
    pub density_area: f32,
    pub interaction_radius: f32,
    pub interaction_strength: f32,
    pub connection_radius: f32,
    pub connection_max_opacity: f32,
    pub pointer_response: PointerResponse,
    pub floating_orbs: bool,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            max_particles: MAX_PARTICLES,
            density_area: PARTICLE_DENSITY_AREA,
            interaction_radius: INTERACTION_RADIUS,
            interaction_strength: INTERACTION_STRENGTH,
            connection_radius: CONNECTION_RADIUS,
            connection_max_opacity: CONNECTION_MAX_OPACITY,
            pointer_response: PointerResponse::Repel,
            floating_orbs: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Secondary,
}

impl Accent {
    #[inline]
    pub fn resolve(self, colors: &ThemeColors) -> Rgba {
        match self {
            Accent::Primary => colors.primary,
            Accent::Secondary => colors.secondary,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub opacity: f32,
    pub accent: Accent,
}

impl Particle {
    pub fn random<R: Rng>(rng: &mut R, width: f32, height: f32) -> Self {
        let position = Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height);
        let velocity = Vec2::new(
            (rng.gen::<f32>() - 0.5) * PARTICLE_SPEED_SPAN,
            (rng.gen::<f32>() - 0.5) * PARTICLE_SPEED_SPAN,
        );
        Self {
            position,
            velocity,
            radius: PARTICLE_RADIUS_MIN + rng.gen::<f32>() * PARTICLE_RADIUS_SPAN,
            opacity: PARTICLE_OPACITY_MIN + rng.gen::<f32>() * PARTICLE_OPACITY_SPAN,
            accent: if rng.gen_bool(0.5) {
                Accent::Primary
            } else {
                Accent::Secondary
            },
        }
    }
}

/// `min(max, floor(w * h / density))`; degenerate dimensions give zero.
pub fn particle_count(width: f32, height: f32, params: &FieldParams) -> usize {
    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        return 0;
    }
    if params.density_area <= 0.0 {
        return params.max_particles;
    }
    let raw = (width as f64 * height as f64 / params.density_area as f64).floor();
    (raw as usize).min(params.max_particles)
}

/// Line opacity for a pair `distance` apart, `None` at or beyond the radius.
#[inline]
pub fn connection_opacity(distance: f32, radius: f32, max_opacity: f32) -> Option<f32> {
    (distance < radius).then(|| max_opacity * (1.0 - distance / radius))
}

// Mirror the overshoot back inside and force the velocity sign.
#[inline]
fn reflect_axis(pos: &mut f32, vel: &mut f32, max: f32) {
    if *pos > max {
        *vel = -vel.abs();
        *pos = 2.0 * max - *pos;
    } else if *pos < 0.0 {
        *vel = vel.abs();
        *pos = -*pos;
    }
    // only reachable when one overshoot is wider than the surface
    if !(0.0..=max).contains(pos) {
        *pos = pos.clamp(0.0, max.max(0.0));
    }
}

/// One tick of a single particle: Euler step, pointer nudge, reflection.
pub fn step_particle(
    mut p: Particle,
    pointer: Option<Vec2>,
    bounds: Vec2,
    params: &FieldParams,
) -> Particle {
    p.position += p.velocity;

    if let Some(ptr) = pointer {
        let delta = ptr - p.position;
        let distance = delta.length();
        let radius = params.interaction_radius;
        if distance < radius {
            let force = (radius - distance) / radius;
            let nudge = delta * force * params.interaction_strength;
            match params.pointer_response {
                PointerResponse::Repel => p.position -= nudge,
                PointerResponse::Attract => p.position += nudge,
            }
        }
    }

    reflect_axis(&mut p.position.x, &mut p.velocity.x, bounds.x);
    reflect_axis(&mut p.position.y, &mut p.velocity.y, bounds.y);
    p
}

pub struct ParticleField {
    pub params: FieldParams,
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(params: FieldParams, seed: u64) -> Self {
        Self {
            params,
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Replaces the whole particle set for a surface of the given size.
    pub fn initialize(&mut self, width: f32, height: f32) {
        self.width = sanitize_extent(width);
        self.height = sanitize_extent(height);
        let count = particle_count(self.width, self.height, &self.params);
        let (w, h) = (self.width, self.height);
        let rng = &mut self.rng;
        self.particles = (0..count).map(|_| Particle::random(&mut *rng, w, h)).collect();
        log::debug!("[field] initialized {} particles for {}x{}", count, w, h);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// In-place access for callers that place particles themselves; the
    /// count only changes through `initialize`.
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn step(&mut self, pointer: Option<Vec2>) {
        let bounds = self.size();
        for p in &mut self.particles {
            *p = step_particle(*p, pointer, bounds, &self.params);
        }
    }

    /// Draws background, orbs, particles and connections, back to front.
    pub fn render(&self, surface: &mut dyn Surface, colors: &ThemeColors, time_sec: f32) {
        let size = self.size();
        surface.clear(size.x, size.y);
        draw_background(surface, size, colors);
        if self.params.floating_orbs {
            draw_floating_orbs(surface, size, colors, time_sec);
        }
        for p in &self.particles {
            draw_particle(surface, p, colors);
        }
        self.draw_connections(surface, colors);
    }

    fn draw_connections(&self, surface: &mut dyn Surface, colors: &ThemeColors) {
        let radius = self.params.connection_radius;
        let max_opacity = self.params.connection_max_opacity;
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let d = a.position.distance(b.position);
                if let Some(opacity) = connection_opacity(d, radius, max_opacity) {
                    let paint = Paint::linear2(
                        a.position,
                        b.position,
                        colors.primary.with_alpha(opacity),
                        colors.secondary.with_alpha(opacity),
                    );
                    surface.stroke_line(a.position, b.position, CONNECTION_LINE_WIDTH, &paint);
                }
            }
        }
    }
}

/// Opaque diagonal wash plus two faint accent glows.
pub fn draw_background(surface: &mut dyn Surface, size: Vec2, colors: &ThemeColors) {
    let stops: Stops = WASH_ALPHA_STOPS
        .iter()
        .enumerate()
        .map(|(i, a)| ColorStop {
            offset: i as f32 / (WASH_ALPHA_STOPS.len() - 1) as f32,
            color: colors.background.with_alpha(*a),
        })
        .collect();
    let wash = Paint::Linear {
        from: Vec2::ZERO,
        to: size,
        stops,
    };
    surface.fill_rect(Vec2::ZERO, size, &wash);

    let glow_a = Paint::radial_fade(
        size * Vec2::new(0.2, 0.3),
        size.x * 0.5,
        colors.primary.with_alpha(GLOW_PRIMARY_ALPHA),
    );
    surface.fill_rect(Vec2::ZERO, size, &glow_a);

    let glow_b = Paint::radial_fade(
        size * Vec2::new(0.8, 0.7),
        size.x * 0.4,
        colors.secondary.with_alpha(GLOW_SECONDARY_ALPHA),
    );
    surface.fill_rect(Vec2::ZERO, size, &glow_b);
}

fn draw_floating_orbs(surface: &mut dyn Surface, size: Vec2, colors: &ThemeColors, t: f32) {
    let anchor = size * Vec2::new(0.3, 0.6);
    for i in 0..ORB_COUNT {
        let k = i as f32;
        let center = anchor
            + Vec2::new(
                (t * 0.5 + k).sin() * ORB_SWAY_X,
                (t * 0.3 + k).cos() * ORB_SWAY_Y,
            );
        let radius = ORB_BASE_RADIUS + (t * 0.8 + k).sin() * ORB_RADIUS_SWAY;
        let paint = Paint::radial_fade(center, radius, colors.primary.with_alpha(ORB_ALPHA));
        surface.fill_circle(center, radius, &paint);
    }
}

fn draw_particle(surface: &mut dyn Surface, p: &Particle, colors: &ThemeColors) {
    let tint = p.accent.resolve(colors);
    let glow_radius = p.radius * PARTICLE_GLOW_SCALE;
    let glow = Paint::radial_fade(p.position, glow_radius, tint.with_alpha(p.opacity));
    surface.fill_circle(p.position, glow_radius, &glow);
    surface.fill_circle(p.position, p.radius, &Paint::Solid(tint));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflect_mirrors_overshoot() {
        let (mut x, mut v) = (101.0_f32, 0.2_f32);
        reflect_axis(&mut x, &mut v, 100.0);
        assert_eq!(x, 99.0);
        assert_eq!(v, -0.2);

        let (mut x, mut v) = (-0.5_f32, -0.1_f32);
        reflect_axis(&mut x, &mut v, 100.0);
        assert_eq!(x, 0.5);
        assert_eq!(v, 0.1);
    }

    #[test]
    fn reflect_clamps_on_a_sliver_surface() {
        let (mut x, mut v) = (3.0_f32, 0.2_f32);
        reflect_axis(&mut x, &mut v, 1.0);
        assert!((0.0..=1.0).contains(&x));
    }
}
