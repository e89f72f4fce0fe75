//! Starfield background: twinkling stars, shooting stars, parallax nebulae,
//! constellation strokes and a faint grid.
//!
//! Star positions are kept in unit space so a resize only rescales them.
//! Everything time-based is a pure function of the elapsed seconds.

use super::color::{Rgba, ThemeColors, STAR_CYAN};
use super::constants::*;
use super::spring::Spring2;
use super::surface::{sanitize_extent, ColorStop, Paint, Stops, Surface};
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::PI;

const SPACE_DEEP: Rgba = Rgba::rgb(0x0a, 0x0f, 0x1a);
const SPACE_HAZE: Rgba = Rgba::rgb(0x1e, 0x29, 0x3b);

#[derive(Clone, Debug, PartialEq)]
pub struct StarfieldParams {
    pub stars: usize,
    pub twinkles: usize,
    pub shooting_stars: usize,
    pub constellations: usize,
    pub grid: bool,
}

impl Default for StarfieldParams {
    fn default() -> Self {
        Self {
            stars: STAR_COUNT,
            twinkles: TWINKLE_COUNT,
            shooting_stars: SHOOTING_STAR_COUNT,
            constellations: CONSTELLATION_COUNT,
            grid: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarTint {
    Pink,
    Cyan,
    Indigo,
}

impl StarTint {
    fn sample<R: Rng>(rng: &mut R) -> Self {
        if rng.gen::<f32>() > 0.7 {
            StarTint::Pink
        } else if rng.gen::<f32>() > 0.5 {
            StarTint::Cyan
        } else {
            StarTint::Indigo
        }
    }

    pub fn resolve(self, colors: &ThemeColors) -> Rgba {
        match self {
            StarTint::Pink => colors.secondary,
            StarTint::Cyan => STAR_CYAN,
            StarTint::Indigo => colors.primary,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub unit: Vec2,
    pub size: f32,
    pub opacity: f32,
    pub speed: f32,
    pub delay: f32,
    pub tint: StarTint,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Twinkle {
    pub unit: Vec2,
    pub size: f32,
    pub delay: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShootingStar {
    pub unit: Vec2,
    pub delay: f32,
    pub duration: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constellation {
    pub from: Vec2,
    pub to: Vec2,
    pub delay: f32,
}

/// `sin²(π·phase)` for a repeating cycle that starts after `delay`.
#[inline]
pub fn pulse(t: f32, period: f32, delay: f32) -> f32 {
    if t < delay || period <= 0.0 {
        return 0.0;
    }
    let phase = ((t - delay) / period).rem_euclid(1.0);
    let s = (PI * phase).sin();
    s * s
}

/// Head position progress in [0, 1) of a shooting star, `None` before it starts.
#[inline]
pub fn shooting_progress(t: f32, delay: f32, duration: f32) -> Option<f32> {
    (t >= delay && duration > 0.0).then(|| ((t - delay) / duration).rem_euclid(1.0))
}

/// Fraction of a constellation stroke drawn at `t`.
#[inline]
pub fn stroke_progress(t: f32, delay: f32) -> f32 {
    if t < delay {
        return 0.0;
    }
    let cycle = CONSTELLATION_DRAW_SEC + CONSTELLATION_REPEAT_DELAY_SEC;
    let local = (t - delay).rem_euclid(cycle);
    (local / CONSTELLATION_DRAW_SEC).min(1.0)
}

/// Maps a pointer in viewport pixels to the `[-range, range]` parallax space.
#[inline]
pub fn parallax_target(pointer: Vec2, size: Vec2) -> Vec2 {
    let safe = size.max(Vec2::ONE);
    (pointer / safe - Vec2::splat(0.5)) * (POINTER_PARALLAX_RANGE * 2.0)
}

pub struct Starfield {
    pub params: StarfieldParams,
    stars: Vec<Star>,
    twinkles: Vec<Twinkle>,
    shooting: Vec<ShootingStar>,
    constellations: Vec<Constellation>,
    parallax: Spring2,
    target: Vec2,
    width: f32,
    height: f32,
    rng: StdRng,
}

impl Starfield {
    pub fn new(params: StarfieldParams, seed: u64) -> Self {
        Self {
            params,
            stars: Vec::new(),
            twinkles: Vec::new(),
            shooting: Vec::new(),
            constellations: Vec::new(),
            parallax: Spring2::default(),
            target: Vec2::ZERO,
            width: 0.0,
            height: 0.0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn initialize(&mut self, width: f32, height: f32) {
        self.width = sanitize_extent(width);
        self.height = sanitize_extent(height);
        let rng = &mut self.rng;

        self.stars = (0..self.params.stars)
            .map(|_| Star {
                unit: Vec2::new(rng.gen(), rng.gen()),
                size: rng.gen::<f32>() * 2.0 + 0.5,
                opacity: rng.gen::<f32>() * 0.7 + 0.3,
                speed: rng.gen::<f32>() * 0.5 + 0.2,
                delay: rng.gen::<f32>() * 2.0,
                tint: StarTint::sample(&mut *rng),
            })
            .collect();
        let twinkle_sizes: Vec<f32> = self.stars.iter().map(|s| s.size * 1.5).collect();
        self.twinkles = twinkle_sizes
            .into_iter()
            .take(self.params.twinkles)
            .map(|size| Twinkle {
                unit: Vec2::new(rng.gen(), rng.gen()),
                size,
                delay: rng.gen::<f32>() * 3.0,
            })
            .collect();
        self.shooting = (0..self.params.shooting_stars)
            .map(|_| ShootingStar {
                unit: Vec2::new(rng.gen(), rng.gen()),
                delay: rng.gen::<f32>() * 10.0,
                duration: rng.gen::<f32>() + 0.5,
            })
            .collect();
        self.constellations = (0..self.params.constellations)
            .map(|i| {
                let from = Vec2::new(rng.gen(), rng.gen());
                let jitter = Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5) * 0.1;
                Constellation {
                    from,
                    to: (from + jitter).clamp(Vec2::ZERO, Vec2::ONE),
                    delay: i as f32 * 0.1,
                }
            })
            .collect();
        log::debug!(
            "[starfield] initialized {} stars for {}x{}",
            self.stars.len(),
            self.width,
            self.height
        );
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn twinkles(&self) -> &[Twinkle] {
        &self.twinkles
    }

    pub fn shooting_stars(&self) -> &[ShootingStar] {
        &self.shooting
    }

    pub fn constellations(&self) -> &[Constellation] {
        &self.constellations
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Current spring-smoothed parallax input in `[-range, range]`.
    pub fn parallax(&self) -> Vec2 {
        self.parallax.position
    }

    /// Advances the parallax spring; a missing pointer keeps the last target.
    pub fn step(&mut self, pointer: Option<Vec2>, dt_sec: f32) {
        if let Some(p) = pointer {
            self.target = parallax_target(p, self.size());
        }
        self.parallax.step(self.target, dt_sec);
    }

    pub fn render(&self, surface: &mut dyn Surface, colors: &ThemeColors, t: f32) {
        let size = self.size();
        surface.clear(size.x, size.y);
        self.draw_space(surface, size, colors);
        self.draw_nebulae(surface, size, colors, t);
        if self.params.grid {
            draw_grid(surface, size, colors);
        }
        self.draw_constellations(surface, size, colors, t);
        for star in &self.stars {
            let p = pulse(t, 2.0 + star.speed, star.delay);
            let opacity = (star.opacity * (1.0 + 0.5 * p)).min(1.0);
            let radius = 0.5 * star.size * (1.0 + 0.2 * p);
            let tint = star.tint.resolve(colors);
            let center = star.unit * size;
            let color = tint.with_alpha(opacity);
            let glow_radius = radius * PARTICLE_GLOW_SCALE;
            let glow = Paint::radial_fade(center, glow_radius, color);
            surface.fill_circle(center, glow_radius, &glow);
            surface.fill_circle(center, radius, &Paint::Solid(color));
        }
        for tw in &self.twinkles {
            let p = pulse(t, TWINKLE_PERIOD_SEC, tw.delay);
            if p <= 0.0 {
                continue;
            }
            let radius = 0.5 * tw.size * (0.5 + 0.7 * p);
            let center = tw.unit * size;
            let sparkle = Paint::radial_fade(center, radius, Rgba::WHITE.with_alpha(0.8 * p));
            surface.fill_circle(center, radius, &sparkle);
        }
        self.draw_shooting(surface, size, t);
    }

    fn draw_space(&self, surface: &mut dyn Surface, size: Vec2, colors: &ThemeColors) {
        let mut stops = Stops::new();
        stops.push(ColorStop::new(0.0, SPACE_DEEP));
        stops.push(ColorStop::new(0.5, colors.background.with_alpha(1.0)));
        stops.push(ColorStop::new(1.0, SPACE_HAZE));
        surface.fill_rect(
            Vec2::ZERO,
            size,
            &Paint::Linear {
                from: Vec2::ZERO,
                to: size,
                stops,
            },
        );
        let haze = Paint::radial_fade(
            size * 0.5,
            size.max_element() * 0.7,
            colors.primary.with_alpha(0.05),
        );
        surface.fill_rect(Vec2::ZERO, size, &haze);
    }

    fn draw_nebulae(&self, surface: &mut dyn Surface, size: Vec2, colors: &ThemeColors, t: f32) {
        let shift = self.parallax.position / POINTER_PARALLAX_RANGE;
        let breathe = pulse(t, 8.0, 0.0);

        let d1 = 600.0_f32.min(size.x * 0.9);
        let c1 = Vec2::new(size.x * 0.1, size.y * 0.2) + Vec2::splat(d1 * 0.5)
            - shift * NEBULA_PRIMARY_SHIFT_PX;
        let r1 = d1 * 0.5 * 0.7 * (1.0 + 0.1 * breathe);
        let a1 = 0.1 * (0.67 + 0.33 * breathe);
        let primary = Paint::radial_fade(c1, r1, colors.primary.with_alpha(a1));
        surface.fill_circle(c1, r1, &primary);

        let d2 = 500.0_f32.min(size.x * 0.8);
        let c2 = Vec2::new(size.x * 0.85, size.y * 0.9) - Vec2::splat(d2 * 0.5)
            + shift * NEBULA_SECONDARY_SHIFT_PX;
        let r2 = d2 * 0.5 * 0.7;
        let secondary = Paint::radial_fade(c2, r2, colors.secondary.with_alpha(0.08));
        surface.fill_circle(c2, r2, &secondary);
    }

    fn draw_constellations(
        &self,
        surface: &mut dyn Surface,
        size: Vec2,
        colors: &ThemeColors,
        t: f32,
    ) {
        let paint = Paint::Solid(colors.primary.with_alpha(0.1));
        for c in &self.constellations {
            let f = stroke_progress(t, c.delay);
            if f <= 0.0 {
                continue;
            }
            let from = c.from * size;
            let to = from.lerp(c.to * size, f);
            surface.stroke_line(from, to, 0.5, &paint);
        }
    }

    fn draw_shooting(&self, surface: &mut dyn Surface, size: Vec2, t: f32) {
        let travel = Vec2::splat(SHOOTING_STAR_TRAVEL_PX);
        let dir = travel.normalize();
        for s in &self.shooting {
            let Some(u) = shooting_progress(t, s.delay, s.duration) else {
                continue;
            };
            let opacity = 1.0 - (2.0 * u - 1.0).abs();
            let head = s.unit * size + travel * u;
            let tail = head - dir * SHOOTING_STAR_LENGTH_PX;
            let mut stops = Stops::new();
            stops.push(ColorStop::new(0.0, Rgba::WHITE.with_alpha(0.0)));
            stops.push(ColorStop::new(0.5, Rgba::WHITE.with_alpha(opacity)));
            stops.push(ColorStop::new(1.0, Rgba::WHITE.with_alpha(0.0)));
            let trail = Paint::Linear {
                from: tail,
                to: head,
                stops,
            };
            surface.stroke_line(tail, head, 2.0, &trail);
        }
    }
}

fn draw_grid(surface: &mut dyn Surface, size: Vec2, colors: &ThemeColors) {
    let paint = Paint::Solid(colors.primary.with_alpha(0.02));
    let mut x = 0.0;
    while x <= size.x {
        surface.stroke_line(Vec2::new(x, 0.0), Vec2::new(x, size.y), 1.0, &paint);
        x += GRID_SPACING_PX;
    }
    let mut y = 0.0;
    while y <= size.y {
        surface.stroke_line(Vec2::new(0.0, y), Vec2::new(size.x, y), 1.0, &paint);
        y += GRID_SPACING_PX;
    }
}
