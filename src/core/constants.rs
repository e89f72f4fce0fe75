/// Simulation and drawing tuning constants.
///
/// Lengths are in CSS pixels, rates are per animation frame unless the name
/// says otherwise.
// Particle population
pub const MAX_PARTICLES: usize = 80;
pub const PARTICLE_DENSITY_AREA: f32 = 20_000.0; // one particle per this many px²

// Particle sampling ranges (half-open)
pub const PARTICLE_SPEED_SPAN: f32 = 0.3; // each axis in [-span/2, span/2)
pub const PARTICLE_RADIUS_MIN: f32 = 0.5;
pub const PARTICLE_RADIUS_SPAN: f32 = 2.0;
pub const PARTICLE_OPACITY_MIN: f32 = 0.1;
pub const PARTICLE_OPACITY_SPAN: f32 = 0.3;
pub const PARTICLE_GLOW_SCALE: f32 = 3.0;

// Pointer interaction
pub const INTERACTION_RADIUS: f32 = 100.0;
pub const INTERACTION_STRENGTH: f32 = 0.02;

// Connections
pub const CONNECTION_RADIUS: f32 = 150.0;
pub const CONNECTION_MAX_OPACITY: f32 = 0.2;
pub const CONNECTION_LINE_WIDTH: f32 = 0.5;

// Background wash (alpha of each layer)
pub const WASH_ALPHA_STOPS: [f32; 3] = [1.0, 0.933, 0.867];
pub const GLOW_PRIMARY_ALPHA: f32 = 0.082;
pub const GLOW_SECONDARY_ALPHA: f32 = 0.063;

// Floating orbs
pub const ORB_COUNT: usize = 3;
pub const ORB_ALPHA: f32 = 0.031;
pub const ORB_SWAY_X: f32 = 100.0;
pub const ORB_SWAY_Y: f32 = 80.0;
pub const ORB_BASE_RADIUS: f32 = 30.0;
pub const ORB_RADIUS_SWAY: f32 = 10.0;

// Cursor follower
pub const RING_EASE: f32 = 0.15;
pub const DOT_EASE: f32 = 0.25;
pub const RING_SIZE_PX: f32 = 30.0;
pub const DOT_SIZE_PX: f32 = 8.0;
pub const AURA_SIZE_PX: f32 = 50.0;
pub const RING_HOVER_SCALE: f32 = 1.5;
pub const DOT_HOVER_SCALE: f32 = 0.6;
pub const MIN_POINTER_VIEWPORT_PX: f64 = 768.0;

// Spring follower (unit mass)
pub const SPRING_STIFFNESS: f32 = 50.0;
pub const SPRING_DAMPING: f32 = 20.0;
pub const SPRING_MAX_DT_SEC: f32 = 1.0 / 20.0;

// Starfield
pub const STAR_COUNT: usize = 150;
pub const TWINKLE_COUNT: usize = 30;
pub const SHOOTING_STAR_COUNT: usize = 5;
pub const CONSTELLATION_COUNT: usize = 15;
pub const SHOOTING_STAR_TRAVEL_PX: f32 = 500.0;
pub const SHOOTING_STAR_LENGTH_PX: f32 = 100.0;
pub const TWINKLE_PERIOD_SEC: f32 = 1.5;
pub const POINTER_PARALLAX_RANGE: f32 = 40.0;
pub const NEBULA_PRIMARY_SHIFT_PX: f32 = 20.0;
pub const NEBULA_SECONDARY_SHIFT_PX: f32 = 10.0;
pub const CONSTELLATION_DRAW_SEC: f32 = 2.0;
pub const CONSTELLATION_REPEAT_DELAY_SEC: f32 = 5.0;
pub const GRID_SPACING_PX: f32 = 50.0;
