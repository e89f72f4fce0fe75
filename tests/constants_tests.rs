// Host-side tests for constants and their mathematical relationships.

use portfolio_fx::core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_constants_are_within_reasonable_bounds() {
    assert!(MAX_PARTICLES > 0);
    assert!(PARTICLE_DENSITY_AREA > 0.0);
    assert!(PARTICLE_SPEED_SPAN > 0.0);

    // Radii and opacity ranges stay positive and below one full alpha
    assert!(PARTICLE_RADIUS_MIN > 0.0);
    assert!(PARTICLE_OPACITY_MIN > 0.0);
    assert!(PARTICLE_OPACITY_MIN + PARTICLE_OPACITY_SPAN <= 1.0);
    assert!(PARTICLE_GLOW_SCALE > 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn interaction_and_connection_radii_are_ordered() {
    assert!(INTERACTION_RADIUS > 0.0);
    assert!(CONNECTION_RADIUS > INTERACTION_RADIUS);
    assert!(INTERACTION_STRENGTH > 0.0 && INTERACTION_STRENGTH < 1.0);
    assert!(CONNECTION_MAX_OPACITY > 0.0 && CONNECTION_MAX_OPACITY <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn background_layers_stay_subtle() {
    // First wash stop is opaque so nothing from the previous frame shows through
    assert_eq!(WASH_ALPHA_STOPS[0], 1.0);
    assert!(WASH_ALPHA_STOPS.windows(2).all(|w| w[0] >= w[1]));
    assert!(GLOW_PRIMARY_ALPHA <= 0.15);
    assert!(GLOW_SECONDARY_ALPHA <= 0.15);
    assert!(ORB_ALPHA <= 0.15);
    assert!(ORB_BASE_RADIUS > ORB_RADIUS_SWAY);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn cursor_easing_factors_are_fractions() {
    assert!(RING_EASE > 0.0 && RING_EASE <= 1.0);
    assert!(DOT_EASE > 0.0 && DOT_EASE <= 1.0);
    // the dot leads the ring
    assert!(DOT_EASE > RING_EASE);
    assert!(AURA_SIZE_PX > RING_SIZE_PX && RING_SIZE_PX > DOT_SIZE_PX);
    assert!(RING_HOVER_SCALE > 1.0);
    assert!(DOT_HOVER_SCALE < 1.0);
    assert!(MIN_POINTER_VIEWPORT_PX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn parallax_spring_is_overdamped() {
    // damping ratio = c / (2 * sqrt(k)) for unit mass
    let ratio = SPRING_DAMPING / (2.0 * SPRING_STIFFNESS.sqrt());
    assert!(ratio >= 1.0);
    assert!(SPRING_MAX_DT_SEC > 0.0 && SPRING_MAX_DT_SEC < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn starfield_counts_are_consistent() {
    assert!(TWINKLE_COUNT <= STAR_COUNT);
    assert!(SHOOTING_STAR_COUNT > 0);
    assert!(CONSTELLATION_DRAW_SEC > 0.0 && CONSTELLATION_REPEAT_DELAY_SEC > 0.0);
    assert!(SHOOTING_STAR_TRAVEL_PX > SHOOTING_STAR_LENGTH_PX);
    assert!(NEBULA_PRIMARY_SHIFT_PX > NEBULA_SECONDARY_SHIFT_PX);
    assert!(GRID_SPACING_PX > 0.0);
}
