// Sanity relationships between the tuning constants.

use heart_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn damping_and_decay_factors_are_contractive() {
    assert!(IDLE_DAMPING > 0.0 && IDLE_DAMPING < 1.0);
    assert!(BURST_DAMPING > 0.0 && BURST_DAMPING < 1.0);
    assert!(RADIUS_DECAY > 0.0 && RADIUS_DECAY < 1.0);
    // the burst keeps more momentum than idle drag would
    assert!(BURST_DAMPING > IDLE_DAMPING);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn easing_rates_are_fractions_of_a_frame() {
    assert!(POSITION_EASE > 0.0 && POSITION_EASE < 1.0);
    assert!(CAMERA_EASE > 0.0 && CAMERA_EASE < 1.0);
    assert!(AUTO_ROTATE_STEP > 0.0 && AUTO_ROTATE_STEP < CAMERA_EASE);
    assert!(SIM_TIME_STEP > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn geometry_and_color_ranges_are_sane() {
    assert!(PARTICLE_COUNT > 0);
    assert!(HEART_SCALE > 0.0);
    assert!(DEPTH_SPAN > 0.0);
    assert!(FOCAL_LENGTH > 0.0);
    assert!(RADIUS_MAX > 0.0);
    assert!(BURST_SPEED > 0.0);
    assert!(JITTER > 0.0 && JITTER < 1.0);
    assert!(PULSE_DEPTH > 0.0 && PULSE_DEPTH < 1.0);
    assert!(HUE_BASE >= 0.0 && HUE_BASE < 360.0);
    assert!(HUE_SPAN > 0.0);
    assert!(LIGHTNESS_BASE + LIGHTNESS_SPAN <= 100.0);
}
