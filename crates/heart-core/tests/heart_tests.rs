// Tests for the parametric heart curve and volume sampling.

use heart_core::{heart_curve, sample_heart_volume, DEPTH_SPAN, HEART_SCALE};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::{FRAC_PI_2, PI};

#[test]
fn curve_hits_known_reference_points() {
    // t = 0: x = 16 sin^3 0 = 0, y = -(13 - 5 - 2 - 1) = -5
    let p0 = heart_curve(0.0);
    assert!(p0.x.abs() < 1e-5, "x(0) = {}", p0.x);
    assert!((p0.y + 5.0).abs() < 1e-5, "y(0) = {}", p0.y);

    // t = pi/2: x = 16, y = -(0 + 5 - 0 - 1) = -4
    let p1 = heart_curve(FRAC_PI_2);
    assert!((p1.x - 16.0).abs() < 1e-4, "x(pi/2) = {}", p1.x);
    assert!((p1.y + 4.0).abs() < 1e-4, "y(pi/2) = {}", p1.y);

    // t = pi is the bottom tip
    let p2 = heart_curve(PI);
    assert!(p2.x.abs() < 1e-4, "x(pi) = {}", p2.x);
    assert!((p2.y - 17.0).abs() < 1e-4, "y(pi) = {}", p2.y);
}

#[test]
fn curve_is_symmetric_about_the_vertical_axis() {
    for i in 1..32 {
        let t = i as f32 / 32.0 * PI;
        let a = heart_curve(t);
        let b = heart_curve(-t);
        assert!((a.x + b.x).abs() < 1e-4, "x not mirrored at t = {t}");
        assert!((a.y - b.y).abs() < 1e-4, "y not mirrored at t = {t}");
    }
}

#[test]
fn sampled_targets_stay_inside_the_scaled_volume() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..2000 {
        let p = sample_heart_volume(&mut rng, HEART_SCALE);
        // curve extrema are |x| <= 16 and |y| <= 21, scaled by at most
        // HEART_SCALE; depth is drawn from +-DEPTH_SPAN before scaling
        assert!(p.x.abs() <= 16.0 * HEART_SCALE + 1e-3);
        assert!(p.y.abs() <= 21.0 * HEART_SCALE + 1e-3);
        assert!(p.z.abs() <= DEPTH_SPAN * HEART_SCALE + 1e-3);
    }
}

#[test]
fn volume_sampling_is_deterministic_per_seed() {
    let mut a = StdRng::seed_from_u64(99);
    let mut b = StdRng::seed_from_u64(99);
    for _ in 0..16 {
        let pa = sample_heart_volume(&mut a, HEART_SCALE);
        let pb = sample_heart_volume(&mut b, HEART_SCALE);
        assert_eq!(pa, pb);
    }
}
