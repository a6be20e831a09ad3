use glam::{Vec2, Vec3};
use rand::Rng;

use crate::constants::DEPTH_SPAN;

/// Classic parametric heart curve.
///
/// `x = 16 sin³ t`, `y = −(13 cos t − 5 cos 2t − 2 cos 3t − cos 4t)`.
/// The sign flip on `y` puts the tip at the bottom in screen coordinates
/// (y grows downward).
#[inline]
pub fn heart_curve(t: f32) -> Vec2 {
    let x = 16.0 * t.sin().powi(3);
    let y = -(13.0 * t.cos()
        - 5.0 * (2.0 * t).cos()
        - 2.0 * (3.0 * t).cos()
        - (4.0 * t).cos());
    Vec2::new(x, y)
}

/// Sample one anchor point inside the heart volume.
///
/// The cube-root mapping on `u` gives uniform volumetric density; sampling
/// the radius uniformly would crowd points near the surface.
pub fn sample_heart_volume(rng: &mut impl Rng, heart_scale: f32) -> Vec3 {
    let t = rng.gen_range(0.0..std::f32::consts::TAU);
    let u: f32 = rng.gen();
    let scale = u.cbrt() * heart_scale;
    let xy = heart_curve(t);
    let z = rng.gen_range(-DEPTH_SPAN..DEPTH_SPAN);
    Vec3::new(xy.x * scale, xy.y * scale, z * scale)
}
