/// Heartbeat phase driving the idle pulse.
///
/// The narrow `sin^60` lobe is the systole spike; the offset secondary sine
/// is a slow diastole-like baseline drift. Bounded in `[-0.1, 0.6]`.
#[inline]
pub fn heartbeat_phase(t: f32) -> f32 {
    (3.0 * t).sin().powi(60) * 0.5 + (3.0 * t + 0.5).sin() * 0.1
}
