use glam::Vec3;
use rand::prelude::*;

use crate::constants::{
    BURST_DAMPING, BURST_SPEED, HUE_BASE, HUE_SPAN, IDLE_DAMPING, JITTER, LIGHTNESS_BASE,
    LIGHTNESS_SPAN, POSITION_EASE, PULSE_DEPTH, RADIUS_DECAY, RADIUS_MAX,
};
use crate::heart::sample_heart_volume;

#[derive(Clone, Debug)]
pub struct Particle {
    /// Anchor point on the heart volume, fixed at construction.
    pub target: Vec3,
    pub position: Vec3,
    pub velocity: Vec3,
    pub radius: f32,
    pub damping: f32,
    pub hue: f32,
    pub lightness: f32,
}

/// The whole particle population plus the one-way celebration flag.
pub struct ParticleField {
    pub particles: Vec<Particle>,
    celebrating: bool,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(count: usize, heart_scale: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|_| {
                let target = sample_heart_volume(&mut rng, heart_scale);
                Particle {
                    target,
                    position: target,
                    velocity: Vec3::ZERO,
                    radius: rng.gen_range(0.0..RADIUS_MAX),
                    damping: IDLE_DAMPING,
                    hue: HUE_BASE + rng.gen::<f32>() * HUE_SPAN,
                    lightness: LIGHTNESS_BASE + rng.gen::<f32>() * LIGHTNESS_SPAN,
                }
            })
            .collect::<Vec<_>>();
        log::info!("[field] sampled {} particles", particles.len());
        Self {
            particles,
            celebrating: false,
            rng,
        }
    }

    #[inline]
    pub fn celebrating(&self) -> bool {
        self.celebrating
    }

    /// Advance every particle by one frame. `beat` is the heartbeat phase
    /// computed by the frame driver.
    ///
    /// Idle particles ease toward their pulsed anchor with a little drift;
    /// celebrating particles fly free, bleeding speed and size each frame.
    pub fn advance(&mut self, beat: f32) {
        if self.celebrating {
            for p in &mut self.particles {
                p.position += p.velocity;
                p.velocity *= p.damping;
                p.radius *= RADIUS_DECAY;
            }
        } else {
            let pulse = 1.0 + beat * PULSE_DEPTH;
            let rng = &mut self.rng;
            for p in &mut self.particles {
                p.position += (p.target * pulse - p.position) * POSITION_EASE;
                p.position += Vec3::new(
                    rng.gen_range(-JITTER..JITTER),
                    rng.gen_range(-JITTER..JITTER),
                    rng.gen_range(-JITTER..JITTER),
                );
            }
        }
    }

    /// One-way switch into the celebration burst. Idempotent: the second
    /// call is a no-op, velocities are only randomized once.
    ///
    /// The impulse is drawn per axis, uncorrelated with position; the burst
    /// scatters rather than radiating from the center.
    pub fn trigger_celebration(&mut self) {
        if self.celebrating {
            return;
        }
        self.celebrating = true;
        let rng = &mut self.rng;
        for p in &mut self.particles {
            p.damping = BURST_DAMPING;
            p.velocity = Vec3::new(
                rng.gen_range(-BURST_SPEED..BURST_SPEED),
                rng.gen_range(-BURST_SPEED..BURST_SPEED),
                rng.gen_range(-BURST_SPEED..BURST_SPEED),
            );
        }
        log::info!("[field] celebration: {} particles set free", self.particles.len());
    }
}
