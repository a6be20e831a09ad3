//! Eased camera angles and the perspective projection.
//!
//! There is no scene graph here: the "camera" is two rotation angles, each
//! eased toward a target every frame, and a fixed-focal-length perspective
//! divide applied per point.

use glam::{Vec2, Vec3};

use crate::constants::{AUTO_ROTATE_STEP, CAMERA_EASE, FOCAL_LENGTH};

/// Viewport dimensions in device pixels. The projection center is derived
/// from these on every call, so a resize needs no other bookkeeping.
#[derive(Clone, Copy, Debug, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// A point mapped onto the screen, with the perspective scale to apply to
/// its drawn radius.
#[derive(Clone, Copy, Debug)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

/// Pitch/yaw pair eased toward moving targets.
///
/// The yaw target accumulates a constant auto-rotate step plus the pointer
/// offset; pitch tracks the pointer directly. First-order easing keeps the
/// lag bounded with no overshoot for any finite pointer motion.
#[derive(Clone, Copy, Debug, Default)]
pub struct CameraState {
    pub yaw: f32,
    pub pitch: f32,
    pub yaw_target: f32,
}

impl CameraState {
    pub fn update(&mut self, pointer: Vec2) {
        self.yaw_target += AUTO_ROTATE_STEP;
        self.yaw += (self.yaw_target + pointer.x - self.yaw) * CAMERA_EASE;
        self.pitch += (pointer.y - self.pitch) * CAMERA_EASE;
    }

    /// Rotate `point` around the horizontal axis by pitch, around the
    /// vertical axis by yaw, then perspective-project it. Returns `None`
    /// for points behind the camera or beyond the clipping plane.
    pub fn project(&self, point: Vec3, viewport: Viewport) -> Option<Projected> {
        let (sp, cp) = self.pitch.sin_cos();
        let y1 = point.y * cp - point.z * sp;
        let z1 = point.z * cp + point.y * sp;

        let (sy, cy) = self.yaw.sin_cos();
        let x1 = point.x * cy - z1 * sy;
        let z2 = z1 * cy + point.x * sy;

        let scale = FOCAL_LENGTH / (FOCAL_LENGTH + z2);
        if scale < 0.0 || z2 < -FOCAL_LENGTH {
            return None;
        }

        let center = viewport.center();
        Some(Projected {
            x: center.x + x1 * scale,
            y: center.y + y1 * scale,
            scale,
        })
    }
}
