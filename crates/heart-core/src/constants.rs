// Simulation tuning constants shared by the web and native frontends.
//
// All rates are per frame, not per second; the animation is tuned against
// the display refresh like the page it drives.

// Field
pub const PARTICLE_COUNT: usize = 3500;
pub const HEART_SCALE: f32 = 16.0; // heart volume scale factor
pub const DEPTH_SPAN: f32 = 5.0; // half-depth of the sampled volume

// Idle motion
pub const POSITION_EASE: f32 = 0.1; // per-frame ease toward the pulsed target
pub const JITTER: f32 = 0.25; // per-axis Brownian drift amplitude
pub const PULSE_DEPTH: f32 = 0.1; // how much a full beat inflates the heart
pub const IDLE_DAMPING: f32 = 0.92;

// Celebration burst
pub const BURST_DAMPING: f32 = 0.96; // higher drag once free-flying
pub const BURST_SPEED: f32 = 7.5; // per-axis impulse range at trigger
pub const RADIUS_DECAY: f32 = 0.99; // per-frame shrink while celebrating

// Particle appearance (HSL, full saturation)
pub const RADIUS_MAX: f32 = 2.0;
pub const HUE_BASE: f32 = 340.0;
pub const HUE_SPAN: f32 = 40.0; // 340..380, wrapped into reds/pinks at draw time
pub const LIGHTNESS_BASE: f32 = 50.0;
pub const LIGHTNESS_SPAN: f32 = 30.0;

// Camera
pub const FOCAL_LENGTH: f32 = 500.0; // perspective focal distance
pub const AUTO_ROTATE_STEP: f32 = 0.003; // yaw target drift per frame
pub const CAMERA_EASE: f32 = 0.05;

// Heartbeat clock advance per frame
pub const SIM_TIME_STEP: f32 = 0.02;
