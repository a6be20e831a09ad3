// DOM ids and painter tuning for the web frontend.

// Element ids expected in the host page
pub const CANVAS_ID: &str = "scene";
pub const YES_BUTTON_ID: &str = "yes-button";

// Pointer delta from viewport center to rotation offset
pub const POINTER_SENSITIVITY: f32 = 0.001;

// Translucent gradient painted over the previous frame each tick; the 0.4
// alpha turns motion into trails instead of a hard clear.
pub const TRAIL_STOPS: [(f32, &str); 4] = [
    (0.0, "rgba(26, 6, 18, 0.4)"),
    (0.3, "rgba(45, 10, 31, 0.4)"),
    (0.7, "rgba(74, 14, 47, 0.4)"),
    (1.0, "rgba(31, 10, 22, 0.4)"),
];
