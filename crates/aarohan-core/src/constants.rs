//! Tuning constants shared by the site state and the totem scene.
//!
//! The web crate reads these when it builds `SiteParams` and `SceneParams`
//! defaults; nothing here touches the DOM.

// Reservation
pub const SUBMIT_DELAY_MS: u64 = 2000; // simulated booking round trip
pub const PHONE_DIGITS_MIN: usize = 7;
pub const PHONE_DIGITS_MAX: usize = 15;

// Smooth scrolling
pub const SCROLL_LERP: f32 = 0.1; // fraction of the remaining distance per 60 Hz frame
pub const SCROLL_REFERENCE_FPS: f32 = 60.0;
pub const SCROLL_WHEEL_MULTIPLIER: f32 = 1.0;
pub const SCROLL_SETTLE_EPSILON: f32 = 0.5; // px; snap to target below this
pub const WHEEL_LINE_HEIGHT_PX: f32 = 16.0;

// Totem motion
pub const TOTEM_SCALE: f32 = 1.6;
pub const TOTEM_FLOAT_AMPLITUDE: f32 = 0.1;
pub const TOTEM_FLOAT_SPEED: f32 = 0.5;
pub const CORE_SPIN_Y_PER_SEC: f32 = -0.05;
pub const CORE_SPIN_Z_PER_SEC: f32 = 0.02;
pub const RING_WOBBLE_AMPLITUDE: f32 = 0.2;
pub const RING_WOBBLE_SPEED: f32 = 0.2;
pub const RING_SPIN_PER_SEC: f32 = 0.1;
pub const POINTER_TILT: f32 = 0.2; // max group tilt (radians) at the viewport edge
pub const POINTER_FOLLOW: f32 = 0.05; // lerp factor per 60 Hz frame
pub const AUTO_ROTATE_SPEED: f32 = 0.5; // orbit turns per minute at 1.0 is 2*pi/60 rad/s

// Totem geometry
pub const BEAM_COUNT: usize = 16;
pub const BEAM_HEIGHT: f32 = 6.0;
pub const BEAM_TOP_RADIUS: f32 = 0.02;
pub const BEAM_BOTTOM_RADIUS: f32 = 0.4;
pub const BEAM_OPACITY: f32 = 0.15;
pub const BEAM_COLORS: [&str; 4] = ["#fbbf24", "#d97706", "#ffffff", "#f59e0b"];
pub const SHELL_RADIUS: f32 = 0.91;
pub const SHELL_OPACITY: f32 = 0.1;
pub const SHELL_COLOR: &str = "#fbbf24";
pub const RING_COLOR: &str = "#d97706";

// Camera
pub const CAMERA_Z: f32 = 6.0;
pub const CAMERA_FOVY_DEG: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
