/// Front-end tuning constants: frame pacing, painter and DOM class names.
///
/// Kept free of crate imports so host tests can `include!` this file.
// Frame pacing
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after a backgrounded tab resumes

// Totem painter
pub const RING_STEPS: usize = 96; // line segments per ring
pub const CLEAR_COLOR: &str = "#1a0505";
pub const BEAM_BLEND: &str = "lighter"; // additive, like light
pub const DEFAULT_BLEND: &str = "source-over";
pub const MIN_LINE_WIDTH_PX: f64 = 0.5;

// Navigation
pub const NAV_SCROLL_OFFSET_PX: f32 = 72.0; // fixed nav bar height

// DOM classes
pub const HIDDEN_CLASS: &str = "hidden";
pub const NAV_HIDDEN_CLASS: &str = "nav-hidden";
pub const ACTIVE_CLASS: &str = "active";

// Booking button labels
pub const SUBMIT_LABEL: &str = "PROCEED TO PAY →";
pub const SUBMITTING_LABEL: &str = "Reserving…";
