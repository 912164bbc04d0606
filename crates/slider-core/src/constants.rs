use std::time::Duration;

// Shared tracking and overlay tuning constants used by both web and native frontends.

// Mode switching
pub const PRECISION_THRESHOLD_HEIGHTS: f32 = 2.0; // vertical distance, in control heights, where precision starts

// Transitions
pub const FADE_IN_DURATION: Duration = Duration::from_millis(200); // overlays appear on pointer-down
pub const RESET_DURATION: Duration = Duration::from_millis(400); // overlays slide back to neutral
pub const FADE_OUT_DURATION: Duration = Duration::from_millis(400); // overlays disappear on pointer-up

// Neutral layout, in points relative to the control frame
pub const LEFT_CALIPER_INSET: f32 = 2.0;
pub const RIGHT_CALIPER_INSET: f32 = 4.0;
pub const CALIPER_TOP_INSET: f32 = 1.0;
pub const NEUTRAL_TRACK_WIDTH: f32 = 2.0;

// Precision layout adjustments
pub const TRACK_WIDTH_PAD: f32 = 1.0; // extra point added to each extension bar
pub const RIGHT_TRACK_END_INSET: f32 = 1.0;

// Caliper appearance
pub const CALIPER_SIZE: [f32; 2] = [2.0, 28.0];
pub const CALIPER_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0]; // white
pub const CALIPER_SHADOW_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0]; // black
pub const CALIPER_SHADOW_RADIUS: f32 = 1.0;
pub const CALIPER_SHADOW_OPACITY: f32 = 0.5;
pub const CALIPER_SHADOW_OFFSET: [f32; 2] = [0.0, 0.5];
pub const OVERLAY_CORNER_RADIUS: f32 = 1.0;

// Track extension appearance
pub const TRACK_FALLBACK_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0]; // used when the container has no background
pub const TRACK_ALPHA: f32 = 0.75;
