// DOM wiring and presentation constants for the web frontend.

// Elements opt in with this attribute: <input type="range" data-precision>
pub const PRECISION_ATTRIBUTE: &str = "data-precision";
pub const PRECISION_SELECTOR: &str = "input[type=range][data-precision]";

// Overlay elements
pub const OVERLAY_CLASS: &str = "precision-overlay"; // shared class for styling hooks
pub const OVERLAY_Z_INDEX: i32 = 10;

// Native range inputs do not expose their track; assume a thin centred bar
pub const TRACK_HEIGHT_PX: f32 = 4.0;
pub const TRACK_INSET_PX: f32 = 0.0; // horizontal inset of the track from the input edges

// Fallback range when min/max attributes are missing or unparsable (HTML defaults)
pub const DEFAULT_MIN: f32 = 0.0;
pub const DEFAULT_MAX: f32 = 100.0;
