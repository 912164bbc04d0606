// Pure CSS string helpers for the overlay presenter.
// Kept free of web-sys so they can be exercised on the host.

use std::time::Duration;

#[inline]
pub fn px(value: f32) -> String {
    format!("{}px", value)
}

#[inline]
fn channel_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// `[r, g, b, a]` in 0..1 to a CSS `rgba()` colour.
pub fn rgba(color: [f32; 4]) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        channel_u8(color[0]),
        channel_u8(color[1]),
        channel_u8(color[2]),
        color[3].clamp(0.0, 1.0)
    )
}

/// Parse a computed `rgb()`/`rgba()` colour. Fully transparent colours and
/// anything else (keywords, `color()` syntax) yield `None`.
pub fn parse_rgb(text: &str) -> Option<[f32; 4]> {
    let text = text.trim();
    let inner = text
        .strip_prefix("rgba(")
        .or_else(|| text.strip_prefix("rgb("))?
        .strip_suffix(')')?;
    let parts: Vec<f32> = inner
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .map(|p| p.parse::<f32>())
        .collect::<Result<_, _>>()
        .ok()?;
    let (r, g, b, a) = match parts.as_slice() {
        [r, g, b] => (*r, *g, *b, 1.0),
        [r, g, b, a] => (*r, *g, *b, *a),
        _ => return None,
    };
    if a <= 0.0 {
        return None;
    }
    Some([r / 255.0, g / 255.0, b / 255.0, a])
}

/// Drop shadow with the colour's alpha scaled by `opacity`.
pub fn box_shadow(offset: [f32; 2], radius: f32, color: [f32; 4], opacity: f32) -> String {
    let [r, g, b, a] = color;
    format!(
        "{} {} {} {}",
        px(offset[0]),
        px(offset[1]),
        px(radius),
        rgba([r, g, b, a * opacity])
    )
}

/// `transition` value for the geometry properties and opacity, each with
/// its own duration. Zero durations are left out so those properties jump.
pub fn transition(geometry: Duration, opacity: Duration) -> String {
    let mut parts = Vec::new();
    if !geometry.is_zero() {
        let secs = geometry.as_secs_f32();
        for prop in ["left", "top", "width", "height"] {
            parts.push(format!("{} {}s ease-in-out", prop, secs));
        }
    }
    if !opacity.is_zero() {
        parts.push(format!("opacity {}s ease-in-out", opacity.as_secs_f32()));
    }
    if parts.is_empty() {
        "none".to_string()
    } else {
        parts.join(", ")
    }
}
