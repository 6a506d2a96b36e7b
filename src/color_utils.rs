/// Hex color parsing and luminance helpers.
use tiny_skia::Color;

/// Parse a hex color string into an RGB triplet.
/// Accepts:
/// - #RRGGBB or RRGGBB
/// - #RGB or RGB (each digit duplicated)
/// - Any unparseable channel degrades to 0 rather than failing
pub fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let trimmed = hex.trim();
    let clean = trimmed.strip_prefix('#').unwrap_or(trimmed);

    let expanded;
    let digits = if clean.len() == 3 {
        expanded = clean.chars().flat_map(|c| [c, c]).collect::<String>();
        expanded.as_str()
    } else {
        clean
    };

    let channel = |range: std::ops::Range<usize>| -> u8 {
        digits
            .get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(0)
    };

    (channel(0..2), channel(2..4), channel(4..6))
}

/// Compose a hex color with an alpha in [0, 1] into a drawable color.
pub fn with_alpha(hex: &str, alpha: f32) -> Color {
    let (r, g, b) = hex_to_rgb(hex);
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color::from_rgba8(r, g, b, a)
}

/// Opaque drawable color from a hex string.
pub fn solid(hex: &str) -> Color {
    let (r, g, b) = hex_to_rgb(hex);
    Color::from_rgba8(r, g, b, 255)
}

/// Rec. 601 luma, normalized to [0, 1].
pub fn luminance(hex: &str) -> f64 {
    let (r, g, b) = hex_to_rgb(hex);
    (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0
}

/// True when the color is dark enough to need light foreground text.
pub fn is_dark(hex: &str) -> bool {
    luminance(hex) < 0.5
}
