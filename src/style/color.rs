//! Color-space helpers for theming
//!
//! Two textual forms are understood: `#rrggbb` / `#rgb` hex and
//! `rgb(r, g, b)`. Conversions are pure and strict: out-of-range or
//! malformed input is an error, never a guess.

use thiserror::Error;

/// Invalid color string
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("'{0}' is not a valid hex color")]
    InvalidHex(String),
    #[error("'{0}' is not a valid rgb() color")]
    InvalidRgb(String),
    #[error("unsupported color format '{0}'")]
    UnsupportedFormat(String),
}

/// Parse `#rrggbb` or `#rgb` into components
pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8), ColorError> {
    let invalid = || ColorError::InvalidHex(hex.to_string());
    let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
    let expanded = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => digits.to_string(),
        _ => return Err(invalid()),
    };
    let value = u32::from_str_radix(&expanded, 16).map_err(|_| invalid())?;
    Ok((
        ((value >> 16) & 0xff) as u8,
        ((value >> 8) & 0xff) as u8,
        (value & 0xff) as u8,
    ))
}

/// Parse `rgb(r, g, b)` into components
pub fn rgb_to_components(rgb: &str) -> Result<(u8, u8, u8), ColorError> {
    let invalid = || ColorError::InvalidRgb(rgb.to_string());
    let trimmed = rgb.trim();
    let inner = trimmed
        .get(..4)
        .filter(|prefix| prefix.eq_ignore_ascii_case("rgb("))
        .and_then(|_| trimmed.get(4..))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(invalid)?;

    let mut parts = inner.split(',').map(str::trim);
    let component = |part: Option<&str>| -> Result<u8, ColorError> {
        part.and_then(|p| p.parse::<u8>().ok()).ok_or_else(invalid)
    };
    let r = component(parts.next())?;
    let g = component(parts.next())?;
    let b = component(parts.next())?;
    if parts.next().is_some() {
        return Err(invalid());
    }
    Ok((r, g, b))
}

/// Format components as `#RRGGBB`
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// Format components as an `rgb(r, g, b)` string
pub fn components_to_rgb(r: u8, g: u8, b: u8) -> String {
    format!("rgb({r}, {g}, {b})")
}

/// Parse either supported color form into components
pub fn parse(color: &str) -> Result<(u8, u8, u8), ColorError> {
    let trimmed = color.trim();
    if trimmed.starts_with('#') {
        hex_to_rgb(trimmed)
    } else if trimmed.get(..4).map_or(false, |p| p.eq_ignore_ascii_case("rgb(")) {
        rgb_to_components(trimmed)
    } else {
        Err(ColorError::UnsupportedFormat(color.to_string()))
    }
}

/// Blend a color toward white by `factor` (0.0 = unchanged, 1.0 = white)
///
/// Accepts either color form; always returns lowercase hex.
pub fn lighten(color: &str, factor: f32) -> Result<String, ColorError> {
    let (r, g, b) = parse(color)?;
    let lift = |c: u8| -> u8 {
        let lifted = f32::from(c) + (255.0 - f32::from(c)) * factor;
        lifted.round().clamp(0.0, 255.0) as u8
    };
    let (r, g, b) = (lift(r), lift(g), lift(b));
    Ok(format!("#{r:02x}{g:02x}{b:02x}"))
}
