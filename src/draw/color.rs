//! RGBA color type, hex/name parsing, and packed-ARGB conversion.

use serde::{Deserialize, Serialize};

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use sketchbridge::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let semi_transparent_blue = Color { r: 0.0, g: 0.0, b: 1.0, a: 0.5 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    ///
    /// All values should be in the range 0.0 to 1.0.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parses a hex color string (`#RGB`, `#RRGGBB`, or `#RRGGBBAA`).
    ///
    /// Returns `None` for anything that is not a well-formed hex literal.
    pub fn from_hex(spec: &str) -> Option<Self> {
        let digits = spec.strip_prefix('#')?;
        if !digits.is_ascii() {
            return None;
        }

        let (r, g, b, a) = match digits.len() {
            3 => {
                let r = u8::from_str_radix(&digits[0..1], 16).ok()?;
                let g = u8::from_str_radix(&digits[1..2], 16).ok()?;
                let b = u8::from_str_radix(&digits[2..3], 16).ok()?;
                // #f00 expands to #ff0000
                (r * 17, g * 17, b * 17, 255)
            }
            6 => (
                u8::from_str_radix(&digits[0..2], 16).ok()?,
                u8::from_str_radix(&digits[2..4], 16).ok()?,
                u8::from_str_radix(&digits[4..6], 16).ok()?,
                255,
            ),
            8 => (
                u8::from_str_radix(&digits[0..2], 16).ok()?,
                u8::from_str_radix(&digits[2..4], 16).ok()?,
                u8::from_str_radix(&digits[4..6], 16).ok()?,
                u8::from_str_radix(&digits[6..8], 16).ok()?,
            ),
            _ => return None,
        };

        Some(Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        })
    }

    /// Parses any color specification accepted by the host component API:
    /// a hex literal, the keyword `transparent`, or a named color.
    pub fn parse(spec: &str) -> Option<Self> {
        if spec.starts_with('#') {
            return Self::from_hex(spec);
        }
        if spec.eq_ignore_ascii_case("transparent") {
            return Some(TRANSPARENT);
        }
        name_to_color(spec)
    }

    /// Packs the color into the `0xAARRGGBB` integer the native command
    /// layer carries across the bridge.
    pub fn to_argb(&self) -> u32 {
        let quantize = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        (quantize(self.a) << 24)
            | (quantize(self.r) << 16)
            | (quantize(self.g) << 8)
            | quantize(self.b)
    }
}

/// Maps color name strings to Color values.
///
/// Used by the configuration layer to accept human-readable color names
/// in place of hex literals.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined green color (R=0.0, G=1.0, B=0.0)
pub const GREEN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined yellow color (R=1.0, G=1.0, B=0.0)
pub const YELLOW: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined orange color (R=1.0, G=0.5, B=0.0)
pub const ORANGE: Color = Color {
    r: 1.0,
    g: 0.5,
    b: 0.0,
    a: 1.0,
};

/// Predefined pink/magenta color (R=1.0, G=0.0, B=1.0)
pub const PINK: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined white color (R=1.0, G=1.0, B=1.0)
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined black color (R=0.0, G=0.0, B=0.0)
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Fully transparent color
pub const TRANSPARENT: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing_accepts_all_widths() {
        assert_eq!(Color::from_hex("#000000").unwrap(), BLACK);
        assert_eq!(Color::from_hex("#ff0000").unwrap(), RED);
        assert_eq!(Color::from_hex("#f00").unwrap(), RED);

        let translucent = Color::from_hex("#0000ff80").unwrap();
        assert_eq!(translucent.b, 1.0);
        assert!((translucent.a - 128.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn hex_parsing_rejects_malformed_specs() {
        assert!(Color::from_hex("000000").is_none());
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("#gggggg").is_none());
        assert!(Color::from_hex("#").is_none());
    }

    #[test]
    fn parse_handles_keywords_and_names() {
        assert_eq!(Color::parse("transparent").unwrap(), TRANSPARENT);
        assert_eq!(Color::parse("Transparent").unwrap(), TRANSPARENT);
        assert_eq!(Color::parse("red").unwrap(), RED);
        assert_eq!(Color::parse("#ffffff").unwrap(), WHITE);
        assert!(Color::parse("chartreuse").is_none());
    }

    #[test]
    fn argb_packing_is_byte_exact() {
        assert_eq!(BLACK.to_argb(), 0xff000000);
        assert_eq!(RED.to_argb(), 0xffff0000);
        assert_eq!(WHITE.to_argb(), 0xffffffff);
        assert_eq!(TRANSPARENT.to_argb(), 0x00000000);
        assert_eq!(Color::from_hex("#12345678").unwrap().to_argb(), 0x78123456);
    }
}
