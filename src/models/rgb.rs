//! RGB color handling with hex parsing, interpolation, and alpha blending.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Supports parsing from hex strings (#RRGGBB), linear interpolation for
/// theme crossfades, and alpha blending for the background compositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use folio::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#a3e635").unwrap();
    /// assert_eq!(color, RgbColor::new(0xa3, 0xe6, 0x35));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (lowercase).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts the color to a Ratatui Color for terminal rendering.
    #[must_use]
    pub const fn to_ratatui_color(&self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }

    /// Linear interpolation toward `other`.
    ///
    /// `t` is clamped to 0.0..=1.0; 0.0 returns `self`, 1.0 returns `other`.
    /// Used by the theme crossfade to blend palettes channel-wise.
    #[must_use]
    pub fn lerp(&self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            (f32::from(a) + (f32::from(b) - f32::from(a)) * t)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    /// Blends `overlay` on top of this color at the given alpha.
    ///
    /// `alpha` is clamped to 0.0..=1.0; 0.0 leaves the base color untouched.
    /// Used by the background compositor to stack translucent layers onto
    /// opaque cell backgrounds.
    #[must_use]
    pub fn blend(&self, overlay: Self, alpha: f32) -> Self {
        self.lerp(overlay, alpha)
    }

    /// Returns a dimmed version of the color at the given percentage.
    ///
    /// 0 = black, 100 = original color. Values above 100 are clamped.
    #[must_use]
    pub const fn dim(&self, percent: u8) -> Self {
        let percent = if percent > 100 { 100 } else { percent };
        Self {
            r: (self.r as u16 * percent as u16 / 100) as u8,
            g: (self.g as u16 * percent as u16 / 100) as u8,
            b: (self.b as u16 * percent as u16 / 100) as u8,
        }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    /// Default color is white (#ffffff).
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_valid() {
        let color = RgbColor::from_hex("#FF0000").unwrap();
        assert_eq!(color, RgbColor::new(255, 0, 0));

        let color = RgbColor::from_hex("0a0a0a").unwrap();
        assert_eq!(color, RgbColor::new(10, 10, 10));

        let color = RgbColor::from_hex("  #fdfbf7  ").unwrap();
        assert_eq!(color, RgbColor::new(0xfd, 0xfb, 0xf7));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("#FFF").is_err());
        assert!(RgbColor::from_hex("#FFFFFFF").is_err());
        assert!(RgbColor::from_hex("GGGGGG").is_err());
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#").is_err());
    }

    #[test]
    fn test_hex_roundtrip() {
        let original = RgbColor::new(123, 45, 67);
        let parsed = RgbColor::from_hex(&original.to_hex()).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_lerp_endpoints() {
        let black = RgbColor::new(0, 0, 0);
        let white = RgbColor::new(255, 255, 255);
        assert_eq!(black.lerp(white, 0.0), black);
        assert_eq!(black.lerp(white, 1.0), white);
    }

    #[test]
    fn test_lerp_midpoint() {
        let black = RgbColor::new(0, 0, 0);
        let white = RgbColor::new(255, 255, 255);
        let mid = black.lerp(white, 0.5);
        assert_eq!(mid, RgbColor::new(128, 128, 128));
    }

    #[test]
    fn test_lerp_clamps_t() {
        let a = RgbColor::new(10, 20, 30);
        let b = RgbColor::new(200, 210, 220);
        assert_eq!(a.lerp(b, -1.0), a);
        assert_eq!(a.lerp(b, 2.0), b);
    }

    #[test]
    fn test_blend_zero_alpha_is_identity() {
        let base = RgbColor::new(10, 10, 10);
        let accent = RgbColor::new(0xa3, 0xe6, 0x35);
        assert_eq!(base.blend(accent, 0.0), base);
    }

    #[test]
    fn test_blend_moves_toward_overlay() {
        let base = RgbColor::new(0, 0, 0);
        let accent = RgbColor::new(200, 100, 50);
        let blended = base.blend(accent, 0.2);
        assert!(blended.r > base.r && blended.r < accent.r);
        assert!(blended.g > base.g && blended.g < accent.g);
    }

    #[test]
    fn test_dim() {
        let color = RgbColor::new(200, 100, 50);
        assert_eq!(color.dim(50), RgbColor::new(100, 50, 25));
        assert_eq!(color.dim(100), color);
        assert_eq!(color.dim(0), RgbColor::new(0, 0, 0));
    }

    #[test]
    fn test_default_is_white() {
        assert_eq!(RgbColor::default(), RgbColor::new(255, 255, 255));
    }
}
