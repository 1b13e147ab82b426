//! Theme registry: six fixed palettes selectable at runtime.
//!
//! Every visual component resolves its concrete colors through the active
//! [`Theme`]. Lookup is total: a [`ThemeId`] can only name one of the six
//! registered palettes, so there is no error case anywhere in the theme
//! path.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::RgbColor;

/// Identifier for a registered theme.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    /// Industrial dark: deep black with electric lime
    #[default]
    Obsidian,
    /// Modern minimalist: white with vivid blue
    Modern,
    /// Timeless classic: cream with gold, serif typography
    Classic,
    /// Retro 70s: espresso with burnt orange
    Vintage,
    /// Chic and soft: light rose with coral, pill corners
    Chic,
    /// Corporate pro: slate with sky blue
    Professional,
}

impl ThemeId {
    /// All registered theme identifiers, in menu order.
    pub const ALL: [Self; 6] = [
        Self::Obsidian,
        Self::Modern,
        Self::Classic,
        Self::Vintage,
        Self::Chic,
        Self::Professional,
    ];

    /// Human-readable display label shown in the theme menu.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Obsidian => "Industrial (Current)",
            Self::Modern => "Modern Minimalist",
            Self::Classic => "Timeless Classic",
            Self::Vintage => "Retro 70s",
            Self::Chic => "Chic & Soft",
            Self::Professional => "Corporate Pro",
        }
    }

    /// Configuration name (lowercase identifier used in config and CLI).
    #[must_use]
    pub const fn config_name(self) -> &'static str {
        match self {
            Self::Obsidian => "obsidian",
            Self::Modern => "modern",
            Self::Classic => "classic",
            Self::Vintage => "vintage",
            Self::Chic => "chic",
            Self::Professional => "professional",
        }
    }

    /// Picks a startup theme from the OS dark/light preference.
    ///
    /// Dark, unspecified, and detection errors all map to the dark default.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::Classic,
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::Obsidian,
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.config_name())
    }
}

/// Type-face family selector.
///
/// A terminal renders one font, so the family acts as a typography hint:
/// serif themes style headlines italic, mono themes leave them plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontFamily {
    /// Default sans treatment (bold headlines)
    Sans,
    /// Serif treatment (bold italic headlines)
    Serif,
    /// Monospace treatment (plain headlines)
    Mono,
}

/// Corner-rounding selector, mapped onto ratatui border sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CornerStyle {
    /// Square corners (plain borders)
    Sharp,
    /// Rounded corners
    Rounded,
    /// Very round, pill-like (double borders as the heaviest rounding cue)
    Pill,
}

impl CornerStyle {
    /// The ratatui border set used for surfaces under this style.
    #[must_use]
    pub const fn border_type(self) -> ratatui::widgets::BorderType {
        match self {
            Self::Sharp => ratatui::widgets::BorderType::Plain,
            Self::Rounded => ratatui::widgets::BorderType::Rounded,
            Self::Pill => ratatui::widgets::BorderType::Double,
        }
    }
}

/// A complete theme palette.
///
/// Immutable, defined at process start, never mutated. Components receive
/// the active palette by reference; during a theme crossfade they receive
/// an interpolated copy instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Page background
    pub bg: RgbColor,
    /// Surface (card) fill
    pub card: RgbColor,
    /// Primary text
    pub text: RgbColor,
    /// Secondary text for labels and body copy
    pub text_sub: RgbColor,
    /// Accent for highlights, swatches, and the background blobs
    pub accent: RgbColor,
    /// Border color for surfaces and separators
    pub border: RgbColor,
    /// Typography hint
    pub font: FontFamily,
    /// Corner-rounding hint
    pub radius: CornerStyle,
}

impl Theme {
    /// Resolves a theme id to its registered palette. Total function:
    /// every id maps to exactly one palette and lookup cannot fail.
    #[must_use]
    pub const fn get(id: ThemeId) -> &'static Self {
        match id {
            ThemeId::Obsidian => &OBSIDIAN,
            ThemeId::Modern => &MODERN,
            ThemeId::Classic => &CLASSIC,
            ThemeId::Vintage => &VINTAGE,
            ThemeId::Chic => &CHIC,
            ThemeId::Professional => &PROFESSIONAL,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        *Self::get(ThemeId::default())
    }
}

/// Industrial dark palette.
pub const OBSIDIAN: Theme = Theme {
    bg: RgbColor::new(0x0a, 0x0a, 0x0a),
    card: RgbColor::new(0x17, 0x17, 0x17),
    text: RgbColor::new(0xff, 0xff, 0xff),
    text_sub: RgbColor::new(0xa3, 0xa3, 0xa3),
    accent: RgbColor::new(0xa3, 0xe6, 0x35),
    border: RgbColor::new(0x26, 0x26, 0x26),
    font: FontFamily::Sans,
    radius: CornerStyle::Rounded,
};

/// Modern minimalist palette.
pub const MODERN: Theme = Theme {
    bg: RgbColor::new(0xff, 0xff, 0xff),
    card: RgbColor::new(0xf3, 0xf4, 0xf6),
    text: RgbColor::new(0x18, 0x18, 0x1b),
    text_sub: RgbColor::new(0x52, 0x52, 0x5b),
    accent: RgbColor::new(0x3b, 0x82, 0xf6),
    border: RgbColor::new(0xe4, 0xe4, 0xe7),
    font: FontFamily::Sans,
    radius: CornerStyle::Rounded,
};

/// Timeless classic palette (serif, sharp corners).
pub const CLASSIC: Theme = Theme {
    bg: RgbColor::new(0xfd, 0xfb, 0xf7),
    card: RgbColor::new(0xff, 0xff, 0xff),
    text: RgbColor::new(0x2c, 0x24, 0x20),
    text_sub: RgbColor::new(0x59, 0x4a, 0x42),
    accent: RgbColor::new(0xd4, 0xaf, 0x37),
    border: RgbColor::new(0xe6, 0xe0, 0xd4),
    font: FontFamily::Serif,
    radius: CornerStyle::Sharp,
};

/// Retro 70s palette.
pub const VINTAGE: Theme = Theme {
    bg: RgbColor::new(0x2b, 0x21, 0x1e),
    card: RgbColor::new(0x4a, 0x3b, 0x32),
    text: RgbColor::new(0xfc, 0xec, 0xd0),
    text_sub: RgbColor::new(0xd4, 0xa3, 0x73),
    accent: RgbColor::new(0xe7, 0x6f, 0x51),
    border: RgbColor::new(0x5e, 0x4b, 0x40),
    font: FontFamily::Mono,
    radius: CornerStyle::Rounded,
};

/// Chic and soft palette (pill corners).
pub const CHIC: Theme = Theme {
    bg: RgbColor::new(0xff, 0xf1, 0xf2),
    card: RgbColor::new(0xff, 0xff, 0xff),
    text: RgbColor::new(0x4c, 0x05, 0x19),
    text_sub: RgbColor::new(0x9f, 0x12, 0x39),
    accent: RgbColor::new(0xfb, 0x71, 0x85),
    border: RgbColor::new(0xfe, 0xcd, 0xd3),
    font: FontFamily::Sans,
    radius: CornerStyle::Pill,
};

/// Corporate pro palette.
pub const PROFESSIONAL: Theme = Theme {
    bg: RgbColor::new(0x0f, 0x17, 0x2a),
    card: RgbColor::new(0x1e, 0x29, 0x3b),
    text: RgbColor::new(0xf8, 0xfa, 0xfc),
    text_sub: RgbColor::new(0x94, 0xa3, 0xb8),
    accent: RgbColor::new(0x38, 0xbd, 0xf8),
    border: RgbColor::new(0x33, 0x41, 0x55),
    font: FontFamily::Sans,
    radius: CornerStyle::Rounded,
};
