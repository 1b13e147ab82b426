//! Page sections: pure renderers over the active palette and static content.
//!
//! Each section exposes `height(width)` so the page compositor can size the
//! virtual page, and `render` painting into an offscreen buffer. Sections
//! hold no state; the only inputs are the palette, the static content, and
//! the pointer position (for surface hover highlights).

pub mod experience;
pub mod footer;
pub mod hero;
pub mod services;
pub mod skills;

use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::tui::theme::{FontFamily, Theme};

/// Horizontal padding applied inside every section.
pub const SECTION_PADDING: u16 = 2;

/// Headline style for the theme's typography hint.
///
/// Sans themes render bold headlines, serif themes bold italic, mono
/// themes plain — the terminal analogue of the font family token.
#[must_use]
pub fn headline_style(theme: &Theme) -> Style {
    let base = Style::default().fg(theme.text.to_ratatui_color());
    match theme.font {
        FontFamily::Sans => base.add_modifier(Modifier::BOLD),
        FontFamily::Serif => base.add_modifier(Modifier::BOLD | Modifier::ITALIC),
        FontFamily::Mono => base,
    }
}

/// Style for secondary body copy.
#[must_use]
pub fn body_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_sub.to_ratatui_color())
}

/// Style for accent-colored copy.
#[must_use]
pub fn accent_style(theme: &Theme) -> Style {
    Style::default().fg(theme.accent.to_ratatui_color())
}

/// A tag chip span, rendered as `[tag]` in muted text.
#[must_use]
pub fn chip(theme: &Theme, tag: &'static str) -> Span<'static> {
    Span::styled(format!("[{tag}]"), body_style(theme))
}

/// Number of rows `text` occupies when word-wrapped to `width` columns.
///
/// Conservative estimate used for sizing cards; a word longer than the
/// width still takes one row (the renderer truncates it).
#[must_use]
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 1;
    }
    let width = usize::from(width);
    let mut rows: u16 = 0;
    let mut current = 0usize;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if current == 0 {
            current = len.min(width);
            rows = rows.max(1);
        } else if current + 1 + len <= width {
            current += 1 + len;
        } else {
            rows += 1;
            current = len.min(width);
        }
    }
    rows.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::ThemeId;

    #[test]
    fn test_headline_style_varies_with_font() {
        let sans = headline_style(Theme::get(ThemeId::Obsidian));
        assert!(sans.add_modifier.contains(Modifier::BOLD));
        assert!(!sans.add_modifier.contains(Modifier::ITALIC));

        let serif = headline_style(Theme::get(ThemeId::Classic));
        assert!(serif.add_modifier.contains(Modifier::ITALIC));

        let mono = headline_style(Theme::get(ThemeId::Vintage));
        assert!(!mono.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_wrapped_height_single_line() {
        assert_eq!(wrapped_height("hello world", 40), 1);
    }

    #[test]
    fn test_wrapped_height_wraps() {
        // "aaaa bbbb cccc" at width 9 -> "aaaa bbbb" / "cccc"
        assert_eq!(wrapped_height("aaaa bbbb cccc", 9), 2);
    }

    #[test]
    fn test_wrapped_height_zero_width() {
        assert_eq!(wrapped_height("anything", 0), 1);
    }

    #[test]
    fn test_wrapped_height_empty() {
        assert_eq!(wrapped_height("", 40), 1);
    }
}
