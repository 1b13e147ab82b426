//! Themed surface: a bordered card with a hover-local radial highlight.
//!
//! Surfaces are constructed per frame and styled entirely from the active
//! palette (card fill, border color, corner style). When the pointer is
//! inside the surface the latest relative coordinate — no smoothing — is
//! used as the center of a low-alpha accent gradient over the card fill.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Widget};

use crate::models::RgbColor;
use crate::tui::theme::Theme;

/// Radius (in columns) of the hover highlight.
const HIGHLIGHT_RADIUS: f32 = 18.0;
/// Peak opacity of the hover highlight.
const HIGHLIGHT_ALPHA: f32 = 0.12;
/// Cell aspect correction, matching the background compositor.
const CELL_ASPECT: f32 = 2.0;

/// A reusable bordered container keyed to the active theme.
#[derive(Debug, Clone, Copy)]
pub struct Surface<'a> {
    theme: &'a Theme,
    /// Pointer position in the same coordinate space as the render area,
    /// if the pointer is currently known.
    pointer: Option<(u16, u16)>,
}

impl<'a> Surface<'a> {
    /// Creates a surface for the given palette with no pointer.
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            pointer: None,
        }
    }

    /// Supplies the pointer position used for the hover highlight.
    #[must_use]
    pub const fn pointer(mut self, pointer: Option<(u16, u16)>) -> Self {
        self.pointer = pointer;
        self
    }

    /// The content area inside the card border.
    #[must_use]
    pub fn inner(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }

    /// Pointer position relative to `area`, if the pointer hovers it.
    #[must_use]
    pub fn local_pointer(area: Rect, pointer: Option<(u16, u16)>) -> Option<(u16, u16)> {
        let (x, y) = pointer?;
        if area.contains(ratatui::layout::Position::new(x, y)) {
            Some((x - area.x, y - area.y))
        } else {
            None
        }
    }

    /// Card fill color at a local coordinate, accounting for the hover
    /// highlight centered on `local`.
    #[must_use]
    pub fn fill_at(theme: &Theme, local: Option<(u16, u16)>, x: u16, y: u16) -> RgbColor {
        let Some((cx, cy)) = local else {
            return theme.card;
        };
        let dx = f32::from(x) - f32::from(cx);
        let dy = (f32::from(y) - f32::from(cy)) * CELL_ASPECT;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance >= HIGHLIGHT_RADIUS {
            return theme.card;
        }
        let t = 1.0 - distance / HIGHLIGHT_RADIUS;
        let falloff = t * t * (3.0 - 2.0 * t);
        theme.card.blend(theme.accent, HIGHLIGHT_ALPHA * falloff)
    }
}

impl Widget for Surface<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        // Hover is a pure function of the latest pointer sample; no state
        // survives between frames.
        let local = Self::local_pointer(area, self.pointer);

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let fill = Self::fill_at(self.theme, local, x - area.x, y - area.y);
                let cell = &mut buf[(x, y)];
                cell.set_symbol(" ");
                cell.set_bg(fill.to_ratatui_color());
            }
        }

        Block::default()
            .borders(Borders::ALL)
            .border_type(self.theme.radius.border_type())
            .border_style(Style::default().fg(self.theme.border.to_ratatui_color()))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::{Theme, ThemeId};

    fn render_surface(theme: &Theme, pointer: Option<(u16, u16)>) -> Buffer {
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        Surface::new(theme).pointer(pointer).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_card_fill_and_border_colors() {
        let theme = Theme::get(ThemeId::Obsidian);
        let buf = render_surface(theme, None);
        // Interior carries the card fill.
        assert_eq!(
            buf[(5u16, 5u16)].style().bg,
            Some(theme.card.to_ratatui_color())
        );
        // Border glyphs carry the border color.
        assert_eq!(
            buf[(0u16, 0u16)].style().fg,
            Some(theme.border.to_ratatui_color())
        );
    }

    #[test]
    fn test_no_highlight_without_hover() {
        let theme = Theme::get(ThemeId::Obsidian);
        let buf = render_surface(theme, Some((200, 200)));
        let expected = theme.card.to_ratatui_color();
        for y in 1..11u16 {
            for x in 1..39u16 {
                assert_eq!(buf[(x, y)].style().bg, Some(expected));
            }
        }
    }

    #[test]
    fn test_hover_highlights_cell_under_pointer() {
        let theme = Theme::get(ThemeId::Obsidian);
        let buf = render_surface(theme, Some((10, 6)));
        let under = buf[(10u16, 6u16)].style().bg;
        assert_ne!(under, Some(theme.card.to_ratatui_color()));
    }

    #[test]
    fn test_highlight_fades_with_distance() {
        let theme = Theme::get(ThemeId::Obsidian);
        let local = Some((10u16, 6u16));
        let near = Surface::fill_at(theme, local, 10, 6);
        let far = Surface::fill_at(theme, local, 38, 6);
        // Near the pointer the fill leans toward accent; far away it is
        // the plain card color.
        assert_ne!(near, theme.card);
        assert_eq!(far, theme.card);
    }

    #[test]
    fn test_local_pointer_translation() {
        let area = Rect::new(10, 5, 20, 8);
        assert_eq!(Surface::local_pointer(area, Some((12, 6))), Some((2, 1)));
        assert_eq!(Surface::local_pointer(area, Some((5, 6))), None);
        assert_eq!(Surface::local_pointer(area, None), None);
    }

    #[test]
    fn test_corner_style_follows_theme() {
        // Classic renders plain corners, obsidian rounded ones.
        let classic = render_surface(Theme::get(ThemeId::Classic), None);
        assert_eq!(classic[(0u16, 0u16)].symbol(), "┌");
        let obsidian = render_surface(Theme::get(ThemeId::Obsidian), None);
        assert_eq!(obsidian[(0u16, 0u16)].symbol(), "╭");
    }
}
