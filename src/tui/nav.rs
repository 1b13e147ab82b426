//! Navigation bar: brand mark, theme button, and the dropdown menu.
//!
//! The bar occupies the top row of the viewport and stays fixed while the
//! page scrolls beneath it. The dropdown is an overlay painted after the
//! page so it sits above the content.

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::content::PROFILE;
use crate::tui::theme::{Theme, ThemeId};

/// Inner width of a dropdown row: marker + swatch + longest label.
const MENU_INNER_WIDTH: u16 = 26;

/// Navigation bar widget.
pub struct NavBar;

impl NavBar {
    /// Renders the bar: brand mark on the left, the theme button showing
    /// the active theme's label on the right.
    pub fn render(buf: &mut Buffer, area: Rect, theme: &Theme, active: ThemeId, menu_open: bool) {
        if area.height == 0 {
            return;
        }
        let button = Self::button_area(area, active);
        if area.width < button.width + 8 {
            return;
        }
        let row = Rect { height: 1, ..area };
        buf.set_style(row, Style::default().bg(theme.card.to_ratatui_color()));

        let monogram: String = PROFILE
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect();
        let brand = Line::from(vec![
            Span::raw(" "),
            Span::styled(
                format!("{monogram}."),
                Style::default()
                    .fg(theme.accent.to_ratatui_color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                PROFILE.role.to_uppercase(),
                Style::default()
                    .fg(theme.text_sub.to_ratatui_color())
                    .add_modifier(Modifier::DIM),
            ),
        ]);
        Paragraph::new(brand).render(row, buf);

        let marker = if menu_open { "▴" } else { "▾" };
        let label = Line::from(Span::styled(
            format!(" ◐ {} {marker} ", active.label()),
            Style::default()
                .fg(theme.text.to_ratatui_color())
                .bg(theme.border.to_ratatui_color()),
        ));
        Paragraph::new(label).render(button, buf);
    }

    /// Screen rectangle of the theme button within the bar.
    #[must_use]
    pub fn button_area(area: Rect, active: ThemeId) -> Rect {
        // " ◐ <label> ▾ "
        let width = active.label().chars().count() as u16 + 6;
        Rect {
            x: area.right().saturating_sub(width + 1),
            y: area.y,
            width,
            height: 1,
        }
    }

    /// Screen rectangle of the dropdown, anchored under the button.
    #[must_use]
    pub fn menu_area(area: Rect) -> Rect {
        let width = MENU_INNER_WIDTH + 2;
        let height = ThemeId::ALL.len() as u16 + 2;
        Rect {
            x: area.right().saturating_sub(width + 1),
            y: area.y + 1,
            width,
            height,
        }
    }

    /// Renders the dropdown overlay listing every registered theme.
    pub fn render_menu(buf: &mut Buffer, area: Rect, theme: &Theme, active: ThemeId, cursor: usize) {
        let menu = Self::menu_area(area);
        if menu.right() > buf.area.right() || menu.bottom() > buf.area.bottom() {
            return;
        }
        for y in menu.top()..menu.bottom() {
            for x in menu.left()..menu.right() {
                buf[(x, y)].set_symbol(" ");
                buf[(x, y)].set_bg(theme.card.to_ratatui_color());
            }
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.radius.border_type())
            .border_style(Style::default().fg(theme.border.to_ratatui_color()))
            .title(" Select Theme ");
        let inner = block.inner(menu);
        block.render(menu, buf);

        for (index, id) in ThemeId::ALL.iter().enumerate() {
            let y = inner.y + index as u16;
            if y >= inner.bottom() {
                break;
            }
            let selected = index == cursor;
            let marker = if selected { "▸ " } else { "  " };
            let swatch_color = Theme::get(*id).accent.to_ratatui_color();
            let label_style = if *id == active {
                Style::default()
                    .fg(theme.accent.to_ratatui_color())
                    .add_modifier(Modifier::BOLD)
            } else if selected {
                Style::default()
                    .fg(theme.text.to_ratatui_color())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_sub.to_ratatui_color())
            };
            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.accent.to_ratatui_color())),
                Span::styled("■ ", Style::default().fg(swatch_color)),
                Span::styled(id.label(), label_style),
            ]);
            Paragraph::new(line).render(
                Rect {
                    x: inner.x,
                    y,
                    width: inner.width,
                    height: 1,
                },
                buf,
            );
        }
    }

    /// Whether a click at `(x, y)` lands on the theme button.
    #[must_use]
    pub fn button_hit(area: Rect, active: ThemeId, x: u16, y: u16) -> bool {
        Self::button_area(area, active).contains(Position::new(x, y))
    }

    /// The menu row index under `(x, y)`, if the click lands inside the
    /// dropdown's item list.
    #[must_use]
    pub fn menu_hit(area: Rect, x: u16, y: u16) -> Option<usize> {
        let menu = Self::menu_area(area);
        let inner = Rect {
            x: menu.x + 1,
            y: menu.y + 1,
            width: menu.width.saturating_sub(2),
            height: menu.height.saturating_sub(2),
        };
        if !inner.contains(Position::new(x, y)) {
            return None;
        }
        let index = usize::from(y - inner.y);
        (index < ThemeId::ALL.len()).then_some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_bar_shows_brand_and_active_label() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        NavBar::render(
            &mut buf,
            area,
            Theme::get(ThemeId::Modern),
            ThemeId::Modern,
            false,
        );
        let text = buffer_text(&buf);
        assert!(text.contains("NS."));
        assert!(text.contains("Modern Minimalist ▾"));
    }

    #[test]
    fn test_open_marker_flips() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        NavBar::render(
            &mut buf,
            area,
            Theme::get(ThemeId::Obsidian),
            ThemeId::Obsidian,
            true,
        );
        assert!(buffer_text(&buf).contains("▴"));
    }

    #[test]
    fn test_menu_lists_every_theme() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        NavBar::render_menu(
            &mut buf,
            area,
            Theme::get(ThemeId::Obsidian),
            ThemeId::Obsidian,
            0,
        );
        let text = buffer_text(&buf);
        for id in ThemeId::ALL {
            assert!(text.contains(id.label()), "missing {}", id.label());
        }
        assert!(text.contains("▸"));
    }

    #[test]
    fn test_button_hit() {
        let area = Rect::new(0, 0, 80, 1);
        let button = NavBar::button_area(area, ThemeId::Chic);
        assert!(NavBar::button_hit(area, ThemeId::Chic, button.x, 0));
        assert!(!NavBar::button_hit(area, ThemeId::Chic, 0, 0));
    }

    #[test]
    fn test_button_width_tracks_label() {
        let area = Rect::new(0, 0, 80, 1);
        let wide = NavBar::button_area(area, ThemeId::Obsidian);
        let narrow = NavBar::button_area(area, ThemeId::Vintage);
        assert!(wide.width > narrow.width);
    }

    #[test]
    fn test_menu_hit_maps_rows_to_indices() {
        let area = Rect::new(0, 0, 80, 24);
        let menu = NavBar::menu_area(area);
        assert_eq!(NavBar::menu_hit(area, menu.x + 2, menu.y + 1), Some(0));
        assert_eq!(NavBar::menu_hit(area, menu.x + 2, menu.y + 6), Some(5));
        assert_eq!(NavBar::menu_hit(area, 0, 0), None);
    }
}
