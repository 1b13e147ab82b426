//! Status bar widget showing contextual key hints.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::tui::theme::{Theme, ThemeId};

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Renders a single row of key hints for the current context.
    pub fn render(buf: &mut Buffer, area: Rect, theme: &Theme, active: ThemeId, menu_open: bool) {
        if area.height == 0 {
            return;
        }
        let row = Rect { height: 1, ..area };
        buf.set_style(row, Style::default().bg(theme.card.to_ratatui_color()));

        let hints: &[(&str, &str)] = if menu_open {
            &[
                ("↑/↓", "Select"),
                ("Enter", "Apply"),
                ("Esc", "Close"),
            ]
        } else {
            &[
                ("t", "Theme"),
                ("1-6", "Quick theme"),
                ("↑/↓", "Scroll"),
                ("q", "Quit"),
            ]
        };

        let mut spans: Vec<Span> = vec![Span::raw(" ")];
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                *key,
                Style::default()
                    .fg(theme.accent.to_ratatui_color())
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                *action,
                Style::default().fg(theme.text_sub.to_ratatui_color()),
            ));
        }
        Paragraph::new(Line::from(spans)).render(row, buf);

        // Active theme name, right-aligned.
        let name = active.label();
        let width = name.chars().count() as u16 + 2;
        if row.width > width + 20 {
            let right = Rect {
                x: row.right().saturating_sub(width),
                width,
                ..row
            };
            Paragraph::new(Line::from(Span::styled(
                name,
                Style::default().fg(theme.text_sub.to_ratatui_color()),
            )))
            .render(right, buf);
        }
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
    fn test_main_hints() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::render(
            &mut buf,
            area,
            Theme::get(ThemeId::Obsidian),
            ThemeId::Obsidian,
            false,
        );
        let text = buffer_text(&buf);
        assert!(text.contains("Quit"));
        assert!(text.contains("Quick theme"));
        assert!(text.contains("Industrial (Current)"));
    }

    #[test]
    fn test_menu_hints() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::render(
            &mut buf,
            area,
            Theme::get(ThemeId::Modern),
            ThemeId::Modern,
            true,
        );
        let text = buffer_text(&buf);
        assert!(text.contains("Apply"));
        assert!(!text.contains("Quit"));
    }
}
