//! Footer section: call to action, contact link, and the bottom line.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::content::PROFILE;
use crate::tui::sections::{accent_style, body_style, headline_style, SECTION_PADDING};
use crate::tui::theme::Theme;

/// Section height in rows.
#[must_use]
pub fn height(_width: u16) -> u16 {
    8
}

/// Renders the footer into `area` of `buf`.
pub fn render(buf: &mut Buffer, area: Rect, theme: &Theme, _pointer: Option<(u16, u16)>) {
    if area.width <= SECTION_PADDING * 2 {
        return;
    }
    let content = Rect {
        x: area.x + SECTION_PADDING,
        width: area.width - SECTION_PADDING * 2,
        ..area
    };

    let lines = vec![
        Line::from(Span::styled("LET'S WORK", headline_style(theme))),
        Line::from(Span::styled(
            "TOGETHER",
            accent_style(theme).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("✉ ", accent_style(theme)),
            Span::styled(
                format!("mailto:{}", PROFILE.email),
                headline_style(theme).add_modifier(Modifier::UNDERLINED),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("DUBAI, UNITED ARAB EMIRATES", body_style(theme)),
            Span::raw("   "),
            Span::styled(PROFILE.copyright, body_style(theme)),
        ]),
    ];
    Paragraph::new(lines).centered().render(content, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::ThemeId;

    #[test]
    fn test_footer_has_mailto_contact() {
        let theme = Theme::get(ThemeId::Classic);
        let area = Rect::new(0, 0, 80, height(80));
        let mut buf = Buffer::empty(area);
        render(&mut buf, area, theme, None);
        let text = buffer_text(&buf);
        assert!(text.contains(&format!("mailto:{}", PROFILE.email)));
        assert!(text.contains("TOGETHER"));
    }

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
}
