//! Hero section: role tag, name headline, tagline, links, and portrait.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::content::{PROFILE, SOCIALS};
use crate::tui::sections::{accent_style, body_style, headline_style, SECTION_PADDING};
use crate::tui::surface::Surface;
use crate::tui::theme::Theme;

/// Section height in rows.
#[must_use]
pub fn height(_width: u16) -> u16 {
    14
}

/// Renders the hero into `area` of `buf`.
pub fn render(buf: &mut Buffer, area: Rect, theme: &Theme, pointer: Option<(u16, u16)>) {
    if area.width <= SECTION_PADDING * 2 {
        return;
    }
    let area = Rect {
        x: area.x + SECTION_PADDING,
        width: area.width - SECTION_PADDING * 2,
        ..area
    };
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    render_intro(buf, columns[0], theme);
    render_portrait(buf, columns[1], theme, pointer);
}

fn render_intro(buf: &mut Buffer, area: Rect, theme: &Theme) {
    let name = PROFILE.name.to_uppercase();
    let lines = vec![
        Line::from(vec![
            Span::styled("── ", accent_style(theme)),
            Span::styled(
                PROFILE.role.to_uppercase(),
                accent_style(theme).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(name, headline_style(theme)),
            Span::styled(".", accent_style(theme).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(PROFILE.tagline, body_style(theme)),
            Span::raw(" "),
            Span::styled(
                PROFILE.location,
                headline_style(theme).add_modifier(Modifier::BOLD),
            ),
            Span::styled(". Turning complex logic into", body_style(theme)),
        ]),
        Line::from(Span::styled("pixel-perfect interfaces.", body_style(theme))),
        Line::from(""),
        Line::from(
            SOCIALS
                .iter()
                .flat_map(|social| {
                    vec![
                        Span::styled(format!("( {social} ↗ )"), body_style(theme)),
                        Span::raw("  "),
                    ]
                })
                .collect::<Vec<_>>(),
        ),
    ];
    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

/// Portrait card: a monogram block standing in for the remote photograph,
/// which stays an opaque external reference.
fn render_portrait(buf: &mut Buffer, area: Rect, theme: &Theme, pointer: Option<(u16, u16)>) {
    if area.width < 10 || area.height < 6 {
        return;
    }
    Surface::new(theme).pointer(pointer).render(area, buf);
    let inner = Surface::inner(area);

    let monogram: String = PROFILE
        .name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect();
    let mut lines = vec![Line::from(""); usize::from(inner.height.saturating_sub(4) / 2)];
    lines.push(Line::from(Span::styled(
        monogram,
        accent_style(theme).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(PROFILE.name, headline_style(theme))));
    lines.push(Line::from(Span::styled(PROFILE.photo_url, body_style(theme))));
    Paragraph::new(lines)
        .centered()
        .wrap(Wrap { trim: true })
        .render(inner, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::ThemeId;

    #[test]
    fn test_hero_mentions_name_and_role() {
        let theme = Theme::get(ThemeId::Obsidian);
        let area = Rect::new(0, 0, 100, height(100));
        let mut buf = Buffer::empty(area);
        render(&mut buf, area, theme, None);
        let text = buffer_text(&buf);
        assert!(text.contains("NEZAR SAAB"), "missing headline: {text}");
        assert!(text.contains("FRONTEND ARCHITECT"), "missing role: {text}");
        assert!(text.contains("GitHub"));
        assert!(text.contains("LinkedIn"));
    }

    #[test]
    fn test_hero_survives_tiny_area() {
        let theme = Theme::get(ThemeId::Chic);
        let area = Rect::new(0, 0, 4, 3);
        let mut buf = Buffer::empty(area);
        render(&mut buf, area, theme, None);
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
