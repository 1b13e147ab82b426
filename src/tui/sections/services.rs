//! Services section: five offering cards on themed surfaces.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::content::{Service, SERVICES};
use crate::tui::sections::{
    accent_style, body_style, chip, headline_style, wrapped_height, SECTION_PADDING,
};
use crate::tui::surface::Surface;
use crate::tui::theme::Theme;

/// Rows taken by the section header.
const HEADER_ROWS: u16 = 3;
/// Blank rows between cards.
const CARD_GAP: u16 = 1;

fn card_height(service: &Service, width: u16) -> u16 {
    let inner = width.saturating_sub(SECTION_PADDING * 2 + 2).max(1);
    // title + body + chips + border rows
    1 + wrapped_height(service.desc, inner) + 1 + 2
}

/// Section height in rows.
#[must_use]
pub fn height(width: u16) -> u16 {
    let cards: u16 = SERVICES
        .iter()
        .map(|service| card_height(service, width) + CARD_GAP)
        .sum();
    HEADER_ROWS + cards
}

/// Renders the services section into `area` of `buf`.
pub fn render(buf: &mut Buffer, area: Rect, theme: &Theme, pointer: Option<(u16, u16)>) {
    if area.width <= SECTION_PADDING * 2 {
        return;
    }
    let content = Rect {
        x: area.x + SECTION_PADDING,
        width: area.width - SECTION_PADDING * 2,
        ..area
    };

    let header = vec![
        Line::from(vec![
            Span::styled("I Engineer ", headline_style(theme)),
            Span::styled("Value", accent_style(theme).add_modifier(Modifier::BOLD)),
            Span::styled(".", headline_style(theme)),
        ]),
        Line::from(Span::styled(
            "From high-speed marketing pages to complex enterprise dashboards.",
            body_style(theme),
        )),
    ];
    Paragraph::new(header).render(
        Rect {
            height: HEADER_ROWS.min(content.height),
            ..content
        },
        buf,
    );

    let mut y = content.y + HEADER_ROWS;
    for service in &SERVICES {
        let h = card_height(service, area.width);
        if y + h > content.y + content.height {
            break;
        }
        let card = Rect {
            x: content.x,
            y,
            width: content.width,
            height: h,
        };
        render_card(buf, card, theme, pointer, service);
        y += h + CARD_GAP;
    }
}

fn render_card(
    buf: &mut Buffer,
    area: Rect,
    theme: &Theme,
    pointer: Option<(u16, u16)>,
    service: &Service,
) {
    Surface::new(theme).pointer(pointer).render(area, buf);
    let inner = Surface::inner(area);

    let mut lines = vec![Line::from(vec![
        Span::styled("◆ ", accent_style(theme)),
        Span::styled(service.title, headline_style(theme)),
    ])];
    lines.push(Line::from(Span::styled(service.desc, body_style(theme))));

    Paragraph::new(lines).wrap(Wrap { trim: true }).render(inner, buf);

    // Chips pinned to the card's last inner row.
    if inner.height >= 2 {
        let mut chips: Vec<Span> = Vec::new();
        for tag in service.tags {
            chips.push(chip(theme, tag));
            chips.push(Span::raw(" "));
        }
        Paragraph::new(Line::from(chips)).render(
            Rect {
                y: inner.y + inner.height - 1,
                height: 1,
                ..inner
            },
            buf,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::ThemeId;

    #[test]
    fn test_all_services_fit_in_reported_height() {
        let width = 90;
        let theme = Theme::get(ThemeId::Modern);
        let area = Rect::new(0, 0, width, height(width));
        let mut buf = Buffer::empty(area);
        render(&mut buf, area, theme, None);
        let text = buffer_text(&buf);
        for service in &SERVICES {
            assert!(text.contains(service.title), "missing {}", service.title);
        }
    }

    #[test]
    fn test_height_grows_when_narrow() {
        assert!(height(40) > height(120));
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
