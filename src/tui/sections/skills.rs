//! Skills section: the "Built for Scale" stack grid.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::content::{SKILLS_LEAD_BODY, SKILLS_LEAD_TAGS, SKILLS_LEAD_TITLE, STACKS};
use crate::tui::sections::{accent_style, body_style, chip, headline_style, SECTION_PADDING};
use crate::tui::surface::Surface;
use crate::tui::theme::Theme;

const HEADER_ROWS: u16 = 2;
const LEAD_CARD_ROWS: u16 = 7;
const STACK_CARD_ROWS: u16 = 4;

/// Section height in rows.
#[must_use]
pub fn height(_width: u16) -> u16 {
    // header + lead card + two rows of stack cards with a gap each
    HEADER_ROWS + LEAD_CARD_ROWS + 1 + STACK_CARD_ROWS + 1 + STACK_CARD_ROWS
}

/// Renders the skills grid into `area` of `buf`.
pub fn render(buf: &mut Buffer, area: Rect, theme: &Theme, pointer: Option<(u16, u16)>) {
    if area.width <= SECTION_PADDING * 2 {
        return;
    }
    let content = Rect {
        x: area.x + SECTION_PADDING,
        width: area.width - SECTION_PADDING * 2,
        ..area
    };

    let header = Line::from(vec![
        Span::styled("Built for ", headline_style(theme)),
        Span::styled("Scale", accent_style(theme).add_modifier(Modifier::BOLD)),
        Span::styled(".", headline_style(theme)),
    ]);
    Paragraph::new(header).render(
        Rect {
            height: 1.min(content.height),
            ..content
        },
        buf,
    );

    // Lead card
    let lead = Rect {
        x: content.x,
        y: content.y + HEADER_ROWS,
        width: content.width,
        height: LEAD_CARD_ROWS,
    };
    if lead.bottom() <= content.bottom() {
        render_lead(buf, lead, theme, pointer);
    }

    // Stack cards, two per row
    let mut y = lead.bottom() + 1;
    for pair in STACKS.chunks(2) {
        let row = Rect {
            x: content.x,
            y,
            width: content.width,
            height: STACK_CARD_ROWS,
        };
        if row.bottom() > content.bottom() {
            break;
        }
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row);
        for (stack, cell) in pair.iter().zip(halves.iter()) {
            Surface::new(theme).pointer(pointer).render(*cell, buf);
            let inner = Surface::inner(*cell);
            let lines = vec![
                Line::from(vec![
                    Span::styled("▪ ", accent_style(theme)),
                    Span::styled(stack.title, headline_style(theme)),
                ]),
                Line::from(Span::styled(stack.sub, body_style(theme))),
            ];
            Paragraph::new(lines).render(inner, buf);
        }
        y += STACK_CARD_ROWS + 1;
    }
}

fn render_lead(buf: &mut Buffer, area: Rect, theme: &Theme, pointer: Option<(u16, u16)>) {
    Surface::new(theme).pointer(pointer).render(area, buf);
    let inner = Surface::inner(area);
    let mut lines = vec![
        Line::from(Span::styled(SKILLS_LEAD_TITLE, headline_style(theme))),
        Line::from(Span::styled(SKILLS_LEAD_BODY, body_style(theme))),
        Line::from(""),
    ];
    let mut chips: Vec<Span> = Vec::new();
    for tag in SKILLS_LEAD_TAGS {
        chips.push(chip(theme, tag));
        chips.push(Span::raw(" "));
    }
    lines.push(Line::from(chips));
    Paragraph::new(lines).wrap(Wrap { trim: true }).render(inner, buf);
}
