//! Experience section: job timeline and the resume download link.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::content::{Job, JOBS, PROFILE};
use crate::tui::sections::{
    accent_style, body_style, chip, headline_style, wrapped_height, SECTION_PADDING,
};
use crate::tui::theme::Theme;

const HEADER_ROWS: u16 = 2;
const RESUME_ROWS: u16 = 2;

fn job_height(job: &Job, width: u16) -> u16 {
    let inner = width.saturating_sub(SECTION_PADDING * 2 + 4).max(1);
    let bullets: u16 = job
        .bullets
        .iter()
        .map(|bullet| wrapped_height(bullet, inner))
        .sum();
    // company + role/period + location + bullets + chips + trailing blank
    3 + bullets + 1 + 1
}

/// Section height in rows.
#[must_use]
pub fn height(width: u16) -> u16 {
    let jobs: u16 = JOBS.iter().map(|job| job_height(job, width)).sum();
    HEADER_ROWS + jobs + RESUME_ROWS
}

/// Renders the experience timeline into `area` of `buf`.
pub fn render(buf: &mut Buffer, area: Rect, theme: &Theme, _pointer: Option<(u16, u16)>) {
    if area.width <= SECTION_PADDING * 2 {
        return;
    }
    let content = Rect {
        x: area.x + SECTION_PADDING,
        width: area.width - SECTION_PADDING * 2,
        ..area
    };

    let header = Line::from(vec![
        Span::styled("Professional ", headline_style(theme)),
        Span::styled("Experience", accent_style(theme).add_modifier(Modifier::BOLD)),
    ]);
    Paragraph::new(header).render(
        Rect {
            height: 1.min(content.height),
            ..content
        },
        buf,
    );

    let mut y = content.y + HEADER_ROWS;
    for job in &JOBS {
        let h = job_height(job, area.width);
        if y + h > content.bottom() {
            return;
        }
        render_job(
            buf,
            Rect {
                x: content.x,
                y,
                width: content.width,
                height: h,
            },
            theme,
            job,
        );
        y += h;
    }

    // Resume download link
    if y + RESUME_ROWS <= content.bottom() {
        let link = Line::from(vec![
            Span::styled("● ", accent_style(theme)),
            Span::styled(
                format!("Download Full Resume ({}) ↗", PROFILE.resume_path),
                headline_style(theme),
            ),
        ]);
        Paragraph::new(link).render(
            Rect {
                x: content.x,
                y,
                width: content.width,
                height: 1,
            },
            buf,
        );
    }
}

fn render_job(buf: &mut Buffer, area: Rect, theme: &Theme, job: &Job) {
    // Timeline rail down the left edge
    for y in area.top()..area.bottom() {
        buf[(area.x, y)].set_symbol("│");
        buf[(area.x, y)].set_style(body_style(theme));
    }
    buf[(area.x, area.y)].set_symbol("●");
    buf[(area.x, area.y)].set_style(accent_style(theme));

    let body = Rect {
        x: area.x + 2,
        width: area.width.saturating_sub(2),
        ..area
    };

    let mut lines = vec![
        Line::from(Span::styled(job.company, headline_style(theme))),
        Line::from(vec![
            Span::styled(job.role, accent_style(theme)),
            Span::raw("  "),
            Span::styled(job.period, body_style(theme)),
        ]),
        Line::from(Span::styled(
            job.location.to_uppercase(),
            body_style(theme).add_modifier(Modifier::DIM),
        )),
    ];
    for bullet in job.bullets {
        lines.push(Line::from(vec![
            Span::styled("▸ ", accent_style(theme)),
            Span::styled(*bullet, body_style(theme)),
        ]));
    }
    let mut chips: Vec<Span> = Vec::new();
    for skill in job.skills {
        chips.push(chip(theme, skill));
        chips.push(Span::raw(" "));
    }
    lines.push(Line::from(chips));

    Paragraph::new(lines).wrap(Wrap { trim: true }).render(body, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::ThemeId;

    #[test]
    fn test_timeline_lists_all_jobs() {
        let theme = Theme::get(ThemeId::Vintage);
        let area = Rect::new(0, 0, 100, height(100));
        let mut buf = Buffer::empty(area);
        render(&mut buf, area, theme, None);
        let text = buffer_text(&buf);
        for job in &JOBS {
            assert!(text.contains(job.company), "missing {}", job.company);
        }
        assert!(text.contains("Download Full Resume"));
        assert!(text.contains(PROFILE.resume_path));
    }

    #[test]
    fn test_height_accounts_for_narrow_wrapping() {
        assert!(height(50) > height(150));
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
