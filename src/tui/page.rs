//! Page compositor: stacks the sections into a virtual page and blits the
//! scrolled window over the background.
//!
//! Sections render into an offscreen buffer sized to the full page, then
//! only the cells a section actually painted are copied into the visible
//! viewport. Untouched cells stay transparent, so the viewport-fixed
//! background shows through the gaps between sections.

use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::Rect;

use crate::tui::sections::{experience, footer, hero, services, skills};
use crate::tui::theme::Theme;

/// Blank rows between stacked sections.
const SECTION_GAP: u16 = 1;

/// Total virtual page height at the given width.
#[must_use]
pub fn total_height(width: u16) -> u16 {
    hero::height(width)
        + SECTION_GAP
        + services::height(width)
        + SECTION_GAP
        + skills::height(width)
        + SECTION_GAP
        + experience::height(width)
        + SECTION_GAP
        + footer::height(width)
}

/// Largest useful scroll offset for a viewport of the given height.
#[must_use]
pub fn max_scroll(width: u16, viewport_height: u16) -> u16 {
    total_height(width).saturating_sub(viewport_height)
}

/// Renders the page window at `scroll` into `viewport` of `buf`.
///
/// `pointer` is the hover position in screen coordinates; it is translated
/// into page space so surface highlights track the content as it scrolls.
pub fn render(
    buf: &mut Buffer,
    viewport: Rect,
    theme: &Theme,
    scroll: u16,
    pointer: Option<(u16, u16)>,
) {
    if viewport.width == 0 || viewport.height == 0 {
        return;
    }
    let height = total_height(viewport.width);
    let page_area = Rect::new(0, 0, viewport.width, height);
    let mut page = Buffer::empty(page_area);

    // Screen hover position into page coordinates.
    let page_pointer = pointer.and_then(|(x, y)| {
        if x < viewport.x || y < viewport.y {
            return None;
        }
        Some((x - viewport.x, (y - viewport.y).checked_add(scroll)?))
    });

    let mut y = 0;
    for (render_fn, height_fn) in SECTIONS {
        let h = height_fn(viewport.width);
        let area = Rect::new(0, y, viewport.width, h);
        render_fn(&mut page, area, theme, page_pointer);
        y += h + SECTION_GAP;
    }

    blit(buf, viewport, &page, scroll);
}

type RenderFn = fn(&mut Buffer, Rect, &Theme, Option<(u16, u16)>);
type HeightFn = fn(u16) -> u16;

/// Sections in page order.
const SECTIONS: [(RenderFn, HeightFn); 5] = [
    (hero::render, hero::height),
    (services::render, services::height),
    (skills::render, skills::height),
    (experience::render, experience::height),
    (footer::render, footer::height),
];

/// Copies painted cells from the page window into the viewport.
///
/// Cells whose background was never set keep the destination background,
/// so plain text picks up the tint the compositor painted beneath it.
fn blit(buf: &mut Buffer, viewport: Rect, page: &Buffer, scroll: u16) {
    let empty = Cell::default();
    for row in 0..viewport.height {
        let Some(src_y) = scroll.checked_add(row) else {
            break;
        };
        if src_y >= page.area.height {
            break;
        }
        for x in 0..viewport.width {
            let cell = &page[(x, src_y)];
            if *cell == empty {
                continue;
            }
            let dest = &mut buf[(viewport.x + x, viewport.y + row)];
            let dest_bg = dest.bg;
            *dest = cell.clone();
            if dest.bg == ratatui::style::Color::Reset {
                dest.bg = dest_bg;
            }
        }
    }
}
