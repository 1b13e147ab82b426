//! Decorative background compositor.
//!
//! Pure rendering function of the active palette and the pointer tracker's
//! coordinate streams. Layers, back to front: solid fill, cell-grid lines,
//! a tiled procedural noise overlay, two soft radial color fields riding
//! the spring streams, and one static field centered in the viewport.
//!
//! The background writes only cell backgrounds and never participates in
//! hit-testing; foreground widgets simply paint over it.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::models::RgbColor;
use crate::motion::PointerTracker;
use crate::tui::theme::Theme;

/// Opacity of the grid line layer.
const GRID_ALPHA: f32 = 0.03;
/// Column spacing of vertical grid lines.
const GRID_COLS: u16 = 10;
/// Row spacing of horizontal grid lines.
const GRID_ROWS: u16 = 5;

/// Opacity of the noise overlay.
const NOISE_ALPHA: f32 = 0.08;

/// Radius (in columns) and opacity of the pointer-following field.
const PRIMARY_RADIUS: f32 = 28.0;
const PRIMARY_ALPHA: f32 = 0.20;

/// Radius and opacity of the mirrored counter field.
const SECONDARY_RADIUS: f32 = 22.0;
const SECONDARY_ALPHA: f32 = 0.15;

/// Radius and opacity of the static center glow.
const CENTER_RADIUS: f32 = 38.0;
const CENTER_ALPHA: f32 = 0.05;

/// Terminal cells are roughly twice as tall as wide; vertical distances
/// are scaled so the radial fields read as circles.
const CELL_ASPECT: f32 = 2.0;

/// Paints the full decorative background into `area` of `buf`.
///
/// With an unmounted tracker only the solid theme fill is painted — the
/// static fallback that keeps pre-viewport pointer state invisible.
pub fn render(buf: &mut Buffer, area: Rect, theme: &Theme, tracker: &PointerTracker) {
    fill(buf, area, theme.bg);

    if !tracker.is_mounted() {
        return;
    }

    let (px, py) = tracker.primary();
    let (sx, sy) = tracker.secondary();
    let center = (
        f32::from(area.x) + f32::from(area.width) / 2.0,
        f32::from(area.y) + f32::from(area.height) / 2.0,
    );

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let mut color = theme.bg;

            // Technical grid overlay
            if x % GRID_COLS == 0 || y % GRID_ROWS == 0 {
                color = color.blend(theme.text_sub, GRID_ALPHA);
            }

            // Tiled noise texture (deterministic hash per cell)
            color = color.blend(theme.text, noise_at(x, y) * NOISE_ALPHA);

            // Primary field follows the pointer
            let (fx, fy) = (f32::from(x), f32::from(y));
            color = radial(color, theme.accent, fx, fy, px, py, PRIMARY_RADIUS, PRIMARY_ALPHA);

            // Counter field mirrors it across the viewport center
            color = radial(
                color,
                theme.accent,
                fx,
                fy,
                sx,
                sy,
                SECONDARY_RADIUS,
                SECONDARY_ALPHA,
            );

            // Ambient center glow
            color = radial(
                color,
                theme.text,
                fx,
                fy,
                center.0,
                center.1,
                CENTER_RADIUS,
                CENTER_ALPHA,
            );

            buf[(x, y)].set_bg(color.to_ratatui_color());
        }
    }
}

/// Fills `area` with a solid background color, clearing symbols.
pub fn fill(buf: &mut Buffer, area: Rect, color: RgbColor) {
    buf.set_style(area, Style::default().bg(color.to_ratatui_color()));
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            buf[(x, y)].set_symbol(" ");
        }
    }
}

/// Blends `overlay` into `base` with a smooth falloff around `(cx, cy)`.
#[allow(clippy::too_many_arguments)]
fn radial(
    base: RgbColor,
    overlay: RgbColor,
    x: f32,
    y: f32,
    cx: f32,
    cy: f32,
    radius: f32,
    alpha: f32,
) -> RgbColor {
    let dx = x - cx;
    let dy = (y - cy) * CELL_ASPECT;
    let distance = (dx * dx + dy * dy).sqrt();
    if distance >= radius {
        return base;
    }
    // Smoothstep falloff from full alpha at the center to zero at the rim.
    let t = 1.0 - distance / radius;
    let falloff = t * t * (3.0 - 2.0 * t);
    base.blend(overlay, alpha * falloff)
}

/// Deterministic per-cell noise value in 0.0..1.0.
fn noise_at(x: u16, y: u16) -> f32 {
    let mut h = u32::from(x).wrapping_mul(374_761_393);
    h = h.wrapping_add(u32::from(y).wrapping_mul(668_265_263));
    h = (h ^ (h >> 13)).wrapping_mul(1_274_126_177);
    h ^= h >> 16;
    (h & 0xff) as f32 / 255.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::{Theme, ThemeId};

    fn buffer(width: u16, height: u16) -> Buffer {
        Buffer::empty(Rect::new(0, 0, width, height))
    }

    #[test]
    fn test_unmounted_tracker_renders_flat_fill() {
        let theme = Theme::get(ThemeId::Obsidian);
        let tracker = PointerTracker::new();
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = buffer(20, 10);
        render(&mut buf, area, theme, &tracker);

        let expected = theme.bg.to_ratatui_color();
        for y in 0..10 {
            for x in 0..20 {
                assert_eq!(buf[(x, y)].style().bg, Some(expected), "cell ({x},{y})");
            }
        }
    }

    #[test]
    fn test_mounted_tracker_tints_cells_near_pointer() {
        let theme = Theme::get(ThemeId::Obsidian);
        let mut tracker = PointerTracker::new();
        tracker.mount(60, 24);
        tracker.record(10, 5);
        // Let the spring reach the pointer so the field sits on it.
        for _ in 0..600 {
            tracker.tick(1.0 / 60.0);
        }
        let area = Rect::new(0, 0, 60, 24);
        let mut buf = buffer(60, 24);
        render(&mut buf, area, theme, &tracker);

        // The cell under the pointer leans toward the accent: for obsidian
        // (near-black bg, lime accent) the green channel rises visibly.
        let under = buf[(10u16, 5u16)].style().bg;
        let Some(ratatui::style::Color::Rgb(_, g, _)) = under else {
            panic!("expected RGB background, got {under:?}");
        };
        assert!(g > theme.bg.g + 10, "green channel not lifted: {g}");
    }

    #[test]
    fn test_noise_is_deterministic_and_bounded() {
        for x in 0..50u16 {
            for y in 0..50u16 {
                let a = noise_at(x, y);
                let b = noise_at(x, y);
                assert!((a - b).abs() < f32::EPSILON);
                assert!((0.0..=1.0).contains(&a));
            }
        }
    }

    #[test]
    fn test_noise_varies_across_cells() {
        let reference = noise_at(0, 0);
        let differing = (0..100u16).any(|x| (noise_at(x, 7) - reference).abs() > 0.01);
        assert!(differing, "noise should not be constant");
    }

    #[test]
    fn test_radial_outside_radius_is_identity() {
        let base = RgbColor::new(10, 10, 10);
        let overlay = RgbColor::new(200, 200, 200);
        let out = radial(base, overlay, 100.0, 0.0, 0.0, 0.0, 30.0, 0.5);
        assert_eq!(out, base);
    }

    #[test]
    fn test_radial_center_has_full_alpha() {
        let base = RgbColor::new(0, 0, 0);
        let overlay = RgbColor::new(200, 0, 0);
        let center = radial(base, overlay, 0.0, 0.0, 0.0, 0.0, 30.0, 0.5);
        assert_eq!(center, base.blend(overlay, 0.5));
    }
}
