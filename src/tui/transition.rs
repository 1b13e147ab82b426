//! Declarative theme crossfade.
//!
//! Switching themes does not swap palettes instantly: the old palette
//! fades into the new one over a fixed duration along an eased curve.
//! This is a transition policy, not a physics simulation — sampling is a
//! pure function of elapsed time, which keeps it deterministic and lets
//! tests simulate the clock.

use std::time::{Duration, Instant};

use crate::tui::theme::Theme;

/// Default crossfade duration.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(700);

/// Ease-in-out cubic curve over `t` in 0.0..=1.0.
#[must_use]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Interpolates between two palettes at eased progress `t`.
///
/// Colors blend channel-wise; the discrete selectors (font, corners)
/// switch at the midpoint of the fade.
#[must_use]
pub fn lerp_theme(from: &Theme, to: &Theme, t: f32) -> Theme {
    let t = t.clamp(0.0, 1.0);
    let discrete = if t < 0.5 { from } else { to };
    Theme {
        bg: from.bg.lerp(to.bg, t),
        card: from.card.lerp(to.card, t),
        text: from.text.lerp(to.text, t),
        text_sub: from.text_sub.lerp(to.text_sub, t),
        accent: from.accent.lerp(to.accent, t),
        border: from.border.lerp(to.border, t),
        font: discrete.font,
        radius: discrete.radius,
    }
}

/// An in-flight crossfade between two palettes.
#[derive(Debug, Clone, Copy)]
pub struct ThemeTransition {
    from: Theme,
    to: Theme,
    started: Instant,
    duration: Duration,
}

impl ThemeTransition {
    /// Starts a crossfade from `from` to `to` at `started`.
    #[must_use]
    pub const fn new(from: Theme, to: Theme, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
        }
    }

    /// Target palette of the fade.
    #[must_use]
    pub const fn target(&self) -> &Theme {
        &self.to
    }

    /// Palette at the given elapsed time since the fade started.
    #[must_use]
    pub fn sample_at(&self, elapsed: Duration) -> Theme {
        if self.duration.is_zero() {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        lerp_theme(&self.from, &self.to, ease_in_out_cubic(t))
    }

    /// Palette at wall-clock time `now`.
    #[must_use]
    pub fn sample(&self, now: Instant) -> Theme {
        self.sample_at(now.saturating_duration_since(self.started))
    }

    /// Whether the fade has run to completion at `now`.
    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::{CornerStyle, FontFamily, CLASSIC, OBSIDIAN};

    #[test]
    fn test_easing_endpoints() {
        assert!((ease_in_out_cubic(0.0) - 0.0).abs() < f32::EPSILON);
        assert!((ease_in_out_cubic(1.0) - 1.0).abs() < f32::EPSILON);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_easing_is_monotone() {
        let mut previous = 0.0;
        for i in 0..=100 {
            let value = ease_in_out_cubic(i as f32 / 100.0);
            assert!(value + 1e-6 >= previous);
            previous = value;
        }
    }

    #[test]
    fn test_lerp_theme_endpoints() {
        assert_eq!(lerp_theme(&OBSIDIAN, &CLASSIC, 0.0), OBSIDIAN);
        assert_eq!(lerp_theme(&OBSIDIAN, &CLASSIC, 1.0), CLASSIC);
    }

    #[test]
    fn test_discrete_fields_switch_at_midpoint() {
        let early = lerp_theme(&OBSIDIAN, &CLASSIC, 0.25);
        assert_eq!(early.font, FontFamily::Sans);
        assert_eq!(early.radius, CornerStyle::Rounded);

        let late = lerp_theme(&OBSIDIAN, &CLASSIC, 0.75);
        assert_eq!(late.font, FontFamily::Serif);
        assert_eq!(late.radius, CornerStyle::Sharp);
    }

    #[test]
    fn test_sample_at_elapsed() {
        let start = Instant::now();
        let fade = ThemeTransition::new(OBSIDIAN, CLASSIC, start, DEFAULT_DURATION);
        assert_eq!(fade.sample_at(Duration::ZERO), OBSIDIAN);
        assert_eq!(fade.sample_at(DEFAULT_DURATION), CLASSIC);
        assert_eq!(fade.sample_at(Duration::from_secs(10)), CLASSIC);
    }

    #[test]
    fn test_midfade_background_is_between_endpoints() {
        let start = Instant::now();
        let fade = ThemeTransition::new(OBSIDIAN, CLASSIC, start, DEFAULT_DURATION);
        let mid = fade.sample_at(DEFAULT_DURATION / 2);
        assert!(mid.bg.r > OBSIDIAN.bg.r);
        assert!(mid.bg.r < CLASSIC.bg.r);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let start = Instant::now();
        let fade = ThemeTransition::new(OBSIDIAN, CLASSIC, start, Duration::ZERO);
        assert_eq!(fade.sample_at(Duration::ZERO), CLASSIC);
        assert!(fade.is_complete(start));
    }

    #[test]
    fn test_is_complete_after_duration() {
        let start = Instant::now();
        let fade = ThemeTransition::new(OBSIDIAN, CLASSIC, start, Duration::from_millis(100));
        assert!(!fade.is_complete(start));
        assert!(fade.is_complete(start + Duration::from_millis(100)));
        assert!(fade.is_complete(start + Duration::from_secs(1)));
    }
}
