//! Integration tests for the theme registry and crossfade.

use std::time::{Duration, Instant};

use folio::tui::theme::{Theme, ThemeId};
use folio::tui::transition::{lerp_theme, ThemeTransition, DEFAULT_DURATION};

#[test]
fn test_every_id_resolves_to_a_distinct_palette() {
    let mut seen = Vec::new();
    for id in ThemeId::ALL {
        let theme = *Theme::get(id);
        assert!(!seen.contains(&theme), "{id} duplicates another palette");
        seen.push(theme);
    }
}

#[test]
fn test_palettes_keep_text_and_background_apart() {
    for id in ThemeId::ALL {
        let theme = Theme::get(id);
        assert_ne!(theme.text, theme.bg, "{id}: text on same-colored bg");
        assert_ne!(theme.accent, theme.bg, "{id}: invisible accent");
    }
}

#[test]
fn test_crossfade_between_every_pair_hits_both_endpoints() {
    for from_id in ThemeId::ALL {
        for to_id in ThemeId::ALL {
            let from = Theme::get(from_id);
            let to = Theme::get(to_id);
            assert_eq!(lerp_theme(from, to, 0.0), *from);
            assert_eq!(lerp_theme(from, to, 1.0), *to);
        }
    }
}

#[test]
fn test_midfade_colors_stay_in_range() {
    let from = Theme::get(ThemeId::Obsidian);
    let to = Theme::get(ThemeId::Classic);
    let mid = lerp_theme(from, to, 0.5);
    let (lo, hi) = (from.bg.r.min(to.bg.r), from.bg.r.max(to.bg.r));
    assert!(mid.bg.r >= lo && mid.bg.r <= hi);
}

#[test]
fn test_transition_sampling_is_deterministic() {
    let start = Instant::now();
    let fade = ThemeTransition::new(
        *Theme::get(ThemeId::Obsidian),
        *Theme::get(ThemeId::Vintage),
        start,
        DEFAULT_DURATION,
    );
    let at = Duration::from_millis(200);
    assert_eq!(fade.sample_at(at), fade.sample_at(at));
}

#[test]
fn test_detection_falls_back_to_a_registered_theme() {
    assert!(ThemeId::ALL.contains(&ThemeId::detect()));
}

#[test]
fn test_labels_and_config_names_are_unique() {
    let labels: std::collections::HashSet<_> = ThemeId::ALL.iter().map(|id| id.label()).collect();
    assert_eq!(labels.len(), ThemeId::ALL.len());
    let names: std::collections::HashSet<_> =
        ThemeId::ALL.iter().map(|id| id.config_name()).collect();
    assert_eq!(names.len(), ThemeId::ALL.len());
}
