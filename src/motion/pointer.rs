//! Pointer tracker: raw mouse samples into two smoothed coordinate streams.
//!
//! The tracker is a two-state machine. While `Unmounted` no samples are
//! accepted and consumers fall back to a static rendering; after the first
//! frame establishes the viewport it becomes `Mounted` and every mouse-move
//! sample feeds two spring-damped streams: one following the pointer and
//! one mirrored across the viewport center.

use crate::motion::spring::SpringPoint;

/// Computes the raw mirrored coordinate for a pointer position.
///
/// A pointer at `(x, y)` in a `(width, height)` viewport mirrors to
/// `(width - x, height - y)`.
#[must_use]
pub fn mirror(x: f32, y: f32, width: f32, height: f32) -> (f32, f32) {
    (width - x, height - y)
}

/// Tracker state while listeners are active.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Mounted {
    /// Viewport dimensions in cells
    viewport: (f32, f32),
    /// Latest raw pointer sample
    raw: (f32, f32),
    /// Spring stream following the pointer
    primary: SpringPoint,
    /// Spring stream following the mirrored coordinate
    secondary: SpringPoint,
}

/// Pointer tracker state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerTracker {
    state: Option<Mounted>,
}

impl PointerTracker {
    /// Creates an unmounted tracker. Coordinates default to the origin
    /// until `mount` provides viewport dimensions.
    #[must_use]
    pub const fn new() -> Self {
        Self { state: None }
    }

    /// Transitions to the mounted state once the viewport is known.
    ///
    /// Called after the first render. Both streams start centered so the
    /// first blob positions are stable rather than sweeping in from the
    /// corner. Mounting an already-mounted tracker only updates the
    /// viewport (see `set_viewport`).
    pub fn mount(&mut self, width: u16, height: u16) {
        if self.state.is_some() {
            self.set_viewport(width, height);
            return;
        }
        let (w, h) = (f32::from(width), f32::from(height));
        let center = (w / 2.0, h / 2.0);
        self.state = Some(Mounted {
            viewport: (w, h),
            raw: center,
            primary: SpringPoint::new(center.0, center.1),
            secondary: SpringPoint::new(center.0, center.1),
        });
    }

    /// Tears the tracker down, discarding all motion state.
    pub fn unmount(&mut self) {
        self.state = None;
    }

    /// Whether the tracker is mounted and producing streams.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.state.is_some()
    }

    /// Updates viewport dimensions on terminal resize and re-aims the
    /// mirrored stream at the new mirror of the latest sample.
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        if let Some(mounted) = &mut self.state {
            mounted.viewport = (f32::from(width), f32::from(height));
            let (mx, my) = mirror(
                mounted.raw.0,
                mounted.raw.1,
                mounted.viewport.0,
                mounted.viewport.1,
            );
            mounted.secondary.set_target(mx, my);
        }
    }

    /// Records a raw pointer sample in cell coordinates.
    ///
    /// Ignored while unmounted; the unmounted fallback rendering is what
    /// keeps pre-viewport samples from ever being visible.
    pub fn record(&mut self, x: u16, y: u16) {
        if let Some(mounted) = &mut self.state {
            let (x, y) = (f32::from(x), f32::from(y));
            mounted.raw = (x, y);
            mounted.primary.set_target(x, y);
            let (mx, my) = mirror(x, y, mounted.viewport.0, mounted.viewport.1);
            mounted.secondary.set_target(mx, my);
        }
    }

    /// Advances both spring streams by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if let Some(mounted) = &mut self.state {
            mounted.primary.step(dt);
            mounted.secondary.step(dt);
        }
    }

    /// Latest raw sample, or the origin while unmounted.
    #[must_use]
    pub fn raw(&self) -> (f32, f32) {
        self.state.map_or((0.0, 0.0), |m| m.raw)
    }

    /// Smoothed pointer-following coordinate, or the origin while unmounted.
    #[must_use]
    pub fn primary(&self) -> (f32, f32) {
        self.state.map_or((0.0, 0.0), |m| m.primary.value())
    }

    /// Smoothed mirrored coordinate, or the origin while unmounted.
    #[must_use]
    pub fn secondary(&self) -> (f32, f32) {
        self.state.map_or((0.0, 0.0), |m| m.secondary.value())
    }

    /// Raw mirror target for the latest sample, `(0, 0)` while unmounted
    /// (no viewport means no meaningful mirror).
    #[must_use]
    pub fn mirrored_target(&self) -> (f32, f32) {
        self.state
            .map_or((0.0, 0.0), |m| mirror(m.raw.0, m.raw.1, m.viewport.0, m.viewport.1))
    }

    /// Whether both streams have settled on their targets.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.state.is_none_or(|m| {
            m.primary.x.is_settled()
                && m.primary.y.is_settled()
                && m.secondary.x.is_settled()
                && m.secondary.y.is_settled()
        })
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}
