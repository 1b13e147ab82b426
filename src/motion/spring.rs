//! Damped spring interpolation for smooth pointer-following motion.
//!
//! A spring value moves toward its target along a damped-oscillator curve
//! instead of jumping instantly. A newer target simply becomes the new
//! convergence point; there is nothing to cancel.

/// Spring damping coefficient used by the pointer streams.
pub const DAMPING: f32 = 25.0;

/// Spring stiffness used by the pointer streams.
pub const STIFFNESS: f32 = 150.0;

/// Largest integration step, in seconds. Longer frame gaps are subdivided
/// so a stalled event loop cannot destabilize the integrator.
const MAX_STEP: f32 = 1.0 / 60.0;

/// Position/velocity threshold below which the spring reports settled.
const REST_EPSILON: f32 = 0.01;

/// A one-dimensional damped spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    position: f32,
    velocity: f32,
    target: f32,
    stiffness: f32,
    damping: f32,
}

impl Spring {
    /// Creates a spring at rest at `position` with the default pointer
    /// configuration (damping 25, stiffness 150).
    #[must_use]
    pub const fn new(position: f32) -> Self {
        Self::with_config(position, STIFFNESS, DAMPING)
    }

    /// Creates a spring at rest with explicit stiffness and damping.
    #[must_use]
    pub const fn with_config(position: f32, stiffness: f32, damping: f32) -> Self {
        Self {
            position,
            velocity: 0.0,
            target: position,
            stiffness,
            damping,
        }
    }

    /// Sets a new convergence target. The current position and velocity
    /// carry over, producing the smooth lag behind the pointer.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Current spring position.
    #[must_use]
    pub const fn value(&self) -> f32 {
        self.position
    }

    /// Current target.
    #[must_use]
    pub const fn target(&self) -> f32 {
        self.target
    }

    /// Advances the spring by `dt` seconds using semi-implicit Euler
    /// integration. Large steps are subdivided for stability.
    pub fn step(&mut self, dt: f32) {
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            let displacement = self.target - self.position;
            let acceleration = self.stiffness * displacement - self.damping * self.velocity;
            self.velocity += acceleration * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
    }

    /// Whether the spring has effectively reached its target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        (self.target - self.position).abs() < REST_EPSILON && self.velocity.abs() < REST_EPSILON
    }

    /// Moves the spring instantly to `position` and zeroes its velocity.
    pub fn snap_to(&mut self, position: f32) {
        self.position = position;
        self.velocity = 0.0;
        self.target = position;
    }
}

/// A pair of springs tracking a 2D coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringPoint {
    /// Horizontal spring
    pub x: Spring,
    /// Vertical spring
    pub y: Spring,
}

impl SpringPoint {
    /// Creates a spring point at rest at the given coordinate.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            x: Spring::new(x),
            y: Spring::new(y),
        }
    }

    /// Sets a new convergence target for both axes.
    pub fn set_target(&mut self, x: f32, y: f32) {
        self.x.set_target(x);
        self.y.set_target(y);
    }

    /// Advances both axes by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.x.step(dt);
        self.y.step(dt);
    }

    /// Current smoothed coordinate.
    #[must_use]
    pub const fn value(&self) -> (f32, f32) {
        (self.x.value(), self.y.value())
    }
}
