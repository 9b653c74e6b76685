//! Timed transitions
//!
//! A timing curve moves from a start value to a target over a fixed duration,
//! shaped by an [`Easing`].

use crate::easing::Easing;

/// Duration and easing of a timed transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimingConfig {
    pub duration_ms: u32,
    pub easing: Easing,
}

impl TimingConfig {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            easing: Easing::default(),
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Opacity fade for list items
    pub fn item_fade() -> Self {
        Self::new(600)
    }

    /// Slower opacity fade for screen headers
    pub fn header_fade() -> Self {
        Self::new(800)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::new(300)
    }
}

/// An in-flight timed transition
#[derive(Clone, Copy, Debug)]
pub struct Timing {
    from: f32,
    to: f32,
    config: TimingConfig,
    elapsed_ms: f32,
}

impl Timing {
    pub fn new(from: f32, to: f32, config: TimingConfig) -> Self {
        Self {
            from,
            to,
            config,
            elapsed_ms: 0.0,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Progress through the duration (0.0 to 1.0), before easing
    pub fn progress(&self) -> f32 {
        if self.config.duration_ms == 0 {
            return if self.elapsed_ms > 0.0 { 1.0 } else { 0.0 };
        }
        (self.elapsed_ms / self.config.duration_ms as f32).clamp(0.0, 1.0)
    }

    pub fn value(&self) -> f32 {
        let progress = self.progress();
        if progress >= 1.0 {
            return self.to;
        }
        let eased = self.config.easing.apply(progress);
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Advance by `dt_ms` milliseconds
    pub fn tick(&mut self, dt_ms: f32) {
        if self.is_finished() {
            return;
        }
        self.elapsed_ms += dt_ms.max(0.0);
    }
}
