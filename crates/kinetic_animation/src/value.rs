//! Owned animated values
//!
//! [`AnimatedValue`] registers a track when created and removes it when
//! dropped, so a value lives exactly as long as the component that owns it.

use crate::scheduler::{SchedulerHandle, Transition, ValueId};
use crate::spring::SpringConfig;
use crate::timing::TimingConfig;

/// A scalar driven by the animation scheduler
///
/// # Example
///
/// ```
/// use kinetic_animation::{AnimatedValue, AnimationScheduler, SpringConfig};
///
/// let scheduler = AnimationScheduler::new();
/// let mut scale = AnimatedValue::new(scheduler.handle(), 1.0);
///
/// scale.spring_to(0.96, SpringConfig::press());
/// scheduler.advance_ms(16.0);
/// assert!(scale.get() < 1.0);
/// ```
pub struct AnimatedValue {
    handle: SchedulerHandle,
    id: Option<ValueId>,
    /// The last requested resting value, reported once the scheduler is gone
    target: f32,
}

impl AnimatedValue {
    /// Create a new animated value resting at `initial`
    pub fn new(handle: SchedulerHandle, initial: f32) -> Self {
        let id = handle.register(initial);
        Self {
            handle,
            id,
            target: initial,
        }
    }

    /// Start a transition, superseding any in-flight one
    pub fn start(&mut self, transition: Transition) {
        self.target = transition.target();
        if let Some(id) = self.id {
            self.handle.start(id, transition);
        }
    }

    pub fn spring_to(&mut self, target: f32, config: SpringConfig) {
        self.start(Transition::spring(target, config));
    }

    pub fn timing_to(&mut self, target: f32, config: TimingConfig) {
        self.start(Transition::timing(target, config));
    }

    /// Get the current animated value
    pub fn get(&self) -> f32 {
        self.id
            .and_then(|id| self.handle.value(id))
            .unwrap_or(self.target)
    }

    /// Set value immediately without animation
    pub fn set_immediate(&mut self, value: f32) {
        self.target = value;
        if let Some(id) = self.id {
            self.handle.set_immediate(id, value);
        }
    }

    /// Freeze the value where it currently is
    pub fn stop(&mut self) {
        if let Some(id) = self.id {
            self.handle.stop(id);
        }
    }

    /// Check if a transition is in flight
    pub fn is_animating(&self) -> bool {
        self.id.is_some_and(|id| self.handle.is_animating(id))
    }

    /// Virtual time at which the latest transition began
    pub fn started_at(&self) -> Option<f64> {
        self.id.and_then(|id| self.handle.started_at(id))
    }

    /// The last requested resting value
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Scheduler id of the underlying track (None if the scheduler was gone at creation)
    pub fn id(&self) -> Option<ValueId> {
        self.id
    }
}

impl Drop for AnimatedValue {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.handle.remove(id);
        }
    }
}

impl std::fmt::Debug for AnimatedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimatedValue")
            .field("id", &self.id)
            .field("value", &self.get())
            .field("target", &self.target)
            .finish()
    }
}
