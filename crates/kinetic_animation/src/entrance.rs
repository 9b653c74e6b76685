//! Entrance animations
//!
//! An [`EntranceAnimator`] holds an element in its initial offset state
//! (scaled down, shifted off-axis, or transparent) until it is mounted, then
//! schedules one deferred start that moves it to rest: a spring for the
//! positional or scale track, a timing curve for opacity.
//!
//! `mount` runs at most once per animator. Later calls do nothing, so
//! rebuilding a component's view never restarts its entrance. Unmounting
//! before the delay elapses cancels the pending start.

use crate::motion::MotionFrame;
use crate::scheduler::{SchedulerHandle, StartBatch, TimerId, Transition};
use crate::spring::SpringConfig;
use crate::timing::TimingConfig;
use crate::value::AnimatedValue;

/// The offset an element enters from
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EntranceMotion {
    /// Grow from scale 0
    ScaleIn,
    /// Slide in horizontally from the given x offset
    SlideX(f32),
    /// Slide in vertically from the given y offset
    SlideY(f32),
    /// Opacity only
    FadeIn,
}

impl EntranceMotion {
    /// Starting value of the positional/scale track
    pub fn initial(&self) -> f32 {
        match self {
            EntranceMotion::ScaleIn => 0.0,
            EntranceMotion::SlideX(offset) | EntranceMotion::SlideY(offset) => *offset,
            EntranceMotion::FadeIn => 0.0,
        }
    }

    /// Resting value of the positional/scale track
    pub fn rest(&self) -> f32 {
        match self {
            EntranceMotion::ScaleIn => 1.0,
            _ => 0.0,
        }
    }

    fn has_track(&self) -> bool {
        !matches!(self, EntranceMotion::FadeIn)
    }

    fn frame(&self, track: f32, opacity: f32) -> MotionFrame {
        let frame = MotionFrame {
            opacity,
            ..MotionFrame::REST
        };
        match self {
            EntranceMotion::ScaleIn => MotionFrame {
                scale: track,
                ..frame
            },
            EntranceMotion::SlideX(_) => MotionFrame {
                translate_x: track,
                ..frame
            },
            EntranceMotion::SlideY(_) => MotionFrame {
                translate_y: track,
                ..frame
            },
            EntranceMotion::FadeIn => frame,
        }
    }
}

/// Parameters of one entrance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceConfig {
    pub motion: EntranceMotion,
    pub delay_ms: u32,
    pub spring: SpringConfig,
    pub fade: TimingConfig,
}

impl EntranceConfig {
    pub fn new(motion: EntranceMotion) -> Self {
        Self {
            motion,
            delay_ms: 0,
            spring: SpringConfig::entrance(),
            fade: TimingConfig::item_fade(),
        }
    }

    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_spring(mut self, spring: SpringConfig) -> Self {
        self.spring = spring;
        self
    }

    pub fn with_fade(mut self, fade: TimingConfig) -> Self {
        self.fade = fade;
        self
    }

    /// Screen hero (home header, profile avatar): soft scale-in
    pub fn hero() -> Self {
        Self::new(EntranceMotion::ScaleIn)
            .with_spring(SpringConfig::header())
            .with_fade(TimingConfig::header_fade())
    }

    /// Screen title block that only fades in
    pub fn header_fade() -> Self {
        Self::new(EntranceMotion::FadeIn).with_fade(TimingConfig::header_fade())
    }

    pub fn feature_card() -> Self {
        Self::new(EntranceMotion::ScaleIn)
    }

    pub fn profile_row() -> Self {
        Self::new(EntranceMotion::SlideX(-50.0))
    }

    pub fn setting_row() -> Self {
        Self::new(EntranceMotion::SlideX(-30.0))
    }

    pub fn content_card() -> Self {
        Self::new(EntranceMotion::SlideY(50.0))
    }
}

/// Lifecycle of an entrance
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntrancePhase {
    /// Created, not mounted yet
    Idle,
    /// Mounted, waiting for the delay to elapse
    Pending,
    /// Transitions in flight
    Running,
    /// At rest
    Settled,
    /// Unmounted
    Cancelled,
}

/// Drives one element from its initial offset to rest after a delay
#[derive(Debug)]
pub struct EntranceAnimator {
    config: EntranceConfig,
    handle: SchedulerHandle,
    track: Option<AnimatedValue>,
    opacity: AnimatedValue,
    timer: Option<TimerId>,
    mounted: bool,
    cancelled: bool,
}

impl EntranceAnimator {
    /// Create the animator in its initial (offset, invisible) state
    pub fn new(handle: SchedulerHandle, config: EntranceConfig) -> Self {
        let track = config
            .motion
            .has_track()
            .then(|| AnimatedValue::new(handle.clone(), config.motion.initial()));
        let opacity = AnimatedValue::new(handle.clone(), 0.0);
        Self {
            config,
            handle,
            track,
            opacity,
            timer: None,
            mounted: false,
            cancelled: false,
        }
    }

    pub fn config(&self) -> &EntranceConfig {
        &self.config
    }

    /// Schedule the entrance. Only the first call has an effect.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        let mut starts = StartBatch::new();
        if let Some(id) = self.track.as_ref().and_then(AnimatedValue::id) {
            starts.push((id, Transition::spring(self.config.motion.rest(), self.config.spring)));
        }
        if let Some(id) = self.opacity.id() {
            starts.push((id, Transition::timing(1.0, self.config.fade)));
        }

        self.timer = self.handle.schedule(self.config.delay_ms, starts);
        tracing::trace!(
            motion = ?self.config.motion,
            delay_ms = self.config.delay_ms,
            "entrance scheduled"
        );
    }

    /// Cancel a pending start and freeze anything in flight
    pub fn unmount(&mut self) {
        if let Some(timer) = self.timer.take() {
            self.handle.cancel(timer);
        }
        if let Some(track) = self.track.as_mut() {
            track.stop();
        }
        self.opacity.stop();
        self.cancelled = true;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted && !self.cancelled
    }

    pub fn phase(&self) -> EntrancePhase {
        if self.cancelled {
            EntrancePhase::Cancelled
        } else if !self.mounted {
            EntrancePhase::Idle
        } else if self.timer.is_some_and(|t| self.handle.is_pending(t)) {
            EntrancePhase::Pending
        } else if self.is_animating() {
            EntrancePhase::Running
        } else {
            EntrancePhase::Settled
        }
    }

    fn is_animating(&self) -> bool {
        self.opacity.is_animating() || self.track.as_ref().is_some_and(AnimatedValue::is_animating)
    }

    /// Virtual time the entrance began, once its delay has elapsed
    pub fn started_at(&self) -> Option<f64> {
        self.opacity.started_at()
    }

    /// Sample the current transform
    pub fn frame(&self) -> MotionFrame {
        let track = self
            .track
            .as_ref()
            .map(AnimatedValue::get)
            .unwrap_or_else(|| self.config.motion.rest());
        self.config.motion.frame(track, self.opacity.get())
    }
}

impl Drop for EntranceAnimator {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            self.handle.cancel(timer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::AnimationScheduler;

    fn frames(scheduler: &AnimationScheduler, n: usize) {
        for _ in 0..n {
            scheduler.advance_ms(16.0);
        }
    }

    #[test]
    fn test_initial_state_is_offset_and_invisible() {
        let scheduler = AnimationScheduler::new();
        let slide = EntranceAnimator::new(scheduler.handle(), EntranceConfig::profile_row());
        let scale = EntranceAnimator::new(scheduler.handle(), EntranceConfig::feature_card());

        assert_eq!(slide.frame().translate_x, -50.0);
        assert_eq!(slide.frame().opacity, 0.0);
        assert_eq!(scale.frame().scale, 0.0);
        assert_eq!(slide.phase(), EntrancePhase::Idle);
    }

    #[test]
    fn test_unmounted_animator_never_moves() {
        let scheduler = AnimationScheduler::new();
        let entrance = EntranceAnimator::new(scheduler.handle(), EntranceConfig::content_card());
        frames(&scheduler, 60);
        assert_eq!(entrance.frame().translate_y, 50.0);
        assert_eq!(entrance.frame().opacity, 0.0);
    }

    #[test]
    fn test_entrance_waits_for_delay_then_settles() {
        let scheduler = AnimationScheduler::new();
        let mut entrance = EntranceAnimator::new(
            scheduler.handle(),
            EntranceConfig::setting_row().with_delay(150),
        );
        entrance.mount();
        assert_eq!(entrance.phase(), EntrancePhase::Pending);

        frames(&scheduler, 9); // 144ms
        assert_eq!(entrance.frame().translate_x, -30.0);

        frames(&scheduler, 1);
        assert_eq!(entrance.phase(), EntrancePhase::Running);
        assert_eq!(entrance.started_at(), Some(150.0));

        frames(&scheduler, 240);
        assert_eq!(entrance.phase(), EntrancePhase::Settled);
        assert_eq!(entrance.frame(), MotionFrame::REST);
    }

    #[test]
    fn test_zero_delay_still_animates() {
        let scheduler = AnimationScheduler::new();
        let mut entrance = EntranceAnimator::new(scheduler.handle(), EntranceConfig::hero());
        entrance.mount();
        frames(&scheduler, 1);

        let frame = entrance.frame();
        assert!(frame.scale > 0.0 && frame.scale < 1.0);
        assert!(frame.opacity > 0.0 && frame.opacity < 1.0);
    }

    #[test]
    fn test_fade_only_entrance() {
        let scheduler = AnimationScheduler::new();
        let mut entrance = EntranceAnimator::new(scheduler.handle(), EntranceConfig::header_fade());
        assert_eq!(scheduler.value_count(), 1);
        entrance.mount();
        frames(&scheduler, 25); // 400ms of 800

        let frame = entrance.frame();
        assert_eq!(frame.scale, 1.0);
        assert_eq!(frame.translate_x, 0.0);
        assert!((frame.opacity - 0.5).abs() < 0.05);
    }

    #[test]
    fn test_mount_is_single_shot() {
        let scheduler = AnimationScheduler::new();
        let mut entrance =
            EntranceAnimator::new(scheduler.handle(), EntranceConfig::feature_card().with_delay(100));
        entrance.mount();
        frames(&scheduler, 20);
        let started = entrance.started_at();
        let before = entrance.frame();

        entrance.mount();
        assert_eq!(scheduler.pending_count(), 0);
        assert_eq!(entrance.started_at(), started);
        assert_eq!(entrance.frame(), before);
    }

    #[test]
    fn test_unmount_before_delay_cancels() {
        let scheduler = AnimationScheduler::new();
        let mut entrance =
            EntranceAnimator::new(scheduler.handle(), EntranceConfig::profile_row().with_delay(500));
        entrance.mount();
        frames(&scheduler, 10);
        entrance.unmount();

        assert_eq!(scheduler.pending_count(), 0);
        assert_eq!(entrance.phase(), EntrancePhase::Cancelled);
        frames(&scheduler, 60);
        assert_eq!(entrance.frame().translate_x, -50.0);
        assert_eq!(entrance.started_at(), None);
    }

    #[test]
    fn test_drop_releases_scheduler_resources() {
        let scheduler = AnimationScheduler::new();
        let mut entrance =
            EntranceAnimator::new(scheduler.handle(), EntranceConfig::content_card().with_delay(300));
        entrance.mount();
        assert_eq!(scheduler.value_count(), 2);
        assert_eq!(scheduler.pending_count(), 1);

        drop(entrance);
        assert_eq!(scheduler.value_count(), 0);
        assert_eq!(scheduler.pending_count(), 0);
        assert!(!scheduler.advance_ms(16.0));
    }
}
