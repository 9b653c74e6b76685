//! Press feedback
//!
//! Pointer-down shrinks (and optionally dims) an element; pointer-up or
//! pointer-cancel springs it back. A disabled element ignores both.

use crate::motion::MotionFrame;
use crate::scheduler::SchedulerHandle;
use crate::spring::SpringConfig;
use crate::value::AnimatedValue;

/// How far an element shrinks and dims while held
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PressConfig {
    pub pressed_scale: f32,
    /// Opacity while held; `None` leaves opacity alone
    pub pressed_opacity: Option<f32>,
    pub spring: SpringConfig,
}

impl PressConfig {
    pub fn new(pressed_scale: f32, spring: SpringConfig) -> Self {
        Self {
            pressed_scale,
            pressed_opacity: None,
            spring,
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.pressed_opacity = Some(opacity);
        self
    }

    /// Buttons: shrink and dim on a snappy spring
    pub fn button() -> Self {
        Self::new(0.96, SpringConfig::press()).with_opacity(0.8)
    }

    pub fn feature_card() -> Self {
        Self::new(0.95, SpringConfig::platform_default())
    }

    pub fn content_card() -> Self {
        Self::new(0.98, SpringConfig::platform_default())
    }
}

impl Default for PressConfig {
    fn default() -> Self {
        Self::button()
    }
}

/// Press-state animator for one interactive element
#[derive(Debug)]
pub struct PressFeedback {
    config: PressConfig,
    scale: AnimatedValue,
    opacity: AnimatedValue,
    pressed: bool,
    disabled: bool,
}

impl PressFeedback {
    pub fn new(handle: SchedulerHandle, config: PressConfig) -> Self {
        Self {
            config,
            scale: AnimatedValue::new(handle.clone(), 1.0),
            opacity: AnimatedValue::new(handle, 1.0),
            pressed: false,
            disabled: false,
        }
    }

    pub fn config(&self) -> &PressConfig {
        &self.config
    }

    /// Pointer went down. Returns false if the press was ignored.
    pub fn press_in(&mut self) -> bool {
        if self.disabled || self.pressed {
            return false;
        }
        self.pressed = true;
        self.scale
            .spring_to(self.config.pressed_scale, self.config.spring);
        if let Some(opacity) = self.config.pressed_opacity {
            self.opacity.spring_to(opacity, self.config.spring);
        }
        true
    }

    /// Pointer went up. Returns true if a held press was released.
    pub fn press_out(&mut self) -> bool {
        if self.disabled || !self.pressed {
            return false;
        }
        self.release();
        true
    }

    /// Pointer left or the gesture was interrupted. Same motion as a release.
    pub fn cancel(&mut self) -> bool {
        self.press_out()
    }

    /// Disabling a held element releases it
    pub fn set_disabled(&mut self, disabled: bool) {
        if disabled && self.pressed {
            self.release();
        }
        self.disabled = disabled;
    }

    /// Teardown: drop the press and freeze both tracks where they are
    pub fn unmount(&mut self) {
        self.pressed = false;
        self.scale.stop();
        self.opacity.stop();
    }

    fn release(&mut self) {
        self.pressed = false;
        self.scale.spring_to(1.0, self.config.spring);
        if self.config.pressed_opacity.is_some() {
            self.opacity.spring_to(1.0, self.config.spring);
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_animating(&self) -> bool {
        self.scale.is_animating() || self.opacity.is_animating()
    }

    /// Sample the current transform
    pub fn frame(&self) -> MotionFrame {
        MotionFrame {
            scale: self.scale.get(),
            opacity: self.opacity.get(),
            ..MotionFrame::REST
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::AnimationScheduler;

    fn settle(scheduler: &AnimationScheduler) {
        for _ in 0..300 {
            scheduler.advance_ms(16.0);
        }
    }

    #[test]
    fn test_press_shrinks_and_dims_button() {
        let scheduler = AnimationScheduler::new();
        let mut press = PressFeedback::new(scheduler.handle(), PressConfig::button());

        assert!(press.press_in());
        settle(&scheduler);
        let frame = press.frame();
        assert_eq!(frame.scale, 0.96);
        assert_eq!(frame.opacity, 0.8);
    }

    #[test]
    fn test_round_trip_returns_exactly_to_rest() {
        for config in [
            PressConfig::button(),
            PressConfig::feature_card(),
            PressConfig::content_card(),
        ] {
            let scheduler = AnimationScheduler::new();
            let mut press = PressFeedback::new(scheduler.handle(), config);
            let resting = press.frame();

            press.press_in();
            for _ in 0..4 {
                scheduler.advance_ms(16.0);
            }
            assert!(press.frame().scale < 1.0);
            assert!(press.press_out());
            settle(&scheduler);

            assert_eq!(press.frame(), resting, "{config:?}");
            assert!(!press.is_animating());
        }
    }

    #[test]
    fn test_disabled_press_is_a_no_op() {
        let scheduler = AnimationScheduler::new();
        let mut press = PressFeedback::new(scheduler.handle(), PressConfig::button());
        press.set_disabled(true);

        assert!(!press.press_in());
        scheduler.advance_ms(16.0);
        assert!(!press.is_animating());
        assert_eq!(press.frame(), MotionFrame::REST);
        assert!(!press.press_out());
    }

    #[test]
    fn test_card_press_leaves_opacity_alone() {
        let scheduler = AnimationScheduler::new();
        let mut press = PressFeedback::new(scheduler.handle(), PressConfig::feature_card());
        press.press_in();
        settle(&scheduler);

        assert_eq!(press.frame().scale, 0.95);
        assert_eq!(press.frame().opacity, 1.0);
    }

    #[test]
    fn test_disabling_while_held_releases() {
        let scheduler = AnimationScheduler::new();
        let mut press = PressFeedback::new(scheduler.handle(), PressConfig::button());
        press.press_in();
        scheduler.advance_ms(48.0);

        press.set_disabled(true);
        assert!(!press.is_pressed());
        settle(&scheduler);
        assert_eq!(press.frame(), MotionFrame::REST);
    }

    #[test]
    fn test_unmount_freezes_mid_press() {
        let scheduler = AnimationScheduler::new();
        let mut press = PressFeedback::new(scheduler.handle(), PressConfig::content_card());
        press.press_in();
        for _ in 0..3 {
            scheduler.advance_ms(16.0);
        }
        press.unmount();
        let frozen = press.frame();

        assert!(!press.is_pressed());
        assert!(!press.is_animating());
        assert!(!scheduler.advance_ms(16.0));
        assert_eq!(press.frame(), frozen);
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let scheduler = AnimationScheduler::new();
        let mut press = PressFeedback::new(scheduler.handle(), PressConfig::content_card());
        assert!(!press.press_out());
        assert!(!press.cancel());
        assert!(press.press_in());
        assert!(!press.press_in());
        assert!(press.cancel());
    }
}
