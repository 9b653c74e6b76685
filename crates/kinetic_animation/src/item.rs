//! Interactive animated items
//!
//! [`ItemMotion`] bundles the two facets every list item and button share:
//! an optional entrance and optional press feedback. They drive separate
//! tracks and compose only when sampled.
//!
//! ```
//! use kinetic_animation::{AnimationScheduler, EntranceConfig, ItemMotion, PressConfig};
//!
//! let scheduler = AnimationScheduler::new();
//! let mut card = ItemMotion::new(scheduler.handle())
//!     .with_entrance(EntranceConfig::content_card().with_delay(100))
//!     .with_press(PressConfig::content_card());
//!
//! card.mount();
//! assert_eq!(card.frame().opacity, 0.0);
//! ```

use crate::entrance::{EntranceAnimator, EntranceConfig, EntrancePhase};
use crate::motion::MotionFrame;
use crate::press::{PressConfig, PressFeedback};
use crate::scheduler::SchedulerHandle;

#[derive(Debug)]
pub struct ItemMotion {
    handle: SchedulerHandle,
    entrance: Option<EntranceAnimator>,
    press: Option<PressFeedback>,
}

impl ItemMotion {
    pub fn new(handle: SchedulerHandle) -> Self {
        Self {
            handle,
            entrance: None,
            press: None,
        }
    }

    pub fn with_entrance(mut self, config: EntranceConfig) -> Self {
        self.entrance = Some(EntranceAnimator::new(self.handle.clone(), config));
        self
    }

    pub fn with_press(mut self, config: PressConfig) -> Self {
        self.press = Some(PressFeedback::new(self.handle.clone(), config));
        self
    }

    pub fn mount(&mut self) {
        if let Some(entrance) = self.entrance.as_mut() {
            entrance.mount();
        }
    }

    pub fn unmount(&mut self) {
        if let Some(entrance) = self.entrance.as_mut() {
            entrance.unmount();
        }
        if let Some(press) = self.press.as_mut() {
            press.unmount();
        }
    }

    /// Returns false when the item has no press feedback or ignored the press
    pub fn press_in(&mut self) -> bool {
        self.press.as_mut().is_some_and(PressFeedback::press_in)
    }

    pub fn press_out(&mut self) -> bool {
        self.press.as_mut().is_some_and(PressFeedback::press_out)
    }

    pub fn cancel_press(&mut self) -> bool {
        self.press.as_mut().is_some_and(PressFeedback::cancel)
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        if let Some(press) = self.press.as_mut() {
            press.set_disabled(disabled);
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.press.as_ref().is_some_and(PressFeedback::is_pressed)
    }

    pub fn entrance(&self) -> Option<&EntranceAnimator> {
        self.entrance.as_ref()
    }

    pub fn press(&self) -> Option<&PressFeedback> {
        self.press.as_ref()
    }

    pub fn entrance_phase(&self) -> Option<EntrancePhase> {
        self.entrance.as_ref().map(EntranceAnimator::phase)
    }

    /// Composed entrance and press transform
    pub fn frame(&self) -> MotionFrame {
        let entrance = self
            .entrance
            .as_ref()
            .map(EntranceAnimator::frame)
            .unwrap_or_default();
        let press = self
            .press
            .as_ref()
            .map(PressFeedback::frame)
            .unwrap_or_default();
        entrance.compose(press)
    }
}
