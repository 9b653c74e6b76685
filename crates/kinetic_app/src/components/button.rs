use super::{Action, Pressable};
use crate::context::RenderContext;
use crate::icon::{Icon, IconName};
use crate::view::{div, text, View};
use kinetic_animation::{ItemMotion, MotionFrame, PressConfig, SchedulerHandle};
use kinetic_core::TraceEvent;
use kinetic_theme::{BoxStyle, ButtonVariant};

/// Labelled button with press feedback
///
/// A disabled button ignores the pointer entirely and triggers nothing.
#[derive(Debug)]
pub struct Button {
    key: String,
    label: String,
    variant: ButtonVariant,
    disabled: bool,
    action: Action,
    motion: ItemMotion,
}

impl Button {
    pub fn new(
        handle: SchedulerHandle,
        key: impl Into<String>,
        label: impl Into<String>,
        action: Action,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            disabled: false,
            action,
            motion: ItemMotion::new(handle).with_press(PressConfig::button()),
        }
    }

    /// Header back link
    pub fn back(handle: SchedulerHandle) -> Self {
        Self::new(handle, "back", "\u{2190} Back", Action::Back).variant(ButtonVariant::Ghost)
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.motion.set_disabled(disabled);
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_pressed(&self) -> bool {
        self.motion.is_pressed()
    }

    pub fn frame(&self) -> MotionFrame {
        self.motion.frame()
    }

    pub fn unmount(&mut self) {
        self.motion.unmount();
    }

    pub fn render(&self, cx: &RenderContext<'_>) -> View {
        cx.trace(TraceEvent::button(&self.label));
        let styles = cx.styles();
        div(styles.button(self.variant, self.disabled))
            .key(&self.key)
            .motion(self.motion.frame())
            .child(text(
                &self.label,
                styles.button_text(self.variant, self.disabled),
            ))
            .into()
    }
}

impl Pressable for Button {
    fn press_in(&mut self) -> bool {
        !self.disabled && self.motion.press_in()
    }

    fn press_out(&mut self) {
        self.motion.press_out();
    }

    fn cancel_press(&mut self) {
        self.motion.cancel_press();
    }

    fn action(&self) -> Option<Action> {
        (!self.disabled).then(|| self.action.clone())
    }
}

/// Bare icon that triggers an action, without press feedback
#[derive(Clone, Debug)]
pub struct IconButton {
    key: &'static str,
    icon: IconName,
    size: f32,
    action: Action,
}

impl IconButton {
    pub fn new(key: &'static str, icon: IconName, size: f32, action: Action) -> Self {
        Self {
            key,
            icon,
            size,
            action,
        }
    }

    pub fn render(&self, cx: &RenderContext<'_>) -> View {
        div(BoxStyle::default())
            .key(self.key)
            .child(Icon::new(self.icon, self.size, cx.theme().colors.text))
            .into()
    }
}

impl Pressable for IconButton {
    fn press_in(&mut self) -> bool {
        true
    }

    fn press_out(&mut self) {}

    fn cancel_press(&mut self) {}

    fn action(&self) -> Option<Action> {
        Some(self.action.clone())
    }
}
