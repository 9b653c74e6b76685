use crate::context::RenderContext;
use crate::icon::{Icon, IconName};
use crate::view::{div, text, View};
use kinetic_animation::{EntranceConfig, ItemMotion, SchedulerHandle, Staggered};
use kinetic_theme::FontWeight;

/// A labelled profile value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProfileField {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: IconName,
}

/// Read-only row that slides in from the left
#[derive(Debug)]
pub struct ProfileItem {
    key: String,
    field: ProfileField,
    motion: ItemMotion,
}

impl ProfileItem {
    pub const KEY_PREFIX: &'static str = "profile-row";

    pub fn new(handle: SchedulerHandle, item: Staggered<ProfileField>) -> Self {
        Self {
            key: format!("{}:{}", Self::KEY_PREFIX, item.index),
            field: item.item,
            motion: ItemMotion::new(handle)
                .with_entrance(EntranceConfig::profile_row().with_delay(item.delay_ms)),
        }
    }

    pub fn field(&self) -> &ProfileField {
        &self.field
    }

    pub fn motion(&self) -> &ItemMotion {
        &self.motion
    }

    pub fn mount(&mut self) {
        self.motion.mount();
    }

    pub fn unmount(&mut self) {
        self.motion.unmount();
    }

    pub fn render(&self, cx: &RenderContext<'_>) -> View {
        let styles = cx.styles();
        let theme = cx.theme();

        div(styles.card())
            .key(&self.key)
            .motion(self.motion.frame())
            .child(
                div(styles.space_between()).child(
                    div(styles.row())
                        .child(
                            div(styles.icon_tile(
                                theme.colors.background_alt,
                                theme.radii.sm,
                                theme.spacing.sm,
                            ))
                            .child(Icon::new(self.field.icon, 20.0, theme.colors.primary)),
                        )
                        .child(
                            div(Default::default())
                                .child(text(self.field.label, styles.text_secondary()))
                                .child(text(
                                    self.field.value,
                                    styles.text().with_weight(FontWeight::SemiBold),
                                )),
                        ),
                ),
            )
            .into()
    }
}
