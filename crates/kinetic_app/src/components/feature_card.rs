use super::{Action, Pressable};
use crate::context::RenderContext;
use crate::icon::{Icon, IconName};
use crate::navigation::Route;
use crate::view::{div, text, View};
use kinetic_animation::{EntranceConfig, ItemMotion, PressConfig, SchedulerHandle, Staggered};
use kinetic_theme::Edges;

/// Content of one home screen feature card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconName,
    pub route: Route,
}

/// Scale-in card that navigates on press
#[derive(Debug)]
pub struct FeatureCard {
    key: String,
    feature: Feature,
    motion: ItemMotion,
}

impl FeatureCard {
    pub const KEY_PREFIX: &'static str = "feature";

    pub fn new(handle: SchedulerHandle, item: Staggered<Feature>) -> Self {
        Self {
            key: format!("{}:{}", Self::KEY_PREFIX, item.index),
            feature: item.item,
            motion: ItemMotion::new(handle)
                .with_entrance(EntranceConfig::feature_card().with_delay(item.delay_ms))
                .with_press(PressConfig::feature_card()),
        }
    }

    pub fn feature(&self) -> &Feature {
        &self.feature
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
        let card = styles.card();

        div(card.with_margin(Edges {
            left: theme.spacing.sm,
            right: theme.spacing.sm,
            ..card.margin
        }))
        .key(&self.key)
        .motion(self.motion.frame())
        .child(
            div(styles.row())
                .child(
                    div(styles.icon_tile(
                        theme.colors.primary,
                        theme.radii.md,
                        theme.spacing.md,
                    ))
                    .child(Icon::new(self.feature.icon, 24.0, theme.colors.text)),
                )
                .child(
                    div(Default::default())
                        .child(text(self.feature.title, styles.subtitle()))
                        .child(text(self.feature.description, styles.text_secondary())),
                ),
        )
        .into()
    }
}

impl Pressable for FeatureCard {
    fn press_in(&mut self) -> bool {
        self.motion.press_in();
        true
    }

    fn press_out(&mut self) {
        self.motion.press_out();
    }

    fn cancel_press(&mut self) {
        self.motion.cancel_press();
    }

    fn action(&self) -> Option<Action> {
        Some(Action::Navigate(self.feature.route))
    }
}
