use super::{Action, Pressable};
use crate::context::RenderContext;
use crate::icon::{Icon, IconName};
use crate::view::{div, text, View};
use kinetic_animation::{EntranceConfig, ItemMotion, PressConfig, SchedulerHandle, Staggered};
use kinetic_theme::{BoxStyle, Edges};

/// An entry of the content feed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Article {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub read_time: &'static str,
}

const LIKES: u32 = 24;
const COMMENTS: u32 = 8;

/// Card that rises into place and reports presses
#[derive(Debug)]
pub struct ContentCard {
    key: String,
    article: Article,
    motion: ItemMotion,
}

impl ContentCard {
    pub const KEY_PREFIX: &'static str = "article";

    pub fn new(handle: SchedulerHandle, item: Staggered<Article>) -> Self {
        Self {
            key: format!("{}:{}", Self::KEY_PREFIX, item.index),
            article: item.item,
            motion: ItemMotion::new(handle)
                .with_entrance(EntranceConfig::content_card().with_delay(item.delay_ms))
                .with_press(PressConfig::content_card()),
        }
    }

    pub fn article(&self) -> &Article {
        &self.article
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
        let secondary = styles.text_secondary();
        let muted = theme.colors.text_secondary;

        let counters = div(styles.row())
            .child(Icon::new(IconName::Heart, 20.0, muted))
            .child(View::Spacer(theme.spacing.sm))
            .child(text(LIKES.to_string(), secondary))
            .child(View::Spacer(theme.spacing.md))
            .child(Icon::new(IconName::Chatbubble, 20.0, muted))
            .child(View::Spacer(theme.spacing.sm))
            .child(text(COMMENTS.to_string(), secondary));

        div(styles.card())
            .key(&self.key)
            .motion(self.motion.frame())
            .child(
                div(styles.space_between())
                    .child(div(styles.badge()).child(text(self.article.category, styles.badge_text())))
                    .child(text(self.article.read_time, secondary)),
            )
            .child(
                div(BoxStyle::default().with_margin(Edges::symmetric(theme.spacing.md, 0.0)))
                    .child(text(self.article.title, styles.subtitle())),
            )
            .child(text(self.article.description, secondary))
            .child(
                div(styles.space_between())
                    .child(counters)
                    .child(Icon::new(IconName::Bookmark, 20.0, muted)),
            )
            .into()
    }
}

impl Pressable for ContentCard {
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
        Some(Action::Trace(format!("Pressed: {}", self.article.title)))
    }
}
