use super::{indexed, Screen};
use crate::components::{Action, Button, Feature, FeatureCard, Pressable};
use crate::context::RenderContext;
use crate::icon::{Icon, IconName};
use crate::navigation::Route;
use crate::view::{div, text, View};
use kinetic_animation::{EntranceConfig, ItemMotion, SchedulerHandle, Stagger};
use kinetic_core::TraceEvent;
use kinetic_theme::{BoxStyle, ButtonVariant, Edges, Layout};

const FEATURES: [Feature; 3] = [
    Feature {
        title: "Profile",
        description: "Manage your personal information",
        icon: IconName::PersonOutline,
        route: Route::Profile,
    },
    Feature {
        title: "Content",
        description: "Explore amazing content",
        icon: IconName::Grid,
        route: Route::Content,
    },
    Feature {
        title: "Settings",
        description: "Customize your experience",
        icon: IconName::Settings,
        route: Route::Settings,
    },
];

#[derive(Debug)]
pub struct HomeScreen {
    header: ItemMotion,
    features: Vec<FeatureCard>,
    get_started: Button,
}

impl HomeScreen {
    pub fn new(handle: SchedulerHandle) -> Self {
        let features = Stagger::new(200, 200)
            .assign(FEATURES)
            .into_iter()
            .map(|item| FeatureCard::new(handle.clone(), item))
            .collect();
        Self {
            header: ItemMotion::new(handle.clone()).with_entrance(EntranceConfig::hero()),
            features,
            get_started: Button::new(
                handle,
                "get-started",
                "Get Started",
                Action::Navigate(Route::Content),
            )
            .variant(ButtonVariant::Accent),
        }
    }

    pub fn features(&self) -> &[FeatureCard] {
        &self.features
    }
}

impl Screen for HomeScreen {
    fn route(&self) -> Route {
        Route::Home
    }

    fn name(&self) -> &'static str {
        "HomeScreen"
    }

    fn mount(&mut self) {
        self.header.mount();
        self.features.iter_mut().for_each(FeatureCard::mount);
    }

    fn unmount(&mut self) {
        self.header.unmount();
        self.features.iter_mut().for_each(FeatureCard::unmount);
        self.get_started.unmount();
    }

    fn render(&self, cx: &RenderContext<'_>) -> View {
        cx.trace(TraceEvent::screen(self.name()));
        let styles = cx.styles();
        let theme = cx.theme();

        let header = div(
            BoxStyle::default()
                .with_layout(Layout::Center)
                .with_margin(Edges {
                    bottom: theme.spacing.xl,
                    ..Edges::ZERO
                }),
        )
        .key("header")
        .motion(self.header.frame())
        .child(
            div(styles.avatar(120.0)).child(Icon::new(IconName::Rocket, 48.0, theme.colors.text)),
        )
        .child(text("Welcome to Your App", styles.title().with_size(32.0).centered()))
        .child(text(
            "Discover amazing features and personalize your experience",
            styles.text_secondary().centered(),
        ));

        div(styles.screen().with_padding(Edges {
            top: theme.spacing.xxl,
            ..styles.screen().padding
        }))
        .child(header)
        .child(div(Default::default()).children(self.features.iter().map(|card| card.render(cx))))
        .child(div(styles.button_container()).child(self.get_started.render(cx)))
        .into()
    }

    fn pressable(&mut self, key: &str) -> Option<&mut dyn Pressable> {
        if key == self.get_started.key() {
            return Some(&mut self.get_started);
        }
        indexed(&mut self.features, FeatureCard::KEY_PREFIX, key).map(|c| c as &mut dyn Pressable)
    }
}
