use super::{indexed, Screen};
use crate::components::{Action, Article, Button, ContentCard, IconButton, Pressable};
use crate::context::RenderContext;
use crate::icon::IconName;
use crate::navigation::Route;
use crate::view::{div, text, View};
use kinetic_animation::{EntranceConfig, ItemMotion, SchedulerHandle, Stagger};
use kinetic_core::TraceEvent;
use kinetic_theme::{BoxStyle, Edges};

const ARTICLES: [Article; 5] = [
    Article {
        title: "Getting Started with React Native",
        description: "Learn the fundamentals of building mobile apps with React Native. \
                      This comprehensive guide covers everything you need to know.",
        category: "Tutorial",
        read_time: "5 min read",
    },
    Article {
        title: "Advanced Animation Techniques",
        description: "Discover how to create smooth, performant animations that will make \
                      your app stand out from the competition.",
        category: "Advanced",
        read_time: "8 min read",
    },
    Article {
        title: "UI/UX Best Practices",
        description: "Design principles and patterns that will help you create intuitive \
                      and beautiful user interfaces.",
        category: "Design",
        read_time: "6 min read",
    },
    Article {
        title: "Performance Optimization",
        description: "Tips and tricks to make your React Native app faster and more \
                      responsive for better user experience.",
        category: "Performance",
        read_time: "10 min read",
    },
    Article {
        title: "State Management Solutions",
        description: "Compare different state management approaches and learn when to use \
                      each one in your projects.",
        category: "Architecture",
        read_time: "12 min read",
    },
];

#[derive(Debug)]
pub struct ContentScreen {
    back: Button,
    search: IconButton,
    header: ItemMotion,
    cards: Vec<ContentCard>,
}

impl ContentScreen {
    pub fn new(handle: SchedulerHandle) -> Self {
        let cards = Stagger::new(100, 100)
            .assign(ARTICLES)
            .into_iter()
            .map(|item| ContentCard::new(handle.clone(), item))
            .collect();
        Self {
            back: Button::back(handle.clone()),
            search: IconButton::new(
                "search",
                IconName::Search,
                24.0,
                Action::Trace("Search pressed".to_string()),
            ),
            header: ItemMotion::new(handle).with_entrance(EntranceConfig::header_fade()),
            cards,
        }
    }

    pub fn cards(&self) -> &[ContentCard] {
        &self.cards
    }
}

impl Screen for ContentScreen {
    fn route(&self) -> Route {
        Route::Content
    }

    fn name(&self) -> &'static str {
        "ContentScreen"
    }

    fn mount(&mut self) {
        self.header.mount();
        self.cards.iter_mut().for_each(ContentCard::mount);
    }

    fn unmount(&mut self) {
        self.header.unmount();
        self.cards.iter_mut().for_each(ContentCard::unmount);
        self.back.unmount();
    }

    fn render(&self, cx: &RenderContext<'_>) -> View {
        cx.trace(TraceEvent::screen(self.name()));
        let styles = cx.styles();
        let theme = cx.theme();

        let header = div(styles.header())
            .child(self.back.render(cx))
            .child(text(self.route().title(), styles.subtitle()))
            .child(self.search.render(cx));

        let body = div(Default::default())
            .key("intro")
            .motion(self.header.frame())
            .child(text("Discover Content", styles.title()))
            .child(text(
                "Explore our curated collection of articles and tutorials",
                styles.text_secondary(),
            ))
            .child(
                div(BoxStyle::default().with_margin(Edges {
                    top: theme.spacing.xl,
                    bottom: theme.spacing.xl,
                    ..Edges::ZERO
                }))
                .children(self.cards.iter().map(|card| card.render(cx))),
            );

        div(styles.screen()).child(header).child(body).into()
    }

    fn pressable(&mut self, key: &str) -> Option<&mut dyn Pressable> {
        match key {
            "back" => Some(&mut self.back),
            "search" => Some(&mut self.search),
            _ => indexed(&mut self.cards, ContentCard::KEY_PREFIX, key)
                .map(|c| c as &mut dyn Pressable),
        }
    }
}
