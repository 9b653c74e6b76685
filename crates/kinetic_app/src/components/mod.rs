//! Presentational components
//!
//! Each component owns its [`kinetic_animation::ItemMotion`] and builds a
//! [`crate::View`] from the theme. Interactive ones implement [`Pressable`];
//! activating them yields an [`Action`] for the app to dispatch.

mod button;
mod content_card;
mod feature_card;
mod profile_item;
mod setting_item;

pub use button::{Button, IconButton};
pub use content_card::{Article, ContentCard};
pub use feature_card::{Feature, FeatureCard};
pub use profile_item::{ProfileField, ProfileItem};
pub use setting_item::{Setting, SettingItem, SettingKind};

use crate::navigation::Route;

/// What activating an element asks the app to do
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Navigate(Route),
    Back,
    /// No real backend: report the interaction and do nothing else
    Trace(String),
}

/// Static destination of a row or card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Route(Route),
    Trace(&'static str),
}

impl Target {
    pub fn action(&self) -> Action {
        match self {
            Target::Route(route) => Action::Navigate(*route),
            Target::Trace(message) => Action::Trace((*message).to_string()),
        }
    }
}

/// Pointer handling of an interactive element
pub trait Pressable {
    /// Pointer went down. Returns false if the element ignores presses.
    fn press_in(&mut self) -> bool;

    fn press_out(&mut self);

    fn cancel_press(&mut self);

    /// Action a completed press triggers
    fn action(&self) -> Option<Action>;
}
