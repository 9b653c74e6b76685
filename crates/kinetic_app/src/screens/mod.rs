//! Screens
//!
//! One screen per [`Route`]. A screen owns every component instance it
//! shows, so dropping it removes all of their animated values and pending
//! entrances from the scheduler.

mod content;
mod home;
mod profile;
mod settings;

pub use content::ContentScreen;
pub use home::HomeScreen;
pub use profile::ProfileScreen;
pub use settings::{SettingsScreen, SettingsState};

use crate::components::Pressable;
use crate::config::AppConfig;
use crate::context::RenderContext;
use crate::error::{AppError, Result};
use crate::navigation::Route;
use crate::view::View;
use kinetic_animation::SchedulerHandle;
use std::fmt;

pub trait Screen: fmt::Debug {
    fn route(&self) -> Route;

    /// Name reported when the screen renders
    fn name(&self) -> &'static str;

    /// Start entrances. Runs once per instance; later calls do nothing.
    fn mount(&mut self);

    /// Cancel pending entrances and release held presses
    fn unmount(&mut self);

    fn render(&self, cx: &RenderContext<'_>) -> View;

    /// Interactive element addressed by `key`
    fn pressable(&mut self, key: &str) -> Option<&mut dyn Pressable>;

    /// Flip a boolean preference. Returns the new value.
    fn toggle(&mut self, key: &str) -> Result<bool> {
        Err(AppError::UnknownToggle {
            screen: self.name(),
            key: key.to_string(),
        })
    }

    fn toggle_value(&self, _key: &str) -> Option<bool> {
        None
    }
}

/// Construct the screen for `route`, not yet mounted
pub fn build(route: Route, handle: SchedulerHandle, config: &AppConfig) -> Box<dyn Screen> {
    match route {
        Route::Home => Box::new(HomeScreen::new(handle)),
        Route::Profile => Box::new(ProfileScreen::new(handle)),
        Route::Content => Box::new(ContentScreen::new(handle)),
        Route::Settings => Box::new(SettingsScreen::new(handle, &config.app.version)),
    }
}

/// Resolve `prefix:N` against a list
fn indexed<'a, T>(items: &'a mut [T], prefix: &str, key: &str) -> Option<&'a mut T> {
    let index = key
        .strip_prefix(prefix)?
        .strip_prefix(':')?
        .parse::<usize>()
        .ok()?;
    items.get_mut(index)
}
