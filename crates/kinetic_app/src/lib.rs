//! Kinetic Application
//!
//! The four-screen demo app built on the Kinetic animation and theme crates:
//! route navigation, icons, presentational components with entrance and
//! press motion, and a headless runtime that drives it all from a virtual
//! clock.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use kinetic_app::{App, AppConfig};
//! use kinetic_core::NullSink;
//! use kinetic_theme::Theme;
//!
//! let mut app = App::new(AppConfig::default(), Theme::midnight(), Arc::new(NullSink)).unwrap();
//! app.click("feature:2").unwrap();
//! app.advance_frames(60);
//! assert_eq!(app.current_route().as_path(), "/settings");
//! ```

mod app;
pub mod components;
mod config;
mod context;
mod error;
mod icon;
mod navigation;
pub mod screens;
mod view;

#[cfg(test)]
mod tests;

pub use app::App;
pub use components::Action;
pub use config::{AnimationSection, AppConfig, AppSection, LoggingSection, CONFIG_FILE};
pub use context::RenderContext;
pub use error::{AppError, Result};
pub use icon::{Icon, IconName};
pub use navigation::{Navigator, Route};
pub use screens::Screen;
pub use view::{div, text, Container, SwitchView, TextView, View};
