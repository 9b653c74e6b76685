//! Headless app runtime
//!
//! [`App`] owns the animation scheduler and a stack of live screens that
//! mirrors the navigation history. Pushing a route mounts a fresh screen on
//! top (the one below keeps running); going back unmounts and drops the top
//! screen, which removes its animated values from the scheduler.
//!
//! Pointer events are addressed by element key. A pointer-up activates the
//! element only when it ends a pointer-down on the same element.

use crate::components::Action;
use crate::config::AppConfig;
use crate::context::RenderContext;
use crate::error::{AppError, Result};
use crate::navigation::{Navigator, Route};
use crate::screens::{self, Screen};
use crate::view::View;
use kinetic_animation::AnimationScheduler;
use kinetic_core::{SharedSink, TraceEvent};
use kinetic_theme::Theme;
use std::mem;
use tracing::{debug, info};

pub struct App {
    config: AppConfig,
    theme: Theme,
    sink: SharedSink,
    scheduler: AnimationScheduler,
    navigator: Navigator,
    /// Top of the stack
    current: Box<dyn Screen>,
    /// Screens beneath the current one, bottom first
    below: Vec<Box<dyn Screen>>,
    /// Element holding an accepted pointer-down
    armed: Option<String>,
}

impl App {
    /// Launch at the configured initial route
    pub fn new(config: AppConfig, theme: Theme, sink: SharedSink) -> Result<Self> {
        let root: Route = config.app.initial_route.parse()?;
        let scheduler = AnimationScheduler::with_max_step(config.animation.max_step_ms);
        let mut current = screens::build(root, scheduler.handle(), &config);
        current.mount();
        info!(route = %root, "app launched");

        Ok(Self {
            config,
            theme,
            sink,
            scheduler,
            navigator: Navigator::new(root),
            current,
            below: Vec::new(),
            armed: None,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn scheduler(&self) -> &AnimationScheduler {
        &self.scheduler
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn current_route(&self) -> Route {
        self.navigator.current()
    }

    pub fn screen(&self) -> &dyn Screen {
        self.current.as_ref()
    }

    /// Navigate by route name (`/profile`, `settings`, ...)
    pub fn navigate_to(&mut self, route: &str) -> Result<()> {
        let route: Route = route.parse()?;
        self.push(route);
        Ok(())
    }

    pub fn push(&mut self, route: Route) {
        self.release_armed();
        let from = self.navigator.current();
        let mut screen = screens::build(route, self.scheduler.handle(), &self.config);
        screen.mount();
        let previous = mem::replace(&mut self.current, screen);
        self.below.push(previous);
        self.navigator.push(route);
        self.sink
            .trace(TraceEvent::navigated(from.as_path(), route.as_path()));
    }

    /// Return to the prior screen. Returns false at the root.
    pub fn back(&mut self) -> bool {
        let Some(previous) = self.below.pop() else {
            debug!("back at root ignored");
            return false;
        };
        self.release_armed();
        let from = self.navigator.current();
        let mut top = mem::replace(&mut self.current, previous);
        top.unmount();
        drop(top);
        let to = self.navigator.back().unwrap_or_default();
        self.sink
            .trace(TraceEvent::navigated(from.as_path(), to.as_path()));
        true
    }

    /// Pointer-down on `key`. Returns whether the element accepted it.
    pub fn pointer_down(&mut self, key: &str) -> Result<bool> {
        self.release_armed();
        let screen = self.current.name();
        let element = self
            .current
            .pressable(key)
            .ok_or_else(|| unknown_element(screen, key))?;
        let accepted = element.press_in();
        if accepted {
            self.armed = Some(key.to_string());
        }
        Ok(accepted)
    }

    /// Pointer-up on `key`. Dispatches and returns the element's action when
    /// it completes a press.
    pub fn pointer_up(&mut self, key: &str) -> Result<Option<Action>> {
        let completes_press = self.armed.as_deref() == Some(key);
        if !completes_press {
            self.release_armed();
        }
        let screen = self.current.name();
        let element = self
            .current
            .pressable(key)
            .ok_or_else(|| unknown_element(screen, key))?;
        element.press_out();
        let action = if completes_press {
            element.action()
        } else {
            None
        };
        self.armed = None;

        if let Some(action) = &action {
            self.dispatch(action.clone());
        }
        Ok(action)
    }

    /// Pointer left `key` or the gesture was interrupted. Never activates.
    pub fn pointer_cancel(&mut self, key: &str) -> Result<()> {
        let screen = self.current.name();
        self.current
            .pressable(key)
            .ok_or_else(|| unknown_element(screen, key))?
            .cancel_press();
        if self.armed.as_deref() == Some(key) {
            self.armed = None;
        }
        Ok(())
    }

    /// Pointer-down then pointer-up on the same element
    pub fn click(&mut self, key: &str) -> Result<Option<Action>> {
        self.pointer_down(key)?;
        self.pointer_up(key)
    }

    /// Flip a switch on the current screen
    pub fn toggle(&mut self, key: &str) -> Result<bool> {
        self.current.toggle(key)
    }

    pub fn toggle_value(&self, key: &str) -> Option<bool> {
        self.current.toggle_value(key)
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Navigate(route) => self.push(route),
            Action::Back => {
                self.back();
            }
            Action::Trace(name) => self.sink.trace(TraceEvent::action(name)),
        }
    }

    /// Advance the animation clock. Returns whether anything still animates.
    pub fn advance_ms(&mut self, dt_ms: f64) -> bool {
        self.scheduler.advance_ms(dt_ms)
    }

    /// Advance by `n` frames at the configured frame rate
    pub fn advance_frames(&mut self, n: u32) -> bool {
        let frame_ms = self.config.animation.frame_ms();
        let mut animating = self.scheduler.has_active_animations();
        for _ in 0..n {
            animating = self.scheduler.advance_ms(frame_ms);
        }
        animating
    }

    /// Advance by wall-clock time since the previous tick
    pub fn tick(&mut self) -> bool {
        self.scheduler.tick()
    }

    /// Anything in flight or waiting to start
    pub fn is_animating(&self) -> bool {
        self.scheduler.has_active_animations()
    }

    /// Build the current screen's view
    pub fn render(&self) -> View {
        let cx = RenderContext::new(&self.theme, self.sink.as_ref());
        self.current.render(&cx)
    }

    /// Throw away all session state and relaunch at the initial route
    pub fn restart(&mut self) -> Result<()> {
        let root: Route = self.config.app.initial_route.parse()?;
        self.armed = None;
        self.current.unmount();
        for screen in &mut self.below {
            screen.unmount();
        }
        self.below.clear();

        self.scheduler = AnimationScheduler::with_max_step(self.config.animation.max_step_ms);
        let mut screen = screens::build(root, self.scheduler.handle(), &self.config);
        screen.mount();
        self.current = screen;
        self.navigator.reset(root);
        info!(route = %root, "app restarted");
        Ok(())
    }

    fn release_armed(&mut self) {
        if let Some(key) = self.armed.take() {
            if let Some(element) = self.current.pressable(&key) {
                element.cancel_press();
            }
        }
    }
}

fn unknown_element(screen: &'static str, key: &str) -> AppError {
    AppError::UnknownElement {
        screen,
        key: key.to_string(),
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("route", &self.navigator.current())
            .field("depth", &self.navigator.depth())
            .field("clock_ms", &self.scheduler.now_ms())
            .finish()
    }
}
