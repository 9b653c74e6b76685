//! Routes and navigation history
//!
//! The [`Navigator`] is a plain stack of routes. Pushing always adds an
//! entry (the same route may appear more than once) and going back pops to
//! the immediately prior one. The root entry is never popped.

use crate::error::AppError;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Home,
    Profile,
    Content,
    Settings,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Home, Route::Profile, Route::Content, Route::Settings];

    pub fn as_path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Profile => "/profile",
            Route::Content => "/content",
            Route::Settings => "/settings",
        }
    }

    /// Header title shown on the screen
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Profile => "Profile",
            Route::Content => "Content",
            Route::Settings => "Settings",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

impl FromStr for Route {
    type Err = AppError;

    /// Accepts the path form (`/profile`) or the bare name (`profile`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let name = name.strip_prefix('/').unwrap_or(name);
        match name.to_ascii_lowercase().as_str() {
            "" | "index" | "home" => Ok(Route::Home),
            "profile" => Ok(Route::Profile),
            "content" => Ok(Route::Content),
            "settings" => Ok(Route::Settings),
            _ => Err(AppError::UnknownRoute(s.to_string())),
        }
    }
}

/// Route history stack
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new(root: Route) -> Self {
        Self { stack: vec![root] }
    }

    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or_default()
    }

    pub fn root(&self) -> Route {
        self.stack.first().copied().unwrap_or_default()
    }

    /// Number of entries, including the root
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    pub fn history(&self) -> &[Route] {
        &self.stack
    }

    pub fn push(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Pop to the prior route. Returns the new current route, or `None` at
    /// the root.
    pub fn back(&mut self) -> Option<Route> {
        if !self.can_go_back() {
            return None;
        }
        self.stack.pop();
        Some(self.current())
    }

    /// Drop all history and start over at `root`
    pub fn reset(&mut self, root: Route) {
        self.stack.clear();
        self.stack.push(root);
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::Home);
        assert_eq!("/profile".parse::<Route>().unwrap(), Route::Profile);
        assert_eq!("settings".parse::<Route>().unwrap(), Route::Settings);
        for route in Route::ALL {
            assert_eq!(route.as_path().parse::<Route>().unwrap(), route);
        }
    }

    #[test]
    fn test_unknown_route() {
        let err = "/checkout".parse::<Route>().unwrap_err();
        assert!(matches!(err, AppError::UnknownRoute(ref name) if name == "/checkout"));
    }

    #[test]
    fn test_back_returns_to_prior_route() {
        let mut nav = Navigator::default();
        nav.push(Route::Settings);
        nav.push(Route::Profile);
        assert_eq!(nav.back(), Some(Route::Settings));
        assert_eq!(nav.back(), Some(Route::Home));
        assert_eq!(nav.back(), None);
        assert_eq!(nav.current(), Route::Home);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_push_allows_repeats() {
        let mut nav = Navigator::default();
        nav.push(Route::Profile);
        nav.push(Route::Settings);
        nav.push(Route::Profile);
        assert_eq!(
            nav.history(),
            &[Route::Home, Route::Profile, Route::Settings, Route::Profile]
        );
        nav.reset(Route::Content);
        assert_eq!(nav.history(), &[Route::Content]);
        assert_eq!(nav.root(), Route::Content);
    }
}
