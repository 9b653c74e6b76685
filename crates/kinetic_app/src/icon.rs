//! Named icons
//!
//! The icon set is the closed list of outline-style glyph names the screens
//! use. Looking up any other name fails with [`AppError::UnknownIcon`].

use crate::error::AppError;
use kinetic_core::Color;
use std::fmt;
use std::str::FromStr;

macro_rules! icon_names {
    ($($variant:ident => $name:literal),* $(,)?) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum IconName {
            $($variant,)*
        }

        impl IconName {
            pub const ALL: &'static [IconName] = &[$(IconName::$variant,)*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(IconName::$variant => $name,)*
                }
            }
        }

        impl FromStr for IconName {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(IconName::$variant),)*
                    _ => Err(AppError::UnknownIcon(s.to_string())),
                }
            }
        }
    };
}

icon_names! {
    Bookmark => "bookmark-outline",
    Calendar => "calendar-outline",
    Call => "call-outline",
    Chatbubble => "chatbubble-outline",
    ChevronForward => "chevron-forward-outline",
    Grid => "grid-outline",
    Heart => "heart-outline",
    HelpCircle => "help-circle-outline",
    InformationCircle => "information-circle-outline",
    Location => "location-outline",
    Mail => "mail-outline",
    Moon => "moon-outline",
    Notifications => "notifications-outline",
    Person => "person",
    PersonCircle => "person-circle-outline",
    PersonOutline => "person-outline",
    Rocket => "rocket-outline",
    Search => "search-outline",
    Settings => "settings-outline",
    Shield => "shield-outline",
    Sync => "sync-outline",
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A glyph at a size and tint
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Icon {
    pub name: IconName,
    pub size: f32,
    pub color: Color,
}

impl Icon {
    pub fn new(name: IconName, size: f32, color: Color) -> Self {
        Self { name, size, color }
    }

    /// Look an icon up by its string name
    pub fn named(name: &str, size: f32, color: Color) -> crate::Result<Self> {
        Ok(Self::new(name.parse()?, size, color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        let icon = Icon::named("rocket-outline", 48.0, Color::WHITE).unwrap();
        assert_eq!(icon.name, IconName::Rocket);
        assert_eq!(icon.size, 48.0);
    }

    #[test]
    fn test_every_name_round_trips() {
        for name in IconName::ALL {
            assert_eq!(name.as_str().parse::<IconName>().unwrap(), *name);
        }
    }

    #[test]
    fn test_unknown_icon() {
        let err = Icon::named("spaceship-outline", 24.0, Color::WHITE).unwrap_err();
        assert!(matches!(err, AppError::UnknownIcon(ref n) if n == "spaceship-outline"));
    }
}
