//! Theme bundle
//!
//! A [`Theme`] is the read-only token set handed to every component. It can
//! be dumped to (and read back from) TOML or JSON.

use crate::error::Result;
use crate::styles::Styles;
use crate::tokens::*;
use kinetic_core::Color;
use serde::{Deserialize, Serialize};

/// The full token set
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    #[serde(default)]
    pub colors: ColorTokens,
    #[serde(default)]
    pub spacing: SpacingTokens,
    #[serde(default)]
    pub radii: RadiusTokens,
    #[serde(default)]
    pub shadows: ShadowTokens,
}

impl Theme {
    /// The app's dark indigo theme
    pub fn midnight() -> Self {
        Self {
            name: "midnight".to_string(),
            colors: ColorTokens::midnight(),
            spacing: SpacingTokens::default(),
            radii: RadiusTokens::default(),
            shadows: ShadowTokens::default(),
        }
    }

    pub fn color(&self, token: ColorToken) -> Color {
        self.colors.get(token)
    }

    /// Component styles resolved against this theme
    pub fn styles(&self) -> Styles<'_> {
        Styles::new(self)
    }

    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::midnight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_dump_reads_back() {
        let theme = Theme::midnight();
        let text = theme.to_toml().unwrap();
        assert!(text.contains("primary = \"#6366F1\""));

        let parsed = Theme::from_toml(&text).unwrap();
        assert_eq!(parsed.name, "midnight");
        assert_eq!(parsed.color(ColorToken::Background).to_string(), "#0F172A");
        assert_eq!(parsed.spacing, theme.spacing);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let theme = Theme::from_toml("name = \"custom\"\n[radii]\nsm = 2.0\nmd = 4.0\nlg = 8.0\nxl = 10.0\n")
            .unwrap();
        assert_eq!(theme.radii.sm, 2.0);
        assert_eq!(theme.spacing.md, 16.0);
        assert_eq!(theme.colors, ColorTokens::midnight());
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let mut text = Theme::midnight().to_toml().unwrap();
        text = text.replace("#6366F1", "#nothex");
        assert!(Theme::from_toml(&text).is_err());
    }

    #[test]
    fn test_json_dump() {
        let json = Theme::midnight().to_json().unwrap();
        assert!(json.contains("\"text_secondary\": \"#CBD5E1\""));
    }
}
