//! Design tokens
//!
//! Named constants every component reads its colors, spacing, corner radii
//! and shadows from.

use kinetic_core::{Color, Shadow};
use serde::{Deserialize, Serialize};

/// Semantic color slots
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Primary,
    PrimaryDark,
    Secondary,
    Accent,
    Background,
    BackgroundAlt,
    Card,
    Text,
    TextSecondary,
    Border,
    Success,
    Warning,
    Error,
}

impl ColorToken {
    pub const ALL: [ColorToken; 13] = [
        ColorToken::Primary,
        ColorToken::PrimaryDark,
        ColorToken::Secondary,
        ColorToken::Accent,
        ColorToken::Background,
        ColorToken::BackgroundAlt,
        ColorToken::Card,
        ColorToken::Text,
        ColorToken::TextSecondary,
        ColorToken::Border,
        ColorToken::Success,
        ColorToken::Warning,
        ColorToken::Error,
    ];
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorTokens {
    pub primary: Color,
    pub primary_dark: Color,
    pub secondary: Color,
    pub accent: Color,
    pub background: Color,
    pub background_alt: Color,
    pub card: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub border: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl ColorTokens {
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::PrimaryDark => self.primary_dark,
            ColorToken::Secondary => self.secondary,
            ColorToken::Accent => self.accent,
            ColorToken::Background => self.background,
            ColorToken::BackgroundAlt => self.background_alt,
            ColorToken::Card => self.card,
            ColorToken::Text => self.text,
            ColorToken::TextSecondary => self.text_secondary,
            ColorToken::Border => self.border,
            ColorToken::Success => self.success,
            ColorToken::Warning => self.warning,
            ColorToken::Error => self.error,
        }
    }

    /// Indigo-on-slate dark palette
    pub fn midnight() -> Self {
        Self {
            primary: Color::from_hex(0x6366F1),
            primary_dark: Color::from_hex(0x4F46E5),
            secondary: Color::from_hex(0xEC4899),
            accent: Color::from_hex(0x10B981),
            background: Color::from_hex(0x0F172A),
            background_alt: Color::from_hex(0x1E293B),
            card: Color::from_hex(0x334155),
            text: Color::from_hex(0xF8FAFC),
            text_secondary: Color::from_hex(0xCBD5E1),
            border: Color::from_hex(0x475569),
            success: Color::from_hex(0x10B981),
            warning: Color::from_hex(0xF59E0B),
            error: Color::from_hex(0xEF4444),
        }
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self::midnight()
    }
}

/// Spacing scale (logical pixels)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpacingTokens {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            xs: 4.0,
            sm: 8.0,
            md: 16.0,
            lg: 24.0,
            xl: 32.0,
            xxl: 48.0,
        }
    }
}

/// Corner radii (logical pixels)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadiusTokens {
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            sm: 6.0,
            md: 12.0,
            lg: 16.0,
            xl: 24.0,
        }
    }
}

/// A drop shadow preset with its platform elevation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShadowPreset {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub opacity: f32,
    pub elevation: u32,
}

impl ShadowPreset {
    pub fn new(offset_y: f32, blur: f32, opacity: f32, elevation: u32) -> Self {
        Self {
            offset_x: 0.0,
            offset_y,
            blur,
            opacity,
            elevation,
        }
    }

    /// Resolve to a drawable black shadow
    pub fn to_shadow(&self) -> Shadow {
        Shadow::new(
            self.offset_x,
            self.offset_y,
            self.blur,
            Color::BLACK.with_alpha(self.opacity),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShadowTokens {
    pub small: ShadowPreset,
    pub medium: ShadowPreset,
    pub large: ShadowPreset,
}

impl Default for ShadowTokens {
    fn default() -> Self {
        Self {
            small: ShadowPreset::new(1.0, 3.0, 0.12, 2),
            medium: ShadowPreset::new(4.0, 6.0, 0.12, 4),
            large: ShadowPreset::new(10.0, 15.0, 0.10, 8),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_color_token_resolves() {
        let colors = ColorTokens::midnight();
        for token in ColorToken::ALL {
            assert_eq!(colors.get(token).a, 1.0, "{token:?}");
        }
        assert_eq!(colors.get(ColorToken::Primary).to_string(), "#6366F1");
        assert_eq!(colors.get(ColorToken::Error).to_string(), "#EF4444");
    }

    #[test]
    fn test_spacing_scale_is_ascending() {
        let s = SpacingTokens::default();
        let scale = [s.xs, s.sm, s.md, s.lg, s.xl, s.xxl];
        assert_eq!(scale, [4.0, 8.0, 16.0, 24.0, 32.0, 48.0]);
    }

    #[test]
    fn test_shadow_elevations() {
        let shadows = ShadowTokens::default();
        assert_eq!(shadows.small.elevation, 2);
        assert_eq!(shadows.medium.elevation, 4);
        assert_eq!(shadows.large.elevation, 8);

        let drawn = shadows.medium.to_shadow();
        assert_eq!(drawn.offset_y, 4.0);
        assert!((drawn.color.a - 0.12).abs() < 1e-6);
    }
}
