//! Kinetic Theme
//!
//! Design tokens (colors, spacing, radii, shadows) and the static styles the
//! presentational components are built from.

pub mod error;
pub mod styles;
pub mod theme;
pub mod tokens;

pub use error::{Result, ThemeError};
pub use styles::{
    Border, BoxStyle, ButtonVariant, Edges, FontWeight, Layout, Styles, TextAlign, TextStyle,
};
pub use theme::Theme;
pub use tokens::{
    ColorToken, ColorTokens, RadiusTokens, ShadowPreset, ShadowTokens, SpacingTokens,
};
