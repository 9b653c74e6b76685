//! Shared component styles
//!
//! Static box and text styles resolved from a [`Theme`]. None of these carry
//! behavior; they describe how the presentational shell lays things out.

use crate::theme::Theme;
use crate::tokens::ShadowPreset;
use kinetic_core::Color;

/// Per-side lengths
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    pub const ZERO: Edges = Edges::all(0.0);

    pub const fn all(v: f32) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

/// How a container arranges its children
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    /// Stacked top to bottom
    #[default]
    Column,
    /// Side by side, vertically centered
    Row,
    /// Side by side, pushed to both ends, vertically centered
    SpaceBetween,
    /// Children centered on both axes
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

/// Visual style of a container
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoxStyle {
    pub background: Option<Color>,
    pub radius: f32,
    pub padding: Edges,
    pub margin: Edges,
    pub shadow: Option<ShadowPreset>,
    pub border: Option<Border>,
    pub layout: Layout,
    /// Fixed width and height, if any
    pub size: Option<(f32, f32)>,
    pub min_height: Option<f32>,
}

impl BoxStyle {
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn with_margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_border(mut self, width: f32, color: Color) -> Self {
        self.border = Some(Border { width, color });
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum FontWeight {
    #[default]
    Regular,
    SemiBold,
    ExtraBold,
}

impl FontWeight {
    pub fn value(&self) -> u16 {
        match self {
            FontWeight::Regular => 400,
            FontWeight::SemiBold => 600,
            FontWeight::ExtraBold => 800,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub weight: FontWeight,
    pub color: Color,
    pub line_height: Option<f32>,
    pub align: TextAlign,
}

impl TextStyle {
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn centered(mut self) -> Self {
        self.align = TextAlign::Center;
        self
    }
}

/// Button color treatments
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    /// Outlined, on the alternate background
    Secondary,
    /// Pink call-to-action
    Accent,
    /// Destructive (sign out)
    Danger,
    /// Transparent text button (header back)
    Ghost,
}

/// Style resolver bound to a theme
#[derive(Clone, Copy, Debug)]
pub struct Styles<'a> {
    theme: &'a Theme,
}

impl<'a> Styles<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    pub fn screen(&self) -> BoxStyle {
        BoxStyle {
            background: Some(self.theme.colors.background),
            padding: Edges::symmetric(0.0, self.theme.spacing.md),
            ..Default::default()
        }
    }

    pub fn header(&self) -> BoxStyle {
        let t = self.theme;
        BoxStyle {
            background: Some(t.colors.background_alt),
            padding: Edges::symmetric(t.spacing.lg, t.spacing.md),
            border: Some(Border {
                width: 1.0,
                color: t.colors.border,
            }),
            layout: Layout::SpaceBetween,
            ..Default::default()
        }
    }

    pub fn card(&self) -> BoxStyle {
        let t = self.theme;
        BoxStyle {
            background: Some(t.colors.card),
            radius: t.radii.lg,
            padding: Edges::all(t.spacing.lg),
            margin: Edges::symmetric(t.spacing.sm, 0.0),
            shadow: Some(t.shadows.medium),
            ..Default::default()
        }
    }

    pub fn row(&self) -> BoxStyle {
        BoxStyle {
            layout: Layout::Row,
            ..Default::default()
        }
    }

    pub fn space_between(&self) -> BoxStyle {
        BoxStyle {
            layout: Layout::SpaceBetween,
            ..Default::default()
        }
    }

    pub fn badge(&self) -> BoxStyle {
        let t = self.theme;
        BoxStyle {
            background: Some(t.colors.secondary),
            radius: t.radii.sm,
            padding: Edges::symmetric(t.spacing.xs, t.spacing.sm),
            ..Default::default()
        }
    }

    /// Round avatar of the given diameter
    pub fn avatar(&self, diameter: f32) -> BoxStyle {
        let t = self.theme;
        BoxStyle {
            background: Some(t.colors.primary),
            radius: diameter / 2.0,
            margin: Edges {
                bottom: t.spacing.md,
                ..Edges::ZERO
            },
            layout: Layout::Center,
            size: Some((diameter, diameter)),
            ..Default::default()
        }
    }

    /// Rounded square behind a row's leading icon
    pub fn icon_tile(&self, background: Color, radius: f32, padding: f32) -> BoxStyle {
        BoxStyle {
            background: Some(background),
            radius,
            padding: Edges::all(padding),
            margin: Edges {
                right: self.theme.spacing.md,
                ..Edges::ZERO
            },
            layout: Layout::Center,
            ..Default::default()
        }
    }

    pub fn divider(&self) -> BoxStyle {
        BoxStyle {
            background: Some(self.theme.colors.border),
            margin: Edges::symmetric(self.theme.spacing.md, 0.0),
            min_height: Some(1.0),
            ..Default::default()
        }
    }

    pub fn button_container(&self) -> BoxStyle {
        BoxStyle {
            padding: Edges::symmetric(self.theme.spacing.lg, self.theme.spacing.md),
            ..Default::default()
        }
    }

    pub fn button(&self, variant: ButtonVariant, disabled: bool) -> BoxStyle {
        let t = self.theme;
        let base = BoxStyle {
            background: Some(t.colors.primary),
            radius: t.radii.md,
            padding: Edges::symmetric(t.spacing.md, t.spacing.lg),
            shadow: Some(t.shadows.medium),
            layout: Layout::Center,
            min_height: Some(48.0),
            ..Default::default()
        };
        let styled = match variant {
            ButtonVariant::Primary => base,
            ButtonVariant::Secondary => BoxStyle {
                background: Some(t.colors.background_alt),
                border: Some(Border {
                    width: 1.0,
                    color: t.colors.border,
                }),
                shadow: Some(t.shadows.small),
                ..base
            },
            ButtonVariant::Accent => base.with_background(t.colors.secondary),
            ButtonVariant::Danger => base.with_background(t.colors.error),
            ButtonVariant::Ghost => BoxStyle {
                background: None,
                shadow: None,
                padding: Edges::symmetric(t.spacing.sm, 0.0),
                ..base
            },
        };
        if disabled {
            styled.with_background(t.colors.border)
        } else {
            styled
        }
    }

    pub fn button_text(&self, variant: ButtonVariant, disabled: bool) -> TextStyle {
        let t = self.theme;
        let color = if disabled {
            t.colors.text_secondary
        } else if variant == ButtonVariant::Ghost {
            t.colors.primary
        } else {
            t.colors.text
        };
        TextStyle {
            size: 16.0,
            weight: FontWeight::SemiBold,
            color,
            line_height: None,
            align: TextAlign::Center,
        }
    }

    pub fn title(&self) -> TextStyle {
        TextStyle {
            size: 28.0,
            weight: FontWeight::ExtraBold,
            color: self.theme.colors.text,
            line_height: None,
            align: TextAlign::Start,
        }
    }

    pub fn subtitle(&self) -> TextStyle {
        TextStyle {
            size: 20.0,
            weight: FontWeight::SemiBold,
            ..self.title()
        }
    }

    pub fn text(&self) -> TextStyle {
        TextStyle {
            size: 16.0,
            weight: FontWeight::Regular,
            color: self.theme.colors.text,
            line_height: Some(24.0),
            align: TextAlign::Start,
        }
    }

    pub fn text_secondary(&self) -> TextStyle {
        TextStyle {
            size: 14.0,
            color: self.theme.colors.text_secondary,
            line_height: Some(20.0),
            ..self.text()
        }
    }

    pub fn badge_text(&self) -> TextStyle {
        TextStyle {
            size: 12.0,
            weight: FontWeight::SemiBold,
            color: self.theme.colors.text,
            line_height: None,
            align: TextAlign::Start,
        }
    }
}
