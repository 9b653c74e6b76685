//! Sampled visual transforms
//!
//! Animators produce a [`MotionFrame`] each time the presentation layer
//! samples them. Frames from independent animators compose: translations
//! add, scale and opacity multiply.

/// Translation, uniform scale and opacity of an element at one instant
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionFrame {
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl MotionFrame {
    /// Identity transform, fully visible
    pub const REST: MotionFrame = MotionFrame {
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };

    /// Combine two frames acting on the same element
    pub fn compose(self, other: MotionFrame) -> MotionFrame {
        MotionFrame {
            translate_x: self.translate_x + other.translate_x,
            translate_y: self.translate_y + other.translate_y,
            scale: self.scale * other.scale,
            opacity: self.opacity * other.opacity,
        }
    }

    pub fn is_rest(&self) -> bool {
        *self == Self::REST
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0 && self.scale > 0.0
    }
}

impl Default for MotionFrame {
    fn default() -> Self {
        Self::REST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_multiplies_scale_and_opacity() {
        let entrance = MotionFrame {
            translate_y: 20.0,
            scale: 0.5,
            opacity: 0.5,
            ..MotionFrame::REST
        };
        let press = MotionFrame {
            scale: 0.96,
            opacity: 0.8,
            ..MotionFrame::REST
        };

        let frame = entrance.compose(press);
        assert_eq!(frame.translate_y, 20.0);
        assert!((frame.scale - 0.48).abs() < 1e-6);
        assert!((frame.opacity - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_rest_is_identity() {
        let frame = MotionFrame {
            translate_x: -30.0,
            scale: 0.7,
            opacity: 0.2,
            ..MotionFrame::REST
        };
        assert_eq!(frame.compose(MotionFrame::REST), frame);
        assert!(MotionFrame::default().is_rest());
        assert!(!MotionFrame { opacity: 0.0, ..MotionFrame::REST }.is_visible());
    }
}
