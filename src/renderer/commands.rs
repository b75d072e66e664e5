//! Draw command definitions handed to the host renderer.

use crate::widgets::{Color, LinearGradient, Rect};

/// A single draw operation in the widget's local coordinates.
///
/// The origin is the widget's bottom-left corner and `y` grows upwards, the
/// same basis the surface position is expressed in.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clip everything until the matching [`DrawCommand::PopClip`] to `rect`.
    PushClip(Rect),

    /// End the innermost clip.
    PopClip,

    /// Fill a rectangle with a solid color.
    Rect {
        /// Rectangle bounds
        rect: Rect,
        /// Fill color
        color: Color,
    },

    /// Fill a rectangle with a linear gradient, multiplied by `tint`.
    Gradient {
        /// Rectangle bounds
        rect: Rect,
        /// Color the gradient is multiplied with
        tint: Color,
        /// Gradient endpoints and direction
        gradient: LinearGradient,
    },

    /// Draw the wave sprite for wave `index`.
    Wave {
        /// Wave index in the glass
        index: usize,
        /// Sprite bounds
        rect: Rect,
        /// Sprite tint
        color: Color,
    },
}

impl DrawCommand {
    /// Create a solid rectangle.
    pub fn rect(rect: Rect, color: Color) -> Self {
        Self::Rect { rect, color }
    }

    /// Create a tinted gradient rectangle.
    pub fn gradient(rect: Rect, tint: Color, gradient: LinearGradient) -> Self {
        Self::Gradient {
            rect,
            tint,
            gradient,
        }
    }
}
