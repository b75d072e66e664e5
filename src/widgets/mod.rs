pub mod sight_glass;
pub mod widget;

pub use sight_glass::{ConfigError, GlassState, SightGlass, SightGlassConfig};
pub use widget::{Color, GradientDirection, LinearGradient, Rect, Size};
