//! An animated sight glass: a bar-graph style level widget whose liquid
//! surface springs to each new level with a damped bounce while waves drift
//! along the top.
//!
//! The crate owns motion only. Hosts drive it with [`SightGlass::tick`],
//! forward level changes and resizes, and replay the [`DrawCommand`]s that
//! [`SightGlass::paint`] records with whatever renderer they use.
//!
//! [`SightGlass::tick`]: widgets::SightGlass::tick
//! [`SightGlass::paint`]: widgets::SightGlass::paint
//! [`DrawCommand`]: renderer::DrawCommand

pub mod animation;
pub mod invalidation;
pub mod renderer;
pub mod timeline;
pub mod widgets;

pub mod prelude {
    pub use crate::animation::{TimingFunction, Transition};
    pub use crate::invalidation::ChangeFlags;
    pub use crate::renderer::{DrawCommand, PaintContext};
    pub use crate::timeline::{Timeline, Track};
    pub use crate::widgets::{
        Color, ConfigError, GlassState, GradientDirection, LinearGradient, Rect, SightGlass,
        SightGlassConfig, Size,
    };
}
