mod animatable;
mod timing;
mod tween;

pub use animatable::Animatable;
pub use timing::TimingFunction;
pub use tween::{AdvanceResult, Tween};

/// Configuration for how a property moves from one value to another
#[derive(Clone, Debug)]
pub struct Transition {
    /// Duration of the animation in milliseconds
    pub duration_ms: f32,
    /// Timing function controlling the animation curve
    pub timing: TimingFunction,
}

impl Transition {
    /// Create a new transition with the given duration and timing function
    pub fn new(duration_ms: f32, timing: TimingFunction) -> Self {
        Self {
            duration_ms,
            timing,
        }
    }
}
