use super::{Animatable, Transition};

/// Result of advancing a tween, indicating whether the value changed
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceResult<T> {
    /// Value did not change (tween already finished or same value)
    NoChange,
    /// Value changed to a new value
    Changed(T),
}

impl<T> AdvanceResult<T> {
    /// Returns true if the value changed
    pub fn is_changed(&self) -> bool {
        matches!(self, AdvanceResult::Changed(_))
    }
}

/// A single eased interpolation from one value to another.
///
/// Time is supplied by the caller through [`Tween::advance`] rather than read
/// from the wall clock, so a tween is fully deterministic under a fixed frame
/// step.
#[derive(Clone, Debug)]
pub struct Tween<T: Animatable> {
    start: T,
    target: T,
    current: T,
    transition: Transition,
    elapsed_ms: f32,
}

impl<T: Animatable> Tween<T> {
    pub fn new(start: T, target: T, transition: Transition) -> Self {
        Self {
            current: start.clone(),
            start,
            target,
            transition,
            elapsed_ms: 0.0,
        }
    }

    /// Advance by `dt_ms` milliseconds and return whether the value changed.
    ///
    /// Time past the end of the tween is dropped; the value lands exactly on
    /// the target.
    pub fn advance(&mut self, dt_ms: f32) -> AdvanceResult<T> {
        if self.is_finished() {
            return AdvanceResult::NoChange;
        }

        self.elapsed_ms += dt_ms.max(0.0);
        let t = self.progress();

        let new_value = if t >= 1.0 {
            self.target.clone()
        } else {
            T::lerp(&self.start, &self.target, self.transition.timing.evaluate(t))
        };

        let changed = new_value != self.current;
        self.current = new_value.clone();

        if changed {
            AdvanceResult::Changed(new_value)
        } else {
            AdvanceResult::NoChange
        }
    }

    /// Linear progress in [0, 1]. Zero-length tweens are always complete.
    pub fn progress(&self) -> f32 {
        if self.transition.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms / self.transition.duration_ms).min(1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0 && self.current == self.target
    }

    /// Get current value
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Get target value
    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn duration_ms(&self) -> f32 {
        self.transition.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::TimingFunction;

    #[test]
    fn test_tween_new() {
        let tween = Tween::new(0.0f32, 100.0, Transition::new(300.0, TimingFunction::Linear));

        assert_eq!(*tween.current(), 0.0);
        assert_eq!(*tween.target(), 100.0);
        assert!(!tween.is_finished());
    }

    #[test]
    fn test_tween_linear_progress() {
        let mut tween = Tween::new(0.0f32, 100.0, Transition::new(400.0, TimingFunction::Linear));

        assert_eq!(tween.advance(100.0), AdvanceResult::Changed(25.0));
        assert_eq!(tween.advance(100.0), AdvanceResult::Changed(50.0));
        assert!(!tween.is_finished());
    }

    #[test]
    fn test_tween_lands_on_target() {
        let mut tween = Tween::new(
            10.0f32,
            -20.0,
            Transition::new(1000.0, TimingFunction::EaseInOutSine),
        );

        // Overshooting the duration clamps to the target
        let result = tween.advance(5000.0);
        assert_eq!(result, AdvanceResult::Changed(-20.0));
        assert!(tween.is_finished());
        assert_eq!(tween.advance(16.0), AdvanceResult::NoChange);
    }

    #[test]
    fn test_zero_duration_finishes_on_first_advance() {
        let mut tween = Tween::new(0.0f32, 5.0, Transition::new(0.0, TimingFunction::Linear));

        assert_eq!(tween.progress(), 1.0);
        assert!(!tween.is_finished());
        assert!(tween.advance(0.0).is_changed());
        assert!(tween.is_finished());
    }

    #[test]
    fn test_same_start_and_target() {
        let mut tween = Tween::new(7.0f32, 7.0, Transition::new(100.0, TimingFunction::Linear));

        assert_eq!(tween.advance(50.0), AdvanceResult::NoChange);
        assert!(!tween.is_finished());
        tween.advance(50.0);
        assert!(tween.is_finished());
    }

    #[test]
    fn test_negative_dt_is_ignored() {
        let mut tween = Tween::new(0.0f32, 100.0, Transition::new(100.0, TimingFunction::Linear));

        assert_eq!(tween.advance(-50.0), AdvanceResult::NoChange);
        assert_eq!(tween.progress(), 0.0);
    }
}
