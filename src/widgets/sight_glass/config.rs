use std::ops::Range;

use thiserror::Error;

use crate::animation::TimingFunction;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid level bounds: min {min} must be finite and below max {max}")]
    InvalidLevelBounds { min: f32, max: f32 },
    #[error("Bounce ratio {0} must be greater than 1 or the surface never settles")]
    NonConvergentBounce(f32),
    #[error("Invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f32 },
    #[error("Empty {name} range: {low}..{high}")]
    EmptyRange {
        name: &'static str,
        low: f32,
        high: f32,
    },
}

/// Construction-time tunables for a [`SightGlass`](super::SightGlass).
///
/// Only the vertical offset has no sensible default: it depends on where the
/// host places the glass, so it must be supplied to [`SightGlassConfig::new`].
#[derive(Clone, Debug)]
pub struct SightGlassConfig {
    /// Subtracted from the scaled level to get the surface position
    pub vertical_offset: f32,
    pub min_level: f32,
    pub max_level: f32,
    /// Level reported before the first `set_level`
    pub initial_level: f32,

    /// Overshoot is the travelled distance divided by this
    pub damping_divisor: f32,
    /// Each bounce divides the overshoot by this and flips its sign
    pub bounce_ratio: f32,
    /// Surface travel speed in pixels per second
    pub speed: f32,
    pub min_duration_ms: f32,
    /// Overshoot at or below this ends the oscillation
    pub settle_threshold: f32,
    pub easing: TimingFunction,

    pub wave_count: usize,
    /// Initial (and stirred) drift amplitude is drawn from this range
    pub wave_distance: Range<f32>,
    /// Horizontal jitter of each wave's resting position
    pub wave_offset: Range<f32>,
    /// Drift legs take `1000 / speed` milliseconds
    pub wave_speed: Range<f32>,
    pub wave_min_distance: f32,
    pub wave_damping: f32,
    pub wave_width: f32,
    pub wave_height: f32,

    /// Seed for wave randomization; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl SightGlassConfig {
    pub fn new(vertical_offset: f32) -> Self {
        Self {
            vertical_offset,
            min_level: -10.0,
            max_level: 110.0,
            initial_level: 0.0,
            damping_divisor: 5.0,
            bounce_ratio: 1.5,
            speed: 100.0,
            min_duration_ms: 1000.0,
            settle_threshold: 1.0,
            easing: TimingFunction::EaseInOutSine,
            wave_count: 6,
            wave_distance: 100.0..200.0,
            wave_offset: -200.0..200.0,
            wave_speed: 0.8..1.2,
            wave_min_distance: 10.0,
            wave_damping: 20.0,
            wave_width: 512.0,
            wave_height: 64.0,
            seed: None,
        }
    }

    pub fn level_bounds(mut self, min: f32, max: f32) -> Self {
        self.min_level = min;
        self.max_level = max;
        self
    }

    pub fn initial_level(mut self, level: f32) -> Self {
        self.initial_level = level;
        self
    }

    pub fn damping_divisor(mut self, divisor: f32) -> Self {
        self.damping_divisor = divisor;
        self
    }

    pub fn bounce_ratio(mut self, ratio: f32) -> Self {
        self.bounce_ratio = ratio;
        self
    }

    pub fn speed(mut self, pixels_per_second: f32) -> Self {
        self.speed = pixels_per_second;
        self
    }

    pub fn min_duration_ms(mut self, duration_ms: f32) -> Self {
        self.min_duration_ms = duration_ms;
        self
    }

    pub fn settle_threshold(mut self, threshold: f32) -> Self {
        self.settle_threshold = threshold;
        self
    }

    pub fn easing(mut self, easing: TimingFunction) -> Self {
        self.easing = easing;
        self
    }

    pub fn wave_count(mut self, count: usize) -> Self {
        self.wave_count = count;
        self
    }

    pub fn wave_distance(mut self, range: Range<f32>) -> Self {
        self.wave_distance = range;
        self
    }

    pub fn wave_offset(mut self, range: Range<f32>) -> Self {
        self.wave_offset = range;
        self
    }

    pub fn wave_speed(mut self, range: Range<f32>) -> Self {
        self.wave_speed = range;
        self
    }

    pub fn wave_min_distance(mut self, distance: f32) -> Self {
        self.wave_min_distance = distance;
        self
    }

    pub fn wave_damping(mut self, damping: f32) -> Self {
        self.wave_damping = damping;
        self
    }

    pub fn wave_size(mut self, width: f32, height: f32) -> Self {
        self.wave_width = width;
        self.wave_height = height;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.vertical_offset.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "vertical offset",
                value: self.vertical_offset,
            });
        }
        if !(self.min_level.is_finite() && self.max_level.is_finite())
            || self.min_level >= self.max_level
        {
            return Err(ConfigError::InvalidLevelBounds {
                min: self.min_level,
                max: self.max_level,
            });
        }
        if !self.initial_level.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "initial level",
                value: self.initial_level,
            });
        }
        if !self.bounce_ratio.is_finite() || self.bounce_ratio <= 1.0 {
            return Err(ConfigError::NonConvergentBounce(self.bounce_ratio));
        }

        positive("damping divisor", self.damping_divisor)?;
        positive("speed", self.speed)?;
        positive("minimum duration", self.min_duration_ms)?;
        positive("settle threshold", self.settle_threshold)?;
        positive("wave damping", self.wave_damping)?;
        positive("wave width", self.wave_width)?;
        positive("wave height", self.wave_height)?;

        if !self.wave_min_distance.is_finite() || self.wave_min_distance < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "wave minimum distance",
                value: self.wave_min_distance,
            });
        }

        non_empty("wave distance", &self.wave_distance)?;
        non_empty("wave offset", &self.wave_offset)?;
        non_empty("wave speed", &self.wave_speed)?;
        // The decay floor has to sit below every amplitude a stir can pick
        if self.wave_min_distance >= self.wave_distance.start {
            return Err(ConfigError::InvalidParameter {
                name: "wave minimum distance",
                value: self.wave_min_distance,
            });
        }
        if self.wave_speed.start <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "wave speed",
                value: self.wave_speed.start,
            });
        }

        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter { name, value })
    }
}

fn non_empty(name: &'static str, range: &Range<f32>) -> Result<(), ConfigError> {
    if range.start.is_finite() && range.end.is_finite() && range.start < range.end {
        Ok(())
    } else {
        Err(ConfigError::EmptyRange {
            name,
            low: range.start,
            high: range.end,
        })
    }
}
