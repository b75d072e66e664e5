//! Animated sight glass level widget.
//!
//! A [`SightGlass`] shows a liquid whose surface springs to the current level
//! with a damped bounce while a set of waves drifts sideways along the top.
//! The host owns the frame loop: it forwards level changes and resizes, calls
//! [`SightGlass::tick`] once per frame and repaints when the returned flags ask
//! for it.
//!
//! ## Example
//!
//! ```
//! use sightglass::prelude::*;
//!
//! let mut glass = SightGlass::new(SightGlassConfig::new(280.0).seed(42)).unwrap();
//! glass.resize(100.0, 500.0);
//! glass.set_level(50.0); // first level snaps into place
//! assert_eq!(glass.surface_position(), -30.0);
//!
//! glass.set_level(80.0); // later levels animate
//! while glass.state() == GlassState::Transitioning {
//!     glass.tick(16.0);
//! }
//! ```

mod config;
mod liquid;
mod style;
mod wave;

pub use config::{ConfigError, SightGlassConfig};
pub use liquid::{oscillate_step, LevelAnimator, OscillationStep, SurfaceMotion, SurfaceParams};
pub use style::{wave_tint, GlassStyle};
pub use wave::{decay_distance, DriftLeg, Phase, WaveDrifter};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::invalidation::ChangeFlags;
use crate::renderer::PaintContext;
use crate::timeline::{Timeline, Track};
use crate::widgets::{Color, LinearGradient, Rect, Size};

/// Lifecycle of the liquid surface
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlassState {
    /// The surface has never been positioned
    Uninitialized,
    /// The surface is at rest
    Settled,
    /// The surface is approaching or bouncing around its target
    Transitioning,
}

/// Clamp `raw` into `[min, max]`. NaN has no meaningful position and yields
/// `None`.
pub fn clamp_level(raw: f32, min: f32, max: f32) -> Option<f32> {
    if raw.is_nan() {
        None
    } else {
        Some(raw.clamp(min, max))
    }
}

pub struct SightGlass {
    config: SightGlassConfig,
    level: f32,
    size: Size,
    /// The next `set_level` is the first one and must snap
    first_level: bool,
    /// The surface has been placed at least once
    synced: bool,
    liquid: LevelAnimator,
    waves: Vec<WaveDrifter>,
    style: GlassStyle,
    timeline: Timeline,
    rng: StdRng,
    changes: ChangeFlags,
}

impl SightGlass {
    /// Build a glass and start its waves drifting.
    pub fn new(config: SightGlassConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut timeline = Timeline::new();
        let waves = (0..config.wave_count)
            .map(|index| {
                let mut wave = WaveDrifter::random(index, &config, &mut rng);
                wave.start(&mut timeline);
                wave
            })
            .collect::<Vec<_>>();

        log::debug!(
            "Created sight glass with {} waves (vertical offset {})",
            waves.len(),
            config.vertical_offset
        );

        Ok(Self {
            level: config.initial_level.clamp(config.min_level, config.max_level),
            size: Size::default(),
            first_level: true,
            synced: false,
            liquid: LevelAnimator::new(SurfaceParams::from_config(&config)),
            style: GlassStyle::new(waves.len()),
            waves,
            timeline,
            rng,
            changes: ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT,
            config,
        })
    }

    /// Animate to `level` (the first call after construction snaps instead).
    pub fn set_level(&mut self, level: f32) {
        self.set_level_with(level, false);
    }

    /// Move to `level`, snapping when `instant` is set or when this is the
    /// first level the glass receives. Out-of-range levels are clamped.
    pub fn set_level_with(&mut self, level: f32, instant: bool) {
        let Some(level) = self.clamp_level(level) else {
            log::warn!("Ignoring NaN level");
            return;
        };

        let instant = instant || self.first_level;
        self.first_level = false;
        self.level = level;

        if !instant {
            self.stir();
        }

        if !self.size.is_valid() {
            log::debug!("Level {} deferred until the glass has a valid size", level);
            return;
        }

        log::debug!("Level -> {} (instant: {})", level, instant);

        self.liquid.set_level(level, self.size.height, instant, &mut self.timeline);
        self.synced = true;
        self.changes |= ChangeFlags::NEEDS_PAINT;
    }

    /// Give every wave a new random maximum amplitude
    fn stir(&mut self) {
        for wave in &mut self.waves {
            let max_distance = self.rng.gen_range(self.config.wave_distance.clone());
            wave.stir(max_distance);
        }
    }

    /// The container changed size. The surface jumps straight to the target
    /// for the new height; nothing animates across a resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        let size = Size::new(width, height);
        if size == self.size && self.synced {
            return;
        }
        self.size = size;
        self.changes |= ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT;

        if !size.is_valid() {
            log::warn!("Degenerate size {}x{}, surface update deferred", width, height);
            self.liquid.cancel(&mut self.timeline);
            return;
        }

        log::debug!("Resized to {}x{}", width, height);
        self.liquid.set_level(self.level, height, true, &mut self.timeline);
        self.synced = true;
    }

    /// Advance every animation by `dt_ms` milliseconds and report what
    /// changed since the previous call.
    pub fn tick(&mut self, dt_ms: f32) -> ChangeFlags {
        let frame = self.timeline.advance(dt_ms);

        if !frame.updates.is_empty() {
            self.changes |= ChangeFlags::NEEDS_PAINT;
        }
        for (track, value) in &frame.updates {
            match *track {
                Track::Surface => self.liquid.apply(*value),
                Track::Wave(index) => {
                    if let Some(wave) = self.waves.get_mut(index) {
                        wave.apply(*value);
                    }
                }
            }
        }

        for completion in &frame.completions {
            match completion.track {
                Track::Surface => {
                    if self.liquid.on_complete(completion, &mut self.timeline) {
                        self.changes |= ChangeFlags::SURFACE_SETTLED;
                    }
                }
                Track::Wave(index) => {
                    if let Some(wave) = self.waves.get_mut(index) {
                        wave.on_complete(completion, &mut self.timeline);
                    }
                }
            }
        }

        self.take_changes()
    }

    /// Changes accumulated since the last call, clearing them
    pub fn take_changes(&mut self) -> ChangeFlags {
        std::mem::take(&mut self.changes)
    }

    pub fn set_glass_color(&mut self, color: Color) {
        self.style.glass_color = Some(color);
        self.changes |= ChangeFlags::NEEDS_PAINT;
    }

    pub fn set_glass_shade(&mut self, color: Color) {
        self.style.glass_shade = Some(color);
        self.changes |= ChangeFlags::NEEDS_PAINT;
    }

    pub fn set_liquid_color(&mut self, color: Color) {
        self.style.set_liquid_color(color, &mut self.rng);
        self.changes |= ChangeFlags::NEEDS_PAINT;
    }

    /// Record the glass into `ctx`, back to front, clipped to the bounds.
    pub fn paint(&self, ctx: &mut PaintContext) {
        if !self.size.is_valid() {
            return;
        }

        let bounds = Rect::from_size(self.size);
        let glass = LinearGradient::horizontal(Color::WHITE, Color::BLACK);

        ctx.push_clip(bounds);

        if let Some(tint) = self.style.glass_color {
            ctx.draw_gradient_rect(bounds, tint, glass);
        }

        // The liquid body spans a full container height starting at the surface
        // position; the waves hang from its top edge.
        let body = bounds.offset(0.0, self.liquid.position());
        ctx.draw_rect(body, self.style.liquid_color);

        let wave_y = body.y + body.height - self.config.wave_height;
        for (wave, color) in self.waves.iter().zip(&self.style.wave_colors) {
            let rect = Rect::new(
                wave.x(),
                wave_y,
                self.config.wave_width,
                self.config.wave_height,
            );
            ctx.draw_wave(wave.index(), rect, *color);
        }

        if let Some(tint) = self.style.glass_color {
            ctx.draw_gradient_rect(bounds, tint, glass);
        }
        if let Some(tint) = self.style.glass_shade {
            ctx.draw_gradient_rect(
                bounds,
                tint,
                LinearGradient::vertical(Color::WHITE, Color::BLACK),
            );
        }

        ctx.pop_clip();
    }

    /// Clamp a raw level into this glass's bounds
    pub fn clamp_level(&self, raw: f32) -> Option<f32> {
        clamp_level(raw, self.config.min_level, self.config.max_level)
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn min_level(&self) -> f32 {
        self.config.min_level
    }

    pub fn max_level(&self) -> f32 {
        self.config.max_level
    }

    pub fn state(&self) -> GlassState {
        if !self.synced {
            GlassState::Uninitialized
        } else if self.liquid.is_transitioning() {
            GlassState::Transitioning
        } else {
            GlassState::Settled
        }
    }

    pub fn surface_position(&self) -> f32 {
        self.liquid.position()
    }

    pub fn target_position(&self) -> f32 {
        self.liquid.target()
    }

    pub fn liquid(&self) -> &LevelAnimator {
        &self.liquid
    }

    pub fn waves(&self) -> &[WaveDrifter] {
        &self.waves
    }

    pub fn style(&self) -> &GlassStyle {
        &self.style
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn config(&self) -> &SightGlassConfig {
        &self.config
    }

    /// Whether a surface tween is currently scheduled
    pub fn has_surface_trajectory(&self) -> bool {
        self.timeline.is_scheduled(Track::Surface)
    }
}
