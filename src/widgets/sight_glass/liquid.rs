//! Vertical motion of the liquid surface.
//!
//! A level change moves the surface in two phases. First an eased approach
//! that stops short of (or beyond) the target by half the overshoot, then a
//! chain of bounces whose amplitude shrinks geometrically until it drops to
//! the settle threshold. Each phase is one tween on [`Track::Surface`]; the
//! chain advances when the timeline reports the tween's completion.

use crate::animation::{TimingFunction, Transition};
use crate::timeline::{Completion, Timeline, Token, Track};

use super::SightGlassConfig;

/// Tunables for the surface motion
#[derive(Clone, Debug)]
pub struct SurfaceParams {
    pub vertical_offset: f32,
    pub damping_divisor: f32,
    pub bounce_ratio: f32,
    /// Pixels per second
    pub speed: f32,
    pub min_duration_ms: f32,
    pub settle_threshold: f32,
    pub easing: TimingFunction,
}

impl SurfaceParams {
    pub fn from_config(config: &SightGlassConfig) -> Self {
        Self {
            vertical_offset: config.vertical_offset,
            damping_divisor: config.damping_divisor,
            bounce_ratio: config.bounce_ratio,
            speed: config.speed,
            min_duration_ms: config.min_duration_ms,
            settle_threshold: config.settle_threshold,
            easing: config.easing.clone(),
        }
    }

    /// Time to cover `distance` pixels, never shorter than the minimum duration
    pub fn duration_for(&self, distance: f32) -> f32 {
        (distance.abs() / self.speed * 1000.0).max(self.min_duration_ms)
    }
}

/// What the oscillation does next
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OscillationStep {
    /// Overshoot has decayed to the threshold; the surface stays put
    Settle,
    /// Move by the current overshoot, then continue with `next_overshoot`
    Bounce {
        to: f32,
        duration_ms: f32,
        next_overshoot: f32,
    },
}

/// One step of the damped oscillation, starting from `position`.
pub fn oscillate_step(overshoot: f32, position: f32, params: &SurfaceParams) -> OscillationStep {
    if !overshoot.is_finite() || overshoot.abs() <= params.settle_threshold {
        return OscillationStep::Settle;
    }

    OscillationStep::Bounce {
        to: position + overshoot,
        duration_ms: params.duration_for(overshoot),
        next_overshoot: -(overshoot / params.bounce_ratio),
    }
}

/// Phase of the surface motion
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceMotion {
    /// Nothing scheduled
    Settled,
    /// Travelling towards the target; `overshoot` seeds the first bounce
    Approaching { overshoot: f32 },
    /// Bouncing around the target; `overshoot` is the next bounce
    Bouncing { overshoot: f32 },
}

/// Owns the surface position and drives it towards the current target
pub struct LevelAnimator {
    params: SurfaceParams,
    position: f32,
    target: f32,
    motion: SurfaceMotion,
    /// Token of the surface tween this animator is waiting on
    token: Option<Token>,
}

impl LevelAnimator {
    pub fn new(params: SurfaceParams) -> Self {
        Self {
            params,
            position: 0.0,
            target: 0.0,
            motion: SurfaceMotion::Settled,
            token: None,
        }
    }

    /// Surface position for `level` in a container `container_height` tall
    pub fn target_for(&self, level: f32, container_height: f32) -> f32 {
        (container_height / 100.0) * level - self.params.vertical_offset
    }

    /// Send the surface to `level`, replacing any motion in progress.
    pub fn set_level(
        &mut self,
        level: f32,
        container_height: f32,
        instant: bool,
        timeline: &mut Timeline,
    ) {
        self.cancel(timeline);
        self.target = self.target_for(level, container_height);

        if instant {
            self.position = self.target;
            log::debug!("Surface snapped to {}", self.position);
            return;
        }

        let delta = self.position - self.target;
        if delta == 0.0 {
            return;
        }

        let overshoot = delta / self.params.damping_divisor;
        let duration_ms = self.params.duration_for(delta);
        self.start(timeline, self.target - overshoot / 2.0, duration_ms);
        self.motion = SurfaceMotion::Approaching { overshoot };

        log::debug!(
            "Surface {} -> {} (overshoot {}, {}ms)",
            self.position,
            self.target,
            overshoot,
            duration_ms
        );
    }

    /// Handle a finished surface tween. Returns true when the surface settled.
    ///
    /// Completions for tweens this animator no longer waits on are ignored.
    pub fn on_complete(&mut self, completion: &Completion, timeline: &mut Timeline) -> bool {
        if self.token != Some(completion.token) {
            log::trace!("Ignoring stale surface completion {:?}", completion.token);
            return false;
        }

        self.token = None;
        self.position = completion.value;

        match self.motion {
            SurfaceMotion::Approaching { overshoot } | SurfaceMotion::Bouncing { overshoot } => {
                self.oscillate(overshoot, timeline)
            }
            SurfaceMotion::Settled => false,
        }
    }

    fn oscillate(&mut self, overshoot: f32, timeline: &mut Timeline) -> bool {
        match oscillate_step(overshoot, self.position, &self.params) {
            OscillationStep::Settle => {
                self.motion = SurfaceMotion::Settled;
                log::debug!("Surface settled at {} (target {})", self.position, self.target);
                true
            }
            OscillationStep::Bounce {
                to,
                duration_ms,
                next_overshoot,
            } => {
                self.start(timeline, to, duration_ms);
                self.motion = SurfaceMotion::Bouncing {
                    overshoot: next_overshoot,
                };
                false
            }
        }
    }

    fn start(&mut self, timeline: &mut Timeline, to: f32, duration_ms: f32) {
        let transition = Transition::new(duration_ms, self.params.easing.clone());
        self.token = Some(timeline.schedule(Track::Surface, self.position, to, transition));
    }

    /// Drop the in-flight trajectory, leaving the surface where it is
    pub fn cancel(&mut self, timeline: &mut Timeline) {
        if self.token.take().is_some() {
            timeline.cancel(Track::Surface);
        }
        self.motion = SurfaceMotion::Settled;
    }

    /// Apply an intermediate value from the timeline
    pub fn apply(&mut self, position: f32) {
        self.position = position;
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn motion(&self) -> SurfaceMotion {
        self.motion
    }

    pub fn is_transitioning(&self) -> bool {
        self.motion != SurfaceMotion::Settled
    }

    pub fn params(&self) -> &SurfaceParams {
        &self.params
    }
}
