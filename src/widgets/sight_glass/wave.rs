use rand::Rng;

use crate::animation::{TimingFunction, Transition};
use crate::timeline::{Completion, Timeline, Token, Track};

use super::SightGlassConfig;

/// Direction of a wave's outbound leg
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Positive,
    Negative,
}

impl Phase {
    /// Alternate phases across the ensemble so neighbouring waves drift apart
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 1 {
            Phase::Negative
        } else {
            Phase::Positive
        }
    }

    pub fn sign(self) -> f32 {
        match self {
            Phase::Positive => 1.0,
            Phase::Negative => -1.0,
        }
    }
}

/// Which half of the drift cycle is playing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriftLeg {
    Idle,
    Outbound,
    Returning,
}

/// Shrink a drift amplitude by one cycle's worth of damping.
///
/// Larger amplitudes lose less relative to their size but the result never
/// drops below `min_distance`.
pub fn decay_distance(distance: f32, damping: f32, min_distance: f32) -> f32 {
    if !distance.is_finite() || distance <= 0.0 {
        return min_distance;
    }
    (distance - (damping / distance) * 100.0).max(min_distance)
}

/// One wave drifting back and forth around its resting offset
#[derive(Clone, Debug)]
pub struct WaveDrifter {
    index: usize,
    base_offset: f32,
    phase: Phase,
    /// Each leg takes `1000 / speed` ms
    speed: f32,
    current_distance: f32,
    max_distance: f32,
    min_distance: f32,
    damping: f32,
    easing: TimingFunction,
    x: f32,
    leg: DriftLeg,
    token: Option<Token>,
}

impl WaveDrifter {
    pub fn new(
        index: usize,
        base_offset: f32,
        speed: f32,
        distance: f32,
        config: &SightGlassConfig,
    ) -> Self {
        Self {
            index,
            base_offset,
            phase: Phase::for_index(index),
            speed,
            current_distance: distance,
            max_distance: distance,
            min_distance: config.wave_min_distance,
            damping: config.wave_damping,
            easing: config.easing.clone(),
            x: base_offset,
            leg: DriftLeg::Idle,
            token: None,
        }
    }

    /// Create wave `index` with randomized distance, offset and speed
    pub fn random<R: Rng + ?Sized>(index: usize, config: &SightGlassConfig, rng: &mut R) -> Self {
        let distance = rng.gen_range(config.wave_distance.clone());
        let base_offset = -(config.wave_width / 2.0) + rng.gen_range(config.wave_offset.clone());
        let speed = rng.gen_range(config.wave_speed.clone());
        Self::new(index, base_offset, speed, distance, config)
    }

    pub fn track(&self) -> Track {
        Track::Wave(self.index)
    }

    /// Begin drifting. The wave keeps re-arming itself from then on.
    pub fn start(&mut self, timeline: &mut Timeline) {
        self.x = self.base_offset;
        self.animate(timeline);
    }

    fn animate(&mut self, timeline: &mut Timeline) {
        let target = self.base_offset + self.phase.sign() * self.current_distance;
        self.schedule(timeline, target);
        self.leg = DriftLeg::Outbound;
        self.current_distance =
            decay_distance(self.current_distance, self.damping, self.min_distance);
    }

    fn schedule(&mut self, timeline: &mut Timeline, to: f32) {
        let transition = Transition::new(self.leg_duration_ms(), self.easing.clone());
        self.token = Some(timeline.schedule(self.track(), self.x, to, transition));
    }

    /// Handle a finished leg: turn around after the outbound leg, start the
    /// next cycle after the return leg.
    pub fn on_complete(&mut self, completion: &Completion, timeline: &mut Timeline) {
        if self.token != Some(completion.token) {
            log::trace!(
                "Wave {}: ignoring stale completion {:?}",
                self.index,
                completion.token
            );
            return;
        }

        self.token = None;
        self.x = completion.value;

        match self.leg {
            DriftLeg::Outbound => {
                self.schedule(timeline, self.base_offset);
                self.leg = DriftLeg::Returning;
            }
            DriftLeg::Returning => self.animate(timeline),
            DriftLeg::Idle => {}
        }
    }

    /// Reset the drift amplitude to a fresh maximum. The running leg is left
    /// alone; the next outbound leg uses the new amplitude.
    pub fn stir(&mut self, max_distance: f32) {
        self.max_distance = max_distance;
        self.current_distance = max_distance;
    }

    /// Apply an intermediate value from the timeline
    pub fn apply(&mut self, x: f32) {
        self.x = x;
    }

    pub fn leg_duration_ms(&self) -> f32 {
        1000.0 / self.speed
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn base_offset(&self) -> f32 {
        self.base_offset
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn current_distance(&self) -> f32 {
        self.current_distance
    }

    pub fn max_distance(&self) -> f32 {
        self.max_distance
    }

    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }

    pub fn leg(&self) -> DriftLeg {
        self.leg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config() -> SightGlassConfig {
        SightGlassConfig::new(280.0)
    }

    fn drive(wave: &mut WaveDrifter, timeline: &mut Timeline, dt_ms: f32) {
        let frame = timeline.advance(dt_ms);
        for (_, value) in &frame.updates {
            wave.apply(*value);
        }
        for completion in &frame.completions {
            wave.on_complete(completion, timeline);
        }
    }

    #[test]
    fn test_decay_is_floored() {
        let mut distance = 200.0;
        for _ in 0..500 {
            let next = decay_distance(distance, 20.0, 10.0);
            assert!(next >= 10.0);
            assert!(next <= distance);
            distance = next;
        }
        assert_eq!(distance, 10.0);
        assert_eq!(decay_distance(0.0, 20.0, 10.0), 10.0);
        assert_eq!(decay_distance(-5.0, 20.0, 10.0), 10.0);
    }

    #[test]
    fn test_decay_formula() {
        // 100 - (20 / 100) * 100
        assert_eq!(decay_distance(100.0, 20.0, 10.0), 80.0);
    }

    #[test]
    fn test_phases_alternate() {
        assert_eq!(Phase::for_index(0), Phase::Positive);
        assert_eq!(Phase::for_index(1), Phase::Negative);
        assert_eq!(Phase::for_index(4).sign(), 1.0);
        assert_eq!(Phase::for_index(5).sign(), -1.0);
    }

    #[test]
    fn test_random_respects_ranges() {
        let config = config();
        let mut rng = StdRng::seed_from_u64(3);
        for index in 0..20 {
            let wave = WaveDrifter::random(index, &config, &mut rng);
            assert!(config.wave_distance.contains(&wave.max_distance()));
            assert!(config.wave_speed.contains(&wave.speed()));
            let jitter = wave.base_offset() + config.wave_width / 2.0;
            assert!((-200.0..=200.0).contains(&jitter));
            assert_eq!(wave.x(), wave.base_offset());
        }
    }

    #[test]
    fn test_drift_cycle() {
        let config = config();
        let mut timeline = Timeline::new();
        let mut wave = WaveDrifter::new(1, 0.0, 2.0, 100.0, &config);

        wave.start(&mut timeline);
        assert_eq!(wave.leg(), DriftLeg::Outbound);
        assert_eq!(timeline.target(wave.track()), Some(-100.0));
        assert_eq!(wave.leg_duration_ms(), 500.0);
        assert_eq!(wave.current_distance(), 80.0);

        drive(&mut wave, &mut timeline, 500.0);
        assert_eq!(wave.x(), -100.0);
        assert_eq!(wave.leg(), DriftLeg::Returning);
        assert_eq!(timeline.target(wave.track()), Some(0.0));

        drive(&mut wave, &mut timeline, 500.0);
        assert_eq!(wave.x(), 0.0);
        assert_eq!(wave.leg(), DriftLeg::Outbound);
        assert_eq!(timeline.target(wave.track()), Some(-80.0));
    }

    #[test]
    fn test_never_stops_drifting() {
        let config = config();
        let mut timeline = Timeline::new();
        let mut wave = WaveDrifter::new(0, 0.0, 1.0, 150.0, &config);
        wave.start(&mut timeline);

        for _ in 0..2_000 {
            drive(&mut wave, &mut timeline, 100.0);
            assert!(timeline.is_scheduled(wave.track()));
        }
        assert_eq!(wave.current_distance(), config.wave_min_distance);
    }

    #[test]
    fn test_stir_restores_amplitude_without_cancelling() {
        let config = config();
        let mut timeline = Timeline::new();
        let mut wave = WaveDrifter::new(0, 0.0, 1.0, 100.0, &config);
        wave.start(&mut timeline);
        let token = timeline.token(wave.track());

        wave.stir(180.0);

        assert_eq!(wave.current_distance(), 180.0);
        assert_eq!(wave.max_distance(), 180.0);
        assert_eq!(timeline.token(wave.track()), token);

        // Finish the current cycle; the next outbound leg uses the stirred amplitude
        drive(&mut wave, &mut timeline, 1000.0);
        drive(&mut wave, &mut timeline, 1000.0);
        assert_eq!(timeline.target(wave.track()), Some(180.0));
    }
}
