// ============================================================================
// Frame-Driven Tween Scheduler
// ============================================================================
//
// Every animated element owns one track. Scheduling on a track supersedes
// whatever was running there, and each schedule hands out a fresh token so
// owners can tell a live completion from a superseded one.

use std::collections::BTreeMap;

use crate::animation::{AdvanceResult, Transition, Tween};

/// Animated element a tween drives
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Track {
    /// Vertical position of the liquid surface
    Surface,
    /// Horizontal position of the wave at this index
    Wave(usize),
}

/// Generation token identifying one scheduled tween
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token(u64);

/// A tween that ran to completion during [`Timeline::advance`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Completion {
    pub track: Track,
    pub token: Token,
    /// Final value, equal to the tween target
    pub value: f32,
}

/// Everything that happened during one frame
#[derive(Debug, Default)]
pub struct Frame {
    /// New values for tracks whose tween moved this frame
    pub updates: Vec<(Track, f32)>,
    /// Tweens that finished this frame, already removed from the timeline
    pub completions: Vec<Completion>,
}

impl Frame {
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty() && self.completions.is_empty()
    }
}

struct Scheduled {
    token: Token,
    tween: Tween<f32>,
}

/// Single-threaded scheduler holding at most one tween per track
#[derive(Default)]
pub struct Timeline {
    next_token: u64,
    tracks: BTreeMap<Track, Scheduled>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tweening `track` from `from` to `to`.
    /// Any tween already running on the track is cancelled; its completion
    /// will never be reported.
    pub fn schedule(&mut self, track: Track, from: f32, to: f32, transition: Transition) -> Token {
        self.next_token += 1;
        let token = Token(self.next_token);

        let previous = self.tracks.insert(
            track,
            Scheduled {
                token,
                tween: Tween::new(from, to, transition),
            },
        );
        if let Some(previous) = previous {
            log::trace!("{:?}: {:?} superseded by {:?}", track, previous.token, token);
        }

        token
    }

    /// Cancel the tween on `track`. Returns false when nothing was running;
    /// cancelling an idle track is harmless.
    pub fn cancel(&mut self, track: Track) -> bool {
        match self.tracks.remove(&track) {
            Some(scheduled) => {
                log::trace!("{:?}: cancelled {:?}", track, scheduled.token);
                true
            }
            None => false,
        }
    }

    /// Token of the tween currently running on `track`
    pub fn token(&self, track: Track) -> Option<Token> {
        self.tracks.get(&track).map(|s| s.token)
    }

    pub fn is_scheduled(&self, track: Track) -> bool {
        self.tracks.contains_key(&track)
    }

    /// Target of the tween currently running on `track`
    pub fn target(&self, track: Track) -> Option<f32> {
        self.tracks.get(&track).map(|s| *s.tween.target())
    }

    /// Remaining duration of the tween on `track`
    pub fn remaining_ms(&self, track: Track) -> Option<f32> {
        self.tracks
            .get(&track)
            .map(|s| s.tween.duration_ms() * (1.0 - s.tween.progress()))
    }

    /// Number of running tweens
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Advance every tween by `dt_ms`. Finished tweens are removed and
    /// reported in track order.
    pub fn advance(&mut self, dt_ms: f32) -> Frame {
        let mut frame = Frame::default();

        for (track, scheduled) in self.tracks.iter_mut() {
            if let AdvanceResult::Changed(value) = scheduled.tween.advance(dt_ms) {
                frame.updates.push((*track, value));
            }
            if scheduled.tween.is_finished() {
                frame.completions.push(Completion {
                    track: *track,
                    token: scheduled.token,
                    value: *scheduled.tween.current(),
                });
            }
        }

        for completion in &frame.completions {
            self.tracks.remove(&completion.track);
        }

        frame
    }
}
