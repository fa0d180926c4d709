//! Sound-effect seam for the host audio collaborator
//!
//! The sim never plays audio. It records [`GameEvent`]s, the host drains
//! them after each update and forwards the mapped effects to its sink.
//! Playback is fire-and-forget; the core never waits on it.

use crate::sim::state::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits a paddle
    PaddleHit,
    /// Ball hits the top or bottom wall
    WallHit,
    /// A goal was scored
    Score,
    /// Difficulty stage advanced
    StageUp,
    /// Ball served
    Launch,
    /// Session started
    Start,
}

impl SoundEffect {
    /// Effect cue for a simulation event
    pub fn from_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::SessionStarted => SoundEffect::Start,
            GameEvent::Launched => SoundEffect::Launch,
            GameEvent::WallBounce => SoundEffect::WallHit,
            GameEvent::PaddleHit(_) => SoundEffect::PaddleHit,
            GameEvent::Goal(_) => SoundEffect::Score,
            GameEvent::StageUp(_) => SoundEffect::StageUp,
        }
    }
}

/// Playback sink implemented by the host
pub trait AudioSink {
    /// Play a sound effect; must not block
    fn play(&mut self, effect: SoundEffect);
}

/// Discards all effects
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Records effects instead of playing them (tests, headless demo)
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    pub played: Vec<SoundEffect>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, effect: SoundEffect) {
        self.played.push(effect);
    }
}
