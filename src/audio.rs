//! Audio cue interface
//!
//! The sim names the cues it wants played; actual playback backends live
//! with the host. Calls are fire-and-forget.

use crate::sim::GameEvent;

/// Cue identifiers the sim can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// An obstacle pair was passed
    Point,
    /// The run ended
    Die,
}

impl AudioCue {
    /// Cue for a world event, if the event is audible.
    pub fn from_event(event: GameEvent) -> Option<Self> {
        match event {
            GameEvent::Scored { .. } => Some(AudioCue::Point),
            GameEvent::Ended(_) => Some(AudioCue::Die),
        }
    }
}

/// Fire-and-forget cue playback.
pub trait CuePlayer {
    fn play(&mut self, cue: AudioCue);
}

/// Discards cues, logging them at debug level. For headless hosts and tests.
#[derive(Debug, Default)]
pub struct NullCuePlayer;

impl CuePlayer for NullCuePlayer {
    fn play(&mut self, cue: AudioCue) {
        log::debug!("cue: {cue:?}");
    }
}
