//! Positional sound emitter state. Playback is state-only here: the module
//! tracks what should be audible and where, and an audio backend (out of
//! scope for this crate) would consume that state.

use corelib::Vec3;

#[derive(Clone, Debug, PartialEq)]
pub struct SoundModule {
    /// Name of the cue this emitter plays, e.g. an asset key.
    cue: String,
    /// Emitter position in world space.
    emitter: Vec3,
    playing: bool,
}

impl SoundModule {
    pub fn new(cue: impl Into<String>, emitter: Vec3) -> Self {
        Self {
            cue: cue.into(),
            emitter,
            playing: false,
        }
    }

    pub fn cue(&self) -> &str {
        &self.cue
    }

    pub fn emitter(&self) -> Vec3 {
        self.emitter
    }

    pub fn set_emitter(&mut self, position: Vec3) {
        self.emitter = position;
    }

    /// Start the cue. Idempotent while already playing.
    pub fn play(&mut self) {
        if !self.playing {
            log::debug!("sound cue '{}' started", self.cue);
        }
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}
