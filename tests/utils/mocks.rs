use std::path::Path;
use std::sync::{Arc, Mutex};

use hilo::AudioSink;

// ============================================================================
// Mock Infrastructure
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum AudioCue {
    MusicStarted,
    MusicVolume(f32),
    MusicStopped,
    Effect,
}

/// Audio sink that records every cue it receives
#[derive(Clone, Default)]
pub struct RecordingAudioSink {
    cues: Arc<Mutex<Vec<AudioCue>>>,
}

impl RecordingAudioSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cues(&self) -> Vec<AudioCue> {
        self.cues.lock().unwrap().clone()
    }

    pub fn effect_count(&self) -> usize {
        self.cues()
            .iter()
            .filter(|c| **c == AudioCue::Effect)
            .count()
    }

    pub fn clear(&self) {
        self.cues.lock().unwrap().clear();
    }

    fn push(&self, cue: AudioCue) {
        self.cues.lock().unwrap().push(cue);
    }
}

impl AudioSink for RecordingAudioSink {
    fn play_music(&self, _path: &Path) {
        self.push(AudioCue::MusicStarted);
    }

    fn set_music_volume(&self, volume: f32) {
        self.push(AudioCue::MusicVolume(volume));
    }

    fn stop_music(&self) {
        self.push(AudioCue::MusicStopped);
    }

    fn play_effect(&self, _path: &Path) {
        self.push(AudioCue::Effect);
    }
}
