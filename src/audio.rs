use std::path::Path;
use tracing::{debug, info};

/// Output for background music and sound-effect cues
pub trait AudioSink: Send + Sync {
    fn play_music(&self, path: &Path);
    fn set_music_volume(&self, volume: f32);
    fn stop_music(&self);
    fn play_effect(&self, path: &Path);
}

/// Sink for the terminal build, which has no audio device. Cues are logged.
#[derive(Debug, Default)]
pub struct TracingAudioSink;

impl TracingAudioSink {
    pub fn new() -> Self {
        Self
    }
}

impl AudioSink for TracingAudioSink {
    fn play_music(&self, path: &Path) {
        info!(path = %path.display(), "Background music looping");
    }

    fn set_music_volume(&self, volume: f32) {
        debug!(volume, "Background music volume");
    }

    fn stop_music(&self) {
        info!("Background music stopped");
    }

    fn play_effect(&self, path: &Path) {
        debug!(path = %path.display(), "Sound effect");
    }
}
