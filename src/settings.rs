use serde::{Deserialize, Serialize};

pub const MAX_VOLUME: u8 = 100;

/// What changed for background music after a slider move
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MusicChange {
    Stop,
    /// Start if stopped, then set the volume (0.0..=1.0)
    Play { volume: f32 },
}

/// Audio settings owned by the app and handed to the game screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioSettings {
    bgm_volume: u8,
    sfx_volume: u8,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            bgm_volume: MAX_VOLUME,
            sfx_volume: MAX_VOLUME,
        }
    }
}

impl AudioSettings {
    /// Background music slider; values above 100 are clamped
    pub fn set_bgm_volume(&mut self, value: u8) -> MusicChange {
        self.bgm_volume = value.min(MAX_VOLUME);
        if self.bgm_volume > 0 {
            MusicChange::Play {
                volume: self.bgm_volume as f32 / MAX_VOLUME as f32,
            }
        } else {
            MusicChange::Stop
        }
    }

    /// Sound-effect slider; effects are on for any value above zero
    pub fn set_sfx_volume(&mut self, value: u8) {
        self.sfx_volume = value.min(MAX_VOLUME);
    }

    pub fn bgm_volume(&self) -> u8 {
        self.bgm_volume
    }

    pub fn sfx_volume(&self) -> u8 {
        self.sfx_volume
    }

    pub fn sfx_enabled(&self) -> bool {
        self.sfx_volume > 0
    }

    pub fn music_enabled(&self) -> bool {
        self.bgm_volume > 0
    }
}
