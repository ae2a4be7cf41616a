use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::game::Card;

pub const BACK_CARD_IMAGE: &str = "images/back_card.png";
pub const MUSIC_FILE: &str = "BGM.mp3";
pub const EFFECT_FILE: &str = "SFX.mp3";

/// Resolves asset paths under one root directory.
///
/// Images follow `images/<Suit>/<Rank>.png` with the numeric rank. Audio is
/// checked once when the catalog is loaded; a missing file leaves that cue
/// unset instead of failing.
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    root: PathBuf,
    music: Option<PathBuf>,
    effect: Option<PathBuf>,
}

impl AssetCatalog {
    pub fn load(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let music = locate(&root, MUSIC_FILE);
        let effect = locate(&root, EFFECT_FILE);

        info!(
            root = %root.display(),
            music = music.is_some(),
            effect = effect.is_some(),
            "Assets loaded"
        );

        Self {
            root,
            music,
            effect,
        }
    }

    pub fn card_image(&self, card: &Card) -> PathBuf {
        self.root
            .join("images")
            .join(card.suit.name())
            .join(format!("{}.png", card.rank_value()))
    }

    pub fn back_card_image(&self) -> PathBuf {
        self.root.join(BACK_CARD_IMAGE)
    }

    pub fn music(&self) -> Option<&Path> {
        self.music.as_deref()
    }

    pub fn effect(&self) -> Option<&Path> {
        self.effect.as_deref()
    }
}

fn locate(root: &Path, file: &str) -> Option<PathBuf> {
    let path = root.join(file);
    if path.is_file() {
        Some(path)
    } else {
        warn!(path = %path.display(), "Audio asset missing, cue disabled");
        None
    }
}
