use std::sync::Arc;

use hilo::{
    AssetCatalog, Card, Deck, HiLoApp, InMemoryPlayerRepository, PlayerRepository,
    SqlitePlayerRepository,
};

use tempfile::TempDir;

use super::mocks::RecordingAudioSink;

/// A fresh directory that is removed when dropped
pub fn scratch_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("hilo-test-")
        .tempdir()
        .expect("Should create temp dir")
}

/// Asset root with both audio files present. Keep the `TempDir` alive for
/// as long as the catalog is used.
pub fn assets_with_audio() -> (TempDir, AssetCatalog) {
    let dir = scratch_dir();
    std::fs::write(dir.path().join("BGM.mp3"), b"").unwrap();
    std::fs::write(dir.path().join("SFX.mp3"), b"").unwrap();
    let assets = AssetCatalog::load(dir.path().to_path_buf());
    (dir, assets)
}

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub app: HiLoApp,
    pub repository: Arc<dyn PlayerRepository>,
    pub audio: RecordingAudioSink,
    // Dropping this removes the asset root
    pub _assets_dir: TempDir,
}

pub struct TestSetupBuilder {
    players: Vec<(String, i64)>,
    deck: Option<Vec<Card>>,
    sqlite: bool,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            players: vec![],
            deck: None,
            sqlite: false,
        }
    }

    pub fn with_player(mut self, name: &str, money: i64) -> Self {
        self.players.push((name.to_string(), money));
        self
    }

    /// Every new game and reshuffle deals these cards in order
    pub fn with_deck(mut self, cards: Vec<Card>) -> Self {
        self.deck = Some(cards);
        self
    }

    pub fn with_sqlite(mut self) -> Self {
        self.sqlite = true;
        self
    }

    pub async fn build(self) -> TestSetup {
        let repository: Arc<dyn PlayerRepository> = if self.sqlite {
            Arc::new(SqlitePlayerRepository::in_memory().await.unwrap())
        } else {
            Arc::new(InMemoryPlayerRepository::new())
        };

        for (name, money) in &self.players {
            repository.save_player(name, *money).await.unwrap();
        }

        let audio = RecordingAudioSink::new();
        let (assets_dir, assets) = assets_with_audio();
        let mut app = HiLoApp::new(repository.clone(), Arc::new(audio.clone()), assets);

        if let Some(cards) = self.deck {
            app = app.with_deck_factory(move || Deck::with_cards(cards.clone()));
        }

        TestSetup {
            app,
            repository,
            audio,
            _assets_dir: assets_dir,
        }
    }
}
