// Library crate for the Hi-Lo card game
// This file exposes the public API for the binary and integration tests

pub mod app;
pub mod assets;
pub mod audio;
pub mod config;
pub mod game;
pub mod leaderboard;
pub mod player;
pub mod settings;
pub mod shared;
pub mod ui;

// Re-export commonly used types for easier access in tests
pub use app::{Command, HiLoApp, Screen};
pub use assets::AssetCatalog;
pub use audio::{AudioSink, TracingAudioSink};
pub use config::AppConfig;
pub use game::{Card, Deck, GameSession, Guess, Outcome, Rank, Suit};
pub use player::{InMemoryPlayerRepository, PlayerRepository, SqlitePlayerRepository};
pub use shared::AppError;
