pub mod models;
pub mod repository;
pub mod service;

pub use models::{PlayerEntry, PlayerModel};
pub use repository::{InMemoryPlayerRepository, PlayerRepository, SqlitePlayerRepository};
pub use service::PlayerService;
