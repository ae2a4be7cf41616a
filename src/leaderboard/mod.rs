pub mod models;
pub mod service;

pub use models::{LeaderboardEntry, LeaderboardView};
pub use service::LeaderboardService;
