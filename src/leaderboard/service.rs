use std::sync::Arc;
use tracing::{debug, instrument};

use super::models::LeaderboardView;
use crate::player::PlayerRepository;
use crate::shared::AppError;

/// Keeps the leaderboard view and rebuilds it from the store on demand
pub struct LeaderboardService {
    repository: Arc<dyn PlayerRepository>,
    view: LeaderboardView,
}

impl LeaderboardService {
    pub fn new(repository: Arc<dyn PlayerRepository>) -> Self {
        Self {
            repository,
            view: LeaderboardView::new(),
        }
    }

    /// Reloads every player from the store, richest first
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<&LeaderboardView, AppError> {
        let players = self.repository.list_players_by_money().await?;
        debug!(count = players.len(), "Rebuilding leaderboard");
        self.view.rebuild(players);
        Ok(&self.view)
    }

    pub fn add_score(&mut self, money: i64) {
        self.view.add_score(money);
    }

    pub fn view(&self) -> &LeaderboardView {
        &self.view
    }
}
