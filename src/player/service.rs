use std::sync::Arc;
use tracing::{info, instrument};

use super::models::PlayerEntry;
use super::repository::PlayerRepository;
use crate::game::STARTING_MONEY;
use crate::shared::AppError;

/// Resolves names typed on the entry screen and persists balances
pub struct PlayerService {
    repository: Arc<dyn PlayerRepository>,
}

impl PlayerService {
    pub fn new(repository: Arc<dyn PlayerRepository>) -> Self {
        Self { repository }
    }

    /// Looks the player up, creating a record with the starting balance when
    /// none exists
    #[instrument(skip(self))]
    pub async fn enter(&self, name: &str) -> Result<PlayerEntry, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidInput(
                "Player name cannot be empty".to_string(),
            ));
        }

        match self.repository.load_player(name).await? {
            Some(player) => {
                info!(player = %name, money = player.money, "Returning player");
                Ok(PlayerEntry::Returning {
                    name: player.name,
                    money: player.money,
                })
            }
            None => {
                self.repository.save_player(name, STARTING_MONEY).await?;
                info!(player = %name, money = STARTING_MONEY, "New player created");
                Ok(PlayerEntry::New {
                    name: name.to_string(),
                    money: STARTING_MONEY,
                })
            }
        }
    }

    /// Persists the balance after a round, last write wins
    #[instrument(skip(self))]
    pub async fn record_balance(&self, name: &str, money: i64) -> Result<(), AppError> {
        self.repository.save_player(name, money).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::repository::InMemoryPlayerRepository;

    fn service_with(repo: Arc<InMemoryPlayerRepository>) -> PlayerService {
        PlayerService::new(repo)
    }

    #[tokio::test]
    async fn test_new_player_starts_with_starting_money() {
        let repo = Arc::new(InMemoryPlayerRepository::new());
        let service = service_with(repo.clone());

        let entry = service.enter("Alice").await.unwrap();
        assert_eq!(
            entry,
            PlayerEntry::New {
                name: "Alice".to_string(),
                money: 10_000
            }
        );

        let stored = repo.load_player("Alice").await.unwrap().unwrap();
        assert_eq!(stored.money, 10_000);
    }

    #[tokio::test]
    async fn test_returning_player_keeps_stored_money() {
        let repo = Arc::new(InMemoryPlayerRepository::with_players(&[("Bob", 9_500)]));
        let service = service_with(repo.clone());

        let entry = service.enter("Bob").await.unwrap();
        assert_eq!(entry.greeting(), "Welcome back, Bob!");
        assert_eq!(entry.money(), 9_500);
        assert_eq!(repo.player_count().await, 1);
    }

    #[tokio::test]
    async fn test_name_is_trimmed() {
        let repo = Arc::new(InMemoryPlayerRepository::new());
        let service = service_with(repo.clone());

        let entry = service.enter("  Carol \n").await.unwrap();
        assert_eq!(entry.name(), "Carol");
        assert!(repo.load_player("Carol").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected() {
        let repo = Arc::new(InMemoryPlayerRepository::new());
        let service = service_with(repo.clone());

        let result = service.enter("   ").await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
        assert_eq!(repo.player_count().await, 0);
    }

    #[tokio::test]
    async fn test_record_balance_overwrites() {
        let repo = Arc::new(InMemoryPlayerRepository::new());
        let service = service_with(repo.clone());

        service.enter("Alice").await.unwrap();
        service.record_balance("Alice", 10_500).await.unwrap();

        assert_eq!(repo.load_player("Alice").await.unwrap().unwrap().money, 10_500);
    }
}
