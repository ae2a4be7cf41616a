use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::models::PlayerModel;
use crate::shared::AppError;

const CREATE_PLAYERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS players (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    money INTEGER
)";

/// Trait for player record storage
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    async fn init_schema(&self) -> Result<(), AppError>;
    /// Returns `None` when no record exists for `name`
    async fn load_player(&self, name: &str) -> Result<Option<PlayerModel>, AppError>;
    /// Inserts a record for a new name, otherwise overwrites the stored money
    async fn save_player(&self, name: &str, money: i64) -> Result<(), AppError>;
    /// All players, richest first. Ties keep insertion order.
    async fn list_players_by_money(&self) -> Result<Vec<PlayerModel>, AppError>;
}

/// In-memory implementation of PlayerRepository for tests and throwaway runs
///
/// Data is lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryPlayerRepository {
    players: RwLock<Vec<PlayerModel>>,
}

impl InMemoryPlayerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository with pre-populated (name, money) records
    pub fn with_players(players: &[(&str, i64)]) -> Self {
        let players = players
            .iter()
            .enumerate()
            .map(|(idx, (name, money))| PlayerModel {
                id: idx as i64 + 1,
                name: name.to_string(),
                money: *money,
            })
            .collect();

        Self {
            players: RwLock::new(players),
        }
    }

    pub async fn player_count(&self) -> usize {
        self.players.read().await.len()
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn init_schema(&self) -> Result<(), AppError> {
        Ok(())
    }

    #[instrument(skip(self))]
    async fn load_player(&self, name: &str) -> Result<Option<PlayerModel>, AppError> {
        let players = self.players.read().await;
        let player = players.iter().find(|p| p.name == name).cloned();

        match &player {
            Some(p) => debug!(player = %name, money = p.money, "Player found in memory"),
            None => debug!(player = %name, "Player not found in memory"),
        }

        Ok(player)
    }

    #[instrument(skip(self))]
    async fn save_player(&self, name: &str, money: i64) -> Result<(), AppError> {
        let mut players = self.players.write().await;

        if let Some(existing) = players.iter_mut().find(|p| p.name == name) {
            existing.money = money;
            debug!(player = %name, money, "Player updated in memory");
        } else {
            let id = players.iter().map(|p| p.id).max().unwrap_or(0) + 1;
            players.push(PlayerModel {
                id,
                name: name.to_string(),
                money,
            });
            debug!(player = %name, money, id, "Player inserted in memory");
        }

        Ok(())
    }

    async fn list_players_by_money(&self) -> Result<Vec<PlayerModel>, AppError> {
        let mut players = self.players.read().await.clone();
        players.sort_by(|a, b| b.money.cmp(&a.money).then(a.id.cmp(&b.id)));
        Ok(players)
    }
}

/// SQLite implementation of the player repository
///
/// Every call checks a connection out of the pool for the length of the call
/// only. Writes run in a transaction, which rolls back if it is dropped
/// before commit.
pub struct SqlitePlayerRepository {
    pool: SqlitePool,
}

impl SqlitePlayerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens (creating if needed) the database file and ensures the schema exists
    #[instrument]
    pub async fn open(path: &Path) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| {
                warn!(error = %e, path = %path.display(), "Failed to open player database");
                AppError::DatabaseError(e.to_string())
            })?;

        let repository = Self::new(pool);
        repository.init_schema().await?;
        Ok(repository)
    }

    /// A private in-memory database. One connection that never expires, so
    /// the data lives as long as the repository.
    pub async fn in_memory() -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;

        let repository = Self::new(pool);
        repository.init_schema().await?;
        Ok(repository)
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl PlayerRepository for SqlitePlayerRepository {
    #[instrument(skip(self))]
    async fn init_schema(&self) -> Result<(), AppError> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query(CREATE_PLAYERS_TABLE)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to create players table");
                AppError::DatabaseError(e.to_string())
            })?;

        debug!("Players table ready");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn load_player(&self, name: &str) -> Result<Option<PlayerModel>, AppError> {
        let mut conn = self.pool.acquire().await?;
        let player = sqlx::query_as::<_, PlayerModel>(
            "SELECT id, name, money FROM players WHERE name = ? ORDER BY id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            warn!(error = %e, player = %name, "Failed to load player from database");
            AppError::DatabaseError(e.to_string())
        })?;

        match &player {
            Some(p) => debug!(player = %name, money = p.money, "Player found in database"),
            None => debug!(player = %name, "Player not found in database"),
        }

        Ok(player)
    }

    #[instrument(skip(self))]
    async fn save_player(&self, name: &str, money: i64) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let existing: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM players WHERE name = ? LIMIT 1")
                .bind(name)
                .fetch_optional(&mut *tx)
                .await?;

        let result = if existing.is_some() {
            sqlx::query("UPDATE players SET money = ? WHERE name = ?")
                .bind(money)
                .bind(name)
                .execute(&mut *tx)
                .await
        } else {
            sqlx::query("INSERT INTO players (name, money) VALUES (?, ?)")
                .bind(name)
                .bind(money)
                .execute(&mut *tx)
                .await
        };

        result.map_err(|e| {
            warn!(error = %e, player = %name, "Failed to save player to database");
            AppError::DatabaseError(e.to_string())
        })?;

        tx.commit().await?;

        debug!(player = %name, money, inserted = existing.is_none(), "Player saved to database");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_players_by_money(&self) -> Result<Vec<PlayerModel>, AppError> {
        let mut conn = self.pool.acquire().await?;
        let players = sqlx::query_as::<_, PlayerModel>(
            "SELECT id, name, money FROM players ORDER BY money DESC, id ASC",
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to list players from database");
            AppError::DatabaseError(e.to_string())
        })?;

        debug!(count = players.len(), "Listed players from database");
        Ok(players)
    }
}
