use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Database model for the players table
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct PlayerModel {
    pub id: i64,
    pub name: String,
    pub money: i64,
}

/// How a name was resolved on the entry screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEntry {
    /// No record existed; one was created with the starting balance
    New { name: String, money: i64 },
    Returning { name: String, money: i64 },
}

impl PlayerEntry {
    pub fn name(&self) -> &str {
        match self {
            PlayerEntry::New { name, .. } | PlayerEntry::Returning { name, .. } => name,
        }
    }

    pub fn money(&self) -> i64 {
        match self {
            PlayerEntry::New { money, .. } | PlayerEntry::Returning { money, .. } => *money,
        }
    }

    pub fn greeting(&self) -> String {
        match self {
            PlayerEntry::New { name, .. } => format!("Welcome, {}!", name),
            PlayerEntry::Returning { name, .. } => format!("Welcome back, {}!", name),
        }
    }
}
