use serde::{Deserialize, Serialize};
use std::fmt;

use crate::player::PlayerModel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based position
    pub position: usize,
    pub name: String,
    pub money: i64,
}

impl fmt::Display for LeaderboardEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} - Money: ${}", self.position, self.name, self.money)
    }
}

/// Display copy of the players table plus the balances seen this session.
/// Never written back to the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeaderboardView {
    entries: Vec<LeaderboardEntry>,
    session_scores: Vec<i64>,
}

impl LeaderboardView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entries with `players`, which must already be ordered
    /// richest first
    pub fn rebuild(&mut self, players: Vec<PlayerModel>) {
        self.entries = players
            .into_iter()
            .enumerate()
            .map(|(idx, player)| LeaderboardEntry {
                position: idx + 1,
                name: player.name,
                money: player.money,
            })
            .collect();
    }

    /// Records a post-round balance, keeping the cache sorted high to low
    pub fn add_score(&mut self, money: i64) {
        let at = self.session_scores.partition_point(|&s| s >= money);
        self.session_scores.insert(at, money);
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn session_scores(&self) -> &[i64] {
        &self.session_scores
    }

    pub fn best_session_score(&self) -> Option<i64> {
        self.session_scores.first().copied()
    }

    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.to_string()).collect()
    }
}
