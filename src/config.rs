use std::path::PathBuf;

pub const DEFAULT_DATABASE_PATH: &str = "hilo.db";
pub const DEFAULT_ASSETS_DIR: &str = ".";

/// Runtime configuration, read from the environment with defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub assets_dir: PathBuf,
    /// Keep players in memory instead of the database file
    pub in_memory: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            in_memory: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            database_path: lookup("HILO_DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            assets_dir: lookup("HILO_ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.assets_dir),
            in_memory: lookup("HILO_IN_MEMORY")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.in_memory),
        }
    }
}
