use crate::error::{OrgaError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Startup configuration, stored as JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Database file backing the board
    pub database_path: PathBuf,
    /// Board opened (or created) on startup
    pub board_name: String,
    /// Lists created on a board that has none
    pub default_lists: Vec<String>,
}

impl Config {
    const FILE_NAME: &'static str = ".orga.json";
    const DEFAULT_DATABASE: &'static str = "orga.db";
    const DEFAULT_BOARD: &'static str = "Main Board";
    const DEFAULT_LISTS: [&'static str; 3] = ["Todo", "In Progress", "Done"];

    /// `~/.orga.json`
    pub fn default_path() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(Self::FILE_NAME))
            .ok_or_else(|| OrgaError::ConfigError("no home directory found".to_string()))
    }

    /// Reads the configuration at `path`; a missing file yields the defaults
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).await?;
        serde_json::from_str(&contents)
            .map_err(|err| OrgaError::ConfigError(format!("{}: {}", path.display(), err)))
    }

    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).await?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(Self::DEFAULT_DATABASE),
            board_name: Self::DEFAULT_BOARD.to_string(),
            default_lists: Self::DEFAULT_LISTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
