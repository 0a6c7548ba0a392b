//! Configuration management

use crate::domain::PeriodKind;
use crate::error::{Result, TaskrollError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Marker token looked up in the target note to anchor insertions
pub const DEFAULT_MARKER: &str = "button-staskRollover";

/// Folder name for each period type, relative to the journal root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folders {
    pub daily: String,
    pub weekly: String,
    pub monthly: String,
    pub annual: String,
}

impl Default for Folders {
    fn default() -> Self {
        Folders {
            daily: "daily".to_string(),
            weekly: "weekly".to_string(),
            monthly: "monthly".to_string(),
            annual: "annual".to_string(),
        }
    }
}

impl Folders {
    pub fn for_kind(&self, kind: PeriodKind) -> &str {
        match kind {
            PeriodKind::Daily => &self.daily,
            PeriodKind::Weekly => &self.weekly,
            PeriodKind::Monthly => &self.monthly,
            PeriodKind::Annual => &self.annual,
        }
    }
}

// `folders` is a TOML table and must serialize after the plain values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub marker: String,
    pub created: DateTime<Utc>,
    pub folders: Folders,
}

impl Config {
    /// Create a new config with default values
    pub fn new(marker: Option<String>) -> Self {
        Config {
            marker: marker.unwrap_or_else(|| DEFAULT_MARKER.to_string()),
            created: Utc::now(),
            folders: Folders::default(),
        }
    }

    /// Load config from .taskroll/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".taskroll").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TaskrollError::NotJournalDirectory(path.to_path_buf())
            } else {
                TaskrollError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| TaskrollError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .taskroll/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let taskroll_dir = path.join(".taskroll");
        let config_path = taskroll_dir.join("config.toml");

        if !taskroll_dir.exists() {
            fs::create_dir(&taskroll_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| TaskrollError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}
