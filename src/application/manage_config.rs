//! Config management use case

use crate::error::{Result, TaskrollError};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "marker" => Ok(config.marker.clone()),
            "folders.daily" => Ok(config.folders.daily.clone()),
            "folders.weekly" => Ok(config.folders.weekly.clone()),
            "folders.monthly" => Ok(config.folders.monthly.clone()),
            "folders.annual" => Ok(config.folders.annual.clone()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(TaskrollError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: marker, folders.daily, \
                folders.weekly, folders.monthly, folders.annual, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "marker" => {
                if value.trim().is_empty() {
                    return Err(TaskrollError::Config(
                        "Marker token cannot be empty".to_string(),
                    ));
                }
                config.marker = value.to_string();
            }
            "folders.daily" => config.folders.daily = value.to_string(),
            "folders.weekly" => config.folders.weekly = value.to_string(),
            "folders.monthly" => config.folders.monthly = value.to_string(),
            "folders.annual" => config.folders.annual = value.to_string(),
            "created" => {
                return Err(TaskrollError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(TaskrollError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: marker, folders.daily, \
                    folders.weekly, folders.monthly, folders.annual",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::DEFAULT_MARKER;
    use tempfile::TempDir;

    fn journal() -> (TempDir, FileSystemRepository) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new(None)).unwrap();
        (temp, repo)
    }

    #[test]
    fn test_get_marker_default() {
        let (_temp, repo) = journal();
        let service = ConfigService::new(repo);

        assert_eq!(service.get("marker").unwrap(), DEFAULT_MARKER);
    }

    #[test]
    fn test_set_and_get_marker() {
        let (_temp, repo) = journal();
        let service = ConfigService::new(repo);

        service.set("marker", "new-anchor").unwrap();
        assert_eq!(service.get("marker").unwrap(), "new-anchor");
    }

    #[test]
    fn test_set_empty_marker_fails() {
        let (_temp, repo) = journal();
        let service = ConfigService::new(repo);

        assert!(service.set("marker", "  ").is_err());
    }

    #[test]
    fn test_set_and_get_folder() {
        let (_temp, repo) = journal();
        let service = ConfigService::new(repo);

        service.set("folders.daily", "journal/days").unwrap();
        assert_eq!(service.get("folders.daily").unwrap(), "journal/days");
    }

    #[test]
    fn test_created_is_read_only() {
        let (_temp, repo) = journal();
        let service = ConfigService::new(repo);

        assert!(service.get("created").is_ok());
        assert!(service.set("created", "2025-01-01T00:00:00Z").is_err());
    }

    #[test]
    fn test_unknown_key_fails() {
        let (_temp, repo) = journal();
        let service = ConfigService::new(repo);

        assert!(service.get("nope").is_err());
        assert!(service.set("nope", "value").is_err());
    }
}
