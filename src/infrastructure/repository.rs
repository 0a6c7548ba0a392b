//! File system repository

use crate::domain::{Period, PeriodKind};
use crate::error::{Result, TaskrollError};
use crate::infrastructure::{Config, Folders};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A note file found in a period folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEntry {
    pub filename: String,
    pub period: Period,
}

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .taskroll/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .taskroll/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .taskroll directory exists
    fn is_initialized(&self) -> bool;

    /// Create .taskroll directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks TASKROLL_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("TASKROLL_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_taskroll_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(TaskrollError::Config(format!(
                    "TASKROLL_ROOT is set to '{}' but no .taskroll directory found. \
                    Run 'taskroll init' in that directory or unset TASKROLL_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_taskroll_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(TaskrollError::NotJournalDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_taskroll_dir(path: &Path) -> bool {
        path.join(".taskroll").is_dir()
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_taskroll_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let taskroll_dir = self.root.join(".taskroll");

        if taskroll_dir.exists() {
            return Err(TaskrollError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&taskroll_dir)?;
        Ok(())
    }
}

// Note operations (not part of trait - filesystem-specific)
impl FileSystemRepository {
    /// Relative path of the note for `key` in the folder of its period type
    pub fn note_rel_path(&self, folders: &Folders, kind: PeriodKind, key: &str) -> String {
        format!("{}/{}.md", folders.for_kind(kind), key)
    }

    /// Check if a note file exists
    pub fn note_exists(&self, filename: &str) -> bool {
        self.root.join(filename).exists()
    }

    /// Read note content (returns empty string if file doesn't exist)
    pub fn read_note(&self, filename: &str) -> Result<String> {
        let path = self.root.join(filename);

        if !path.exists() {
            return Ok(String::new());
        }

        fs::read_to_string(&path).map_err(TaskrollError::Io)
    }

    /// Write note content (creates if doesn't exist, overwrites if exists)
    pub fn write_note(&self, filename: &str, content: &str) -> Result<()> {
        let path = self.root.join(filename);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&path, content).map_err(TaskrollError::Io)
    }

    /// Create a directory (and parents) relative to the repository root.
    pub fn create_dir_all(&self, dir: &str) -> Result<()> {
        let path = self.root.join(dir);
        fs::create_dir_all(path).map_err(TaskrollError::Io)
    }

    fn normalize_relative_path(path: &Path) -> Option<String> {
        let parts: Vec<&str> = path
            .iter()
            .map(|part| part.to_str())
            .collect::<Option<_>>()?;
        Some(parts.join("/"))
    }

    /// List the notes of one period type, sorted by key ascending.
    ///
    /// Walks the type's configured folder, skipping dot-directories; files
    /// whose names don't parse as that period type are ignored. A missing
    /// folder yields an empty list.
    pub fn list_notes(&self, folders: &Folders, kind: PeriodKind) -> Vec<NoteEntry> {
        let folder = self.root.join(folders.for_kind(kind));
        let mut notes = Vec::new();

        let walker = WalkDir::new(&folder).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            if !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(leaf) = entry.file_name().to_str() else {
                continue;
            };
            if !leaf.ends_with(".md") {
                continue;
            }
            let Ok(period) = Period::parse(leaf) else {
                continue;
            };
            if period.kind() != kind {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            let Some(filename) = Self::normalize_relative_path(rel) else {
                continue;
            };
            notes.push(NoteEntry { filename, period });
        }

        notes.sort_by(|a, b| a.period.key().cmp(&b.period.key()));
        notes
    }
}
