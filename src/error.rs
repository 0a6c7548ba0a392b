//! Error types for taskroll

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the taskroll application
#[derive(Debug, Error)]
pub enum TaskrollError {
    #[error("Not a taskroll journal: {0}")]
    NotJournalDirectory(PathBuf),

    #[error("Unrecognized note name: {0}")]
    UnrecognizedFilename(String),

    #[error("Note does not exist: {0}")]
    TargetNoteMissing(String),

    #[error("No line containing '{marker}' found in {note}")]
    MarkerNotFound { note: String, marker: String },

    #[error("No prior {period_label} note with unfinished tasks found")]
    NoPriorUnfinishedTasks { period_label: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TaskrollError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TaskrollError::NotJournalDirectory(_) => 2,
            TaskrollError::UnrecognizedFilename(_) => 3,
            TaskrollError::MarkerNotFound { .. } => 4,
            TaskrollError::NoPriorUnfinishedTasks { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TaskrollError::NotJournalDirectory(path) => {
                format!(
                    "Not a taskroll journal: {}\n\n\
                    Suggestions:\n\
                    • Run 'taskroll init' in this directory to create a new journal\n\
                    • Navigate to an existing taskroll journal\n\
                    • Set TASKROLL_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            TaskrollError::UnrecognizedFilename(name) => {
                format!(
                    "Unrecognized note name: '{}'\n\n\
                    Supported note names:\n\
                    • YYYY-MM-DD (daily, e.g. 2025-06-01)\n\
                    • YYYY (annual, e.g. 2025)\n\
                    • YYYY-MM (monthly, e.g. 2025-06)\n\
                    • YYYY-W[w] (weekly, e.g. 2025-W23)\n\n\
                    A trailing .md extension is allowed.",
                    name
                )
            }
            TaskrollError::TargetNoteMissing(note) => {
                format!(
                    "Note does not exist: {}\n\n\
                    Suggestions:\n\
                    • Create the note first, including the rollover marker line\n\
                    • Check the configured folder for this period type: taskroll config --list",
                    note
                )
            }
            TaskrollError::MarkerNotFound { note, marker } => {
                format!(
                    "No line containing '{}' found in {}\n\n\
                    Suggestions:\n\
                    • Add a line containing the marker token where tasks should be inserted\n\
                    • Check the configured marker: taskroll config marker\n\n\
                    Nothing was modified.",
                    marker, note
                )
            }
            TaskrollError::NoPriorUnfinishedTasks { period_label } => {
                format!(
                    "No prior {} note with unfinished tasks found\n\n\
                    The previous 365 periods were searched. Nothing was modified.",
                    period_label
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TaskrollError
pub type Result<T> = std::result::Result<T, TaskrollError>;
