//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod notifier;
pub mod repository;

pub use config::{Config, Folders, DEFAULT_MARKER};
pub use notifier::{ConsoleNotifier, Notifier};
pub use repository::{FileSystemRepository, JournalRepository, NoteEntry};
