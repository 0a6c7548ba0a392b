//! Initialize journal use case

use crate::domain::PeriodKind;
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::fs;
use std::path::Path;

/// Initialize a new taskroll journal at the specified path.
pub fn init(path: &Path, marker: Option<String>) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    repo.initialize()?;

    let config = Config::new(marker);
    repo.save_config(&config)?;

    // Pre-create the four period folders so notes have a home
    for kind in [
        PeriodKind::Daily,
        PeriodKind::Weekly,
        PeriodKind::Monthly,
        PeriodKind::Annual,
    ] {
        repo.create_dir_all(config.folders.for_kind(kind))?;
    }

    println!("Initialized taskroll journal at {}", path.display());
    println!("Marker: {}", config.marker);

    Ok(())
}
