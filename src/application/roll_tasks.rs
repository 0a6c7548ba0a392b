//! Task rollover use case
//!
//! Moves unfinished task blocks from the nearest non-empty prior period's
//! note into the current note. The insert phase runs before the delete phase
//! so any failure up to and including the target write leaves the source
//! note untouched; a failure after that leaves tasks duplicated in both
//! notes rather than lost.

use crate::domain::{extract_unfinished_tasks, textedit, Period, TaskBlock};
use crate::error::{Result, TaskrollError};
use crate::infrastructure::{FileSystemRepository, Folders, JournalRepository, Notifier};

/// Backward-search ceiling; a safety valve against unbounded stepping, not a
/// statement about calendar semantics.
pub const MAX_BACKTRACK: usize = 365;

/// A located prior note together with its parse
struct SourceNote {
    period: Period,
    rel_path: String,
    text: String,
    blocks: Vec<TaskBlock>,
}

/// Service for rolling unfinished tasks forward
pub struct RolloverService {
    repository: FileSystemRepository,
}

impl RolloverService {
    /// Create a new rollover service
    pub fn new(repository: FileSystemRepository) -> Self {
        RolloverService { repository }
    }

    /// Roll unfinished tasks from the nearest non-empty prior period into
    /// the note named `note_name`. Returns the number of blocks moved.
    pub fn execute(&self, note_name: &str, notifier: &dyn Notifier) -> Result<usize> {
        let config = self.repository.load_config()?;

        // Preconditions, all before any mutation: recognizable name, target
        // note on disk, marker line present.
        let period = Period::parse(note_name)?;
        let stem = note_name.strip_suffix(".md").unwrap_or(note_name);
        let target_rel = self
            .repository
            .note_rel_path(&config.folders, period.kind(), stem);

        if !self.repository.note_exists(&target_rel) {
            return Err(TaskrollError::TargetNoteMissing(target_rel));
        }

        let target_text = self.repository.read_note(&target_rel)?;
        let marker_line = textedit::find_marker_line(&target_text, &config.marker).ok_or_else(
            || TaskrollError::MarkerNotFound {
                note: target_rel.clone(),
                marker: config.marker.clone(),
            },
        )?;

        let source = self.find_latest_nonempty_previous(&period, &config.folders)?;

        // Insert phase
        let payload: String = source
            .blocks
            .iter()
            .map(|block| block.content.as_str())
            .collect();
        let updated_target = textedit::insert_below_line(&target_text, marker_line, &payload);
        self.repository.write_note(&target_rel, &updated_target)?;

        // Delete phase
        let delete_set: Vec<usize> = source
            .blocks
            .iter()
            .flat_map(|block| block.delete_lines.iter().copied())
            .collect();
        let updated_source = textedit::delete_lines(&source.text, &delete_set);
        self.repository.write_note(&source.rel_path, &updated_source)?;

        let moved = source.blocks.len();
        notifier.notify(&format!(
            "Moved {} task block(s) from {} to {}.",
            moved,
            source.period.display(),
            period.display()
        ));

        Ok(moved)
    }

    /// Walk backward period by period until a note yields at least one task
    /// block. Missing notes read as empty text. Gives up after
    /// `MAX_BACKTRACK` steps.
    fn find_latest_nonempty_previous(
        &self,
        period: &Period,
        folders: &Folders,
    ) -> Result<SourceNote> {
        let mut candidate = period.previous();

        for _ in 0..MAX_BACKTRACK {
            let rel_path = self
                .repository
                .note_rel_path(folders, candidate.kind(), &candidate.key());
            let text = self.repository.read_note(&rel_path)?;
            let blocks = extract_unfinished_tasks(&text);

            if !blocks.is_empty() {
                return Ok(SourceNote {
                    period: candidate,
                    rel_path,
                    text,
                    blocks,
                });
            }

            candidate = candidate.previous();
        }

        Err(TaskrollError::NoPriorUnfinishedTasks {
            period_label: period.kind().as_str().to_string(),
        })
    }
}
