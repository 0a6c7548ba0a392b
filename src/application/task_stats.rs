//! Task statistics use case
//!
//! For an annual note, completed tasks in that year's daily notes are
//! grouped per month; for a monthly note, per day. Daily and weekly notes
//! get a status summary of the single note.

use crate::domain::stats::{count_task_statuses, TaskCounts};
use crate::domain::{Period, PeriodKind};
use crate::error::{Result, TaskrollError};
use crate::infrastructure::{FileSystemRepository, Folders, JournalRepository};
use chrono::Datelike;
use std::collections::BTreeMap;

/// Outcome of a stats query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsReport {
    /// Completed-task counts grouped by month or day key
    Buckets {
        title: String,
        rows: Vec<(String, usize)>,
    },
    /// Status breakdown of one note
    Note { title: String, counts: TaskCounts },
}

/// Service for task statistics
pub struct StatsService {
    repository: FileSystemRepository,
}

impl StatsService {
    /// Create a new stats service
    pub fn new(repository: FileSystemRepository) -> Self {
        StatsService { repository }
    }

    pub fn execute(&self, note_name: &str) -> Result<StatsReport> {
        let config = self.repository.load_config()?;
        let period = Period::parse(note_name)?;

        match period {
            Period::Annual(year) => self.completed_by_bucket(&config.folders, year, None),
            Period::Monthly { year, month } => {
                self.completed_by_bucket(&config.folders, year, Some(month))
            }
            _ => self.note_summary(&config.folders, &period, note_name),
        }
    }

    /// Sum completed tasks in daily notes, bucketed per month (annual scope)
    /// or per day (monthly scope). Notes with zero completions still get a
    /// row; absent days simply don't appear.
    fn completed_by_bucket(
        &self,
        folders: &Folders,
        year: i32,
        month: Option<u32>,
    ) -> Result<StatsReport> {
        let mut buckets: BTreeMap<String, usize> = BTreeMap::new();

        for note in self.repository.list_notes(folders, PeriodKind::Daily) {
            let Period::Daily(date) = note.period else {
                continue;
            };
            if date.year() != year {
                continue;
            }
            if let Some(m) = month {
                if date.month() != m {
                    continue;
                }
            }

            let text = self.repository.read_note(&note.filename)?;
            let done = count_task_statuses(&text).done;

            let bucket = match month {
                Some(_) => date.format("%Y-%m-%d").to_string(),
                None => date.format("%Y-%m").to_string(),
            };
            *buckets.entry(bucket).or_insert(0) += done;
        }

        let title = match month {
            Some(m) => format!("Completed tasks per day in {}-{:02}", year, m),
            None => format!("Completed tasks per month in {}", year),
        };

        Ok(StatsReport::Buckets {
            title,
            rows: buckets.into_iter().collect(),
        })
    }

    fn note_summary(
        &self,
        folders: &Folders,
        period: &Period,
        note_name: &str,
    ) -> Result<StatsReport> {
        let stem = note_name.strip_suffix(".md").unwrap_or(note_name);
        let rel_path = self
            .repository
            .note_rel_path(folders, period.kind(), stem);

        if !self.repository.note_exists(&rel_path) {
            return Err(TaskrollError::TargetNoteMissing(rel_path));
        }

        let text = self.repository.read_note(&rel_path)?;
        Ok(StatsReport::Note {
            title: format!("Task status in {}", period.display()),
            counts: count_task_statuses(&text),
        })
    }
}
