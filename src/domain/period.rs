//! Period identifiers and previous-period stepping

use crate::error::{Result, TaskrollError};
use chrono::{Datelike, Duration, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

fn daily_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap())
}

fn annual_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(\d{4})$").unwrap())
}

fn monthly_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(\d{4})-(\d{2})$").unwrap())
}

fn weekly_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(\d{4})-W(\d{1,2})$").unwrap())
}

/// The four note granularities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodKind {
    Daily,
    Weekly,
    Monthly,
    Annual,
}

impl PeriodKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodKind::Daily => "daily",
            PeriodKind::Weekly => "weekly",
            PeriodKind::Monthly => "monthly",
            PeriodKind::Annual => "annual",
        }
    }
}

/// A calendar granularity bucket identified by a canonical string key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Daily(NaiveDate),
    Weekly { year: i32, week: u32 },
    Monthly { year: i32, month: u32 },
    Annual(i32),
}

impl Period {
    /// Parse a note name into a period.
    ///
    /// A trailing `.md` extension is stripped. The four shapes are tried in a
    /// fixed priority order (daily, annual, monthly, weekly); the shapes are
    /// mutually exclusive but the order keeps `YYYY` from being misread as a
    /// partial month or day key. Calendar-invalid values (month 13, Feb 30,
    /// week 0) are unrecognized rather than clamped.
    pub fn parse(filename: &str) -> Result<Self> {
        let stem = filename.strip_suffix(".md").unwrap_or(filename);

        if daily_regex().is_match(stem) {
            return NaiveDate::parse_from_str(stem, "%Y-%m-%d")
                .map(Period::Daily)
                .map_err(|_| TaskrollError::UnrecognizedFilename(filename.to_string()));
        }

        if let Some(caps) = annual_regex().captures(stem) {
            if let Ok(year) = caps[1].parse::<i32>() {
                return Ok(Period::Annual(year));
            }
        }

        if let Some(caps) = monthly_regex().captures(stem) {
            let year = caps[1].parse::<i32>().ok();
            let month = caps[2].parse::<u32>().ok();
            if let (Some(year), Some(month)) = (year, month) {
                if (1..=12).contains(&month) {
                    return Ok(Period::Monthly { year, month });
                }
            }
            return Err(TaskrollError::UnrecognizedFilename(filename.to_string()));
        }

        if let Some(caps) = weekly_regex().captures(stem) {
            let year = caps[1].parse::<i32>().ok();
            let week = caps[2].parse::<u32>().ok();
            if let (Some(year), Some(week)) = (year, week) {
                if (1..=53).contains(&week) {
                    return Ok(Period::Weekly { year, week });
                }
            }
        }

        Err(TaskrollError::UnrecognizedFilename(filename.to_string()))
    }

    pub fn kind(&self) -> PeriodKind {
        match self {
            Period::Daily(_) => PeriodKind::Daily,
            Period::Weekly { .. } => PeriodKind::Weekly,
            Period::Monthly { .. } => PeriodKind::Monthly,
            Period::Annual(_) => PeriodKind::Annual,
        }
    }

    /// Canonical file key (`2025-06-01`, `2025-W23`, `2025-06`, `2025`).
    /// Week numbers are not zero-padded.
    pub fn key(&self) -> String {
        match self {
            Period::Daily(date) => date.format("%Y-%m-%d").to_string(),
            Period::Weekly { year, week } => format!("{}-W{}", year, week),
            Period::Monthly { year, month } => format!("{}-{:02}", year, month),
            Period::Annual(year) => year.to_string(),
        }
    }

    /// The immediately preceding period of the same kind.
    ///
    /// Weekly stepping across a year boundary uses the weekday of the prior
    /// year's January 1st (Sunday = 0): Thursday or later, or Sunday, means
    /// that year gets 53 weeks, otherwise 52. This approximates ISO week
    /// years but is not exact ISO-8601.
    pub fn previous(&self) -> Period {
        match *self {
            Period::Daily(date) => Period::Daily(date - Duration::days(1)),
            Period::Annual(year) => Period::Annual(year - 1),
            Period::Monthly { year, month } => {
                if month == 1 {
                    Period::Monthly {
                        year: year - 1,
                        month: 12,
                    }
                } else {
                    Period::Monthly {
                        year,
                        month: month - 1,
                    }
                }
            }
            Period::Weekly { year, week } => {
                if week > 1 {
                    Period::Weekly {
                        year,
                        week: week - 1,
                    }
                } else {
                    let prev_year = year - 1;
                    Period::Weekly {
                        year: prev_year,
                        week: final_week_of_year(prev_year),
                    }
                }
            }
        }
    }

    /// Human-readable label for messages
    pub fn display(&self) -> String {
        match self {
            Period::Daily(date) => date.format("%B %d, %Y").to_string(),
            _ => self.key(),
        }
    }
}

/// Week count of a year, derived from its January 1st weekday (Sunday = 0).
fn final_week_of_year(year: i32) -> u32 {
    match NaiveDate::from_ymd_opt(year, 1, 1) {
        Some(jan1) => {
            let weekday = jan1.weekday().num_days_from_sunday();
            if weekday >= 4 || weekday == 0 {
                53
            } else {
                52
            }
        }
        None => 52,
    }
}
