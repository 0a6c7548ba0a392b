//! taskroll - Task rollover for periodic journal notes
//!
//! Moves unfinished task blocks from the nearest non-empty prior
//! daily/weekly/monthly/annual note into the current one, anchored at a
//! marker line, and keeps simple completion statistics.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TaskrollError;
