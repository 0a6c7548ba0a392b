//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "taskroll")]
#[command(about = "Rolls unfinished tasks between periodic journal notes", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Marker token that anchors inserted tasks in target notes
        #[arg(short, long)]
        marker: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Roll unfinished tasks from the nearest non-empty prior period
    Roll {
        /// Target note name (e.g. 2025-06-01, 2025-W23, 2025-06, 2025);
        /// defaults to today's daily note
        #[arg(value_name = "NOTE")]
        note: Option<String>,
    },

    /// Show task statistics for a note or period
    Stats {
        /// Note name (annual and monthly notes aggregate their daily notes);
        /// defaults to today's daily note
        #[arg(value_name = "NOTE")]
        note: Option<String>,
    },
}
