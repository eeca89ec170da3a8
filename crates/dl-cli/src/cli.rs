//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Daily activity timeline.
///
/// Resolves scheduled meals, supplements, workouts and lifestyle activities
/// to clock times and packs them into non-overlapping lanes.
#[derive(Debug, Parser)]
#[command(name = "dl", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Lay out one or more day files.
    Layout {
        /// Day files (JSON). Each file is one day.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the effective anchor times.
    Anchors {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}
