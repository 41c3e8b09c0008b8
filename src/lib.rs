#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod models;
pub mod ui;

// Re-export commonly used types outside of crate (for the binaries and integration tests)
pub use analysis::{classify_change, merge_series, tone_for};
pub use data::{DashboardSnapshot, demo_snapshot, load_snapshot, save_snapshot};
pub use models::ChartRow;

// CLI argument parsing
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_SNAPSHOT_FILE;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Dashboard snapshot exported by the backend
    #[arg(long, default_value = DEFAULT_SNAPSHOT_FILE)]
    pub snapshot: PathBuf,

    #[command(subcommand)]
    pub command: Option<DashboardView>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum DashboardView {
    /// Expense history with the forecast continuation and confidence band
    Chart,
    /// Month-over-month category comparison
    Compare,
    /// Recent operations, optionally narrowed to one category
    Transactions {
        /// Category code as the backend stores it, e.g. "Food"
        #[arg(long)]
        category: Option<String>,
    },
}
