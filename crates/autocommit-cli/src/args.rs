//! Options shared by both binaries

use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Path inside the repository to operate on
    #[arg(short, long, default_value = ".")]
    pub repo: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Print a table of per-file outcomes after the run
    #[arg(short, long)]
    pub summary: bool,

    /// Print the run report as JSON on stdout
    #[arg(long, conflicts_with = "summary")]
    pub json: bool,
}
