//! commit-all - Commit each pending change separately, then push once

use anyhow::Result;
use autocommit_cli::{execute, CommonArgs};
use autocommit_core::RunMode;
use autocommit_runner::BatchCommitter;
use clap::Parser;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "commit-all")]
#[command(about = "Commit every pending change with a generated message, then push once", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    execute(RunMode::Batch, &cli.common, |git| BatchCommitter::new(git).run())
}
