//! push-files - Add, commit and push each pending change on its own

use anyhow::Result;
use autocommit_cli::{execute, CommonArgs};
use autocommit_core::RunMode;
use autocommit_runner::PerFilePusher;
use clap::Parser;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "push-files")]
#[command(about = "Commit and push every pending change individually with [skip ci] messages", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    execute(RunMode::PerFile, &cli.common, |git| PerFilePusher::new(git).run())
}
