//! Report rendering for the terminal

use anyhow::{Context, Result};
use autocommit_core::{EntryReport, RunMode, RunReport, StepOutcome};
use colored::Colorize;
use tabled::{Table, Tabled};

use crate::args::CommonArgs;
use crate::formatting::format_duration;

/// Table row for one processed entry
#[derive(Tabled)]
pub struct EntryRow {
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Path")]
    pub path: String,
    #[tabled(rename = "Message")]
    pub message: String,
    #[tabled(rename = "Stage")]
    pub stage: String,
    #[tabled(rename = "Commit")]
    pub commit: String,
    #[tabled(rename = "Push")]
    pub push: String,
}

fn step_label(step: Option<&StepOutcome>) -> String {
    step.map_or("-", StepOutcome::label).to_string()
}

impl From<&EntryReport> for EntryRow {
    fn from(e: &EntryReport) -> Self {
        Self {
            status: e.entry.status.to_string(),
            path: e.entry.path.clone(),
            message: e.message.clone(),
            stage: e.stage.label().to_string(),
            commit: step_label(e.commit.as_ref()),
            push: step_label(e.push.as_ref()),
        }
    }
}

/// Prints the report in the format selected by `args`
pub fn print_report(report: &RunReport, args: &CommonArgs) -> Result<()> {
    if args.json {
        let json = serde_json::to_string_pretty(report).context("Failed to serialize run report")?;
        println!("{}", json);
        return Ok(());
    }

    if args.summary && !report.entries.is_empty() {
        let rows: Vec<EntryRow> = report.entries.iter().map(EntryRow::from).collect();
        println!("{}", Table::new(rows));
    }

    println!("{}", summary_line(report));
    Ok(())
}

fn summary_line(report: &RunReport) -> String {
    if let StepOutcome::FatalAbort(reason) = &report.status_query {
        return format!("{} {}", "✗ Aborted:".red().bold(), reason);
    }

    let elapsed = format_duration(report.elapsed());
    if report.discovered() == 0 && report.mode == RunMode::PerFile {
        return format!("{} No changes to commit ({})", "✓".green(), elapsed);
    }

    let pushes = format!("{}/{}", report.pushes_succeeded(), report.pushes_attempted());
    let pushes = if report.pushes_succeeded() == report.pushes_attempted() {
        pushes.green()
    } else {
        pushes.yellow()
    };

    format!(
        "{} {} files, {} commits, {} pushes in {}",
        "✓".green(),
        report.discovered().to_string().bold(),
        format!("{}/{}", report.commits_succeeded(), report.commits_attempted()).bold(),
        pushes,
        elapsed
    )
}
