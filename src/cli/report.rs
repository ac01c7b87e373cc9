//! Report formatting and printing utilities.
//!
//! Log lines go to stderr as the run progresses; this is the final summary
//! printed to stdout once a command is done.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, InitSummary, generate::GenerateOutcome};
use crate::{
    error::Error,
    pipeline::{RunSummary, SheetOutcome},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match result {
        CommandResult::Generate(GenerateOutcome::Completed(summary)) => {
            print_summary(summary, writer)
        }
        CommandResult::Generate(GenerateOutcome::Aborted(err)) => print_aborted(err, writer),
        CommandResult::Init(summary) => print_init(summary, writer),
    }
}

fn print_summary<W: Write>(summary: &RunSummary, writer: &mut W) {
    for outcome in &summary.outcomes {
        match outcome {
            SheetOutcome::Written {
                sheet, path, keys, ..
            } => {
                let _ = writeln!(
                    writer,
                    "{} {} ({} {} from \"{}\")",
                    SUCCESS_MARK.green(),
                    path.display(),
                    keys,
                    if *keys == 1 { "key" } else { "keys" },
                    sheet
                );
            }
            SheetOutcome::Skipped { sheet, error } => {
                let _ = writeln!(
                    writer,
                    "{} \"{}\" skipped: {}",
                    FAILURE_MARK.red(),
                    sheet,
                    error
                );
            }
        }
    }

    let written = summary.written_count();
    let skipped = summary.skipped_count();
    let totals = format!(
        "Generated {} locale {}, skipped {} {}",
        written,
        if written == 1 { "file" } else { "files" },
        skipped,
        if skipped == 1 { "sheet" } else { "sheets" }
    );
    let _ = writeln!(writer);
    if skipped == 0 {
        let _ = writeln!(writer, "{}", totals.green());
    } else {
        let _ = writeln!(writer, "{}", totals.yellow());
    }
}

fn print_aborted<W: Write>(err: &Error, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} {}",
        FAILURE_MARK.red(),
        "No locale files generated:".bold().red(),
        err
    );
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    );
}
