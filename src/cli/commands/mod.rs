pub mod generate;
pub mod init;

use std::path::PathBuf;

use generate::GenerateOutcome;

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running a sheetlocales command
#[derive(Debug)]
pub enum CommandResult {
    Generate(GenerateOutcome),
    Init(InitSummary),
}
