//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Fetch the spreadsheet and write one locale file per language sheet
//! - `init`: Initialize a configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::emitter::OutputFormat;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Arguments of the `generate` command. Every option overrides the config file.
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Id of the Google Sheets spreadsheet to read
    #[arg(long, env = "SHEETLOCALES_SPREADSHEET_ID")]
    pub spreadsheet_id: Option<String>,

    /// Google API key with read access to the spreadsheet
    #[arg(long, env = "SHEETLOCALES_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Directory the locale files are written to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Output file format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Number of spaces used to indent the output (0 for a single line)
    #[arg(short, long)]
    pub beautify: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate locale files from the spreadsheet
    Generate(GenerateArgs),
    /// Initialize a new .sheetlocalesrc.json configuration file
    Init,
}
