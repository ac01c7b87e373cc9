use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, generate::generate, init::init},
};
use crate::logging::{self, Verbosity};

/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` once the command ran, including generation runs whose
///   failures were only logged
/// - `Err` if the command could not run (e.g., invalid config file)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Generate(args)) => {
            logging::init(Verbosity::from_flags(args.verbose, args.quiet));
            generate(args)
        }
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
