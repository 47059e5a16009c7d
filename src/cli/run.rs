/// Main entry point for the gdlocale CLI.
///
/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with the notices produced by the command
/// - `Err` if a precondition fails (bad config, unreadable input)
use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, extract::extract, extract_file::extract_file, init::init, rename::rename,
        update_languages::update_languages,
    },
};
use anyhow::Result;

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::ExtractFile(cmd)) => extract_file(cmd),
        Some(Command::UpdateLanguages(cmd)) => update_languages(cmd),
        Some(Command::Rename(cmd)) => rename(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
