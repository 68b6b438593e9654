//! Shell context, dispatch, and CLI error types.

use std::{env, path::PathBuf};

use rustyline::error::ReadlineError;
use strsim::levenshtein;
use thiserror::Error;

use crate::config::{Config, ConfigManager};
use crate::errors::LedgerError;
use crate::inputs::voice::VoiceParseError;
use crate::ledger::Ledger;
use crate::storage::{JsonStore, MemoryStore, TransactionStore};

use super::{commands, help, output};

/// Overrides the directory holding the transaction slot. Used by the
/// integration tests to keep runs isolated.
pub const DATA_DIR_ENV: &str = "EXPENSE_CLI_DATA_DIR";
/// Overrides the directory holding `config.json`.
pub const CONFIG_DIR_ENV: &str = "EXPENSE_CLI_CONFIG_DIR";
/// When set, the shell reads commands from stdin without readline.
pub const SCRIPT_MODE_ENV: &str = "EXPENSE_CLI_SCRIPT";

pub(crate) const COMMAND_NAMES: &[&str] = &[
    "add", "voice", "receipt", "list", "summary", "delete", "help", "exit", "quit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Failure of a single command; the shell stays up.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Voice(#[from] VoiceParseError),
    #[error("{0}")]
    InvalidArguments(String),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Fatal shell failure.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Readline error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CommandResult = Result<(), CommandError>;

/// Holds the live ledger and preferences for one shell session.
pub struct ShellContext {
    pub ledger: Ledger,
    pub config: Config,
    mode: CliMode,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Self {
        let config = load_config();
        output::set_color_enabled(config.ui_color_enabled);

        let data_dir = env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .or_else(|| config.data_dir.clone());
        let store: Box<dyn TransactionStore> = match JsonStore::new(data_dir) {
            Ok(store) => Box::new(store),
            Err(err) => {
                output::warning(format!(
                    "Storage unavailable ({err}); entries will not outlive this session."
                ));
                Box::new(MemoryStore::new())
            }
        };

        Self {
            ledger: Ledger::load(store),
            config,
            mode,
        }
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn prompt(&self) -> String {
        "expense> ".into()
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        match command {
            "add" => commands::handle_add(self, args)?,
            "voice" => commands::handle_voice(self, args)?,
            "receipt" => commands::handle_receipt(self, args)?,
            "list" => commands::handle_list(self),
            "summary" => commands::handle_summary(self),
            "delete" => commands::handle_delete(self, args)?,
            "help" => help::print_help(),
            "exit" | "quit" => return Ok(LoopControl::Exit),
            unknown => return Err(unknown_command(unknown)),
        }
        Ok(LoopControl::Continue)
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        output::error(err);
    }
}

fn load_config() -> Config {
    let manager = match env::var_os(CONFIG_DIR_ENV) {
        Some(base) => ConfigManager::with_base_dir(PathBuf::from(base)),
        None => ConfigManager::default_manager(),
    };
    match manager.and_then(|manager| manager.load()) {
        Ok(config) => config,
        Err(err) => {
            output::warning(format!("Could not load configuration ({err}); using defaults."));
            Config::default()
        }
    }
}

fn unknown_command(name: &str) -> CommandError {
    let suggestion = COMMAND_NAMES
        .iter()
        .map(|candidate| (candidate, levenshtein(name, candidate)))
        .min_by_key(|(_, distance)| *distance)
        .filter(|(_, distance)| *distance <= 2)
        .map(|(candidate, _)| *candidate);
    let message = match suggestion {
        Some(candidate) => format!("Unknown command `{name}`. Did you mean `{candidate}`?"),
        None => format!("Unknown command `{name}`. Type `help` for the command list."),
    };
    CommandError::InvalidArguments(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_miss_commands_get_a_suggestion() {
        let err = unknown_command("sumary");
        assert!(err.to_string().contains("Did you mean `summary`?"));
    }

    #[test]
    fn distant_commands_point_to_help() {
        let err = unknown_command("frobnicate");
        assert!(err.to_string().contains("Type `help`"));
    }
}
