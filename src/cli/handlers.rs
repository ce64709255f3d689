use std::{io::Write, path::Path};

use crate::{
    cli::{
        commands::{FilterCommand, MatchCommand, ParseCommand, TermsCommand},
        errors::{CliError, CliResult},
        types::Outcome,
        Command,
    },
    config::Config,
};

/// Load the config from `config_dir`, or from the default base path.
pub fn load_config(config_dir: Option<&Path>) -> CliResult<Config> {
    let config = match config_dir {
        Some(dir) => Config::load_with(dir),
        None => Config::load(),
    };
    config.map_err(|e| CliError::configuration(format!("{e:#}")))
}

/// Run one parsed command line, writing results to `out`.
///
/// `config` is only called by commands that render output with it
/// (`match`, `filter`), and only once their query parsed.
pub fn handle(
    command: Command,
    config: impl FnOnce() -> CliResult<Config>,
    out: &mut impl Write,
) -> CliResult<Outcome> {
    match command {
        Command::Parse { query } => ParseCommand::new(&query)?.execute(out),
        Command::Terms { query } => TermsCommand::new(&query)?.execute(out),
        Command::Match {
            query,
            text,
            highlight,
            highlight_terms,
        } => {
            let command = MatchCommand::new(&query, text, highlight, highlight_terms)?;
            command.execute(&config()?, out)
        }
        Command::Filter {
            query,
            file,
            sections,
            count,
            json,
            highlight_args,
        } => {
            let command = FilterCommand::new(&query, file, sections, count, json, highlight_args)?;
            command.execute(&config()?, out)
        }
    }
}
