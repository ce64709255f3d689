use std::process::ExitCode;

use boolmark::cli::{self, Outcome};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: cli::Args) -> cli::CliResult<Outcome> {
    let config_dir = args.config_dir;
    let mut stdout = std::io::stdout().lock();
    cli::handle(
        args.command,
        || cli::load_config(config_dir.as_deref()),
        &mut stdout,
    )
}

fn main() -> ExitCode {
    init_logging();
    let args = cli::Args::parse();

    match run(args) {
        Ok(Outcome::Matched) => ExitCode::SUCCESS,
        Ok(Outcome::NoMatch) => ExitCode::from(cli::EXIT_NO_MATCH),
        Err(err) => {
            log::debug!("command failed: {err:?}");
            eprintln!("{err}");
            ExitCode::from(cli::EXIT_ERROR)
        }
    }
}
