//! `modgen`: generate eShop module skeletons and read their metadata back.
//!
//! Exit status: 0 on success, 2 for invalid input or rejected names,
//! 3 when a file or the skeleton is missing, 4 for configuration problems,
//! 1 for anything else.

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod wiring;

fn main() -> ExitCode {
    // MODGEN__* variables may come from a .env next to the shop.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() { 2 } else { 0 });
        }
    };

    if let Err(e) = logging::init_logging(&cli.global) {
        eprintln!("modgen: {e}");
        return ExitCode::FAILURE;
    }

    let verbose = cli.global.verbose > 0;
    match start(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(err, verbose),
    }
}

/// Load the configuration, then run the chosen command.
fn start(cli: Cli) -> CliResult<()> {
    debug!(command = ?cli.command, "Starting");

    let config = AppConfig::load(cli.global.config.as_ref()).map_err(|e| CliError::ConfigError {
        message: format!("{e:#}"),
        source: None,
    })?;
    let output = OutputManager::new(&cli.global, &config);

    dispatch(cli, config, output)
}

#[instrument(skip_all)]
fn dispatch(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Parse(args) => commands::parse::execute(args, config, output),
        Commands::Generate(args) => commands::generate::execute(args, cli.global, config, output),
        Commands::Check(args) => commands::check::execute(args, config, output),
        Commands::Init(args) => commands::init::execute(args, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(sub) => commands::config::execute(sub, cli.global, config, output),
    }
}

/// Print the error on stderr and turn it into the exit status.
fn report(err: CliError, verbose: bool) -> ExitCode {
    err.log();
    eprint!("{}", err.render(verbose, std::io::stderr().is_terminal()));
    ExitCode::from(err.exit_code())
}
