//! Arcpack CLI - Command-line utility for packaging files into ZIP archives
//! and inspecting their contents.

mod cli;
mod commands;
mod error;
mod logging;
mod output;

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    logging::init(cli.verbose, cli.quiet);

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);
    let config = cli.codec_config();

    let (operation, result) = match &cli.command {
        cli::Commands::Inspect(args) => (
            "inspect",
            commands::inspect::execute(args, &config, &*formatter),
        ),
        cli::Commands::Create(args) => (
            "create",
            commands::create::execute(args, &config, &*formatter),
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(operation, error = %err, "command failed");
            formatter.format_error(operation, &err);
            ExitCode::FAILURE
        }
    }
}
