//! `othello <position_string(65)> <time_limit_seconds>`
//!
//! Prints the chosen move as `(row,col)` (1-based) or `pass` on stdout.
//! Diagnostics go to stderr; any input error exits with status 1.

mod cli;
mod config;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use cli::{Cli, USAGE};
use othello_engine::{iterative_deepening, Deadline};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                if is_arity_error(&err) {
                    eprintln!("Error: {USAGE}");
                }
                eprint!("{err}");
                return ExitCode::FAILURE;
            }
        },
    };

    init_tracing(cli.verbose);

    let request = match cli.request() {
        Ok(request) => request,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let config = match config::load(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    debug!(
        to_move = %request.position.side_to_move(),
        evaluator = config.evaluator.as_str(),
        max_depth = config.max_depth,
        time_limit = ?request.time_limit,
        "searching\n{}",
        request.position.diagram()
    );

    let deadline = Deadline::after(request.time_limit);
    let mut searcher = config.build_searcher();
    let report = iterative_deepening(&mut searcher, &request.position, &deadline, config.max_depth);

    println!("{}", report.action);
    ExitCode::SUCCESS
}

/// Missing positionals, or a stray positional beyond the two expected
fn is_arity_error(err: &clap::Error) -> bool {
    match err.kind() {
        ErrorKind::MissingRequiredArgument => true,
        ErrorKind::UnknownArgument => matches!(
            err.get(ContextKind::InvalidArg),
            Some(ContextValue::String(arg)) if !arg.starts_with('-')
        ),
        _ => false,
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
