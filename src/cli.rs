//! Command-line arguments and input validation
//!
//! Both positionals are taken as raw strings so that malformed input reaches
//! our own validation and its messages, instead of clap's.

use clap::Parser;
use othello_engine::{Position, PositionError};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const USAGE: &str = "expected 2 arguments: <position_string(65)> <time_limit_seconds>";

#[derive(Parser, Debug)]
#[command(
    name = "othello",
    version,
    about = "Choose an Othello move with time-bounded alpha-beta search"
)]
pub struct Cli {
    /// Side to move (W/B) followed by 64 row-major cells (E/O/X)
    pub position: String,

    /// Time limit in seconds
    #[arg(allow_hyphen_values = true)]
    pub time_limit: String,

    /// JSON search config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Evaluator: matrix or discs
    #[arg(long, value_name = "NAME")]
    pub evaluator: Option<String>,

    /// Deepest iterative-deepening round (1-64)
    #[arg(long, value_name = "PLIES")]
    pub max_depth: Option<u32>,

    /// Log search progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Validated search request
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub position: Position,
    pub time_limit: Duration,
}

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("time_limit must be a number (seconds).")]
    TimeLimitNotNumber,

    #[error("time_limit must be a positive, finite number of seconds (got {0})")]
    TimeLimitOutOfRange(f64),

    #[error(transparent)]
    Position(#[from] PositionError),
}

impl Cli {
    /// Validate the positionals, time limit first, then the position
    pub fn request(&self) -> Result<Request, InputError> {
        let time_limit = parse_time_limit(&self.time_limit)?;
        let position = self.position.parse::<Position>()?;
        Ok(Request {
            position,
            time_limit,
        })
    }
}

fn parse_time_limit(raw: &str) -> Result<Duration, InputError> {
    let secs: f64 = raw
        .trim()
        .parse()
        .map_err(|_| InputError::TimeLimitNotNumber)?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(InputError::TimeLimitOutOfRange(secs));
    }
    Duration::try_from_secs_f64(secs).map_err(|_| InputError::TimeLimitOutOfRange(secs))
}
