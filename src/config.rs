//! Search configuration layering
//!
//! Precedence, lowest first: built-in defaults, `--config` JSON file,
//! environment (`OTHELLO_MAX_DEPTH`, `OTHELLO_EVALUATOR`, also read from
//! `.env`), command-line flags.

use crate::cli::Cli;
use anyhow::{Context, Result};
use othello_engine::{EvaluatorKind, SearchConfig};

pub const ENV_MAX_DEPTH: &str = "OTHELLO_MAX_DEPTH";
pub const ENV_EVALUATOR: &str = "OTHELLO_EVALUATOR";

/// Resolve the search config for this invocation
pub fn load(cli: &Cli) -> Result<SearchConfig> {
    resolve(cli, |key| std::env::var(key).ok())
}

fn resolve(cli: &Cli, env: impl Fn(&str) -> Option<String>) -> Result<SearchConfig> {
    let mut config = match &cli.config {
        Some(path) => SearchConfig::from_json_file(path)
            .with_context(|| format!("loading search config from {}", path.display()))?,
        None => SearchConfig::default(),
    };

    if let Some(raw) = env(ENV_MAX_DEPTH) {
        config.max_depth = raw
            .trim()
            .parse()
            .with_context(|| format!("{ENV_MAX_DEPTH} must be a whole number (got '{raw}')"))?;
    }
    if let Some(raw) = env(ENV_EVALUATOR) {
        config.evaluator = raw
            .parse::<EvaluatorKind>()
            .with_context(|| format!("invalid {ENV_EVALUATOR}"))?;
    }

    if let Some(name) = &cli.evaluator {
        config.evaluator = name.parse::<EvaluatorKind>()?;
    }
    if let Some(max_depth) = cli.max_depth {
        config.max_depth = max_depth;
    }

    config.validate()?;
    Ok(config)
}
