//! Search configuration
//!
//! Deserializable from JSON; missing fields fall back to defaults.
//!
//! ```json
//! { "max_depth": 8, "evaluator": "matrix" }
//! ```

use crate::constants::MAX_DEPTH;
use crate::error::ConfigError;
use crate::evaluation::{DiscCountEvaluator, Evaluator, MatrixEvaluator};
use crate::search::AlphaBeta;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Which bundled evaluator to search with
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvaluatorKind {
    #[default]
    Matrix,
    #[serde(alias = "disc-count")]
    Discs,
}

impl EvaluatorKind {
    pub fn build(self) -> Box<dyn Evaluator> {
        match self {
            EvaluatorKind::Matrix => Box::new(MatrixEvaluator),
            EvaluatorKind::Discs => Box::new(DiscCountEvaluator),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EvaluatorKind::Matrix => "matrix",
            EvaluatorKind::Discs => "discs",
        }
    }
}

impl FromStr for EvaluatorKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "matrix" => Ok(EvaluatorKind::Matrix),
            "discs" | "disc-count" => Ok(EvaluatorKind::Discs),
            _ => Err(ConfigError::UnknownEvaluator {
                name: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Deepest iterative-deepening round, 1..=64
    pub max_depth: u32,
    pub evaluator: EvaluatorKind,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: MAX_DEPTH,
            evaluator: EvaluatorKind::default(),
        }
    }
}

impl SearchConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 || self.max_depth > MAX_DEPTH {
            return Err(ConfigError::InvalidDepth {
                found: self.max_depth,
                max: MAX_DEPTH,
            });
        }
        Ok(())
    }

    /// Searcher using the configured evaluator
    pub fn build_searcher(&self) -> AlphaBeta {
        AlphaBeta::new(self.evaluator.build())
    }
}
