use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use cofactor_matrix::{ParseMode, ParseOptions, RaggedRows};

/// Settings shared by every subcommand.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub parse: ParseOptions,
    /// Seed for the random operand of `eval`; `None` draws from the thread RNG.
    pub seed: Option<u64>,
    /// Tolerance used when reporting `A * inverse(A)` against the identity.
    pub tolerance: f64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            parse: ParseOptions::default(),
            seed: None,
            tolerance: 1e-9,
        }
    }
}

impl CliConfig {
    /// Apply command-line overrides on top of the file (or default) values.
    pub fn with_overrides(mut self, strict: bool, reject_ragged: bool, seed: Option<u64>) -> Self {
        if strict {
            self.parse.mode = ParseMode::Strict;
        }
        if reject_ragged {
            self.parse.ragged = RaggedRows::Reject;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

/// Load a CLI configuration from a JSON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CliConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: CliConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
