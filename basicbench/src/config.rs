//! Configuration loading from basicbench.toml
//!
//! Default timing options can be specified in a `basicbench.toml` file in the
//! project root. The file is discovered by walking up from the current
//! directory; explicit builder calls always override it.

use basicbench_core::{BenchOptions, DEFAULT_MIN_TIME};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// File name searched for by [`BenchConfig::discover`]
pub const CONFIG_FILE_NAME: &str = "basicbench.toml";

/// basicbench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BenchConfig {
    /// Runner configuration
    #[serde(default)]
    pub runner: RunnerConfig,
}

/// Defaults for every timing call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunnerConfig {
    /// Fixed run count (auto-ranged when absent)
    #[serde(default)]
    pub n_runs: Option<u64>,
    /// Untimed warm-up call before measuring
    #[serde(default)]
    pub pre_run: bool,
    /// Print the summary line
    #[serde(default = "default_print_result")]
    pub print_result: bool,
    /// Auto-ranging threshold (e.g., "200ms", "1s")
    #[serde(default = "default_min_time")]
    pub min_time: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            n_runs: None,
            pre_run: false,
            print_result: default_print_result(),
            min_time: default_min_time(),
        }
    }
}

fn default_print_result() -> bool {
    true
}
fn default_min_time() -> String {
    "200ms".to_string()
}

impl BenchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded configuration");
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return match Self::load(&config_path) {
                    Ok(config) => Some(config),
                    Err(e) => {
                        tracing::warn!(
                            path = %config_path.display(),
                            error = %e,
                            "ignoring unreadable configuration"
                        );
                        None
                    }
                };
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Convert into timing options
    pub fn options(&self) -> anyhow::Result<BenchOptions> {
        let min_time = Duration::from_nanos(Self::parse_duration(&self.runner.min_time)?);
        let mut options = BenchOptions::new()
            .pre_run(self.runner.pre_run)
            .print_result(self.runner.print_result)
            .min_time(min_time);
        options.n_runs = self.runner.n_runs;
        Ok(options)
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# basicbench configuration

[runner]
# Fixed number of timed runs (uncomment to disable auto-ranging)
# n_runs = 100
# Call the target once, untimed, before measuring
pre_run = false
# Print the summary line to stdout
print_result = true
# Minimum duration of the auto-ranging round that fixes the run count
min_time = "200ms"
"#
        .to_string()
    }

    /// Parse duration string (e.g., "3s", "500ms", "2m") to nanoseconds
    pub fn parse_duration(s: &str) -> anyhow::Result<u64> {
        let s = s.trim();
        if s.is_empty() {
            return Err(anyhow::anyhow!("Empty duration string"));
        }

        // Find where the number ends and unit begins
        let (num_part, unit_part) = s
            .char_indices()
            .find(|(_, c)| c.is_alphabetic())
            .map(|(i, _)| s.split_at(i))
            .unwrap_or((s, "s"));

        let value: f64 = num_part
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid duration number: {}", num_part))?;
        if !value.is_finite() || value < 0.0 {
            return Err(anyhow::anyhow!("Invalid duration number: {}", num_part));
        }

        let multiplier: u64 = match unit_part.to_lowercase().as_str() {
            "ns" => 1,
            "us" | "µs" => 1_000,
            "ms" => 1_000_000,
            "s" | "" => 1_000_000_000,
            "m" | "min" => 60_000_000_000,
            _ => return Err(anyhow::anyhow!("Unknown duration unit: {}", unit_part)),
        };

        Ok((value * multiplier as f64) as u64)
    }
}

impl From<&BenchConfig> for BenchOptions {
    fn from(config: &BenchConfig) -> Self {
        config.options().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "invalid min_time, using default");
            let mut options = BenchOptions::new()
                .pre_run(config.runner.pre_run)
                .print_result(config.runner.print_result)
                .min_time(DEFAULT_MIN_TIME);
            options.n_runs = config.runner.n_runs;
            options
        })
    }
}
