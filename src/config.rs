//! Run configuration for the query distribution analyzer
//!
//! The sampling parameters historically lived in a shared constants file;
//! here they form an explicit [`QueryDistConfig`] passed to the estimator
//! and the reporters. Every field has a default, so the binary runs with
//! no arguments, and every field can be overridden on the command line.

use argh::FromArgs;
use std::path::PathBuf;
use thiserror::Error;

/// Default number of nodes in the identifier space
pub const DEFAULT_NUM_NODES: usize = 500;

/// Default number of queries used to scale expected counts
pub const DEFAULT_NUM_QUERIES: u64 = 200;

/// Default rate of the exponential distribution (mean = 1/lambda)
pub const DEFAULT_LAMBDA: f64 = 0.05;

/// Default random seed
pub const DEFAULT_SEED: u64 = 42;

/// Default sample count for probability estimation
pub const DEFAULT_NUM_SAMPLES: usize = 100_000;

/// Errors raised by configuration validation, before any sampling occurs
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("node count must be positive (got 0)")]
    ZeroNodes,

    #[error("sample count must be positive (got 0)")]
    ZeroSamples,

    #[error("lambda must be a positive, finite rate (got {0})")]
    InvalidLambda(f64),
}

/// Analyzer for the node query probability distribution
#[derive(FromArgs, Debug)]
pub struct Args {
    /// number of nodes in the identifier space (default: 500)
    #[argh(option, short = 'n', default = "DEFAULT_NUM_NODES")]
    nodes: usize,

    /// number of queries used to scale expected counts (default: 200)
    #[argh(option, short = 'q', default = "DEFAULT_NUM_QUERIES")]
    queries: u64,

    /// rate of the exponential distribution (default: 0.05)
    #[argh(option, short = 'l', default = "DEFAULT_LAMBDA")]
    lambda: f64,

    /// random seed for reproducible sampling (default: 42)
    #[argh(option, short = 's', default = "DEFAULT_SEED")]
    seed: u64,

    /// number of samples drawn for probability estimation (default: 100000)
    #[argh(option, default = "DEFAULT_NUM_SAMPLES")]
    samples: usize,

    /// directory the figures are written to (default: <project>/data)
    #[argh(option, short = 'o', default = "default_output_dir()")]
    output: PathBuf,

    /// open the saved figures with the platform image viewer
    #[argh(switch)]
    show: bool,
}

/// Configuration consumed by the estimator and the reporters
#[derive(Debug, Clone)]
pub struct QueryDistConfig {
    /// Size of the node identifier space; labels fall in `[0, num_nodes)`
    pub num_nodes: usize,
    /// Query volume used to derive expected per-node counts
    pub num_queries: u64,
    /// Rate of the exponential distribution; mean is `1/lambda`
    pub lambda: f64,
    /// Seed applied to the random source once at estimator entry
    pub seed: u64,
    /// Number of variates drawn for the empirical estimate
    pub num_samples: usize,
    /// Directory both figure files are written to
    pub output_dir: PathBuf,
    /// Open the saved figures in the platform viewer after rendering
    pub show_plots: bool,
}

impl QueryDistConfig {
    /// Checks the fail-fast preconditions on the sampling parameters.
    ///
    /// # Returns
    /// * `Ok(())` - All parameters are usable
    /// * `Err(ConfigError)` - The first violated precondition
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_nodes == 0 {
            return Err(ConfigError::ZeroNodes);
        }
        if self.num_samples == 0 {
            return Err(ConfigError::ZeroSamples);
        }
        if !(self.lambda > 0.0) || !self.lambda.is_finite() {
            return Err(ConfigError::InvalidLambda(self.lambda));
        }
        Ok(())
    }
}

impl Default for QueryDistConfig {
    fn default() -> Self {
        Self {
            num_nodes: DEFAULT_NUM_NODES,
            num_queries: DEFAULT_NUM_QUERIES,
            lambda: DEFAULT_LAMBDA,
            seed: DEFAULT_SEED,
            num_samples: DEFAULT_NUM_SAMPLES,
            output_dir: default_output_dir(),
            show_plots: false,
        }
    }
}

impl From<Args> for QueryDistConfig {
    fn from(args: Args) -> Self {
        Self {
            num_nodes: args.nodes,
            num_queries: args.queries,
            lambda: args.lambda,
            seed: args.seed,
            num_samples: args.samples,
            output_dir: args.output,
            show_plots: args.show,
        }
    }
}

/// Figures land in the project-relative `data` directory, not the caller's
/// working directory.
fn default_output_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = QueryDistConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.num_nodes, 500);
        assert_eq!(config.seed, 42);
        assert_eq!(config.num_samples, 100_000);
    }

    #[test]
    fn test_zero_nodes_rejected() {
        let config = QueryDistConfig {
            num_nodes: 0,
            ..QueryDistConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroNodes)));
    }

    #[test]
    fn test_zero_samples_rejected() {
        let config = QueryDistConfig {
            num_samples: 0,
            ..QueryDistConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroSamples)));
    }

    #[test]
    fn test_non_positive_lambda_rejected() {
        for lambda in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = QueryDistConfig {
                lambda,
                ..QueryDistConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidLambda(_))),
                "lambda {} should be rejected",
                lambda
            );
        }
    }

    #[test]
    fn test_default_output_dir_is_project_relative() {
        let config = QueryDistConfig::default();
        assert!(config.output_dir.ends_with("data"));
    }
}
