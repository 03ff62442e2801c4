//! Probability distribution figure generation
//!
//! This module produces the three-panel probability figure: the full node
//! range plus two zoomed views, with a statistics box summarizing the most
//! likely node and the cumulative mass over the first nodes.

use crate::analysis::constants::{CUMULATIVE_CHECKPOINTS, PROBABILITY_FIGURE_FILE};
use crate::common::plots::render_probability_figure;
use crate::common::PlotError;
use crate::config::QueryDistConfig;
use crate::estimator::QueryDistribution;
use std::fs;

/// Errors that can occur during probability figure generation
#[derive(Debug)]
pub enum ProbabilityError {
    FileWrite(std::io::Error),
    PlotGeneration(PlotError),
}

impl std::fmt::Display for ProbabilityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbabilityError::FileWrite(e) => write!(f, "Failed to write file: {}", e),
            ProbabilityError::PlotGeneration(e) => write!(f, "Failed to generate plot: {}", e),
        }
    }
}

impl std::error::Error for ProbabilityError {}

impl From<std::io::Error> for ProbabilityError {
    fn from(err: std::io::Error) -> Self {
        ProbabilityError::FileWrite(err)
    }
}

impl From<PlotError> for ProbabilityError {
    fn from(err: PlotError) -> Self {
        ProbabilityError::PlotGeneration(err)
    }
}

type Result<T> = core::result::Result<T, ProbabilityError>;

/// Generate the three-panel probability figure
///
/// Renders the full-range bar chart with the statistics box plus the two
/// zoomed panels, and saves the figure to `exponential_distribution.png`
/// in the configured output directory (created if absent). A confirmation
/// line with the saved path is printed on success.
///
/// # Arguments
/// * `distribution` - The estimated per-node query probabilities
/// * `config` - Run configuration (lambda echo, output directory)
///
/// # Returns
/// * `Ok(())` - If the figure was rendered and saved
/// * `Err(ProbabilityError)` - If directory creation or rendering failed
pub fn generate_probability_figure(
    distribution: &QueryDistribution,
    config: &QueryDistConfig,
) -> Result<()> {
    fs::create_dir_all(&config.output_dir)?;

    let stats_lines = build_stats_lines(distribution);
    let output_path = config.output_dir.join(PROBABILITY_FIGURE_FILE);

    render_probability_figure(
        &distribution.probabilities,
        config.lambda,
        &stats_lines,
        &output_path,
    )?;

    println!(
        "Exponential distribution visualization saved to {}",
        output_path.display()
    );

    Ok(())
}

/// Builds the statistics box content: the most likely node and the
/// cumulative mass over the first 10, 50 and 100 nodes, each shown as a
/// fraction and as a percentage. Checkpoints clamp to the node space.
fn build_stats_lines(distribution: &QueryDistribution) -> Vec<String> {
    let (max_node, max_probability) = distribution.max_probability_node();

    let mut lines = vec![
        "Statistics:".to_string(),
        format!("Most likely node: {} (p={:.4})", max_node, max_probability),
        "Cumulative probability:".to_string(),
    ];

    for checkpoint in CUMULATIVE_CHECKPOINTS {
        let end = checkpoint.min(distribution.num_nodes());
        let mass = distribution.cumulative_mass(checkpoint);
        lines.push(format!(
            "  Nodes 0-{}: {:.4} ({:.2}%)",
            end - 1,
            mass,
            mass * 100.0
        ));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::estimate_probabilities;

    #[test]
    fn test_stats_lines_cover_all_checkpoints() {
        let distribution = QueryDistribution {
            probabilities: (0..200).map(|i| 0.5f64.powi(i + 1)).collect(),
        };
        let lines = build_stats_lines(&distribution);

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Statistics:");
        assert_eq!(lines[1], "Most likely node: 0 (p=0.5000)");
        assert!(lines[3].starts_with("  Nodes 0-9: "));
        assert!(lines[4].starts_with("  Nodes 0-49: "));
        assert!(lines[5].starts_with("  Nodes 0-99: "));
    }

    #[test]
    fn test_stats_lines_report_fraction_and_percentage() {
        let mut probabilities = vec![0.0; 100];
        probabilities[0] = 0.75;
        probabilities[20] = 0.25;
        let distribution = QueryDistribution { probabilities };
        let lines = build_stats_lines(&distribution);

        assert_eq!(lines[3], "  Nodes 0-9: 0.7500 (75.00%)");
        assert_eq!(lines[4], "  Nodes 0-49: 1.0000 (100.00%)");
    }

    #[test]
    fn test_stats_lines_clamp_to_small_node_space() {
        let distribution = QueryDistribution {
            probabilities: vec![0.5, 0.3, 0.2],
        };
        let lines = build_stats_lines(&distribution);

        // All three checkpoints collapse onto the full 3-node space.
        assert_eq!(lines[3], "  Nodes 0-2: 1.0000 (100.00%)");
        assert_eq!(lines[4], "  Nodes 0-2: 1.0000 (100.00%)");
        assert_eq!(lines[5], "  Nodes 0-2: 1.0000 (100.00%)");
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_generate_probability_figure_writes_png() {
        let config = QueryDistConfig {
            num_nodes: 100,
            num_samples: 10_000,
            output_dir: std::env::temp_dir().join("probability_figure_test"),
            ..QueryDistConfig::default()
        };
        let distribution = estimate_probabilities(&config).unwrap();

        let result = generate_probability_figure(&distribution, &config);
        assert!(result.is_ok());
        assert!(config.output_dir.join(PROBABILITY_FIGURE_FILE).exists());

        let _ = fs::remove_dir_all(&config.output_dir);
    }
}
