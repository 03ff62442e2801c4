mod analysis;
mod common;
mod config;
mod estimator;

use std::path::Path;
use std::process::Command;
use thiserror::Error;

// Import analysis functions
use analysis::{
    generate_expected_counts_figure, generate_probability_figure, print_ranking_report,
};

use analysis::constants::{EXPECTED_COUNTS_FIGURE_FILE, PROBABILITY_FIGURE_FILE};
use config::{Args, QueryDistConfig};
use estimator::estimate_probabilities;

/// Errors that can occur during analysis
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Probability analysis error: {0}")]
    Probability(#[from] analysis::probability::ProbabilityError),

    #[error("Expected counts analysis error: {0}")]
    ExpectedCounts(#[from] analysis::expected_counts::ExpectedCountsError),
}

type Result<T> = core::result::Result<T, AnalysisError>;

fn main() -> Result<()> {
    let args: Args = argh::from_env();
    let config = QueryDistConfig::from(args);

    println!("Visualizing exponential distribution used for query generation...");

    // Estimate per-node probabilities from a large sample
    let distribution = estimate_probabilities(&config)?;

    // Generate the probability distribution figure
    generate_probability_figure(&distribution, &config)?;

    // Generate the expected query count figure
    generate_expected_counts_figure(&distribution, &config)?;

    // Print key statistics and the top node ranking
    print_ranking_report(&distribution, &config);

    if config.show_plots {
        show_figures(&config);
    }

    Ok(())
}

/// Opens the rendered figures in the platform's default image viewer
///
/// Viewer launch failures are reported on stderr and never fail the run.
fn show_figures(config: &QueryDistConfig) {
    for file in [PROBABILITY_FIGURE_FILE, EXPECTED_COUNTS_FIGURE_FILE] {
        let path = config.output_dir.join(file);
        if let Err(e) = open_in_viewer(&path) {
            eprintln!("Warning: could not open {}: {}", path.display(), e);
        }
    }
}

fn open_in_viewer(path: &Path) -> std::io::Result<()> {
    if cfg!(target_os = "macos") {
        Command::new("open").arg(path).spawn()?;
    } else if cfg!(target_os = "windows") {
        Command::new("cmd").args(["/C", "start", ""]).arg(path).spawn()?;
    } else {
        Command::new("xdg-open").arg(path).spawn()?;
    }
    Ok(())
}
