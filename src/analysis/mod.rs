//! Domain-specific analysis modules
//!
//! This module contains domain-specific analysis logic for:
//! - Probability distribution figures
//! - Expected query count figures
//! - Console ranking reports

pub mod constants;
pub mod expected_counts;
pub mod probability;
pub mod ranking;

// Re-export analysis functions for convenience
pub use expected_counts::generate_expected_counts_figure;
pub use probability::generate_probability_figure;
pub use ranking::print_ranking_report;
