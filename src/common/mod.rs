//! Common infrastructure shared across the analysis modules
//!
//! This module provides reusable infrastructure for:
//! - Fixed-width node-range binning
//! - Rendering the distribution figures

pub mod buckets;
pub mod plots;

// Re-export commonly used items
pub use plots::PlotError;
