//! Display constants for the analysis figures and console report
//!
//! Figure resolutions mirror the original report layout (12x14 in and
//! 12x6 in pages at 150 DPI) as fixed pixel dimensions.

/// Width of both figures in pixels
pub const FIGURE_WIDTH: u32 = 1800;

/// Height of the three-panel probability figure in pixels
pub const PROBABILITY_FIGURE_HEIGHT: u32 = 2100;

/// Height of the expected-count figure in pixels
pub const EXPECTED_COUNTS_FIGURE_HEIGHT: u32 = 900;

/// Node count shown in the first zoomed panel (nodes 0-24)
pub const ZOOM_NARROW_NODES: usize = 25;

/// Node count shown in the second zoomed panel (nodes 0-49)
pub const ZOOM_WIDE_NODES: usize = 50;

/// Node-count checkpoints for cumulative probability mass in the stats box
pub const CUMULATIVE_CHECKPOINTS: [usize; 3] = [10, 50, 100];

/// Width of each node-range bin in the expected-count figure
pub const BIN_SIZE: usize = 10;

/// Every n-th bin gets an x-axis tick label in the expected-count figure
pub const BIN_LABEL_STRIDE: usize = 5;

/// Number of nodes listed in the console ranking
pub const TOP_RANKED_NODES: usize = 10;

/// Output file name of the three-panel probability figure
pub const PROBABILITY_FIGURE_FILE: &str = "exponential_distribution.png";

/// Output file name of the binned expected-count figure
pub const EXPECTED_COUNTS_FIGURE_FILE: &str = "expected_query_counts.png";
