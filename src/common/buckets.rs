//! Fixed-width node-range binning
//!
//! Aggregates per-node values into contiguous bins of adjacent node
//! identifiers for the coarser expected-count visualization.

/// One fixed-width bin over adjacent node identifiers
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRangeBin {
    /// Inclusive range label (e.g. "0-9", "10-19")
    pub range: String,
    /// Sum of expected query counts over the bin's node range
    pub expected: f64,
}

/// Aggregates an expected-count vector into contiguous fixed-width bins
///
/// Only complete bins are produced (`expected.len() / bin_size`); leftover
/// nodes past the last complete bin are excluded, so a node space smaller
/// than one bin yields no bins.
///
/// # Arguments
/// * `expected` - Expected query count per node, indexed by node id
/// * `bin_size` - Number of adjacent nodes aggregated per bin
///
/// # Returns
/// A vector of [`NodeRangeBin`] in ascending node order
pub fn bin_expected_counts(expected: &[f64], bin_size: usize) -> Vec<NodeRangeBin> {
    if bin_size == 0 {
        return Vec::new();
    }

    let num_bins = expected.len() / bin_size;
    let mut bins = Vec::with_capacity(num_bins);

    for i in 0..num_bins {
        let start = i * bin_size;
        let end = start + bin_size;
        bins.push(NodeRangeBin {
            range: format!("{}-{}", start, end - 1),
            expected: expected[start..end].iter().sum(),
        });
    }

    bins
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_labels_and_count() {
        let expected = vec![1.0; 30];
        let bins = bin_expected_counts(&expected, 10);

        assert_eq!(bins.len(), 3);
        assert_eq!(bins[0].range, "0-9");
        assert_eq!(bins[1].range, "10-19");
        assert_eq!(bins[2].range, "20-29");
    }

    #[test]
    fn test_binned_totals_match_expected_sum() {
        let expected: Vec<f64> = (0..50).map(|i| i as f64 * 0.5).collect();
        let bins = bin_expected_counts(&expected, 10);

        let binned_total: f64 = bins.iter().map(|bin| bin.expected).sum();
        let expected_total: f64 = expected.iter().sum();
        assert!((binned_total - expected_total).abs() < 1e-9);
    }

    #[test]
    fn test_leftover_nodes_are_excluded() {
        let expected = vec![2.0; 25];
        let bins = bin_expected_counts(&expected, 10);

        assert_eq!(bins.len(), 2);
        let binned_total: f64 = bins.iter().map(|bin| bin.expected).sum();
        assert!((binned_total - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_exactly_one_bin_at_bin_width() {
        let expected = vec![1.5; 10];
        let bins = bin_expected_counts(&expected, 10);

        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].range, "0-9");
        assert!((bins[0].expected - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_node_space_smaller_than_bin_yields_no_bins() {
        let expected = vec![1.0; 7];
        assert!(bin_expected_counts(&expected, 10).is_empty());
    }

    #[test]
    fn test_zero_bin_size_yields_no_bins() {
        let expected = vec![1.0; 20];
        assert!(bin_expected_counts(&expected, 0).is_empty());
    }
}
