//! Console ranking report
//!
//! This module prints the run's key statistics and the top nodes by
//! estimated query probability as an ASCII table using the [`tabled`]
//! crate.

use crate::analysis::constants::TOP_RANKED_NODES;
use crate::config::QueryDistConfig;
use crate::estimator::QueryDistribution;
use tabled::{Table, Tabled};

/// One ranked node with its estimated probability and expected demand
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRank {
    /// Node identifier
    pub node: usize,
    /// Estimated probability of this node being queried
    pub probability: f64,
    /// `probability * num_queries`
    pub expected_queries: f64,
}

/// Row shape of the rendered ranking table
#[derive(Debug, Tabled)]
struct RankedRow {
    #[tabled(rename = "Rank")]
    rank: usize,
    #[tabled(rename = "Node")]
    node: usize,
    #[tabled(rename = "Probability")]
    probability: String,
    #[tabled(rename = "Expected Queries")]
    expected_queries: String,
}

impl RankedRow {
    fn new(rank: usize, entry: &NodeRank) -> Self {
        Self {
            rank,
            node: entry.node,
            probability: format!("{:.4}", entry.probability),
            expected_queries: format!("{:.1}", entry.expected_queries),
        }
    }
}

/// Ranks nodes by descending probability, ties broken by ascending node id
///
/// The stable sort preserves the original ascending node order between
/// equal probabilities. At most `top_n` entries are returned; a node space
/// smaller than `top_n` yields one entry per node.
///
/// # Arguments
/// * `distribution` - The estimated per-node query probabilities
/// * `num_queries` - Query volume used to derive expected counts
/// * `top_n` - Maximum number of entries to return
pub fn rank_nodes(
    distribution: &QueryDistribution,
    num_queries: u64,
    top_n: usize,
) -> Vec<NodeRank> {
    let mut ranks: Vec<NodeRank> = distribution
        .probabilities
        .iter()
        .enumerate()
        .map(|(node, &probability)| NodeRank {
            node,
            probability,
            expected_queries: probability * num_queries as f64,
        })
        .collect();

    ranks.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    ranks.truncate(top_n);
    ranks
}

/// Formats ranking entries as an ASCII table with a title line
///
/// # Arguments
/// * `ranks` - Ranking entries in display order
///
/// # Returns
/// A formatted ASCII table as a [`String`]
pub fn format_ranking_table(ranks: &[NodeRank]) -> String {
    if ranks.is_empty() {
        return "No nodes available for ranking".to_string();
    }

    let rows: Vec<RankedRow> = ranks
        .iter()
        .enumerate()
        .map(|(i, entry)| RankedRow::new(i + 1, entry))
        .collect();
    let table = Table::new(rows).to_string();

    let title = "Top 10 Most Likely Nodes to Be Queried";
    format!("{}\n{}\n{}", title, "=".repeat(title.len()), table)
}

/// Prints the configuration echo and the top-10 ranking to the console
pub fn print_ranking_report(distribution: &QueryDistribution, config: &QueryDistConfig) {
    println!();
    println!("Key Statistics:");
    println!("Total nodes: {}", config.num_nodes);
    println!("Lambda parameter: {}", config.lambda);
    println!("Number of queries: {}", config.num_queries);

    let ranks = rank_nodes(distribution, config.num_queries, TOP_RANKED_NODES);
    println!();
    println!("{}", format_ranking_table(&ranks));
}
