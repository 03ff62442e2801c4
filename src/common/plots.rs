//! Plotting infrastructure for the distribution figures
//!
//! This module renders the two diagnostic figures using the [`plotters`]
//! crate: a three-panel probability bar chart and a binned expected-count
//! bar chart. Figures are saved as fixed-resolution PNG files.

use crate::analysis::constants::{
    EXPECTED_COUNTS_FIGURE_HEIGHT, FIGURE_WIDTH, PROBABILITY_FIGURE_HEIGHT, ZOOM_NARROW_NODES,
    ZOOM_WIDE_NODES,
};
use crate::common::buckets::NodeRangeBin;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::full_palette::ORANGE;
use std::path::Path;
use thiserror::Error;

/// Background color of the statistics box, matching the report's wheat tone
const WHEAT: RGBColor = RGBColor(245, 222, 179);

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save plot to file: {0}")]
    FileSave(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Creates the three-panel probability figure and saves it as a PNG file
///
/// Panel layout, top to bottom:
/// * full node range, with the statistics box overlaid top-right
/// * zoom over the first 25 nodes
/// * zoom over the first 50 nodes
///
/// Zoom panels cover fewer nodes when the node space is smaller than the
/// window.
///
/// # Arguments
/// * `probabilities` - Per-node probabilities over the whole node space
/// * `lambda` - Rate parameter echoed in the full-range panel title
/// * `stats_lines` - Statistics box content, one string per rendered line
/// * `output_path` - Path where the PNG file should be saved
///
/// # Returns
/// * `Ok(())` - If the figure was successfully created and saved
/// * `Err(PlotError)` - If an error occurred during chart generation
pub fn render_probability_figure(
    probabilities: &[f64],
    lambda: f64,
    stats_lines: &[String],
    output_path: &Path,
) -> Result<()> {
    if probabilities.is_empty() {
        return Err(PlotError::InvalidData(
            "Probability vector cannot be empty".to_string(),
        ));
    }

    let root = BitMapBackend::new(output_path, (FIGURE_WIDTH, PROBABILITY_FIGURE_HEIGHT))
        .into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let panels = root.split_evenly((3, 1));

    let full_title = format!(
        "Query Probability Distribution (Exponential with \u{3bb}={})",
        lambda
    );
    draw_probability_panel(&panels[0], probabilities, &full_title, 0.5, &BLUE)?;
    draw_stats_box(&panels[0], stats_lines)?;

    let narrow = &probabilities[..probabilities.len().min(ZOOM_NARROW_NODES)];
    draw_probability_panel(
        &panels[1],
        narrow,
        "Query Probability Distribution (Zoomed: Nodes 0-24)",
        0.4,
        &GREEN,
    )?;

    let wide = &probabilities[..probabilities.len().min(ZOOM_WIDE_NODES)];
    draw_probability_panel(
        &panels[2],
        wide,
        "Query Probability Distribution (Zoomed: Nodes 0-49)",
        0.4,
        &ORANGE,
    )?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Draws one probability bar panel onto the given drawing area
///
/// Bars are centered on integer node positions with the given half width,
/// mirroring the original bar widths of 1.0 (full range) and 0.8 (zoom).
fn draw_probability_panel(
    area: &DrawingArea<BitMapBackend, Shift>,
    probabilities: &[f64],
    title: &str,
    bar_half_width: f64,
    color: &RGBColor,
) -> Result<()> {
    let y_max = probabilities
        .iter()
        .copied()
        .fold(0.0f64, f64::max)
        .max(1e-9)
        * 1.1;
    let x_max = probabilities.len() as f64 - 0.5;

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 30))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(-0.5f64..x_max, 0.0f64..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Node ID")
        .y_desc("Probability of Being Queried")
        .axis_desc_style(("sans-serif", 22))
        .label_style(("sans-serif", 16))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(probabilities.iter().enumerate().map(|(node, &p)| {
            let x = node as f64;
            Rectangle::new(
                [(x - bar_half_width, 0.0), (x + bar_half_width, p)],
                color.mix(0.7).filled(),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Overlays the statistics text box in the top-right corner of a panel
fn draw_stats_box(area: &DrawingArea<BitMapBackend, Shift>, lines: &[String]) -> Result<()> {
    if lines.is_empty() {
        return Ok(());
    }

    let (area_width, _) = area.dim_in_pixel();
    let line_height: i32 = 24;
    let padding: i32 = 12;
    let box_width: i32 = 400;
    let box_height = padding * 2 + line_height * lines.len() as i32;
    let x0 = area_width as i32 - box_width - 100;
    let y0 = 60;

    area.draw(&Rectangle::new(
        [(x0, y0), (x0 + box_width, y0 + box_height)],
        WHEAT.mix(0.5).filled(),
    ))
    .map_err(|e| PlotError::Drawing(e.to_string()))?;

    for (i, line) in lines.iter().enumerate() {
        area.draw(&Text::new(
            line.clone(),
            (x0 + padding, y0 + padding + i as i32 * line_height),
            ("sans-serif", 18).into_font(),
        ))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    Ok(())
}

/// Creates the binned expected-count figure and saves it as a PNG file
///
/// One bar per node-range bin; x-axis tick labels use the bins' range
/// labels and only appear for a subset of bins to avoid crowding. A node
/// space smaller than one bin yields an empty (but valid) chart.
///
/// # Arguments
/// * `bins` - Width-10 node-range bins with aggregated expected counts
/// * `num_queries` - Total query volume echoed in the y-axis label
/// * `label_stride` - Every n-th bin receives an x-axis tick label
/// * `output_path` - Path where the PNG file should be saved
///
/// # Returns
/// * `Ok(())` - If the figure was successfully created and saved
/// * `Err(PlotError)` - If an error occurred during chart generation
pub fn render_expected_counts_figure(
    bins: &[NodeRangeBin],
    num_queries: u64,
    label_stride: usize,
    output_path: &Path,
) -> Result<()> {
    let root = BitMapBackend::new(output_path, (FIGURE_WIDTH, EXPECTED_COUNTS_FIGURE_HEIGHT))
        .into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let y_max = bins
        .iter()
        .map(|bin| bin.expected)
        .fold(0.0f64, f64::max)
        .max(1e-9)
        * 1.1;
    let x_max = (bins.len() as f64 - 0.5).max(0.5);
    let tick_count = (bins.len() / label_stride.max(1)).max(1);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Expected Query Count Distribution by Node Range",
            ("sans-serif", 30),
        )
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(-0.5f64..x_max, 0.0f64..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    let labels: Vec<String> = bins.iter().map(|bin| bin.range.clone()).collect();
    chart
        .configure_mesh()
        .x_desc("Node ID Range")
        .y_desc(format!(
            "Expected Number of Queries (out of {} total)",
            num_queries
        ))
        .axis_desc_style(("sans-serif", 22))
        .label_style(("sans-serif", 16))
        .x_labels(tick_count)
        .x_label_formatter(&|x| {
            let idx = x.round();
            if (x - idx).abs() > 1e-6 || idx < 0.0 || idx as usize >= labels.len() {
                String::new()
            } else {
                labels[idx as usize].clone()
            }
        })
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(bins.iter().enumerate().map(|(i, bin)| {
            let x = i as f64;
            Rectangle::new([(x - 0.4, 0.0), (x + 0.4, bin.expected)], BLUE.mix(0.7).filled())
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}
