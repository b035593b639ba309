//! Static PNG charts of the category distribution.
//!
//! Both charts use the [`plotters`] bitmap backend at a fixed resolution. The
//! geometry each renderer needs (axis range, label text and anchors) is
//! computed by the plain helpers in this module so it can be checked without
//! rasterizing anything.

use std::fs;
use std::path::Path;

use plotters::style::RGBColor;
use thiserror::Error;

use crate::model::category::GenderCategory;
use crate::model::counts::CategoryCounts;
use crate::model::palette::{Rgb, color_for_label};

pub mod bar;
pub mod pie;

pub const CHART_SIZE: (u32, u32) = (1200, 900);

/// Vertical distance, in count units, between a bar's top and its label.
pub const BAR_LABEL_OFFSET: f64 = 1.0;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to prepare output location: {0}")]
    Io(#[from] std::io::Error),
}

type Result<T> = core::result::Result<T, ChartError>;

/// One drawable slice of the distribution: a bar or a wedge.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartEntry {
    pub category: GenderCategory,
    pub count: u64,
    pub percentage: f64,
    pub color: Rgb,
}

pub fn chart_entries(counts: &CategoryCounts) -> Vec<ChartEntry> {
    counts
        .iter()
        .map(|(category, count)| ChartEntry {
            category,
            count,
            percentage: counts.rounded_percentage(category),
            color: color_for_label(category.label()),
        })
        .collect()
}

/// Wedges in drawing order. The backend sweeps clockwise, so canonical order is
/// reversed to lay masculine, neutral, feminine counterclockwise from twelve
/// o'clock.
pub fn pie_wedges(counts: &CategoryCounts) -> Vec<ChartEntry> {
    let mut entries = chart_entries(counts);
    entries.reverse();
    entries
}

pub fn percent_label(pct: f64) -> String {
    format!("{pct:.1}%")
}

/// Upper bound of the bar chart's value axis. Leaves room for the percentage
/// label above the tallest bar and never collapses to an empty range.
pub fn bar_y_max(counts: &CategoryCounts) -> f64 {
    let top = counts.max_count() as f64 + BAR_LABEL_OFFSET;
    (top * 1.15).max(1.0)
}

pub fn bar_label_y(count: u64) -> f64 {
    count as f64 + BAR_LABEL_OFFSET
}

pub fn wedge_label(entry: &ChartEntry) -> String {
    format!(
        "{} ({})",
        entry.category.display_name(),
        percent_label(entry.percentage)
    )
}

pub(crate) fn to_rgb_color(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

pub(crate) fn prepare_output(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/chart/mod.rs"]
mod tests;
