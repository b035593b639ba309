use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::model::counts::CategoryCounts;
use crate::pipeline::stage2_aggregate::Aggregation;

pub mod json;
pub mod text;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStat {
    pub label: &'static str,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryData {
    pub tool: String,
    pub version: String,
    pub input: String,
    pub total: u64,
    pub dropped_rows: u64,
    pub categories: Vec<CategoryStat>,
    pub charts: ChartPaths,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPaths {
    pub bar: String,
    pub pie: String,
}

pub fn category_stats(counts: &CategoryCounts) -> Vec<CategoryStat> {
    counts
        .iter()
        .map(|(category, count)| CategoryStat {
            label: category.label(),
            count,
            percentage: counts.rounded_percentage(category),
        })
        .collect()
}

pub fn build_summary(
    input: &Path,
    aggregation: &Aggregation,
    bar: &Path,
    pie: &Path,
) -> SummaryData {
    SummaryData {
        tool: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        input: input.display().to_string(),
        total: aggregation.counts.total(),
        dropped_rows: aggregation.dropped_rows,
        categories: category_stats(&aggregation.counts),
        charts: ChartPaths {
            bar: bar.display().to_string(),
            pie: pie.display().to_string(),
        },
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
