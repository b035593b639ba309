use thiserror::Error;

use crate::input::Dataset;
use crate::model::category::{CATEGORY_COLUMN, GenderCategory};
use crate::model::counts::CategoryCounts;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregateError {
    #[error("The dataset must contain a '{0}' column.")]
    MissingColumn(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aggregation {
    pub counts: CategoryCounts,
    /// Rows whose label is empty or not one of the three known categories.
    /// These never reach the counts or the console breakdown.
    pub dropped_rows: u64,
}

pub fn run_stage2(dataset: &Dataset) -> Result<Aggregation, AggregateError> {
    let labels = dataset
        .column(CATEGORY_COLUMN)
        .ok_or(AggregateError::MissingColumn(CATEGORY_COLUMN))?;
    let aggregation = tally_labels(labels);
    if aggregation.dropped_rows > 0 {
        tracing::debug!(
            dropped = aggregation.dropped_rows,
            "rows with unknown or empty {CATEGORY_COLUMN} were not counted"
        );
    }
    tracing::info!(
        rows = dataset.n_rows(),
        counted = aggregation.counts.total(),
        "aggregation complete"
    );
    Ok(aggregation)
}

pub fn tally_labels<'a, I>(labels: I) -> Aggregation
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = CategoryCounts::default();
    let mut dropped_rows = 0u64;
    for label in labels {
        match GenderCategory::from_label(label) {
            Some(category) => counts.increment(category),
            None => dropped_rows += 1,
        }
    }
    Aggregation {
        counts,
        dropped_rows,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_aggregate.rs"]
mod tests;
