use std::path::Path;

use crate::pipeline::stage2_aggregate::Aggregation;
use crate::report::json::write_summary_json;
use crate::report::{ReportError, SummaryData, build_summary};

#[derive(Debug, Clone)]
pub struct Stage4Input<'a> {
    pub input_path: &'a Path,
    pub aggregation: &'a Aggregation,
    pub bar_path: &'a Path,
    pub pie_path: &'a Path,
}

pub fn run_stage4(input: &Stage4Input<'_>, summary_json: &Path) -> Result<SummaryData, ReportError> {
    let summary = build_summary(
        input.input_path,
        input.aggregation,
        input.bar_path,
        input.pie_path,
    );
    write_summary_json(&summary, summary_json)?;
    tracing::info!(path = %summary_json.display(), "summary written");
    Ok(summary)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
