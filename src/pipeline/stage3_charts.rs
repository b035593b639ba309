use std::path::Path;

use crate::chart::ChartError;
use crate::chart::bar::render_bar_chart;
use crate::chart::pie::render_pie_chart;
use crate::model::counts::CategoryCounts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Pie,
}

impl ChartKind {
    pub fn name(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
        }
    }
}

pub fn run_stage3(
    counts: &CategoryCounts,
    kind: ChartKind,
    output_path: &Path,
) -> Result<(), ChartError> {
    tracing::info!(chart = kind.name(), path = %output_path.display(), "rendering chart");
    match kind {
        ChartKind::Bar => render_bar_chart(counts, output_path),
        ChartKind::Pie => render_pie_chart(counts, output_path),
    }
}
