use std::path::Path;

use crate::model::counts::CategoryCounts;

pub const DATASET_CITATION: &str = "Dataset: ROBO-GAP (Perugia et al., 2022)";
pub const DATASET_SOURCE: &str = "Source: https://robo-gap.unisi.it/";

pub fn render_intro() -> String {
    let mut out = String::new();
    out.push_str(
        "Welcome! This script analyses the perceived gender distribution of robots in the ROBO-GAP dataset.\n",
    );
    out.push('\n');
    out.push_str(DATASET_CITATION);
    out.push('\n');
    out.push_str(DATASET_SOURCE);
    out.push('\n');
    out
}

pub fn render_loading(path: &Path) -> String {
    format!("\nLoading data from '{}'...\n", path.display())
}

pub fn render_computing() -> String {
    "Computing gender distribution...\n".to_string()
}

/// One line per category in canonical order. Percentages use the unrounded
/// share, printed with one decimal.
pub fn render_breakdown(counts: &CategoryCounts) -> String {
    let mut out = String::new();
    out.push_str("\nHere is the breakdown of robots by perceived gender:\n");
    for (category, count) in counts.iter() {
        out.push_str(&format!(
            "  {}: {} robots ({:.1}%)\n",
            category.display_name(),
            count,
            counts.percentage(category)
        ));
    }
    out
}

pub fn render_saving_bar(path: &Path) -> String {
    format!("\nSaving bar chart to '{}'...\n", path.display())
}

pub fn render_saving_pie(path: &Path) -> String {
    format!("Saving pie chart to '{}'...\n", path.display())
}

pub fn render_complete() -> String {
    "\nAnalysis complete. The bar and pie charts are saved and ready to use!\n".to_string()
}
