use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::chart::{
    CHART_SIZE, ChartError, bar_label_y, bar_y_max, chart_entries, percent_label, prepare_output,
    to_rgb_color,
};
use crate::model::counts::CategoryCounts;

pub const BAR_TITLE: &str = "Distribution of Perceived Robot Genders";
pub const BAR_X_DESC: &str = "Perceived Gender Category";
pub const BAR_Y_DESC: &str = "Number of Robots";

/// Renders one vertical bar per category, in canonical order, with the rounded
/// percentage printed just above each bar.
pub fn render_bar_chart(counts: &CategoryCounts, output_path: &Path) -> Result<(), ChartError> {
    prepare_output(output_path)?;
    let entries = chart_entries(counts);
    let n_bars = entries.len() as u32;

    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(BAR_TITLE, ("sans-serif", 40))
        .margin(30)
        .x_label_area_size(70)
        .y_label_area_size(90)
        .build_cartesian_2d((0u32..n_bars).into_segmented(), 0f64..bar_y_max(counts))
        .map_err(|e| ChartError::ChartConfig(e.to_string()))?;

    let tick_labels: Vec<&'static str> = entries.iter().map(|e| e.category.label()).collect();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(entries.len())
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(i) => tick_labels
                .get(*i as usize)
                .map(|s| s.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .y_label_formatter(&|y| format!("{y:.0}"))
        .x_desc(BAR_X_DESC)
        .y_desc(BAR_Y_DESC)
        .axis_desc_style(("sans-serif", 30))
        .label_style(("sans-serif", 25))
        .draw()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    let colors: Vec<RGBColor> = entries.iter().map(|e| to_rgb_color(e.color)).collect();
    chart
        .draw_series(
            Histogram::vertical(&chart)
                .margin(40)
                .style_func(|x, _| match x {
                    SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => colors
                        .get(*i as usize)
                        .copied()
                        .unwrap_or_else(|| to_rgb_color(crate::model::palette::FALLBACK_COLOR))
                        .filled(),
                    SegmentValue::Last => TRANSPARENT.filled(),
                })
                .data(
                    entries
                        .iter()
                        .enumerate()
                        .map(|(i, e)| (i as u32, e.count as f64)),
                ),
        )
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    let label_style = TextStyle::from(("sans-serif", 26).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart
        .draw_series(entries.iter().enumerate().map(|(i, e)| {
            Text::new(
                percent_label(e.percentage),
                (SegmentValue::CenterOf(i as u32), bar_label_y(e.count)),
                label_style.clone(),
            )
        }))
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;
    tracing::debug!(path = %output_path.display(), "bar chart written");
    Ok(())
}
