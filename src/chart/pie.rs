use std::path::Path;

use plotters::element::Pie;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::chart::{CHART_SIZE, ChartError, pie_wedges, prepare_output, to_rgb_color, wedge_label};
use crate::model::counts::CategoryCounts;

pub const PIE_TITLE: &str = "Perceived Robot Gender Distribution";
pub const EMPTY_NOTE: &str = "No records";

/// Wedges start at twelve o'clock.
const START_ANGLE_DEG: f64 = -90.0;

pub fn render_pie_chart(counts: &CategoryCounts, output_path: &Path) -> Result<(), ChartError> {
    prepare_output(output_path)?;
    let entries = pie_wedges(counts);

    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::DrawingArea(e.to_string()))?;
    let area = root
        .titled(PIE_TITLE, ("sans-serif", 40))
        .map_err(|e| ChartError::DrawingArea(e.to_string()))?;

    let (width, height) = area.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);
    let radius = f64::from(width.min(height)) * 0.32;

    if counts.total() == 0 {
        let style = TextStyle::from(("sans-serif", 32).into_font())
            .pos(Pos::new(HPos::Center, VPos::Center));
        area.draw(&Text::new(EMPTY_NOTE, center, style))
            .map_err(|e| ChartError::Drawing(e.to_string()))?;
    } else {
        let sizes: Vec<f64> = entries.iter().map(|e| e.count as f64).collect();
        let colors: Vec<RGBColor> = entries.iter().map(|e| to_rgb_color(e.color)).collect();
        let labels: Vec<String> = entries.iter().map(wedge_label).collect();

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.start_angle(START_ANGLE_DEG);
        pie.label_style(("sans-serif", 28).into_font().color(&BLACK));
        area.draw(&pie)
            .map_err(|e| ChartError::Drawing(e.to_string()))?;
    }

    root.present()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;
    tracing::debug!(path = %output_path.display(), "pie chart written");
    Ok(())
}
