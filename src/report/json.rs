use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::report::{ReportError, SummaryData};

pub fn render_summary_json(data: &SummaryData) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(data)?)
}

pub fn write_summary_json(data: &SummaryData, path: &Path) -> Result<(), ReportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = render_summary_json(data)?;
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(json.as_bytes())?;
    w.write_all(b"\n")?;
    w.flush()?;
    Ok(())
}
