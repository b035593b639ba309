use std::io::Read;

use crate::input::InputError;

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Values of column `name` in row order, or `None` if the column is absent.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &str> + '_> {
        let idx = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(move |row| row.get(idx).map(String::as_str).unwrap_or("")),
        )
    }
}

pub fn read_table<R: Read>(reader: R, delimiter: u8) -> Result<Dataset, InputError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns: Vec<String> = csv_reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, name)| {
            if i == 0 {
                name.trim_start_matches('\u{feff}').to_string()
            } else {
                name.to_string()
            }
        })
        .collect();
    if columns.is_empty() || columns.iter().all(|c| c.is_empty()) {
        return Err(InputError::Parse("dataset is empty".to_string()));
    }

    // Short rows are kept and read as empty trailing cells; rows wider than
    // the header have no column to land in.
    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        if record.len() > columns.len() {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            return Err(InputError::Parse(format!(
                "line {line}: expected at most {} fields, found {}",
                columns.len(),
                record.len()
            )));
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    tracing::debug!(columns = columns.len(), rows = rows.len(), "dataset loaded");
    Ok(Dataset { columns, rows })
}
