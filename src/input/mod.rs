use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod reader;
pub mod table;

pub use table::Dataset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Plain,
    Gzip,
}

#[derive(Debug, Clone)]
pub struct InputSpec {
    pub path: PathBuf,
    pub delimiter: u8,
    pub compression: Compression,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error(
        "Sorry, I couldn't find '{}'. Please ensure the dataset is in the correct location.",
        .0.display()
    )]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Builds the read plan for `path`. An explicit delimiter wins; otherwise
/// `.tsv` (optionally gzipped) files are tab separated and everything else
/// uses commas.
pub fn resolve_input(path: &Path, delimiter: Option<u8>) -> InputSpec {
    let compression = detect_compression(path);
    let delimiter = delimiter.unwrap_or_else(|| default_delimiter(path, compression));
    InputSpec {
        path: path.to_path_buf(),
        delimiter,
        compression,
    }
}

pub fn load_dataset(spec: &InputSpec) -> Result<Dataset, InputError> {
    if spec.path.is_dir() {
        return Err(InputError::NotFound(spec.path.clone()));
    }
    let reader = reader::open_input(&spec.path, spec.compression)?;
    table::read_table(reader, spec.delimiter)
}

fn detect_compression(path: &Path) -> Compression {
    if path.extension().is_some_and(|ext| ext == "gz") {
        Compression::Gzip
    } else {
        Compression::Plain
    }
}

fn default_delimiter(path: &Path, compression: Compression) -> u8 {
    let inner = match compression {
        Compression::Gzip => path.file_stem().map(Path::new),
        Compression::Plain => Some(path),
    };
    match inner.and_then(|p| p.extension()).and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") => b'\t',
        _ => b',',
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
