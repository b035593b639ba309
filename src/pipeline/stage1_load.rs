use std::path::Path;

use crate::input::{Dataset, InputError, InputSpec, load_dataset, resolve_input};

#[derive(Debug)]
pub struct Stage1Output {
    pub spec: InputSpec,
    pub dataset: Dataset,
}

pub fn run_stage1(path: &Path, delimiter: Option<u8>) -> Result<Stage1Output, InputError> {
    let spec = resolve_input(path, delimiter);
    tracing::info!(
        path = %spec.path.display(),
        delimiter = %char::from(spec.delimiter).escape_default(),
        compression = ?spec.compression,
        "loading dataset"
    );
    let dataset = load_dataset(&spec)?;
    Ok(Stage1Output { spec, dataset })
}
