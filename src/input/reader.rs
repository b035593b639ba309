use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::input::{Compression, InputError};

pub fn open_input(path: &Path, compression: Compression) -> Result<Box<dyn Read>, InputError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => InputError::NotFound(path.to_path_buf()),
        _ => InputError::Io(e),
    })?;
    let buffered = BufReader::new(file);
    match compression {
        Compression::Gzip => Ok(Box::new(MultiGzDecoder::new(buffered))),
        Compression::Plain => Ok(Box::new(buffered)),
    }
}
