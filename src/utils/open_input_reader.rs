use crate::Error;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Opens a file for line-oriented reading. Files with a `.gz` extension are decompressed on the
/// fly.
pub fn open_input_reader(path: &Path) -> Result<Box<dyn BufRead>, Error> {
    let file = File::open(path).map_err(|err| {
        Error::IoError(std::io::Error::new(
            err.kind(),
            format!("Failed to open {:?}: {}", path, err),
        ))
    })?;

    let is_gzip = path
        .extension()
        .map_or(false, |extension| extension.eq_ignore_ascii_case("gz"));

    if is_gzip {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}
