// crates/hkaddr-core/src/loader/common_io.rs
use crate::error::Result;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

pub const GEOJSON_SUFFIX: &str = ".geojson";
#[cfg(feature = "compact")]
pub const GZIP_SUFFIX: &str = ".gz";

/// Does this file name belong to the input set?
pub fn is_input_name(name: &str) -> bool {
    if name.ends_with(GEOJSON_SUFFIX) {
        return true;
    }
    #[cfg(feature = "compact")]
    {
        if let Some(stem) = name.strip_suffix(GZIP_SUFFIX) {
            return stem.ends_with(GEOJSON_SUFFIX);
        }
    }
    false
}

/// Opens a file buffered, decompressing `.gz` inputs when `compact` is on.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let reader = BufReader::new(File::open(path)?);

    #[cfg(feature = "compact")]
    {
        let gz = path
            .file_name()
            .is_some_and(|n| n.to_string_lossy().ends_with(GZIP_SUFFIX));
        if gz {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
    }

    Ok(Box::new(reader))
}
