// crates/hkaddr-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (directory scan, reading, decompression) and
//! feeds every feature through the extractor into a [`Hierarchy`].
//!
//! A file that cannot be read or parsed is recorded as a [`SkippedFile`] and
//! the scan continues with the next one.

use crate::error::{HkAddrError, Result};
use crate::extract::features_of;
use crate::model::{AddressRecord, Hierarchy};
use log::{debug, warn};
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

mod common_io;

pub use common_io::{is_input_name, GEOJSON_SUFFIX};

/// An input file that was left out of the run.
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub error: HkAddrError,
}

impl SkippedFile {
    /// File name for diagnostics, falling back to the full path.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Result of reading a whole input folder.
#[derive(Debug, Default)]
pub struct Ingest {
    pub hierarchy: Hierarchy,
    pub files_read: usize,
    pub features_seen: usize,
    pub skipped: Vec<SkippedFile>,
}

/// Lists the input files of `dir` (non-recursive), sorted by file name.
pub fn scan_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(HkAddrError::NotFound(format!(
            "Input folder not found: {}",
            dir.display()
        )));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let matches = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(is_input_name);
        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Reads one file as UTF-8 and parses it as JSON.
pub fn load_file(path: &Path) -> Result<Value> {
    let mut text = String::new();
    common_io::open_stream(path)?.read_to_string(&mut text)?;
    Ok(serde_json::from_str(&text)?)
}

/// Feeds every feature of `doc` into `hierarchy`. Returns the number of
/// features looked at.
pub fn ingest_document(doc: &Value, hierarchy: &mut Hierarchy) -> usize {
    let features = features_of(doc);
    for feature in features {
        if let Some(record) = AddressRecord::from_feature(feature) {
            hierarchy.record(&record);
        }
    }
    features.len()
}

/// Reads every matching file in `dir`, in file-name order, into one
/// hierarchy.
pub fn ingest_dir(dir: impl AsRef<Path>) -> Result<Ingest> {
    ingest_dir_with(dir, |_| Ok(()))
}

/// Like [`ingest_dir`], but calls `on_skip` as soon as a file is skipped,
/// before the next file is read. An error from `on_skip` stops the scan.
pub fn ingest_dir_with<F>(dir: impl AsRef<Path>, mut on_skip: F) -> Result<Ingest>
where
    F: FnMut(&SkippedFile) -> Result<()>,
{
    let mut ingest = Ingest::default();

    for path in scan_inputs(dir.as_ref())? {
        debug!("reading {}", path.display());
        match load_file(&path) {
            Ok(doc) => {
                ingest.features_seen += ingest_document(&doc, &mut ingest.hierarchy);
                ingest.files_read += 1;
            }
            Err(error) => {
                warn!("skipping {}: {}", path.display(), error);
                let skipped = SkippedFile { path, error };
                on_skip(&skipped)?;
                ingest.skipped.push(skipped);
            }
        }
    }

    Ok(ingest)
}
