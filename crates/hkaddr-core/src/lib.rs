// crates/hkaddr-core/src/lib.rs

//! # hkaddr-core
//!
//! Consolidates Hong Kong premises addresses from a folder of GeoJSON files
//! into one bilingual tree:
//!
//! **Structure:** city -> area -> road -> buildings
//!
//! The pipeline is strictly one-way:
//! 1. [`loader`] reads `*.geojson` files in file-name order,
//! 2. [`extract`] pulls an [`AddressRecord`] out of each feature,
//! 3. [`Hierarchy`] deduplicates them,
//! 4. [`model::convert`] and [`writer`] emit the sorted, compact JSON.
//!
//! ```rust
//! use hkaddr_core::{loader, model::convert, Hierarchy};
//! use serde_json::json;
//!
//! let doc = json!({"features": [{"properties": {"Address": {"PremisesAddress": {
//!     "ChiPremisesAddress": {"Region": "香港", "ChiStreet": {"StreetName": "皇后大道中"}},
//!     "EngPremisesAddress": {"Region": "Hong Kong", "EngStreet": {"StreetName": "Queen's Road Central"}}
//! }}}}]});
//!
//! let mut hierarchy = Hierarchy::new();
//! loader::ingest_document(&doc, &mut hierarchy);
//!
//! let cities = convert::to_views(&hierarchy);
//! assert_eq!(cities[0].area_list[0].road_list[0].road_eng_name, "Queen's Road Central");
//! ```

pub mod common;
pub mod error;
pub mod extract;
pub mod loader;
pub mod model;
pub mod raw;
pub mod writer;

// Re-exports
pub use crate::common::HierarchyStats;
pub use crate::error::{HkAddrError, Result};
pub use crate::loader::{ingest_dir, ingest_dir_with, Ingest, SkippedFile};
pub use crate::model::{AddressRecord, BuildingEntry, CityView, Hierarchy, NamePair, ZIP_CODE};

use log::info;
use std::path::{Path, PathBuf};

/// Summary of a finished [`convert_dir`] run.
#[derive(Debug)]
pub struct ConvertReport {
    pub output: PathBuf,
    pub files_read: usize,
    pub features_seen: usize,
    pub stats: HierarchyStats,
    pub skipped: Vec<SkippedFile>,
}

/// Runs the whole pipeline: reads `input_dir`, writes the consolidated JSON
/// to `output`.
///
/// Unparsable input files do not fail the run; they are listed in
/// [`ConvertReport::skipped`]. A missing input folder or any failure while
/// writing the output is returned as an error.
pub fn convert_dir(input_dir: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<ConvertReport> {
    convert_dir_with(input_dir, output, |_| Ok(()))
}

/// Like [`convert_dir`], but reports every skipped file through `on_skip`
/// while the folder is scanned, so the caller hears about it even if the
/// output write fails afterwards.
pub fn convert_dir_with<F>(
    input_dir: impl AsRef<Path>,
    output: impl AsRef<Path>,
    on_skip: F,
) -> Result<ConvertReport>
where
    F: FnMut(&SkippedFile) -> Result<()>,
{
    let output = output.as_ref();
    let ingest = ingest_dir_with(input_dir, on_skip)?;
    let stats = ingest.hierarchy.stats();

    let cities = model::convert::to_views(&ingest.hierarchy);
    writer::write_output(output, &cities)?;

    info!(
        "{} files, {} features -> {} cities, {} areas, {} roads, {} buildings",
        ingest.files_read,
        ingest.features_seen,
        stats.cities,
        stats.areas,
        stats.roads,
        stats.buildings
    );

    Ok(ConvertReport {
        output: output.to_path_buf(),
        files_read: ingest.files_read,
        features_seen: ingest.features_seen,
        stats,
        skipped: ingest.skipped,
    })
}
