use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for hkaddr
#[derive(Debug, Parser)]
#[command(
    name = "hkaddr",
    version,
    about = "Consolidate Hong Kong premises addresses from *.geojson files into one JSON tree"
)]
pub struct CliArgs {
    /// Folder containing *.geojson files
    pub input_folder: PathBuf,

    /// Output JSON path (parent directories are created)
    pub output_json: PathBuf,
}
