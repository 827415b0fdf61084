//! hkaddr: command-line interface for hkaddr-core
//!
//! Reads every `*.geojson` file in a folder, merges the premises addresses
//! into a city / area / road / building tree and writes it as compact JSON.
//!
//! Usage
//! -----
//!
//!   $ hkaddr ./data/premises ./out/addresses.json
//!
//! Files that are not valid JSON are reported and skipped. Set `RUST_LOG`
//! (e.g. `RUST_LOG=info`) for per-file and summary logging.
mod args;

use crate::args::CliArgs;
use clap::Parser;
use hkaddr_core::SkippedFile;
use log::info;
use std::io::{self, Write};
use std::path::Path;

fn skip_line(skipped: &SkippedFile) -> String {
    format!("Skip {}: cannot parse JSON ({})", skipped.name(), skipped.error)
}

fn done_line(output: &Path) -> String {
    format!("Done. Wrote {}", output.display())
}

/// Runs one conversion, writing the diagnostic lines to `out`. Skip lines
/// are written as each file fails, before the output file is touched.
fn run<W: Write>(args: &CliArgs, out: &mut W) -> anyhow::Result<()> {
    info!(
        "converting {} -> {}",
        args.input_folder.display(),
        args.output_json.display()
    );
    let report = hkaddr_core::convert_dir_with(&args.input_folder, &args.output_json, |skipped| {
        writeln!(out, "{}", skip_line(skipped))?;
        Ok(())
    })?;

    writeln!(out, "{}", done_line(&report.output))?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = CliArgs::parse();

    run(&args, &mut io::stdout().lock())
}
