// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ifc2json - convert an IFC (STEP) file to IFC.JSON-5a
//!
//! Usage:
//!   ifc2json model.ifc                  # writes model.json, geometry from model.obj
//!   ifc2json model.ifc -o - --compact   # compact JSON to stdout
//!   ifc2json model.ifc --stable-ids     # reproducible representation ids

use anyhow::{Context, Result};
use clap::Parser;
use ifcjson::{convert_file, write_document, ConvertOptions, IdStrategy, OutputStyle};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Convert IFC files to IFC.JSON-5a
#[derive(Parser, Debug)]
#[command(name = "ifc2json", version)]
#[command(about = "Convert an IFC (STEP) file to IFC.JSON-5a")]
struct Args {
    /// Input IFC file
    input: PathBuf,

    /// Output file (default: input with .json extension, `-` for stdout)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// OBJ geometry sidecar (default: input with .obj extension)
    #[arg(long, env = "IFCJSON_OBJ")]
    obj: Option<PathBuf>,

    /// Skip geometry even if a sidecar exists
    #[arg(long)]
    no_geometry: bool,

    /// Derive representation ids from element GlobalIds instead of random ones
    #[arg(long, env = "IFCJSON_STABLE_IDS")]
    stable_ids: bool,

    /// Maximum entity nesting depth
    #[arg(long, default_value_t = ifcjson::DEFAULT_MAX_DEPTH, env = "IFCJSON_MAX_DEPTH")]
    max_depth: usize,

    /// Single-line JSON output
    #[arg(long)]
    compact: bool,

    /// Write only the object list, without the ifcJSON envelope
    #[arg(long)]
    bare: bool,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Args {
    fn options(&self) -> ConvertOptions {
        let mut options = ConvertOptions::new()
            .with_geometry(!self.no_geometry)
            .with_max_depth(self.max_depth)
            .with_id_strategy(if self.stable_ids {
                IdStrategy::Derived
            } else {
                IdStrategy::Random
            });
        if let Some(obj) = &self.obj {
            options = options.with_sidecar(obj);
        }
        options
    }

    fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("json"))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let options = args.options();
    let (document, stats) = convert_file(&args.input, &options)
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    let style = OutputStyle {
        pretty: !args.compact,
        bare: args.bare,
    };
    let output = args.output_path();

    if output.as_os_str() == "-" {
        let stdout = io::stdout();
        let mut writer = BufWriter::new(stdout.lock());
        write_document(&mut writer, &document, style).context("Failed to write output")?;
        writer.flush().context("Failed to write output")?;
    } else {
        let file = File::create(&output)
            .with_context(|| format!("Failed to create {}", output.display()))?;
        let mut writer = BufWriter::new(file);
        write_document(&mut writer, &document, style)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        writer
            .flush()
            .with_context(|| format!("Failed to write {}", output.display()))?;
    }

    tracing::info!(
        input = %args.input.display(),
        output = %output.display(),
        objects = document.data.len(),
        identified = stats.identified,
        representations = stats.representations,
        "conversion complete"
    );
    if stats.depth_limited > 0 || stats.cycles_broken > 0 {
        tracing::warn!(
            depth_limited = stats.depth_limited,
            cycles_broken = stats.cycles_broken,
            "some anonymous entities were omitted"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["ifc2json", "house.ifc"]);
        assert_eq!(args.output_path(), PathBuf::from("house.json"));

        let options = args.options();
        assert!(options.include_geometry);
        assert_eq!(options.id_strategy, IdStrategy::Random);
        assert_eq!(options.max_depth, ifcjson::DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_args_flags() {
        let args = Args::parse_from([
            "ifc2json",
            "house.ifc",
            "-o",
            "-",
            "--obj",
            "geo.obj",
            "--no-geometry",
            "--stable-ids",
            "--max-depth",
            "12",
        ]);
        let options = args.options();
        assert!(!options.include_geometry);
        assert_eq!(options.sidecar, Some(PathBuf::from("geo.obj")));
        assert_eq!(options.id_strategy, IdStrategy::Derived);
        assert_eq!(options.max_depth, 12);
        assert_eq!(args.output_path(), PathBuf::from("-"));
    }
}
