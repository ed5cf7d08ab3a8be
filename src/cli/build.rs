//! Build command implementation.
//!
//! Resolves the manifest, applies flag overrides, and runs the pipeline.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::Result;
use crate::manifest::{Manifest, MANIFEST_FILENAME};
use crate::output::{display_path, Printer};
use crate::pipeline::{self, BuildConfig};

/// Generate every sprite and write both output roots
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Manifest to read (default: ./huffer.yaml if present)
    #[arg(long, short)]
    pub manifest: Option<PathBuf>,

    /// Archive output root
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Game-asset output root
    #[arg(long, short)]
    pub assets: Option<PathBuf>,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let config = resolve_config(&args, Path::new("."), printer)?;
    pipeline::run(&config, printer)?;
    Ok(())
}

/// Load the manifest named by `--manifest`, or discover one in `dir`, then
/// apply the path overrides.
pub fn resolve_config(args: &BuildArgs, dir: &Path, printer: &Printer) -> Result<BuildConfig> {
    let manifest = match &args.manifest {
        Some(path) => {
            let manifest = Manifest::load(path)?;
            printer.info("Manifest", &display_path(path));
            manifest
        }
        None => {
            let (manifest, found) = Manifest::discover(dir)?;
            if found {
                printer.info("Manifest", MANIFEST_FILENAME);
            }
            manifest
        }
    };

    let mut config = BuildConfig::from_manifest(&manifest);
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    if let Some(assets) = &args.assets {
        config.assets = assets.clone();
    }

    Ok(config)
}
