//! Generate command implementation.
//!
//! Resamples the master image into every icon the manifest lists.

use std::path::PathBuf;

use clap::Args;

use crate::config::{Config, CONFIG_FILENAME};
use crate::error::{IconError, Result};
use crate::generate::{FailurePolicy, Generator, MasterImage, Outcome, ResampleFilter};
use crate::manifest::Manifest;
use crate::output::{display_path, plural, Printer};

/// Resample the master image into every file the manifest lists
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Master image (default: `master` from iconset.yaml)
    pub master: Option<PathBuf>,

    /// Asset catalog directory receiving the icons
    #[arg(long, short)]
    pub dir: Option<PathBuf>,

    /// Manifest path (default: <dir>/Contents.json)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// What to do when one entry fails
    #[arg(long, value_enum)]
    pub policy: Option<FailurePolicy>,

    /// Resampling filter
    #[arg(long, value_enum)]
    pub filter: Option<ResampleFilter>,
}

pub fn run(args: GenerateArgs, config: &Config, printer: &Printer) -> Result<()> {
    let (dir, manifest_path) = super::catalog_paths(config, args.dir, args.manifest);
    let master_path = args
        .master
        .or_else(|| config.master.clone())
        .ok_or_else(|| IconError::Config {
            path: PathBuf::from(CONFIG_FILENAME),
            message: "no master image given; pass one or set `master`".to_string(),
        })?;

    let mut options = config.generate_options();
    if let Some(policy) = args.policy {
        options.policy = policy;
    }
    if let Some(filter) = args.filter {
        options.filter = filter;
    }

    let manifest = Manifest::load(&manifest_path)?;
    printer.info(
        "Loaded",
        &format!(
            "{} from {}",
            plural(manifest.len(), "entry", "entries"),
            display_path(&manifest_path)
        ),
    );
    if manifest.unassigned > 0 {
        printer.warning(
            "Skipping",
            &format!("{} with no filename", plural(manifest.unassigned, "slot", "slots")),
        );
    }

    let master = MasterImage::open(&master_path)?;
    if !master.is_square() {
        printer.warning(
            "Stretching",
            &format!(
                "{} is {}x{}; icons are square",
                display_path(&master_path),
                master.width(),
                master.height()
            ),
        );
    }

    let generator = Generator::new(options);
    let report = generator.generate_with(&master, &manifest, &dir, |outcome| match outcome {
        Outcome::Written(generated) => printer.status(
            "Generated",
            &format!(
                "{} ({}x{})",
                generated.filename, generated.pixels, generated.pixels
            ),
        ),
        Outcome::Failed(failure) => {
            printer.error("Failed", &format!("{}: {}", failure.filename, failure.error))
        }
    })?;

    if report.is_success() {
        printer.success(
            "Finished",
            &format!(
                "{} in {}",
                plural(report.written.len(), "icon", "icons"),
                display_path(&dir)
            ),
        );
        Ok(())
    } else {
        Err(IconError::GenerationFailed {
            failed: report.failures.len(),
            total: report.total(),
        })
    }
}
