use std::path::PathBuf;

use clap::Args;

use crate::config::Config;
use crate::error::{IconError, Result};
use crate::output::{display_path, plural, Printer};
use crate::transform::{strip_alpha, strip_alpha_dir, StripOutcome};

/// Rewrite PNG icons without an alpha channel
#[derive(Args, Debug)]
pub struct StripArgs {
    /// PNG file or directory of PNGs (default: the catalog directory)
    pub path: Option<PathBuf>,
}

pub fn run(args: StripArgs, config: &Config, printer: &Printer) -> Result<()> {
    let path = args.path.unwrap_or_else(|| config.dir.clone());

    if path.is_file() {
        match strip_alpha(&path)? {
            StripOutcome::Converted => printer.status("Stripped", &display_path(&path)),
            StripOutcome::Unchanged => {
                printer.info("Skipping", &format!("{} (already RGB)", display_path(&path)))
            }
        }
        return Ok(());
    }

    printer.status("Scanning", &display_path(&path));
    let report = strip_alpha_dir(&path)?;

    for file in &report.converted {
        printer.status("Stripped", &display_path(file));
    }
    for file in &report.unchanged {
        printer.info("Skipping", &format!("{} (already RGB)", display_path(file)));
    }
    for (file, error) in &report.failures {
        printer.error("Failed", &format!("{}: {}", display_path(file), error));
    }

    if report.failures.is_empty() {
        printer.success(
            "Finished",
            &format!(
                "{} converted",
                plural(report.converted.len(), "file", "files")
            ),
        );
        Ok(())
    } else {
        Err(IconError::Io {
            path,
            message: format!(
                "{} of {} could not be converted",
                report.failures.len(),
                plural(report.total(), "file", "files")
            ),
        })
    }
}
