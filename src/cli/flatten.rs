use std::path::PathBuf;

use clap::Args;

use crate::colour::Colour;
use crate::config::Config;
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::transform::flatten_alpha;

/// Flatten a transparent image onto a solid background
#[derive(Args, Debug)]
pub struct FlattenArgs {
    /// Image to flatten
    pub input: PathBuf,

    /// Output file (.jpg/.jpeg for JPEG, otherwise by extension)
    pub output: PathBuf,

    /// Background colour as #RRGGBB (default: `background` from iconset.yaml)
    #[arg(long)]
    pub background: Option<Colour>,
}

pub fn run(args: FlattenArgs, config: &Config, printer: &Printer) -> Result<()> {
    let background = args.background.unwrap_or(config.background);

    flatten_alpha(&args.input, &args.output, background)?;

    printer.success(
        "Flattened",
        &format!(
            "{} -> {} on {}",
            display_path(&args.input),
            display_path(&args.output),
            background
        ),
    );

    Ok(())
}
