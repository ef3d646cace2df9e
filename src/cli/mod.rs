pub mod flatten;
pub mod generate;
pub mod inspect;
pub mod strip;
pub mod validate;

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::config::Config;
use crate::error::Result;

/// iconset - Generate and validate app icon sets from one master image
#[derive(Parser, Debug)]
#[command(name = "iconset")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Project config file (default: ./iconset.yaml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resample the master image into every file the manifest lists
    Generate(generate::GenerateArgs),

    /// Check that every manifest entry has a non-empty file on disk
    Validate(validate::ValidateArgs),

    /// Flatten a transparent image onto a solid background
    Flatten(flatten::FlattenArgs),

    /// Rewrite PNG icons without an alpha channel
    StripAlpha(strip::StripArgs),

    /// Print pixel statistics for images
    Inspect(inspect::InspectArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Generate shell completions
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Write a completion script for `args.shell` to `out`.
pub fn completions(args: CompletionsArgs, out: &mut dyn Write) {
    clap_complete::generate(args.shell, &mut Cli::command(), "iconset", out);
}

/// Load the config named on the command line, or discover one in the
/// current directory.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Config::discover(Path::new(".")),
    }
}

/// Catalog directory and manifest path after applying CLI overrides.
pub(crate) fn catalog_paths(
    config: &Config,
    dir: Option<PathBuf>,
    manifest: Option<PathBuf>,
) -> (PathBuf, PathBuf) {
    let dir = dir.unwrap_or_else(|| config.dir.clone());
    let manifest = manifest.unwrap_or_else(|| config.manifest_path(&dir));
    (dir, manifest)
}
