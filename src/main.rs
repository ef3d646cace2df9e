use std::path::Path;

use clap::Parser;
use iconset::cli::{self, Cli, Commands};
use iconset::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Completions(args) => cli::completions(args, &mut std::io::stdout()),
        command => run(command, cli.config.as_deref(), &printer)?,
    }

    Ok(())
}

fn run(command: Commands, config: Option<&Path>, printer: &Printer) -> iconset::Result<()> {
    let config = cli::load_config(config)?;

    match command {
        Commands::Generate(args) => cli::generate::run(args, &config, printer),
        Commands::Validate(args) => cli::validate::run(args, &config, printer),
        Commands::Flatten(args) => cli::flatten::run(args, &config, printer),
        Commands::StripAlpha(args) => cli::strip::run(args, &config, printer),
        Commands::Inspect(args) => cli::inspect::run(args, printer),
        Commands::Completions(args) => {
            cli::completions(args, &mut std::io::stdout());
            Ok(())
        }
    }
}
