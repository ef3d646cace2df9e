use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::transform::{inspect, ImageStats};

/// Print pixel statistics for images
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Images to inspect
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Print statistics as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: InspectArgs, printer: &Printer) -> Result<()> {
    for file in &args.files {
        let stats = inspect(file)?;

        if args.json {
            match serde_json::to_string(&stats) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("Failed to serialize stats: {}", e),
            }
        } else {
            print_stats(&display_path(file), &stats, printer);
        }
    }

    Ok(())
}

fn print_stats(name: &str, stats: &ImageStats, printer: &Printer) {
    printer.status(
        "Inspecting",
        &format!("{} ({}x{} {})", name, stats.width, stats.height, stats.color),
    );
    printer.info("Extrema", &format!("{:?}", stats.extrema));
    printer.info("Center", &format!("{:?}", stats.center));
    match &stats.solid {
        Some(colour) => printer.warning("Solid", &format!("every pixel is {:?}", colour)),
        None => printer.info("Varied", "content detected"),
    }
}
