use std::path::PathBuf;

use clap::Args;

use crate::config::Config;
use crate::error::{IconError, Result};
use crate::manifest::Manifest;
use crate::output::{display_path, plural, Printer};
use crate::validation::{validate, ValidationMode, ValidationResult};

/// Check that every manifest entry has a non-empty file on disk
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Asset catalog directory to check
    #[arg(long, short)]
    pub dir: Option<PathBuf>,

    /// Manifest path (default: <dir>/Contents.json)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Also decode each file and check its dimensions and alpha channel
    #[arg(long, overrides_with = "no_strict")]
    pub strict: bool,

    /// Presence checks only, even when the config enables strict mode
    #[arg(long, overrides_with = "strict")]
    pub no_strict: bool,

    /// Print the result as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ValidateArgs, config: &Config, printer: &Printer) -> Result<()> {
    let mode = mode(&args, config);
    let (dir, manifest_path) = super::catalog_paths(config, args.dir, args.manifest);

    let manifest = Manifest::load(&manifest_path)?;
    printer.status(
        "Checking",
        &format!(
            "{} in {}",
            plural(manifest.len(), "entry", "entries"),
            display_path(&manifest_path)
        ),
    );

    let result = validate(&manifest, &dir, mode);

    if args.json {
        print_json(&result);
    }
    report(&result, printer);

    if result.success() {
        Ok(())
    } else {
        Err(IconError::ValidationFailed {
            failed: result.failure_count(),
            total: result.checked(),
        })
    }
}

fn mode(args: &ValidateArgs, config: &Config) -> ValidationMode {
    if args.strict {
        ValidationMode::Strict
    } else if args.no_strict {
        ValidationMode::Presence
    } else {
        config.validation_mode()
    }
}

/// Print every failure and a closing summary to stderr.
pub fn report(result: &ValidationResult, printer: &Printer) {
    for failure in result.iter() {
        printer.error(
            failure.reason.label(),
            &format!("{} {}", failure.filename, printer.dim(&format!("({})", failure.reason))),
        );
    }

    if result.success() {
        printer.success("Finished", &summary(result));
    } else {
        printer.error("Failed", &summary(result));
    }
}

fn summary(result: &ValidationResult) -> String {
    let entries = plural(result.checked(), "entry", "entries");
    if result.success() {
        format!("all {} present", entries)
    } else {
        format!("{} of {} missing or invalid", result.failure_count(), entries)
    }
}

fn print_json(result: &ValidationResult) {
    let value = serde_json::json!({
        "success": result.success(),
        "checked": result.checked(),
        "failures": result.failures(),
    });
    match serde_json::to_string_pretty(&value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize result: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use image::RgbImage;
    use std::fs;
    use tempfile::tempdir;

    fn args(dir: PathBuf) -> ValidateArgs {
        ValidateArgs {
            dir: Some(dir),
            manifest: None,
            strict: false,
            no_strict: false,
            json: false,
        }
    }

    #[test]
    fn test_validate_command_passes() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("Contents.json"),
            r#"{ "images": [ { "filename": "a.png", "size": "20x20", "scale": "1x" } ] }"#,
        )
        .unwrap();
        RgbImage::new(20, 20).save(dir.path().join("a.png")).unwrap();

        run(args(dir.path().to_path_buf()), &Config::default(), &Printer::plain()).unwrap();
    }

    #[test]
    fn test_validate_command_fails_on_missing() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("Contents.json"),
            r#"{ "images": [
                { "filename": "a.png", "size": "20x20", "scale": "1x" },
                { "filename": "b.png", "size": "20x20", "scale": "2x" }
            ] }"#,
        )
        .unwrap();
        fs::write(dir.path().join("a.png"), b"").unwrap();

        let err = run(args(dir.path().to_path_buf()), &Config::default(), &Printer::plain())
            .unwrap_err();

        assert!(matches!(
            err,
            IconError::ValidationFailed {
                failed: 2,
                total: 2
            }
        ));
    }

    #[test]
    fn test_validate_command_missing_manifest() {
        let dir = tempdir().unwrap();

        let err = run(args(dir.path().to_path_buf()), &Config::default(), &Printer::plain())
            .unwrap_err();
        assert!(matches!(err, IconError::ManifestLoad { .. }));
    }

    #[test]
    fn test_validate_command_strict_from_config() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("Contents.json"),
            r#"{ "images": [ { "filename": "a.png", "size": "20x20", "scale": "2x" } ] }"#,
        )
        .unwrap();
        RgbImage::new(20, 20).save(dir.path().join("a.png")).unwrap();

        let lenient = Config::default();
        run(args(dir.path().to_path_buf()), &lenient, &Printer::plain()).unwrap();

        let strict = Config {
            strict: true,
            ..Default::default()
        };
        assert!(run(args(dir.path().to_path_buf()), &strict, &Printer::plain()).is_err());
    }

    #[test]
    fn test_no_strict_overrides_config() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("Contents.json"),
            r#"{ "images": [ { "filename": "a.png", "size": "20x20", "scale": "2x" } ] }"#,
        )
        .unwrap();
        RgbImage::new(20, 20).save(dir.path().join("a.png")).unwrap();

        let strict = Config {
            strict: true,
            ..Default::default()
        };
        let lenient = ValidateArgs {
            no_strict: true,
            ..args(dir.path().to_path_buf())
        };
        run(lenient, &strict, &Printer::plain()).unwrap();
    }

    #[test]
    fn test_strict_flags_last_one_wins() {
        let parse = |flags: &[&str]| {
            let cli = Cli::parse_from(["iconset", "validate"].iter().chain(flags));
            match cli.command {
                Commands::Validate(args) => mode(&args, &Config::default()),
                other => panic!("expected validate, got {:?}", other),
            }
        };

        assert_eq!(parse(&[]), ValidationMode::Presence);
        assert_eq!(parse(&["--strict"]), ValidationMode::Strict);
        assert_eq!(parse(&["--strict", "--no-strict"]), ValidationMode::Presence);
        assert_eq!(parse(&["--no-strict", "--strict"]), ValidationMode::Strict);
    }

    #[test]
    fn test_summary_lines() {
        let dir = tempdir().unwrap();
        let manifest = Manifest::parse(
            r#"{ "images": [
                { "filename": "a.png", "size": "20x20", "scale": "1x" },
                { "filename": "b.png", "size": "20x20", "scale": "2x" }
            ] }"#,
        )
        .unwrap();

        let failing = validate(&manifest, dir.path(), ValidationMode::Presence);
        insta::assert_snapshot!(summary(&failing), @"2 of 2 entries missing or invalid");

        RgbImage::new(20, 20).save(dir.path().join("a.png")).unwrap();
        RgbImage::new(40, 40).save(dir.path().join("b.png")).unwrap();
        let passing = validate(&manifest, dir.path(), ValidationMode::Presence);
        insta::assert_snapshot!(summary(&passing), @"all 2 entries present");
    }
}
