//! Generate command implementation.
//!
//! Discovers resource record files, runs the pipeline and writes the
//! generated sources when their text changed.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover, DiscoveryResult};
use crate::error::{ResgenError, Result};
use crate::output::{display_path, plural, FileStatus, Printer};
use crate::pipeline::{generate, Settings};
use crate::writer::{is_stale, write_if_changed};

use super::parse_access_level;

/// Generate accessor source files
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Generated source file (overrides resgen.yaml)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Generated UI test source file (overrides resgen.yaml)
    #[arg(long)]
    pub uitest_output: Option<PathBuf>,

    /// Access level of generated declarations: public or internal
    #[arg(long, value_parser = ["public", "internal"])]
    pub access_level: Option<String>,

    /// Also emit the @objcMembers interop surface
    #[arg(long)]
    pub legacy_interop: bool,

    /// Report stale outputs instead of writing; fails when any is stale
    #[arg(long, conflicts_with = "stdout")]
    pub check: bool,

    /// Print the full generated source to stdout instead of writing
    #[arg(long)]
    pub stdout: bool,
}

/// Settings from the manifest with command line overrides applied.
fn settings(args: &GenerateArgs, discovery: &DiscoveryResult) -> Result<Settings> {
    let mut settings = discovery.manifest.settings();
    if let Some(level) = &args.access_level {
        settings.access_level = parse_access_level(level)?;
    }
    if args.legacy_interop {
        settings.legacy_interop = true;
    }
    Ok(settings)
}

/// Output files to produce, with their text.
fn targets(
    args: &GenerateArgs,
    discovery: &DiscoveryResult,
    full: String,
    uitest: String,
) -> Vec<(PathBuf, String)> {
    let manifest = &discovery.manifest;
    let output = args.output.as_ref().unwrap_or(&manifest.output);
    let mut targets = vec![(discovery.resolve(output), full)];

    if let Some(path) = args.uitest_output.as_ref().or(manifest.uitest_output.as_ref()) {
        targets.push((discovery.resolve(path), uitest));
    }
    targets
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let discovery = discover(&args.path)?;
    let settings = settings(&args, &discovery)?;

    printer.status(
        "Generating",
        &format!(
            "{} ({} found)",
            display_path(&discovery.root),
            plural(discovery.scan.total(), "record file", "record files")
        ),
    );

    let resources = discovery.load()?;
    let generated = generate(&resources, &settings)?;

    if !generated.diagnostics.is_empty() {
        printer.diagnostics(&generated.diagnostics);
    }

    if args.stdout {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(generated.full.as_bytes())?;
        return Ok(());
    }

    let member_count = generated.member_count();
    let warning_count = generated.diagnostics.warning_count();
    let targets = targets(&args, &discovery, generated.full, generated.uitest);

    if args.check {
        let mut stale = 0;
        for (path, text) in &targets {
            if is_stale(path, text)? {
                printer.file(FileStatus::Stale, path);
                stale += 1;
            } else {
                printer.file(FileStatus::Fresh, path);
            }
        }
        if stale > 0 {
            return Err(ResgenError::Stale { count: stale });
        }
        return Ok(());
    }

    for (path, text) in &targets {
        let status = if write_if_changed(path, text)? {
            FileStatus::Written
        } else {
            FileStatus::Unchanged
        };
        printer.file(status, path);
    }

    printer.finished(member_count, warning_count);

    Ok(())
}
