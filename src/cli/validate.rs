//! Validate command implementation.
//!
//! Runs generators, aggregation and validation, then prints the collision
//! reports and diagnostics. Nothing is written.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::discover;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::pipeline::build_namespace;
use crate::validation::validate;

/// Check resources for naming conflicts without writing anything
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Also print every collision report, including silent ones
    #[arg(long)]
    pub reports: bool,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let discovery = discover(&args.path)?;
    let settings = discovery.manifest.settings();

    printer.status(
        "Validating",
        &format!(
            "{} ({} found)",
            display_path(&discovery.root),
            plural(discovery.scan.total(), "record file", "record files")
        ),
    );

    let resources = discovery.load()?;
    let namespace = build_namespace(&resources, &settings);
    let validation = validate(&namespace)?;

    if args.reports {
        for report in &validation.reports {
            println!("{}", report);
        }
    }

    printer.diagnostics(&validation.diagnostics);
    printer.info(
        "Checked",
        &plural(
            validation.namespace.root.member_count(),
            "accessor",
            "accessors",
        ),
    );

    Ok(())
}
