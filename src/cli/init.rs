//! Init command implementation.
//!
//! Writes a starter `resgen.yaml`, listing the directories that already
//! contain resource record files as sources.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{discover, Manifest, MANIFEST_FILENAME};
use crate::error::{ResgenError, Result};
use crate::output::{display_path, plural, Printer};

/// Initialize a resgen project by generating a resgen.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing resgen.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(ResgenError::Config {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    printer.status("Scanning", &display_path(&args.path));
    // Scan without the manifest being replaced.
    let scan = discover(&args.path).map(|d| (d.root, d.scan));
    let (root, scan) = match scan {
        Ok(found) => found,
        Err(_) if args.force => {
            let root = args.path.clone();
            let scan = crate::discovery::scan_directory(&root, &Manifest::default());
            (root, scan)
        }
        Err(e) => return Err(e),
    };

    let mut source_dirs = BTreeSet::new();
    for file in &scan.files {
        if let Some(parent) = file.parent() {
            let relative = parent.strip_prefix(&root).unwrap_or(parent);
            let dir = if relative == Path::new("") {
                ".".to_string()
            } else {
                format!("{}/", relative.display())
            };
            source_dirs.insert(dir);
        }
    }

    let mut yaml = Manifest::template();
    if !source_dirs.is_empty() && !(source_dirs.len() == 1 && source_dirs.contains(".")) {
        let listed: String = source_dirs
            .iter()
            .map(|dir| format!("  - \"{}\"\n", dir))
            .collect();
        yaml = yaml.replacen("sources:\n  - .\n", &format!("sources:\n{}", listed), 1);
    }

    fs::write(&manifest_path, &yaml).map_err(|e| ResgenError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    if !source_dirs.is_empty() {
        let dirs: Vec<&str> = source_dirs.iter().map(|s| s.as_str()).collect();
        printer.info("Discovered", &dirs.join(", "));
    }

    printer.status(
        "Created",
        &format!(
            "{} ({} found)",
            MANIFEST_FILENAME,
            plural(scan.total(), "record file", "record files")
        ),
    );

    Ok(())
}
