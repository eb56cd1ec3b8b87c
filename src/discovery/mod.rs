//! File discovery and resource loading for resgen projects.
//!
//! This module finds the resource record files of a project, either by
//! scanning the whole project directory or the `sources` listed in a
//! `resgen.yaml` manifest, and merges them into one [`ResourceSet`].
//!
//! # Example
//!
//! ```ignore
//! use resgen::discovery::discover;
//!
//! let result = discover("./MyApp")?;
//! println!("Found {} record files", result.scan.total());
//!
//! let resources = result.load()?;
//! ```

mod loader;
mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::resources::ResourceSet;

pub use loader::{load_file, load_resources};
pub use manifest::Manifest;
pub use scanner::{detect_format, scan_directory, scan_sources, RecordFormat, ScanResult};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "resgen.yaml";

/// Result of discovering record files in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no resgen.yaml was found).
    pub manifest: Manifest,

    /// Whether a resgen.yaml manifest was found.
    pub has_manifest: bool,

    /// Discovered record files.
    pub scan: ScanResult,
}

impl DiscoveryResult {
    /// Load and merge all discovered record files.
    pub fn load(&self) -> Result<ResourceSet> {
        load_resources(&self.scan)
    }

    /// Resolve a manifest path against the project root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

/// Discover record files in a project directory.
///
/// Looks for a `resgen.yaml` manifest in the root directory. If found, uses
/// the manifest's source paths and excludes. Otherwise, scans the entire
/// directory.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    let sources = manifest.effective_sources();
    let scan = scan_sources(&sources, &root, &manifest);

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        scan,
    })
}

/// Discover record files from specific paths (no manifest lookup).
///
/// Directories are scanned; files are taken as given, whatever their name.
pub fn discover_paths(paths: &[PathBuf]) -> Result<DiscoveryResult> {
    let manifest = Manifest::default();
    let mut scan = ScanResult::new();

    for path in paths {
        if path.is_dir() {
            scan.merge(scan_directory(path, &manifest));
        } else if path.is_file() {
            scan.merge(ScanResult {
                files: vec![path.clone()],
            });
        }
    }

    let root = paths
        .first()
        .and_then(|p| if p.is_dir() { Some(p.as_path()) } else { p.parent() })
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest: false,
        scan,
    })
}
