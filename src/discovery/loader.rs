//! Record loader - parses discovered files into one resource set.
//!
//! Files are merged in the order the scanner returns them, which is sorted
//! by path, so the same project always yields the same set.

use std::fs;
use std::path::Path;

use crate::error::{ResgenError, Result};
use crate::resources::ResourceSet;

use super::scanner::{detect_format, RecordFormat, ScanResult};

/// Load and merge every scanned record file.
///
/// Every file is attempted; failures are reported together.
pub fn load_resources(scan: &ScanResult) -> Result<ResourceSet> {
    let mut resources = ResourceSet::new();
    let mut errors: Vec<String> = Vec::new();

    for path in &scan.files {
        match load_file(path) {
            Ok(set) => resources.merge(set),
            Err(e) => errors.push(format!("{}: {}", path.display(), e)),
        }
    }

    if !errors.is_empty() {
        return Err(ResgenError::Parse {
            message: format!(
                "Failed to load {} file(s):\n  {}",
                errors.len(),
                errors.join("\n  ")
            ),
            help: Some("Fix the errors above and try again".to_string()),
        });
    }

    Ok(resources)
}

/// Load a single record file.
pub fn load_file(path: &Path) -> Result<ResourceSet> {
    let content = fs::read_to_string(path).map_err(|e| ResgenError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    match detect_format(path) {
        Some(RecordFormat::Json) => ResourceSet::from_json(&content),
        // Anything else explicitly handed over is read as YAML.
        Some(RecordFormat::Yaml) | None => {
            if content.trim().is_empty() {
                Ok(ResourceSet::new())
            } else {
                ResourceSet::from_yaml(&content)
            }
        }
    }
}
