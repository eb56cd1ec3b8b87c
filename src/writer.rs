//! Change-aware output writing.
//!
//! Generated files are only rewritten when their text changes, so build
//! systems watching modification times do not recompile for nothing.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{ResgenError, Result};

/// Whether writing `text` to `path` would change it.
pub fn is_stale(path: &Path, text: &str) -> Result<bool> {
    match fs::read_to_string(path) {
        Ok(existing) => Ok(existing != text),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(true),
        Err(e) => Err(ResgenError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read generated file: {}", e),
        }),
    }
}

/// Write `text` to `path` unless it already holds exactly that text.
///
/// Creates missing parent directories. Returns whether the file was written.
pub fn write_if_changed(path: &Path, text: &str) -> Result<bool> {
    if !is_stale(path, text)? {
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ResgenError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    fs::write(path, text).map_err(|e| ResgenError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write generated file: {}", e),
    })?;
    Ok(true)
}
