//! File system scanner for discovering resource record files.
//!
//! Recursively scans directories for `*.resources.yaml`, `*.resources.yml`
//! and `*.resources.json` files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// Serialization format of a record file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Yaml,
    Json,
}

/// Result of scanning for record files.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Discovered record files, sorted by path.
    pub files: Vec<PathBuf>,
}

impl ScanResult {
    /// Create a new empty scan result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of discovered files.
    pub fn total(&self) -> usize {
        self.files.len()
    }

    /// Check if no files were discovered.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Merge another scan result into this one, keeping paths sorted and
    /// unique.
    pub fn merge(&mut self, other: ScanResult) {
        self.files.extend(other.files);
        self.files.sort();
        self.files.dedup();
    }
}

/// Scan a directory for record files.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        if manifest.is_excluded(relative) {
            continue;
        }

        if detect_format(path).is_some() {
            result.files.push(path.to_path_buf());
        }
    }

    result.files.sort();
    result
}

/// Scan multiple source paths.
pub fn scan_sources(sources: &[String], base_path: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    for source in sources {
        let source_path = if Path::new(source).is_absolute() {
            PathBuf::from(source)
        } else {
            base_path.join(source)
        };

        result.merge(scan_directory(&source_path, manifest));
    }

    result
}

/// Detect the record format from a file name.
pub fn detect_format(path: &Path) -> Option<RecordFormat> {
    let filename = path.file_name()?.to_str()?;

    if filename.ends_with(".resources.yaml") || filename.ends_with(".resources.yml") {
        Some(RecordFormat::Yaml)
    } else if filename.ends_with(".resources.json") {
        Some(RecordFormat::Json)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_detect_format() {
        assert_eq!(
            detect_format(Path::new("app.resources.yaml")),
            Some(RecordFormat::Yaml)
        );
        assert_eq!(
            detect_format(Path::new("app.resources.yml")),
            Some(RecordFormat::Yaml)
        );
        assert_eq!(
            detect_format(Path::new("/abs/path/layouts.resources.json")),
            Some(RecordFormat::Json)
        );
        assert_eq!(detect_format(Path::new("resgen.yaml")), None);
        assert_eq!(detect_format(Path::new("resources.yaml")), None);
        assert_eq!(detect_format(Path::new("notes.txt")), None);
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempdir().unwrap();
        let result = scan_directory(dir.path(), &Manifest::default());

        assert!(result.is_empty());
        assert_eq!(result.total(), 0);
    }

    #[test]
    fn test_scan_recursive_and_sorted() {
        let dir = tempdir().unwrap();

        fs::create_dir_all(dir.path().join("b/nested")).unwrap();
        fs::create_dir_all(dir.path().join("a")).unwrap();
        fs::write(dir.path().join("b/nested/fonts.resources.yaml"), "").unwrap();
        fs::write(dir.path().join("a/images.resources.json"), "{}").unwrap();
        fs::write(dir.path().join("readme.md"), "# Readme").unwrap();

        let result = scan_directory(dir.path(), &Manifest::default());

        assert_eq!(result.total(), 2);
        assert!(result.files[0].ends_with("a/images.resources.json"));
        assert!(result.files[1].ends_with("b/nested/fonts.resources.yaml"));
    }

    #[test]
    fn test_scan_with_excludes() {
        let dir = tempdir().unwrap();

        fs::create_dir_all(dir.path().join("build")).unwrap();
        fs::write(dir.path().join("app.resources.yaml"), "").unwrap();
        fs::write(dir.path().join("build/copy.resources.yaml"), "").unwrap();

        let manifest = Manifest {
            excludes: vec!["**/build/*".to_string()],
            ..Default::default()
        };
        let result = scan_directory(dir.path(), &manifest);

        assert_eq!(result.total(), 1);
        assert!(result.files[0].ends_with("app.resources.yaml"));
    }

    #[test]
    fn test_scan_result_merge_dedups() {
        let mut a = ScanResult::new();
        a.files.push(PathBuf::from("b.resources.yaml"));

        let mut b = ScanResult::new();
        b.files.push(PathBuf::from("a.resources.yaml"));
        b.files.push(PathBuf::from("b.resources.yaml"));

        a.merge(b);

        assert_eq!(
            a.files,
            vec![
                PathBuf::from("a.resources.yaml"),
                PathBuf::from("b.resources.yaml")
            ]
        );
    }

    #[test]
    fn test_scan_nonexistent_directory() {
        let result = scan_directory(Path::new("/nonexistent/path"), &Manifest::default());
        assert!(result.is_empty());
    }
}
