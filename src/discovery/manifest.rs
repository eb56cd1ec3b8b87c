//! Project manifest (resgen.yaml) parsing.
//!
//! The manifest defines where resource record files live, where generated
//! code goes, and how it is generated. Every field is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ResgenError, Result};
use crate::namespace::{AccessLevel, ResourceKind};
use crate::pipeline::Settings;

/// Project manifest loaded from resgen.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Directories to scan for resource record files.
    /// Defaults to the project root if empty.
    pub sources: Vec<String>,

    /// Patterns to exclude from discovery.
    pub excludes: Vec<String>,

    /// Generated source file.
    pub output: PathBuf,

    /// Generated UI test source file; not written when unset.
    pub uitest_output: Option<PathBuf>,

    /// Access level of the generated declarations.
    pub access_level: AccessLevel,

    /// Name of the root namespace.
    pub name_prefix: String,

    /// Locale used for format arguments and doc comments.
    pub development_language: String,

    /// Enabled generators, in output order. All kinds when empty.
    pub generators: Vec<ResourceKind>,

    /// Look resources up in the bundle with this identifier.
    pub bundle_identifier: Option<String>,

    /// Also emit the `@objcMembers` interop surface.
    pub legacy_interop: bool,

    /// Append the unused image report to the generated file.
    pub unused_images_report: bool,
}

fn default_output() -> PathBuf {
    PathBuf::from("R.generated.swift")
}

impl Default for Manifest {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            sources: vec![],
            excludes: vec![],
            output: default_output(),
            uitest_output: None,
            access_level: settings.access_level,
            name_prefix: settings.name_prefix,
            development_language: settings.development_language,
            generators: vec![],
            bundle_identifier: None,
            legacy_interop: settings.legacy_interop,
            unused_images_report: settings.unused_images_report,
        }
    }
}

impl Manifest {
    /// Load manifest from a resgen.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ResgenError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let manifest: Manifest = serde_yaml::from_str(content).map_err(|e| ResgenError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check resgen.yaml syntax".to_string()),
        })?;
        manifest.check()?;
        Ok(manifest)
    }

    fn check(&self) -> Result<()> {
        if self.name_prefix.trim().is_empty() {
            return Err(ResgenError::Config {
                message: "name_prefix must not be empty".to_string(),
                help: Some("Remove the key to use the default prefix `R`".to_string()),
            });
        }
        if self.development_language.trim().is_empty() {
            return Err(ResgenError::Config {
                message: "development_language must not be empty".to_string(),
                help: Some("Use a locale identifier such as `en`".to_string()),
            });
        }
        Ok(())
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excludes
            .iter()
            .any(|pattern| Self::matches_pattern(&path_str, pattern))
    }

    /// Simple glob pattern matching.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if let Some(suffix) = pattern.strip_prefix("**/") {
            // **/dir/* matches anything inside dir anywhere in the path
            if let Some(dir) = suffix.strip_suffix("/*") {
                return path.contains(&format!("/{}/", dir)) || path.starts_with(&format!("{}/", dir));
            }
            return path.contains(suffix);
        }

        if let Some(suffix) = pattern.strip_prefix('*') {
            if !pattern.contains('/') {
                return path.ends_with(suffix);
            }
        }

        if let Some(prefix) = pattern.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", prefix))
                || path.contains(&format!("/{}/", prefix));
        }

        path.contains(pattern)
    }

    /// Get effective source paths, defaulting to current directory.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }

    /// Pipeline settings described by this manifest.
    pub fn settings(&self) -> Settings {
        let generators = if self.generators.is_empty() {
            ResourceKind::ALL.to_vec()
        } else {
            self.generators.clone()
        };
        Settings {
            access_level: self.access_level,
            name_prefix: self.name_prefix.clone(),
            development_language: self.development_language.clone(),
            generators,
            bundle_identifier: self.bundle_identifier.clone(),
            legacy_interop: self.legacy_interop,
            unused_images_report: self.unused_images_report,
        }
    }

    /// Starter manifest written by `resgen init`.
    pub fn template() -> String {
        let kinds: Vec<&str> = ResourceKind::ALL.iter().map(|k| k.name()).collect();
        format!(
            "# resgen project configuration\n\
             sources:\n  - .\n\
             excludes:\n  - \"**/build/*\"\n\
             output: R.generated.swift\n\
             # uitest_output: R.uitest.generated.swift\n\
             access_level: internal\n\
             name_prefix: R\n\
             development_language: en\n\
             generators: [{}]\n\
             # bundle_identifier: com.example.app\n\
             legacy_interop: false\n\
             unused_images_report: true\n",
            kinds.join(", ")
        )
    }
}
