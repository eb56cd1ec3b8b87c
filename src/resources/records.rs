//! Record types for each resource kind.
//!
//! These are the already-parsed shapes handed over by the asset catalog,
//! font, localization, layout and property-list readers.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// An image set from an asset catalog or a loose image file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub name: String,
    /// Enclosing asset catalog folders that provide a namespace.
    #[serde(default)]
    pub namespace: Vec<String>,
    #[serde(default)]
    pub source: Option<PathBuf>,
}

impl ImageRecord {
    /// Lookup name inside the catalog, namespace folders included.
    pub fn catalog_name(&self) -> String {
        catalog_name(&self.namespace, &self.name)
    }
}

/// A named color from an asset catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRecord {
    pub name: String,
    #[serde(default)]
    pub namespace: Vec<String>,
    #[serde(default)]
    pub source: Option<PathBuf>,
}

impl ColorRecord {
    /// Lookup name inside the catalog, namespace folders included.
    pub fn catalog_name(&self) -> String {
        catalog_name(&self.namespace, &self.name)
    }
}

fn catalog_name(namespace: &[String], name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", namespace.join("/"), name)
    }
}

/// A bundled font, identified by its PostScript name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontRecord {
    pub name: String,
    #[serde(default)]
    pub source: Option<PathBuf>,
}

/// A localized string table (`Localizable.strings` and friends).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringTable {
    pub name: String,
    #[serde(default)]
    pub source: Option<PathBuf>,
    #[serde(default)]
    pub entries: Vec<StringEntry>,
}

/// One key of a string table with its per-locale values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringEntry {
    pub key: String,
    /// Locale identifier → localized value.
    #[serde(default)]
    pub values: BTreeMap<String, String>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl StringEntry {
    /// Locales this key is translated into, sorted.
    pub fn locales(&self) -> Vec<&str> {
        self.values.keys().map(|s| s.as_str()).collect()
    }

    /// Value in `language`, falling back to the first available locale.
    pub fn value_for(&self, language: &str) -> Option<&str> {
        self.values
            .get(language)
            .or_else(|| self.values.values().next())
            .map(|s| s.as_str())
    }
}

/// Any other bundled file, by file name including extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub name: String,
    #[serde(default)]
    pub source: Option<PathBuf>,
}

impl FileRecord {
    /// File name without its extension.
    pub fn stem(&self) -> &str {
        match self.name.rfind('.') {
            Some(0) | None => &self.name,
            Some(idx) => &self.name[..idx],
        }
    }

    /// Extension without the dot, if there is one.
    pub fn extension(&self) -> Option<&str> {
        match self.name.rfind('.') {
            Some(0) | None => None,
            Some(idx) => Some(&self.name[idx + 1..]),
        }
    }
}

/// A cell or view registered for reuse in a layout file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Reusable {
    pub identifier: String,
    /// Swift class of the reusable view, e.g. `UITableViewCell`.
    pub class: String,
}

/// A storyboard scene with a storyboard identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewController {
    pub identifier: String,
    pub class: String,
}

/// Contents shared by nibs and storyboards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutContents {
    pub reusables: Vec<Reusable>,
    /// Image names referenced by the layout.
    pub used_images: Vec<String>,
    /// Color names referenced by the layout.
    pub used_colors: Vec<String>,
    pub accessibility_identifiers: Vec<String>,
}

/// A compiled interface file (`.xib`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NibRecord {
    pub name: String,
    #[serde(default)]
    pub source: Option<PathBuf>,
    /// Class of the first root view, if it is not a plain `UIView`.
    #[serde(default)]
    pub root_view: Option<String>,
    #[serde(flatten)]
    pub layout: LayoutContents,
}

/// A storyboard file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryboardRecord {
    pub name: String,
    #[serde(default)]
    pub source: Option<PathBuf>,
    /// Class of the initial view controller.
    #[serde(default)]
    pub initial_view_controller: Option<String>,
    #[serde(default)]
    pub view_controllers: Vec<ViewController>,
    #[serde(flatten)]
    pub layout: LayoutContents,
}

/// A property list such as `Info.plist`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyList {
    pub name: String,
    #[serde(default)]
    pub source: Option<PathBuf>,
    #[serde(default)]
    pub entries: BTreeMap<String, PlistValue>,
}

/// A property list value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlistValue {
    Bool(bool),
    Integer(i64),
    Real(f64),
    String(String),
    Array(Vec<PlistValue>),
    Dict(BTreeMap<String, PlistValue>),
}
