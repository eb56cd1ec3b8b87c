//! Normalized resource descriptions.
//!
//! A [`ResourceSet`] is everything the external parsers found in a project,
//! already validated and normalized. Generators read from it; nothing in the
//! core mutates it.

mod records;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{ResgenError, Result};

pub use records::{
    ColorRecord, FileRecord, FontRecord, ImageRecord, LayoutContents, NibRecord, PlistValue,
    PropertyList, Reusable, StoryboardRecord, StringEntry, StringTable, ViewController,
};

/// All resources known to a generation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceSet {
    pub images: Vec<ImageRecord>,
    pub colors: Vec<ColorRecord>,
    pub fonts: Vec<FontRecord>,
    pub strings: Vec<StringTable>,
    pub files: Vec<FileRecord>,
    pub nibs: Vec<NibRecord>,
    pub storyboards: Vec<StoryboardRecord>,
    pub property_lists: Vec<PropertyList>,
}

impl ResourceSet {
    /// Create an empty resource set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a resource set from YAML.
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| ResgenError::Parse {
            message: format!("Invalid resource description: {}", e),
            help: Some("Resource files hold lists like `images:`, `fonts:`, `strings:`".to_string()),
        })
    }

    /// Parse a resource set from JSON.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| ResgenError::Parse {
            message: format!("Invalid resource description: {}", e),
            help: Some("Resource files hold lists like `images`, `fonts`, `strings`".to_string()),
        })
    }

    /// Append all records of `other`.
    pub fn merge(&mut self, other: ResourceSet) {
        self.images.extend(other.images);
        self.colors.extend(other.colors);
        self.fonts.extend(other.fonts);
        self.strings.extend(other.strings);
        self.files.extend(other.files);
        self.nibs.extend(other.nibs);
        self.storyboards.extend(other.storyboards);
        self.property_lists.extend(other.property_lists);
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.images.len()
            + self.colors.len()
            + self.fonts.len()
            + self.strings.len()
            + self.files.len()
            + self.nibs.len()
            + self.storyboards.len()
            + self.property_lists.len()
    }

    /// Check if there are no records at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Layout contents of every nib and storyboard, nibs first.
    pub fn layouts(&self) -> impl Iterator<Item = (&str, &LayoutContents)> {
        self.nibs
            .iter()
            .map(|n| (n.name.as_str(), &n.layout))
            .chain(self.storyboards.iter().map(|s| (s.name.as_str(), &s.layout)))
    }

    /// Every declared image, by catalog name.
    pub fn declared_image_names(&self) -> BTreeSet<String> {
        self.images.iter().map(ImageRecord::catalog_name).collect()
    }

    /// Every image name referenced from a layout file.
    pub fn used_image_names(&self) -> BTreeSet<String> {
        self.layouts()
            .flat_map(|(_, layout)| layout.used_images.iter().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
images:
  - name: icon
  - name: Icon
    source: Assets.xcassets
fonts:
  - name: Roboto-Bold
nibs:
  - name: ProfileCell
    used_images: [avatar]
    reusables:
      - identifier: profile
        class: ProfileCell
"#;
        let set = ResourceSet::from_yaml(yaml).unwrap();
        assert_eq!(set.images.len(), 2);
        assert_eq!(set.fonts[0].name, "Roboto-Bold");
        assert_eq!(set.nibs[0].layout.used_images, vec!["avatar"]);
        assert_eq!(set.nibs[0].layout.reusables[0].class, "ProfileCell");
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{"colors": [{"name": "accent", "namespace": ["brand"]}]}"#;
        let set = ResourceSet::from_json(json).unwrap();
        assert_eq!(set.colors[0].namespace, vec!["brand"]);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(ResourceSet::from_yaml("images: 3").is_err());
    }

    #[test]
    fn test_merge() {
        let mut a = ResourceSet::from_yaml("images:\n  - name: a\n").unwrap();
        let b = ResourceSet::from_yaml("images:\n  - name: b\nfonts:\n  - name: f\n").unwrap();
        a.merge(b);
        assert_eq!(a.images.len(), 2);
        assert_eq!(a.fonts.len(), 1);
    }

    #[test]
    fn test_image_name_sets() {
        let yaml = r#"
images: [{name: a}, {name: b}, {name: c, namespace: [icons]}]
nibs:
  - name: One
    used_images: [a]
storyboards:
  - name: Main
    used_images: [b, missing]
"#;
        let set = ResourceSet::from_yaml(yaml).unwrap();
        let declared: Vec<_> = set.declared_image_names().into_iter().collect();
        assert_eq!(declared, vec!["a", "b", "icons/c"]);
        let used: Vec<_> = set.used_image_names().into_iter().collect();
        assert_eq!(used, vec!["a", "b", "missing"]);
    }
}
