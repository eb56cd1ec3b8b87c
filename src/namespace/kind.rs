//! Resource kinds.
//!
//! Each kind has exactly one generator and one top-level namespace, so a
//! consumer can always tell which generator produced an accessor by its path.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of resource a generator handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Image,
    Color,
    Font,
    String,
    File,
    Nib,
    Storyboard,
    ReuseIdentifier,
    Info,
    Id,
}

impl ResourceKind {
    /// Every kind, in canonical generator order.
    pub const ALL: [ResourceKind; 10] = [
        ResourceKind::Image,
        ResourceKind::Color,
        ResourceKind::Font,
        ResourceKind::String,
        ResourceKind::File,
        ResourceKind::Nib,
        ResourceKind::Storyboard,
        ResourceKind::ReuseIdentifier,
        ResourceKind::Info,
        ResourceKind::Id,
    ];

    /// Get the config name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            ResourceKind::Image => "image",
            ResourceKind::Color => "color",
            ResourceKind::Font => "font",
            ResourceKind::String => "string",
            ResourceKind::File => "file",
            ResourceKind::Nib => "nib",
            ResourceKind::Storyboard => "storyboard",
            ResourceKind::ReuseIdentifier => "reuse_identifier",
            ResourceKind::Info => "info",
            ResourceKind::Id => "id",
        }
    }

    /// Name of the namespace this kind's accessors live in.
    pub fn namespace_name(&self) -> &'static str {
        match self {
            ResourceKind::ReuseIdentifier => "reuseIdentifier",
            other => other.name(),
        }
    }

    /// Plural noun used in generated doc comments.
    pub fn plural(&self) -> &'static str {
        match self {
            ResourceKind::Image => "images",
            ResourceKind::Color => "colors",
            ResourceKind::Font => "fonts",
            ResourceKind::String => "localization tables",
            ResourceKind::File => "files",
            ResourceKind::Nib => "nibs",
            ResourceKind::Storyboard => "storyboards",
            ResourceKind::ReuseIdentifier => "reuse identifiers",
            ResourceKind::Info => "property lists",
            ResourceKind::Id => "accessibility identifiers",
        }
    }

    /// Whether this kind produces identifier-type members, the only ones
    /// exposed to UI tests.
    pub fn is_identifier_kind(&self) -> bool {
        matches!(self, ResourceKind::Id)
    }

    /// Parse a config name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for kind in ResourceKind::ALL {
            assert_eq!(ResourceKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(ResourceKind::from_name("sound"), None);
    }

    #[test]
    fn test_namespace_names() {
        assert_eq!(ResourceKind::Image.namespace_name(), "image");
        assert_eq!(ResourceKind::ReuseIdentifier.namespace_name(), "reuseIdentifier");
    }

    #[test]
    fn test_serde_names() {
        let kind: ResourceKind = serde_yaml::from_str("reuse_identifier").unwrap();
        assert_eq!(kind, ResourceKind::ReuseIdentifier);
    }

    #[test]
    fn test_only_id_is_identifier_kind() {
        let identifier_kinds: Vec<_> = ResourceKind::ALL
            .into_iter()
            .filter(|k| k.is_identifier_kind())
            .collect();
        assert_eq!(identifier_kinds, vec![ResourceKind::Id]);
    }
}
