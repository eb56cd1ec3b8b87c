//! Leaf entries of the namespace tree.

use std::path::PathBuf;

use crate::identifier::{sanitize, Identifier};

use super::kind::ResourceKind;
use super::AccessLevel;

/// Semantic type of a member, one per [`Payload`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Image,
    Color,
    Font,
    String,
    File,
    Nib,
    Storyboard,
    ReuseIdentifier,
    Value,
    Identifier,
}

impl MemberKind {
    /// Resource type the generated accessor is declared as.
    pub fn swift_type(&self) -> &'static str {
        match self {
            MemberKind::Image => "ImageResource",
            MemberKind::Color => "ColorResource",
            MemberKind::Font => "FontResource",
            MemberKind::String => "StringResource",
            MemberKind::File => "FileResource",
            MemberKind::Nib => "NibResource",
            MemberKind::Storyboard => "StoryboardResource",
            MemberKind::ReuseIdentifier => "ReuseIdentifier",
            MemberKind::Value => "Value",
            MemberKind::Identifier => "String",
        }
    }

    /// Whether the accessor needs the resource runtime types.
    pub fn needs_resource_runtime(&self) -> bool {
        !matches!(self, MemberKind::Value | MemberKind::Identifier)
    }

    /// Whether the accessor needs UIKit.
    pub fn needs_uikit(&self) -> bool {
        matches!(
            self,
            MemberKind::Image
                | MemberKind::Color
                | MemberKind::Font
                | MemberKind::Nib
                | MemberKind::Storyboard
                | MemberKind::ReuseIdentifier
        )
    }
}

/// Argument type of a format specifier in a localized string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatArg {
    Object,
    Int,
    UInt,
    Double,
    Character,
    CString,
    Pointer,
}

impl FormatArg {
    /// Swift parameter type for this argument.
    pub fn swift_type(&self) -> &'static str {
        match self {
            FormatArg::Object => "String",
            FormatArg::Int => "Int",
            FormatArg::UInt => "UInt",
            FormatArg::Double => "Double",
            FormatArg::Character => "Character",
            FormatArg::CString => "UnsafePointer<CChar>",
            FormatArg::Pointer => "UnsafeRawPointer",
        }
    }
}

/// A localized string key.
#[derive(Debug, Clone, PartialEq)]
pub struct StringPayload {
    pub table: String,
    pub key: String,
    pub locales: Vec<String>,
    /// Format arguments in positional order.
    pub args: Vec<FormatArg>,
    /// Value in the development language, for doc comments.
    pub value: Option<String>,
    pub comment: Option<String>,
}

/// A scalar property list value.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    String(String),
    Bool(bool),
    Integer(i64),
    Real(f64),
}

/// What the emitter needs to produce an accessor.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Image {
        name: String,
    },
    Color {
        name: String,
    },
    Font {
        font_name: String,
    },
    String(StringPayload),
    File {
        name: String,
        extension: Option<String>,
    },
    Nib {
        name: String,
        root_view: Option<String>,
    },
    Storyboard {
        name: String,
        initial_view_controller: Option<String>,
    },
    ReuseIdentifier {
        identifier: String,
        class: String,
    },
    Value(ScalarValue),
    Identifier {
        value: String,
    },
}

impl Payload {
    /// The semantic type of this payload.
    pub fn kind(&self) -> MemberKind {
        match self {
            Payload::Image { .. } => MemberKind::Image,
            Payload::Color { .. } => MemberKind::Color,
            Payload::Font { .. } => MemberKind::Font,
            Payload::String(_) => MemberKind::String,
            Payload::File { .. } => MemberKind::File,
            Payload::Nib { .. } => MemberKind::Nib,
            Payload::Storyboard { .. } => MemberKind::Storyboard,
            Payload::ReuseIdentifier { .. } => MemberKind::ReuseIdentifier,
            Payload::Value(_) => MemberKind::Value,
            Payload::Identifier { .. } => MemberKind::Identifier,
        }
    }
}

/// A runtime check the internal tree performs for an external member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Check {
    ImageExists(String),
    ColorExists(String),
    FontRegistered(String),
    ViewControllerExists { storyboard: String, identifier: String },
}

/// Internal data mirrored at the same path as its external member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InternalRecord {
    pub checks: Vec<Check>,
}

impl InternalRecord {
    /// Build a record from checks, sorted and deduplicated.
    pub fn new(checks: impl IntoIterator<Item = Check>) -> Self {
        let mut checks: Vec<Check> = checks.into_iter().collect();
        checks.sort();
        checks.dedup();
        Self { checks }
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

/// A leaf accessor in the namespace tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub ident: Identifier,
    /// The resource name the identifier was derived from.
    pub raw_name: String,
    pub origin: ResourceKind,
    pub access: AccessLevel,
    pub payload: Payload,
    pub source: Option<PathBuf>,
    /// Validation data for the internal tree, if this member needs any.
    pub internal: Option<InternalRecord>,
}

impl Member {
    /// Create a member named after `raw_name`.
    pub fn new(raw_name: impl Into<String>, origin: ResourceKind, payload: Payload) -> Self {
        let raw_name = raw_name.into();
        Self {
            ident: sanitize(&raw_name),
            raw_name,
            origin,
            access: AccessLevel::default(),
            payload,
            source: None,
            internal: None,
        }
    }

    /// Set the source location.
    pub fn with_source(mut self, source: Option<PathBuf>) -> Self {
        self.source = source;
        self
    }

    /// Attach internal validation checks. Empty check lists attach nothing.
    pub fn with_checks(mut self, checks: impl IntoIterator<Item = Check>) -> Self {
        let record = InternalRecord::new(checks);
        self.internal = (!record.is_empty()).then_some(record);
        self
    }

    /// The semantic type of this member.
    pub fn kind(&self) -> MemberKind {
        self.payload.kind()
    }

    /// Whether this member describes the same resource as `other`.
    pub fn same_resource(&self, other: &Member) -> bool {
        self.payload == other.payload && self.internal == other.internal
    }
}
