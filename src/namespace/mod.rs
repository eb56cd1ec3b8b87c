//! The namespace tree.
//!
//! Generated accessors are organised in one tree of [`Group`]s and
//! [`Member`]s. The tree carries both tiers at once:
//!
//! - the **external** tier is every member, the public-facing accessors
//! - the **internal** tier is the validation data attached to members
//!   ([`InternalRecord`]) plus the standalone [`SupportRecord`]s at the root
//!
//! Because internal data hangs off the member it belongs to, the internal tier
//! always mirrors the external one: renaming or dropping a member renames or
//! drops its internal record with it.

mod group;
mod kind;
mod member;

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::identifier::Identifier;

pub use group::{Child, Group, Sibling, Slot, SupportRecord};
pub use kind::ResourceKind;
pub use member::{
    Check, FormatArg, InternalRecord, Member, MemberKind, Payload, ScalarValue, StringPayload,
};

/// Which of the two parallel trees an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    External,
    Internal,
}

/// Access level of generated declarations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Public,
    #[default]
    Internal,
}

impl AccessLevel {
    /// Declaration prefix, including the trailing space when non-empty.
    pub fn prefix(&self) -> &'static str {
        match self {
            AccessLevel::Public => "public ",
            AccessLevel::Internal => "",
        }
    }

    /// Parse a config or command line value.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "public" => Some(AccessLevel::Public),
            "internal" => Some(AccessLevel::Internal),
            _ => None,
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessLevel::Public => write!(f, "public"),
            AccessLevel::Internal => write!(f, "internal"),
        }
    }
}

/// The unmerged output of one generator.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub kind: ResourceKind,
    /// Top-level group, named after the kind's namespace.
    pub group: Group,
}

impl Fragment {
    /// Create an empty fragment for `kind`.
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            group: Group::new(kind.namespace_name()).with_origin(kind),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.group.member_count() == 0
    }
}

/// A merged namespace tree with its configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Namespace {
    /// Root group; one child group per fragment, in generator order.
    pub root: Group,
    pub access: AccessLevel,
}

impl Namespace {
    /// Name of the external root type.
    pub fn external_name(&self) -> &Identifier {
        &self.root.ident
    }

    /// Name of the internal root type: the external name with a `_` prefix.
    pub fn internal_name(&self) -> String {
        format!("_{}", self.root.ident.as_str())
    }

    /// Identifier paths declared in `tier`.
    pub fn paths(&self, tier: Tier) -> Vec<Vec<String>> {
        self.root.paths(tier)
    }

    /// Internal paths with no external counterpart, excluding the root and
    /// support records.
    ///
    /// Always empty for a well-formed tree.
    pub fn orphan_internal_paths(&self) -> Vec<Vec<String>> {
        let external: BTreeSet<Vec<String>> = self.paths(Tier::External).into_iter().collect();
        self.paths(Tier::Internal)
            .into_iter()
            .filter(|path| path.len() > 1 && !external.contains(path))
            .filter(|path| {
                !(path.len() == 2 && SupportRecord::EXEMPT.contains(&path[1].as_str()))
            })
            .collect()
    }
}
