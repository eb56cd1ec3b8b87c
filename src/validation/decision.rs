//! Collision decision table.
//!
//! When siblings share an identifier (case-insensitively), every entry after
//! the first is decided on its own:
//!
//! | same resource as a kept entry | a discriminator makes it unique | decision          |
//! |-------------------------------|---------------------------------|-------------------|
//! | yes                           | -                               | `DropIdentical`   |
//! | no                            | yes                             | `Rename`          |
//! | no                            | no                              | `DropUnresolved`  |
//!
//! Discriminators are tried in order: the entry's source file stem, then its
//! resource kind. Each is only used when it differs from the first entry's,
//! so a rename always says something about where the resource came from.

use std::collections::BTreeSet;
use std::path::Path;

use crate::identifier::Identifier;
use crate::namespace::{Group, Member, ResourceKind};

/// A sibling in a group: either a member or a nested group.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Member(Member),
    Group(Group),
}

impl Entry {
    pub fn ident(&self) -> &Identifier {
        match self {
            Entry::Member(m) => &m.ident,
            Entry::Group(g) => &g.ident,
        }
    }

    pub fn raw_name(&self) -> &str {
        match self {
            Entry::Member(m) => &m.raw_name,
            Entry::Group(g) => &g.raw_name,
        }
    }

    pub fn origin(&self) -> Option<ResourceKind> {
        match self {
            Entry::Member(m) => Some(m.origin),
            Entry::Group(g) => g.origin,
        }
    }

    pub fn source(&self) -> Option<&Path> {
        match self {
            Entry::Member(m) => m.source.as_deref(),
            Entry::Group(g) => g.source.as_deref(),
        }
    }

    pub fn set_ident(&mut self, ident: Identifier) {
        match self {
            Entry::Member(m) => m.ident = ident,
            Entry::Group(g) => g.ident = ident,
        }
    }

    /// Whether both entries describe the same underlying resource.
    pub fn same_resource(&self, other: &Entry) -> bool {
        match (self, other) {
            (Entry::Member(a), Entry::Member(b)) => a.same_resource(b),
            (Entry::Group(a), Entry::Group(b)) => same_content(a, b),
            _ => false,
        }
    }

    /// Stem of the source file, e.g. `Dark` for `Resources/Dark.xcassets`.
    fn source_stem(&self) -> Option<&str> {
        self.source()?.file_stem()?.to_str()
    }
}

fn same_content(a: &Group, b: &Group) -> bool {
    a.members.len() == b.members.len()
        && a.groups.len() == b.groups.len()
        && a
            .members
            .iter()
            .zip(&b.members)
            .all(|(x, y)| x.ident == y.ident && x.same_resource(y))
        && a
            .groups
            .iter()
            .zip(&b.groups)
            .all(|(x, y)| x.ident == y.ident && same_content(x, y))
}

/// What happens to a colliding entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Same resource as an entry already kept; dropped without a warning.
    DropIdentical,
    /// Kept under a new, unique identifier.
    Rename(Identifier),
    /// Nothing made it unique; dropped with a warning.
    DropUnresolved,
}

/// Decide the fate of `candidate`, which collides with `first`.
///
/// `kept` holds the entries of this collision set kept so far; `taken` holds
/// the collision keys of every identifier already claimed in the group.
pub fn decide(
    first: &Entry,
    candidate: &Entry,
    kept: &[&Entry],
    taken: &BTreeSet<String>,
) -> Decision {
    if kept.iter().any(|k| k.same_resource(candidate)) {
        return Decision::DropIdentical;
    }

    for discriminator in discriminators(first, candidate) {
        let renamed = candidate.ident().with_suffix(&discriminator);
        if !taken.contains(&renamed.collision_key()) {
            return Decision::Rename(renamed);
        }
    }

    Decision::DropUnresolved
}

fn discriminators(first: &Entry, candidate: &Entry) -> Vec<String> {
    let mut out = Vec::new();

    if let Some(stem) = candidate.source_stem() {
        if first.source_stem() != Some(stem) {
            out.push(stem.to_string());
        }
    }
    if let Some(kind) = candidate.origin() {
        if first.origin() != Some(kind) {
            out.push(kind.name().to_string());
        }
    }

    out
}
