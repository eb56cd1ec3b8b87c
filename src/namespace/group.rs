//! Namespace nodes.

use std::path::PathBuf;

use crate::identifier::{sanitize, sanitize_type_name, Identifier};

use super::kind::ResourceKind;
use super::member::Member;
use super::{AccessLevel, Tier};

/// A standalone internal record with no external counterpart.
///
/// These are the only internal entries exempt from mirroring the external
/// tree, see [`SupportRecord::EXEMPT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupportRecord {
    /// The bundle all resources are looked up in.
    HostingBundle { bundle_identifier: Option<String> },
    /// The locale used when formatting localized strings.
    ApplicationLocale,
}

impl SupportRecord {
    /// Names of all support records.
    pub const EXEMPT: [&'static str; 2] = ["hostingBundle", "applicationLocale"];

    pub fn name(&self) -> &'static str {
        match self {
            SupportRecord::HostingBundle { .. } => "hostingBundle",
            SupportRecord::ApplicationLocale => "applicationLocale",
        }
    }
}

/// Kind of sibling added to a group, recorded in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Member,
    Group,
}

/// A borrowed member or nested group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sibling<'a> {
    Member(&'a Member),
    Group(&'a Group),
}

/// An owned member or nested group.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Member(Member),
    Group(Group),
}

/// A named, ordered collection of members and nested groups.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub ident: Identifier,
    pub raw_name: String,
    /// Generator that created this group; `None` for the root.
    pub origin: Option<ResourceKind>,
    pub access: AccessLevel,
    pub source: Option<PathBuf>,
    pub members: Vec<Member>,
    pub groups: Vec<Group>,
    pub support: Vec<SupportRecord>,
    /// One slot per member or group, in the order they were added.
    pub order: Vec<Slot>,
}

impl Group {
    /// Create an empty group named after `raw_name`.
    pub fn new(raw_name: impl Into<String>) -> Self {
        let raw_name = raw_name.into();
        Self {
            ident: sanitize(&raw_name),
            raw_name,
            origin: None,
            access: AccessLevel::default(),
            source: None,
            members: Vec::new(),
            groups: Vec::new(),
            support: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Create a namespace root, named like a type.
    pub fn root(raw_name: impl Into<String>) -> Self {
        let raw_name = raw_name.into();
        Self {
            ident: sanitize_type_name(&raw_name),
            ..Self::new(raw_name)
        }
    }

    /// Set the generator that owns this group.
    pub fn with_origin(mut self, origin: ResourceKind) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Set the source location.
    pub fn with_source(mut self, source: Option<PathBuf>) -> Self {
        self.source = source;
        self
    }

    /// Add a member.
    pub fn push_member(&mut self, member: Member) -> &mut Self {
        self.members.push(member);
        self.order.push(Slot::Member);
        self
    }

    /// Add a nested group.
    pub fn push_group(&mut self, group: Group) -> &mut Self {
        self.groups.push(group);
        self.order.push(Slot::Group);
        self
    }

    /// Members and nested groups in the order they were added.
    ///
    /// Siblings pushed into `members` or `groups` directly come last.
    pub fn siblings(&self) -> Vec<Sibling<'_>> {
        let mut members = self.members.iter().map(Sibling::Member);
        let mut groups = self.groups.iter().map(Sibling::Group);
        let mut out: Vec<Sibling<'_>> = self
            .order
            .iter()
            .filter_map(|slot| match slot {
                Slot::Member => members.next(),
                Slot::Group => groups.next(),
            })
            .collect();
        out.extend(members);
        out.extend(groups);
        out
    }

    /// Copy of this group without members, groups or their order.
    pub fn emptied(&self) -> Group {
        Group {
            ident: self.ident.clone(),
            raw_name: self.raw_name.clone(),
            origin: self.origin,
            access: self.access,
            source: self.source.clone(),
            members: Vec::new(),
            groups: Vec::new(),
            support: self.support.clone(),
            order: Vec::new(),
        }
    }

    /// Replace the children, recording `siblings` as their order.
    pub fn set_children(&mut self, siblings: Vec<Child>) {
        self.members.clear();
        self.groups.clear();
        self.order.clear();
        for child in siblings {
            match child {
                Child::Member(member) => {
                    self.push_member(member);
                }
                Child::Group(group) => {
                    self.push_group(group);
                }
            }
        }
    }

    /// Walk down a path of raw names, creating missing groups on the way.
    ///
    /// Created groups inherit this group's origin.
    pub fn descend(&mut self, path: &[String]) -> &mut Group {
        let Some((first, rest)) = path.split_first() else {
            return self;
        };

        let idx = match self.groups.iter().position(|g| &g.raw_name == first) {
            Some(idx) => idx,
            None => {
                let mut group = Group::new(first.clone());
                group.origin = self.origin;
                self.push_group(group);
                self.groups.len() - 1
            }
        };
        self.groups[idx].descend(rest)
    }

    /// Find a nested group by identifier path.
    pub fn find_group(&self, path: &[&str]) -> Option<&Group> {
        let Some((first, rest)) = path.split_first() else {
            return Some(self);
        };
        self.groups
            .iter()
            .find(|g| g.ident.as_str() == *first)
            .and_then(|g| g.find_group(rest))
    }

    /// Find a member by identifier path; the last element names the member.
    pub fn find_member(&self, path: &[&str]) -> Option<&Member> {
        let (name, parents) = path.split_last()?;
        self.find_group(parents)?
            .members
            .iter()
            .find(|m| m.ident.as_str() == *name)
    }

    /// Number of members in this group and all nested groups.
    pub fn member_count(&self) -> usize {
        self.members.len() + self.groups.iter().map(Group::member_count).sum::<usize>()
    }

    /// Whether this subtree has anything to declare in `tier`.
    pub fn has_tier(&self, tier: Tier) -> bool {
        let own = match tier {
            Tier::External => !self.members.is_empty(),
            Tier::Internal => {
                !self.support.is_empty() || self.members.iter().any(|m| m.internal.is_some())
            }
        };
        own || self.groups.iter().any(|g| g.has_tier(tier))
    }

    /// Copy of this subtree keeping only members matching `keep`.
    ///
    /// Nested groups left without members are pruned; support records are
    /// dropped.
    pub fn filtered(&self, keep: &impl Fn(&Member) -> bool) -> Group {
        let children = self
            .siblings()
            .into_iter()
            .filter_map(|sibling| match sibling {
                Sibling::Member(m) => keep(m).then(|| Child::Member(m.clone())),
                Sibling::Group(g) => {
                    let g = g.filtered(keep);
                    (g.member_count() > 0).then_some(Child::Group(g))
                }
            })
            .collect();
        let mut out = self.emptied();
        out.support.clear();
        out.set_children(children);
        out
    }

    /// Set the access level of this group and everything below it.
    pub fn set_access(&mut self, access: AccessLevel) {
        self.access = access;
        for member in &mut self.members {
            member.access = access;
        }
        for group in &mut self.groups {
            group.set_access(access);
        }
    }

    /// Identifier paths of every entry declared in `tier`, in tree order.
    ///
    /// Paths start with this group's identifier.
    pub fn paths(&self, tier: Tier) -> Vec<Vec<String>> {
        let mut out = Vec::new();
        self.collect_paths(tier, &mut Vec::new(), &mut out);
        out
    }

    fn collect_paths(&self, tier: Tier, prefix: &mut Vec<String>, out: &mut Vec<Vec<String>>) {
        if !self.has_tier(tier) {
            return;
        }
        prefix.push(self.ident.as_str().to_string());
        out.push(prefix.clone());

        if tier == Tier::Internal {
            for record in &self.support {
                let mut path = prefix.clone();
                path.push(record.name().to_string());
                out.push(path);
            }
        }
        for member in &self.members {
            if tier == Tier::Internal && member.internal.is_none() {
                continue;
            }
            let mut path = prefix.clone();
            path.push(member.ident.as_str().to_string());
            out.push(path);
        }
        for group in &self.groups {
            group.collect_paths(tier, prefix, out);
        }

        prefix.pop();
    }
}
