//! Namespace validation.
//!
//! Walks the aggregated tree top-down and makes every sibling identifier
//! unique, following the table in [`decision`]. The input tree is never
//! modified: [`validate`] builds a new one, together with a
//! [`CollisionReport`] for every conflict it resolved and the warnings
//! describing them.
//!
//! Below the root, members and groups are ordered by identifier so repeated
//! runs over the same resources produce the same tree. The root keeps the
//! order the generators were enabled in.

mod decision;
mod report;
mod warning;

use std::collections::{BTreeMap, BTreeSet};

pub use decision::{decide, Decision, Entry};
pub use report::{
    CollisionReport, Resolution, CODE_EMPTY, CODE_INVALID_TYPE, CODE_RENAMED, CODE_RESERVED,
    CODE_UNRESOLVED,
};
pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::error::{ResgenError, Result};
use crate::identifier::{is_valid_identifier, is_valid_type_name, Escape, Identifier};
use crate::namespace::{Child, Group, Member, Namespace, Payload, Sibling};

/// Class used for reusable views whose declared class is not a Swift type.
pub const FALLBACK_VIEW_CLASS: &str = "UIView";

/// A validated namespace.
#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    /// The renamed and pruned tree. Nothing downstream renames again.
    pub namespace: Namespace,
    pub reports: Vec<CollisionReport>,
    pub diagnostics: ValidationResult,
}

/// Reports and diagnostics gathered while walking the tree.
#[derive(Debug, Default)]
struct Findings {
    reports: Vec<CollisionReport>,
    diagnostics: ValidationResult,
}

impl Findings {
    fn record(mut self, report: CollisionReport) -> Self {
        for diagnostic in report.diagnostics() {
            self.diagnostics.push(diagnostic);
        }
        self.reports.push(report);
        self
    }
}

/// Resolve identifier collisions in `namespace`.
///
/// Fails only when a generator broke the fragment contract; naming problems
/// are returned as warnings.
pub fn validate(namespace: &Namespace) -> Result<Validation> {
    let path = namespace.external_name().as_str().to_string();
    check_identifier(namespace.external_name(), &path)?;
    let (root, findings) = resolve_group(&namespace.root, &path, true, Findings::default())?;

    let validated = Namespace {
        root,
        access: namespace.access,
    };

    if let Some(orphan) = validated.orphan_internal_paths().into_iter().next() {
        return Err(ResgenError::InternalConsistency {
            invariant: "internal entry without an external counterpart".to_string(),
            path: orphan.join("."),
        });
    }

    Ok(Validation {
        namespace: validated,
        reports: findings.reports,
        diagnostics: findings.diagnostics,
    })
}

fn resolve_group(
    group: &Group,
    path: &str,
    is_root: bool,
    findings: Findings,
) -> Result<(Group, Findings)> {
    check_contract(group, path)?;

    let entries: Vec<Entry> = group
        .siblings()
        .into_iter()
        .map(|sibling| match sibling {
            Sibling::Member(member) => Entry::Member(member.clone()),
            Sibling::Group(child) => Entry::Group(child.clone()),
        })
        .collect();

    let mut findings = escape_reports(&entries, path)
        .into_iter()
        .fold(findings, Findings::record);

    let (entries, reports) = resolve_level(entries, path);
    findings = reports.into_iter().fold(findings, Findings::record);

    // Children are resolved after their parent level is final.
    let mut children = Vec::with_capacity(entries.len());
    for entry in entries {
        check_identifier(entry.ident(), path)?;
        match entry {
            Entry::Member(member) => {
                let (member, warning) = checked_class(member, path);
                if let Some(warning) = warning {
                    findings.diagnostics.push(warning);
                }
                children.push(Child::Member(member));
            }
            Entry::Group(child) => {
                let child_path = format!("{}.{}", path, child.ident.as_str());
                let (resolved, next) = resolve_group(&child, &child_path, false, findings)?;
                findings = next;
                children.push(Child::Group(resolved));
            }
        }
    }

    if !is_root {
        children.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
    }

    let mut resolved = group.emptied();
    resolved.set_children(children);
    Ok((resolved, findings))
}

fn sort_key(child: &Child) -> (String, &str) {
    let ident = match child {
        Child::Member(member) => &member.ident,
        Child::Group(group) => &group.ident,
    };
    (ident.collision_key(), ident.as_str())
}

/// Replace a reusable view class that is not a Swift type name.
fn checked_class(mut member: Member, path: &str) -> (Member, Option<Diagnostic>) {
    let Payload::ReuseIdentifier { class, .. } = &mut member.payload else {
        return (member, None);
    };
    if is_valid_type_name(class) {
        return (member, None);
    }

    let warning = Diagnostic::warning(
        CODE_INVALID_TYPE,
        format!(
            "{}: '{}' is not a valid class name for '{}'; using {}",
            path, class, member.raw_name, FALLBACK_VIEW_CLASS
        ),
    )
    .with_path(path)
    .with_help("Set the custom class of the reusable view to a Swift type name");
    *class = FALLBACK_VIEW_CLASS.to_string();
    (member, Some(warning))
}

/// Every surviving identifier must match the grammar the emitter relies on.
fn check_identifier(ident: &Identifier, path: &str) -> Result<()> {
    if is_valid_identifier(ident.as_str()) {
        return Ok(());
    }
    Err(ResgenError::InternalConsistency {
        invariant: format!("'{}' is not a valid identifier", ident.as_str()),
        path: path.to_string(),
    })
}

/// Members sharing a raw name must agree on what they are.
fn check_contract(group: &Group, path: &str) -> Result<()> {
    let mut seen = BTreeMap::new();
    for member in &group.members {
        let kind = member.kind();
        match seen.get(member.raw_name.as_str()) {
            Some(previous) if *previous != kind => {
                return Err(ResgenError::InternalConsistency {
                    invariant: format!(
                        "'{}' is both a {:?} and a {:?} member",
                        member.raw_name, previous, kind
                    ),
                    path: path.to_string(),
                });
            }
            Some(_) => {}
            None => {
                seen.insert(member.raw_name.as_str(), kind);
            }
        }
    }
    Ok(())
}

fn escape_reports(entries: &[Entry], path: &str) -> Vec<CollisionReport> {
    entries
        .iter()
        .filter_map(|entry| {
            let escape = entry.ident().escape()?;
            if escape == Escape::LeadingDigit {
                return None;
            }
            Some(CollisionReport {
                path: path.to_string(),
                proposed: vec![entry.raw_name().to_string()],
                resolutions: vec![Resolution::Escaped {
                    raw: entry.raw_name().to_string(),
                    ident: entry.ident().to_string(),
                    escape,
                }],
            })
        })
        .collect()
}

/// Resolve one level. Surviving entries keep their input order.
fn resolve_level(entries: Vec<Entry>, path: &str) -> (Vec<Entry>, Vec<CollisionReport>) {
    let mut buckets: Vec<Vec<usize>> = Vec::new();
    let mut bucket_of: BTreeMap<String, usize> = BTreeMap::new();
    for (idx, entry) in entries.iter().enumerate() {
        let key = entry.ident().collision_key();
        match bucket_of.get(&key) {
            Some(&bucket) => buckets[bucket].push(idx),
            None => {
                bucket_of.insert(key, buckets.len());
                buckets.push(vec![idx]);
            }
        }
    }

    let mut taken: BTreeSet<String> = bucket_of.into_keys().collect();
    let mut renames: Vec<(usize, Identifier)> = Vec::new();
    let mut dropped: BTreeSet<usize> = BTreeSet::new();
    let mut reports = Vec::new();

    for bucket in buckets.iter().filter(|b| b.len() > 1) {
        let first = &entries[bucket[0]];
        let mut kept: Vec<&Entry> = vec![first];
        let mut resolutions = vec![Resolution::Kept {
            raw: first.raw_name().to_string(),
            ident: first.ident().to_string(),
        }];

        for &idx in &bucket[1..] {
            let candidate = &entries[idx];
            let raw = candidate.raw_name().to_string();
            match decide(first, candidate, &kept, &taken) {
                Decision::DropIdentical => {
                    dropped.insert(idx);
                    resolutions.push(Resolution::DroppedIdentical { raw });
                }
                Decision::Rename(ident) => {
                    taken.insert(ident.collision_key());
                    resolutions.push(Resolution::Renamed {
                        raw,
                        from: candidate.ident().to_string(),
                        to: ident.to_string(),
                    });
                    renames.push((idx, ident));
                    kept.push(candidate);
                }
                Decision::DropUnresolved => {
                    dropped.insert(idx);
                    resolutions.push(Resolution::Dropped {
                        raw,
                        ident: candidate.ident().to_string(),
                        lost: lost_members(candidate),
                    });
                }
            }
        }

        reports.push(CollisionReport {
            path: path.to_string(),
            proposed: bucket
                .iter()
                .map(|&idx| entries[idx].raw_name().to_string())
                .collect(),
            resolutions,
        });
    }

    let mut renames: BTreeMap<usize, _> = renames.into_iter().collect();
    let survivors = entries
        .into_iter()
        .enumerate()
        .filter(|(idx, _)| !dropped.contains(idx))
        .map(|(idx, mut entry)| {
            if let Some(ident) = renames.remove(&idx) {
                entry.set_ident(ident);
            }
            entry
        })
        .collect();

    (survivors, reports)
}

/// Dotted raw-name paths of the members a dropped group takes with it.
fn lost_members(entry: &Entry) -> Vec<String> {
    fn walk(group: &Group, prefix: &str, out: &mut Vec<String>) {
        let prefix = format!("{}{}", prefix, group.raw_name);
        for sibling in group.siblings() {
            match sibling {
                Sibling::Member(member) => out.push(format!("{}.{}", prefix, member.raw_name)),
                Sibling::Group(child) => walk(child, &format!("{prefix}."), out),
            }
        }
    }

    let mut out = Vec::new();
    if let Entry::Group(group) = entry {
        walk(group, "", &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::aggregate::aggregate;
    use crate::identifier::sanitize;
    use crate::namespace::{AccessLevel, Check, Fragment, ResourceKind, Tier};

    fn image(name: &str) -> Member {
        Member::new(
            name,
            ResourceKind::Image,
            Payload::Image {
                name: name.to_string(),
            },
        )
    }

    fn images(members: Vec<Member>) -> Namespace {
        let mut fragment = Fragment::new(ResourceKind::Image);
        for member in members {
            fragment.group.push_member(member);
        }
        aggregate(vec![fragment], AccessLevel::Internal, "R")
    }

    fn member_names(group: &Group) -> Vec<&str> {
        group.members.iter().map(|m| m.ident.as_str()).collect()
    }

    #[test]
    fn test_case_collision_keeps_first() {
        let ns = images(vec![image("Foo"), image("foo")]);
        let result = validate(&ns).unwrap();

        let group = &result.namespace.root.groups[0];
        assert_eq!(member_names(group), vec!["foo"]);
        assert_eq!(group.members[0].raw_name, "Foo");
        assert_eq!(result.reports.len(), 1);
        assert_eq!(result.reports[0].proposed, vec!["Foo", "foo"]);
        assert_eq!(result.diagnostics.warning_count(), 1);
        assert_eq!(result.diagnostics.iter().next().unwrap().code, CODE_UNRESOLVED);
    }

    #[test]
    fn test_repeated_runs_agree() {
        let ns = images(vec![image("foo"), image("Foo"), image("bar")]);
        let first = validate(&ns).unwrap();
        let second = validate(&ns).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.namespace.root.groups[0].members[1].raw_name, "foo");
    }

    #[test]
    fn test_identical_resources_dropped_silently() {
        let ns = images(vec![image("icon"), image("icon")]);
        let result = validate(&ns).unwrap();
        assert_eq!(result.namespace.root.groups[0].members.len(), 1);
        assert!(result.diagnostics.is_empty());
        assert_eq!(result.reports[0].silently_dropped().count(), 1);
    }

    #[test]
    fn test_rename_by_source() {
        let ns = images(vec![
            image("icon").with_source(Some(PathBuf::from("Assets.xcassets"))),
            image("Icon").with_source(Some(PathBuf::from("Dark.xcassets"))),
        ]);
        let result = validate(&ns).unwrap();
        assert_eq!(
            member_names(&result.namespace.root.groups[0]),
            vec!["icon", "iconDark"]
        );
        assert_eq!(result.diagnostics.iter().next().unwrap().code, CODE_RENAMED);
    }

    #[test]
    fn test_nested_levels_are_sorted() {
        let ns = images(vec![image("zebra"), image("Apple"), image("mango")]);
        let result = validate(&ns).unwrap();
        assert_eq!(
            member_names(&result.namespace.root.groups[0]),
            vec!["apple", "mango", "zebra"]
        );
    }

    #[test]
    fn test_root_keeps_generator_order() {
        let ns = aggregate(
            vec![
                Fragment::new(ResourceKind::String),
                Fragment::new(ResourceKind::Color),
            ],
            AccessLevel::Internal,
            "R",
        );
        let result = validate(&ns).unwrap();
        let names: Vec<_> = result
            .namespace
            .root
            .groups
            .iter()
            .map(|g| g.ident.as_str())
            .collect();
        assert_eq!(names, vec!["string", "color"]);
    }

    #[test]
    fn test_member_and_group_collide() {
        let mut fragment = Fragment::new(ResourceKind::Image);
        fragment.group.push_member(image("tab"));
        fragment
            .group
            .descend(&["Tab".to_string()])
            .push_member(image("home"));
        let ns = aggregate(vec![fragment], AccessLevel::Internal, "R");

        let result = validate(&ns).unwrap();
        let group = &result.namespace.root.groups[0];
        assert_eq!(member_names(group), vec!["tab"]);
        assert!(group.groups.is_empty());
        assert_eq!(result.diagnostics.warning_count(), 1);
        let message = &result.diagnostics.iter().next().unwrap().message;
        assert!(message.contains("'Tab.home'"), "{message}");
    }

    #[test]
    fn test_group_before_member_wins() {
        let mut fragment = Fragment::new(ResourceKind::Image);
        fragment
            .group
            .descend(&["Icons".to_string()])
            .push_member(image("home"));
        fragment.group.push_member(image("icons"));
        let ns = aggregate(vec![fragment], AccessLevel::Internal, "R");

        let result = validate(&ns).unwrap();
        let group = &result.namespace.root.groups[0];
        assert!(group.members.is_empty());
        assert_eq!(group.groups.len(), 1);
        assert_eq!(group.groups[0].raw_name, "Icons");
        assert!(result
            .namespace
            .root
            .find_member(&["image", "icons", "home"])
            .is_some());

        let diagnostic = result.diagnostics.iter().next().unwrap();
        assert_eq!(diagnostic.code, CODE_UNRESOLVED);
        assert_eq!(
            diagnostic.message,
            "R.image: skipping 'icons' because 'icons' is already generated for 'Icons'"
        );
    }

    #[test]
    fn test_dropped_group_names_its_members() {
        let mut fragment = Fragment::new(ResourceKind::Image);
        fragment.group.push_member(image("icons"));
        let icons = fragment.group.descend(&["Icons".to_string()]);
        icons.push_member(image("home"));
        icons
            .descend(&["tab bar".to_string()])
            .push_member(image("search"));
        let ns = aggregate(vec![fragment], AccessLevel::Internal, "R");

        let result = validate(&ns).unwrap();
        let report = &result.reports[0];
        assert_eq!(
            report.resolutions[1],
            Resolution::Dropped {
                raw: "Icons".to_string(),
                ident: "icons".to_string(),
                lost: vec!["Icons.home".to_string(), "Icons.tab bar.search".to_string()],
            }
        );
    }

    #[test]
    fn test_invalid_identifier_is_fatal() {
        let mut member = image("icon");
        member.ident = Identifier::unchecked("icon-dark");
        let ns = images(vec![member]);

        let err = validate(&ns).unwrap_err();
        assert!(matches!(
            err,
            ResgenError::InternalConsistency { ref path, .. } if path == "R.image"
        ));
    }

    #[test]
    fn test_sanitized_identifiers_pass_grammar_check() {
        let ns = images(vec![image("2x"), image("default"), image("---"), image("café")]);
        let result = validate(&ns).unwrap();
        for member in &result.namespace.root.groups[0].members {
            assert!(is_valid_identifier(member.ident.as_str()));
        }
        assert_eq!(sanitize("café").as_str(), "caf");
    }

    #[test]
    fn test_reserved_and_empty_names_warn() {
        let ns = images(vec![image("default"), image("---")]);
        let result = validate(&ns).unwrap();
        let codes: Vec<_> = result.diagnostics.iter().map(|d| d.code.as_str()).collect();
        assert_eq!(codes, vec![CODE_RESERVED, CODE_EMPTY]);
        assert_eq!(result.namespace.root.groups[0].members.len(), 2);
    }

    #[test]
    fn test_leading_digit_is_silent() {
        let ns = images(vec![image("2x")]);
        let result = validate(&ns).unwrap();
        assert!(result.diagnostics.is_empty());
        assert!(result.reports.is_empty());
    }

    #[test]
    fn test_conflicting_payload_kinds_are_fatal() {
        let mut fragment = Fragment::new(ResourceKind::Image);
        fragment.group.push_member(image("icon")).push_member(Member::new(
            "icon",
            ResourceKind::Image,
            Payload::Color {
                name: "icon".to_string(),
            },
        ));
        let ns = aggregate(vec![fragment], AccessLevel::Internal, "R");

        let err = validate(&ns).unwrap_err();
        assert!(matches!(
            err,
            ResgenError::InternalConsistency { ref path, .. } if path == "R.image"
        ));
    }

    #[test]
    fn test_internal_records_follow_renames() {
        let font = |name: &str, source: &str| {
            Member::new(
                name,
                ResourceKind::Font,
                Payload::Font {
                    font_name: name.to_string(),
                },
            )
            .with_source(Some(PathBuf::from(source)))
            .with_checks([Check::FontRegistered(name.to_string())])
        };
        let mut fragment = Fragment::new(ResourceKind::Font);
        fragment
            .group
            .push_member(font("Inter", "Inter.ttf"))
            .push_member(font("inter", "Inter-Alt.ttf"));
        let ns = aggregate(vec![fragment], AccessLevel::Internal, "R");

        let result = validate(&ns).unwrap();
        let external = result.namespace.paths(Tier::External);
        let internal = result.namespace.paths(Tier::Internal);
        for path in internal.iter().filter(|p| p.len() > 2) {
            assert!(external.contains(path), "orphan: {path:?}");
        }
        assert!(result
            .namespace
            .root
            .find_member(&["font", "interInterAlt"])
            .is_some());
    }

    #[test]
    fn test_invalid_reuse_class_falls_back() {
        let reusable = |identifier: &str, class: &str| {
            Member::new(
                identifier,
                ResourceKind::ReuseIdentifier,
                Payload::ReuseIdentifier {
                    identifier: identifier.to_string(),
                    class: class.to_string(),
                },
            )
        };
        let mut fragment = Fragment::new(ResourceKind::ReuseIdentifier);
        fragment
            .group
            .push_member(reusable("profile", "MyApp.ProfileCell"))
            .push_member(reusable("header", "Header View>"));
        let ns = aggregate(vec![fragment], AccessLevel::Internal, "R");

        let result = validate(&ns).unwrap();
        let class_of = |name: &str| {
            match &result
                .namespace
                .root
                .find_member(&["reuseIdentifier", name])
                .unwrap()
                .payload
            {
                Payload::ReuseIdentifier { class, .. } => class.clone(),
                other => panic!("unexpected payload {other:?}"),
            }
        };
        assert_eq!(class_of("profile"), "MyApp.ProfileCell");
        assert_eq!(class_of("header"), FALLBACK_VIEW_CLASS);

        let codes: Vec<_> = result.diagnostics.iter().map(|d| d.code.as_str()).collect();
        assert_eq!(codes, vec![CODE_INVALID_TYPE]);
    }

    #[test]
    fn test_input_tree_is_untouched() {
        let ns = images(vec![image("Foo"), image("foo")]);
        let before = ns.clone();
        let _ = validate(&ns).unwrap();
        assert_eq!(ns, before);
    }
}
