//! Fragment aggregation.
//!
//! Merges generator fragments into a single namespace tree. Each fragment
//! becomes a named child of the root, in the order the generators were
//! enabled; nothing is flattened, sorted or deduplicated here.

use crate::namespace::{AccessLevel, Fragment, Group, Namespace, SupportRecord};

/// Merge `fragments` under a root named `name_prefix`.
///
/// Every group and member gets `access`. The root also carries the support
/// records the generated code looks resources up with.
pub fn aggregate(fragments: Vec<Fragment>, access: AccessLevel, name_prefix: &str) -> Namespace {
    let mut root = Group::root(name_prefix);
    root.support = vec![
        SupportRecord::HostingBundle {
            bundle_identifier: None,
        },
        SupportRecord::ApplicationLocale,
    ];

    for fragment in fragments {
        let mut group = fragment.group;
        group.origin = Some(fragment.kind);
        root.push_group(group);
    }

    root.set_access(access);

    Namespace { root, access }
}

impl Namespace {
    /// Look resources up in the bundle with this identifier instead of the
    /// bundle containing the generated code.
    pub fn with_bundle_identifier(mut self, identifier: Option<String>) -> Self {
        for record in &mut self.root.support {
            if let SupportRecord::HostingBundle { bundle_identifier } = record {
                *bundle_identifier = identifier.clone();
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::{Member, Payload, ResourceKind, Tier};

    fn fragment(kind: ResourceKind, names: &[&str]) -> Fragment {
        let mut fragment = Fragment::new(kind);
        for name in names {
            fragment.group.push_member(Member::new(
                *name,
                kind,
                Payload::Identifier {
                    value: name.to_string(),
                },
            ));
        }
        fragment
    }

    #[test]
    fn test_fragments_become_children_in_order() {
        let ns = aggregate(
            vec![
                fragment(ResourceKind::String, &["a"]),
                fragment(ResourceKind::Color, &["b"]),
                fragment(ResourceKind::Image, &["c"]),
            ],
            AccessLevel::Public,
            "R",
        );

        let names: Vec<_> = ns.root.groups.iter().map(|g| g.ident.as_str()).collect();
        assert_eq!(names, vec!["string", "color", "image"]);
        assert_eq!(ns.external_name().as_str(), "R");
    }

    #[test]
    fn test_access_is_applied_everywhere() {
        let ns = aggregate(
            vec![fragment(ResourceKind::Image, &["a"])],
            AccessLevel::Public,
            "R",
        );
        assert_eq!(ns.root.access, AccessLevel::Public);
        assert_eq!(ns.root.groups[0].members[0].access, AccessLevel::Public);
    }

    #[test]
    fn test_no_cross_fragment_deduplication() {
        let ns = aggregate(
            vec![
                fragment(ResourceKind::Id, &["same"]),
                fragment(ResourceKind::Id, &["same"]),
            ],
            AccessLevel::Internal,
            "R",
        );
        assert_eq!(ns.root.groups.len(), 2);
        assert_eq!(ns.root.member_count(), 2);
    }

    #[test]
    fn test_root_support_records() {
        let ns = aggregate(vec![], AccessLevel::Internal, "R")
            .with_bundle_identifier(Some("com.example.app".to_string()));
        assert_eq!(
            ns.root.support[0],
            SupportRecord::HostingBundle {
                bundle_identifier: Some("com.example.app".to_string())
            }
        );
        assert!(ns.root.has_tier(Tier::Internal));
        assert!(ns.orphan_internal_paths().is_empty());
    }

    #[test]
    fn test_custom_prefix() {
        let ns = aggregate(vec![], AccessLevel::Internal, "app resources");
        assert_eq!(ns.external_name().as_str(), "AppResources");
        assert_eq!(ns.internal_name(), "_AppResources");
    }
}
