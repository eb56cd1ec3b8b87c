//! Accessibility identifier generator.
//!
//! The only generator producing identifier-type members, and therefore the
//! only one visible in the UI test surface. One nested group per layout file.

use crate::namespace::{Fragment, Group, Member, Payload, ResourceKind};
use crate::resources::ResourceSet;

pub fn generate(resources: &ResourceSet) -> Fragment {
    let mut fragment = Fragment::new(ResourceKind::Id);

    let nibs = resources
        .nibs
        .iter()
        .map(|n| (&n.name, &n.layout, &n.source));
    let storyboards = resources
        .storyboards
        .iter()
        .map(|s| (&s.name, &s.layout, &s.source));

    for (name, layout, source) in nibs.chain(storyboards) {
        if layout.accessibility_identifiers.is_empty() {
            continue;
        }

        let mut group = Group::new(name.as_str())
            .with_origin(ResourceKind::Id)
            .with_source(source.clone());
        for identifier in &layout.accessibility_identifiers {
            group.push_member(
                Member::new(
                    identifier,
                    ResourceKind::Id,
                    Payload::Identifier {
                        value: identifier.clone(),
                    },
                )
                .with_source(source.clone()),
            );
        }
        fragment.group.push_group(group);
    }

    fragment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_group_per_layout() {
        let yaml = r#"
nibs:
  - name: LoginView
    accessibility_identifiers: [login.username, login.submit]
  - name: Plain
storyboards:
  - name: Main
    accessibility_identifiers: [tabBar]
"#;
        let resources = ResourceSet::from_yaml(yaml).unwrap();
        let fragment = generate(&resources);

        assert_eq!(fragment.group.groups.len(), 2);
        assert!(fragment
            .group
            .find_member(&["loginView", "loginUsername"])
            .is_some());
        assert!(fragment.group.find_member(&["main", "tabBar"]).is_some());
    }
}
