//! Property list generator.
//!
//! Each property list becomes a group; dictionaries become nested groups and
//! scalar values become constants. Arrays have no stable name and are
//! skipped.

use std::collections::BTreeMap;

use crate::namespace::{Fragment, Group, Member, Payload, ResourceKind, ScalarValue};
use crate::resources::{PlistValue, PropertyList};

pub fn generate(plists: &[PropertyList]) -> Fragment {
    let mut fragment = Fragment::new(ResourceKind::Info);

    for plist in plists {
        let mut group = Group::new(&plist.name)
            .with_origin(ResourceKind::Info)
            .with_source(plist.source.clone());
        fill(&mut group, &plist.entries, plist);
        fragment.group.push_group(group);
    }

    fragment
}

fn fill(group: &mut Group, entries: &BTreeMap<String, PlistValue>, plist: &PropertyList) {
    for (key, value) in entries {
        let scalar = match value {
            PlistValue::String(s) => ScalarValue::String(s.clone()),
            PlistValue::Bool(b) => ScalarValue::Bool(*b),
            PlistValue::Integer(i) => ScalarValue::Integer(*i),
            PlistValue::Real(r) => ScalarValue::Real(*r),
            PlistValue::Dict(dict) => {
                let mut nested = Group::new(key)
                    .with_origin(ResourceKind::Info)
                    .with_source(plist.source.clone());
                fill(&mut nested, dict, plist);
                group.push_group(nested);
                continue;
            }
            PlistValue::Array(_) => continue,
        };

        group.push_member(
            Member::new(key, ResourceKind::Info, Payload::Value(scalar))
                .with_source(plist.source.clone()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_nested() {
        let yaml = r#"
property_lists:
  - name: Info
    entries:
      CFBundleName: Demo
      CFBundleVersion: 42
      UIRequiresFullScreen: true
      UIBackgroundModes: [audio]
      NSAppTransportSecurity:
        NSAllowsArbitraryLoads: false
"#;
        let resources = crate::resources::ResourceSet::from_yaml(yaml).unwrap();
        let fragment = generate(&resources.property_lists);
        let info = &fragment.group.groups[0];

        assert_eq!(info.ident.as_str(), "info");
        assert_eq!(info.members.len(), 3);
        assert!(info.find_member(&["uiBackgroundModes"]).is_none());
        let member = info
            .find_member(&["nsAppTransportSecurity", "nsAllowsArbitraryLoads"])
            .unwrap();
        assert_eq!(member.payload, Payload::Value(ScalarValue::Bool(false)));
        let version = info.find_member(&["cfBundleVersion"]).unwrap();
        assert_eq!(version.payload, Payload::Value(ScalarValue::Integer(42)));
    }
}
