//! Import derivation.
//!
//! Imports are derived from what the tree declares, never hardcoded per
//! generator: `Foundation` for every full surface, UIKit when a member's
//! accessor or internal check touches UIKit types, and the resource runtime
//! when a member is declared as one of its resource types.

use std::collections::BTreeSet;

use crate::namespace::{Group, Member};

/// Module providing `ImageResource`, `StringResource` and friends.
pub const RUNTIME_MODULE: &str = "ResgenRuntime";

/// Modules the full surface for `root` needs, sorted.
pub fn required_imports(root: &Group, legacy_interop: bool) -> BTreeSet<&'static str> {
    let mut imports = BTreeSet::new();
    imports.insert("Foundation");
    collect(root, &mut imports);
    if legacy_interop && root.member_count() > 0 {
        imports.insert("UIKit");
    }
    imports
}

fn collect(group: &Group, imports: &mut BTreeSet<&'static str>) {
    for member in &group.members {
        for module in member_imports(member) {
            imports.insert(module);
        }
    }
    for child in &group.groups {
        collect(child, imports);
    }
}

fn member_imports(member: &Member) -> Vec<&'static str> {
    let kind = member.kind();
    let mut modules = Vec::new();
    if kind.needs_resource_runtime() {
        modules.push(RUNTIME_MODULE);
    }
    if kind.needs_uikit() || member.internal.is_some() {
        modules.push("UIKit");
    }
    if member.internal.is_some() {
        // ResourceValidationError
        modules.push(RUNTIME_MODULE);
    }
    modules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::{Check, Payload, ResourceKind};

    #[test]
    fn test_identifiers_need_foundation_only() {
        let mut root = Group::root("R");
        let mut ids = Group::new("id");
        ids.push_member(Member::new(
            "login",
            ResourceKind::Id,
            Payload::Identifier {
                value: "login".to_string(),
            },
        ));
        root.push_group(ids);

        let imports: Vec<_> = required_imports(&root, false).into_iter().collect();
        assert_eq!(imports, vec!["Foundation"]);
    }

    #[test]
    fn test_fonts_need_runtime_and_uikit() {
        let mut root = Group::root("R");
        let mut fonts = Group::new("font");
        fonts.push_member(
            Member::new(
                "Inter",
                ResourceKind::Font,
                Payload::Font {
                    font_name: "Inter".to_string(),
                },
            )
            .with_checks([Check::FontRegistered("Inter".to_string())]),
        );
        root.push_group(fonts);

        let imports: Vec<_> = required_imports(&root, false).into_iter().collect();
        assert_eq!(imports, vec!["Foundation", RUNTIME_MODULE, "UIKit"]);
    }

    #[test]
    fn test_files_do_not_need_uikit() {
        let mut root = Group::root("R");
        let mut files = Group::new("file");
        files.push_member(Member::new(
            "data.json",
            ResourceKind::File,
            Payload::File {
                name: "data".to_string(),
                extension: Some("json".to_string()),
            },
        ));
        root.push_group(files);

        assert!(!required_imports(&root, false).contains("UIKit"));
        assert!(required_imports(&root, true).contains("UIKit"));
    }
}
