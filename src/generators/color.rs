//! Color generator.

use crate::namespace::{Fragment, Member, Payload, ResourceKind};
use crate::resources::ColorRecord;

/// One member per named color, nested under its namespace folders.
pub fn generate(colors: &[ColorRecord]) -> Fragment {
    let mut fragment = Fragment::new(ResourceKind::Color);

    for color in colors {
        let member = Member::new(
            &color.name,
            ResourceKind::Color,
            Payload::Color {
                name: color.catalog_name(),
            },
        )
        .with_source(color.source.clone());

        fragment.group.descend(&color.namespace).push_member(member);
    }

    fragment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate() {
        let fragment = generate(&[ColorRecord {
            name: "accent-primary".to_string(),
            namespace: vec!["brand".to_string()],
            source: None,
        }]);
        let member = fragment.group.find_member(&["brand", "accentPrimary"]).unwrap();
        assert_eq!(
            member.payload,
            Payload::Color {
                name: "brand/accent-primary".to_string()
            }
        );
    }
}
