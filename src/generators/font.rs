//! Font generator.

use crate::namespace::{Check, Fragment, Member, Payload, ResourceKind};
use crate::resources::FontRecord;

/// One member per font; each is checked for registration at runtime.
pub fn generate(fonts: &[FontRecord]) -> Fragment {
    let mut fragment = Fragment::new(ResourceKind::Font);

    for font in fonts {
        let member = Member::new(
            &font.name,
            ResourceKind::Font,
            Payload::Font {
                font_name: font.name.clone(),
            },
        )
        .with_source(font.source.clone())
        .with_checks([Check::FontRegistered(font.name.clone())]);

        fragment.group.push_member(member);
    }

    fragment
}
