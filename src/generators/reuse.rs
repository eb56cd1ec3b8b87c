//! Reuse identifier generator.
//!
//! Collects reusable cells and views from every nib and storyboard. The same
//! identifier registered in two layouts yields two identical members; the
//! validator folds those into one.

use crate::namespace::{Fragment, Member, Payload, ResourceKind};
use crate::resources::ResourceSet;

pub fn generate(resources: &ResourceSet) -> Fragment {
    let mut fragment = Fragment::new(ResourceKind::ReuseIdentifier);

    let nibs = resources.nibs.iter().map(|n| (&n.layout, &n.source));
    let storyboards = resources.storyboards.iter().map(|s| (&s.layout, &s.source));

    for (layout, source) in nibs.chain(storyboards) {
        for reusable in &layout.reusables {
            let member = Member::new(
                &reusable.identifier,
                ResourceKind::ReuseIdentifier,
                Payload::ReuseIdentifier {
                    identifier: reusable.identifier.clone(),
                    class: reusable.class.clone(),
                },
            )
            .with_source(source.clone());

            fragment.group.push_member(member);
        }
    }

    fragment
}
