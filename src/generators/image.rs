//! Image generator.

use crate::namespace::{Fragment, Member, Payload, ResourceKind};
use crate::resources::ImageRecord;

/// One member per image, nested under its namespace folders.
pub fn generate(images: &[ImageRecord]) -> Fragment {
    let mut fragment = Fragment::new(ResourceKind::Image);

    for image in images {
        let member = Member::new(
            &image.name,
            ResourceKind::Image,
            Payload::Image {
                name: image.catalog_name(),
            },
        )
        .with_source(image.source.clone());

        fragment.group.descend(&image.namespace).push_member(member);
    }

    fragment
}
