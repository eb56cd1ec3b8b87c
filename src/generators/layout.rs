//! Nib and storyboard generators.
//!
//! Both produce one member per layout file. Images and colors the layout
//! references are checked at runtime through the internal tree, as are the
//! storyboard identifiers of view controllers.

use crate::namespace::{Check, Fragment, Member, Payload, ResourceKind};
use crate::resources::{LayoutContents, NibRecord, StoryboardRecord};

pub fn generate_nibs(nibs: &[NibRecord]) -> Fragment {
    let mut fragment = Fragment::new(ResourceKind::Nib);

    for nib in nibs {
        let member = Member::new(
            &nib.name,
            ResourceKind::Nib,
            Payload::Nib {
                name: nib.name.clone(),
                root_view: nib.root_view.clone(),
            },
        )
        .with_source(nib.source.clone())
        .with_checks(asset_checks(&nib.layout));

        fragment.group.push_member(member);
    }

    fragment
}

pub fn generate_storyboards(storyboards: &[StoryboardRecord]) -> Fragment {
    let mut fragment = Fragment::new(ResourceKind::Storyboard);

    for storyboard in storyboards {
        let view_controllers =
            storyboard
                .view_controllers
                .iter()
                .map(|vc| Check::ViewControllerExists {
                    storyboard: storyboard.name.clone(),
                    identifier: vc.identifier.clone(),
                });

        let member = Member::new(
            &storyboard.name,
            ResourceKind::Storyboard,
            Payload::Storyboard {
                name: storyboard.name.clone(),
                initial_view_controller: storyboard.initial_view_controller.clone(),
            },
        )
        .with_source(storyboard.source.clone())
        .with_checks(asset_checks(&storyboard.layout).into_iter().chain(view_controllers));

        fragment.group.push_member(member);
    }

    fragment
}

fn asset_checks(layout: &LayoutContents) -> Vec<Check> {
    layout
        .used_images
        .iter()
        .map(|name| Check::ImageExists(name.clone()))
        .chain(
            layout
                .used_colors
                .iter()
                .map(|name| Check::ColorExists(name.clone())),
        )
        .collect()
}
