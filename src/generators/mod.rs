//! Struct generators, one per resource kind.
//!
//! Generators are a closed set: [`Generator`] has one variant per
//! [`ResourceKind`] and turns the matching slice of a [`ResourceSet`] into a
//! [`Fragment`]. Which generators run, and in which order, is decided by the
//! configuration before the pipeline starts.
//!
//! # Example
//!
//! ```
//! use resgen::generators::{Generator, GeneratorContext};
//! use resgen::namespace::ResourceKind;
//! use resgen::resources::ResourceSet;
//!
//! let resources = ResourceSet::from_yaml("fonts:\n  - name: Roboto-Bold\n").unwrap();
//! let ctx = GeneratorContext::new(&resources, "en");
//!
//! let fragment = Generator::for_kind(ResourceKind::Font).produce(&ctx);
//! assert_eq!(fragment.group.members[0].ident.as_str(), "robotoBold");
//! ```

mod color;
mod file;
mod font;
mod format;
mod id;
mod image;
mod info;
mod layout;
mod reuse;
mod string;

use crate::namespace::{Fragment, ResourceKind};
use crate::resources::ResourceSet;

pub use format::parse_format_args;

/// Inputs shared by all generators of one run.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorContext<'a> {
    pub resources: &'a ResourceSet,
    /// Locale whose values are used for format arguments and doc comments.
    pub development_language: &'a str,
}

impl<'a> GeneratorContext<'a> {
    pub fn new(resources: &'a ResourceSet, development_language: &'a str) -> Self {
        Self {
            resources,
            development_language,
        }
    }
}

/// A resource generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    Image,
    Color,
    Font,
    String,
    File,
    Nib,
    Storyboard,
    ReuseIdentifier,
    Info,
    Id,
}

impl Generator {
    /// The generator handling `kind`.
    pub fn for_kind(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::Image => Generator::Image,
            ResourceKind::Color => Generator::Color,
            ResourceKind::Font => Generator::Font,
            ResourceKind::String => Generator::String,
            ResourceKind::File => Generator::File,
            ResourceKind::Nib => Generator::Nib,
            ResourceKind::Storyboard => Generator::Storyboard,
            ResourceKind::ReuseIdentifier => Generator::ReuseIdentifier,
            ResourceKind::Info => Generator::Info,
            ResourceKind::Id => Generator::Id,
        }
    }

    /// The resource kind this generator handles.
    pub fn kind(&self) -> ResourceKind {
        match self {
            Generator::Image => ResourceKind::Image,
            Generator::Color => ResourceKind::Color,
            Generator::Font => ResourceKind::Font,
            Generator::String => ResourceKind::String,
            Generator::File => ResourceKind::File,
            Generator::Nib => ResourceKind::Nib,
            Generator::Storyboard => ResourceKind::Storyboard,
            Generator::ReuseIdentifier => ResourceKind::ReuseIdentifier,
            Generator::Info => ResourceKind::Info,
            Generator::Id => ResourceKind::Id,
        }
    }

    /// Turn this generator's resources into a fragment.
    pub fn produce(&self, ctx: &GeneratorContext<'_>) -> Fragment {
        let resources = ctx.resources;
        match self {
            Generator::Image => image::generate(&resources.images),
            Generator::Color => color::generate(&resources.colors),
            Generator::Font => font::generate(&resources.fonts),
            Generator::String => string::generate(&resources.strings, ctx.development_language),
            Generator::File => file::generate(&resources.files),
            Generator::Nib => layout::generate_nibs(&resources.nibs),
            Generator::Storyboard => layout::generate_storyboards(&resources.storyboards),
            Generator::ReuseIdentifier => reuse::generate(resources),
            Generator::Info => info::generate(&resources.property_lists),
            Generator::Id => id::generate(resources),
        }
    }

    /// Generators for the enabled kinds, in the given order.
    ///
    /// Later repeats of a kind are ignored.
    pub fn enabled(kinds: &[ResourceKind]) -> Vec<Generator> {
        let mut generators: Vec<Generator> = Vec::with_capacity(kinds.len());
        for kind in kinds {
            let generator = Generator::for_kind(*kind);
            if !generators.contains(&generator) {
                generators.push(generator);
            }
        }
        generators
    }
}

/// Run every generator, in order, producing one fragment each.
pub fn produce_all(generators: &[Generator], ctx: &GeneratorContext<'_>) -> Vec<Fragment> {
    generators.iter().map(|g| g.produce(ctx)).collect()
}
