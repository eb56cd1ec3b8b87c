//! resgen - Strongly typed resource accessor generator
//!
//! A library for turning an app's resource records (images, colors, fonts,
//! strings, files, layouts, reuse identifiers and property lists) into a
//! collision-free namespace of typed accessors, emitted as Swift source.
//!
//! The pipeline runs in four stages:
//!
//! 1. [`generators`] turn records into per-kind fragments,
//! 2. [`aggregate`] merges them under a single root,
//! 3. [`validation`] sanitizes and de-duplicates sibling identifiers,
//! 4. [`emit`] renders the validated tree as text.
//!
//! [`pipeline::generate`] runs all four.

pub mod aggregate;
pub mod cli;
pub mod discovery;
pub mod emit;
pub mod error;
pub mod generators;
pub mod identifier;
pub mod namespace;
pub mod output;
pub mod pipeline;
pub mod resources;
pub mod validation;
pub mod writer;

pub use aggregate::aggregate;
pub use discovery::{discover, discover_paths, DiscoveryResult, Manifest, ScanResult};
pub use emit::{emit, EmitMode, EmitOptions};
pub use error::{ResgenError, Result};
pub use generators::{Generator, GeneratorContext};
pub use identifier::{sanitize, Escape, Identifier};
pub use namespace::{
    AccessLevel, Fragment, Group, Member, MemberKind, Namespace, Payload, ResourceKind, Tier,
};
pub use pipeline::{build_namespace, generate, Generated, Settings};
pub use resources::ResourceSet;
pub use validation::{validate, CollisionReport, Diagnostic, Severity, Validation, ValidationResult};
