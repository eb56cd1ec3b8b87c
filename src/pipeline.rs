//! The generation pipeline.
//!
//! generators → aggregate → validate → emit, strictly in that order. Each
//! stage only sees the finished output of the previous one.

use crate::aggregate::aggregate;
use crate::emit::{emit, unused_images, EmitMode, EmitOptions};
use crate::error::Result;
use crate::generators::{produce_all, Generator, GeneratorContext};
use crate::namespace::{AccessLevel, Namespace, ResourceKind};
use crate::resources::ResourceSet;
use crate::validation::{validate, CollisionReport, ValidationResult};

/// Configuration of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub access_level: AccessLevel,
    pub name_prefix: String,
    pub development_language: String,
    /// Enabled kinds, in registration order.
    pub generators: Vec<ResourceKind>,
    pub bundle_identifier: Option<String>,
    pub legacy_interop: bool,
    pub unused_images_report: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            access_level: AccessLevel::default(),
            name_prefix: "R".to_string(),
            development_language: "en".to_string(),
            generators: ResourceKind::ALL.to_vec(),
            bundle_identifier: None,
            legacy_interop: false,
            unused_images_report: true,
        }
    }
}

/// Output of a generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    /// Full surface source text.
    pub full: String,
    /// UI test surface source text.
    pub uitest: String,
    /// The validated tree both texts were emitted from.
    pub namespace: Namespace,
    pub reports: Vec<CollisionReport>,
    pub diagnostics: ValidationResult,
}

impl Generated {
    /// Number of accessors in the full surface.
    pub fn member_count(&self) -> usize {
        self.namespace.root.member_count()
    }
}

/// Build the aggregated, not yet validated, namespace.
pub fn build_namespace(resources: &ResourceSet, settings: &Settings) -> Namespace {
    let generators = Generator::enabled(&settings.generators);
    let ctx = GeneratorContext::new(resources, &settings.development_language);
    let fragments = produce_all(&generators, &ctx);

    aggregate(fragments, settings.access_level, &settings.name_prefix)
        .with_bundle_identifier(settings.bundle_identifier.clone())
}

/// Run the whole pipeline over `resources`.
pub fn generate(resources: &ResourceSet, settings: &Settings) -> Result<Generated> {
    let namespace = build_namespace(resources, settings);
    let validation = validate(&namespace)?;

    let unused = settings.unused_images_report.then(|| {
        unused_images(
            &resources.declared_image_names(),
            &resources.used_image_names(),
        )
    });
    let options = EmitOptions {
        legacy_interop: settings.legacy_interop,
        unused_images: unused,
    };

    let full = emit(&validation.namespace, EmitMode::Full, &options);
    let uitest = emit(&validation.namespace, EmitMode::UiTest, &options);

    Ok(Generated {
        full,
        uitest,
        namespace: validation.namespace,
        reports: validation.reports,
        diagnostics: validation.diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resources() -> ResourceSet {
        ResourceSet::from_yaml(
            r#"
images:
  - name: icon
  - name: Icon
fonts:
  - name: Roboto-Bold
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_generate_is_idempotent() {
        let settings = Settings::default();
        let a = generate(&resources(), &settings).unwrap();
        let b = generate(&resources(), &settings).unwrap();
        assert_eq!(a.full, b.full);
        assert_eq!(a.uitest, b.uitest);
    }

    #[test]
    fn test_generator_order_is_kept() {
        let settings = Settings {
            generators: vec![ResourceKind::Font, ResourceKind::Image],
            ..Settings::default()
        };
        let generated = generate(&resources(), &settings).unwrap();
        let font = generated.full.find("struct font {").unwrap();
        let image = generated.full.find("struct image {").unwrap();
        assert!(font < image);
    }

    #[test]
    fn test_disabled_generators_produce_nothing() {
        let settings = Settings {
            generators: vec![ResourceKind::Font],
            ..Settings::default()
        };
        let generated = generate(&resources(), &settings).unwrap();
        assert!(!generated.full.contains("struct image"));
        assert!(generated.diagnostics.is_empty());
        assert_eq!(generated.member_count(), 1);
    }

    #[test]
    fn test_unused_report_toggle() {
        let with_report = generate(&resources(), &Settings::default()).unwrap();
        assert!(with_report.full.contains("// - Icon\n// - icon\n"));

        let settings = Settings {
            unused_images_report: false,
            ..Settings::default()
        };
        let without = generate(&resources(), &settings).unwrap();
        assert!(!without.full.contains("Images not referenced"));
    }

    #[test]
    fn test_bundle_identifier_reaches_output() {
        let settings = Settings {
            bundle_identifier: Some("com.example.app".to_string()),
            ..Settings::default()
        };
        let generated = generate(&resources(), &settings).unwrap();
        assert!(generated
            .full
            .contains("Bundle(identifier: \"com.example.app\") ?? Bundle.main"));
    }
}
