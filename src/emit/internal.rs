//! Internal tier: support records and validation functions.
//!
//! Every member with an [`InternalRecord`](crate::namespace::InternalRecord)
//! gets a struct at the same path as its accessor, holding a `validate()`
//! function; groups chain their children's `validate()` calls.

use crate::namespace::{Check, Group, Member, SupportRecord, Tier};

use super::swift::{string_literal, SwiftWriter};

/// Emit the internal root named `name` for `root`.
pub fn emit_root(w: &mut SwiftWriter, root: &Group, name: &str) {
    w.open(format!("struct {name}"));

    for record in &root.support {
        emit_support(w, record);
    }
    if !root.support.is_empty() {
        w.blank();
    }
    emit_validate_chain(w, root);

    for child in root.groups.iter().filter(|g| g.has_tier(Tier::Internal)) {
        w.blank();
        emit_group(w, child, name);
    }

    if root
        .support
        .iter()
        .any(|r| matches!(r, SupportRecord::HostingBundle { bundle_identifier: None }))
    {
        w.blank();
        w.line("private final class BundleFinder {}");
    }

    w.close();
}

fn emit_support(w: &mut SwiftWriter, record: &SupportRecord) {
    match record {
        SupportRecord::HostingBundle {
            bundle_identifier: Some(id),
        } => w.line(format!(
            "static let hostingBundle = Bundle(identifier: {}) ?? Bundle.main",
            string_literal(id)
        )),
        SupportRecord::HostingBundle {
            bundle_identifier: None,
        } => w.line("static let hostingBundle = Bundle(for: BundleFinder.self)"),
        SupportRecord::ApplicationLocale => w.line(
            "static let applicationLocale = hostingBundle.preferredLocalizations.first.flatMap { Locale(identifier: $0) } ?? Locale.current",
        ),
    }
}

fn emit_group(w: &mut SwiftWriter, group: &Group, internal: &str) {
    w.open(format!("struct {}", group.ident));
    emit_validate_chain(w, group);

    for member in group.members.iter().filter(|m| m.internal.is_some()) {
        w.blank();
        emit_member(w, member, internal);
    }
    for child in group.groups.iter().filter(|g| g.has_tier(Tier::Internal)) {
        w.blank();
        emit_group(w, child, internal);
    }

    w.close();
}

fn emit_validate_chain(w: &mut SwiftWriter, group: &Group) {
    w.open("static func validate() throws");
    for member in group.members.iter().filter(|m| m.internal.is_some()) {
        w.line(format!("try {}.validate()", member.ident));
    }
    for child in group.groups.iter().filter(|g| g.has_tier(Tier::Internal)) {
        w.line(format!("try {}.validate()", child.ident));
    }
    w.close();
}

fn emit_member(w: &mut SwiftWriter, member: &Member, internal: &str) {
    let Some(record) = &member.internal else {
        return;
    };

    w.open(format!("struct {}", member.ident));
    w.open("static func validate() throws");
    for check in &record.checks {
        emit_check(w, check, &member.raw_name, internal);
    }
    w.close();
    w.close();
}

fn emit_check(w: &mut SwiftWriter, check: &Check, owner: &str, internal: &str) {
    let bundle = format!("{internal}.hostingBundle");
    let (condition, message) = match check {
        Check::ImageExists(name) => (
            format!(
                "UIImage(named: {}, in: {bundle}, compatibleWith: nil) == nil",
                string_literal(name)
            ),
            format!("Image named '{name}' is used in '{owner}', but couldn't be loaded."),
        ),
        Check::ColorExists(name) => (
            format!(
                "UIColor(named: {}, in: {bundle}, compatibleWith: nil) == nil",
                string_literal(name)
            ),
            format!("Color named '{name}' is used in '{owner}', but couldn't be loaded."),
        ),
        Check::FontRegistered(name) => (
            format!("UIFont(name: {}, size: 42) == nil", string_literal(name)),
            format!("Font '{name}' could not be loaded, is it listed under UIAppFonts in Info.plist?"),
        ),
        Check::ViewControllerExists {
            storyboard,
            identifier,
        } => (
            format!(
                "{bundle}.path(forResource: {}, ofType: \"storyboardc\") == nil || UIStoryboard(name: {}, bundle: {bundle}).instantiateViewController(withIdentifier: {}) as UIViewController? == nil",
                string_literal(storyboard),
                string_literal(storyboard),
                string_literal(identifier)
            ),
            format!("View controller with identifier '{identifier}' could not be loaded from storyboard '{storyboard}'."),
        ),
    };

    w.open(format!("if {condition}"));
    w.line(format!(
        "throw ResourceValidationError(message: {})",
        string_literal(&message)
    ));
    w.close();
}
