//! Legacy interop surface.
//!
//! An `@objcMembers` class hierarchy mirroring the external tree, returning
//! plain Foundation and UIKit values instead of resource types, plus a
//! `validate()` entry point that forwards to the internal tree.

use crate::namespace::{Group, Member, Payload, ScalarValue};

use super::swift::{real_literal, string_literal, SwiftWriter};

/// Name of the legacy root class for an external root named `external`.
pub fn legacy_name(external: &str) -> String {
    format!("{external}Objc")
}

/// Emit the legacy mirror of `root`.
pub fn emit_root(w: &mut SwiftWriter, root: &Group, internal: &str) {
    let access = root.access.prefix();
    w.line("@objcMembers");
    w.open(format!(
        "{access}final class {}: NSObject",
        legacy_name(root.ident.as_str())
    ));
    w.open(format!("{access}static func validate() throws"));
    w.line(format!("try {internal}.validate()"));
    w.close();

    for child in root.groups.iter().filter(|g| g.member_count() > 0) {
        w.blank();
        emit_group(w, child, internal);
    }
    w.close();
}

fn emit_group(w: &mut SwiftWriter, group: &Group, internal: &str) {
    let access = group.access.prefix();
    w.line("@objcMembers");
    w.open(format!("{access}final class {}: NSObject", group.ident));

    let mut first = true;
    for member in &group.members {
        let Some(lines) = member_lines(member, internal) else {
            continue;
        };
        if !first {
            w.blank();
        }
        first = false;
        for line in lines {
            w.line(line);
        }
    }
    for child in group.groups.iter().filter(|g| g.member_count() > 0) {
        if !first {
            w.blank();
        }
        first = false;
        emit_group(w, child, internal);
    }

    w.close();
}

/// Declaration lines for one member, or `None` when it has no legacy form.
fn member_lines(member: &Member, internal: &str) -> Option<Vec<String>> {
    let access = member.access.prefix();
    let name = &member.ident;
    let bundle = format!("{internal}.hostingBundle");

    let single = |decl: String| Some(vec![decl]);

    match &member.payload {
        Payload::Image { name: asset } => single(format!(
            "{access}static var {name}: UIImage? {{ UIImage(named: {}, in: {bundle}, compatibleWith: nil) }}",
            string_literal(asset)
        )),
        Payload::Color { name: asset } => single(format!(
            "{access}static var {name}: UIColor? {{ UIColor(named: {}, in: {bundle}, compatibleWith: nil) }}",
            string_literal(asset)
        )),
        Payload::Font { font_name } => single(format!(
            "{access}static func {name}(size: CGFloat) -> UIFont? {{ UIFont(name: {}, size: size) }}",
            string_literal(font_name)
        )),
        Payload::String(payload) if payload.args.is_empty() => single(format!(
            "{access}static var {name}: String {{ NSLocalizedString({}, tableName: {}, bundle: {bundle}, comment: \"\") }}",
            string_literal(&payload.key),
            string_literal(&payload.table)
        )),
        // Formatted strings take Swift-typed arguments.
        Payload::String(_) => None,
        Payload::File {
            name: file,
            extension,
        } => single(format!(
            "{access}static var {name}: URL? {{ {bundle}.url(forResource: {}, withExtension: {}) }}",
            string_literal(file),
            extension
                .as_deref()
                .map(string_literal)
                .unwrap_or_else(|| "nil".to_string())
        )),
        Payload::Nib { name: nib, .. } => single(format!(
            "{access}static var {name}: UINib {{ UINib(nibName: {}, bundle: {bundle}) }}",
            string_literal(nib)
        )),
        Payload::Storyboard {
            name: storyboard, ..
        } => single(format!(
            "{access}static var {name}: UIStoryboard {{ UIStoryboard(name: {}, bundle: {bundle}) }}",
            string_literal(storyboard)
        )),
        Payload::ReuseIdentifier { identifier, .. } => single(format!(
            "{access}static let {name}: String = {}",
            string_literal(identifier)
        )),
        Payload::Value(value) => {
            let (ty, literal) = match value {
                ScalarValue::String(s) => ("String", string_literal(s)),
                ScalarValue::Bool(b) => ("Bool", b.to_string()),
                ScalarValue::Integer(i) => ("Int", i.to_string()),
                ScalarValue::Real(r) => ("Double", real_literal(*r)),
            };
            single(format!("{access}static let {name}: {ty} = {literal}"))
        }
        Payload::Identifier { value } => single(format!(
            "{access}static let {name}: String = {}",
            string_literal(value)
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::{FormatArg, ResourceKind, StringPayload};

    fn string(key: &str, args: Vec<FormatArg>) -> Member {
        Member::new(
            key,
            ResourceKind::String,
            Payload::String(StringPayload {
                table: "Localizable".to_string(),
                key: key.to_string(),
                locales: vec!["en".to_string()],
                args,
                value: None,
                comment: None,
            }),
        )
    }

    #[test]
    fn test_legacy_mirror() {
        let mut root = Group::root("R");
        let mut images = Group::new("image");
        images.push_member(Member::new(
            "icon",
            ResourceKind::Image,
            Payload::Image {
                name: "icon".to_string(),
            },
        ));
        root.push_group(images);

        let mut w = SwiftWriter::new();
        emit_root(&mut w, &root, "_R");
        let out = w.finish();

        assert!(out.starts_with("@objcMembers\nfinal class RObjc: NSObject {\n"));
        assert!(out.contains("        try _R.validate()\n"));
        assert!(out.contains("    @objcMembers\n    final class image: NSObject {\n"));
        assert!(out.contains(
            "static var icon: UIImage? { UIImage(named: \"icon\", in: _R.hostingBundle, compatibleWith: nil) }"
        ));
    }

    #[test]
    fn test_formatted_strings_are_skipped() {
        assert!(member_lines(&string("title", vec![]), "_R").is_some());
        assert!(member_lines(&string("greeting", vec![FormatArg::Object]), "_R").is_none());
    }
}
