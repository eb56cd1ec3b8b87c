//! External tier: the accessors callers use.

use crate::namespace::{Group, Member, Payload, ScalarValue, StringPayload};

use super::swift::{comment_text, real_literal, string_literal, SwiftWriter};

/// Emit `group` as a struct hierarchy. `internal` names the internal root
/// that support records are looked up on.
pub fn emit_group(w: &mut SwiftWriter, group: &Group, internal: &str) {
    w.open(format!("{}struct {}", group.access.prefix(), group.ident));

    let mut first = true;
    for member in &group.members {
        if !first {
            w.blank();
        }
        first = false;
        emit_member(w, member, internal);
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

fn emit_member(w: &mut SwiftWriter, member: &Member, internal: &str) {
    let access = member.access.prefix();
    let name = &member.ident;
    let bundle = format!("{internal}.hostingBundle");

    match &member.payload {
        Payload::Image { name: asset } => {
            w.doc(&format!("Image `{}`.", comment_text(asset)));
            w.line(format!(
                "{access}static let {name} = ImageResource(name: {}, bundle: {bundle})",
                string_literal(asset)
            ));
        }
        Payload::Color { name: asset } => {
            w.doc(&format!("Color `{}`.", comment_text(asset)));
            w.line(format!(
                "{access}static let {name} = ColorResource(name: {}, bundle: {bundle})",
                string_literal(asset)
            ));
        }
        Payload::Font { font_name } => {
            w.doc(&format!("Font `{}`.", comment_text(font_name)));
            w.line(format!(
                "{access}static let {name} = FontResource(fontName: {})",
                string_literal(font_name)
            ));
        }
        Payload::String(payload) => emit_string(w, member, payload, internal),
        Payload::File {
            name: file,
            extension,
        } => {
            let full = match extension {
                Some(ext) => format!("{file}.{ext}"),
                None => file.clone(),
            };
            w.doc(&format!("Resource file `{}`.", comment_text(&full)));
            w.line(format!(
                "{access}static let {name} = FileResource(name: {}, pathExtension: {}, bundle: {bundle})",
                string_literal(file),
                string_literal(extension.as_deref().unwrap_or(""))
            ));
        }
        Payload::Nib {
            name: nib,
            root_view,
        } => {
            match root_view {
                Some(view) => w.doc(&format!(
                    "Nib `{}`, root view `{}`.",
                    comment_text(nib),
                    comment_text(view)
                )),
                None => w.doc(&format!("Nib `{}`.", comment_text(nib))),
            }
            w.line(format!(
                "{access}static let {name} = NibResource(name: {}, bundle: {bundle})",
                string_literal(nib)
            ));
        }
        Payload::Storyboard {
            name: storyboard,
            initial_view_controller,
        } => {
            match initial_view_controller {
                Some(vc) => w.doc(&format!(
                    "Storyboard `{}`, initial view controller `{}`.",
                    comment_text(storyboard),
                    comment_text(vc)
                )),
                None => w.doc(&format!("Storyboard `{}`.", comment_text(storyboard))),
            }
            w.line(format!(
                "{access}static let {name} = StoryboardResource(name: {}, bundle: {bundle})",
                string_literal(storyboard)
            ));
        }
        Payload::ReuseIdentifier { identifier, class } => {
            w.doc(&format!("Reuse identifier `{}`.", comment_text(identifier)));
            w.line(format!(
                "{access}static let {name} = ReuseIdentifier<{class}>(identifier: {})",
                string_literal(identifier)
            ));
        }
        Payload::Value(value) => {
            w.line(format!(
                "{access}static let {name}: {} = {}",
                scalar_type(value),
                scalar_literal(value)
            ));
        }
        Payload::Identifier { value } => {
            w.line(format!(
                "{access}static let {name}: String = {}",
                string_literal(value)
            ));
        }
    }
}

fn emit_string(w: &mut SwiftWriter, member: &Member, payload: &StringPayload, internal: &str) {
    let access = member.access.prefix();
    let name = &member.ident;
    let key = string_literal(&payload.key);
    let table = string_literal(&payload.table);

    if let Some(value) = &payload.value {
        w.doc(&format!("Value: {}", comment_text(value)));
    }
    if let Some(comment) = &payload.comment {
        w.doc(&format!("Comment: {}", comment_text(comment)));
    }
    if !payload.locales.is_empty() {
        w.doc(&format!("Locales: {}", payload.locales.join(", ")));
    }

    if payload.args.is_empty() {
        let locales = payload
            .locales
            .iter()
            .map(|l| string_literal(l))
            .collect::<Vec<_>>()
            .join(", ");
        w.line(format!(
            "{access}static let {name} = StringResource(key: {key}, tableName: {table}, bundle: {internal}.hostingBundle, locales: [{locales}])"
        ));
        return;
    }

    let params = payload
        .args
        .iter()
        .enumerate()
        .map(|(i, arg)| format!("_ value{}: {}", i + 1, arg.swift_type()))
        .collect::<Vec<_>>()
        .join(", ");
    let values = (1..=payload.args.len())
        .map(|i| format!("value{i}"))
        .collect::<Vec<_>>()
        .join(", ");

    w.open(format!("{access}static func {name}({params}) -> String"));
    w.line(format!(
        "let format = NSLocalizedString({key}, tableName: {table}, bundle: {internal}.hostingBundle, comment: \"\")"
    ));
    w.line(format!(
        "return String(format: format, locale: {internal}.applicationLocale, {values})"
    ));
    w.close();
}

fn scalar_type(value: &ScalarValue) -> &'static str {
    match value {
        ScalarValue::String(_) => "String",
        ScalarValue::Bool(_) => "Bool",
        ScalarValue::Integer(_) => "Int",
        ScalarValue::Real(_) => "Double",
    }
}

fn scalar_literal(value: &ScalarValue) -> String {
    match value {
        ScalarValue::String(s) => string_literal(s),
        ScalarValue::Bool(b) => b.to_string(),
        ScalarValue::Integer(i) => i.to_string(),
        ScalarValue::Real(r) => real_literal(*r),
    }
}
