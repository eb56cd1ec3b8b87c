//! Swift source emission.
//!
//! Serializes a validated [`Namespace`] into generated source text. The same
//! tree and options always produce the same bytes: there are no timestamps,
//! and every collection walked here is already ordered.
//!
//! ```text
//! header
//! imports            derived from the declared members
//! struct R { ... }   external tier
//! struct _R { ... }  internal tier
//! class RObjc { ...} legacy interop, when enabled
//! unused image report, when requested
//! ```

mod external;
mod imports;
mod internal;
mod legacy;
mod swift;
mod unused;

pub use imports::{required_imports, RUNTIME_MODULE};
pub use legacy::legacy_name;
pub use swift::{string_literal, SwiftWriter};
pub use unused::unused_images;

use crate::namespace::{Group, Member, Namespace};

/// First line of every generated file.
pub const HEADER: &str = "// This is a generated file, do not edit!";

/// Which surface to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitMode {
    /// Every accessor, the internal tier and optional extras.
    Full,
    /// Identifier accessors only, for UI test targets.
    UiTest,
}

/// Extras for [`EmitMode::Full`]. Ignored in UI test mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitOptions {
    /// Emit the `@objcMembers` mirror.
    pub legacy_interop: bool,
    /// Image names to list as unused, already computed and sorted.
    pub unused_images: Option<Vec<String>>,
}

/// Serialize `namespace` in `mode`.
pub fn emit(namespace: &Namespace, mode: EmitMode, options: &EmitOptions) -> String {
    match mode {
        EmitMode::Full => emit_full(namespace, options),
        EmitMode::UiTest => emit_uitest(namespace),
    }
}

fn header(w: &mut SwiftWriter) {
    w.line("//");
    w.line(HEADER);
    w.line("// Generated by resgen");
    w.line("//");
}

fn emit_full(namespace: &Namespace, options: &EmitOptions) -> String {
    let root = &namespace.root;
    let internal = namespace.internal_name();

    let mut w = SwiftWriter::new();
    header(&mut w);
    w.blank();
    for module in required_imports(root, options.legacy_interop) {
        w.line(format!("import {module}"));
    }

    w.blank();
    external::emit_group(&mut w, root, &internal);

    w.blank();
    internal::emit_root(&mut w, root, &internal);

    if options.legacy_interop {
        w.blank();
        legacy::emit_root(&mut w, root, &internal);
    }

    if let Some(unused) = &options.unused_images {
        let lines = unused::report_lines(unused);
        if !lines.is_empty() {
            w.blank();
            for line in lines {
                w.line(line);
            }
        }
    }

    w.finish()
}

fn emit_uitest(namespace: &Namespace) -> String {
    let surface = uitest_surface(&namespace.root);

    let mut w = SwiftWriter::new();
    header(&mut w);
    w.blank();
    external::emit_group(&mut w, &surface, &namespace.internal_name());
    w.finish()
}

/// The external tree restricted to identifier members.
pub fn uitest_surface(root: &Group) -> Group {
    root.filtered(&|m: &Member| m.origin.is_identifier_kind())
}
