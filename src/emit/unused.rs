//! Unused image report.

use std::collections::BTreeSet;

/// Image names declared but never referenced by a layout, sorted.
pub fn unused_images(declared: &BTreeSet<String>, used: &BTreeSet<String>) -> Vec<String> {
    declared.difference(used).cloned().collect()
}

/// Comment lines reporting `unused`. Empty when nothing is unused.
pub fn report_lines(unused: &[String]) -> Vec<String> {
    if unused.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![format!(
        "// Images not referenced by any layout ({}):",
        unused.len()
    )];
    lines.extend(
        unused
            .iter()
            .map(|name| format!("// - {}", super::swift::comment_text(name))),
    );
    lines
}
