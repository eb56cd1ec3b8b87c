//! Terminal output for the resgen CLI.
//!
//! Status lines use a right-aligned verb column. Diagnostics are rendered
//! as `warning[code]: message` blocks with the namespace path and help text
//! underneath. Everything goes to stderr so `generate --stdout` stays clean.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::validation::{Diagnostic, Severity, ValidationResult};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

const VERB_WIDTH: usize = 12;

/// What happened to a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// The text changed and the file was rewritten.
    Written,
    /// The file already held the generated text.
    Unchanged,
    /// `--check`: the file differs from what would be generated.
    Stale,
    /// `--check`: the file matches.
    Fresh,
}

impl FileStatus {
    pub fn verb(self) -> &'static str {
        match self {
            FileStatus::Written => "Writing",
            FileStatus::Unchanged => "Unchanged",
            FileStatus::Stale => "Stale",
            FileStatus::Fresh => "Fresh",
        }
    }

    fn color(self) -> &'static str {
        match self {
            FileStatus::Written => GREEN,
            FileStatus::Unchanged | FileStatus::Fresh => CYAN,
            FileStatus::Stale => RED,
        }
    }
}

/// Status and diagnostic printer. Colour is on when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self::with_color(io::stderr().is_terminal())
    }

    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    /// e.g. "  Generating MyApp (3 record files found)"
    pub fn status(&self, verb: &str, message: &str) {
        self.emit(&self.status_line(GREEN, verb, message));
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.emit(&self.status_line(CYAN, verb, message));
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.emit(&self.status_line(YELLOW, verb, message));
    }

    /// Report the outcome for one generated file.
    pub fn file(&self, status: FileStatus, path: &Path) {
        self.emit(&self.status_line(status.color(), status.verb(), &display_path(path)));
    }

    /// Print every diagnostic followed by a one-line summary.
    pub fn diagnostics(&self, result: &ValidationResult) {
        for diagnostic in result.iter() {
            self.emit(&self.render_diagnostic(diagnostic));
        }
        self.emit(&self.summary(result));
    }

    /// Final line of a generate run.
    pub fn finished(&self, accessors: usize, warnings: usize) {
        let message = format!(
            "{}, {}",
            plural(accessors, "accessor", "accessors"),
            plural(warnings, "warning", "warnings")
        );
        let color = if warnings > 0 { YELLOW } else { GREEN };
        self.emit(&self.status_line(color, "Finished", &message));
    }

    fn render_diagnostic(&self, d: &Diagnostic) -> String {
        let color = match d.severity {
            Severity::Error => RED,
            Severity::Warning => YELLOW,
        };
        let mut out = format!(
            "{}[{}]: {}",
            self.paint(&[BOLD, color], &d.severity.to_string()),
            self.paint(&[BOLD], &d.code),
            d.message
        );
        if let Some(path) = &d.path {
            out.push_str(&format!(
                "\n  {} {}",
                self.paint(&[DIM], "-->"),
                self.paint(&[CYAN], path)
            ));
        }
        if let Some(help) = &d.help {
            out.push_str(&format!("\n  {} {}", self.paint(&[DIM], "help:"), help));
        }
        out
    }

    fn summary(&self, result: &ValidationResult) -> String {
        let errors = result.error_count();
        let warnings = plural(result.warning_count(), "warning", "warnings");
        if errors > 0 {
            let message = format!("{}, {}", plural(errors, "error", "errors"), warnings);
            self.status_line(RED, "Failed", &message)
        } else if result.has_warnings() {
            self.status_line(YELLOW, "Validated", &warnings)
        } else {
            self.status_line(CYAN, "Validated", "no naming conflicts")
        }
    }

    fn status_line(&self, color: &str, verb: &str, message: &str) -> String {
        if self.color {
            format!("{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}")
        } else {
            format!("{verb:>VERB_WIDTH$} {message}")
        }
    }

    fn paint(&self, styles: &[&str], text: &str) -> String {
        if self.color {
            format!("{}{text}{RESET}", styles.concat())
        } else {
            text.to_string()
        }
    }

    fn emit(&self, text: &str) {
        let _ = writeln!(io::stderr().lock(), "{text}");
    }
}

/// Pluralize a count: `plural(1, "accessor", "accessors")` → "1 accessor".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{CODE_RENAMED, CODE_UNRESOLVED};

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "accessor", "accessors"), "1 accessor");
        assert_eq!(plural(0, "warning", "warnings"), "0 warnings");
        assert_eq!(plural(5, "record file", "record files"), "5 record files");
    }

    #[test]
    fn test_display_path_absolute() {
        let p = Path::new("/nonexistent/path/to/file");
        assert_eq!(display_path(p), "/nonexistent/path/to/file");
    }

    #[test]
    fn test_render_diagnostic_plain() {
        let printer = Printer::with_color(false);
        let d = Diagnostic::warning(CODE_RENAMED, "renamed 'Icon' to 'iconAssets'")
            .with_path("R.image")
            .with_help("Rename one of the resources");

        assert_eq!(
            printer.render_diagnostic(&d),
            "warning[resgen::validate::renamed]: renamed 'Icon' to 'iconAssets'\n  \
             --> R.image\n  help: Rename one of the resources"
        );
    }

    #[test]
    fn test_render_diagnostic_coloured() {
        let printer = Printer::with_color(true);
        let d = Diagnostic::error(CODE_UNRESOLVED, "boom");
        let rendered = printer.render_diagnostic(&d);

        assert!(rendered.starts_with(&format!("{BOLD}{RED}error{RESET}")));
        assert!(!rendered.contains("-->"));
    }

    #[test]
    fn test_summary_counts() {
        let printer = Printer::with_color(false);

        let clean = ValidationResult::new();
        assert_eq!(printer.summary(&clean), "   Validated no naming conflicts");

        let mut warned = ValidationResult::new();
        warned.warning(CODE_RENAMED, "a");
        warned.warning(CODE_RENAMED, "b");
        assert_eq!(printer.summary(&warned), "   Validated 2 warnings");

        warned.error(CODE_UNRESOLVED, "c");
        assert_eq!(printer.summary(&warned), "      Failed 1 error, 2 warnings");
    }

    #[test]
    fn test_file_status_verbs() {
        let printer = Printer::with_color(false);
        assert_eq!(
            printer.status_line(FileStatus::Stale.color(), FileStatus::Stale.verb(), "R.swift"),
            "       Stale R.swift"
        );
        assert_eq!(FileStatus::Written.verb(), "Writing");
    }
}
