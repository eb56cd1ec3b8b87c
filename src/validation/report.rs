//! Collision reports.

use std::fmt;

use crate::identifier::Escape;

use super::warning::Diagnostic;

/// Code for a colliding resource that was renamed.
pub const CODE_RENAMED: &str = "resgen::validate::renamed";
/// Code for a colliding resource that could not be renamed and was skipped.
pub const CODE_UNRESOLVED: &str = "resgen::validate::unresolved";
/// Code for a resource name that is a Swift keyword.
pub const CODE_RESERVED: &str = "resgen::validate::reserved-identifier";
/// Code for a resource name with no identifier characters.
pub const CODE_EMPTY: &str = "resgen::validate::empty-identifier";
/// Code for a class name that cannot be used as a Swift type.
pub const CODE_INVALID_TYPE: &str = "resgen::validate::invalid-type-name";

/// What happened to one proposed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Kept under its proposed identifier.
    Kept { raw: String, ident: String },
    /// Same resource as a kept entry; dropped silently.
    DroppedIdentical { raw: String },
    /// Kept under a new identifier.
    Renamed { raw: String, from: String, to: String },
    /// Dropped because no unique identifier could be found. `lost` lists
    /// the members of a dropped group, as dotted raw-name paths.
    Dropped {
        raw: String,
        ident: String,
        lost: Vec<String>,
    },
    /// The sanitizer had to escape the name.
    Escaped {
        raw: String,
        ident: String,
        escape: Escape,
    },
}

/// The outcome of resolving one set of conflicting identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionReport {
    /// Dotted path of the group, e.g. `R.image.tabBar`.
    pub path: String,
    /// Raw names of every entry in the set, in input order.
    pub proposed: Vec<String>,
    pub resolutions: Vec<Resolution>,
}

impl CollisionReport {
    /// Raw names dropped without a warning.
    pub fn silently_dropped(&self) -> impl Iterator<Item = &str> {
        self.resolutions.iter().filter_map(|r| match r {
            Resolution::DroppedIdentical { raw } => Some(raw.as_str()),
            _ => None,
        })
    }

    /// Raw names dropped with a warning.
    pub fn dropped(&self) -> impl Iterator<Item = &str> {
        self.resolutions.iter().filter_map(|r| match r {
            Resolution::Dropped { raw, .. } => Some(raw.as_str()),
            _ => None,
        })
    }

    /// Renames applied, as `(raw, new identifier)`.
    pub fn renamed(&self) -> impl Iterator<Item = (&str, &str)> {
        self.resolutions.iter().filter_map(|r| match r {
            Resolution::Renamed { raw, to, .. } => Some((raw.as_str(), to.as_str())),
            _ => None,
        })
    }

    /// Whether every entry ended up in the output or was an identical copy.
    pub fn is_resolved(&self) -> bool {
        self.dropped().next().is_none()
    }

    /// Warnings describing this report. Identical drops produce none.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let kept = self.resolutions.iter().find_map(|r| match r {
            Resolution::Kept { raw, .. } => Some(raw.as_str()),
            _ => None,
        });

        self.resolutions
            .iter()
            .filter_map(|resolution| match resolution {
                Resolution::Kept { .. } | Resolution::DroppedIdentical { .. } => None,
                Resolution::Renamed { raw, from, to } => Some(
                    Diagnostic::warning(
                        CODE_RENAMED,
                        format!(
                            "{}: '{}' would also be generated as '{}'{}; generated as '{}' instead",
                            self.path,
                            raw,
                            from,
                            conflicts_with(kept),
                            to
                        ),
                    )
                    .with_path(&self.path)
                    .with_help("Give the resources names that differ by more than case or punctuation"),
                ),
                Resolution::Dropped { raw, ident, lost } => Some(
                    Diagnostic::warning(
                        CODE_UNRESOLVED,
                        format!(
                            "{}: skipping '{}' because '{}' is already generated{}{}",
                            self.path,
                            raw,
                            ident,
                            conflicts_with(kept),
                            also_skipped(lost)
                        ),
                    )
                    .with_path(&self.path)
                    .with_help("Rename one of the conflicting resources"),
                ),
                Resolution::Escaped { raw, ident, escape } => {
                    let (code, reason) = match escape {
                        Escape::Reserved => (CODE_RESERVED, "is a Swift keyword"),
                        Escape::Empty => (CODE_EMPTY, "has no identifier characters"),
                        Escape::LeadingDigit => return None,
                    };
                    Some(
                        Diagnostic::warning(
                            code,
                            format!("{}: '{}' {}; generated as {}", self.path, raw, reason, ident),
                        )
                        .with_path(&self.path),
                    )
                }
            })
            .collect()
    }
}

fn conflicts_with(kept: Option<&str>) -> String {
    match kept {
        Some(raw) => format!(" for '{}'", raw),
        None => String::new(),
    }
}

fn also_skipped(lost: &[String]) -> String {
    if lost.is_empty() {
        return String::new();
    }
    let names: Vec<String> = lost.iter().map(|name| format!("'{name}'")).collect();
    format!(", along with {}", names.join(", "))
}

impl fmt::Display for CollisionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.proposed.join(", "))?;
        for resolution in &self.resolutions {
            match resolution {
                Resolution::Kept { raw, ident } => write!(f, "\n  kept {raw} as {ident}")?,
                Resolution::DroppedIdentical { raw } => {
                    write!(f, "\n  dropped {raw} (same resource)")?
                }
                Resolution::Renamed { raw, to, .. } => write!(f, "\n  renamed {raw} to {to}")?,
                Resolution::Dropped { raw, ident, lost } if lost.is_empty() => {
                    write!(f, "\n  dropped {raw} ({ident} is taken)")?
                }
                Resolution::Dropped { raw, ident, lost } => write!(
                    f,
                    "\n  dropped {raw} ({ident} is taken) with {}",
                    lost.join(", ")
                )?,
                Resolution::Escaped { raw, ident, .. } => {
                    write!(f, "\n  escaped {raw} as {ident}")?
                }
            }
        }
        Ok(())
    }
}
