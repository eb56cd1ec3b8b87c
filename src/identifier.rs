//! Identifier sanitization.
//!
//! Every accessor name in the generated code comes from a raw, user-authored
//! resource name. [`sanitize`] turns any such name into a Swift identifier
//! using one fixed rule set:
//!
//! - every character outside `[A-Za-z0-9_]` is a word separator and is dropped
//! - words are joined lower camel case (`Roboto-Bold` → `robotoBold`), a leading
//!   acronym is lowered as a unit (`URL` → `url`, `HTTPHeader` → `httpHeader`)
//! - a leading digit gets an `_` prefix (`2x` → `_2x`)
//! - an empty result becomes `_unnamed`
//! - a Swift keyword is kept and emitted in backticks (`default` → `` `default` ``)
//!
//! Sanitizing never fails. Uniqueness between siblings is not guaranteed here;
//! that is the validator's job.

use std::fmt;

/// Name used when nothing identifier-like survives sanitization.
pub const UNNAMED: &str = "_unnamed";

/// Swift keywords that need backtick escaping when used as identifiers.
pub const SWIFT_RESERVED: &[&str] = &[
    "Any", "Protocol", "Self", "Type", "as", "associatedtype", "await", "break", "case", "catch",
    "class", "continue", "default", "defer", "deinit", "do", "else", "enum", "extension",
    "fallthrough", "false", "fileprivate", "for", "func", "guard", "if", "import", "in", "init",
    "inout", "internal", "is", "let", "nil", "open", "operator", "precedencegroup", "private",
    "protocol", "public", "repeat", "rethrows", "return", "self", "static", "struct", "subscript",
    "super", "switch", "throw", "throws", "true", "try", "typealias", "var", "where", "while",
];

/// Why the sanitizer had to escape a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Escape {
    /// The name started with a digit and got an `_` prefix.
    LeadingDigit,
    /// Nothing identifier-like was left; replaced by [`UNNAMED`].
    Empty,
    /// The name is a Swift keyword and is emitted in backticks.
    Reserved,
}

/// A sanitized, code-safe name.
///
/// `Display` renders the identifier exactly as it must appear in Swift source,
/// including backticks for reserved words.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier {
    name: String,
    escape: Option<Escape>,
}

impl Identifier {
    /// The bare identifier text, without backticks.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// The escape the sanitizer applied, if any.
    pub fn escape(&self) -> Option<Escape> {
        self.escape
    }

    /// Key used for sibling collision detection. Collisions are case-insensitive.
    pub fn collision_key(&self) -> String {
        self.name.to_ascii_lowercase()
    }

    /// Append a discriminator word, re-applying the sanitizer rules.
    ///
    /// `icon.with_suffix("Dark Assets")` → `iconDarkAssets`.
    pub fn with_suffix(&self, suffix: &str) -> Identifier {
        let words: String = split_words(suffix)
            .into_iter()
            .map(upper_first)
            .collect();
        if words.is_empty() {
            return self.clone();
        }
        let base = match self.escape {
            Some(Escape::Empty) => "unnamed",
            _ => self.name.as_str(),
        };
        finish(format!("{base}{words}"))
    }
}

#[cfg(test)]
impl Identifier {
    /// Build an identifier without sanitizing it.
    pub(crate) fn unchecked(name: &str) -> Identifier {
        Identifier {
            name: name.to_string(),
            escape: None,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.escape {
            Some(Escape::Reserved) => write!(f, "`{}`", self.name),
            _ => write!(f, "{}", self.name),
        }
    }
}

/// Convert an arbitrary resource name into a valid Swift identifier.
pub fn sanitize(raw: &str) -> Identifier {
    let words = split_words(raw);
    let mut joined = String::new();
    for (i, word) in words.into_iter().enumerate() {
        if i == 0 {
            joined.push_str(&lower_first(word));
        } else {
            joined.push_str(&upper_first(word));
        }
    }
    finish(joined)
}

/// Word appended to root type names that would otherwise be keywords.
pub const TYPE_NAME_SUFFIX: &str = "Resources";

/// Convert a resource name into an upper camel case type name.
///
/// Used for the namespace roots: `R` stays `R`, `my resources` → `MyResources`.
/// Keywords cannot name a struct even in backticks, so `self` → `SelfResources`.
pub fn sanitize_type_name(raw: &str) -> Identifier {
    let id = sanitize(raw);
    if id.escape == Some(Escape::Empty) {
        return id;
    }
    let id = finish(upper_first(&id.name));
    if id.escape == Some(Escape::Reserved) {
        return Identifier {
            name: format!("{}{TYPE_NAME_SUFFIX}", id.name),
            escape: None,
        };
    }
    id
}

/// Check that `name` matches the identifier grammar the emitter relies on.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    if name.chars().all(|c| c == '_') {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Check that `name` can be used as a Swift type, optionally module
/// qualified (`ProfileCell`, `MyApp.ProfileCell`).
pub fn is_valid_type_name(name: &str) -> bool {
    name.split('.')
        .all(|segment| is_valid_identifier(segment) && !is_reserved(segment))
}

/// Whether `name` is a Swift keyword.
pub fn is_reserved(name: &str) -> bool {
    SWIFT_RESERVED.contains(&name)
}

fn finish(joined: String) -> Identifier {
    if joined.chars().all(|c| c == '_') {
        return Identifier {
            name: UNNAMED.to_string(),
            escape: Some(Escape::Empty),
        };
    }
    if joined.starts_with(|c: char| c.is_ascii_digit()) {
        return Identifier {
            name: format!("_{joined}"),
            escape: Some(Escape::LeadingDigit),
        };
    }
    let escape = is_reserved(&joined).then_some(Escape::Reserved);
    Identifier {
        name: joined,
        escape,
    }
}

fn split_words(raw: &str) -> Vec<&str> {
    raw.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty())
        .collect()
}

fn lower_first(word: &str) -> String {
    if !word.chars().any(|c| c.is_ascii_lowercase()) {
        return word.to_ascii_lowercase();
    }

    let upper_run = word
        .chars()
        .take_while(|c| c.is_ascii_uppercase())
        .count();
    // Keep the last capital of an acronym run: it starts the next word.
    let lower_count = if upper_run > 1 { upper_run - 1 } else { upper_run };

    word.chars()
        .enumerate()
        .map(|(i, c)| if i < lower_count { c.to_ascii_lowercase() } else { c })
        .collect()
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_simple() {
        assert_eq!(sanitize("icon").as_str(), "icon");
        assert_eq!(sanitize("Icon").as_str(), "icon");
        assert_eq!(sanitize("Roboto-Bold").as_str(), "robotoBold");
    }

    #[test]
    fn test_sanitize_separators() {
        assert_eq!(sanitize("settings icon.large").as_str(), "settingsIconLarge");
        assert_eq!(sanitize("tab/home").as_str(), "tabHome");
        assert_eq!(sanitize("snake_case_name").as_str(), "snake_case_name");
    }

    #[test]
    fn test_sanitize_acronyms() {
        assert_eq!(sanitize("URL").as_str(), "url");
        assert_eq!(sanitize("HTTPHeader").as_str(), "httpHeader");
        assert_eq!(sanitize("App-HD").as_str(), "appHD");
    }

    #[test]
    fn test_sanitize_leading_digit() {
        let id = sanitize("2x-arrow");
        assert_eq!(id.as_str(), "_2xArrow");
        assert_eq!(id.escape(), Some(Escape::LeadingDigit));

        assert_eq!(sanitize("123").as_str(), "_123");
    }

    #[test]
    fn test_sanitize_empty() {
        for raw in ["", "   ", "---", "_", "__", "ÄÖÜ"] {
            let id = sanitize(raw);
            assert_eq!(id.as_str(), UNNAMED, "raw: {raw:?}");
            assert_eq!(id.escape(), Some(Escape::Empty));
        }
    }

    #[test]
    fn test_sanitize_reserved() {
        let id = sanitize("default");
        assert_eq!(id.as_str(), "default");
        assert_eq!(id.escape(), Some(Escape::Reserved));
        assert_eq!(id.to_string(), "`default`");

        // Camel-casing happens before the keyword check
        assert_eq!(sanitize("Self").escape(), Some(Escape::Reserved));
        assert_eq!(sanitize("Self").as_str(), "self");
        assert_eq!(sanitize("Self").to_string(), "`self`");
    }

    #[test]
    fn test_sanitize_non_ascii_and_whitespace() {
        assert_eq!(sanitize("café au lait").as_str(), "cafAuLait");
        assert_eq!(sanitize("\tnew\nline ").as_str(), "newLine");
    }

    #[test]
    fn test_sanitize_is_total() {
        let inputs = [
            "", "0", "9lives", "class", "Type", " ", "\u{1F600}", "a-b-c", "---x", "x---",
            "_private", "ÄÖÜ", "日本語", "ok",
        ];
        for raw in inputs {
            let id = sanitize(raw);
            assert!(!id.as_str().is_empty(), "raw: {raw:?}");
            assert!(is_valid_identifier(id.as_str()), "raw: {raw:?} -> {id}");
        }
    }

    #[test]
    fn test_sanitize_type_name() {
        assert_eq!(sanitize_type_name("R").as_str(), "R");
        assert_eq!(sanitize_type_name("my resources").as_str(), "MyResources");
        assert_eq!(sanitize_type_name("").as_str(), UNNAMED);
    }

    #[test]
    fn test_sanitize_type_name_keywords_get_suffix() {
        for (raw, expected) in [
            ("self", "SelfResources"),
            ("type", "TypeResources"),
            ("any", "AnyResources"),
            ("Protocol", "ProtocolResources"),
        ] {
            let id = sanitize_type_name(raw);
            assert_eq!(id.as_str(), expected);
            assert_eq!(id.escape(), None);
            assert_eq!(id.to_string(), expected);
        }
    }

    #[test]
    fn test_identifiers_order_by_name_then_escape() {
        let mut ids = vec![sanitize("b"), sanitize("default"), sanitize("a")];
        ids.sort();
        let names: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "default"]);
    }

    #[test]
    fn test_with_suffix() {
        let id = sanitize("icon");
        assert_eq!(id.with_suffix("Dark Assets").as_str(), "iconDarkAssets");
        assert_eq!(id.with_suffix("image").as_str(), "iconImage");
        assert_eq!(id.with_suffix("--").as_str(), "icon");
        assert_eq!(sanitize("").with_suffix("main").as_str(), "unnamedMain");
    }

    #[test]
    fn test_collision_key_ignores_case() {
        assert_eq!(sanitize("appHD").collision_key(), sanitize("appHd").collision_key());
    }

    #[test]
    fn test_is_valid_type_name() {
        assert!(is_valid_type_name("ProfileCell"));
        assert!(is_valid_type_name("MyApp.ProfileCell"));
        assert!(!is_valid_type_name(""));
        assert!(!is_valid_type_name("Profile Cell"));
        assert!(!is_valid_type_name("Cell<T>"));
        assert!(!is_valid_type_name("MyApp..Cell"));
        assert!(!is_valid_type_name("Self"));
    }

    #[test]
    fn test_is_valid_identifier() {
        assert!(is_valid_identifier("icon"));
        assert!(is_valid_identifier("_2x"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("_"));
        assert!(!is_valid_identifier("2x"));
        assert!(!is_valid_identifier("a-b"));
    }
}
