//! Line-oriented Swift source writer.

const INDENT: &str = "    ";

/// Accumulates indented source lines.
#[derive(Debug, Default)]
pub struct SwiftWriter {
    lines: Vec<String>,
    depth: usize,
}

impl SwiftWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push one line at the current depth. Empty text pushes a blank line.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if text.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines.push(format!("{}{}", INDENT.repeat(self.depth), text));
        }
    }

    pub fn blank(&mut self) {
        if self.lines.last().is_some_and(|l| !l.is_empty()) {
            self.lines.push(String::new());
        }
    }

    /// Push `header {` and indent.
    pub fn open(&mut self, header: impl AsRef<str>) {
        self.line(format!("{} {{", header.as_ref()));
        self.depth += 1;
    }

    /// Dedent and push `}`.
    pub fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    /// Push `/// text` for every line of `text`.
    pub fn doc(&mut self, text: &str) {
        for line in text.lines() {
            if line.trim().is_empty() {
                self.line("///");
            } else {
                self.line(format!("/// {}", line.trim_end()));
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The source text, newline terminated.
    pub fn finish(self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

/// Quote `value` as a Swift string literal.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() => out.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Swift literal for a floating point value.
pub fn real_literal(value: f64) -> String {
    if value.is_nan() {
        "Double.nan".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Double.infinity".to_string()
        } else {
            "-Double.infinity".to_string()
        }
    } else {
        format!("{value:?}")
    }
}

/// Make `text` safe inside a `//` or `///` comment line.
pub fn comment_text(text: &str) -> String {
    text.replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_indents_blocks() {
        let mut w = SwiftWriter::new();
        w.open("struct R");
        w.open("struct image");
        w.line("static let a = 1");
        w.close();
        w.close();
        assert_eq!(
            w.finish(),
            "struct R {\n    struct image {\n        static let a = 1\n    }\n}\n"
        );
    }

    #[test]
    fn test_blank_never_doubles() {
        let mut w = SwiftWriter::new();
        w.blank();
        w.line("a");
        w.blank();
        w.blank();
        w.line("b");
        assert_eq!(w.finish(), "a\n\nb\n");
    }

    #[test]
    fn test_doc_lines() {
        let mut w = SwiftWriter::new();
        w.doc("first\n\nsecond");
        assert_eq!(w.finish(), "/// first\n///\n/// second\n");
    }

    #[test]
    fn test_string_literal_escapes() {
        assert_eq!(string_literal("plain"), "\"plain\"");
        assert_eq!(string_literal("say \"hi\"\n"), "\"say \\\"hi\\\"\\n\"");
        assert_eq!(string_literal("a\\b"), "\"a\\\\b\"");
    }

    #[test]
    fn test_real_literal() {
        assert_eq!(real_literal(1.0), "1.0");
        assert_eq!(real_literal(0.25), "0.25");
        assert_eq!(real_literal(f64::NAN), "Double.nan");
        assert_eq!(real_literal(f64::NEG_INFINITY), "-Double.infinity");
    }
}
