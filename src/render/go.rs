//! render::go
//!
//! Go source output, laid out the way gofmt would leave it.

use std::fmt::Write;

use super::{constants, RenderError, Value, GENERATED_MARKER};
use crate::core::types::CommitMetadata;

pub(super) fn render(package: &str, meta: &CommitMetadata) -> Result<String, RenderError> {
    if !is_identifier(package) {
        return Err(RenderError::InvalidPackage(package.to_string()));
    }

    let consts = constants(meta);
    let width = consts.iter().map(|c| c.go_name.len()).max().unwrap_or(0);

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "// {GENERATED_MARKER}");
    let _ = writeln!(out);
    let _ = writeln!(out, "package {package}");
    let _ = writeln!(out);
    let _ = writeln!(out, "import \"time\"");
    let _ = writeln!(out);
    let _ = writeln!(out, "const (");
    for c in &consts {
        let _ = writeln!(
            out,
            "\t{:<width$} = {}",
            c.go_name,
            literal(&c.value),
            width = width
        );
    }
    let _ = writeln!(out, ")");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "var CommitDate = time.Unix({}, 0)",
        meta.commit_date_unix
    );
    Ok(out)
}

fn literal(value: &Value) -> String {
    match value {
        Value::Str(s) => quote(s),
        Value::Bool(b) => b.to_string(),
        Value::Int(n) => n.to_string(),
    }
}

/// Go interpreted string literal for `s`.
pub(crate) fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\u{0b}' => out.push_str("\\v"),
            c if c.is_control() => {
                let n = c as u32;
                if n < 0x80 {
                    let _ = write!(out, "\\x{n:02x}");
                } else if n <= 0xffff {
                    let _ = write!(out, "\\u{n:04x}");
                } else {
                    let _ = write!(out, "\\U{n:08x}");
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Reserved words that cannot name a package.
const KEYWORDS: [&str; 25] = [
    "break", "case", "chan", "const", "continue", "default", "defer", "else",
    "fallthrough", "for", "func", "go", "goto", "if", "import", "interface",
    "map", "package", "range", "return", "select", "struct", "switch", "type",
    "var",
];

fn is_identifier(s: &str) -> bool {
    if KEYWORDS.contains(&s) {
        return false;
    }
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}
