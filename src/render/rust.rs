//! render::rust
//!
//! Rust source output: one `pub const` per field. Meant to be pulled in
//! with `include!` or declared as a module.

use std::fmt::Write;

use chrono::SecondsFormat;

use super::{constants, Value, GENERATED_MARKER};
use crate::core::types::CommitMetadata;

pub(super) fn render(meta: &CommitMetadata) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "// {GENERATED_MARKER}");
    let _ = writeln!(out);
    for c in constants(meta) {
        let (ty, literal) = match c.value {
            Value::Str(s) => ("&str", format!("{s:?}")),
            Value::Bool(b) => ("bool", b.to_string()),
            Value::Int(n) => ("i64", n.to_string()),
        };
        let _ = writeln!(out, "pub const {}: {ty} = {literal};", c.rust_name);
    }
    let _ = writeln!(
        out,
        "pub const COMMIT_DATE_UNIX: i64 = {};",
        meta.commit_date_unix
    );
    let _ = writeln!(
        out,
        "pub const COMMIT_DATE: &str = {:?};",
        meta.commit_date.to_rfc3339_opts(SecondsFormat::Secs, true)
    );
    out
}
