//! render
//!
//! Turns a [`CommitMetadata`] record into the text of the generated file.
//!
//! # Formats
//!
//! - [`OutputFormat::Go`] - a Go source file with a `const` block and a
//!   `time.Time` variable
//! - [`OutputFormat::Rust`] - a Rust module of `pub const` items
//! - [`OutputFormat::Json`] - the serialized metadata record
//!
//! # Determinism
//!
//! Rendering is a pure function of its inputs. The same metadata always
//! produces the same bytes, so regenerating in an unchanged repository
//! leaves the file identical.

mod go;
mod json;
mod rust;

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::{CommitMetadata, RepositoryKind};

/// First line of every generated source file.
pub const GENERATED_MARKER: &str = "Code generated by verstamp. DO NOT EDIT.";

/// Errors from rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The package name cannot be used in the target language.
    #[error("invalid package name '{0}': must be a Go identifier and not a keyword")]
    InvalidPackage(String),

    /// Serialization failed.
    #[error("failed to serialize metadata: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Generated file format.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Go source file.
    #[default]
    Go,
    /// Rust source file.
    Rust,
    /// JSON document.
    Json,
}

impl OutputFormat {
    /// Infer the format from an output path's extension.
    ///
    /// Returns `None` for extensions without a dedicated format.
    ///
    /// ```
    /// use verstamp::render::OutputFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(OutputFormat::from_path(Path::new("src/version.rs")), Some(OutputFormat::Rust));
    /// assert_eq!(OutputFormat::from_path(Path::new("version.txt")), None);
    /// ```
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "go" => Some(OutputFormat::Go),
            "rs" => Some(OutputFormat::Rust),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Go => "go",
            OutputFormat::Rust => "rust",
            OutputFormat::Json => "json",
        })
    }
}

/// A typed constant value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// String literal.
    Str(String),
    /// Boolean literal.
    Bool(bool),
    /// Integer literal.
    Int(i64),
}

/// One named constant in a generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant {
    /// Exported Go name.
    pub go_name: &'static str,
    /// Rust `const` name.
    pub rust_name: &'static str,
    /// Value.
    pub value: Value,
}

impl Constant {
    fn new(go_name: &'static str, rust_name: &'static str, value: Value) -> Self {
        Self {
            go_name,
            rust_name,
            value,
        }
    }
}

/// The backend-specific constants, in output order.
///
/// The commit date is not included; each format renders it separately.
pub fn constants(meta: &CommitMetadata) -> Vec<Constant> {
    let tag = Constant::new("CommitTag", "COMMIT_TAG", Value::Str(meta.tag.clone()));
    let exact = Constant::new(
        "CommitTagIsExact",
        "COMMIT_TAG_IS_EXACT",
        Value::Bool(meta.tag_is_exact),
    );
    let revno = Constant::new(
        "RevNo",
        "REV_NO",
        Value::Int(meta.revision_number.unwrap_or(0)),
    );

    match meta.kind {
        RepositoryKind::Git => vec![
            Constant::new(
                "CommitHashShort",
                "COMMIT_HASH_SHORT",
                Value::Str(meta.short_hash.clone()),
            ),
            Constant::new(
                "CommitHashLong",
                "COMMIT_HASH_LONG",
                Value::Str(meta.hash.clone()),
            ),
            tag,
            exact,
        ],
        RepositoryKind::Bazaar => vec![
            revno,
            Constant::new("RevisionId", "REVISION_ID", Value::Str(meta.hash.clone())),
            tag,
            exact,
        ],
        RepositoryKind::Mercurial => vec![
            tag,
            revno,
            Constant::new("CommitHash", "COMMIT_HASH", Value::Str(meta.hash.clone())),
            exact,
        ],
    }
}

/// Render `meta` in `format`.
///
/// `package` is the Go package clause; other formats ignore it.
pub fn render(
    format: OutputFormat,
    package: &str,
    meta: &CommitMetadata,
) -> Result<String, RenderError> {
    match format {
        OutputFormat::Go => go::render(package, meta),
        OutputFormat::Rust => Ok(rust::render(meta)),
        OutputFormat::Json => json::render(meta),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            OutputFormat::from_path(Path::new("./version.go")),
            Some(OutputFormat::Go)
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("out/meta.json")),
            Some(OutputFormat::Json)
        );
        assert_eq!(OutputFormat::from_path(Path::new("VERSION")), None);
    }

    #[test]
    fn git_constants_order() {
        let meta = CommitMetadata::empty(RepositoryKind::Git);
        let names: Vec<_> = constants(&meta).iter().map(|c| c.go_name).collect();
        assert_eq!(
            names,
            vec![
                "CommitHashShort",
                "CommitHashLong",
                "CommitTag",
                "CommitTagIsExact"
            ]
        );
    }

    #[test]
    fn bzr_constants_order() {
        let meta = CommitMetadata::empty(RepositoryKind::Bazaar);
        let names: Vec<_> = constants(&meta).iter().map(|c| c.go_name).collect();
        assert_eq!(
            names,
            vec!["RevNo", "RevisionId", "CommitTag", "CommitTagIsExact"]
        );
    }

    #[test]
    fn hg_constants_order() {
        let meta = CommitMetadata::empty(RepositoryKind::Mercurial);
        let names: Vec<_> = constants(&meta).iter().map(|c| c.go_name).collect();
        assert_eq!(
            names,
            vec!["CommitTag", "RevNo", "CommitHash", "CommitTagIsExact"]
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let mut meta = CommitMetadata::empty(RepositoryKind::Git);
        meta.hash = "abc".into();
        for format in [OutputFormat::Go, OutputFormat::Rust, OutputFormat::Json] {
            let a = render(format, "main", &meta).unwrap();
            let b = render(format, "main", &meta).unwrap();
            assert_eq!(a, b, "{format}");
        }
    }
}
