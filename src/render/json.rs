//! render::json

use super::RenderError;
use crate::core::types::CommitMetadata;

pub(super) fn render(meta: &CommitMetadata) -> Result<String, RenderError> {
    let mut out = serde_json::to_string_pretty(meta)?;
    out.push('\n');
    Ok(out)
}
