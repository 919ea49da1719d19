pub mod issue;
pub mod preview;
pub mod tokens;

use std::path::Path;

use anyhow::Context;
use chrono::Utc;

use certify_core::template::{validate_template_content, CertificateTemplate};

/// Load a template markup file as an unsaved template named after the file.
pub fn load_template(path: &Path) -> anyhow::Result<CertificateTemplate> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read template {}", path.display()))?;
    validate_template_content(&content)?;

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "template".into());
    let now = Utc::now();

    Ok(CertificateTemplate {
        id: 0,
        name,
        content,
        created_at: now,
        updated_at: now,
    })
}
