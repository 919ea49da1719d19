use std::io::Write;
use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;

use certify_core::certificate::{issue_certificates, IssueBatch};

use super::load_template;

/// Outcome of an issue run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueSummary {
    pub written: usize,
    /// Certificates that still contain literal tokens.
    pub with_unresolved: usize,
}

/// Render the template for every participant in `data_path` and write one
/// file each into `out_dir`.
pub fn run(
    template_path: &Path,
    data_path: &Path,
    out_dir: &Path,
    extension: &str,
    issued_on: NaiveDate,
    out: &mut impl Write,
) -> anyhow::Result<IssueSummary> {
    let template = load_template(template_path)?;

    let json = std::fs::read_to_string(data_path)
        .with_context(|| format!("Failed to read batch {}", data_path.display()))?;
    let batch: IssueBatch = serde_json::from_str(&json)
        .with_context(|| format!("Invalid batch file {}", data_path.display()))?;

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let certificates = issue_certificates(&template, &batch, issued_on, extension);
    let mut summary = IssueSummary {
        written: 0,
        with_unresolved: 0,
    };

    for certificate in &certificates {
        let path = out_dir.join(&certificate.file_name);
        std::fs::write(&path, &certificate.content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        summary.written += 1;
        if !certificate.unresolved.is_empty() {
            summary.with_unresolved += 1;
        }
    }

    tracing::info!(
        written = summary.written,
        with_unresolved = summary.with_unresolved,
        out_dir = %out_dir.display(),
        "Certificates issued",
    );
    writeln!(
        out,
        "Issued {} certificate(s) to {}",
        summary.written,
        out_dir.display()
    )?;
    if summary.with_unresolved > 0 {
        writeln!(
            out,
            "{} certificate(s) contain unresolved tokens",
            summary.with_unresolved
        )?;
    }
    Ok(summary)
}
