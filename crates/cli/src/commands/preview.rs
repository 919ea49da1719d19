use std::io::Write;
use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;

use certify_core::context::VariableContext;
use certify_core::substitution;

use super::load_template;

/// Render `template_path` against a context file, or sample data when no
/// context is given, and write the result to `out`.
pub fn run(
    template_path: &Path,
    context_path: Option<&Path>,
    date: Option<NaiveDate>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let template = load_template(template_path)?;

    let mut context = match context_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read context {}", path.display()))?;
            VariableContext::from_json(&json)?
        }
        None => VariableContext::sample(),
    };
    if let Some(date) = date {
        context = context.with_date(date);
    }

    let unresolved = substitution::unresolved_tokens(&template.content, &context);
    if !unresolved.is_empty() {
        tracing::warn!(tokens = ?unresolved, "Preview contains unresolved tokens");
    }

    writeln!(out, "{}", template.render(&context))?;
    Ok(())
}
