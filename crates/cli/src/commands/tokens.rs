use std::io::Write;
use std::path::Path;

use certify_core::substitution;

use super::load_template;

/// Write one `key<TAB>status` line per token used by the template.
pub fn run(template_path: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    let template = load_template(template_path)?;
    let unrecognized = substitution::unrecognized_tokens(&template.content);

    for key in substitution::extract_tokens(&template.content) {
        let status = if unrecognized.contains(&key) {
            "unrecognized"
        } else {
            "recognized"
        };
        writeln!(out, "{key}\t{status}")?;
    }
    Ok(())
}
