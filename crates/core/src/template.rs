//! Certificate template model and validation.
//!
//! Template content is opaque markup with embedded tokens. Only its size is
//! checked; malformed markup is passed through to the renderer as-is.

use serde::{Deserialize, Serialize};

use crate::context::VariableContext;
use crate::error::CoreError;
use crate::substitution;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length for a template name in characters.
pub const MAX_TEMPLATE_NAME_LENGTH: usize = 200;

/// Maximum size of template content in bytes.
pub const MAX_TEMPLATE_CONTENT_LENGTH: usize = 200_000;

// ---------------------------------------------------------------------------
// Model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateTemplate {
    pub id: DbId,
    pub name: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CertificateTemplate {
    /// Render the stored content against `context`.
    pub fn render(&self, context: &VariableContext) -> String {
        substitution::substitute(&self.content, context)
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a template name: non-empty, no surrounding whitespace, and within
/// [`MAX_TEMPLATE_NAME_LENGTH`].
pub fn validate_template_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Template name must not be empty".to_string(),
        ));
    }
    if trimmed.len() != name.len() {
        return Err(CoreError::Validation(
            "Template name must not have leading or trailing whitespace".to_string(),
        ));
    }
    let len = name.chars().count();
    if len > MAX_TEMPLATE_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Template name exceeds maximum length of {MAX_TEMPLATE_NAME_LENGTH} characters (got {len})"
        )));
    }
    Ok(())
}

/// Validate template content: size check only (can be empty).
pub fn validate_template_content(content: &str) -> Result<(), CoreError> {
    if content.len() > MAX_TEMPLATE_CONTENT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Template content exceeds maximum size of {MAX_TEMPLATE_CONTENT_LENGTH} bytes (got {})",
            content.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::Utc;

    use super::*;

    // -- validate_template_name --

    #[test]
    fn valid_name_passes() {
        assert!(validate_template_name("Attendance Certificate").is_ok());
    }

    #[test]
    fn empty_name_rejected() {
        let err = validate_template_name("   ").unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn padded_name_rejected() {
        let err = validate_template_name(" Speaker ").unwrap_err();
        assert!(err.to_string().contains("leading or trailing whitespace"));
    }

    #[test]
    fn name_length_counts_characters() {
        let exact = "é".repeat(MAX_TEMPLATE_NAME_LENGTH);
        assert!(validate_template_name(&exact).is_ok());
        let long = "x".repeat(MAX_TEMPLATE_NAME_LENGTH + 1);
        assert_matches!(validate_template_name(&long), Err(CoreError::Validation(_)));
    }

    // -- validate_template_content --

    #[test]
    fn empty_and_malformed_content_pass() {
        assert!(validate_template_content("").is_ok());
        assert!(validate_template_content("<div><p>unclosed").is_ok());
    }

    #[test]
    fn oversized_content_rejected() {
        let long = "x".repeat(MAX_TEMPLATE_CONTENT_LENGTH + 1);
        let err = validate_template_content(&long).unwrap_err();
        assert!(err.to_string().contains("exceeds maximum size"));
    }

    // -- render --

    #[test]
    fn render_substitutes_content() {
        let now = Utc::now();
        let template = CertificateTemplate {
            id: 1,
            name: "Attendance".into(),
            content: "<p>{{participant.name}} attended {{event.name}}</p>".into(),
            created_at: now,
            updated_at: now,
        };
        let ctx = VariableContext::new()
            .with("participant", "name", "Ana")
            .with("event", "name", "DevConf");
        assert_eq!(template.render(&ctx), "<p>Ana attended DevConf</p>");
    }
}
