//! Template editor session.
//!
//! One session per opened template. The session owns the content history and
//! turns editor actions (typing, variable insertion, formatting) into recorded
//! snapshots. Pushing [`TemplateEditor::content`] into a rendering surface is
//! the caller's job.

use serde::{Deserialize, Serialize};

use crate::context::VariableContext;
use crate::error::CoreError;
use crate::history::ContentHistory;
use crate::substitution;
use crate::template::{validate_template_content, CertificateTemplate};
use crate::types::Timestamp;
use crate::variables;

/// Inline formatting applied to a selected byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatCommand {
    Bold,
    Italic,
    Underline,
}

impl FormatCommand {
    /// Opening and closing markup for this command.
    pub fn tags(&self) -> (&'static str, &'static str) {
        match self {
            Self::Bold => ("<strong>", "</strong>"),
            Self::Italic => ("<em>", "</em>"),
            Self::Underline => ("<u>", "</u>"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TemplateEditor {
    template: CertificateTemplate,
    history: ContentHistory,
}

impl TemplateEditor {
    /// Open a session seeded with the template's stored content.
    pub fn open(template: &CertificateTemplate) -> Self {
        tracing::debug!(template_id = template.id, "Opening template editor");
        Self {
            history: ContentHistory::new(template.content.as_str()),
            template: template.clone(),
        }
    }

    pub fn template(&self) -> &CertificateTemplate {
        &self.template
    }

    pub fn history(&self) -> &ContentHistory {
        &self.history
    }

    pub fn content(&self) -> &str {
        self.history.current_content()
    }

    pub fn is_dirty(&self) -> bool {
        self.history.is_dirty()
    }

    /// Record content typed by the user.
    pub fn edit(&mut self, content: impl Into<String>) {
        self.history.record(content);
    }

    /// Insert `{{namespace.field}}` at byte offset `position`.
    pub fn insert_variable(
        &mut self,
        position: usize,
        namespace: &str,
        field: &str,
    ) -> Result<(), CoreError> {
        let def = variables::require(namespace, field)?;
        let updated = substitution::insert_token(self.content(), position, def)?;
        self.history.record(updated);
        Ok(())
    }

    /// Wrap the byte range `start..end` in the command's markup.
    pub fn apply_format(
        &mut self,
        command: FormatCommand,
        start: usize,
        end: usize,
    ) -> Result<(), CoreError> {
        let content = self.content();
        if start > end || end > content.len() {
            return Err(CoreError::Validation(format!(
                "Selection {start}..{end} is outside the content (length {})",
                content.len()
            )));
        }
        if !content.is_char_boundary(start) || !content.is_char_boundary(end) {
            return Err(CoreError::Validation(format!(
                "Selection {start}..{end} is not on character boundaries"
            )));
        }

        let (open, close) = command.tags();
        let updated = format!(
            "{}{open}{}{close}{}",
            &content[..start],
            &content[start..end],
            &content[end..]
        );
        self.history.record(updated);
        Ok(())
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Render the current content against `context`.
    pub fn preview(&self, context: &VariableContext) -> String {
        substitution::substitute(self.content(), context)
    }

    /// Accept the current content as the template's stored content.
    ///
    /// Returns the updated template for the persistence layer. The history is
    /// re-seeded with the saved content, so earlier snapshots are no longer
    /// reachable and the session is clean.
    pub fn save(&mut self, now: Timestamp) -> Result<CertificateTemplate, CoreError> {
        let content = self.content().to_string();
        validate_template_content(&content)?;

        tracing::debug!(
            template_id = self.template.id,
            snapshots = self.history.entry_count(),
            bytes = content.len(),
            "Saving template content",
        );

        self.template.content = content;
        self.template.updated_at = now;
        self.history = ContentHistory::new(self.template.content.as_str());
        Ok(self.template.clone())
    }
}
