//! Certificate issuing: render one template for every participant of an
//! event.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::context::VariableContext;
use crate::records::{EventRecord, OrganizationRecord, ParticipantRecord};
use crate::substitution;
use crate::template::CertificateTemplate;
use crate::types::DbId;

/// Input for a certificate run, typically loaded from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueBatch {
    pub event: EventRecord,
    pub organization: OrganizationRecord,
    pub participants: Vec<ParticipantRecord>,
}

/// A rendered certificate for one participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuedCertificate {
    pub participant_id: DbId,
    pub participant_name: String,
    pub file_name: String,
    pub content: String,
    /// Token keys left literal in `content`.
    pub unresolved: Vec<String>,
}

/// Render `template` for each participant in `batch`, in input order.
pub fn issue_certificates(
    template: &CertificateTemplate,
    batch: &IssueBatch,
    issued_on: NaiveDate,
    extension: &str,
) -> Vec<IssuedCertificate> {
    tracing::debug!(
        template_id = template.id,
        participants = batch.participants.len(),
        event = %batch.event.name,
        "Issuing certificates",
    );

    batch
        .participants
        .iter()
        .map(|participant| {
            let context = VariableContext::from_records(
                participant,
                &batch.event,
                &batch.organization,
                issued_on,
            );
            let content = substitution::substitute(&template.content, &context);
            let unresolved = substitution::unresolved_tokens(&template.content, &context);
            if !unresolved.is_empty() {
                tracing::warn!(
                    participant_id = participant.id,
                    tokens = ?unresolved,
                    "Certificate contains unresolved tokens",
                );
            }
            IssuedCertificate {
                participant_id: participant.id,
                participant_name: participant.name.clone(),
                file_name: certificate_file_name(participant, extension),
                content,
                unresolved,
            }
        })
        .collect()
}

/// File name for a participant's certificate.
///
/// Convention: `certificate_{id}_{slug}.{extension}` where `slug` is the
/// lowercase name with every run of non-alphanumeric characters collapsed to
/// a single `_`.
///
/// # Examples
///
/// ```
/// use certify_core::certificate::certificate_file_name;
/// use certify_core::records::ParticipantRecord;
///
/// let participant = ParticipantRecord {
///     id: 7,
///     name: "Ana  Souza-Lima".into(),
///     email: "ana@example.com".into(),
///     role: String::new(),
///     organization: String::new(),
/// };
/// assert_eq!(
///     certificate_file_name(&participant, "html"),
///     "certificate_7_ana_souza_lima.html"
/// );
/// ```
pub fn certificate_file_name(participant: &ParticipantRecord, extension: &str) -> String {
    let mut slug = String::new();
    for c in participant.name.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('_') {
            slug.push('_');
        }
    }
    let slug = slug.trim_end_matches('_');

    let mut name = format!("certificate_{}", participant.id);
    if !slug.is_empty() {
        name.push('_');
        name.push_str(slug);
    }
    name.push('.');
    name.push_str(extension.trim_start_matches('.'));
    name
}
