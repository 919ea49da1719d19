//! Catalog of recognized template variables.
//!
//! Only the tokens listed here are ever substituted. The catalog order is
//! the order the editor's "insert variable" menu presents them in.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Namespaces
// ---------------------------------------------------------------------------

/// Top-level grouping of a `{{namespace.field}}` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Namespace {
    Participant,
    Event,
    Organization,
    Date,
}

impl Namespace {
    /// All namespaces in catalog order.
    pub const ALL: [Namespace; 4] = [
        Namespace::Participant,
        Namespace::Event,
        Namespace::Organization,
        Namespace::Date,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Participant => "participant",
            Self::Event => "event",
            Self::Organization => "organization",
            Self::Date => "date",
        }
    }

    /// Parse the token form. Unknown namespaces yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ns| ns.as_str() == s)
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Variable definitions
// ---------------------------------------------------------------------------

/// A recognized variable with its menu label and sample preview value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VariableDef {
    pub namespace: Namespace,
    pub field: &'static str,
    pub label: &'static str,
    pub sample: &'static str,
}

impl VariableDef {
    /// `namespace.field`, the token text without braces.
    pub fn key(&self) -> String {
        format!("{}.{}", self.namespace, self.field)
    }

    /// The literal `{{namespace.field}}` token inserted into templates.
    pub fn token(&self) -> String {
        format!("{{{{{}.{}}}}}", self.namespace, self.field)
    }
}

const fn def(
    namespace: Namespace,
    field: &'static str,
    label: &'static str,
    sample: &'static str,
) -> VariableDef {
    VariableDef {
        namespace,
        field,
        label,
        sample,
    }
}

static KNOWN_VARIABLES: [VariableDef; 18] = [
    def(Namespace::Participant, "name", "Participant name", "Ana Souza"),
    def(Namespace::Participant, "email", "Participant email", "ana.souza@example.com"),
    def(Namespace::Participant, "role", "Participant role", "Speaker"),
    def(Namespace::Participant, "organization", "Participant organization", "Acme Labs"),
    def(Namespace::Participant, "id", "Participant ID", "PART-0042"),
    def(Namespace::Event, "name", "Event name", "DevConf 2024"),
    def(Namespace::Event, "date", "Event date", "March 15, 2024"),
    def(Namespace::Event, "location", "Event location", "Main Auditorium"),
    def(Namespace::Event, "organizer", "Event organizer", "Events Office"),
    def(Namespace::Event, "duration", "Event duration", "8 hours"),
    def(Namespace::Organization, "name", "Organization name", "State University"),
    def(Namespace::Organization, "logo", "Organization logo", "/assets/logo.png"),
    def(Namespace::Organization, "department", "Department", "Computer Science"),
    def(Namespace::Organization, "address", "Organization address", "1 Campus Road"),
    def(Namespace::Date, "day", "Day", "15"),
    def(Namespace::Date, "month", "Month", "March"),
    def(Namespace::Date, "year", "Year", "2024"),
    def(Namespace::Date, "fullDate", "Full date", "March 15, 2024"),
];

/// Every recognized variable, namespace by namespace.
pub fn known_variables() -> &'static [VariableDef] {
    &KNOWN_VARIABLES
}

/// Recognized variables of a single namespace, in catalog order.
pub fn variables_in(namespace: Namespace) -> impl Iterator<Item = &'static VariableDef> {
    KNOWN_VARIABLES
        .iter()
        .filter(move |def| def.namespace == namespace)
}

/// Find a recognized variable by its token parts. Field names are
/// case-sensitive (`fullDate`, not `fulldate`).
pub fn lookup(namespace: &str, field: &str) -> Option<&'static VariableDef> {
    let namespace = Namespace::parse(namespace)?;
    KNOWN_VARIABLES
        .iter()
        .find(|def| def.namespace == namespace && def.field == field)
}

/// Like [`lookup`] but reports unknown variables as [`CoreError::NotFound`].
pub fn require(namespace: &str, field: &str) -> Result<&'static VariableDef, CoreError> {
    lookup(namespace, field).ok_or_else(|| CoreError::NotFound {
        entity: "Template variable",
        key: format!("{namespace}.{field}"),
    })
}

pub fn is_known(namespace: &str, field: &str) -> bool {
    lookup(namespace, field).is_some()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn catalog_has_eighteen_variables_in_namespace_order() {
        let namespaces: Vec<Namespace> = known_variables().iter().map(|d| d.namespace).collect();
        assert_eq!(namespaces.len(), 18);
        let mut sorted = namespaces.clone();
        sorted.sort();
        assert_eq!(namespaces, sorted);
    }

    #[test]
    fn catalog_keys_are_unique() {
        let mut keys: Vec<String> = known_variables().iter().map(VariableDef::key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), known_variables().len());
    }

    #[test]
    fn namespace_round_trips_through_str() {
        for ns in Namespace::ALL {
            assert_eq!(Namespace::parse(ns.as_str()), Some(ns));
        }
        assert_eq!(Namespace::parse("company"), None);
        assert_eq!(Namespace::parse("Participant"), None);
    }

    #[test]
    fn token_wraps_key_in_double_braces() {
        let def = lookup("date", "fullDate").unwrap();
        assert_eq!(def.key(), "date.fullDate");
        assert_eq!(def.token(), "{{date.fullDate}}");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(is_known("date", "fullDate"));
        assert!(!is_known("date", "fulldate"));
        assert!(!is_known("organization", "unknown_field"));
    }

    #[test]
    fn require_reports_unknown_variable() {
        let err = require("event", "sponsor").unwrap_err();
        assert_matches!(err, CoreError::NotFound { ref key, .. } if key == "event.sponsor");
        assert!(err.to_string().contains("event.sponsor"));
    }

    #[test]
    fn variables_in_filters_by_namespace() {
        let fields: Vec<&str> = variables_in(Namespace::Date).map(|d| d.field).collect();
        assert_eq!(fields, vec!["day", "month", "year", "fullDate"]);
        assert_eq!(variables_in(Namespace::Participant).count(), 5);
    }
}
