//! Variable context: the namespace -> field -> value data a template is
//! rendered against.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::records::{format_long_date, EventRecord, OrganizationRecord, ParticipantRecord};
use crate::variables::{known_variables, Namespace};

/// Two-level mapping of namespace to field to value.
///
/// Built once per render and not mutated afterwards; [`VariableContext::with`]
/// consumes the context so construction reads as a chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableContext {
    values: BTreeMap<String, BTreeMap<String, String>>,
}

impl VariableContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `namespace.field` to `value`, replacing any previous binding.
    pub fn with(
        mut self,
        namespace: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.values
            .entry(namespace.into())
            .or_default()
            .insert(field.into(), value.into());
        self
    }

    pub fn get(&self, namespace: &str, field: &str) -> Option<&str> {
        self.values
            .get(namespace)
            .and_then(|fields| fields.get(field))
            .map(String::as_str)
    }

    /// Namespace names that carry at least one binding.
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(BTreeMap::is_empty)
    }

    /// Parse a context from JSON such as `{"participant": {"name": "Ana"}}`.
    ///
    /// Values must be strings; deeper nesting is rejected.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json)
            .map_err(|e| CoreError::Validation(format!("Invalid variable context: {e}")))
    }

    /// Every recognized variable bound to its catalog sample value.
    pub fn sample() -> Self {
        known_variables().iter().fold(Self::new(), |ctx, def| {
            ctx.with(def.namespace.as_str(), def.field, def.sample)
        })
    }

    /// Replace the `date` namespace with values derived from `date`.
    pub fn with_date(self, date: NaiveDate) -> Self {
        let ns = Namespace::Date.as_str();
        self.with(ns, "day", date.day().to_string())
            .with(ns, "month", date.format("%B").to_string())
            .with(ns, "year", date.year().to_string())
            .with(ns, "fullDate", format_long_date(date))
    }

    /// Build the context for one participant's certificate.
    pub fn from_records(
        participant: &ParticipantRecord,
        event: &EventRecord,
        organization: &OrganizationRecord,
        issued_on: NaiveDate,
    ) -> Self {
        let p = Namespace::Participant.as_str();
        let e = Namespace::Event.as_str();
        let o = Namespace::Organization.as_str();

        Self::new()
            .with(p, "name", participant.name.as_str())
            .with(p, "email", participant.email.as_str())
            .with(p, "role", participant.role.as_str())
            .with(p, "organization", participant.organization.as_str())
            .with(p, "id", participant.id.to_string())
            .with(e, "name", event.name.as_str())
            .with(e, "date", format_long_date(event.date))
            .with(e, "location", event.location.as_str())
            .with(e, "organizer", event.organizer.as_str())
            .with(e, "duration", event.duration.as_str())
            .with(o, "name", organization.name.as_str())
            .with(o, "logo", organization.logo.as_str())
            .with(o, "department", organization.department.as_str())
            .with(o, "address", organization.address.as_str())
            .with_date(issued_on)
    }
}
