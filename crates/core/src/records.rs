//! Participant, event, and organization records as delivered by the event
//! backend. Only the fields that feed certificate variables are modelled.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Long date format shared by `event.date` and `date.fullDate`.
pub const LONG_DATE_FORMAT: &str = "%B %-d, %Y";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    pub id: DbId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub organization: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub organizer: String,
    /// Free-form, e.g. `"8 hours"`.
    #[serde(default)]
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationRecord {
    pub name: String,
    /// URL or path of the logo image.
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub address: String,
}

/// Render a date in [`LONG_DATE_FORMAT`], e.g. `March 15, 2024`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format(LONG_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_date_has_no_day_padding() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_long_date(date), "March 5, 2024");
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let participant: ParticipantRecord = serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "Ana",
            "email": "ana@example.com"
        }))
        .unwrap();
        assert_eq!(participant.role, "");
        assert_eq!(participant.organization, "");
    }

    #[test]
    fn event_date_parses_from_iso_string() {
        let event: EventRecord = serde_json::from_value(serde_json::json!({
            "name": "DevConf",
            "date": "2024-03-15"
        }))
        .unwrap();
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }
}
