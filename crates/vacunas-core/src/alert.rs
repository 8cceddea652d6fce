//! # Alerts
//!
//! An alert is a read-only view produced by the backend: who is due, for which
//! vaccine, and when. The client never creates alerts and never stores their
//! status; see [`crate::status`].

use serde::{Deserialize, Serialize};

use crate::identity::{AlertId, PatientId, VaccineId};
use crate::status::{classify, classify_as_of, AlertStatus};
use crate::temporal::CalendarDate;

/// Patient fields embedded in an alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientSummary {
    /// Patient identifier.
    pub id: PatientId,
    /// Full name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// National identity document number.
    pub dni: String,
}

/// Vaccine fields embedded in an alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaccineSummary {
    /// Vaccine identifier.
    pub id: VaccineId,
    /// Vaccine name.
    #[serde(rename = "nombre")]
    pub name: String,
}

/// A pending dose, as returned by `GET /api/alertas`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Backend alert id, when the backend sends one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AlertId>,
    /// The patient due for a dose.
    #[serde(rename = "paciente")]
    pub patient: PatientSummary,
    /// The vaccine due.
    #[serde(rename = "vacuna")]
    pub vaccine: VaccineSummary,
    /// Scheduled date of the next dose.
    #[serde(rename = "proxima_dosis")]
    pub next_dose: CalendarDate,
}

/// Stable display key for an alert: the (patient, vaccine) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlertKey {
    /// Patient half of the key.
    pub patient: PatientId,
    /// Vaccine half of the key.
    pub vaccine: VaccineId,
}

impl std::fmt::Display for AlertKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.patient, self.vaccine)
    }
}

impl Alert {
    /// The (patient id, vaccine id) key, independent of [`Alert::id`].
    pub fn key(&self) -> AlertKey {
        AlertKey {
            patient: self.patient.id,
            vaccine: self.vaccine.id,
        }
    }

    /// Status relative to the current local date.
    pub fn status(&self) -> AlertStatus {
        classify(self.next_dose)
    }

    /// Status relative to `today`.
    pub fn status_as_of(&self, today: CalendarDate) -> AlertStatus {
        classify_as_of(self.next_dose, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "id": 77,
            "paciente": {"id": 5, "nombre": "María López", "dni": "40123456"},
            "vacuna": {"id": 2, "nombre": "Triple viral"},
            "proxima_dosis": "2024-06-15T23:00:00"
        })
    }

    #[test]
    fn decodes_nested_summaries() {
        let alert: Alert = serde_json::from_value(sample()).unwrap();
        assert_eq!(alert.id, Some(AlertId::new(77)));
        assert_eq!(alert.patient.name, "María López");
        assert_eq!(alert.vaccine.id, VaccineId::new(2));
        assert_eq!(alert.next_dose, CalendarDate::from_ymd(2024, 6, 15).unwrap());
    }

    #[test]
    fn backend_id_is_optional() {
        let mut raw = sample();
        raw.as_object_mut().unwrap().remove("id");
        let alert: Alert = serde_json::from_value(raw).unwrap();
        assert_eq!(alert.id, None);
    }

    #[test]
    fn key_ignores_backend_id() {
        let a: Alert = serde_json::from_value(sample()).unwrap();
        let mut b = a.clone();
        b.id = Some(AlertId::new(999));
        assert_eq!(a.key(), b.key());
        assert_eq!(a.key().to_string(), "5-2");
    }

    #[test]
    fn status_is_not_serialized() {
        let alert: Alert = serde_json::from_value(sample()).unwrap();
        let value = serde_json::to_value(&alert).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 4);
        assert!(value.get("status").is_none());
        assert_eq!(value["proxima_dosis"], json!("2024-06-15"));
    }

    #[test]
    fn status_as_of_uses_calendar_day() {
        let alert: Alert = serde_json::from_value(sample()).unwrap();
        let today = CalendarDate::from_ymd(2024, 6, 15).unwrap();
        assert_eq!(alert.status_as_of(today), AlertStatus::DueToday);
    }
}
