//! # Dose Applications
//!
//! A dose application records a vaccine given to a patient and the date the
//! next dose is due. Applications are historical facts: this client only
//! ever creates them through `POST /api/aplicaciones`.

use serde::{Deserialize, Serialize};

use crate::identity::{ApplicationId, PatientId, VaccineId};
use crate::temporal::CalendarDate;
use crate::wire::text_or_empty;

/// A recorded dose application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoseApplication {
    /// Backend-assigned identifier.
    pub id: ApplicationId,
    /// Patient who received the dose.
    #[serde(rename = "paciente_id")]
    pub patient_id: PatientId,
    /// Vaccine administered.
    #[serde(rename = "vacuna_id")]
    pub vaccine_id: VaccineId,
    /// Date the dose was given.
    #[serde(rename = "fecha_aplicacion")]
    pub applied_on: CalendarDate,
    /// Date the next dose is due.
    #[serde(rename = "proxima_dosis")]
    pub next_dose: CalendarDate,
    /// Free-text observations. Missing or `null` decodes as empty.
    #[serde(rename = "observaciones", default, deserialize_with = "text_or_empty")]
    pub observations: String,
}

/// Registration payload for `POST /api/aplicaciones`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDoseApplication {
    /// Patient who received the dose.
    #[serde(rename = "paciente_id")]
    pub patient_id: PatientId,
    /// Vaccine administered.
    #[serde(rename = "vacuna_id")]
    pub vaccine_id: VaccineId,
    /// Date the dose was given.
    #[serde(rename = "fecha_aplicacion")]
    pub applied_on: CalendarDate,
    /// Date the next dose is due.
    #[serde(rename = "proxima_dosis")]
    pub next_dose: CalendarDate,
    /// Free-text observations; may be empty.
    #[serde(rename = "observaciones")]
    pub observations: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_uses_integer_ids_and_iso_dates() {
        let app = NewDoseApplication {
            patient_id: PatientId::new(4),
            vaccine_id: VaccineId::new(9),
            applied_on: CalendarDate::from_ymd(2024, 6, 1).unwrap(),
            next_dose: CalendarDate::from_ymd(2024, 12, 1).unwrap(),
            observations: String::new(),
        };
        assert_eq!(
            serde_json::to_value(&app).unwrap(),
            json!({
                "paciente_id": 4,
                "vacuna_id": 9,
                "fecha_aplicacion": "2024-06-01",
                "proxima_dosis": "2024-12-01",
                "observaciones": ""
            })
        );
    }

    #[test]
    fn decodes_recorded_application() {
        let app: DoseApplication = serde_json::from_value(json!({
            "id": 11,
            "paciente_id": 4,
            "vacuna_id": 9,
            "fecha_aplicacion": "2024-06-01",
            "proxima_dosis": "2024-12-01T00:00:00"
        }))
        .unwrap();
        assert_eq!(app.id, ApplicationId::new(11));
        assert_eq!(app.next_dose, CalendarDate::from_ymd(2024, 12, 1).unwrap());
        assert!(app.observations.is_empty());
    }

    #[test]
    fn null_observations_decode_as_empty() {
        let app: DoseApplication = serde_json::from_value(json!({
            "id": 12,
            "paciente_id": 4,
            "vacuna_id": 9,
            "fecha_aplicacion": "2024-06-01",
            "proxima_dosis": "2024-12-01",
            "observaciones": null
        }))
        .unwrap();
        assert_eq!(app.observations, "");
    }
}
