//! # Patients
//!
//! Wire shape of `/api/pacientes`. Field names on the wire are Spanish
//! (`nombre`, `dni`, `fecha_nacimiento`, `genero`); Rust names are English.

use serde::{Deserialize, Serialize};

use crate::error::{require_text, ValidationError};
use crate::identity::PatientId;
use crate::temporal::CalendarDate;

/// Patient gender as encoded by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// `"M"`
    #[serde(rename = "M")]
    Male,
    /// `"F"`
    #[serde(rename = "F")]
    Female,
    /// `"Otro"`
    #[serde(rename = "Otro")]
    Other,
}

impl Gender {
    /// All variants, in the order a selection list offers them.
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// The wire code: `M`, `F` or `Otro`.
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Other => "Otro",
        }
    }

    /// Human-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Masculino",
            Gender::Female => "Femenino",
            Gender::Other => "Otro",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|g| g.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownGender(s.to_string()))
    }
}

/// A registered patient, as returned by `GET /api/pacientes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Backend-assigned identifier.
    pub id: PatientId,
    /// Full name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// National identity document number. Uniqueness is the backend's concern.
    pub dni: String,
    /// Date of birth.
    #[serde(rename = "fecha_nacimiento")]
    pub birth_date: CalendarDate,
    /// Gender code.
    #[serde(rename = "genero")]
    pub gender: Gender,
}

/// Registration payload for `POST /api/pacientes`: a patient without an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPatient {
    /// Full name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// National identity document number.
    pub dni: String,
    /// Date of birth.
    #[serde(rename = "fecha_nacimiento")]
    pub birth_date: CalendarDate,
    /// Gender code.
    #[serde(rename = "genero")]
    pub gender: Gender,
}

impl NewPatient {
    /// Check the fields a registration form marks as required.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("nombre", &self.name)?;
        require_text("dni", &self.dni)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn gender_codes_round_trip_through_wire_names() {
        assert_eq!(serde_json::to_value(Gender::Other).unwrap(), json!("Otro"));
        let g: Gender = serde_json::from_value(json!("F")).unwrap();
        assert_eq!(g, Gender::Female);
        assert!(serde_json::from_value::<Gender>(json!("X")).is_err());
    }

    #[test]
    fn gender_parses_codes_case_insensitively() {
        assert_eq!("m".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("OTRO".parse::<Gender>().unwrap(), Gender::Other);
        assert_eq!(
            "x".parse::<Gender>(),
            Err(ValidationError::UnknownGender("x".into()))
        );
    }

    #[test]
    fn new_patient_uses_spanish_field_names_and_omits_id() {
        let p = NewPatient {
            name: "Ana Pérez".into(),
            dni: "30111222".into(),
            birth_date: CalendarDate::from_ymd(1990, 3, 7).unwrap(),
            gender: Gender::Female,
        };
        assert_eq!(
            serde_json::to_value(&p).unwrap(),
            json!({
                "nombre": "Ana Pérez",
                "dni": "30111222",
                "fecha_nacimiento": "1990-03-07",
                "genero": "F"
            })
        );
    }

    #[test]
    fn patient_decodes_backend_record() {
        let p: Patient = serde_json::from_value(json!({
            "id": 3,
            "nombre": "Luis Gómez",
            "dni": "28999111",
            "fecha_nacimiento": "1985-11-20T00:00:00.000Z",
            "genero": "M",
            "created_at": "2024-01-01"
        }))
        .unwrap();
        assert_eq!(p.id, PatientId::new(3));
        assert_eq!(p.gender, Gender::Male);
    }

    #[test]
    fn validate_rejects_blank_name() {
        let p = NewPatient {
            name: " ".into(),
            dni: "1".into(),
            birth_date: CalendarDate::from_ymd(2000, 1, 1).unwrap(),
            gender: Gender::Male,
        };
        assert_eq!(
            p.validate(),
            Err(ValidationError::EmptyField { field: "nombre" })
        );
    }
}
