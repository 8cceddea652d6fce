//! # Vaccine Catalog
//!
//! Wire shape of `/api/vacunas`.

use serde::{Deserialize, Serialize};

use crate::error::{require_text, ValidationError};
use crate::identity::VaccineId;
use crate::wire::text_or_empty;

/// A catalog vaccine, as returned by `GET /api/vacunas`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vaccine {
    /// Backend-assigned identifier.
    pub id: VaccineId,
    /// Vaccine name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Free-text description. Missing or `null` decodes as empty.
    #[serde(rename = "descripcion", default, deserialize_with = "text_or_empty")]
    pub description: String,
}

/// Registration payload for `POST /api/vacunas`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVaccine {
    /// Vaccine name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Free-text description.
    #[serde(rename = "descripcion")]
    pub description: String,
}

impl NewVaccine {
    /// Both fields are required on the registration form.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("nombre", &self.name)?;
        require_text("descripcion", &self.description)
    }
}
