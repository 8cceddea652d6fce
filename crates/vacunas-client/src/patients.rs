//! Typed client for the patient collection.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/api/pacientes` | List patients |
//! | POST   | `/api/pacientes` | Register patient |

use vacunas_core::{NewPatient, Patient};

use crate::error::ClientError;
use crate::transport;

const PATH: &str = "/api/pacientes";

/// Client for `/api/pacientes`.
#[derive(Debug, Clone)]
pub struct PatientClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl PatientClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url) -> Self {
        Self { http, base_url }
    }

    /// Fetch all patients, surfacing failures.
    pub async fn try_list(&self) -> Result<Vec<Patient>, ClientError> {
        transport::fetch_collection(&self.http, &self.base_url, PATH).await
    }

    /// Fetch all patients in backend order. Empty on any failure.
    pub async fn list(&self) -> Vec<Patient> {
        transport::or_empty(self.try_list().await)
    }

    /// Register a patient, surfacing failures.
    pub async fn try_register(&self, patient: &NewPatient) -> Result<(), ClientError> {
        transport::submit_record(&self.http, &self.base_url, PATH, patient).await
    }

    /// Register a patient. `true` on a 2xx response, `false` otherwise.
    pub async fn register(&self, patient: &NewPatient) -> bool {
        transport::succeeded(self.try_register(patient).await)
    }
}
