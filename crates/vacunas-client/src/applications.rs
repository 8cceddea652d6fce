//! Typed client for dose applications.
//!
//! The backend only accepts new applications here; there is no list call.

use vacunas_core::{NewDoseApplication, Patient, PatientId, Vaccine, VaccineId};

use crate::error::ClientError;
use crate::transport;

const PATH: &str = "/api/aplicaciones";

/// Client for `/api/aplicaciones`.
#[derive(Debug, Clone)]
pub struct ApplicationClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl ApplicationClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url) -> Self {
        Self { http, base_url }
    }

    /// Record a dose application, surfacing failures.
    pub async fn try_register(&self, application: &NewDoseApplication) -> Result<(), ClientError> {
        transport::submit_record(&self.http, &self.base_url, PATH, application).await
    }

    /// Record a dose application. `true` on a 2xx response, `false` otherwise.
    pub async fn register(&self, application: &NewDoseApplication) -> bool {
        transport::succeeded(self.try_register(application).await)
    }
}

/// The patients and vaccines an application can reference.
///
/// Loaded concurrently; either list is empty if its fetch failed.
#[derive(Debug, Clone, Default)]
pub struct ApplicationFormOptions {
    pub patients: Vec<Patient>,
    pub vaccines: Vec<Vaccine>,
}

impl ApplicationFormOptions {
    pub fn patient(&self, id: PatientId) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    pub fn vaccine(&self, id: VaccineId) -> Option<&Vaccine> {
        self.vaccines.iter().find(|v| v.id == id)
    }
}
