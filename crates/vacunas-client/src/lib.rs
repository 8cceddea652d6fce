//! # vacunas-client -- Typed Rust gateway for the vaccination backend
//!
//! Provides typed access to the backend's four collections:
//! - **Patients** via `/api/pacientes` (list, register)
//! - **Vaccines** via `/api/vacunas` (list, register)
//! - **Dose applications** via `/api/aplicaciones` (register)
//! - **Alerts** via `/api/alertas` (list)
//!
//! ## Failure policy
//!
//! Each operation comes in two forms. The plain form (`list`, `register`)
//! never fails: a fetch that cannot complete yields an empty `Vec`, a
//! submission that cannot complete yields `false`, and the cause is logged
//! through `tracing`. The `try_*` form returns `Result<_, ClientError>` for
//! callers that need to tell "nothing there" from "could not reach the
//! backend".
//!
//! Every call is a single attempt. There is no retry, cache or deduplication;
//! a request that is in flight always runs to completion.

pub mod alerts;
pub mod applications;
pub mod config;
pub mod error;
pub mod patients;
mod transport;
pub mod vaccines;

pub use applications::ApplicationFormOptions;
pub use config::{ClientConfig, ConfigError};
pub use error::ClientError;

use std::time::Duration;

/// Top-level backend client. Holds one sub-client per collection.
#[derive(Debug, Clone)]
pub struct VacunasClient {
    patients: patients::PatientClient,
    vaccines: vaccines::VaccineClient,
    applications: applications::ApplicationClient,
    alerts: alerts::AlertClient,
}

impl VacunasClient {
    /// Create a new client from configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::ACCEPT,
                    reqwest::header::HeaderValue::from_static("application/json"),
                );
                headers
            })
            .build()
            .map_err(|e| ClientError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            patients: patients::PatientClient::new(http.clone(), config.base_url.clone()),
            vaccines: vaccines::VaccineClient::new(http.clone(), config.base_url.clone()),
            applications: applications::ApplicationClient::new(
                http.clone(),
                config.base_url.clone(),
            ),
            alerts: alerts::AlertClient::new(http, config.base_url),
        })
    }

    /// Access the patients client.
    pub fn patients(&self) -> &patients::PatientClient {
        &self.patients
    }

    /// Access the vaccine catalog client.
    pub fn vaccines(&self) -> &vaccines::VaccineClient {
        &self.vaccines
    }

    /// Access the dose application client.
    pub fn applications(&self) -> &applications::ApplicationClient {
        &self.applications
    }

    /// Access the alerts client.
    pub fn alerts(&self) -> &alerts::AlertClient {
        &self.alerts
    }

    /// Fetch patients and vaccines concurrently for an application form.
    ///
    /// Resumes once both fetches finish. A failed fetch leaves its list empty
    /// without affecting the other.
    pub async fn application_form_options(&self) -> ApplicationFormOptions {
        let (patients, vaccines) = tokio::join!(self.patients.list(), self.vaccines.list());
        ApplicationFormOptions { patients, vaccines }
    }

    /// Fetch patients and vaccines concurrently, surfacing the first failure.
    ///
    /// Both requests run to completion before either result is inspected.
    pub async fn try_application_form_options(
        &self,
    ) -> Result<ApplicationFormOptions, ClientError> {
        let (patients, vaccines) =
            tokio::join!(self.patients.try_list(), self.vaccines.try_list());
        Ok(ApplicationFormOptions {
            patients: patients?,
            vaccines: vaccines?,
        })
    }
}
