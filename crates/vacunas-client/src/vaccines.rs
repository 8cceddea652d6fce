//! Typed client for the vaccine catalog.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/api/vacunas` | List vaccines |
//! | POST   | `/api/vacunas` | Register vaccine |

use vacunas_core::{NewVaccine, Vaccine};

use crate::error::ClientError;
use crate::transport;

const PATH: &str = "/api/vacunas";

/// Client for `/api/vacunas`.
#[derive(Debug, Clone)]
pub struct VaccineClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl VaccineClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url) -> Self {
        Self { http, base_url }
    }

    /// Fetch the catalog, surfacing failures.
    pub async fn try_list(&self) -> Result<Vec<Vaccine>, ClientError> {
        transport::fetch_collection(&self.http, &self.base_url, PATH).await
    }

    /// Fetch the catalog in backend order. Empty on any failure.
    pub async fn list(&self) -> Vec<Vaccine> {
        transport::or_empty(self.try_list().await)
    }

    /// Register a vaccine, surfacing failures.
    pub async fn try_register(&self, vaccine: &NewVaccine) -> Result<(), ClientError> {
        transport::submit_record(&self.http, &self.base_url, PATH, vaccine).await
    }

    /// Register a vaccine. `true` on a 2xx response, `false` otherwise.
    pub async fn register(&self, vaccine: &NewVaccine) -> bool {
        transport::succeeded(self.try_register(vaccine).await)
    }
}
