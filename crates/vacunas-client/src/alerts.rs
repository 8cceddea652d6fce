//! Typed client for the alert view.
//!
//! Alerts are computed by the backend; classification happens on the client
//! through [`vacunas_core::status`].

use vacunas_core::Alert;

use crate::error::ClientError;
use crate::transport;

const PATH: &str = "/api/alertas";

/// Client for `GET /api/alertas`.
#[derive(Debug, Clone)]
pub struct AlertClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl AlertClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url) -> Self {
        Self { http, base_url }
    }

    /// Fetch all alerts, surfacing failures.
    pub async fn try_list(&self) -> Result<Vec<Alert>, ClientError> {
        transport::fetch_collection(&self.http, &self.base_url, PATH).await
    }

    /// Fetch all alerts in backend order. Empty on any failure.
    pub async fn list(&self) -> Vec<Alert> {
        transport::or_empty(self.try_list().await)
    }
}
