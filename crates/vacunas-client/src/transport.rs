//! Request plumbing shared by the resource clients.
//!
//! Every call is a single attempt: no retry, no backoff, no cache.
//!
//! Collections are decoded one record at a time. A record that does not match
//! the expected shape is logged and skipped; the rest keep backend order.

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::ClientError;

/// Join a collection path onto the configured base URL, keeping any base path.
pub(crate) fn collection_url(base_url: &Url, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// `GET` a collection and decode it as a JSON array, preserving backend order.
///
/// Fails only when the body is not a JSON array at all.
pub(crate) async fn fetch_collection<T: DeserializeOwned>(
    http: &reqwest::Client,
    base_url: &Url,
    path: &str,
) -> Result<Vec<T>, ClientError> {
    let endpoint = format!("GET {path}");
    let url = collection_url(base_url, path);
    tracing::debug!(%endpoint, %url, "fetching collection");

    let resp = http
        .get(&url)
        .send()
        .await
        .map_err(|e| ClientError::Http {
            endpoint: endpoint.clone(),
            source: e,
        })?;

    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::ApiError {
            endpoint,
            status,
            body,
        });
    }

    let records: Vec<serde_json::Value> =
        resp.json().await.map_err(|e| ClientError::Deserialization {
            endpoint: endpoint.clone(),
            source: e,
        })?;

    Ok(decode_records(&endpoint, records))
}

/// Decode each element on its own, dropping the ones that do not fit `T`.
fn decode_records<T: DeserializeOwned>(endpoint: &str, records: Vec<serde_json::Value>) -> Vec<T> {
    let total = records.len();
    let items: Vec<T> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(%endpoint, index, "skipping undecodable record: {e}");
                None
            }
        })
        .collect();
    if items.len() < total {
        tracing::warn!(
            %endpoint,
            kept = items.len(),
            total,
            "collection contained undecodable records"
        );
    }
    items
}

/// `POST` a record as JSON. Any 2xx is success; the response body is ignored.
pub(crate) async fn submit_record<B: Serialize + ?Sized>(
    http: &reqwest::Client,
    base_url: &Url,
    path: &str,
    body: &B,
) -> Result<(), ClientError> {
    let endpoint = format!("POST {path}");
    let url = collection_url(base_url, path);
    tracing::debug!(%endpoint, %url, "submitting record");

    let resp = http
        .post(&url)
        .json(body)
        .send()
        .await
        .map_err(|e| ClientError::Http {
            endpoint: endpoint.clone(),
            source: e,
        })?;

    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::ApiError {
            endpoint,
            status,
            body,
        });
    }

    Ok(())
}

/// Collapse a failed fetch to an empty collection, logging the cause.
pub(crate) fn or_empty<T>(result: Result<Vec<T>, ClientError>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(
                endpoint = e.endpoint(),
                status = e.status(),
                "fetch failed, using empty collection: {e}"
            );
            Vec::new()
        }
    }
}

/// Collapse a submission result to success/failure, logging the cause.
pub(crate) fn succeeded(result: Result<(), ClientError>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(
                endpoint = e.endpoint(),
                status = e.status(),
                "submission failed: {e}"
            );
            false
        }
    }
}
