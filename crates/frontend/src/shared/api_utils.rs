//! API utilities for frontend-backend communication
//!
//! Every list endpoint answers `GET <endpoint>?limit=<n>` with the
//! [`ApiResponse`] envelope; mutation endpoints answer `POST` with
//! [`MutationResponse`]. Each request races the configured timeout.

use crate::shared::config::config;
use crate::shared::error::TableError;
use contracts::shared::api_response::{AllIdsResponse, ApiResponse, MutationResponse};
use futures::future::{select, Either};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using the configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, config().api.port)
}

/// Build a full API URL from a path
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// `<endpoint>?limit=<n>` or `<endpoint>&limit=<n>` when the endpoint has a query
pub fn with_query(endpoint: &str, key: &str, value: &str) -> String {
    let sep = if endpoint.contains('?') { '&' } else { '?' };
    format!("{}{}{}={}", endpoint, sep, key, urlencoding::encode(value))
}

/// Error text for a non-2xx answer: the body when it has one
pub fn http_error_text(status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, body)
    }
}

async fn with_timeout<F: Future>(fut: F) -> Result<F::Output, TableError> {
    let ms = config().api.request_timeout_ms;
    let timeout = gloo_timers::future::TimeoutFuture::new(ms);
    match select(Box::pin(fut), Box::pin(timeout)).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => Err(TableError::Timeout(ms)),
    }
}

async fn read_json<R: DeserializeOwned>(response: Response) -> Result<R, String> {
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(http_error_text(response.status(), &body));
    }
    response.json::<R>().await.map_err(|e| e.to_string())
}

async fn get_json<R: DeserializeOwned>(url: String) -> Result<R, TableError> {
    with_timeout(async move {
        let response = Request::get(&url)
            .header("Cache-Control", "no-cache")
            .send()
            .await
            .map_err(|e| TableError::Fetch(e.to_string()))?;
        read_json::<R>(response).await.map_err(TableError::Fetch)
    })
    .await?
}

/// Loads the whole dataset of a list endpoint.
pub async fn fetch_rows<T: DeserializeOwned>(endpoint: &str) -> Result<Vec<T>, TableError> {
    let limit = config().api.fetch_limit.to_string();
    let url = api_url(&with_query(endpoint, "limit", &limit));
    log::debug!("GET {}", url);
    get_json::<ApiResponse<T>>(url)
        .await?
        .into_result()
        .map_err(TableError::Fetch)
}

/// Every id of the unfiltered dataset (`?getAllIds=true`).
pub async fn fetch_all_ids(endpoint: &str) -> Result<Vec<String>, TableError> {
    let url = api_url(&with_query(endpoint, "getAllIds", "true"));
    log::debug!("GET {}", url);
    get_json::<AllIdsResponse>(url)
        .await?
        .into_ids()
        .map_err(TableError::Fetch)
}

/// POSTs `body` as JSON; backend failures become [`TableError::Mutation`].
pub async fn post_json<B, R>(endpoint: &str, body: &B) -> Result<Option<R>, TableError>
where
    B: Serialize,
    R: DeserializeOwned,
{
    let url = api_url(endpoint);
    log::info!("POST {}", url);
    let request = Request::post(&url)
        .json(body)
        .map_err(|e| TableError::Mutation(e.to_string()))?;

    let envelope = with_timeout(async move {
        let response = request
            .send()
            .await
            .map_err(|e| TableError::Mutation(e.to_string()))?;
        read_json::<MutationResponse<R>>(response)
            .await
            .map_err(TableError::from_mutation_message)
    })
    .await??;

    envelope
        .into_result()
        .map_err(TableError::from_mutation_message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("/api/inventory", "limit", "500"), "/api/inventory?limit=500");
        assert_eq!(
            with_query("/api/logs?user=a b", "getAllIds", "true"),
            "/api/logs?user=a b&getAllIds=true"
        );
    }

    #[test]
    fn test_http_error_text() {
        assert_eq!(http_error_text(502, "  "), "HTTP 502");
        assert_eq!(http_error_text(500, "db offline\n"), "HTTP 500: db offline");
    }
}
