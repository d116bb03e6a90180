//! Shared HTTP plumbing for the upstream JSON APIs.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::FetchError;

const USER_AGENT: &str = "Mozilla/5.0";

/// Build a blocking client with the shared identifying header.
pub(crate) fn build_client() -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .with_context(|| "Failed to create HTTP client")
}

/// GET a URL and decode the JSON body into `T`.
///
/// Every failure is logged once with its class. The reqwest error is stripped
/// of its URL before it is stored or logged; query strings carry credentials.
pub(crate) fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, FetchError> {
    let response = client
        .get(url)
        .header(header::ACCEPT, "application/json")
        .send()
        .map_err(|e| {
            let source = e.without_url();
            warn!("Network error: {source}");
            FetchError::Network { source }
        })?;

    let status = response.status();
    if !status.is_success() {
        warn!(
            "HTTP error: {} - {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown error")
        );
        return Err(FetchError::Http { status });
    }

    response.json().map_err(|e| {
        let source = e.without_url();
        warn!("Error decoding response: {source}");
        FetchError::Decode { source }
    })
}
