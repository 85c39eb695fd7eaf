use crate::prelude::*;
use photogrid_core::images::SearchResponse;
use reqwest::Url;

/// Issue the search request and parse the body
///
/// A single attempt. The status code is only reported when the body fails
/// to parse, so an error page surfaces as a parse failure.
pub async fn fetch_results(client: &reqwest::Client, url: Url) -> Result<SearchResponse, Error> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::Network(format!("Failed to reach the search API: {e}")))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| Error::Network(format!("Failed to read search response: {e}")))?;

    serde_json::from_str(&body).map_err(|e| {
        Error::Network(format!(
            "Failed to parse search response (HTTP {status}): {e}"
        ))
    })
}
