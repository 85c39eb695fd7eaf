use crate::prelude::*;
use photogrid_core::images::{get_images, SimplifiedImage};
use photogrid_core::key::{get_key_from_location, get_search_term, QueryReader};
use photogrid_core::markup::{missing_key_fragment, render_images};
use photogrid_core::page::Layout;
use photogrid_core::search::{build_search_url, redact_key, SearchRequest, PIXABAY_API_BASE};
use serde::Serialize;

use super::fetch::fetch_results;
use super::target::RenderTarget;

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub api_base: String,
    pub layout: Layout,
    pub escape: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            api_base: PIXABAY_API_BASE.to_string(),
            layout: Layout::default(),
            escape: false,
        }
    }
}

/// Everything one search produced
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutput {
    /// Request URL with the API key masked
    pub url: String,
    pub search: String,
    pub layout: Layout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_hits: Option<u64>,
    pub images: Vec<SimplifiedImage>,
    pub markup: String,
}

/// Run one search from the page location to the render target
///
/// Without a key the error fragment is rendered into the target and
/// [`Error::MissingKey`] is returned before any request goes out. Fetch
/// failures propagate untouched and leave the target as it was.
pub async fn run_pipeline<R, T>(
    client: &reqwest::Client,
    location: &R,
    search: Option<String>,
    target: &mut T,
    config: &PipelineConfig,
) -> Result<SearchOutput>
where
    R: QueryReader + ?Sized,
    T: RenderTarget + ?Sized,
{
    let selector = config.layout.selector();

    let Some(key) = get_key_from_location(location) else {
        target.replace_contents(selector, &missing_key_fragment(config.layout))?;
        return Err(Error::MissingKey.into());
    };

    let request = SearchRequest::new(get_search_term(location, search), key);
    let url = build_search_url(&config.api_base, &request).map_err(Error::InvalidUrl)?;
    let redacted_url = redact_key(&url);
    log::debug!("Search URL: {redacted_url}");

    let response = fetch_results(client, url).await?;
    log::debug!("Search response: {} hits", response.hits.len());

    let total = response.total;
    let total_hits = response.total_hits;
    let images = get_images(response.hits);
    log::debug!("Simplified images: {images:?}");

    let markup = render_images(&images, config.layout, config.escape);
    log::debug!("Rendered {} bytes of markup", markup.len());

    target.replace_contents(selector, &markup)?;

    Ok(SearchOutput {
        url: redacted_url,
        search: request.search,
        layout: config.layout,
        total,
        total_hits,
        images,
        markup,
    })
}
