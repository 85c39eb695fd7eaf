use crate::prelude::{eprintln, *};
use photogrid_core::key::PageLocation;
use serde::Deserialize;

use super::{CallToolResult, Content, JsonRpcError};
use crate::photos::{run_pipeline, Document, Layout, PipelineConfig, PIXABAY_API_BASE};

#[derive(Deserialize)]
struct PhotosSearchArgs {
    search: String,
    page_url: String,
    layout: Option<Layout>,
    escape: Option<bool>,
}

pub async fn handle_photos_search(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let api_base =
        std::env::var("PIXABAY_API_BASE").unwrap_or_else(|_| PIXABAY_API_BASE.to_string());
    photos_search(arguments, &api_base, global).await
}

async fn photos_search(
    arguments: Option<serde_json::Value>,
    api_base: &str,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let args: PhotosSearchArgs =
        serde_json::from_value(arguments.unwrap_or(serde_json::Value::Null))
            .map_err(|e| JsonRpcError::invalid_params(format!("Invalid arguments: {e}")))?;

    if global.verbose {
        eprintln!(
            "Calling photos_search: search={}, layout={:?}",
            args.search, args.layout
        );
    }

    let location = PageLocation::parse(&args.page_url).map_err(JsonRpcError::invalid_params)?;
    let config = PipelineConfig {
        api_base: api_base.to_string(),
        layout: args.layout.unwrap_or(Layout::Photos).into(),
        escape: args.escape.unwrap_or(false),
    };

    let client = reqwest::Client::new();
    let mut document = Document::for_layout(config.layout);

    let result = match run_pipeline(
        &client,
        &location,
        Some(args.search),
        &mut document,
        &config,
    )
    .await
    {
        Ok(output) => {
            let json_string = serde_json::to_string_pretty(&output)
                .map_err(|e| JsonRpcError::internal(format!("Serialization error: {e}")))?;
            CallToolResult {
                content: vec![Content::Text { text: json_string }],
                is_error: None,
            }
        }
        Err(err) if matches!(err.downcast_ref::<Error>(), Some(Error::MissingKey)) => {
            // Hand back what the page would show.
            let fragment = document
                .contents(config.layout.selector())
                .map_err(|e| JsonRpcError::internal(format!("Internal error: {e}")))?;
            CallToolResult {
                content: vec![Content::Text { text: fragment }],
                is_error: Some(true),
            }
        }
        Err(err) => {
            return Err(JsonRpcError::internal(format!("Tool execution error: {err}")));
        }
    };

    serde_json::to_value(result).map_err(|e| JsonRpcError::internal(format!("Internal error: {e}")))
}
