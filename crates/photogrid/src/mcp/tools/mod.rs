mod photos;

use serde::{Deserialize, Serialize};

// Re-export types needed by tool handlers
pub use super::{JsonRpcError, Tool};

// MCP Protocol types for tools
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: Option<ToolsCapability>,
}

#[derive(Debug, Serialize)]
pub struct ToolsCapability {}

#[derive(Debug, Serialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct ToolsList {
    pub tools: Vec<Tool>,
}

#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<Content>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "text")]
    Text { text: String },
}

pub fn handle_initialize() -> Result<serde_json::Value, JsonRpcError> {
    let result = InitializeResult {
        protocol_version: "2024-11-05".to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolsCapability {}),
        },
        server_info: ServerInfo {
            name: "photogrid".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    serde_json::to_value(result).map_err(|e| JsonRpcError::internal(format!("Internal error: {e}")))
}

pub fn handle_tools_list() -> Result<serde_json::Value, JsonRpcError> {
    let tools = vec![Tool {
        name: "photos_search".to_string(),
        description: "Search Pixabay for editor's choice photos and render them as HTML. The API key is read from the `key` query parameter of page_url. Returns the simplified images (src, alt, link) and the rendered anchor/image markup for the chosen layout.".to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "search": {
                    "type": "string",
                    "description": "Search term (e.g., 'mountain lake')"
                },
                "page_url": {
                    "type": "string",
                    "description": "Page location carrying the API key (e.g., 'https://example.com/?key=MY_API_KEY')"
                },
                "layout": {
                    "type": "string",
                    "enum": ["photos", "list"],
                    "description": "Container the markup targets (default: photos)"
                },
                "escape": {
                    "type": "boolean",
                    "description": "HTML-escape image attributes (default: false)"
                }
            },
            "required": ["search", "page_url"]
        }),
    }];

    serde_json::to_value(ToolsList { tools })
        .map_err(|e| JsonRpcError::internal(format!("Internal error: {e}")))
}

pub async fn handle_tools_call(
    params: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid params: {e}")))?;

    match params.name.as_str() {
        "photos_search" => photos::handle_photos_search(params.arguments, global).await,
        _ => Err(JsonRpcError::invalid_params(format!(
            "Unknown tool: {}",
            params.name
        ))),
    }
}
