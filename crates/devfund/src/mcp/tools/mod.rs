mod catalog;

use devfund_core::catalog::Catalog;
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
            name: "devfund".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    serde_json::to_value(result).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Internal error: {e}"),
        data: None,
    })
}

pub fn handle_tools_list() -> Result<serde_json::Value, JsonRpcError> {
    let tools = vec![
        Tool {
            name: "catalog_query".to_string(),
            description: "Search, filter and sort the project catalog. Text search is case-insensitive and matches title, description, category name or any technology. Category and status filters are exact. Returns the matching project cards with funding progress; an empty list means nothing matched.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "search": {
                        "type": "string",
                        "description": "Free text to search for (e.g., 'react', 'blockchain')"
                    },
                    "category": {
                        "type": "string",
                        "description": "Exact category name (e.g., 'Fintech'). Use catalog_categories to list names."
                    },
                    "status": {
                        "type": "string",
                        "description": "Project status",
                        "enum": ["concept", "prototype", "mvp", "beta"]
                    },
                    "sort": {
                        "type": "string",
                        "description": "Sort order (default: newest)",
                        "enum": ["newest", "oldest", "funding", "goal"]
                    }
                },
                "required": []
            }),
        },
        Tool {
            name: "catalog_get".to_string(),
            description: "Get the full record of one project by id, including its developer profile and links.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "id": {
                        "type": "string",
                        "description": "Project id"
                    }
                },
                "required": ["id"]
            }),
        },
        Tool {
            name: "catalog_featured".to_string(),
            description: "The home page view: catalog stats, up to three featured projects (more than 30% funded) and the first six categories with project counts.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        },
        Tool {
            name: "catalog_categories".to_string(),
            description: "List every category with the number of projects currently in it.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        },
    ];

    let result = ToolsList { tools };

    serde_json::to_value(result).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Internal error: {e}"),
        data: None,
    })
}

pub fn handle_tools_call(
    params: Option<serde_json::Value>,
    catalog: &Catalog,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError {
            code: -32602,
            message: format!("Invalid params: {e}"),
            data: None,
        })?;

    match params.name.as_str() {
        "catalog_query" => catalog::handle_catalog_query(params.arguments, catalog, global),
        "catalog_get" => catalog::handle_catalog_get(params.arguments, catalog, global),
        "catalog_featured" => catalog::handle_catalog_featured(catalog, global),
        "catalog_categories" => catalog::handle_catalog_categories(catalog, global),
        _ => Err(JsonRpcError {
            code: -32602,
            message: format!("Unknown tool: {}", params.name),
            data: None,
        }),
    }
}

/// Serialize a tool payload and wrap it in an MCP text result
fn text_result<T: Serialize>(payload: &T) -> Result<serde_json::Value, JsonRpcError> {
    let json_string = serde_json::to_string_pretty(payload).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Serialization error: {e}"),
        data: None,
    })?;

    let result = CallToolResult {
        content: vec![Content::Text { text: json_string }],
        is_error: None,
    };

    serde_json::to_value(result).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Internal error: {e}"),
        data: None,
    })
}
