/// MCP server implementation that handles JSON-RPC communication
///
/// This module implements the actual MCP server that:
/// 1. Reads JSON-RPC requests from stdin
/// 2. Processes tool calls against the symptom store
/// 3. Sends JSON-RPC responses to stdout

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

use crate::mcp::protocol::*;
use crate::tools;
use crate::{ServerError, SymptomTrackerServer};

/// MCP server that handles communication with Claude
pub struct McpServer {
    /// The underlying symptom tracker
    tracker: SymptomTrackerServer,
    /// Whether the client finished the initialize handshake
    initialized: bool,
}

impl McpServer {
    /// Create a new MCP server
    pub fn new(tracker: SymptomTrackerServer) -> Self {
        Self {
            tracker,
            initialized: false,
        }
    }

    /// Run the MCP server, handling JSON-RPC over stdin/stdout
    pub async fn run(&mut self) -> Result<(), ServerError> {
        info!("Starting MCP server, waiting for JSON-RPC requests...");

        let stdin = tokio::io::stdin();
        let mut reader = BufReader::new(stdin);
        let mut stdout = tokio::io::stdout();

        let mut line = String::new();

        loop {
            line.clear();

            match reader.read_line(&mut line).await {
                Ok(0) => {
                    info!("MCP server shutting down (stdin closed)");
                    break;
                }
                Ok(_) => {
                    if let Some(response) = self.process_line(&line).await {
                        let response_str = serde_json::to_string(&response)?;

                        stdout.write_all(response_str.as_bytes()).await?;
                        stdout.write_all(b"\n").await?;
                        stdout.flush().await?;

                        debug!("Sent response: {}", response_str);
                    }
                }
                Err(e) => {
                    error!("Failed to read from stdin: {}", e);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Process a single line of JSON-RPC input
    async fn process_line(&mut self, line: &str) -> Option<JsonRpcResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        debug!("Processing request: {}", line);

        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(req) => req,
            Err(e) => {
                error!("Failed to parse JSON-RPC request: {}", e);
                return Some(JsonRpcResponse::error(
                    json!(null),
                    error_codes::PARSE_ERROR,
                    format!("Invalid JSON: {}", e),
                    None,
                ));
            }
        };

        Some(self.handle_request(request).await)
    }

    /// Handle a JSON-RPC request
    async fn handle_request(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        match request.method.as_str() {
            "initialize" => self.handle_initialize(request),
            "initialized" => {
                self.initialized = true;
                JsonRpcResponse::success(request.id, json!(null))
            }
            "tools/list" => self.handle_tools_list(request),
            "tools/call" => self.handle_tools_call(request).await,
            _ => JsonRpcResponse::error(
                request.id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method '{}' not found", request.method),
                None,
            ),
        }
    }

    /// Handle MCP initialization request
    fn handle_initialize(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        info!("MCP client connected");

        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: ServerInfo {
                name: "Symptom Tracker MCP".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        JsonRpcResponse::success(request.id, serde_json::to_value(result).unwrap())
    }

    /// Handle tools/list request
    fn handle_tools_list(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        let tools = vec![
            ToolDefinition {
                name: "symptom_log".to_string(),
                description: "Log a symptom occurrence with its intensity and context".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "symptom_name": {"type": "string", "description": "Name of the symptom, e.g. 'Headache' (at least 2 characters)"},
                        "date": {"type": "string", "description": "Date experienced (YYYY-MM-DD, optional - defaults to today)"},
                        "time": {"type": "string", "description": "Clock time (HH:MM, optional)"},
                        "intensity": {"type": "number", "description": "Severity from 0 to 10"},
                        "notes": {"type": "string", "description": "Optional free-text context"},
                        "triggers": {"type": "string", "description": "Comma-separated trigger labels, e.g. 'Stress, Lack of sleep' (optional)"},
                        "relief_measures": {"type": "string", "description": "Comma-separated relief labels, e.g. 'Rest, Painkiller' (optional)"}
                    },
                    "required": ["symptom_name", "intensity"]
                }),
            },
            ToolDefinition {
                name: "symptom_update".to_string(),
                description: "Edit a logged symptom record; omitted fields keep their current values".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "record_id": {"type": "string", "description": "Id of the record to edit"},
                        "symptom_name": {"type": "string", "description": "New symptom name (optional)"},
                        "date": {"type": "string", "description": "New date (YYYY-MM-DD, optional)"},
                        "time": {"type": "string", "description": "New time (HH:MM, optional; empty string clears it)"},
                        "intensity": {"type": "number", "description": "New severity 0-10 (optional)"},
                        "notes": {"type": "string", "description": "New notes (optional; empty string clears them)"},
                        "triggers": {"type": "string", "description": "New comma-separated triggers (optional; empty string clears them)"},
                        "relief_measures": {"type": "string", "description": "New comma-separated relief measures (optional; empty string clears them)"}
                    },
                    "required": ["record_id"]
                }),
            },
            ToolDefinition {
                name: "symptom_delete".to_string(),
                description: "Delete a logged symptom record".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "record_id": {"type": "string", "description": "Id of the record to delete"}
                    },
                    "required": ["record_id"]
                }),
            },
            ToolDefinition {
                name: "symptom_list".to_string(),
                description: "List logged symptoms with optional filtering and sorting".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "symptom_name": {"type": "string", "description": "Only show records with this exact name (optional)"},
                        "sort_by": {"type": "string", "description": "Sort by: 'date' (newest first, default), 'name', 'intensity' (optional)"}
                    },
                    "required": []
                }),
            },
            ToolDefinition {
                name: "symptom_trends".to_string(),
                description: "Chart-ready trends: intensity over time for one symptom plus the frequency ranking across all of them".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "symptom_name": {"type": "string", "description": "Symptom to chart (optional - defaults to the most frequent)"}
                    },
                    "required": []
                }),
            },
            ToolDefinition {
                name: "symptom_status".to_string(),
                description: "Quick overview of the symptom log".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {},
                    "required": []
                }),
            },
        ];

        JsonRpcResponse::success(request.id, json!({"tools": tools}))
    }

    /// Handle tools/call request
    async fn handle_tools_call(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        let tool_params: ToolCallParams = match request.params {
            Some(params) => match serde_json::from_value(params) {
                Ok(p) => p,
                Err(e) => {
                    return JsonRpcResponse::error(
                        request.id,
                        error_codes::INVALID_PARAMS,
                        format!("Invalid parameters: {}", e),
                        None,
                    );
                }
            },
            None => {
                return JsonRpcResponse::error(
                    request.id,
                    error_codes::INVALID_PARAMS,
                    "Missing parameters".to_string(),
                    None,
                );
            }
        };

        if !self.initialized {
            debug!("tools/call received before the initialized notification");
        }

        let result = match tool_params.name.as_str() {
            "symptom_log" => self.call_symptom_log(tool_params.arguments),
            "symptom_update" => self.call_symptom_update(tool_params.arguments),
            "symptom_delete" => self.call_symptom_delete(tool_params.arguments),
            "symptom_list" => self.call_symptom_list(tool_params.arguments),
            "symptom_trends" => self.call_symptom_trends(tool_params.arguments),
            "symptom_status" => self.call_symptom_status(),
            _ => ToolCallResult::error(format!("Unknown tool: {}", tool_params.name)),
        };

        JsonRpcResponse::success(request.id, serde_json::to_value(result).unwrap())
    }

    /// Call the symptom_log tool
    fn call_symptom_log(&mut self, args: HashMap<String, Value>) -> ToolCallResult {
        let params: tools::LogSymptomParams = match parse_args(args) {
            Ok(p) => p,
            Err(e) => return ToolCallResult::error(e),
        };

        match tools::log_symptom(self.tracker.store_mut(), params) {
            Ok(response) => ToolCallResult::success(format!(
                "{}\nRecord id: {}",
                response.message, response.record_id
            )),
            Err(e) => ToolCallResult::error(e.to_string()),
        }
    }

    /// Call the symptom_update tool
    fn call_symptom_update(&mut self, args: HashMap<String, Value>) -> ToolCallResult {
        let params: tools::UpdateSymptomParams = match parse_args(args) {
            Ok(p) => p,
            Err(e) => return ToolCallResult::error(e),
        };

        match tools::update_symptom(self.tracker.store_mut(), params) {
            Ok(response) => ToolCallResult::success(response.message),
            Err(e) => ToolCallResult::error(e.to_string()),
        }
    }

    /// Call the symptom_delete tool
    fn call_symptom_delete(&mut self, args: HashMap<String, Value>) -> ToolCallResult {
        let params: tools::DeleteSymptomParams = match parse_args(args) {
            Ok(p) => p,
            Err(e) => return ToolCallResult::error(e),
        };

        match tools::delete_symptom(self.tracker.store_mut(), params) {
            Ok(response) => ToolCallResult::success(response.message),
            Err(e) => ToolCallResult::error(e.to_string()),
        }
    }

    /// Call the symptom_list tool
    fn call_symptom_list(&mut self, args: HashMap<String, Value>) -> ToolCallResult {
        let params: tools::ListSymptomsParams = match parse_args(args) {
            Ok(p) => p,
            Err(e) => return ToolCallResult::error(e),
        };

        match tools::list_symptoms(self.tracker.store(), params) {
            Ok(response) => ToolCallResult::success(response.message),
            Err(e) => ToolCallResult::error(e.to_string()),
        }
    }

    /// Call the symptom_trends tool
    fn call_symptom_trends(&mut self, args: HashMap<String, Value>) -> ToolCallResult {
        let params: tools::TrendsParams = match parse_args(args) {
            Ok(p) => p,
            Err(e) => return ToolCallResult::error(e),
        };

        match tools::symptom_trends(self.tracker.store(), params) {
            Ok(response) => ToolCallResult::success(response.message),
            Err(e) => ToolCallResult::error(e.to_string()),
        }
    }

    /// Call the symptom_status tool
    fn call_symptom_status(&mut self) -> ToolCallResult {
        let response = tools::get_status(self.tracker.store());
        ToolCallResult::success(response.message)
    }
}

/// Deserialize a tool's argument map into its typed params struct
///
/// serde produces the missing-field and type-mismatch messages, so tools
/// don't hand-check each argument.
fn parse_args<T: DeserializeOwned>(args: HashMap<String, Value>) -> Result<T, String> {
    let object: Map<String, Value> = args.into_iter().collect();
    serde_json::from_value(Value::Object(object)).map_err(|e| format!("invalid arguments: {}", e))
}
