//! HTTP transport implementation.
//!
//! JSON-RPC 2.0 over POST requests on a single endpoint. Standard HTTP
//! clients (curl, browsers, MCP clients) talk to the server through here.
//!
//! Wire contract:
//! - A body without an `id` is a notification and gets HTTP 204, no body,
//!   whatever else the body contains.
//! - `initialize`, `tools/list` and `tools/call` answer HTTP 200 with a
//!   JSON-RPC envelope carrying either `result` or `error`.
//! - Any other method answers HTTP 404 with a plain `detail` string.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::server::PromptServer;
use crate::domains::tools::ToolError;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Value, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }

    /// Method not found error.
    pub fn method_not_found(id: Value, msg: impl Into<String>) -> Self {
        Self::error(id, -32601, msg)
    }

    /// Invalid params error.
    pub fn invalid_params(id: Value, msg: impl Into<String>) -> Self {
        Self::error(id, -32602, msg)
    }
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The prompt server instance.
    server: PromptServer,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Build the router serving the RPC endpoint plus info and health routes.
    ///
    /// Routes on the same path merge by method, so an rpc_path of `/`
    /// coexists with the GET info route.
    fn router(&self, state: AppState) -> Router {
        let mut app = Router::new()
            .route(&self.config.rpc_path, post(handle_rpc))
            .route("/health", get(health_check))
            .route("/", get(root_handler))
            .with_state(state);

        // Add CORS if enabled
        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        app
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: PromptServer) -> TransportResult<()> {
        info!("Starting transport: {}", self.config.description());

        let addr = self.address();

        let state = AppState { server };
        let app = self.router(state);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!(
            "Ready - listening on {} (JSON-RPC over HTTP, CORS {})",
            addr, cors_status
        );
        info!("  → JSON-RPC: POST {}", self.config.rpc_path);
        info!("  → Health:   GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Root handler - provides API info.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    let config = state.server.config();
    Json(json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "transport": "HTTP",
        "endpoints": {
            "rpc": config.http.rpc_path,
            "health": "/health"
        },
        "protocol": "JSON-RPC 2.0",
        "documentation": "Send POST requests to the RPC endpoint with JSON-RPC messages"
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Handle JSON-RPC requests.
///
/// The body is read as a raw JSON value and interpreted field by field:
/// whether the request is well-formed is decided here, not by the
/// deserializer. An `id` of JSON `null` counts as absent, and a non-string
/// `method` dispatches like any unknown method.
#[instrument(skip_all, fields(method))]
async fn handle_rpc(State(state): State<AppState>, Json(request): Json<Value>) -> Response {
    // Notifications carry no id and get no body back.
    let id = match request.get("id") {
        None | Some(Value::Null) => {
            info!("Notification received, acknowledging without a body");
            return StatusCode::NO_CONTENT.into_response();
        }
        Some(id) => id.clone(),
    };

    let method = request.get("method").and_then(Value::as_str).unwrap_or_default();
    tracing::Span::current().record("method", method);
    info!("Received JSON-RPC request: {}", method);

    let params = request.get("params").cloned();

    match method {
        // Initialize the MCP session
        "initialize" => (StatusCode::OK, Json(handle_initialize(&state, id))).into_response(),

        // List available tools
        "tools/list" => (StatusCode::OK, Json(handle_tools_list(&state, id))).into_response(),

        // Call a tool
        "tools/call" => {
            let response = handle_tools_call(&state, id, params).await;
            (StatusCode::OK, Json(response)).into_response()
        }

        // Unknown method
        other => {
            warn!("Unknown method: {}", other);
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "detail": format!("Method '{other}' not found") })),
            )
                .into_response()
        }
    }
}

/// Handle initialize request.
fn handle_initialize(state: &AppState, id: Value) -> JsonRpcResponse {
    info!("Processing initialize request");

    let result = json!({
        "protocolVersion": PromptServer::PROTOCOL_VERSION,
        "capabilities": {
            "tools": {}
        },
        "serverInfo": {
            "name": state.server.name(),
            "version": state.server.version()
        },
        "tools": state.server.list_tools()
    });

    JsonRpcResponse::success(id, result)
}

/// Handle tools/list request.
fn handle_tools_list(state: &AppState, id: Value) -> JsonRpcResponse {
    info!("Processing tools/list request");

    let result = json!({
        "tools": state.server.list_tools()
    });

    JsonRpcResponse::success(id, result)
}

/// Handle tools/call request.
///
/// A tool that runs but reports a recoverable failure still completes the
/// RPC: the payload carries `isError: true` instead of an `error` object.
async fn handle_tools_call(state: &AppState, id: Value, params: Option<Value>) -> JsonRpcResponse {
    info!("Processing tools/call request");

    let params = params.unwrap_or_else(|| json!({}));

    // Clients disagree on the field name; accept both, first non-empty
    // string wins.
    let tool = params
        .get("tool")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .or_else(|| {
            params
                .get("name")
                .and_then(Value::as_str)
                .filter(|t| !t.is_empty())
        });
    let Some(tool) = tool else {
        return JsonRpcResponse::invalid_params(id, "Missing 'tool' parameter");
    };

    let arguments = params.get("arguments").cloned().unwrap_or_else(|| json!({}));

    match state.server.call_tool(tool, arguments).await {
        Ok(raw) => {
            let text = serde_json::to_string_pretty(&raw).unwrap_or_else(|_| raw.to_string());
            JsonRpcResponse::success(
                id,
                json!({
                    "content": [{ "type": "text", "text": text }],
                    "structuredContent": raw,
                    "isError": false
                }),
            )
        }
        Err(ToolError::Failed(e)) => {
            warn!("Tool '{}' reported a failure: {}", tool, e);
            JsonRpcResponse::success(
                id,
                json!({
                    "content": [{ "type": "text", "text": e.to_string() }],
                    "isError": true
                }),
            )
        }
        Err(e @ ToolError::UnknownTool(_)) => JsonRpcResponse::method_not_found(id, e.to_string()),
        Err(e @ ToolError::InvalidArguments { .. }) => {
            warn!("Rejected arguments for tool '{}'", tool);
            JsonRpcResponse::error(id, -32000, e.to_string())
        }
        Err(ToolError::Internal(detail)) => {
            JsonRpcResponse::error(id, -32000, format!("Internal server error: {detail}"))
        }
    }
}
