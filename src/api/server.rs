//! API Server Module
//!
//! This module implements a JSON-RPC server for validating workflow
//! specifications. It provides an HTTP endpoint that accepts specification
//! documents, runs them through the validator, and returns a verdict.

use crate::{
    SpecDocument, ValidationVerdict, VerdictStatus, config::Config, validation::Validator,
};
use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Shared application state that is accessible across all request handlers
///
/// Holds the validator, which is immutable after startup and shared
/// across concurrent requests.
#[derive(Clone)]
pub struct AppState {
    validator: Arc<Validator>,
}

/// The main API server struct
///
/// Encapsulates the server configuration and application state.
/// The server manages the HTTP endpoint for validating specifications.
pub struct Server {
    config: Config,
    state: AppState,
}

impl Server {
    /// Creates a new API server instance
    ///
    /// # Arguments
    /// * `config` - Service configuration (API host/port, Kueue settings)
    ///
    /// # Returns
    /// A new `Server` instance with the validator built from the Kueue section
    pub fn new(config: Config) -> Self {
        // Initialize the specification validator from the Kueue settings
        let validator = Arc::new(Validator::new(config.kueue.clone()));

        let state = AppState { validator };

        Self { config, state }
    }

    /// Starts the API server and begins listening for incoming requests
    ///
    /// This method:
    /// 1. Creates an Axum router with a single POST endpoint at "/"
    /// 2. Binds the router to the configured host and port
    /// 3. Starts serving requests asynchronously
    ///
    /// # Returns
    /// `Ok(())` if the server starts successfully, or an error if binding fails
    pub async fn start(self) -> anyhow::Result<()> {
        // Create the router with a single POST endpoint that handles JSON-RPC requests
        let app = Router::new()
            .route("/", post(handle_rpc))
            .with_state(self.state);

        // Format the listening address from config
        let addr = format!("{}:{}", self.config.api.host, self.config.api.port);
        info!("API server listening on {}", addr);

        // Bind to the TCP address and start serving
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// JSON-RPC 2.0 request structure
///
/// Represents an incoming JSON-RPC request. The structure follows the
/// JSON-RPC 2.0 specification:
/// - `jsonrpc`: Protocol version (should be "2.0")
/// - `method`: The RPC method to call (e.g., "validateSpecification")
/// - `params`: Method parameters (arbitrary JSON value)
/// - `id`: Request identifier for matching responses
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: Value,
    id: Value,
}

/// JSON-RPC 2.0 response structure
///
/// Represents a JSON-RPC response sent back to the client.
/// Either `result` or `error` will be populated, but not both.
#[derive(Debug, Serialize)]
struct JsonRpcResponse {
    jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
    id: Value,
}

/// JSON-RPC error object
///
/// Contains error information when a request fails:
/// - `code`: Error code (e.g., -32601 for method not found, -32602 for invalid params)
/// - `message`: Human-readable error description
#[derive(Debug, Serialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

/// Main RPC request handler
///
/// This function is called for every POST request to the "/" endpoint.
/// It routes the request to the appropriate handler based on the method name.
async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> Json<JsonRpcResponse> {
    info!("Received RPC request: {}", request.method);

    // Route to the appropriate handler based on the method name
    match request.method.as_str() {
        "validateSpecification" => handle_validate_specification(state, request).await,
        // Return "Method not found" error for unsupported methods
        _ => Json(JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(JsonRpcError {
                code: -32601, // Standard JSON-RPC error code for method not found
                message: "Method not found".to_string(),
            }),
            id: request.id,
        }),
    }
}

/// Handles the "validateSpecification" RPC method
///
/// This function:
/// 1. Deserializes the specification document from the request parameters
/// 2. Runs the queue validator over every step
/// 3. If valid: returns an accepted verdict
/// 4. If invalid: returns a rejected verdict carrying the failure reason
///
/// # Arguments
/// * `state` - Shared application state
/// * `request` - The JSON-RPC request containing the specification document
///
/// # Returns
/// A JSON-RPC response containing a ValidationVerdict (accepted or rejected)
async fn handle_validate_specification(
    state: AppState,
    request: JsonRpcRequest,
) -> Json<JsonRpcResponse> {
    // Step 1: Deserialize the specification from the request parameters
    let spec: SpecDocument = match serde_json::from_value(request.params.clone()) {
        Ok(spec) => spec,
        Err(e) => {
            error!("Failed to deserialize specification: {}", e);
            // Return invalid params error if deserialization fails
            return Json(JsonRpcResponse {
                jsonrpc: "2.0".to_string(),
                result: None,
                error: Some(JsonRpcError {
                    code: -32602, // Standard JSON-RPC error code for invalid params
                    message: format!("Invalid params: {}", e),
                }),
                id: request.id,
            });
        }
    };

    let step_count = spec.workflow.specification.steps.len();
    info!("Validating specification with {} steps", step_count);

    // Step 2: Run the queue validator over the document
    match state.validator.validate(&spec) {
        // Validation succeeded - the specification is accepted
        Ok(()) => {
            info!("Specification with {} steps accepted", step_count);

            let verdict = ValidationVerdict {
                status: VerdictStatus::Accepted,
                timestamp: chrono::Utc::now().timestamp() as u64,
            };

            // Return the verdict as a successful result
            Json(JsonRpcResponse {
                jsonrpc: "2.0".to_string(),
                result: Some(serde_json::to_value(verdict).unwrap()),
                error: None,
                id: request.id,
            })
        }
        // Validation failed - reject the specification
        Err(validation_error) => {
            warn!("Specification validation failed: {}", validation_error);

            // Create a rejected verdict carrying the failure reason
            // This tells the caller exactly which step and queue failed
            let verdict = ValidationVerdict {
                status: VerdictStatus::Rejected {
                    reason: validation_error.to_string(),
                },
                timestamp: chrono::Utc::now().timestamp() as u64,
            };

            // Return the rejected verdict as a successful response
            // Note: This is still a successful JSON-RPC call, but the verdict indicates rejection
            Json(JsonRpcResponse {
                jsonrpc: "2.0".to_string(),
                result: Some(serde_json::to_value(verdict).unwrap()),
                error: None,
                id: request.id,
            })
        }
    }
}
