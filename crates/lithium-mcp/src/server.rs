//! JSON-RPC 2.0 tool server over line-delimited stdio.
//!
//! Each request is one JSON object per line; each response is written as one
//! line. Handled methods:
//!
//! - `initialize`  → server info and tool capability
//! - `tools/list`  → the four tool descriptors
//! - `tools/call`  → run a tool; failures come back as `isError` results
//! - `ping`        → empty result
//!
//! Messages without an `id` are notifications and get no response.

use std::collections::HashMap;
use std::io::{BufRead, Write};

use serde_json::{json, Value};
use tracing::{debug, info, warn};

use lithium_contracts::{
    error::{LithiumError, LithiumResult},
    result::ValidationMode,
};
use lithium_interface::{render, ValidationInterface};

use crate::tools::Tool;

pub const SERVER_NAME: &str = "lithium-validation";
pub const PROTOCOL_VERSION: &str = "2024-11-05";

const PARSE_ERROR: i64 = -32700;
const INVALID_REQUEST: i64 = -32600;
const METHOD_NOT_FOUND: i64 = -32601;
const INVALID_PARAMS: i64 = -32602;

/// The textual payload of one tool call.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutcome {
    pub text: String,
    pub is_error: bool,
}

impl ToolOutcome {
    fn ok(text: String) -> Self {
        Self { text, is_error: false }
    }

    fn error(text: String) -> Self {
        Self { text, is_error: true }
    }

    fn to_value(&self) -> Value {
        json!({
            "content": [{ "type": "text", "text": self.text }],
            "isError": self.is_error,
        })
    }
}

/// Dispatches protocol messages to the validation interface.
pub struct ToolServer {
    interface: ValidationInterface,
    schemas: HashMap<Tool, jsonschema::Validator>,
}

impl ToolServer {
    /// Build a server around `interface`, compiling every tool's input schema.
    pub fn new(interface: ValidationInterface) -> LithiumResult<Self> {
        let mut schemas = HashMap::new();
        for tool in Tool::ALL {
            let validator = jsonschema::validator_for(&tool.input_schema()).map_err(|e| {
                LithiumError::config(format!("invalid input schema for tool '{}': {e}", tool.name()))
            })?;
            schemas.insert(tool, validator);
        }
        Ok(Self { interface, schemas })
    }

    /// Serve requests from `reader` until end of input.
    pub fn run<R: BufRead, W: Write>(&self, reader: R, mut writer: W) -> LithiumResult<()> {
        info!(server = SERVER_NAME, "tool server listening on stdio");
        for line in reader.lines() {
            let line = line.map_err(|e| LithiumError::Io {
                reason: format!("failed to read request: {e}"),
            })?;
            if line.trim().is_empty() {
                continue;
            }
            if let Some(response) = self.handle_message(&line) {
                writeln!(writer, "{response}")
                    .and_then(|_| writer.flush())
                    .map_err(|e| LithiumError::Io {
                        reason: format!("failed to write response: {e}"),
                    })?;
            }
        }
        info!("input closed; tool server stopping");
        Ok(())
    }

    /// Handle one raw message. Returns the response, if one is owed.
    pub fn handle_message(&self, line: &str) -> Option<Value> {
        let message: Value = match serde_json::from_str(line) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "unparsable message");
                return Some(failure(Value::Null, PARSE_ERROR, &format!("parse error: {e}")));
            }
        };

        let id = message.get("id").cloned();
        let Some(method) = message.get("method").and_then(Value::as_str) else {
            return id.map(|id| failure(id, INVALID_REQUEST, "request has no method"));
        };
        // Notifications never get a response, not even an error.
        let id = id?;
        debug!(method, "request received");

        let params = message.get("params").cloned().unwrap_or(Value::Null);
        let response = match method {
            "initialize" => success(
                id,
                json!({
                    "protocolVersion": PROTOCOL_VERSION,
                    "capabilities": { "tools": {} },
                    "serverInfo": {
                        "name": SERVER_NAME,
                        "version": env!("CARGO_PKG_VERSION"),
                    },
                }),
            ),
            "ping" => success(id, json!({})),
            "tools/list" => success(
                id,
                json!({ "tools": Tool::ALL.map(Tool::descriptor).to_vec() }),
            ),
            "tools/call" => match params.get("name").and_then(Value::as_str) {
                Some(name) => {
                    let arguments = params.get("arguments").cloned().unwrap_or_else(|| json!({}));
                    success(id, self.call_tool(name, &arguments).to_value())
                }
                None => failure(id, INVALID_PARAMS, "tools/call requires a tool name"),
            },
            other => failure(id, METHOD_NOT_FOUND, &format!("method not found: {other}")),
        };
        Some(response)
    }

    /// Run the named tool. Bad arguments produce an error outcome and never
    /// reach the engine.
    pub fn call_tool(&self, name: &str, arguments: &Value) -> ToolOutcome {
        let Some(tool) = Tool::from_name(name) else {
            warn!(tool = name, "unknown tool requested");
            return ToolOutcome::error(format!("Unknown tool: {name}"));
        };

        match self.dispatch(tool, arguments) {
            Ok(text) => ToolOutcome::ok(text),
            Err(e) => {
                warn!(tool = name, error = %e, "tool call rejected");
                ToolOutcome::error(format!("Error: {e}"))
            }
        }
    }

    fn dispatch(&self, tool: Tool, arguments: &Value) -> LithiumResult<String> {
        self.check_arguments(tool, arguments)?;

        match tool {
            Tool::ValidateOutput => {
                let output = required_text(arguments)?;
                let context = arguments.get("context").and_then(Value::as_str);
                let mode = mode_argument(arguments)?;
                let result = self.interface.validate_output(output, context, mode);
                Ok(render::report(&result))
            }
            Tool::QuickCheck => {
                let output = required_text(arguments)?;
                let verdict = if self.interface.quick_check(output) {
                    "Valid"
                } else {
                    "Invalid"
                };
                Ok(format!("Quick validation result: {verdict}"))
            }
            Tool::GetConfidenceScore => {
                let output = required_text(arguments)?;
                let result = self.interface.validate_output(output, None, ValidationMode::Quick);
                Ok(format!(
                    "Confidence score: {:.2} ({})",
                    result.score,
                    result.confidence.label()
                ))
            }
            Tool::BatchValidate => {
                let outputs: Vec<&str> = arguments
                    .get("outputs")
                    .and_then(Value::as_array)
                    .map(|items| items.iter().filter_map(Value::as_str).collect())
                    .unwrap_or_default();
                if outputs.is_empty() {
                    return Err(LithiumError::MissingInput {
                        reason: "no outputs provided".to_string(),
                    });
                }
                let mode = mode_argument(arguments)?;
                let results = self.interface.batch_validate(outputs.as_slice(), mode);
                Ok(render::batch(&results))
            }
        }
    }

    fn check_arguments(&self, tool: Tool, arguments: &Value) -> LithiumResult<()> {
        let Some(schema) = self.schemas.get(&tool) else {
            return Err(LithiumError::config(format!(
                "no input schema compiled for tool '{}'",
                tool.name()
            )));
        };
        let problems: Vec<String> = schema
            .iter_errors(arguments)
            .map(|e| {
                let path = e.instance_path.to_string();
                if path.is_empty() {
                    e.to_string()
                } else {
                    format!("{path}: {e}")
                }
            })
            .collect();
        if problems.is_empty() {
            Ok(())
        } else {
            Err(LithiumError::InvalidArgument {
                reason: format!("arguments for '{}' rejected: {}", tool.name(), problems.join("; ")),
            })
        }
    }
}

fn required_text(arguments: &Value) -> LithiumResult<&str> {
    match arguments.get("output").and_then(Value::as_str) {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(LithiumError::MissingInput {
            reason: "no output provided".to_string(),
        }),
    }
}

fn mode_argument(arguments: &Value) -> LithiumResult<ValidationMode> {
    match arguments.get("validation_type").and_then(Value::as_str) {
        Some(name) => name.parse(),
        None => Ok(ValidationMode::Comprehensive),
    }
}

fn success(id: Value, result: Value) -> Value {
    json!({ "jsonrpc": "2.0", "id": id, "result": result })
}

fn failure(id: Value, code: i64, message: &str) -> Value {
    json!({ "jsonrpc": "2.0", "id": id, "error": { "code": code, "message": message } })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use lithium_contracts::config::ValidatorConfig;
    use lithium_interface::ValidationInterface;

    use super::ToolServer;
    use crate::tools::Tool;

    #[test]
    fn tool_without_schema_is_refused() {
        let mut server =
            ToolServer::new(ValidationInterface::new(ValidatorConfig::default()).unwrap()).unwrap();
        server.schemas.remove(&Tool::QuickCheck);

        let outcome = server.call_tool("quick_check", &json!({ "output": "Water is H2O." }));
        assert!(outcome.is_error);
        assert!(outcome.text.contains("no input schema compiled for tool 'quick_check'"));
    }
}
