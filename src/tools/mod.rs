use crate::mcp::contracts;
use crate::mcp::errors;
use crate::scene::client::{SceneClient, SceneError, actor_path};
use crate::scene::grid::{GridError, GridParams};
use crate::scene::model::{Color, Rotation, ScaleSpec, Vec3};
use crate::scene::normalize::CanonicalRequest;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::fmt;
use tracing::{info, warn};

pub mod create;
pub mod delete;
pub mod query;
pub mod transform;

#[derive(Debug, Clone)]
pub struct ToolError {
    pub kind: &'static str,
    pub message: String,
}

impl ToolError {
    fn new(kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(errors::INVALID_INPUT, message)
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ToolError {}

impl From<GridError> for ToolError {
    fn from(err: GridError) -> Self {
        Self::invalid_input(err.to_string())
    }
}

impl From<SceneError> for ToolError {
    fn from(err: SceneError) -> Self {
        let kind = match &err {
            SceneError::Unreachable { .. } | SceneError::NotResponding(_) => {
                errors::CONNECTION_FAILED
            }
            SceneError::Rejected { .. } => errors::REJECTED,
            SceneError::InvalidResponse(_) => errors::INTERNAL_ERROR,
            SceneError::InvalidActorName(_) => errors::INVALID_INPUT,
        };
        Self::new(kind, err.to_string())
    }
}

pub struct ToolOutput {
    pub text: String,
    pub structured: Value,
}

/// A fully validated tool call. Building one never touches the network.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    CreateActor(CanonicalRequest),
    CreateBatch(Vec<CanonicalRequest>),
    CreateGrid {
        params: GridParams,
        actors: Vec<CanonicalRequest>,
    },
    MoveActor {
        name: String,
        location: Vec3,
    },
    GetScene,
    SetColor {
        name: String,
        color: Color,
    },
    SetScale {
        name: String,
        scale: ScaleSpec,
    },
    Rotate {
        name: String,
        rotation: Rotation,
    },
    DeleteActor {
        name: String,
    },
    DeleteAll,
}

impl Operation {
    pub fn parse(tool: &str, args: &Value) -> Result<Self, ToolError> {
        match tool {
            contracts::TOOL_CREATE_ACTOR => create::parse_actor(args),
            contracts::TOOL_CREATE_ACTORS_BATCH => create::parse_batch(args),
            contracts::TOOL_CREATE_GRID => create::parse_grid(args),
            contracts::TOOL_MOVE_ACTOR => transform::parse_move(args),
            contracts::TOOL_GET_SCENE => Ok(Operation::GetScene),
            contracts::TOOL_SET_ACTOR_COLOR => transform::parse_color(args),
            contracts::TOOL_SET_ACTOR_SCALE => transform::parse_scale(args),
            contracts::TOOL_ROTATE_ACTOR => transform::parse_rotate(args),
            contracts::TOOL_DELETE_ACTOR => delete::parse_delete(args),
            contracts::TOOL_DELETE_ALL_ACTORS => Ok(Operation::DeleteAll),
            _ => Err(ToolError::invalid_input(format!(
                "tool not implemented: {tool}"
            ))),
        }
    }

    pub fn execute(&self, client: &SceneClient) -> Result<ToolOutput, SceneError> {
        match self {
            Operation::CreateActor(request) => create::run_actor(client, request),
            Operation::CreateBatch(actors) => create::run_batch(client, actors),
            Operation::CreateGrid { params, actors } => create::run_grid(client, params, actors),
            Operation::MoveActor { name, location } => transform::run_move(client, name, location),
            Operation::GetScene => query::run_get_scene(client),
            Operation::SetColor { name, color } => transform::run_color(client, name, color),
            Operation::SetScale { name, scale } => transform::run_scale(client, name, scale),
            Operation::Rotate { name, rotation } => transform::run_rotate(client, name, rotation),
            Operation::DeleteActor { name } => delete::run_delete(client, name),
            Operation::DeleteAll => delete::run_delete_all(client),
        }
    }
}

/// Runs one tool call end to end and always yields exactly one tool result.
///
/// Arguments are validated and expanded first, then the scene server is
/// probed, and only then is the operation request sent.
pub fn call(client: &SceneClient, tool: &str, args: &Value) -> Value {
    info!(tool, "tool called");

    let operation = match Operation::parse(tool, args) {
        Ok(operation) => operation,
        Err(err) => {
            warn!(tool, error = %err, "invalid tool call");
            return error_result(err.kind, err.message, Some(tool));
        }
    };

    if let Err(err) = client.health() {
        let err = ToolError::from(err);
        return error_result(err.kind, err.message, Some(tool));
    }

    match operation.execute(client) {
        Ok(output) => success_result(output),
        Err(err) => {
            let err = ToolError::from(err);
            warn!(tool, error = %err, "tool call failed");
            error_result(err.kind, err.message, Some(tool))
        }
    }
}

pub(crate) fn parse_args<T: DeserializeOwned>(args: &Value) -> Result<T, ToolError> {
    if !args.is_object() {
        return Err(ToolError::invalid_input("arguments must be an object"));
    }
    serde_json::from_value(args.clone())
        .map_err(|err| ToolError::invalid_input(format!("invalid arguments: {err}")))
}

pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<(), ToolError> {
    if value.trim().is_empty() {
        return Err(ToolError::invalid_input(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Names of existing actors end up in request paths.
pub(crate) fn require_actor_name(field: &str, value: &str) -> Result<(), ToolError> {
    require_non_empty(field, value)?;
    actor_path(value, None)
        .map(drop)
        .map_err(|err| ToolError::invalid_input(err.to_string()))
}

pub fn success_result(output: ToolOutput) -> serde_json::Value {
    json!({
        "content": [{"type": "text", "text": output.text}],
        "structuredContent": output.structured,
        "isError": false
    })
}

pub fn error_result(
    kind: &'static str,
    message: impl Into<String>,
    source: Option<&str>,
) -> serde_json::Value {
    let message = message.into();
    let mut error = json!({
        "kind": kind,
        "message": message,
    });

    if let Some(source) = source
        && let Some(obj) = error.as_object_mut()
    {
        obj.insert("source".to_string(), json!(source));
    }

    json!({
        "content": [{"type": "text", "text": format!("Error: {message}")}],
        "structuredContent": {"error": error},
        "isError": true
    })
}
