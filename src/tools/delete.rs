use crate::scene::client::{SceneClient, SceneError};
use crate::scene::summary;
use crate::tools::{Operation, ToolError, ToolOutput, parse_args, require_actor_name};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

#[derive(Deserialize)]
struct DeleteArgs {
    actor_name: String,
}

pub fn parse_delete(args: &Value) -> Result<Operation, ToolError> {
    let args: DeleteArgs = parse_args(args)?;
    require_actor_name("actor_name", &args.actor_name)?;
    Ok(Operation::DeleteActor {
        name: args.actor_name,
    })
}

pub fn run_delete(client: &SceneClient, name: &str) -> Result<ToolOutput, SceneError> {
    client.delete_actor(name)?;
    Ok(ToolOutput {
        text: summary::deleted(name),
        structured: json!({ "actor_name": name }),
    })
}

pub fn run_delete_all(client: &SceneClient) -> Result<ToolOutput, SceneError> {
    let outcome = client.delete_all()?;
    info!(deleted = outcome.deleted_count, "scene cleared");
    Ok(ToolOutput {
        text: summary::deleted_all(outcome.deleted_count),
        structured: json!({ "deletedCount": outcome.deleted_count }),
    })
}
