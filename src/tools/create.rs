use crate::mcp::contracts::MAX_BATCH_ACTORS;
use crate::scene::client::{SceneClient, SceneError};
use crate::scene::grid::{GridParams, expand_grid};
use crate::scene::model::MaterialKind;
use crate::scene::normalize::{
    BatchActorArgs, CanonicalRequest, CreateActorArgs, normalize, normalize_batch_item,
};
use crate::scene::summary;
use crate::tools::{Operation, ToolError, ToolOutput, parse_args, require_non_empty};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

#[derive(Deserialize)]
struct BatchArgs {
    actors: Vec<BatchActorArgs>,
}

pub fn parse_actor(args: &Value) -> Result<Operation, ToolError> {
    let args: CreateActorArgs = parse_args(args)?;
    require_non_empty("name", &args.name)?;
    if let Some(material) = &args.material
        && material.kind == MaterialKind::Color
        && material.color.is_none()
    {
        return Err(ToolError::invalid_input(
            "material of type color requires a color",
        ));
    }
    Ok(Operation::CreateActor(normalize(&args)))
}

pub fn parse_batch(args: &Value) -> Result<Operation, ToolError> {
    let args: BatchArgs = parse_args(args)?;
    if args.actors.is_empty() {
        return Err(ToolError::invalid_input("actors must not be empty"));
    }
    if args.actors.len() > MAX_BATCH_ACTORS {
        return Err(ToolError::invalid_input(format!(
            "batch of {} actors exceeds limit (max {MAX_BATCH_ACTORS})",
            args.actors.len()
        )));
    }
    for actor in &args.actors {
        require_non_empty("actors[].name", &actor.name)?;
    }
    Ok(Operation::CreateBatch(
        args.actors.iter().map(normalize_batch_item).collect(),
    ))
}

pub fn parse_grid(args: &Value) -> Result<Operation, ToolError> {
    let params: GridParams = parse_args(args)?;
    require_non_empty("base_name", &params.base_name)?;
    let actors = expand_grid(&params)?;
    Ok(Operation::CreateGrid { params, actors })
}

pub fn run_actor(client: &SceneClient, request: &CanonicalRequest) -> Result<ToolOutput, SceneError> {
    let echo = client.create_actor(request)?;
    info!(name = %request.name, actor_type = %request.actor_type, "actor created");
    Ok(ToolOutput {
        text: summary::created_actor(request),
        structured: json!({
            "request": request,
            "response": echo
        }),
    })
}

pub fn run_batch(
    client: &SceneClient,
    actors: &[CanonicalRequest],
) -> Result<ToolOutput, SceneError> {
    let outcome = client.create_batch(actors)?;
    info!(
        requested = actors.len(),
        created = outcome.created,
        failed = outcome.failed,
        "batch submitted"
    );
    Ok(ToolOutput {
        text: summary::batch(&outcome),
        structured: json!({
            "requested": actors.len(),
            "created": outcome.created,
            "failed": outcome.failed
        }),
    })
}

pub fn run_grid(
    client: &SceneClient,
    params: &GridParams,
    actors: &[CanonicalRequest],
) -> Result<ToolOutput, SceneError> {
    let outcome = client.create_batch(actors)?;
    info!(
        rows = params.rows,
        columns = params.columns,
        created = outcome.created,
        failed = outcome.failed,
        "grid submitted"
    );
    Ok(ToolOutput {
        text: summary::grid(params, &outcome),
        structured: json!({
            "rows": params.rows,
            "columns": params.columns,
            "total": actors.len(),
            "spacing": params.spacing,
            "created": outcome.created,
            "failed": outcome.failed
        }),
    })
}
