use crate::scene::client::{SceneClient, SceneError};
use crate::scene::model::{Color, Rotation, ScaleSpec, Vec3};
use crate::scene::summary;
use crate::tools::{Operation, ToolError, ToolOutput, parse_args, require_actor_name};
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Deserialize)]
struct MoveArgs {
    actor_name: String,
    location: Vec3,
}

#[derive(Deserialize)]
struct ColorArgs {
    actor_name: String,
    color: Color,
}

#[derive(Deserialize)]
struct ScaleArgs {
    actor_name: String,
    scale: ScaleSpec,
}

#[derive(Deserialize)]
struct RotateArgs {
    actor_name: String,
    rotation: Rotation,
}

pub fn parse_move(args: &Value) -> Result<Operation, ToolError> {
    let args: MoveArgs = parse_args(args)?;
    require_actor_name("actor_name", &args.actor_name)?;
    Ok(Operation::MoveActor {
        name: args.actor_name,
        location: args.location,
    })
}

pub fn parse_color(args: &Value) -> Result<Operation, ToolError> {
    let args: ColorArgs = parse_args(args)?;
    require_actor_name("actor_name", &args.actor_name)?;
    Ok(Operation::SetColor {
        name: args.actor_name,
        color: args.color,
    })
}

pub fn parse_scale(args: &Value) -> Result<Operation, ToolError> {
    let args: ScaleArgs = parse_args(args)?;
    require_actor_name("actor_name", &args.actor_name)?;
    if args.scale == ScaleSpec::default() {
        return Err(ToolError::invalid_input(
            "scale must set uniform or at least one of x, y, z",
        ));
    }
    Ok(Operation::SetScale {
        name: args.actor_name,
        scale: args.scale,
    })
}

pub fn parse_rotate(args: &Value) -> Result<Operation, ToolError> {
    let args: RotateArgs = parse_args(args)?;
    require_actor_name("actor_name", &args.actor_name)?;
    Ok(Operation::Rotate {
        name: args.actor_name,
        rotation: args.rotation,
    })
}

pub fn run_move(client: &SceneClient, name: &str, location: &Vec3) -> Result<ToolOutput, SceneError> {
    client.move_actor(name, location)?;
    Ok(ToolOutput {
        text: summary::moved(name, location),
        structured: json!({ "actor_name": name, "location": location }),
    })
}

pub fn run_color(client: &SceneClient, name: &str, color: &Color) -> Result<ToolOutput, SceneError> {
    client.set_color(name, color)?;
    Ok(ToolOutput {
        text: summary::recolored(name, color),
        structured: json!({ "actor_name": name, "color": color }),
    })
}

pub fn run_scale(
    client: &SceneClient,
    name: &str,
    scale: &ScaleSpec,
) -> Result<ToolOutput, SceneError> {
    client.set_scale(name, scale)?;
    Ok(ToolOutput {
        text: summary::rescaled(name, scale),
        structured: json!({ "actor_name": name, "scale": scale }),
    })
}

pub fn run_rotate(
    client: &SceneClient,
    name: &str,
    rotation: &Rotation,
) -> Result<ToolOutput, SceneError> {
    client.rotate(name, rotation)?;
    Ok(ToolOutput {
        text: summary::rotated(name, rotation),
        structured: json!({ "actor_name": name, "rotation": rotation }),
    })
}
