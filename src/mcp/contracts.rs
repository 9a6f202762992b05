use crate::scene::grid::MAX_GRID_ACTORS;
use crate::scene::model::ActorType;
use serde_json::json;

pub const TOOL_CREATE_ACTOR: &str = "create_actor";
pub const TOOL_CREATE_ACTORS_BATCH: &str = "create_actors_batch";
pub const TOOL_CREATE_GRID: &str = "create_grid";
pub const TOOL_MOVE_ACTOR: &str = "move_actor";
pub const TOOL_GET_SCENE: &str = "get_scene";
pub const TOOL_SET_ACTOR_COLOR: &str = "set_actor_color";
pub const TOOL_SET_ACTOR_SCALE: &str = "set_actor_scale";
pub const TOOL_ROTATE_ACTOR: &str = "rotate_actor";
pub const TOOL_DELETE_ACTOR: &str = "delete_actor";
pub const TOOL_DELETE_ALL_ACTORS: &str = "delete_all_actors";

pub const MAX_BATCH_ACTORS: usize = 10_000;

fn location_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "x": { "type": "number" },
            "y": { "type": "number" },
            "z": { "type": "number" }
        },
        "required": ["x", "y", "z"]
    })
}

fn color_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "r": { "type": "number" },
            "g": { "type": "number" },
            "b": { "type": "number" },
            "a": { "type": "number" }
        },
        "required": ["r", "g", "b"]
    })
}

fn scale_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "uniform": { "type": "number", "description": "Uniform scale for all axes" },
            "x": { "type": "number" },
            "y": { "type": "number" },
            "z": { "type": "number" }
        }
    })
}

fn dimensions_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "width": { "type": "number", "description": "Width in scene units" },
            "depth": { "type": "number", "description": "Depth in scene units" },
            "height": { "type": "number", "description": "Height in scene units" }
        },
        "description": "Physical dimensions in scene units (overrides scale)"
    })
}

fn actor_name_schema() -> serde_json::Value {
    json!({ "type": "string", "minLength": 1 })
}

pub fn create_actor_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "type": { "type": "string", "enum": ActorType::ALL, "description": "Type of actor" },
            "name": { "type": "string", "minLength": 1, "description": "Actor name" },
            "location": location_schema(),
            "material": {
                "type": "object",
                "properties": {
                    "type": { "type": "string", "enum": ["color", "preset"] },
                    "color": color_schema(),
                    "name": { "type": "string" }
                },
                "required": ["type"]
            },
            "scale": scale_schema(),
            "dimensions": dimensions_schema(),
            "intensity": { "type": "number", "description": "Light intensity (Light actors only)" },
            "attenuationRadius": {
                "type": "number",
                "description": "Light attenuation radius (Light actors only)"
            }
        },
        "required": ["type", "name", "location"]
    })
}

pub fn create_actors_batch_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "actors": {
                "type": "array",
                "minItems": 1,
                "maxItems": MAX_BATCH_ACTORS,
                "items": {
                    "type": "object",
                    "properties": {
                        "type": { "type": "string", "enum": ActorType::ALL },
                        "name": { "type": "string", "minLength": 1 },
                        "location": location_schema(),
                        "color": color_schema(),
                        "scale": scale_schema(),
                        "dimensions": dimensions_schema(),
                        "intensity": { "type": "number" },
                        "attenuationRadius": { "type": "number" }
                    },
                    "required": ["type", "name", "location"]
                },
                "description": "Array of actors to create"
            }
        },
        "required": ["actors"]
    })
}

pub fn create_grid_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "type": { "type": "string", "enum": ActorType::ALL, "description": "Type of actors to create" },
            "base_name": {
                "type": "string",
                "minLength": 1,
                "description": "Base name for actors (row and column are appended as _ROW_COL)"
            },
            "rows": { "type": "integer", "minimum": 1, "description": "Number of rows" },
            "columns": { "type": "integer", "minimum": 1, "description": "Number of columns" },
            "spacing": { "type": "number", "description": "Distance between actors" },
            "start_location": location_schema(),
            "color": color_schema(),
            "scale": scale_schema(),
            "dimensions": dimensions_schema()
        },
        "required": ["type", "base_name", "rows", "columns", "spacing", "start_location"],
        "description": format!("At most {MAX_GRID_ACTORS} actors per grid")
    })
}

pub fn move_actor_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "actor_name": actor_name_schema(),
            "location": location_schema()
        },
        "required": ["actor_name", "location"]
    })
}

pub fn get_scene_schema() -> serde_json::Value {
    json!({ "type": "object", "properties": {} })
}

pub fn set_actor_color_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "actor_name": actor_name_schema(),
            "color": color_schema()
        },
        "required": ["actor_name", "color"]
    })
}

pub fn set_actor_scale_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "actor_name": actor_name_schema(),
            "scale": scale_schema()
        },
        "required": ["actor_name", "scale"]
    })
}

pub fn rotate_actor_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "actor_name": actor_name_schema(),
            "rotation": {
                "type": "object",
                "properties": {
                    "pitch": { "type": "number" },
                    "yaw": { "type": "number" },
                    "roll": { "type": "number" }
                },
                "required": ["pitch", "yaw", "roll"]
            }
        },
        "required": ["actor_name", "rotation"]
    })
}

pub fn delete_actor_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "actor_name": actor_name_schema()
        },
        "required": ["actor_name"]
    })
}

pub fn delete_all_actors_schema() -> serde_json::Value {
    json!({ "type": "object", "properties": {} })
}
