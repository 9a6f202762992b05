use serde_json::json;

pub mod contracts;
pub mod errors;

pub fn tool_definitions() -> Vec<serde_json::Value> {
    vec![
        json!({
            "name": contracts::TOOL_CREATE_ACTOR,
            "description": "Create a new actor in the scene.",
            "inputSchema": contracts::create_actor_schema()
        }),
        json!({
            "name": contracts::TOOL_CREATE_ACTORS_BATCH,
            "description": "Create multiple actors at once.",
            "inputSchema": contracts::create_actors_batch_schema()
        }),
        json!({
            "name": contracts::TOOL_CREATE_GRID,
            "description": "Create a grid of actors.",
            "inputSchema": contracts::create_grid_schema()
        }),
        json!({
            "name": contracts::TOOL_MOVE_ACTOR,
            "description": "Move an actor to a new location.",
            "inputSchema": contracts::move_actor_schema()
        }),
        json!({
            "name": contracts::TOOL_GET_SCENE,
            "description": "Get the actors currently in the scene.",
            "inputSchema": contracts::get_scene_schema()
        }),
        json!({
            "name": contracts::TOOL_SET_ACTOR_COLOR,
            "description": "Set the color of an actor.",
            "inputSchema": contracts::set_actor_color_schema()
        }),
        json!({
            "name": contracts::TOOL_SET_ACTOR_SCALE,
            "description": "Set the scale of an actor.",
            "inputSchema": contracts::set_actor_scale_schema()
        }),
        json!({
            "name": contracts::TOOL_ROTATE_ACTOR,
            "description": "Rotate an actor.",
            "inputSchema": contracts::rotate_actor_schema()
        }),
        json!({
            "name": contracts::TOOL_DELETE_ACTOR,
            "description": "Delete an actor from the scene.",
            "inputSchema": contracts::delete_actor_schema()
        }),
        json!({
            "name": contracts::TOOL_DELETE_ALL_ACTORS,
            "description": "Delete all user-created actors from the scene.",
            "inputSchema": contracts::delete_all_actors_schema()
        }),
    ]
}
