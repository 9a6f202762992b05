use crate::scene::client::{SceneClient, SceneError};
use crate::scene::summary;
use crate::tools::ToolOutput;
use serde_json::json;

pub fn run_get_scene(client: &SceneClient) -> Result<ToolOutput, SceneError> {
    let snapshot = client.scene()?;
    Ok(ToolOutput {
        text: summary::scene(&snapshot),
        structured: json!({
            "actorCount": snapshot.count(),
            "actors": snapshot.actors
        }),
    })
}
