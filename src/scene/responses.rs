//! Reply shapes of the scene server.
//!
//! Every counter and list is optional on the wire; absent fields read as
//! zero or empty instead of failing the call.

use crate::scene::model::{Rotation, Vec3};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOutcome {
    #[serde(default)]
    pub created: u64,
    #[serde(default)]
    pub failed: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAllOutcome {
    #[serde(default, rename = "deletedCount")]
    pub deleted_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    #[serde(default, rename = "actorCount", skip_serializing_if = "Option::is_none")]
    pub actor_count: Option<u64>,
    #[serde(default)]
    pub actors: Vec<SceneActor>,
}

impl SceneSnapshot {
    /// Count reported by the server, or the number of listed actors.
    pub fn count(&self) -> u64 {
        self.actor_count.unwrap_or(self.actors.len() as u64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneActor {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Rotation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<Vec3>,
}
