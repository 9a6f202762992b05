use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorType {
    Cube,
    Sphere,
    Cylinder,
    Plane,
    Light,
    Camera,
}

impl ActorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorType::Cube => "Cube",
            ActorType::Sphere => "Sphere",
            ActorType::Cylinder => "Cylinder",
            ActorType::Plane => "Plane",
            ActorType::Light => "Light",
            ActorType::Camera => "Camera",
        }
    }

    pub const ALL: [&'static str; 6] = ["Cube", "Sphere", "Cylinder", "Plane", "Light", "Camera"];
}

impl fmt::Display for ActorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Light-only creation fields. Only reachable through [`ActorKind::Light`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LightExtras {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f64>,
    #[serde(rename = "attenuationRadius", skip_serializing_if = "Option::is_none")]
    pub attenuation_radius: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActorKind {
    Cube,
    Sphere,
    Cylinder,
    Plane,
    Light(LightExtras),
    Camera,
}

impl ActorKind {
    /// Resolves the closed kind for `actor_type`. Light extras are kept only
    /// for lights and silently dropped for every other type.
    pub fn new(actor_type: ActorType, extras: LightExtras) -> Self {
        match actor_type {
            ActorType::Cube => ActorKind::Cube,
            ActorType::Sphere => ActorKind::Sphere,
            ActorType::Cylinder => ActorKind::Cylinder,
            ActorType::Plane => ActorKind::Plane,
            ActorType::Light => ActorKind::Light(extras),
            ActorType::Camera => ActorKind::Camera,
        }
    }

    pub fn actor_type(&self) -> ActorType {
        match self {
            ActorKind::Cube => ActorType::Cube,
            ActorKind::Sphere => ActorType::Sphere,
            ActorKind::Cylinder => ActorType::Cylinder,
            ActorKind::Plane => ActorType::Plane,
            ActorKind::Light(_) => ActorType::Light,
            ActorKind::Camera => ActorType::Camera,
        }
    }

    pub fn light(&self) -> Option<LightExtras> {
        match self {
            ActorKind::Light(extras) => Some(*extras),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    /// Left out when not given; the scene server treats a missing alpha as 1.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    Color,
    Preset,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    #[serde(rename = "type", alias = "kind")]
    pub kind: MaterialKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScaleSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uniform: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}
