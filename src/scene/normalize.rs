use crate::scene::model::{
    ActorKind, ActorType, Color, DimensionSpec, LightExtras, MaterialKind, MaterialSpec,
    ScaleSpec, Vec3,
};
use serde::{Deserialize, Serialize};

/// Arguments of a single `create_actor` call, as the agent supplies them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateActorArgs {
    #[serde(rename = "type")]
    pub actor_type: ActorType,
    pub name: String,
    pub location: Vec3,
    #[serde(default)]
    pub material: Option<MaterialSpec>,
    #[serde(default)]
    pub scale: Option<ScaleSpec>,
    #[serde(default)]
    pub dimensions: Option<DimensionSpec>,
    #[serde(default)]
    pub intensity: Option<f64>,
    #[serde(default, rename = "attenuationRadius")]
    pub attenuation_radius: Option<f64>,
}

/// One entry of `create_actors_batch`. Colors are given directly here
/// instead of through a material.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BatchActorArgs {
    #[serde(rename = "type")]
    pub actor_type: ActorType,
    pub name: String,
    pub location: Vec3,
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub scale: Option<ScaleSpec>,
    #[serde(default)]
    pub dimensions: Option<DimensionSpec>,
    #[serde(default)]
    pub intensity: Option<f64>,
    #[serde(default, rename = "attenuationRadius")]
    pub attenuation_radius: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActorSpec {
    pub kind: ActorKind,
    pub name: String,
    pub location: Vec3,
    pub color: Option<Color>,
    pub scale: Option<ScaleSpec>,
    pub dimensions: Option<DimensionSpec>,
}

/// Wire payload for `POST /actors` and each entry of `POST /actors/batch`.
///
/// Optional fields are serialized only when the caller supplied them.
/// `scale` and `dimensions` may both be present: which one wins is decided
/// by the scene server.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalRequest {
    #[serde(rename = "type")]
    pub actor_type: ActorType,
    pub name: String,
    pub location: Vec3,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<ScaleSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<DimensionSpec>,
    #[serde(flatten)]
    pub light: Option<LightExtras>,
}

impl From<&ActorSpec> for CanonicalRequest {
    fn from(spec: &ActorSpec) -> Self {
        Self {
            actor_type: spec.kind.actor_type(),
            name: spec.name.clone(),
            location: spec.location,
            color: spec.color,
            scale: spec.scale,
            dimensions: spec.dimensions,
            light: spec.kind.light(),
        }
    }
}

impl CreateActorArgs {
    pub fn to_spec(&self) -> ActorSpec {
        ActorSpec {
            kind: ActorKind::new(
                self.actor_type,
                LightExtras {
                    intensity: self.intensity,
                    attenuation_radius: self.attenuation_radius,
                },
            ),
            name: self.name.clone(),
            location: self.location,
            color: self.material.as_ref().and_then(lower_material),
            scale: self.scale,
            dimensions: self.dimensions,
        }
    }
}

impl BatchActorArgs {
    pub fn to_spec(&self) -> ActorSpec {
        ActorSpec {
            kind: ActorKind::new(
                self.actor_type,
                LightExtras {
                    intensity: self.intensity,
                    attenuation_radius: self.attenuation_radius,
                },
            ),
            name: self.name.clone(),
            location: self.location,
            color: self.color,
            scale: self.scale,
            dimensions: self.dimensions,
        }
    }
}

pub fn normalize(args: &CreateActorArgs) -> CanonicalRequest {
    CanonicalRequest::from(&args.to_spec())
}

pub fn normalize_batch_item(args: &BatchActorArgs) -> CanonicalRequest {
    CanonicalRequest::from(&args.to_spec())
}

fn lower_material(material: &MaterialSpec) -> Option<Color> {
    match material.kind {
        MaterialKind::Color => material.color,
        // Presets have no wire field yet.
        MaterialKind::Preset => None,
    }
}
