use crate::scene::model::{
    ActorKind, ActorType, Color, DimensionSpec, LightExtras, ScaleSpec, Vec3,
};
use crate::scene::normalize::{ActorSpec, CanonicalRequest};
use serde::Deserialize;
use thiserror::Error;

pub const MAX_GRID_ACTORS: i64 = 10_000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GridParams {
    #[serde(rename = "type")]
    pub actor_type: ActorType,
    pub base_name: String,
    pub rows: i64,
    pub columns: i64,
    pub spacing: f64,
    pub start_location: Vec3,
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub scale: Option<ScaleSpec>,
    #[serde(default)]
    pub dimensions: Option<DimensionSpec>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("rows must be at least 1 (got {0})")]
    InvalidRows(i64),
    #[error("columns must be at least 1 (got {0})")]
    InvalidColumns(i64),
    #[error("grid of {0} actors exceeds limit (max {MAX_GRID_ACTORS})")]
    TooLarge(i64),
}

impl GridParams {
    pub fn total(&self) -> i64 {
        self.rows.saturating_mul(self.columns)
    }
}

/// Expands a grid into one creation request per cell, row-major.
///
/// Names are `{base_name}_{row}_{col}`. Columns advance along x, rows along
/// y, and every cell shares the start z.
pub fn expand_grid(params: &GridParams) -> Result<Vec<CanonicalRequest>, GridError> {
    if params.rows < 1 {
        return Err(GridError::InvalidRows(params.rows));
    }
    if params.columns < 1 {
        return Err(GridError::InvalidColumns(params.columns));
    }
    if params.total() > MAX_GRID_ACTORS {
        return Err(GridError::TooLarge(params.total()));
    }

    let kind = ActorKind::new(params.actor_type, LightExtras::default());
    let start = params.start_location;
    let mut actors = Vec::with_capacity(usize::try_from(params.total()).unwrap_or_default());

    for row in 0..params.rows {
        for col in 0..params.columns {
            let spec = ActorSpec {
                kind,
                name: format!("{}_{row}_{col}", params.base_name),
                location: Vec3 {
                    x: start.x + col as f64 * params.spacing,
                    y: start.y + row as f64 * params.spacing,
                    z: start.z,
                },
                color: params.color,
                scale: params.scale,
                dimensions: params.dimensions,
            };
            actors.push(CanonicalRequest::from(&spec));
        }
    }

    Ok(actors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::normalize::{CreateActorArgs, normalize};
    use serde_json::{Value, json};

    fn params(value: Value) -> GridParams {
        serde_json::from_value(value).expect("grid params")
    }

    #[test]
    fn two_by_three_box_grid() {
        let grid = params(json!({
            "type": "Cube",
            "base_name": "Box",
            "rows": 2,
            "columns": 3,
            "spacing": 100.0,
            "start_location": {"x": 0.0, "y": 0.0, "z": 0.0}
        }));
        let actors = expand_grid(&grid).expect("expanded");

        let names: Vec<&str> = actors.iter().map(|actor| actor.name.as_str()).collect();
        assert_eq!(
            names,
            ["Box_0_0", "Box_0_1", "Box_0_2", "Box_1_0", "Box_1_1", "Box_1_2"]
        );

        let last = actors.last().expect("last cell");
        assert_eq!(
            last.location,
            Vec3 {
                x: 200.0,
                y: 100.0,
                z: 0.0
            }
        );
    }

    #[test]
    fn z_stays_at_start() {
        let grid = params(json!({
            "type": "Sphere",
            "base_name": "Ball",
            "rows": 3,
            "columns": 2,
            "spacing": 50.0,
            "start_location": {"x": 10.0, "y": -20.0, "z": 75.0}
        }));
        let actors = expand_grid(&grid).expect("expanded");
        assert_eq!(actors.len(), 6);
        assert!(actors.iter().all(|actor| actor.location.z == 75.0));
        assert_eq!(actors[3].name, "Ball_1_1");
        assert_eq!(actors[3].location.x, 60.0);
        assert_eq!(actors[3].location.y, 30.0);
    }

    #[test]
    fn shared_fields_copied_to_every_cell() {
        let grid = params(json!({
            "type": "Cube",
            "base_name": "Tile",
            "rows": 2,
            "columns": 2,
            "spacing": 120.0,
            "start_location": {"x": 0.0, "y": 0.0, "z": 0.0},
            "color": {"r": 0.0, "g": 0.0, "b": 1.0},
            "scale": {"uniform": 0.5},
            "dimensions": {"width": 100.0, "depth": 100.0, "height": 10.0}
        }));
        let actors = expand_grid(&grid).expect("expanded");
        for actor in &actors {
            let value = serde_json::to_value(actor).expect("serialize");
            assert_eq!(value["color"], json!({"r": 0.0, "g": 0.0, "b": 1.0}));
            assert_eq!(value["scale"], json!({"uniform": 0.5}));
            assert_eq!(
                value["dimensions"],
                json!({"width": 100.0, "depth": 100.0, "height": 10.0})
            );
        }
    }

    #[test]
    fn single_cell_matches_single_normalize() {
        let grid = params(json!({
            "type": "Cylinder",
            "base_name": "Post",
            "rows": 1,
            "columns": 1,
            "spacing": 250.0,
            "start_location": {"x": 5.0, "y": 6.0, "z": 7.0},
            "color": {"r": 1.0, "g": 0.0, "b": 0.0},
            "scale": {"x": 1.0, "y": 1.0, "z": 3.0}
        }));
        let actors = expand_grid(&grid).expect("expanded");

        let single: CreateActorArgs = serde_json::from_value(json!({
            "type": "Cylinder",
            "name": "Post_0_0",
            "location": {"x": 5.0, "y": 6.0, "z": 7.0},
            "material": {"type": "color", "color": {"r": 1.0, "g": 0.0, "b": 0.0}},
            "scale": {"x": 1.0, "y": 1.0, "z": 3.0}
        }))
        .expect("single");

        assert_eq!(actors, vec![normalize(&single)]);
    }

    #[test]
    fn zero_rows_rejected() {
        let grid = params(json!({
            "type": "Cube",
            "base_name": "Box",
            "rows": 0,
            "columns": 3,
            "spacing": 100.0,
            "start_location": {"x": 0.0, "y": 0.0, "z": 0.0}
        }));
        assert_eq!(expand_grid(&grid), Err(GridError::InvalidRows(0)));
    }

    #[test]
    fn zero_columns_rejected() {
        let grid = params(json!({
            "type": "Cube",
            "base_name": "Box",
            "rows": 2,
            "columns": 0,
            "spacing": 100.0,
            "start_location": {"x": 0.0, "y": 0.0, "z": 0.0}
        }));
        assert_eq!(expand_grid(&grid), Err(GridError::InvalidColumns(0)));
    }

    #[test]
    fn oversized_grid_rejected() {
        let grid = params(json!({
            "type": "Cube",
            "base_name": "Box",
            "rows": 1000,
            "columns": 1000,
            "spacing": 10.0,
            "start_location": {"x": 0.0, "y": 0.0, "z": 0.0}
        }));
        assert_eq!(expand_grid(&grid), Err(GridError::TooLarge(1_000_000)));
    }
}
