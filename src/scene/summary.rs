use crate::scene::grid::GridParams;
use crate::scene::model::{Color, DimensionSpec, Rotation, ScaleSpec, Vec3};
use crate::scene::normalize::CanonicalRequest;
use crate::scene::responses::{BatchOutcome, SceneSnapshot};
use std::fmt::Write;

pub const SCENE_LISTING_LIMIT: usize = 10;

pub fn location(location: &Vec3) -> String {
    format!("({}, {}, {})", location.x, location.y, location.z)
}

pub fn color(color: &Color) -> String {
    format!("({:.1}, {:.1}, {:.1})", color.r, color.g, color.b)
}

pub fn scale(scale: &ScaleSpec) -> String {
    match scale.uniform {
        Some(uniform) => format!("{uniform}"),
        None => format!(
            "({}, {}, {})",
            scale.x.unwrap_or(1.0),
            scale.y.unwrap_or(1.0),
            scale.z.unwrap_or(1.0)
        ),
    }
}

fn dimension(value: Option<f64>) -> String {
    value.map_or_else(|| "?".to_string(), |value| value.to_string())
}

pub fn dimensions(dimensions: &DimensionSpec) -> String {
    format!(
        "{}x{}x{}",
        dimension(dimensions.width),
        dimension(dimensions.depth),
        dimension(dimensions.height)
    )
}

pub fn created_actor(request: &CanonicalRequest) -> String {
    let mut parts = vec![format!(
        "Created {} '{}' at {}",
        request.actor_type,
        request.name,
        location(&request.location)
    )];

    if let Some(value) = &request.color {
        parts.push(format!("color: {}", color(value)));
    }

    // Dimensions are reported in preference to scale.
    if let Some(value) = &request.dimensions {
        parts.push(format!("dimensions: {}", dimensions(value)));
    } else if let Some(value) = &request.scale {
        parts.push(format!("scale: {}", scale(value)));
    }

    parts.join(" | ")
}

pub fn batch(outcome: &BatchOutcome) -> String {
    format!(
        "Batch creation complete: {} actors created, {} failed",
        outcome.created, outcome.failed
    )
}

pub fn grid(params: &GridParams, outcome: &BatchOutcome) -> String {
    format!(
        "Created {}x{} grid of {}s | Total: {} actors | Spacing: {} units | created: {}, failed: {}",
        params.rows,
        params.columns,
        params.actor_type,
        params.total(),
        params.spacing,
        outcome.created,
        outcome.failed
    )
}

pub fn scene(snapshot: &SceneSnapshot) -> String {
    let mut text = format!("Scene has {} actors:\n", snapshot.count());
    for actor in snapshot.actors.iter().take(SCENE_LISTING_LIMIT) {
        match &actor.location {
            Some(at) => {
                let _ = writeln!(
                    text,
                    "- {} at ({:.0}, {:.0}, {:.0})",
                    actor.name, at.x, at.y, at.z
                );
            }
            None => {
                let _ = writeln!(text, "- {}", actor.name);
            }
        }
    }
    if snapshot.actors.len() > SCENE_LISTING_LIMIT {
        let _ = write!(
            text,
            "... and {} more actors",
            snapshot.actors.len() - SCENE_LISTING_LIMIT
        );
    }
    text
}

pub fn moved(name: &str, to: &Vec3) -> String {
    format!("Moved '{name}' to {}", location(to))
}

pub fn recolored(name: &str, value: &Color) -> String {
    format!("Changed color of '{name}' to {}", color(value))
}

pub fn rescaled(name: &str, value: &ScaleSpec) -> String {
    match value.uniform {
        Some(uniform) => format!("Set uniform scale {uniform} for '{name}'"),
        None => format!("Set scale {} for '{name}'", scale(value)),
    }
}

pub fn rotated(name: &str, rotation: &Rotation) -> String {
    format!(
        "Rotated '{name}' to (pitch: {}°, yaw: {}°, roll: {}°)",
        rotation.pitch, rotation.yaw, rotation.roll
    )
}

pub fn deleted(name: &str) -> String {
    format!("Deleted actor '{name}'")
}

pub fn deleted_all(count: u64) -> String {
    format!("Deleted {count} actors from the scene")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::model::ActorType;
    use crate::scene::responses::SceneActor;

    fn request() -> CanonicalRequest {
        CanonicalRequest {
            actor_type: ActorType::Cube,
            name: "Box".to_string(),
            location: Vec3 {
                x: 0.0,
                y: 100.0,
                z: 50.5,
            },
            color: None,
            scale: None,
            dimensions: None,
            light: None,
        }
    }

    #[test]
    fn created_actor_minimal() {
        assert_eq!(created_actor(&request()), "Created Cube 'Box' at (0, 100, 50.5)");
    }

    #[test]
    fn created_actor_prefers_dimensions_over_scale() {
        let mut request = request();
        request.color = Some(Color {
            r: 1.0,
            g: 0.5,
            b: 0.0,
            a: None,
        });
        request.scale = Some(ScaleSpec {
            uniform: Some(2.0),
            ..ScaleSpec::default()
        });
        request.dimensions = Some(DimensionSpec {
            width: Some(10.0),
            depth: Some(10.0),
            height: Some(5.0),
        });
        assert_eq!(
            created_actor(&request),
            "Created Cube 'Box' at (0, 100, 50.5) | color: (1.0, 0.5, 0.0) | dimensions: 10x10x5"
        );
    }

    #[test]
    fn per_axis_scale_fills_missing_axes() {
        let value = ScaleSpec {
            x: Some(2.0),
            ..ScaleSpec::default()
        };
        assert_eq!(rescaled("Box", &value), "Set scale (2, 1, 1) for 'Box'");
    }

    #[test]
    fn scene_listing_truncates() {
        let actors = (0..12)
            .map(|index| SceneActor {
                name: format!("A{index}"),
                class: None,
                location: Some(Vec3 {
                    x: 1.4,
                    y: 2.6,
                    z: 0.0,
                }),
                rotation: None,
                scale: None,
            })
            .collect();
        let snapshot = SceneSnapshot {
            actor_count: Some(12),
            actors,
        };
        let text = scene(&snapshot);
        assert!(text.starts_with("Scene has 12 actors:\n- A0 at (1, 3, 0)\n"));
        assert!(!text.contains("- A10"));
        assert!(text.ends_with("... and 2 more actors"));
    }
}
