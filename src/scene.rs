use crate::components::LadderAnchors;
use crate::enums::{TransitionTarget, ZoneKind};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default scene path relative to the working directory
pub const DEFAULT_SCENE_PATH: &str = "assets/scenes/ladder_demo.json";

/// Scene data structure matching JSON format
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneData {
    pub id: String,
    pub player_spawn: Point,
    #[serde(default)]
    pub camera: Option<CameraData>,
    #[serde(default)]
    pub ladders: Vec<LadderData>,
}

/// 3D point or offset
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Point> for Vec3 {
    fn from(point: Point) -> Self {
        Vec3::new(point.x, point.y, point.z)
    }
}

/// Camera placement
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraData {
    pub position: Point,
    pub look_at: Point,
}

/// Ladder orientation in degrees
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotation {
    #[serde(default)]
    pub pitch: f32,
    #[serde(default)]
    pub yaw: f32,
}

impl Rotation {
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            0.0,
        )
    }
}

/// Ladder data
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LadderData {
    pub id: String,
    pub position: Point,
    #[serde(default)]
    pub rotation: Rotation,
    pub anchors: Vec<AnchorData>,
    #[serde(default)]
    pub zones: Vec<ZoneData>,
}

/// Named ladder-local anchor
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnchorData {
    pub name: String,
    pub offset: Point,
}

/// Trigger zone data; center and half extents are both ladder-local
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoneData {
    pub tag: String,
    pub center: Point,
    pub half_extents: Point,
}

impl ZoneData {
    /// Half extents of the world-axis box enclosing the rotated zone
    pub fn world_half_extents(&self, rotation: Quat) -> Vec3 {
        let basis = Mat3::from_quat(rotation);
        let enclosing = Mat3::from_cols(
            basis.x_axis.abs(),
            basis.y_axis.abs(),
            basis.z_axis.abs(),
        );
        enclosing * Vec3::from(self.half_extents)
    }
}

impl LadderData {
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position.into()).with_rotation(self.rotation.to_quat())
    }

    /// Resolve the named anchors into index order
    pub fn resolve_anchors(&self) -> Result<LadderAnchors, SceneLoadError> {
        let mut anchors = [Vec3::ZERO; 3];

        for (index, name) in TransitionTarget::ANCHOR_NAMES.iter().enumerate() {
            let anchor = self
                .anchors
                .iter()
                .find(|anchor| anchor.name == *name)
                .ok_or_else(|| SceneLoadError::MissingAnchor(self.id.clone(), name.to_string()))?;
            anchors[index] = anchor.offset.into();
        }

        Ok(LadderAnchors(anchors))
    }
}

/// Load scene from JSON file
pub fn load_scene_from_file(path: &str) -> Result<SceneData, SceneLoadError> {
    if !Path::new(path).exists() {
        return Err(SceneLoadError::FileNotFound(path.to_string()));
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| SceneLoadError::IoError(path.to_string(), e.to_string()))?;

    let scene: SceneData = serde_json::from_str(&contents)
        .map_err(|e| SceneLoadError::ParseError(path.to_string(), e.to_string()))?;

    validate_scene_data(&scene)?;

    Ok(scene)
}

/// Validate scene content; ladder anchors must all resolve
pub fn validate_scene_data(scene: &SceneData) -> Result<(), SceneLoadError> {
    if scene.id.is_empty() {
        return Err(SceneLoadError::ValidationError(
            "Scene ID cannot be empty".to_string(),
        ));
    }

    for ladder in &scene.ladders {
        if ladder.id.is_empty() {
            return Err(SceneLoadError::ValidationError(
                "Ladder ID cannot be empty".to_string(),
            ));
        }

        ladder.resolve_anchors()?;

        for zone in &ladder.zones {
            if zone.half_extents.x <= 0.0 || zone.half_extents.y <= 0.0 || zone.half_extents.z <= 0.0
            {
                return Err(SceneLoadError::ValidationError(format!(
                    "Zone '{}' on ladder '{}' has invalid extents",
                    zone.tag, ladder.id
                )));
            }

            if !ZoneKind::from_tag(&zone.tag).is_recognized() {
                warn!(
                    "Zone tag '{}' on ladder '{}' is not a ladder tag and will be ignored",
                    zone.tag, ladder.id
                );
            }
        }
    }

    Ok(())
}

/// Scene loading errors
#[derive(Debug, Clone, PartialEq)]
pub enum SceneLoadError {
    FileNotFound(String),
    IoError(String, String),
    ParseError(String, String),
    ValidationError(String),
    MissingAnchor(String, String),
}

impl std::fmt::Display for SceneLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneLoadError::FileNotFound(path) => write!(f, "Scene file not found: {}", path),
            SceneLoadError::IoError(path, err) => {
                write!(f, "IO error reading scene file {}: {}", path, err)
            }
            SceneLoadError::ParseError(path, err) => {
                write!(f, "Failed to parse scene file {}: {}", path, err)
            }
            SceneLoadError::ValidationError(msg) => write!(f, "Scene validation error: {}", msg),
            SceneLoadError::MissingAnchor(ladder, anchor) => {
                write!(f, "Ladder '{}' is missing anchor '{}'", ladder, anchor)
            }
        }
    }
}

impl std::error::Error for SceneLoadError {}
