use crate::components::MovementIntent;
use bevy::prelude::*;

/// World axes used when no camera is available
pub const WORLD_FORWARD: Vec3 = Vec3::Z;
pub const WORLD_RIGHT: Vec3 = Vec3::X;

/// Camera basis - horizontal forward and right directions of the view camera
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraBasis {
    pub forward: Vec3,
    pub right: Vec3,
}

impl CameraBasis {
    /// Flattens both directions onto the ground plane
    pub fn from_directions(forward: Vec3, right: Vec3) -> Self {
        Self {
            forward: Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero(),
            right: Vec3::new(right.x, 0.0, right.z).normalize_or_zero(),
        }
    }

    pub fn from_transform(transform: &Transform) -> Self {
        Self::from_directions(transform.forward(), transform.right())
    }

    pub fn world() -> Self {
        Self {
            forward: WORLD_FORWARD,
            right: WORLD_RIGHT,
        }
    }
}

/// Compose a world-space move vector from input and an optional camera.
///
/// The result is clamped to unit length before scaling so diagonal input is
/// no faster than straight input.
pub fn compose_move(intent: MovementIntent, camera: Option<CameraBasis>, speed_scale: f32) -> Vec3 {
    let basis = camera.unwrap_or_else(CameraBasis::world);
    let direction = intent.vertical * basis.forward + intent.horizontal * basis.right;
    direction.clamp_length_max(1.0) * speed_scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_camera_uses_world_axes() {
        let intent = MovementIntent::new(1.0, 0.0);
        assert_eq!(compose_move(intent, None, 1.0), Vec3::new(1.0, 0.0, 0.0));

        let intent = MovementIntent::new(0.0, 1.0);
        assert_eq!(compose_move(intent, None, 1.0), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_walk_scale_with_camera() {
        let camera = CameraBasis::from_directions(Vec3::Z, Vec3::X);
        let intent = MovementIntent::new(0.0, 1.0);

        assert_eq!(compose_move(intent, Some(camera), 0.5), Vec3::new(0.0, 0.0, 0.5));
    }

    #[test]
    fn test_camera_forward_is_flattened() {
        // Camera pitched down 45 degrees still moves the player along the ground
        let camera = CameraBasis::from_directions(Vec3::new(0.0, -1.0, 1.0), Vec3::X);
        let intent = MovementIntent::new(0.0, 1.0);

        let move_vector = compose_move(intent, Some(camera), 1.0);

        assert_eq!(move_vector.y, 0.0);
        assert!((move_vector - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_camera_basis_from_transform() {
        let transform = Transform::from_xyz(0.0, 5.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y);
        let basis = CameraBasis::from_transform(&transform);

        assert!((basis.forward - Vec3::NEG_Z).length() < 1e-5);
        assert!((basis.right - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn test_diagonal_move_is_unit_length() {
        let move_vector = compose_move(MovementIntent::new(1.0, 1.0), None, 1.0);

        assert!((move_vector.length() - 1.0).abs() < 1e-5);
        assert!((move_vector.x - move_vector.z).abs() < 1e-6);
    }

    #[test]
    fn test_no_input_no_movement() {
        let camera = CameraBasis::from_directions(Vec3::X, Vec3::NEG_Z);
        assert_eq!(
            compose_move(MovementIntent::default(), Some(camera), 1.0),
            Vec3::ZERO
        );
    }
}
