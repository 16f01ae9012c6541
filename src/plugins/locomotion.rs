use crate::components::{CharacterMotor, JumpLatch, MainCamera, MotorCommand, MovementIntent, Player};
use crate::locomotion::{CameraBasis, compose_move};
use crate::plugins::{TickSet, configure_tick_sets};
use crate::settings::{ControlSettings, KeyMap};
use bevy::prelude::*;

/// Camera used for camera-relative movement, if the scene has one
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewCamera(pub Option<Entity>);

/// Plugin for composing the move vector and handing it to the character motor
pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        configure_tick_sets(app);
        app.init_resource::<ControlSettings>()
            .init_resource::<KeyMap>()
            .init_resource::<ViewCamera>()
            .add_systems(PostStartup, locate_main_camera_system)
            .add_systems(
                FixedUpdate,
                compose_locomotion_system.in_set(TickSet::Locomotion),
            );
    }
}

/// Find the main camera once the scene has been spawned
fn locate_main_camera_system(
    camera_query: Query<Entity, With<MainCamera>>,
    mut view_camera: ResMut<ViewCamera>,
) {
    view_camera.0 = camera_query.iter().next();

    if view_camera.0.is_none() {
        warn!(
            "No main camera found. Camera-relative controls need an entity with MainCamera; \
             falling back to world-relative movement"
        );
    }
}

/// Build this tick's motor command and clear the jump latch
#[allow(clippy::type_complexity)]
fn compose_locomotion_system(
    keyboard: Res<Input<KeyCode>>,
    key_map: Res<KeyMap>,
    settings: Res<ControlSettings>,
    view_camera: Res<ViewCamera>,
    camera_query: Query<&Transform, (With<MainCamera>, Without<Player>)>,
    mut player_query: Query<(&MovementIntent, &mut JumpLatch, &mut CharacterMotor), With<Player>>,
) {
    // Camera may have been despawned; fall back to world axes
    let camera = view_camera
        .0
        .and_then(|entity| camera_query.get(entity).ok())
        .map(CameraBasis::from_transform);

    let crouch = keyboard.pressed(key_map.crouch);
    let speed_scale = settings.walk_scale(keyboard.pressed(key_map.walk));

    for (intent, mut latch, mut motor) in player_query.iter_mut() {
        motor.submit(MotorCommand {
            move_vector: compose_move(*intent, camera, speed_scale),
            crouch,
            jump: latch.consume(),
        });
    }
}
