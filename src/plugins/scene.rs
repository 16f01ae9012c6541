use crate::components::{
    BodyExtents, CharacterController, CharacterMotor, JumpLatch, Ladder, LadderClimber, MainCamera,
    MovementIntent, Player, TriggerZone, ZoneOccupancy,
};
use crate::scene::{LadderData, SceneData, SceneLoadError};
use crate::settings::ControlSettings;
use bevy::prelude::*;

/// Everything a controllable player entity needs
#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: Player,
    pub transform: Transform,
    pub intent: MovementIntent,
    pub jump: JumpLatch,
    pub climber: LadderClimber,
    pub body: BodyExtents,
    pub occupancy: ZoneOccupancy,
    pub motor: CharacterMotor,
    pub controller: CharacterController,
}

impl PlayerBundle {
    pub fn new(position: Vec3, settings: &ControlSettings) -> Self {
        Self {
            player: Player,
            transform: Transform::from_translation(position),
            intent: MovementIntent::default(),
            jump: JumpLatch::default(),
            climber: LadderClimber::default(),
            body: BodyExtents::default(),
            occupancy: ZoneOccupancy::default(),
            motor: CharacterMotor::new(settings.move_speed),
            controller: CharacterController::default(),
        }
    }
}

/// Plugin for spawning the loaded scene
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControlSettings>()
            .add_systems(Startup, spawn_scene_system);
    }
}

fn spawn_scene_system(
    mut commands: Commands,
    scene: Option<Res<SceneData>>,
    settings: Res<ControlSettings>,
) {
    let Some(scene) = scene else {
        warn!("No scene loaded, nothing to spawn");
        return;
    };

    spawn_scene_entities(&mut commands, &scene, &settings);
    info!("Spawned scene '{}' with {} ladders", scene.id, scene.ladders.len());
}

/// Spawn player, camera and ladders from scene data
pub fn spawn_scene_entities(commands: &mut Commands, scene: &SceneData, settings: &ControlSettings) {
    commands.spawn(PlayerBundle::new(scene.player_spawn.into(), settings));

    if let Some(camera) = scene.camera {
        commands.spawn((
            Camera3dBundle {
                transform: Transform::from_translation(camera.position.into())
                    .looking_at(camera.look_at.into(), Vec3::Y),
                ..default()
            },
            MainCamera,
        ));
    }

    for ladder in &scene.ladders {
        if let Err(e) = spawn_ladder(commands, ladder) {
            error!("Skipping ladder: {}", e);
        }
    }
}

/// Spawn a ladder and its trigger zones; zone data is ladder-local
pub fn spawn_ladder(commands: &mut Commands, ladder: &LadderData) -> Result<Entity, SceneLoadError> {
    let anchors = ladder.resolve_anchors()?;
    let transform = ladder.transform();

    let ladder_entity = commands
        .spawn((
            Ladder {
                id: ladder.id.clone(),
                anchors,
            },
            transform,
        ))
        .id();

    for zone in &ladder.zones {
        // Overlap tests are world-axis aligned, so place and size each zone in world space
        let half_extents = zone.world_half_extents(transform.rotation);
        commands.spawn((
            TriggerZone::new(zone.tag.clone(), ladder_entity, half_extents),
            Transform::from_translation(transform.transform_point(zone.center.into())),
        ));
    }

    Ok(ladder_entity)
}
