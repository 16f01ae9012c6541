use crate::components::{
    BodyExtents, CharacterController, Ladder, LadderClimber, MovementIntent, Player, TriggerZone,
    ZoneOccupancy,
};
use crate::enums::ZoneKind;
use crate::ladder::{ClimbStep, climb_velocity};
use crate::plugins::{TickSet, configure_tick_sets};
use crate::settings::ControlSettings;
use bevy::prelude::*;

/// Event sent when a player moves into a trigger zone
#[derive(Event, Clone, Copy, Debug, PartialEq)]
pub struct ZoneEntered {
    pub player: Entity,
    pub zone: Entity,
    pub kind: ZoneKind,
    pub ladder: Entity,
}

/// Plugin for ladder climbing: trigger zones, waypoint snaps and climb motion
pub struct LadderPlugin;

impl Plugin for LadderPlugin {
    fn build(&self, app: &mut App) {
        configure_tick_sets(app);
        app.init_resource::<ControlSettings>()
            .add_event::<ZoneEntered>()
            .add_systems(FixedUpdate, ladder_climb_system.in_set(TickSet::Climb))
            .add_systems(
                FixedUpdate,
                (detect_zone_entries_system, apply_zone_transitions_system)
                    .chain()
                    .in_set(TickSet::Triggers),
            );
    }
}

/// Axis-aligned overlap test between two boxes given by center and half size
pub fn boxes_overlap(a_center: Vec3, a_half: Vec3, b_center: Vec3, b_half: Vec3) -> bool {
    let distance = (a_center - b_center).abs();
    let reach = a_half + b_half;
    distance.x < reach.x && distance.y < reach.y && distance.z < reach.z
}

/// Snap to a pending waypoint or move along the ladder
#[allow(clippy::type_complexity)]
fn ladder_climb_system(
    settings: Res<ControlSettings>,
    time: Res<Time<Fixed>>,
    ladder_query: Query<(&Ladder, &Transform), Without<Player>>,
    mut player_query: Query<
        (
            &mut LadderClimber,
            &MovementIntent,
            &mut Transform,
            &mut CharacterController,
        ),
        With<Player>,
    >,
) {
    let delta_time = time.delta_seconds();

    for (mut climber, intent, mut transform, mut controller) in player_query.iter_mut() {
        // Takes the pending transition, so a snap happens at most once
        let step = climber.next_step();
        if step == ClimbStep::Idle {
            continue;
        }

        // Ladder may have been despawned since the zone was entered
        let Some((ladder, ladder_transform)) = climber
            .ladder
            .and_then(|entity| ladder_query.get(entity).ok())
        else {
            error!("Climbing without a valid ladder, dropping {:?}", step);
            continue;
        };

        match step {
            ClimbStep::Snap(target) => {
                if let Some(anchor) = ladder.anchors.world(ladder_transform, target) {
                    transform.translation = anchor;
                    debug!("Snapped to {:?} on ladder '{}'", target, ladder.id);
                }
            }
            ClimbStep::Climb => {
                // Only the vertical axis drives the climb
                let velocity =
                    climb_velocity(ladder_transform.rotation, intent.vertical, settings.climb_speed);
                controller.move_by(&mut transform, velocity * delta_time);
            }
            ClimbStep::Idle => {}
        }
    }
}

/// Send an event for every zone a player has just moved into
fn detect_zone_entries_system(
    mut player_query: Query<(Entity, &Transform, &BodyExtents, &mut ZoneOccupancy), With<Player>>,
    zone_query: Query<(Entity, &Transform, &TriggerZone), Without<Player>>,
    mut zone_events: EventWriter<ZoneEntered>,
) {
    for (player, transform, body, mut occupancy) in player_query.iter_mut() {
        // Forget zones that no longer exist
        occupancy.inside.retain(|zone| zone_query.contains(*zone));

        for (zone_entity, zone_transform, zone) in zone_query.iter() {
            let overlapping = boxes_overlap(
                transform.translation,
                body.half_extents,
                zone_transform.translation,
                zone.half_extents,
            );

            if !overlapping {
                occupancy.inside.remove(&zone_entity);
                continue;
            }

            // Only the outside-to-inside edge counts as an entry
            if occupancy.inside.insert(zone_entity) {
                zone_events.send(ZoneEntered {
                    player,
                    zone: zone_entity,
                    kind: zone.kind,
                    ladder: zone.ladder,
                });
            }
        }
    }
}

/// Apply zone entries to the climb state machine
fn apply_zone_transitions_system(
    mut zone_events: EventReader<ZoneEntered>,
    mut climber_query: Query<&mut LadderClimber, With<Player>>,
) {
    for event in zone_events.read() {
        let Ok(mut climber) = climber_query.get_mut(event.player) else {
            continue;
        };

        if climber.enter_zone(event.kind, event.ladder) {
            debug!(
                "Entered {:?} zone: {:?}, pending {:?}",
                event.kind, climber.state, climber.transition
            );
        }
    }
}
