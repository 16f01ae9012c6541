use crate::components::{CharacterMotor, LadderClimber};
use crate::plugins::{TickSet, configure_tick_sets};
use crate::settings::ControlSettings;
use bevy::prelude::*;

/// Plugin for the character motor and the fixed tick rate
pub struct MotorPlugin;

impl Plugin for MotorPlugin {
    fn build(&self, app: &mut App) {
        configure_tick_sets(app);
        app.init_resource::<ControlSettings>()
            .add_systems(Startup, apply_fixed_timestep_system)
            .add_systems(
                FixedUpdate,
                drive_character_motor_system.in_set(TickSet::Motor),
            );
    }
}

fn apply_fixed_timestep_system(settings: Res<ControlSettings>, mut time: ResMut<Time<Fixed>>) {
    time.set_timestep_seconds(f64::from(settings.fixed_timestep));
}

/// Consume the pending motor command and move the body along the ground.
///
/// A body on a ladder is held by the ladder: the command's crouch and jump
/// are still recorded but ground movement is not applied.
fn drive_character_motor_system(
    time: Res<Time<Fixed>>,
    mut query: Query<(&mut CharacterMotor, &mut Transform, Option<&LadderClimber>)>,
) {
    let delta_time = time.delta_seconds();

    for (mut motor, mut transform, climber) in query.iter_mut() {
        let Some(command) = motor.pending.take() else {
            continue;
        };

        let on_ladder = climber.is_some_and(|climber| climber.state.is_climbing());
        if !on_ladder {
            transform.translation += command.move_vector * motor.move_speed * delta_time;
        }
        motor.crouching = command.crouch;

        if command.jump {
            motor.jumps_requested += 1;
            debug!("Jump requested ({} total)", motor.jumps_requested);
        }
    }
}
