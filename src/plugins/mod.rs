pub mod input;
pub mod ladder;
pub mod locomotion;
pub mod motor;
pub mod scene;

pub use input::PlayerInputPlugin;
pub use ladder::LadderPlugin;
pub use locomotion::LocomotionPlugin;
pub use motor::MotorPlugin;
pub use scene::ScenePlugin;

use bevy::prelude::*;

/// Fixed tick phases, run in declaration order
#[derive(SystemSet, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TickSet {
    /// Ladder waypoint snap or climb motion
    Climb,
    /// Move vector composition and hand-off to the motor
    Locomotion,
    /// Character motor integration
    Motor,
    /// Trigger zone detection and ladder state transitions
    Triggers,
}

pub(crate) fn configure_tick_sets(app: &mut App) {
    app.configure_sets(
        FixedUpdate,
        (
            TickSet::Climb,
            TickSet::Locomotion,
            TickSet::Motor,
            TickSet::Triggers,
        )
            .chain(),
    );
}
