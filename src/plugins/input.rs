use crate::components::{JumpLatch, MovementIntent, Player};
use crate::settings::{ControlSettings, KeyMap};
use bevy::prelude::*;

/// Plugin for per-frame input sampling
pub struct PlayerInputPlugin;

impl Plugin for PlayerInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControlSettings>()
            .init_resource::<KeyMap>()
            .add_systems(Update, (refresh_key_map_system, sample_input_system).chain());
    }
}

/// Digital axis value from a pair of keys
pub fn axis_value(negative_held: bool, positive_held: bool) -> f32 {
    match (negative_held, positive_held) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}

/// Re-resolve key bindings whenever the settings resource changes
fn refresh_key_map_system(settings: Res<ControlSettings>, mut key_map: ResMut<KeyMap>) {
    if settings.is_changed() {
        *key_map = settings.keybinds.resolve();
    }
}

/// Sample axes and latch the jump edge once per rendered frame
fn sample_input_system(
    keyboard: Res<Input<KeyCode>>,
    key_map: Res<KeyMap>,
    mut query: Query<(&mut MovementIntent, &mut JumpLatch), With<Player>>,
) {
    let horizontal = axis_value(keyboard.pressed(key_map.left), keyboard.pressed(key_map.right));
    let vertical = axis_value(keyboard.pressed(key_map.back), keyboard.pressed(key_map.forward));
    let jump_pressed = keyboard.just_pressed(key_map.jump);

    for (mut intent, mut latch) in query.iter_mut() {
        *intent = MovementIntent::new(horizontal, vertical);
        latch.sample(jump_pressed);
    }
}
