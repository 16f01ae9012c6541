use bevy::prelude::*;
use ladder_climber::plugins::{
    LadderPlugin, LocomotionPlugin, MotorPlugin, PlayerInputPlugin, ScenePlugin,
};
use ladder_climber::scene::{DEFAULT_SCENE_PATH, load_scene_from_file};
use ladder_climber::settings::{SETTINGS_PATH, load_settings_or_default};

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins);

    app.insert_resource(load_settings_or_default(SETTINGS_PATH));

    let scene_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SCENE_PATH.to_string());
    match load_scene_from_file(&scene_path) {
        Ok(scene) => {
            info!("Loaded scene '{}' from {}", scene.id, scene_path);
            app.insert_resource(scene);
        }
        Err(e) => error!("{}", e),
    }

    app.add_plugins(PlayerInputPlugin)
        .add_plugins(LadderPlugin)
        .add_plugins(LocomotionPlugin)
        .add_plugins(MotorPlugin)
        .add_plugins(ScenePlugin)
        .run();
}
