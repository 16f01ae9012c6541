pub mod components;
pub mod enums;
pub mod ladder;
pub mod locomotion;
pub mod plugins;
pub mod scene;
pub mod settings;

pub use components::*;
pub use enums::*;
pub use scene::SceneData;
pub use settings::ControlSettings;
