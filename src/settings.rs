//! Control settings and their JSON loader.
//!
//! Every field is optional in the file; missing values take the defaults
//! below. Unknown key names fall back to the default binding.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default settings path relative to the working directory
pub const SETTINGS_PATH: &str = "assets/settings.json";

/// Key bindings by key name
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub forward: String,
    pub back: String,
    pub left: String,
    pub right: String,
    pub jump: String,
    pub crouch: String,
    pub walk: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: "W".to_string(),
            back: "S".to_string(),
            left: "A".to_string(),
            right: "D".to_string(),
            jump: "Space".to_string(),
            crouch: "C".to_string(),
            walk: "LShift".to_string(),
        }
    }
}

/// Resolved key codes for every control
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyMap {
    pub forward: KeyCode,
    pub back: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub jump: KeyCode,
    pub crouch: KeyCode,
    pub walk: KeyCode,
}

impl Default for KeyMap {
    fn default() -> Self {
        KeyBindings::default().resolve()
    }
}

impl KeyBindings {
    pub fn resolve(&self) -> KeyMap {
        let resolve = |name: &str, default: KeyCode| {
            keycode_from_str(name).unwrap_or_else(|| {
                warn!("Unknown key '{}', using {:?}", name, default);
                default
            })
        };

        KeyMap {
            forward: resolve(self.forward.as_str(), KeyCode::W),
            back: resolve(self.back.as_str(), KeyCode::S),
            left: resolve(self.left.as_str(), KeyCode::A),
            right: resolve(self.right.as_str(), KeyCode::D),
            jump: resolve(self.jump.as_str(), KeyCode::Space),
            crouch: resolve(self.crouch.as_str(), KeyCode::C),
            walk: resolve(self.walk.as_str(), KeyCode::ShiftLeft),
        }
    }
}

/// Map a key name from the settings file to a key code
pub fn keycode_from_str(name: &str) -> Option<KeyCode> {
    let key = match name.to_ascii_uppercase().as_str() {
        "A" => KeyCode::A,
        "B" => KeyCode::B,
        "C" => KeyCode::C,
        "D" => KeyCode::D,
        "E" => KeyCode::E,
        "F" => KeyCode::F,
        "Q" => KeyCode::Q,
        "R" => KeyCode::R,
        "S" => KeyCode::S,
        "W" => KeyCode::W,
        "X" => KeyCode::X,
        "Z" => KeyCode::Z,
        "UP" => KeyCode::Up,
        "DOWN" => KeyCode::Down,
        "LEFT" => KeyCode::Left,
        "RIGHT" => KeyCode::Right,
        "SPACE" => KeyCode::Space,
        "LSHIFT" | "SHIFTLEFT" => KeyCode::ShiftLeft,
        "RSHIFT" | "SHIFTRIGHT" => KeyCode::ShiftRight,
        "LCTRL" | "CONTROLLEFT" => KeyCode::ControlLeft,
        "RCTRL" | "CONTROLRIGHT" => KeyCode::ControlRight,
        "TAB" => KeyCode::Tab,
        _ => return None,
    };
    Some(key)
}

/// Control settings resource
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlSettings {
    /// Ladder climb speed in units per second
    pub climb_speed: f32,
    /// Move multiplier while the walk key is held
    pub walk_multiplier: f32,
    /// Touch input builds ignore the walk key
    pub touch_input: bool,
    /// Character motor ground speed in units per second
    pub move_speed: f32,
    /// Fixed tick length in seconds
    pub fixed_timestep: f32,
    pub keybinds: KeyBindings,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            climb_speed: 2.0,
            walk_multiplier: 0.5,
            touch_input: false,
            move_speed: 4.0,
            fixed_timestep: 1.0 / 60.0,
            keybinds: KeyBindings::default(),
        }
    }
}

impl ControlSettings {
    /// Speed scale for the composed move vector
    pub fn walk_scale(&self, walk_held: bool) -> f32 {
        if walk_held && !self.touch_input {
            self.walk_multiplier
        } else {
            1.0
        }
    }
}

/// Load control settings from a JSON file
pub fn load_settings_from_file(path: &str) -> Result<ControlSettings, SettingsLoadError> {
    if !Path::new(path).exists() {
        return Err(SettingsLoadError::FileNotFound(path.to_string()));
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| SettingsLoadError::IoError(path.to_string(), e.to_string()))?;

    let settings: ControlSettings = serde_json::from_str(&contents)
        .map_err(|e| SettingsLoadError::ParseError(path.to_string(), e.to_string()))?;

    validate_settings(&settings)?;

    Ok(settings)
}

/// Load settings, falling back to defaults when the file is missing or bad
pub fn load_settings_or_default(path: &str) -> ControlSettings {
    match load_settings_from_file(path) {
        Ok(settings) => {
            info!("Loaded control settings from {}", path);
            settings
        }
        Err(SettingsLoadError::FileNotFound(_)) => {
            info!("No settings file at {}, using defaults", path);
            ControlSettings::default()
        }
        Err(e) => {
            warn!("{}; using default settings", e);
            ControlSettings::default()
        }
    }
}

fn validate_settings(settings: &ControlSettings) -> Result<(), SettingsLoadError> {
    if settings.climb_speed < 0.0 {
        return Err(SettingsLoadError::ValidationError(
            "climb_speed cannot be negative".to_string(),
        ));
    }

    if settings.fixed_timestep <= 0.0 {
        return Err(SettingsLoadError::ValidationError(
            "fixed_timestep must be positive".to_string(),
        ));
    }

    if !(0.0..=1.0).contains(&settings.walk_multiplier) {
        return Err(SettingsLoadError::ValidationError(
            "walk_multiplier must be within [0, 1]".to_string(),
        ));
    }

    Ok(())
}

/// Settings loading errors
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsLoadError {
    FileNotFound(String),
    IoError(String, String),
    ParseError(String, String),
    ValidationError(String),
}

impl std::fmt::Display for SettingsLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsLoadError::FileNotFound(path) => write!(f, "Settings file not found: {}", path),
            SettingsLoadError::IoError(path, err) => {
                write!(f, "IO error reading settings file {}: {}", path, err)
            }
            SettingsLoadError::ParseError(path, err) => {
                write!(f, "Failed to parse settings file {}: {}", path, err)
            }
            SettingsLoadError::ValidationError(msg) => {
                write!(f, "Settings validation error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsLoadError {}
