use crate::enums::{ClimbState, TransitionTarget, ZoneKind};
use bevy::prelude::*;
use bevy::utils::HashSet;

/// Player marker component
#[derive(Component)]
pub struct Player;

/// Marks the camera used for camera-relative movement
#[derive(Component)]
pub struct MainCamera;

/// Movement intent - axes sampled once per frame, each in [-1, 1]
#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct MovementIntent {
    pub horizontal: f32,
    pub vertical: f32,
}

impl MovementIntent {
    /// Raw axes; each is clamped on its own so one never scales the other
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal: horizontal.clamp(-1.0, 1.0),
            vertical: vertical.clamp(-1.0, 1.0),
        }
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.horizontal, self.vertical)
    }
}

/// Jump latch - holds a single-frame jump press until the next fixed tick
#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct JumpLatch {
    latched: bool,
}

impl JumpLatch {
    /// A poll without a press never clears an existing latch
    pub fn sample(&mut self, pressed_this_frame: bool) {
        if !self.latched {
            self.latched = pressed_this_frame;
        }
    }

    pub fn consume(&mut self) -> bool {
        std::mem::take(&mut self.latched)
    }

    pub fn is_latched(&self) -> bool {
        self.latched
    }
}

/// Ladder climber - climbing state machine data carried by the player
#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct LadderClimber {
    pub state: ClimbState,
    pub transition: TransitionTarget,
    /// Ladder owning the most recently entered zone; stale once climbing ends
    pub ladder: Option<Entity>,
}

/// Ladder-local anchor offsets, indexed by `TransitionTarget::anchor_index`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LadderAnchors(pub [Vec3; 3]);

impl LadderAnchors {
    pub fn local(&self, target: TransitionTarget) -> Option<Vec3> {
        target.anchor_index().map(|index| self.0[index])
    }

    pub fn world(&self, ladder_transform: &Transform, target: TransitionTarget) -> Option<Vec3> {
        self.local(target)
            .map(|offset| ladder_transform.transform_point(offset))
    }
}

/// Ladder component - a climbable ladder with its resolved anchors
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Ladder {
    pub id: String,
    pub anchors: LadderAnchors,
}

/// Trigger zone - axis-aligned volume centered on the entity's translation
#[derive(Component, Clone, Debug, PartialEq)]
pub struct TriggerZone {
    pub tag: String,
    pub kind: ZoneKind,
    pub ladder: Entity,
    pub half_extents: Vec3,
}

impl TriggerZone {
    pub fn new(tag: impl Into<String>, ladder: Entity, half_extents: Vec3) -> Self {
        let tag = tag.into();
        Self {
            kind: ZoneKind::from_tag(&tag),
            tag,
            ladder,
            half_extents,
        }
    }
}

/// Body extents - half size of the player's overlap box
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct BodyExtents {
    pub half_extents: Vec3,
}

impl Default for BodyExtents {
    fn default() -> Self {
        Self {
            half_extents: Vec3::new(0.3, 0.9, 0.3),
        }
    }
}

/// Zone occupancy - zones the player currently overlaps
#[derive(Component, Clone, Debug, Default)]
pub struct ZoneOccupancy {
    pub inside: HashSet<Entity>,
}

/// Motor command - what locomotion hands to the character motor each tick
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct MotorCommand {
    pub move_vector: Vec3,
    pub crouch: bool,
    pub jump: bool,
}

/// Character motor - consumes one motor command per fixed tick
#[derive(Component, Clone, Debug, PartialEq)]
pub struct CharacterMotor {
    pub move_speed: f32,
    pub pending: Option<MotorCommand>,
    pub crouching: bool,
    pub jumps_requested: u32,
}

impl CharacterMotor {
    pub fn new(move_speed: f32) -> Self {
        Self {
            move_speed,
            pending: None,
            crouching: false,
            jumps_requested: 0,
        }
    }

    pub fn submit(&mut self, command: MotorCommand) {
        self.pending = Some(command);
    }
}

/// Collision flags reported by the character controller move primitive
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CollisionFlags {
    pub sides: bool,
    pub above: bool,
    pub below: bool,
}

/// Character controller - kinematic mover used while climbing
#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct CharacterController {
    pub last_flags: CollisionFlags,
}

impl CharacterController {
    /// Kinematic translate; there is no world geometry to collide with
    pub fn move_by(&mut self, transform: &mut Transform, delta: Vec3) -> CollisionFlags {
        transform.translation += delta;
        self.last_flags = CollisionFlags::default();
        self.last_flags
    }
}
