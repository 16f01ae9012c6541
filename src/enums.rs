use serde::{Deserialize, Serialize};

/// Climb state - whether the player is attached to a ladder
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClimbState {
    #[default]
    NotClimbing,
    Climbing,
}

impl ClimbState {
    pub fn toggled(self) -> Self {
        match self {
            ClimbState::NotClimbing => ClimbState::Climbing,
            ClimbState::Climbing => ClimbState::NotClimbing,
        }
    }

    pub fn is_climbing(self) -> bool {
        self == ClimbState::Climbing
    }
}

/// Transition target - ladder anchor the player snaps to before free climbing resumes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionTarget {
    #[default]
    None,
    /// Bottom entry point
    Waypoint1,
    /// Re-entry point when coming down from above
    Waypoint2,
    /// Top exit point
    Waypoint3,
}

impl TransitionTarget {
    /// Anchor names as authored on ladders, indexed by `anchor_index`
    pub const ANCHOR_NAMES: [&'static str; 3] = ["ToLadder1", "ToLadder2", "ToLadder3"];

    pub fn anchor_index(self) -> Option<usize> {
        match self {
            TransitionTarget::None => None,
            TransitionTarget::Waypoint1 => Some(0),
            TransitionTarget::Waypoint2 => Some(1),
            TransitionTarget::Waypoint3 => Some(2),
        }
    }

    pub fn anchor_name(self) -> Option<&'static str> {
        self.anchor_index().map(|index| Self::ANCHOR_NAMES[index])
    }

    pub fn is_pending(self) -> bool {
        self != TransitionTarget::None
    }
}

/// Zone kind - which end of a ladder a trigger zone guards
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoneKind {
    Bottom,
    Top,
    Unrecognized,
}

impl ZoneKind {
    pub const BOTTOM_TAG: &'static str = "Ladder_Bottom";
    pub const TOP_TAG: &'static str = "Ladder_Top";

    /// Tags are matched exactly; anything else is ignored by the ladder logic
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            Self::BOTTOM_TAG => ZoneKind::Bottom,
            Self::TOP_TAG => ZoneKind::Top,
            _ => ZoneKind::Unrecognized,
        }
    }

    pub fn is_recognized(self) -> bool {
        self != ZoneKind::Unrecognized
    }
}
