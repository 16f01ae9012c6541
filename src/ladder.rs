//! Ladder climbing state machine.
//!
//! Pure transition logic with no ECS access, so the rules can be exercised
//! directly. `plugins::ladder` wires it to trigger zones and the fixed tick.

use crate::components::LadderClimber;
use crate::enums::{ClimbState, TransitionTarget, ZoneKind};
use bevy::prelude::*;

/// Ladder-local axis the player climbs along
pub const LADDER_FORWARD: Vec3 = Vec3::Z;

/// Apply a trigger-zone entry to the climb state and pending transition.
///
/// Every recognized entry flips the climb state. Entering the bottom zone
/// while already climbing cancels any pending transition without a snap.
pub fn on_zone_entered(
    state: ClimbState,
    transition: TransitionTarget,
    zone: ZoneKind,
) -> (ClimbState, TransitionTarget) {
    match (zone, state) {
        (ZoneKind::Bottom, ClimbState::NotClimbing) => {
            (ClimbState::Climbing, TransitionTarget::Waypoint1)
        }
        (ZoneKind::Bottom, ClimbState::Climbing) => {
            (ClimbState::NotClimbing, TransitionTarget::None)
        }
        (ZoneKind::Top, ClimbState::Climbing) => {
            (ClimbState::NotClimbing, TransitionTarget::Waypoint3)
        }
        (ZoneKind::Top, ClimbState::NotClimbing) => {
            (ClimbState::Climbing, TransitionTarget::Waypoint2)
        }
        (ZoneKind::Unrecognized, _) => (state, transition),
    }
}

/// Climb velocity along the ladder axis; horizontal input plays no part
pub fn climb_velocity(ladder_rotation: Quat, vertical: f32, climb_speed: f32) -> Vec3 {
    ladder_rotation * LADDER_FORWARD * vertical * climb_speed
}

/// What the climber should do during one fixed tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClimbStep {
    Idle,
    Snap(TransitionTarget),
    Climb,
}

impl LadderClimber {
    /// Returns true when the zone was recognized and the state changed
    pub fn enter_zone(&mut self, zone: ZoneKind, ladder: Entity) -> bool {
        if !zone.is_recognized() {
            return false;
        }

        self.ladder = Some(ladder);
        let (state, transition) = on_zone_entered(self.state, self.transition, zone);
        self.state = state;
        self.transition = transition;
        true
    }

    /// Decide this tick's step, consuming a pending transition exactly once
    pub fn next_step(&mut self) -> ClimbStep {
        if !self.state.is_climbing() {
            return ClimbStep::Idle;
        }

        match std::mem::take(&mut self.transition) {
            TransitionTarget::None => ClimbStep::Climb,
            target => ClimbStep::Snap(target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ladder() -> Entity {
        Entity::from_raw(1)
    }

    #[test]
    fn test_bottom_entry_starts_climb_at_first_waypoint() {
        let mut climber = LadderClimber::default();

        assert!(climber.enter_zone(ZoneKind::Bottom, ladder()));

        assert_eq!(climber.state, ClimbState::Climbing);
        assert_eq!(climber.transition, TransitionTarget::Waypoint1);
        assert_eq!(climber.ladder, Some(ladder()));
    }

    #[test]
    fn test_bottom_entry_while_climbing_cancels_transition() {
        let mut climber = LadderClimber {
            state: ClimbState::Climbing,
            transition: TransitionTarget::Waypoint2,
            ladder: None,
        };

        climber.enter_zone(ZoneKind::Bottom, ladder());

        assert_eq!(climber.state, ClimbState::NotClimbing);
        assert_eq!(climber.transition, TransitionTarget::None);
    }

    #[test]
    fn test_top_entry_while_climbing_exits_at_top() {
        let (state, transition) = on_zone_entered(
            ClimbState::Climbing,
            TransitionTarget::None,
            ZoneKind::Top,
        );

        assert_eq!(state, ClimbState::NotClimbing);
        assert_eq!(transition, TransitionTarget::Waypoint3);
    }

    #[test]
    fn test_top_entry_from_above_reenters_ladder() {
        let (state, transition) = on_zone_entered(
            ClimbState::NotClimbing,
            TransitionTarget::None,
            ZoneKind::Top,
        );

        assert_eq!(state, ClimbState::Climbing);
        assert_eq!(transition, TransitionTarget::Waypoint2);
    }

    #[test]
    fn test_unrecognized_zone_is_ignored() {
        let mut climber = LadderClimber {
            state: ClimbState::Climbing,
            transition: TransitionTarget::Waypoint1,
            ladder: Some(ladder()),
        };

        assert!(!climber.enter_zone(ZoneKind::Unrecognized, Entity::from_raw(9)));

        assert_eq!(climber.state, ClimbState::Climbing);
        assert_eq!(climber.transition, TransitionTarget::Waypoint1);
        assert_eq!(climber.ladder, Some(ladder()));
    }

    #[test]
    fn test_next_step_consumes_transition_once() {
        let mut climber = LadderClimber::default();
        climber.enter_zone(ZoneKind::Bottom, ladder());

        assert_eq!(
            climber.next_step(),
            ClimbStep::Snap(TransitionTarget::Waypoint1)
        );
        assert_eq!(climber.transition, TransitionTarget::None);
        assert_eq!(climber.next_step(), ClimbStep::Climb);
    }

    #[test]
    fn test_next_step_idle_when_not_climbing() {
        let mut climber = LadderClimber::default();
        climber.enter_zone(ZoneKind::Bottom, ladder());
        climber.enter_zone(ZoneKind::Top, ladder());

        // Top exit leaves Waypoint3 pending but no climbing step runs
        assert_eq!(climber.next_step(), ClimbStep::Idle);
        assert_eq!(climber.transition, TransitionTarget::Waypoint3);
    }

    #[test]
    fn test_climb_velocity_upright_ladder() {
        // Ladder rotated so its forward axis points up
        let rotation = Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2);

        let velocity = climb_velocity(rotation, 1.0, 2.0);

        assert!((velocity - Vec3::new(0.0, 2.0, 0.0)).length() < 1e-5);
        assert!((climb_velocity(rotation, -0.5, 2.0).y + 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_climb_velocity_zero_input() {
        let velocity = climb_velocity(Quat::IDENTITY, 0.0, 3.0);
        assert_eq!(velocity, Vec3::ZERO);
    }

    fn zone_strategy() -> impl Strategy<Value = ZoneKind> {
        prop_oneof![
            Just(ZoneKind::Bottom),
            Just(ZoneKind::Top),
            Just(ZoneKind::Unrecognized),
        ]
    }

    proptest! {
        #[test]
        fn prop_climb_state_follows_recognized_parity(
            zones in proptest::collection::vec(zone_strategy(), 0..64)
        ) {
            let mut climber = LadderClimber::default();
            let mut recognized = 0usize;

            for zone in &zones {
                if climber.enter_zone(*zone, ladder()) {
                    recognized += 1;
                }
            }

            prop_assert_eq!(climber.state.is_climbing(), recognized % 2 == 1);
        }

        #[test]
        fn prop_transition_cleared_after_tick(
            zones in proptest::collection::vec(zone_strategy(), 1..32)
        ) {
            let mut climber = LadderClimber::default();

            for zone in &zones {
                climber.enter_zone(*zone, ladder());
                let was_pending = climber.transition.is_pending();
                let step = climber.next_step();

                if climber.state.is_climbing() {
                    prop_assert_eq!(climber.transition, TransitionTarget::None);
                    prop_assert_eq!(matches!(step, ClimbStep::Snap(_)), was_pending);
                } else {
                    prop_assert_eq!(step, ClimbStep::Idle);
                }
            }
        }
    }
}
