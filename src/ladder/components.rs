//! Ladder domain: geometry descriptor and session state.

use bevy::prelude::*;

use crate::animation::Facing;

/// Diagonal lean of the ladder, authored per segment. Drives the
/// fixed facing convention and the exit nudge direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LadderAngle {
    TopLeftToBottomRight,
    TopRightToBottomLeft,
}

impl LadderAngle {
    /// Fixed visual convention: the character faces into the lean.
    pub fn climb_facing(self) -> Facing {
        match self {
            LadderAngle::TopLeftToBottomRight => Facing::Left,
            LadderAngle::TopRightToBottomLeft => Facing::Right,
        }
    }

    /// Sign of the lateral nudge applied after climbing down, pushing
    /// the character off the ladder axis so the volume is not
    /// immediately re-entered.
    pub fn exit_nudge_sign(self) -> f32 {
        match self {
            LadderAngle::TopLeftToBottomRight => 1.0,
            LadderAngle::TopRightToBottomLeft => -1.0,
        }
    }
}

/// Passive descriptor of a climbable segment. Authored once at spawn
/// and immutable at runtime; all four points are validated then.
#[derive(Component, Debug, Clone)]
pub struct LadderGeometry {
    pub angle: LadderAngle,
    pub snap_bottom: Vec3,
    pub snap_top: Vec3,
    pub reached_bottom: Vec3,
    pub reached_top: Vec3,
}

impl LadderGeometry {
    /// Coincident end points make the climb axis undefined.
    pub fn is_degenerate(&self) -> bool {
        self.snap_bottom == self.snap_top || self.reached_bottom == self.reached_top
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApproachEnd {
    Bottom,
    Top,
}

/// Decides which end the character approaches from. A position that
/// sits between the two reached thresholds is ambiguous and falls
/// back to bottom; callers log the anomaly. This is a documented
/// approximation, not an error.
pub fn decide_approach(player_y: f32, geometry: &LadderGeometry) -> (ApproachEnd, bool) {
    if player_y < geometry.reached_bottom.y {
        (ApproachEnd::Bottom, false)
    } else if player_y > geometry.reached_top.y {
        (ApproachEnd::Top, false)
    } else {
        (ApproachEnd::Bottom, true)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimbDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LadderPhase {
    /// Scripted interpolation toward the snap point.
    Snapping,
    /// Moving along the ladder axis toward the far reached point.
    Climbing,
    /// Far end reached; waiting on the exit animation delay.
    Exiting,
}

/// Transient climb session, present on the player only while
/// interacting with a ladder. Built fresh on every entry so no state
/// leaks between climbs.
#[derive(Component, Debug, Clone)]
pub struct LadderSession {
    pub ladder: Entity,
    pub snap_to: Vec3,
    pub reached: Vec3,
    pub direction: ClimbDirection,
    pub angle: LadderAngle,
    pub phase: LadderPhase,
}

impl LadderSession {
    pub fn new(ladder: Entity, geometry: &LadderGeometry, approach: ApproachEnd) -> Self {
        let (snap_to, reached, direction) = match approach {
            ApproachEnd::Bottom => (
                geometry.snap_bottom,
                geometry.reached_top,
                ClimbDirection::Up,
            ),
            ApproachEnd::Top => (
                geometry.snap_top,
                geometry.reached_bottom,
                ClimbDirection::Down,
            ),
        };
        Self {
            ladder,
            snap_to,
            reached,
            direction,
            angle: geometry.angle,
            phase: LadderPhase::Snapping,
        }
    }
}
