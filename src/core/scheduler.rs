//! Core domain: single-threaded deferred-action scheduler.
//!
//! Every timed sub-sequence in the game (delayed animation updates,
//! hang-input enablement, wall-jump disarm, climb-completion
//! repositioning, elevator start delays, respawn) is a deferred
//! continuation scheduled here and drained once per fixed tick.
//! Scheduled actions are never cancelled: a later state change can
//! overwrite an earlier action's effect, and whichever write lands
//! last wins.

use bevy::ecs::message::Message;
use bevy::prelude::*;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::animation::AnimState;
use crate::platforms::ElevatorStop;

/// Every deferred continuation in the system, as a tagged union
/// dispatched by the owning domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeferredKind {
    SetAnimState { target: Entity, state: AnimState },
    EnableHangInput { player: Entity },
    DisarmWallJump { player: Entity },
    EndLadderSnap { player: Entity },
    FinishLadderTopExit { player: Entity },
    FinishLadderDrop { player: Entity },
    FinishHangClimb { player: Entity },
    StartElevator { elevator: Entity, target: ElevatorStop },
    RespawnPlayer { player: Entity },
    ResetScene,
}

/// Message emitted for each action that came due this tick.
#[derive(Debug)]
pub struct DeferredFired {
    pub kind: DeferredKind,
}

impl Message for DeferredFired {}

#[derive(Debug, Clone)]
struct Deferred {
    fire_at: f64,
    seq: u64,
    kind: DeferredKind,
}

impl PartialEq for Deferred {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for Deferred {}

impl PartialOrd for Deferred {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Deferred {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.fire_at
            .total_cmp(&other.fire_at)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Min-heap of pending actions, ordered by fire time then by
/// scheduling order, so actions due at the same instant fire in the
/// order they were issued.
#[derive(Resource, Debug, Default)]
pub struct DeferredQueue {
    heap: BinaryHeap<Reverse<Deferred>>,
    next_seq: u64,
}

impl DeferredQueue {
    pub fn schedule(&mut self, now: f64, delay: f32, kind: DeferredKind) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Deferred {
            fire_at: now + delay as f64,
            seq,
            kind,
        }));
    }

    /// Pops every action due at or before `now`, in firing order.
    pub fn drain_due(&mut self, now: f64) -> Vec<DeferredKind> {
        let mut due = Vec::new();
        while self.heap.peek().is_some_and(|Reverse(head)| head.fire_at <= now) {
            if let Some(Reverse(action)) = self.heap.pop() {
                due.push(action.kind);
            }
        }
        due
    }

    pub fn pending(&self) -> usize {
        self.heap.len()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
