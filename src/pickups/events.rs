//! Pickups domain: messages.

use bevy::ecs::message::Message;

/// A coin was picked up. Carries the coin's worth and the new total
/// so listeners need not re-read the inventory.
#[derive(Debug, Clone, Copy)]
pub struct CoinCollected {
    pub value: u32,
    pub total: u32,
}

impl Message for CoinCollected {}
