//! Moving entities (player, poacher).

use ranger_common::WorldPos;
use ranger_world::ParkMap;
use serde::{Deserialize, Serialize};

/// A point-sized mover in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Current position
    pub pos: WorldPos,
    /// Direction of travel, normally unit length or zero
    pub vel: WorldPos,
    /// Speed in world units per second
    pub speed: f32,
}

impl Entity {
    /// Creates a stationary entity.
    #[must_use]
    pub const fn new(pos: WorldPos, speed: f32) -> Self {
        Self {
            pos,
            vel: WorldPos::ZERO,
            speed,
        }
    }

    /// Position this entity would reach after `dt` seconds.
    #[must_use]
    pub fn proposed(&self, dt: f32) -> WorldPos {
        self.pos + self.vel.scale(self.speed * dt)
    }

    /// Advances by `dt` seconds if the destination tile is on the map and
    /// walkable. Otherwise the entity stays put. Returns whether it moved.
    pub fn step(&mut self, dt: f32, map: &ParkMap) -> bool {
        let next = self.proposed(dt);
        if map.is_walkable_at(next.to_tile()) {
            self.pos = next;
            return true;
        }
        false
    }

    /// Distance to another entity.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f32 {
        self.pos.distance(other.pos)
    }
}
