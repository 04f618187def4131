// Domain-level simulation entities and snapshot types.

use std::ops::{Add, Sub};

/// Identifier handed to adapters so they can key renderable handles.
pub type EntityId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Euclidean distance between two points.
    pub fn distance_to(self, other: Vec3) -> f32 {
        (self - other).length()
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Anything that occupies a point in the play volume.
pub trait SpatialEntity {
    fn position(&self) -> Vec3;

    fn distance_to(&self, other: &impl SpatialEntity) -> f32 {
        self.position().distance_to(other.position())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Enemy,
    Bullet,
}

pub struct Player {
    pub position: Vec3,
    // Cosmetic roll around z, derived from x after every move.
    pub tilt: f32,
}

impl Player {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            tilt: 0.0,
        }
    }
}

pub struct Enemy {
    pub id: EntityId,
    pub position: Vec3,
    // Accumulated spin (x/y axes only); never affects gameplay.
    pub rotation: Vec3,
}

impl Enemy {
    pub fn new(id: EntityId, position: Vec3) -> Self {
        Self {
            id,
            position,
            rotation: Vec3::ZERO,
        }
    }
}

pub struct Bullet {
    pub id: EntityId,
    pub position: Vec3,
}

impl SpatialEntity for Player {
    fn position(&self) -> Vec3 {
        self.position
    }
}

impl SpatialEntity for Enemy {
    fn position(&self) -> Vec3 {
        self.position
    }
}

impl SpatialEntity for Bullet {
    fn position(&self) -> Vec3 {
        self.position
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntitySnapshot {
    pub id: EntityId,
    pub kind: EntityKind,
    pub position: Vec3,
    pub rotation: Vec3,
}

/// The player is never pooled; it always reports id 0.
pub const PLAYER_ID: EntityId = 0;

impl From<&Player> for EntitySnapshot {
    fn from(p: &Player) -> Self {
        Self {
            id: PLAYER_ID,
            kind: EntityKind::Player,
            position: p.position,
            rotation: Vec3::new(0.0, 0.0, p.tilt),
        }
    }
}

impl From<&Enemy> for EntitySnapshot {
    fn from(e: &Enemy) -> Self {
        Self {
            id: e.id,
            kind: EntityKind::Enemy,
            position: e.position,
            rotation: e.rotation,
        }
    }
}

impl From<&Bullet> for EntitySnapshot {
    fn from(b: &Bullet) -> Self {
        Self {
            id: b.id,
            kind: EntityKind::Bullet,
            position: b.position,
            rotation: Vec3::ZERO,
        }
    }
}
