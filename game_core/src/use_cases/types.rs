// Use-case level inputs/outputs for the game loop.

use crate::domain::{EntityId, EntityKind, EntitySnapshot, Vec3};

/// Inputs queued for the game loop; drained at the start of every tick.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Start,
    Restart,
    Key { key: String, pressed: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Idle,
    Running,
    GameOver { final_score: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DespawnCause {
    // Enemy slipped past the player.
    Missed,
    // Bullet left the play volume.
    OffScreen,
    Collision,
    Reset,
}

/// Entity lifecycle and rule outcomes produced by one tick (or command).
#[derive(Debug, Clone, PartialEq)]
pub enum WorldEvent {
    Spawned {
        id: EntityId,
        kind: EntityKind,
        position: Vec3,
    },
    Despawned {
        id: EntityId,
        kind: EntityKind,
        cause: DespawnCause,
    },
    PlayerHit {
        enemy: EntityId,
        lives: u32,
    },
    EnemyKilled {
        bullet: EntityId,
        enemy: EntityId,
        score: u32,
    },
    PhaseChanged(GamePhase),
}

/// What the UI shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudState {
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u32,
}

#[derive(Debug, Clone)]
pub struct WorldUpdate {
    pub tick: u64,
    pub hud: HudState,
    pub starfield_rotation: f32,
    pub player: EntitySnapshot,
    pub enemies: Vec<EntitySnapshot>,
    pub bullets: Vec<EntitySnapshot>,
    pub events: Vec<WorldEvent>,
}
