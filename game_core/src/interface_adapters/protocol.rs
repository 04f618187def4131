// Wire DTOs and conversions for the headless frontend: frames out, commands in.

use crate::domain::{EntityKind, EntitySnapshot};
use crate::use_cases::{DespawnCause, GameEvent, GamePhase, HudState, WorldEvent, WorldUpdate};
use serde::{Deserialize, Serialize};

/// Messages written for an external renderer / UI.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum OutboundMessage {
    // Full state of one tick.
    Frame(FrameDto),
    // Phase/score/lives change for the UI layer.
    Hud(HudDto),
}

/// Commands read from the console, one JSON object per line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ConsoleCommand {
    Start,
    Restart,
    Key(KeyPayload),
    Resize(ResizePayload),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KeyPayload {
    pub key: String,
    #[serde(default = "default_pressed")]
    pub pressed: bool,
}

fn default_pressed() -> bool {
    true
}

impl From<KeyPayload> for GameEvent {
    fn from(payload: KeyPayload) -> Self {
        GameEvent::Key {
            key: payload.key,
            pressed: payload.pressed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ResizePayload {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct FrameDto {
    pub tick: u64,
    pub hud: HudDto,
    pub starfield_rotation: f32,
    pub player: EntityStateDto,
    pub enemies: Vec<EntityStateDto>,
    pub bullets: Vec<EntityStateDto>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<EventDto>,
}

impl From<WorldUpdate> for FrameDto {
    fn from(update: WorldUpdate) -> Self {
        Self {
            tick: update.tick,
            hud: update.hud.into(),
            starfield_rotation: update.starfield_rotation,
            player: EntityStateDto::from(&update.player),
            enemies: update.enemies.iter().map(EntityStateDto::from).collect(),
            bullets: update.bullets.iter().map(EntityStateDto::from).collect(),
            events: update.events.into_iter().map(EventDto::from).collect(),
        }
    }
}

/// Flattened entity transform.
#[derive(Debug, Clone, Serialize)]
pub struct EntityStateDto {
    pub id: u64,
    pub kind: KindDto,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub rot_x: f32,
    pub rot_y: f32,
    pub rot_z: f32,
}

impl From<&EntitySnapshot> for EntityStateDto {
    fn from(entity: &EntitySnapshot) -> Self {
        Self {
            id: entity.id,
            kind: entity.kind.into(),
            x: entity.position.x,
            y: entity.position.y,
            z: entity.position.z,
            rot_x: entity.rotation.x,
            rot_y: entity.rotation.y,
            rot_z: entity.rotation.z,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KindDto {
    Player,
    Enemy,
    Bullet,
}

impl From<EntityKind> for KindDto {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Player => KindDto::Player,
            EntityKind::Enemy => KindDto::Enemy,
            EntityKind::Bullet => KindDto::Bullet,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventDto {
    Spawned {
        id: u64,
        kind: KindDto,
        x: f32,
        y: f32,
        z: f32,
    },
    Despawned {
        id: u64,
        kind: KindDto,
        cause: CauseDto,
    },
    PlayerHit {
        enemy: u64,
        lives: u32,
    },
    EnemyKilled {
        bullet: u64,
        enemy: u64,
        score: u32,
    },
    PhaseChanged {
        phase: PhaseDto,
    },
}

impl From<WorldEvent> for EventDto {
    fn from(event: WorldEvent) -> Self {
        match event {
            WorldEvent::Spawned { id, kind, position } => EventDto::Spawned {
                id,
                kind: kind.into(),
                x: position.x,
                y: position.y,
                z: position.z,
            },
            WorldEvent::Despawned { id, kind, cause } => EventDto::Despawned {
                id,
                kind: kind.into(),
                cause: cause.into(),
            },
            WorldEvent::PlayerHit { enemy, lives } => EventDto::PlayerHit { enemy, lives },
            WorldEvent::EnemyKilled {
                bullet,
                enemy,
                score,
            } => EventDto::EnemyKilled {
                bullet,
                enemy,
                score,
            },
            WorldEvent::PhaseChanged(phase) => EventDto::PhaseChanged {
                phase: phase.into(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CauseDto {
    Missed,
    OffScreen,
    Collision,
    Reset,
}

impl From<DespawnCause> for CauseDto {
    fn from(cause: DespawnCause) -> Self {
        match cause {
            DespawnCause::Missed => CauseDto::Missed,
            DespawnCause::OffScreen => CauseDto::OffScreen,
            DespawnCause::Collision => CauseDto::Collision,
            DespawnCause::Reset => CauseDto::Reset,
        }
    }
}

/// Game phase sent to the UI; GameOver carries the final score.
#[derive(Debug, Clone, Copy, Serialize)]
pub enum PhaseDto {
    Idle,
    Running,
    GameOver { final_score: u32 },
}

impl From<GamePhase> for PhaseDto {
    fn from(phase: GamePhase) -> Self {
        match phase {
            GamePhase::Idle => PhaseDto::Idle,
            GamePhase::Running => PhaseDto::Running,
            GamePhase::GameOver { final_score } => PhaseDto::GameOver { final_score },
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct HudDto {
    pub phase: PhaseDto,
    pub score: u32,
    pub lives: u32,
}

impl From<HudState> for HudDto {
    fn from(hud: HudState) -> Self {
        Self {
            phase: hud.phase.into(),
            score: hud.score,
            lives: hud.lives,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Vec3;
    use serde_json::json;

    fn snapshot(id: u64, kind: EntityKind, z: f32) -> EntitySnapshot {
        EntitySnapshot {
            id,
            kind,
            position: Vec3::new(1.0, 2.0, z),
            rotation: Vec3::ZERO,
        }
    }

    #[test]
    fn when_key_command_omits_pressed_then_it_defaults_to_key_down() {
        let cmd: ConsoleCommand =
            serde_json::from_str(r#"{"type":"Key","data":{"key":"ArrowUp"}}"#)
                .expect("valid command");

        assert_eq!(
            cmd,
            ConsoleCommand::Key(KeyPayload {
                key: "ArrowUp".to_string(),
                pressed: true,
            })
        );
    }

    #[test]
    fn when_unit_commands_are_parsed_then_no_data_is_needed() {
        let start: ConsoleCommand = serde_json::from_str(r#"{"type":"Start"}"#).expect("start");
        let restart: ConsoleCommand =
            serde_json::from_str(r#"{"type":"Restart"}"#).expect("restart");

        assert_eq!(start, ConsoleCommand::Start);
        assert_eq!(restart, ConsoleCommand::Restart);
    }

    #[test]
    fn when_command_type_is_unknown_then_parsing_fails() {
        let result = serde_json::from_str::<ConsoleCommand>(r#"{"type":"Jump"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn when_frame_is_serialized_then_hud_entities_and_events_are_flattened() {
        let update = WorldUpdate {
            tick: 7,
            hud: HudState {
                phase: GamePhase::GameOver { final_score: 40 },
                score: 40,
                lives: 0,
            },
            starfield_rotation: 0.5,
            player: snapshot(0, EntityKind::Player, 5.0),
            enemies: vec![snapshot(3, EntityKind::Enemy, -2.0)],
            bullets: Vec::new(),
            events: vec![WorldEvent::Despawned {
                id: 3,
                kind: EntityKind::Enemy,
                cause: DespawnCause::OffScreen,
            }],
        };

        let value = serde_json::to_value(OutboundMessage::Frame(update.into())).expect("serialize");

        assert_eq!(value["type"], json!("Frame"));
        let data = &value["data"];
        assert_eq!(data["tick"], json!(7));
        assert_eq!(data["hud"]["phase"], json!({"GameOver": {"final_score": 40}}));
        assert_eq!(data["enemies"][0]["kind"], json!("enemy"));
        assert_eq!(data["enemies"][0]["z"], json!(-2.0));
        assert_eq!(
            data["events"][0],
            json!({"event": "despawned", "id": 3, "kind": "enemy", "cause": "off_screen"})
        );
    }

    #[test]
    fn when_frame_has_no_events_then_events_field_is_omitted() {
        let update = WorldUpdate {
            tick: 1,
            hud: HudState {
                phase: GamePhase::Idle,
                score: 0,
                lives: 3,
            },
            starfield_rotation: 0.0,
            player: snapshot(0, EntityKind::Player, 5.0),
            enemies: Vec::new(),
            bullets: Vec::new(),
            events: Vec::new(),
        };

        let value = serde_json::to_value(FrameDto::from(update)).expect("serialize");

        assert!(value.get("events").is_none());
        assert_eq!(value["hud"]["phase"], json!("Idle"));
    }
}
