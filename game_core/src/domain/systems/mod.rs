// Per-tick systems; each one mutates only what it is handed.

pub mod collision;
pub mod movement;
pub mod spawn;

pub use collision::{Kill, PlayerHits, bullets_vs_enemies, player_vs_enemies};
pub use movement::{advance_bullets, advance_enemies, move_player};
pub use spawn::{SpawnController, spawn_position};
