// Use cases layer: the game state machine and the loop that drives it.

pub mod game;
pub mod types;

pub use game::{GameStateMachine, run_game_loop};
pub use types::{DespawnCause, GameEvent, GamePhase, HudState, WorldEvent, WorldUpdate};
