// Shared helpers for driving the real frame loop from integration tests.
#![allow(dead_code)]

use game_core::domain::{GameTuning, SpawnRng};
use game_core::frameworks::runtime::GameHandle;
use game_core::use_cases::{HudState, WorldUpdate};
use std::time::Duration;
use tokio::sync::{broadcast, watch};
use tokio::time::timeout;

// Fast ticks keep the tests short; the loop never bursts to catch up.
pub const TEST_TICK: Duration = Duration::from_millis(1);
// Upper bound for any single wait.
pub const WAIT: Duration = Duration::from_secs(5);

/// Always returns the same fraction of the requested range.
pub struct FixedRng {
    pub fraction: f32,
}

impl SpawnRng for FixedRng {
    fn range(&mut self, min: f32, max: f32) -> f32 {
        min + (max - min) * self.fraction
    }
}

// Spawns a game whose enemies appear at the top-right corner, away from the player.
pub fn start_game(tuning: GameTuning) -> GameHandle {
    game_core::spawn_game(tuning, FixedRng { fraction: 0.95 }, TEST_TICK)
}

// Spawns a game whose enemies appear dead ahead of the player.
pub fn start_game_centered(tuning: GameTuning) -> GameHandle {
    game_core::spawn_game(tuning, FixedRng { fraction: 0.5 }, TEST_TICK)
}

// Wait until the HUD satisfies `pred`, returning the matching state.
pub async fn wait_for_hud(
    rx: &mut watch::Receiver<HudState>,
    pred: impl Fn(&HudState) -> bool,
) -> HudState {
    timeout(WAIT, async {
        loop {
            let hud = *rx.borrow_and_update();
            if pred(&hud) {
                return hud;
            }
            rx.changed().await.expect("hud sender alive");
        }
    })
    .await
    .expect("hud condition reached in time")
}

// Wait for the first world update that satisfies `pred`.
pub async fn wait_for_update(
    rx: &mut broadcast::Receiver<WorldUpdate>,
    pred: impl Fn(&WorldUpdate) -> bool,
) -> WorldUpdate {
    timeout(WAIT, async {
        loop {
            match rx.recv().await {
                Ok(update) if pred(&update) => return update,
                Ok(_) | Err(broadcast::error::RecvError::Lagged(_)) => {}
                Err(broadcast::error::RecvError::Closed) => panic!("world updates closed"),
            }
        }
    })
    .await
    .expect("world update condition reached in time")
}
