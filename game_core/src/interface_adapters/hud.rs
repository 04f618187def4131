// UI collaborator: turns HUD state changes into notices for the player.

use crate::use_cases::{GamePhase, HudState};
use tokio::sync::watch;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudNotice {
    // Start screen hidden, playfield visible.
    Started,
    Score(u32),
    Lives(u32),
    // Game-over overlay with the final score.
    GameOver { final_score: u32 },
}

/// Diffs successive HUD states.
#[derive(Debug, Default)]
pub struct HudTracker {
    last: Option<HudState>,
}

impl HudTracker {
    pub fn observe(&mut self, hud: HudState) -> Vec<HudNotice> {
        let mut notices = Vec::new();
        let prev = self.last.replace(hud);

        let phase_changed = prev.map(|p| p.phase) != Some(hud.phase);
        if phase_changed {
            match hud.phase {
                GamePhase::Running => notices.push(HudNotice::Started),
                GamePhase::GameOver { final_score } => {
                    notices.push(HudNotice::GameOver { final_score })
                }
                GamePhase::Idle => {}
            }
        }

        if prev.map(|p| p.score) != Some(hud.score) || phase_changed {
            notices.push(HudNotice::Score(hud.score));
        }
        if prev.map(|p| p.lives) != Some(hud.lives) || phase_changed {
            notices.push(HudNotice::Lives(hud.lives));
        }

        notices
    }
}

pub async fn run_hud(mut hud_rx: watch::Receiver<HudState>) {
    let mut tracker = HudTracker::default();

    loop {
        let hud = *hud_rx.borrow_and_update();
        for notice in tracker.observe(hud) {
            match notice {
                HudNotice::Started => debug!("hud: running"),
                HudNotice::GameOver { final_score } => debug!(final_score, "hud: game over"),
                HudNotice::Score(score) => debug!(score, "score"),
                HudNotice::Lives(lives) => debug!(lives, "lives"),
            }
        }

        if hud_rx.changed().await.is_err() {
            debug!("hud channel closed");
            break;
        }
    }
}
