use crate::interface_adapters::render::Viewport;
use crate::use_cases::{GameEvent, HudState, WorldUpdate};
use tokio::sync::{broadcast, mpsc, watch};

#[derive(Clone)]
pub struct AppState {
    // Commands flowing from the console into the game loop.
    pub input_tx: mpsc::Sender<GameEvent>,
    // World updates produced by the game loop (domain structs).
    pub world_tx: broadcast::Sender<WorldUpdate>,
    // Latest phase/score/lives for the UI.
    pub hud_tx: watch::Sender<HudState>,
    // Latest window size for the camera.
    pub viewport_tx: watch::Sender<Viewport>,
}
