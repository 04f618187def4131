// Framework bootstrap for the headless game runtime.

use crate::domain::{GameTuning, SpawnRng};
use crate::frameworks::config;
use crate::interface_adapters::console::{read_commands, write_frames};
use crate::interface_adapters::hud::run_hud;
use crate::interface_adapters::render::{Camera, SceneSync, TracingScene, Viewport, run_renderer};
use crate::interface_adapters::state::AppState;
use crate::interface_adapters::utils::rng::StdSpawnRng;
use crate::use_cases::{GameEvent, GameStateMachine, HudState, WorldUpdate, run_game_loop};

use std::{io::Result, sync::Arc, time::Duration};
use tokio::io::BufReader;
use tokio::sync::{Notify, broadcast, mpsc, watch};
use tokio::task::JoinHandle;

const INITIAL_VIEWPORT: Viewport = Viewport {
    width: 1280,
    height: 720,
};

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Frames may go to stdout; keep logs on stderr.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// A running game loop plus the channels that feed and observe it.
pub struct GameHandle {
    pub state: AppState,
    shutdown: Arc<Notify>,
    task: JoinHandle<()>,
}

impl GameHandle {
    /// Stops the frame loop and waits for it to exit.
    pub async fn shutdown(self) {
        self.shutdown.notify_one();
        if let Err(e) = self.task.await {
            tracing::error!(error = %e, "game loop task failed");
        }
    }
}

/// Wires channels and spawns the frame loop.
pub fn spawn_game<R>(tuning: GameTuning, rng: R, tick_interval: Duration) -> GameHandle
where
    R: SpawnRng + 'static,
{
    // input_tx/rx: console commands go to the single game loop.
    let (input_tx, input_rx) = mpsc::channel::<GameEvent>(config::INPUT_CHANNEL_CAPACITY);
    // world_tx/rx: per-tick updates for the renderer and frame writer.
    let (world_tx, _world_rx) = broadcast::channel::<WorldUpdate>(config::WORLD_BROADCAST_CAPACITY);

    let machine = GameStateMachine::new(tuning, rng);
    let (hud_tx, _hud_rx) = watch::channel::<HudState>(machine.hud());
    let (viewport_tx, _viewport_rx) = watch::channel::<Viewport>(INITIAL_VIEWPORT);

    let state = AppState {
        input_tx,
        world_tx,
        hud_tx,
        viewport_tx,
    };

    let shutdown = Arc::new(Notify::new());
    let task = tokio::spawn(run_game_loop(
        machine,
        input_rx,
        state.world_tx.clone(),
        state.hud_tx.clone(),
        tick_interval,
        shutdown.clone(),
    ));

    GameHandle {
        state,
        shutdown,
        task,
    }
}

pub async fn run(tuning: GameTuning, rng: StdSpawnRng, tick_interval: Duration) -> Result<()> {
    let game = spawn_game(tuning, rng, tick_interval);
    let state = game.state.clone();

    // Adapters subscribe before the first frame goes out.
    let mut sync = SceneSync::new(TracingScene::default(), Camera::default());
    sync.resize(*state.viewport_tx.borrow());
    tokio::spawn(run_renderer(
        sync,
        state.world_tx.subscribe(),
        state.viewport_tx.subscribe(),
    ));
    tokio::spawn(run_hud(state.hud_tx.subscribe()));

    if config::emit_frames() {
        let world_rx = state.world_tx.subscribe();
        tokio::spawn(async move {
            if let Err(e) = write_frames(world_rx, tokio::io::stdout()).await {
                tracing::warn!(error = ?e, "frame writer stopped");
            }
        });
    }

    tracing::info!(
        tick_ms = tick_interval.as_millis() as u64,
        "game ready; waiting for start command"
    );

    let stdin = BufReader::new(tokio::io::stdin());
    let console = read_commands(stdin, state.input_tx.clone(), state.viewport_tx.clone());

    tokio::select! {
        res = console => {
            if let Err(e) = res {
                tracing::warn!(error = ?e, "console reader stopped");
            }
        }
        res = tokio::signal::ctrl_c() => {
            res.inspect_err(|e| {
                tracing::error!(error = %e, "failed to listen for ctrl-c");
            })?;
            tracing::info!("interrupted");
        }
    }

    game.shutdown().await;
    Ok(())
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let rng = match config::spawn_seed() {
        Some(seed) => {
            tracing::info!(seed, "using seeded spawn rng");
            StdSpawnRng::seeded(seed)
        }
        None => StdSpawnRng::from_entropy(),
    };

    run(config::game_tuning(), rng, config::tick_interval()).await
}
