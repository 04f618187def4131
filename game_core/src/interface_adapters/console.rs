// Headless console frontend: JSON commands on stdin, JSON frames on stdout.

use crate::interface_adapters::protocol::{ConsoleCommand, HudDto, OutboundMessage};
use crate::interface_adapters::render::Viewport;
use crate::use_cases::{GameEvent, HudState, WorldUpdate};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::{broadcast, mpsc, watch};
use tracing::{debug, error, info, warn};

#[derive(Debug)]
pub enum CommandError {
    // Line was not a command object we understand.
    #[allow(dead_code)]
    Parse(serde_json::Error),
}

#[derive(Debug)]
pub enum ConsoleError {
    #[allow(dead_code)]
    Io(std::io::Error),
    InputClosed,
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        ConsoleError::Io(err)
    }
}

/// Where a parsed console line goes.
#[derive(Debug, Clone, PartialEq)]
pub enum Routed {
    Game(GameEvent),
    Resize(Viewport),
}

/// Parses one console line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Routed>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let command: ConsoleCommand = serde_json::from_str(line).map_err(CommandError::Parse)?;
    let routed = match command {
        ConsoleCommand::Start => Routed::Game(GameEvent::Start),
        ConsoleCommand::Restart => Routed::Game(GameEvent::Restart),
        ConsoleCommand::Key(payload) => Routed::Game(payload.into()),
        ConsoleCommand::Resize(size) => Routed::Resize(Viewport {
            width: size.width,
            height: size.height,
        }),
    };
    Ok(Some(routed))
}

/// Reads commands until EOF, forwarding them to the game loop and renderer.
///
/// Malformed lines are logged and skipped. Returns `Ok(())` on EOF.
pub async fn read_commands<R>(
    reader: R,
    input_tx: mpsc::Sender<GameEvent>,
    viewport_tx: watch::Sender<Viewport>,
) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Ok(Some(Routed::Game(event))) => {
                debug!(?event, "console command");
                input_tx
                    .send(event)
                    .await
                    .map_err(|_| ConsoleError::InputClosed)?;
            }
            Ok(Some(Routed::Resize(viewport))) => {
                viewport_tx.send_replace(viewport);
            }
            Ok(None) => {}
            Err(CommandError::Parse(e)) => {
                warn!(error = %e, "ignoring malformed console command");
            }
        }
    }

    info!("console input closed");
    Ok(())
}

/// Writes one JSON line per world update (and per HUD change) to `writer`.
pub async fn write_frames<W>(
    mut world_rx: broadcast::Receiver<WorldUpdate>,
    mut writer: W,
) -> Result<(), ConsoleError>
where
    W: AsyncWrite + Unpin,
{
    let mut last_hud: Option<HudState> = None;

    loop {
        let update = match world_rx.recv().await {
            Ok(update) => update,
            Err(broadcast::error::RecvError::Lagged(n)) => {
                warn!(missed = n, "frame writer lagged; skipping to latest update");
                continue;
            }
            Err(broadcast::error::RecvError::Closed) => {
                debug!("world updates closed; frame writer exiting");
                break;
            }
        };

        let hud = update.hud;
        let mut messages = vec![OutboundMessage::Frame(update.into())];
        if last_hud != Some(hud) {
            last_hud = Some(hud);
            messages.push(OutboundMessage::Hud(HudDto::from(hud)));
        }

        for msg in &messages {
            let mut line = match serde_json::to_vec(msg) {
                Ok(line) => line,
                Err(e) => {
                    error!(error = ?e, "failed to serialize frame");
                    continue;
                }
            };
            line.push(b'\n');
            writer.write_all(&line).await?;
        }
        writer.flush().await?;
    }

    Ok(())
}
