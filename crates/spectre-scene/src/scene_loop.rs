//! Scene loop thread: drives the dashboard engine at the configured tick
//! period and publishes snapshots.
//!
//! The engine is created inside the thread so it never crosses a thread
//! boundary. Commands arrive via `mpsc`. Snapshots go to a `SceneSink` and
//! into shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Instant;

use spectre_core::commands::DashboardCommand;
use spectre_core::entities::Dataset;
use spectre_core::state::DashboardSnapshot;

use crate::config::{ConfigError, DashboardConfig};
use crate::engine::DashboardEngine;

/// Messages from the host to the scene loop thread.
#[derive(Debug, Clone)]
pub enum LoopCommand {
    Command(DashboardCommand),
    Shutdown,
}

/// Receives every snapshot the loop produces.
pub trait SceneSink: Send + 'static {
    fn publish(&self, snapshot: &DashboardSnapshot);
}

/// Latest-snapshot slot shared with the host.
pub type SharedSnapshot = Arc<Mutex<Option<DashboardSnapshot>>>;

#[derive(Debug, thiserror::Error)]
pub enum LoopError {
    #[error("failed to spawn scene loop thread: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("invalid dashboard config: {0}")]
    Config(#[from] ConfigError),
    #[error("scene loop is not running")]
    Disconnected,
}

/// Handle to a running scene loop.
pub struct SceneLoop {
    command_tx: mpsc::Sender<LoopCommand>,
    handle: Option<JoinHandle<()>>,
}

impl SceneLoop {
    pub fn send(&self, command: DashboardCommand) -> Result<(), LoopError> {
        self.command_tx
            .send(LoopCommand::Command(command))
            .map_err(|_| LoopError::Disconnected)
    }

    /// Stop the loop and wait for the thread to exit.
    pub fn shutdown(mut self) {
        self.stop_and_join();
    }

    fn stop_and_join(&mut self) {
        let _ = self.command_tx.send(LoopCommand::Shutdown);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::error!(target: "spectre::loop", "scene_loop.panicked");
            }
        }
    }
}

impl Drop for SceneLoop {
    fn drop(&mut self) {
        self.stop_and_join();
    }
}

/// Spawns the scene loop in a new thread. The config is checked first so
/// an invalid one never starts a thread.
pub fn spawn_scene_loop<S: SceneSink>(
    config: DashboardConfig,
    data: Dataset,
    sink: S,
    latest_snapshot: SharedSnapshot,
) -> Result<SceneLoop, LoopError> {
    config.check()?;
    let (command_tx, command_rx) = mpsc::channel::<LoopCommand>();

    let handle = std::thread::Builder::new()
        .name("spectre-scene-loop".into())
        .spawn(move || {
            match DashboardEngine::new(config, data) {
                Ok(engine) => run_scene_loop(engine, command_rx, &sink, &latest_snapshot),
                Err(err) => {
                    tracing::error!(target: "spectre::loop", error = %err, "scene_loop.config_invalid")
                }
            }
        })?;

    Ok(SceneLoop {
        command_tx,
        handle: Some(handle),
    })
}

/// Runs until Shutdown or channel disconnect.
fn run_scene_loop(
    mut engine: DashboardEngine,
    command_rx: mpsc::Receiver<LoopCommand>,
    sink: &dyn SceneSink,
    latest_snapshot: &Mutex<Option<DashboardSnapshot>>,
) {
    let tick_duration = engine.clock().period();
    let mut next_tick_time = Instant::now();
    tracing::info!(
        target: "spectre::loop",
        period_ms = tick_duration.as_millis() as u64,
        "scene_loop.started"
    );

    'run: loop {
        loop {
            match command_rx.try_recv() {
                Ok(LoopCommand::Command(command)) => engine.queue_command(command),
                Ok(LoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => break 'run,
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        let snapshot = engine.tick();
        sink.publish(&snapshot);
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind; skip ahead instead of bursting frames.
            next_tick_time = now;
        }
    }

    engine.stop();
    tracing::info!(target: "spectre::loop", tick = engine.time().tick, "scene_loop.stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use spectre_core::types::AgentId;
    use std::time::Duration;

    struct ChannelSink(Mutex<mpsc::Sender<DashboardSnapshot>>);

    impl SceneSink for ChannelSink {
        fn publish(&self, snapshot: &DashboardSnapshot) {
            if let Ok(tx) = self.0.lock() {
                let _ = tx.send(snapshot.clone());
            }
        }
    }

    fn fast_config() -> DashboardConfig {
        DashboardConfig {
            tick_period_ms: 5,
            started_at_unix: Some(0),
            ..DashboardConfig::default()
        }
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<LoopCommand>();
        tx.send(LoopCommand::Command(DashboardCommand::ClearAgent))
            .unwrap();
        tx.send(LoopCommand::Shutdown).unwrap();

        let commands: Vec<_> = rx.try_iter().collect();
        assert_eq!(commands.len(), 2);
        assert!(matches!(
            commands[0],
            LoopCommand::Command(DashboardCommand::ClearAgent)
        ));
        assert!(matches!(commands[1], LoopCommand::Shutdown));
    }

    #[test]
    fn test_loop_publishes_and_applies_commands() {
        let (tx, rx) = mpsc::channel();
        let latest: SharedSnapshot = Arc::new(Mutex::new(None));
        let scene = spawn_scene_loop(
            fast_config(),
            Dataset::builtin().unwrap(),
            ChannelSink(Mutex::new(tx)),
            latest.clone(),
        )
        .unwrap();

        let first = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert!(first.time.tick >= 1);

        scene
            .send(DashboardCommand::SelectAgent {
                agent_id: AgentId::new("007"),
            })
            .unwrap();

        let deadline = Instant::now() + Duration::from_secs(2);
        let mut selected = false;
        while Instant::now() < deadline {
            let snap = rx.recv_timeout(Duration::from_secs(2)).unwrap();
            if snap.selection.agent_id.as_ref().map(|a| a.as_str()) == Some("007") {
                selected = true;
                break;
            }
        }
        assert!(selected, "selection never reached a published snapshot");

        scene.shutdown();
        assert!(latest.lock().unwrap().is_some());
    }

    #[test]
    fn test_send_after_thread_exit_is_disconnected() {
        let latest: SharedSnapshot = Arc::new(Mutex::new(None));
        let (tx, _rx) = mpsc::channel();
        let mut scene = spawn_scene_loop(
            fast_config(),
            Dataset::builtin().unwrap(),
            ChannelSink(Mutex::new(tx)),
            latest,
        )
        .unwrap();
        scene.stop_and_join();

        assert!(matches!(
            scene.send(DashboardCommand::ClearMission),
            Err(LoopError::Disconnected)
        ));
    }

    #[test]
    fn test_spawn_rejects_inverted_zoom_range() {
        let mut config = fast_config();
        config.viewport.min_zoom = 4.0;
        config.viewport.max_zoom = 2.0;
        let (tx, _rx) = mpsc::channel();
        let result = spawn_scene_loop(
            config,
            Dataset::builtin().unwrap(),
            ChannelSink(Mutex::new(tx)),
            Arc::new(Mutex::new(None)),
        );
        assert!(matches!(result, Err(LoopError::Config(ConfigError::Invalid(_)))));
    }
}
