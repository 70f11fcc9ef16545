//! Application state shared across Tauri commands and the scene loop thread.

use std::sync::{Arc, Mutex};

use spectre_scene::config::DashboardConfig;
use spectre_scene::scene_loop::{SceneLoop, SharedSnapshot};

/// Shared application state, stored as Tauri managed state.
///
/// Tauri requires managed state to be Send + Sync:
/// - the scene loop handle sits behind a `Mutex` (its `Sender` is not Sync)
/// - the latest snapshot is an `Arc<Mutex<..>>` shared with the loop thread
pub struct AppState {
    /// Config the loop is started with.
    pub config: DashboardConfig,
    /// Running scene loop. `None` before `start_dashboard` and after `stop_dashboard`.
    pub scene: Mutex<Option<SceneLoop>>,
    /// Latest snapshot for synchronous `get_snapshot` queries.
    pub latest_snapshot: SharedSnapshot,
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            scene: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }

    /// Stop the scene loop if it is running. Returns whether one was stopped.
    pub fn shutdown(&self) -> Result<bool, String> {
        let mut running = self.running.lock().map_err(|e| e.to_string())?;
        let scene = self.scene.lock().map_err(|e| e.to_string())?.take();
        *running = false;
        match scene {
            Some(scene) => {
                scene.shutdown();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::default();
        assert!(state.scene.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
        assert!(!*state.running.lock().unwrap());
    }

    #[test]
    fn test_shutdown_without_loop_is_noop() {
        let state = AppState::default();
        assert_eq!(state.shutdown(), Ok(false));
        assert!(!*state.running.lock().unwrap());
    }
}
