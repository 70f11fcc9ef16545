//! Snapshot emission to the webview.

use tauri::{AppHandle, Emitter};

use spectre_core::state::DashboardSnapshot;
use spectre_scene::scene_loop::SceneSink;

/// Event carrying every snapshot the scene loop produces.
pub const SNAPSHOT_EVENT: &str = "dashboard:snapshot";

pub struct TauriSink {
    app_handle: AppHandle,
}

impl TauriSink {
    pub fn new(app_handle: AppHandle) -> Self {
        Self { app_handle }
    }
}

impl SceneSink for TauriSink {
    fn publish(&self, snapshot: &DashboardSnapshot) {
        if let Err(err) = self.app_handle.emit(SNAPSHOT_EVENT, snapshot) {
            tracing::warn!(target: "spectre::app", error = %err, "snapshot.emit_failed");
        }
    }
}
