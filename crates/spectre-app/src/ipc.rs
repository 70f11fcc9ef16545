//! Tauri IPC command handlers.
//!
//! These `#[tauri::command]` functions are invoked by the frontend via `invoke()`.
//! They bridge frontend requests to the scene loop thread.

use tauri::{AppHandle, State};

use spectre_core::commands::DashboardCommand;
use spectre_core::entities::Dataset;
use spectre_core::state::DashboardSnapshot;
use spectre_scene::scene_loop;

use crate::events::TauriSink;
use crate::state::AppState;

/// Start the dashboard. Spawns the scene loop thread if not already running.
///
/// Frontend: `invoke("start_dashboard")`
#[tauri::command]
pub fn start_dashboard(app_handle: AppHandle, state: State<'_, AppState>) -> Result<(), String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;

    if *running {
        return Err("Dashboard already running".into());
    }

    let data = Dataset::builtin().map_err(|e| e.to_string())?;
    let scene = scene_loop::spawn_scene_loop(
        state.config.clone(),
        data,
        TauriSink::new(app_handle),
        state.latest_snapshot.clone(),
    )
    .map_err(|e| e.to_string())?;

    let mut scene_lock = state.scene.lock().map_err(|e| e.to_string())?;
    *scene_lock = Some(scene);
    *running = true;

    Ok(())
}

/// Send an operator command to the dashboard.
///
/// Frontend: `invoke("send_command", { command })`
#[tauri::command]
pub fn send_command(command: DashboardCommand, state: State<'_, AppState>) -> Result<(), String> {
    let scene_lock = state.scene.lock().map_err(|e| e.to_string())?;

    match scene_lock.as_ref() {
        Some(scene) => scene
            .send(command)
            .map_err(|e| format!("Failed to send command: {}", e)),
        None => Err("Dashboard not started".into()),
    }
}

/// Get the latest snapshot synchronously (for polling / initial state).
///
/// Frontend: `invoke("get_snapshot")`
#[tauri::command]
pub fn get_snapshot(state: State<'_, AppState>) -> Result<Option<DashboardSnapshot>, String> {
    let lock = state.latest_snapshot.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}

/// Stop the scene loop and wait for it to exit. The last snapshot stays
/// available to `get_snapshot`.
///
/// Frontend: `invoke("stop_dashboard")`
#[tauri::command]
pub fn stop_dashboard(state: State<'_, AppState>) -> Result<(), String> {
    if state.shutdown()? {
        Ok(())
    } else {
        Err("Dashboard not started".into())
    }
}
