// Prevents additional console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use tauri::{Manager, WindowEvent};
use tracing_subscriber::EnvFilter;

use spectre_app::ipc;
use spectre_app::state::AppState;
use spectre_scene::config::load_dashboard_config_from_env;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let (config, _source) = load_dashboard_config_from_env();

    tauri::Builder::default()
        .manage(AppState::new(config))
        .invoke_handler(tauri::generate_handler![
            ipc::start_dashboard,
            ipc::send_command,
            ipc::get_snapshot,
            ipc::stop_dashboard,
        ])
        .on_window_event(|window, event| {
            if let WindowEvent::Destroyed = event {
                let state = window.state::<AppState>();
                if let Err(err) = state.shutdown() {
                    tracing::warn!(target: "spectre::app", error = %err, "teardown.failed");
                }
            }
        })
        .run(tauri::generate_context!())
        .expect("error while running SPECTRE");
}
