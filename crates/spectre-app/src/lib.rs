//! SPECTRE Tauri application.
//!
//! Wires the scene crate to the webview: IPC commands in, snapshot
//! events out.

pub mod events;
pub mod ipc;
pub mod state;

pub use spectre_core as core;
