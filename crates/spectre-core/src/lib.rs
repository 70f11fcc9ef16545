//! Core types and definitions for the SPECTRE command dashboard.
//!
//! This crate defines the vocabulary shared across all other crates:
//! fixture entities, commands, snapshot views, drawing primitives and
//! constants. It has no dependency on Tauri or any runtime framework.

pub mod commands;
pub mod constants;
pub mod entities;
pub mod enums;
pub mod fixtures;
pub mod primitives;
pub mod state;
pub mod types;
