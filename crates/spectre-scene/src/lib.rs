//! Scene engine for the SPECTRE dashboard.
//!
//! Owns the animation clock, selection and viewport, derives z-ordered map
//! layers and panel views from the fixture dataset, and produces
//! `DashboardSnapshot`s for the frontend.

pub mod chrome;
pub mod clock;
pub mod config;
pub mod engine;
pub mod hover;
pub mod layers;
pub mod panels;
pub mod projection;
pub mod radar;
pub mod scene_loop;
pub mod selection;
pub mod stats;
pub mod terminal;
pub mod topbar;

pub use engine::DashboardEngine;
pub use spectre_core as core;

#[cfg(test)]
mod tests;
