//! Proximity radar widget.

use spectre_core::constants::{RADAR_BLIPS, RADAR_RANGE_LABEL, RADAR_RINGS, RADAR_SWEEP_PERIOD_MS};
use spectre_core::state::{BlipView, RadarView};

use crate::clock::triangle;

/// Sweep angle in degrees at `elapsed_ms`, one revolution per sweep period.
pub fn sweep_angle(elapsed_ms: u64) -> f64 {
    (elapsed_ms % RADAR_SWEEP_PERIOD_MS) as f64 / RADAR_SWEEP_PERIOD_MS as f64 * 360.0
}

pub fn radar(elapsed_ms: u64) -> RadarView {
    RadarView {
        sweep_angle: sweep_angle(elapsed_ms),
        rings: RADAR_RINGS.to_vec(),
        blips: RADAR_BLIPS
            .iter()
            .map(|blip| BlipView {
                x: blip.x,
                y: blip.y,
                tone: blip.tone,
                opacity: triangle(elapsed_ms, blip.period_ms, blip.min_opacity, blip.max_opacity),
            })
            .collect(),
        range_label: format!("RANGE: {RADAR_RANGE_LABEL}"),
        contacts: RADAR_BLIPS.len(),
    }
}
