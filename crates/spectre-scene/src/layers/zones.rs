//! Pulsing surveillance zones.

use glam::DVec2;

use spectre_core::constants::{SURVEILLANCE_ZONES, ZONE_DIM_FACTOR};
use spectre_core::primitives::{Element, Glyph, MapMarker, Stroke};

use super::SceneContext;
use crate::clock::oscillate;

/// Rendered radius of zone `index` with base radius `radius` at tick `t`.
pub fn zone_radius(radius: f64, t: f64, index: usize) -> f64 {
    oscillate(radius, 3.0, t, 0.05, index as f64)
}

pub fn surveillance_zones(ctx: &SceneContext) -> Vec<Element> {
    let t = ctx.t();
    let dim = if ctx.zone_active() { ZONE_DIM_FACTOR } else { 1.0 };

    SURVEILLANCE_ZONES
        .iter()
        .enumerate()
        .map(|(i, zone)| {
            let phase = i as f64;
            let r = zone_radius(zone.radius, t, i);
            let mut marker = MapMarker::new(format!("zone-{i}"), zone.center);
            marker.push(Glyph::circle(r + 4.0).stroked(Stroke::new(
                zone.tone,
                0.3,
                oscillate(0.15, 0.1, t, 0.06, phase) * dim,
            )));
            marker.push(
                Glyph::circle(r)
                    .filled(zone.tone, oscillate(0.04, 0.02, t, 0.04, phase * 2.0) * dim)
                    .stroked(Stroke::new(zone.tone, 0.4, 0.2 * dim)),
            );
            marker.push(
                Glyph::text(DVec2::new(0.0, -r - 3.0), zone.label, 3.5)
                    .centered()
                    .filled(zone.tone, 0.5 * dim),
            );
            Element::Marker(marker)
        })
        .collect()
}
