//! Fake satellite tracks with fading trails.

use glam::DVec2;

use spectre_core::constants::*;
use spectre_core::primitives::{Element, Glyph, MapMarker, Stroke};
use spectre_core::types::GeoCoord;

use super::SceneContext;

/// Position of `orbit` at tick `t`. Longitude wraps into `[-180, 180)`.
pub fn satellite_position(orbit: &SatelliteOrbit, t: f64) -> GeoCoord {
    let lng = (t * orbit.speed).rem_euclid(360.0) - 180.0;
    let lat = orbit.base_lat + (t * SATELLITE_LAT_RATE * orbit.speed).sin() * SATELLITE_LAT_SWING;
    GeoCoord::new(lng, lat)
}

pub fn satellite_tracks(ctx: &SceneContext) -> Vec<Element> {
    SATELLITE_ORBITS
        .iter()
        .map(|orbit| {
            let mut marker =
                MapMarker::new(format!("sat-{}", orbit.id), satellite_position(orbit, ctx.t()));
            marker.push(Glyph::circle(1.0).filled(orbit.tone, 0.7));
            marker.push(Glyph::circle(2.5).stroked(Stroke::new(orbit.tone, 0.3, 0.3)));

            // Trail dots trail behind the direction of travel.
            let behind = -orbit.speed.signum();
            for k in 1..=SATELLITE_TRAIL_DOTS {
                let k = f64::from(k);
                marker.push(
                    Glyph::circle_at(DVec2::new(behind * k * 2.0, 0.0), 0.6)
                        .filled(orbit.tone, 0.4 - k * 0.08),
                );
            }
            Element::Marker(marker)
        })
        .collect()
}
