//! Threat event markers. Events without coordinates are not drawn.

use glam::DVec2;

use spectre_core::primitives::{Element, Glyph, MapMarker, Stroke};

use super::SceneContext;
use crate::clock::oscillate;

pub fn threat_markers(ctx: &SceneContext) -> Vec<Element> {
    let pulse = oscillate(2.0, 1.0, ctx.t(), 0.08, 0.0);

    ctx.data
        .threats
        .iter()
        .filter_map(|threat| {
            let coord = threat.coordinates?;
            let tone = threat.severity.map_tone();
            let mut marker = MapMarker::new(format!("threat-{}", threat.id), coord);
            marker.push(Glyph::circle(pulse + 3.0).filled(tone, 0.06));
            marker.push(Glyph::circle(pulse).stroked(Stroke::new(tone, 0.4, 0.3)));
            marker.push(Glyph::circle(1.2).filled(tone, 0.7));
            marker.push(
                Glyph::segment(DVec2::new(-3.0, 0.0), DVec2::new(3.0, 0.0))
                    .stroked(Stroke::new(tone, 0.2, 0.4)),
            );
            marker.push(
                Glyph::segment(DVec2::new(0.0, -3.0), DVec2::new(0.0, 3.0))
                    .stroked(Stroke::new(tone, 0.2, 0.4)),
            );
            Some(Element::Marker(marker))
        })
        .collect()
}
