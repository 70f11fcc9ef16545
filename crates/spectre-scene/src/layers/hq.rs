//! Home base marker.

use glam::DVec2;

use spectre_core::constants::{HQ, HQ_INNER_SPIN, HQ_LABEL, HQ_OUTER_SPIN};
use spectre_core::enums::Tone;
use spectre_core::primitives::{Element, Glyph, MapMarker, Stroke};

use super::SceneContext;

pub fn headquarters(ctx: &SceneContext) -> Element {
    let t = ctx.t();
    let mut marker = MapMarker::new("hq", HQ);
    marker.push(
        Glyph::centered_square(8.0, 45.0 + t * HQ_OUTER_SPIN)
            .stroked(Stroke::new(Tone::Gold, 0.8, 0.8)),
    );
    marker.push(
        Glyph::centered_square(5.0, t * HQ_INNER_SPIN).stroked(Stroke::new(Tone::Gold, 0.5, 0.5)),
    );
    marker.push(Glyph::circle(1.5).filled(Tone::Gold, 0.9));
    marker.push(
        Glyph::text(DVec2::new(0.0, -8.0), HQ_LABEL, 4.0)
            .bold()
            .centered()
            .filled(Tone::Gold, 0.8),
    );
    Element::Marker(marker)
}
