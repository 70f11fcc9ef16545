//! Operational zone overlay for the selected mission.
//!
//! The polygon outline, glow and center reticle sit low in the stack; intel
//! connectors, intel markers, vertex markers and the hover card are split
//! into their own layers so agents and threats draw between them.

use glam::DVec2;

use spectre_core::entities::{IntelMarker, Mission};
use spectre_core::enums::{MarkerShape, Tone};
use spectre_core::primitives::{
    Dash, Element, Fill, GeoPath, Glyph, MapMarker, PointerTarget, Stroke,
};

use super::SceneContext;
use crate::clock::oscillate;

/// Reticle tick mark positions along each crosshair arm.
const RETICLE_TICKS: [f64; 4] = [-14.0, -10.0, 10.0, 14.0];

/// Mission zone elements, grouped by destination layer.
#[derive(Debug, Clone, Default)]
pub struct MissionZoneScene {
    /// Polygon, glow and reticle.
    pub outline: Vec<Element>,
    /// Dashed lines from the zone center to each intel marker.
    pub connectors: Vec<Element>,
    /// Intel markers followed by vertex markers.
    pub markers: Vec<Element>,
    /// Hover card of the hovered intel marker.
    pub labels: Vec<Element>,
}

pub fn build(ctx: &SceneContext, mission: &Mission) -> MissionZoneScene {
    let tone = mission.priority.zone_tone();
    let t = ctx.t();

    let mut outline = vec![
        Element::Path(GeoPath {
            key: format!("zone-{}", mission.id),
            points: mission.zone_polygon.clone(),
            stroke: Stroke::new(tone, 1.2, oscillate(0.5, 0.2, t, 0.04, 0.0))
                .dashed(Dash::new(4.0, 2.0, t * 0.5)),
            fill: Some(Fill::new(tone, oscillate(0.03, 0.015, t, 0.03, 0.0))),
        }),
        Element::Path(GeoPath {
            key: format!("zone-glow-{}", mission.id),
            points: mission.zone_polygon.clone(),
            stroke: Stroke::new(tone, 2.5, oscillate(0.08, 0.04, t, 0.025, 0.0)),
            fill: None,
        }),
    ];
    outline.push(Element::Marker(reticle(mission, tone, t)));

    let connectors = mission
        .intel_markers
        .iter()
        .enumerate()
        .map(|(i, intel)| {
            Element::Path(GeoPath {
                key: format!("intel-line-{i}"),
                points: vec![mission.zone_center, intel.coords],
                stroke: Stroke::new(intel.kind.tone(), 0.3, 0.15)
                    .dashed(Dash::new(1.0, 3.0, t * 0.2)),
                fill: None,
            })
        })
        .collect();

    let mut markers: Vec<Element> = mission
        .intel_markers
        .iter()
        .enumerate()
        .map(|(i, intel)| Element::Marker(intel_marker(mission, intel, i, t)))
        .collect();
    markers.extend(
        mission
            .zone_vertices()
            .iter()
            .enumerate()
            .map(|(i, &coord)| {
                let mut marker = MapMarker::new(format!("vertex-{i}"), coord);
                marker.push(Glyph::circle(1.5).filled(tone, oscillate(0.4, 0.2, t, 0.06, i as f64)));
                marker.push(Glyph::circle(3.0).stroked(Stroke::new(tone, 0.3, 0.2)));
                Element::Marker(marker)
            }),
    );

    let labels = mission
        .intel_markers
        .iter()
        .enumerate()
        .filter(|(i, _)| ctx.hover.is_intel_hovered(*i))
        .map(|(i, intel)| Element::Marker(intel_card(intel, i)))
        .collect();

    MissionZoneScene {
        outline,
        connectors,
        markers,
        labels,
    }
}

/// Center reticle: counter-rotating dashed rings, crosshairs with tick marks,
/// a pulsing dot and the operation labels.
fn reticle(mission: &Mission, tone: Tone, t: f64) -> MapMarker {
    let mut marker = MapMarker::new(format!("reticle-{}", mission.id), mission.zone_center);
    marker.push(
        Glyph::circle(16.0).stroked(Stroke::new(tone, 0.4, 0.2).dashed(Dash::new(3.0, 6.0, t * 0.4))),
    );
    marker.push(
        Glyph::circle(10.0)
            .stroked(Stroke::new(tone, 0.3, 0.15).dashed(Dash::new(2.0, 4.0, -t * 0.3))),
    );

    let hair = Stroke::new(tone, 0.4, 0.3);
    for (from, to) in [
        (DVec2::new(-20.0, 0.0), DVec2::new(-6.0, 0.0)),
        (DVec2::new(6.0, 0.0), DVec2::new(20.0, 0.0)),
        (DVec2::new(0.0, -20.0), DVec2::new(0.0, -6.0)),
        (DVec2::new(0.0, 6.0), DVec2::new(0.0, 20.0)),
    ] {
        marker.push(Glyph::segment(from, to).stroked(hair));
    }

    let tick_mark = Stroke::new(tone, 0.3, 0.25);
    for d in RETICLE_TICKS {
        marker.push(Glyph::segment(DVec2::new(d, -1.0), DVec2::new(d, 1.0)).stroked(tick_mark));
    }
    for d in RETICLE_TICKS {
        marker.push(Glyph::segment(DVec2::new(-1.0, d), DVec2::new(1.0, d)).stroked(tick_mark));
    }

    marker.push(Glyph::circle(oscillate(2.0, 0.5, t, 0.08, 0.0)).filled(tone, 0.3));
    marker.push(
        Glyph::text(DVec2::new(0.0, -24.0), mission.op_name(), 4.0)
            .bold()
            .centered()
            .filled(tone, 0.7),
    );
    marker.push(
        Glyph::text(
            DVec2::new(0.0, -19.0),
            format!(
                "{} // {}",
                mission.classification.label(),
                mission.priority.label()
            ),
            2.5,
        )
        .centered()
        .filled(tone, 0.4),
    );
    marker
}

/// Glyph for an intel marker shape, filled at `opacity`.
pub fn shape_glyph(shape: MarkerShape, tone: Tone, opacity: f64) -> Glyph {
    let glyph = match shape {
        MarkerShape::Circle => Glyph::circle(2.5),
        MarkerShape::Diamond => Glyph::centered_square(4.0, 45.0),
        MarkerShape::Square => Glyph::centered_square(4.0, 0.0),
        MarkerShape::Triangle => Glyph::polygon(vec![
            DVec2::new(0.0, -2.5),
            DVec2::new(2.2, 2.0),
            DVec2::new(-2.2, 2.0),
        ]),
    };
    glyph.filled(tone, opacity)
}

fn intel_marker(mission: &Mission, intel: &IntelMarker, index: usize, t: f64) -> MapMarker {
    let tone = intel.kind.tone();
    let phase = index as f64;
    let pulse = oscillate(0.0, 0.5, t, 0.06, phase * 1.5);

    let mut marker = MapMarker::new(format!("intel-{index}"), intel.coords).with_target(
        PointerTarget::Intel {
            mission_id: mission.id.clone(),
            index,
        },
    );
    marker.push(Glyph::circle(5.0 + pulse).filled(tone, 0.06));
    marker.push(shape_glyph(intel.kind.shape(), tone, 0.8));
    marker.push(Glyph::circle(0.8).filled(Tone::White, 0.5));
    marker.push(
        Glyph::circle(4.0).stroked(
            Stroke::new(tone, 0.3, 0.3).dashed(Dash::new(1.5, 3.0, t * 0.2 + phase * 5.0)),
        ),
    );
    marker
}

fn intel_card(intel: &IntelMarker, index: usize) -> MapMarker {
    let tone = intel.kind.tone();
    let mut card = MapMarker::new(format!("intel-card-{index}"), intel.coords);
    card.push(
        Glyph::rect(DVec2::new(6.0, -10.0), DVec2::new(50.0, 16.0))
            .rounded(1.0)
            .filled(Tone::Panel, 0.95)
            .stroked(Stroke::new(tone, 0.4, 0.95)),
    );
    card.push(
        Glyph::text(DVec2::new(9.0, -3.0), intel.kind.label(), 3.0)
            .bold()
            .filled(tone, 1.0),
    );
    card.push(Glyph::text(DVec2::new(9.0, 2.0), intel.label.clone(), 2.5).filled(Tone::Gray, 1.0));
    card
}
