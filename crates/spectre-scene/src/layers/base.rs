//! Base map boundaries and the graticule.

use spectre_core::constants::{BOUNDARY_SOURCE, GRATICULE_STEP};
use spectre_core::enums::Tone;
use spectre_core::primitives::{Element, Stroke};

pub fn boundaries() -> Element {
    Element::Boundaries {
        source: BOUNDARY_SOURCE.to_string(),
        fill: Tone::Land,
        stroke: Stroke::new(Tone::Border, 0.4, 1.0),
        hover_fill: Tone::LandHover,
    }
}

pub fn graticule() -> Element {
    Element::Graticule {
        step: GRATICULE_STEP,
        stroke: Stroke::new(Tone::Gold, 0.15, 0.15),
    }
}
