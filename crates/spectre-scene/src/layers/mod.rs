//! Scene derivation: fixture data + tick + selection → z-ordered map layers.
//!
//! Every builder is a pure function of a [`SceneContext`]. Nothing here
//! mutates coordinator state, so the scene at a given tick is reproducible.

pub mod agents;
pub mod base;
pub mod hq;
pub mod mission_zone;
pub mod routes;
pub mod satellites;
pub mod threats;
pub mod zones;

use spectre_core::entities::{Dataset, Mission};
use spectre_core::enums::LayerKind;
use spectre_core::primitives::{Element, Layer};

use crate::hover::HoverState;
use crate::selection::SelectionState;

/// Read-only inputs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct SceneContext<'a> {
    pub data: &'a Dataset,
    pub tick: u64,
    pub selection: &'a SelectionState,
    pub hover: &'a HoverState,
}

impl<'a> SceneContext<'a> {
    pub fn new(
        data: &'a Dataset,
        tick: u64,
        selection: &'a SelectionState,
        hover: &'a HoverState,
    ) -> Self {
        Self {
            data,
            tick,
            selection,
            hover,
        }
    }

    /// Tick as a float, the `t` of every animation formula.
    pub fn t(&self) -> f64 {
        self.tick as f64
    }

    pub fn selected_mission(&self) -> Option<&'a Mission> {
        self.selection
            .mission()
            .and_then(|id| self.data.mission(id))
    }

    /// Whether a mission zone is drawn this frame.
    pub fn zone_active(&self) -> bool {
        self.selected_mission().is_some()
    }
}

/// Build every map layer, back to front.
pub fn build_layers(ctx: &SceneContext) -> Vec<Layer> {
    let zone = ctx
        .selected_mission()
        .map(|mission| mission_zone::build(ctx, mission))
        .unwrap_or_default();
    let agents = agents::build(ctx);
    let mut labels = agents.labels;
    labels.extend(zone.labels);

    vec![
        layer(LayerKind::BaseMap, vec![base::boundaries()]),
        layer(LayerKind::Graticule, vec![base::graticule()]),
        layer(LayerKind::MissionZone, zone.outline),
        layer(LayerKind::DataStreams, routes::data_streams(ctx)),
        layer(LayerKind::AgentArcs, routes::agent_arcs(ctx)),
        layer(LayerKind::SurveillanceZones, zones::surveillance_zones(ctx)),
        layer(LayerKind::IntelConnectors, zone.connectors),
        layer(LayerKind::Threats, threats::threat_markers(ctx)),
        layer(LayerKind::Satellites, satellites::satellite_tracks(ctx)),
        layer(LayerKind::Headquarters, vec![hq::headquarters(ctx)]),
        layer(LayerKind::Agents, agents.markers),
        layer(LayerKind::IntelMarkers, zone.markers),
        layer(LayerKind::Labels, labels),
    ]
}

fn layer(kind: LayerKind, elements: Vec<Element>) -> Layer {
    Layer { kind, elements }
}
