//! Fixed map chrome drawn above every layer.

use spectre_core::constants::{OVERLAY_TITLE, PROJECTION_LABEL, SCAN_LINE_RATE};
use spectre_core::entities::Mission;
use spectre_core::enums::AgentStatus;
use spectre_core::state::{
    CounterView, IntelEntryView, LegendEntry, MapChrome, ViewportView, ZoneCardView,
};

use crate::layers::SceneContext;

/// Statuses with a counter badge at the top of the map.
const COUNTED_STATUSES: [AgentStatus; 3] = [
    AgentStatus::Active,
    AgentStatus::Compromised,
    AgentStatus::Extraction,
];

/// Scan line position at tick `t`, percent of map height.
pub fn scan_line_pct(t: f64) -> f64 {
    (t * SCAN_LINE_RATE) % 100.0
}

pub fn intel_entries(mission: &Mission) -> Vec<IntelEntryView> {
    mission
        .intel_markers
        .iter()
        .map(|intel| IntelEntryView {
            kind: intel.kind,
            kind_label: intel.kind.label().to_string(),
            tone: intel.kind.tone(),
            shape: intel.kind.shape(),
            label: intel.label.clone(),
        })
        .collect()
}

fn zone_card(mission: &Mission) -> ZoneCardView {
    let agents: Vec<&str> = mission.assigned_agents.iter().map(|a| a.as_str()).collect();
    ZoneCardView {
        op_name: mission.op_name(),
        tone: mission.priority.zone_tone(),
        subtitle: format!("{} // {}", mission.classification.label(), mission.region),
        markers: intel_entries(mission),
        agents: format!("AGENTS: {}", agents.join(", ")),
        deadline: format!("DL: {}", mission.deadline),
    }
}

pub fn map_chrome(ctx: &SceneContext, viewport: &ViewportView) -> MapChrome {
    let mission = ctx.selected_mission();

    MapChrome {
        title: OVERLAY_TITLE.to_string(),
        projection_label: format!("PROJ: {PROJECTION_LABEL}"),
        zoom_label: format!("ZOOM: {:.1}x", viewport.zoom),
        zone_label: mission.map(|m| format!("ZONE: {}", m.op_name())),
        scan_line_pct: scan_line_pct(ctx.t()),
        legend: AgentStatus::ALL
            .iter()
            .map(|s| LegendEntry {
                label: s.label().to_string(),
                tone: s.tone(),
            })
            .collect(),
        counters: COUNTED_STATUSES
            .iter()
            .map(|&s| CounterView {
                label: s.label().to_string(),
                count: ctx.data.count_status(s),
                tone: s.tone(),
            })
            .collect(),
        center_readout: format!("CENTER: {}", viewport.center.readout(1)),
        tooltip: ctx.hover.tooltip(),
        zone_card: mission.map(zone_card),
    }
}
