//! Operator scenarios driven through the public engine API.

use spectre_scene::config::DashboardConfig;
use spectre_scene::core::commands::DashboardCommand;
use spectre_scene::core::constants::DIMMED_LINK_OPACITY;
use spectre_scene::core::entities::Dataset;
use spectre_scene::core::enums::{LayerKind, Tone};
use spectre_scene::core::primitives::{MapMarker, Shape};
use spectre_scene::core::state::DashboardSnapshot;
use spectre_scene::core::types::{AgentId, MissionId};
use spectre_scene::panels::INTEL_LIST_HEADING;
use spectre_scene::DashboardEngine;

fn engine() -> DashboardEngine {
    let config = DashboardConfig {
        started_at_unix: Some(1_792_420_327),
        ..DashboardConfig::builtin().unwrap()
    };
    DashboardEngine::new(config, Dataset::builtin().unwrap()).unwrap()
}

fn select_mission(id: &str) -> DashboardCommand {
    DashboardCommand::SelectMission {
        mission_id: MissionId::new(id),
    }
}

fn marker<'a>(snap: &'a DashboardSnapshot, kind: LayerKind, key: &str) -> &'a MapMarker {
    snap.layer(kind)
        .unwrap()
        .markers()
        .find(|m| m.key == key)
        .unwrap_or_else(|| panic!("no marker {key} in {kind:?}"))
}

fn has_circle(marker: &MapMarker, radius: f64) -> bool {
    marker
        .glyphs
        .iter()
        .any(|g| matches!(g.shape, Shape::Circle { r, .. } if r == radius))
}

// --- Operation GOLDEN VIPER ---

#[test]
fn golden_viper_zone_overlay() {
    let mut engine = engine();
    engine.queue_command(select_mission("M-001"));
    let snap = engine.tick();

    // Zone outline: closed polygon, glow and reticle.
    let zone = snap.layer(LayerKind::MissionZone).unwrap();
    let outline = zone.paths().find(|p| p.key == "zone-M-001").unwrap();
    assert_eq!(outline.points.len(), 9);
    assert_eq!(outline.stroke.tone, Tone::Red);
    assert!(zone.paths().any(|p| p.key == "zone-glow-M-001"));
    assert!(zone.markers().any(|m| m.key == "reticle-M-001"));

    // One connector per intel marker.
    let connectors = snap.layer(LayerKind::IntelConnectors).unwrap();
    assert_eq!(connectors.paths().count(), 4);

    // Assigned agent wears the mission ring; others do not.
    assert!(has_circle(marker(&snap, LayerKind::Agents, "agent-007"), 12.0));
    assert!(!has_circle(marker(&snap, LayerKind::Agents, "agent-003"), 12.0));

    // Four intel markers, one of each shape, then eight vertex markers.
    let zone_markers: Vec<_> = snap.layer(LayerKind::IntelMarkers).unwrap().markers().collect();
    let intel: Vec<_> = zone_markers
        .iter()
        .filter(|m| m.key.starts_with("intel-"))
        .collect();
    let vertices = zone_markers
        .iter()
        .filter(|m| m.key.starts_with("vertex-"))
        .count();
    assert_eq!(intel.len(), 4);
    assert_eq!(vertices, 8);

    let shapes: Vec<_> = intel.iter().map(|m| &m.glyphs[1].shape).collect();
    assert!(matches!(shapes[0], Shape::Rect { rotation, .. } if *rotation == 45.0));
    assert!(matches!(shapes[1], Shape::Circle { .. }));
    assert!(matches!(shapes[2], Shape::Rect { rotation, .. } if *rotation == 0.0));
    assert!(matches!(shapes[3], Shape::Polygon { .. }));

    // Unrelated links dim while a zone is up.
    let arcs = snap.layer(LayerKind::AgentArcs).unwrap();
    assert!(arcs.paths().all(|p| p.stroke.opacity == DIMMED_LINK_OPACITY));
    let streams = snap.layer(LayerKind::DataStreams).unwrap();
    assert!(streams.paths().all(|p| p.stroke.opacity == DIMMED_LINK_OPACITY));
}

#[test]
fn golden_viper_panels() {
    let mut engine = engine();
    engine.queue_command(select_mission("M-001"));
    let snap = engine.tick();

    assert_eq!(snap.chrome.zone_label.as_deref(), Some("ZONE: OP-GOLDEN VIPER"));
    let card = snap.chrome.zone_card.as_ref().unwrap();
    assert_eq!(card.subtitle, "TOP SECRET // Western Europe");
    assert_eq!(card.agents, "AGENTS: 007");
    assert_eq!(card.deadline, "DL: 2026-03-01");
    assert_eq!(card.markers.len(), 4);

    assert!(snap.briefing.zone_active);
    let row = snap
        .briefing
        .rows
        .iter()
        .find(|r| r.mission_id == MissionId::new("M-001"))
        .unwrap();
    assert!(row.selected);
    assert_eq!(row.agents_label, "1 AGENT");
    assert_eq!(row.priority_label, "P:CRITICAL");
    let list = row.intel.as_ref().unwrap();
    assert_eq!(list.heading, INTEL_LIST_HEADING);
    assert_eq!(list.entries.len(), 4);
    assert_eq!(list.entries[1].label, "NIGHTSHADE");

    let expanded = snap.briefing.rows.iter().filter(|r| r.intel.is_some()).count();
    assert_eq!(expanded, 1);
}

#[test]
fn golden_viper_deselect_removes_overlay() {
    let mut engine = engine();
    engine.queue_command(select_mission("M-001"));
    engine.tick();

    engine.queue_command(select_mission("M-001"));
    let snap = engine.tick();
    assert_eq!(snap.selection.mission_id, None);
    for kind in [
        LayerKind::MissionZone,
        LayerKind::IntelConnectors,
        LayerKind::IntelMarkers,
    ] {
        assert!(snap.layer(kind).unwrap().elements.is_empty(), "{kind:?}");
    }
    assert!(!has_circle(marker(&snap, LayerKind::Agents, "agent-007"), 12.0));
    assert!(snap.briefing.rows.iter().all(|r| r.intel.is_none()));
    assert!(snap.chrome.zone_card.is_none());
}

// --- Agent focus during an operation ---

#[test]
fn agent_selected_inside_zone_keeps_bright_arc() {
    let mut engine = engine();
    engine.queue_commands([
        select_mission("M-001"),
        DashboardCommand::SelectAgent {
            agent_id: AgentId::new("007"),
        },
    ]);
    let snap = engine.tick();

    let arcs = snap.layer(LayerKind::AgentArcs).unwrap();
    let bright = arcs.paths().find(|p| p.key == "arc-007").unwrap();
    assert_eq!(bright.stroke.opacity, 0.6);
    assert_eq!(bright.stroke.width, 1.2);
    assert!(arcs
        .paths()
        .filter(|p| p.key != "arc-007")
        .all(|p| p.stroke.opacity == DIMMED_LINK_OPACITY));

    let nightshade = marker(&snap, LayerKind::Agents, "agent-007");
    assert!(has_circle(nightshade, 12.0), "mission ring");
    assert!(has_circle(nightshade, 10.0), "selection ring");
    assert!(has_circle(nightshade, 3.5), "selected dot");

    let dossier = snap.dossier.unwrap();
    assert_eq!(dossier.coordinates, "48.8566°N, 2.3522°E");
    assert_eq!(dossier.signal, "STRONG");
}
