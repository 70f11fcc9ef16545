//! Tests for the dashboard engine, scene derivation, panels and timing.

use spectre_core::commands::DashboardCommand;
use spectre_core::constants::SATELLITE_ORBITS;
use spectre_core::entities::Dataset;
use spectre_core::enums::*;
use spectre_core::primitives::MapMarker;
use spectre_core::state::{DashboardSnapshot, TerminalPhase};
use spectre_core::types::{AgentId, GeoCoord, MissionId};

use crate::clock::AnimationClock;
use crate::config::{ConfigError, DashboardConfig};
use crate::engine::DashboardEngine;
use crate::layers::agents::dot_radius;
use crate::layers::satellites::satellite_position;
use crate::terminal::{PlayerTiming, ScriptedLogPlayer};

fn config() -> DashboardConfig {
    DashboardConfig {
        started_at_unix: Some(1_792_420_327),
        ..DashboardConfig::builtin().unwrap()
    }
}

fn engine() -> DashboardEngine {
    DashboardEngine::new(config(), Dataset::builtin().unwrap()).unwrap()
}

fn select_agent(id: &str) -> DashboardCommand {
    DashboardCommand::SelectAgent {
        agent_id: AgentId::new(id),
    }
}

fn select_mission(id: &str) -> DashboardCommand {
    DashboardCommand::SelectMission {
        mission_id: MissionId::new(id),
    }
}

fn markers(snap: &DashboardSnapshot, kind: LayerKind) -> Vec<&MapMarker> {
    snap.layer(kind).unwrap().markers().collect()
}

fn marker<'a>(snap: &'a DashboardSnapshot, kind: LayerKind, key: &str) -> &'a MapMarker {
    snap.layer(kind)
        .unwrap()
        .markers()
        .find(|m| m.key == key)
        .unwrap_or_else(|| panic!("no marker {key} in {kind:?}"))
}

// ---- Selection ----

#[test]
fn test_select_agent_toggles() {
    let mut engine = engine();

    engine.queue_command(select_agent("007"));
    let snap = engine.tick();
    assert_eq!(snap.selection.agent_id, Some(AgentId::new("007")));
    assert_eq!(snap.dossier.as_ref().unwrap().codename, "NIGHTSHADE");

    engine.queue_command(select_agent("007"));
    let snap = engine.tick();
    assert_eq!(snap.selection.agent_id, None);
    assert!(snap.dossier.is_none());
}

#[test]
fn test_select_different_agent_replaces() {
    let mut engine = engine();
    engine.queue_commands([select_agent("007"), select_agent("003")]);
    let snap = engine.tick();
    assert_eq!(snap.selection.agent_id, Some(AgentId::new("003")));

    let selected: Vec<_> = snap.roster.rows.iter().filter(|r| r.selected).collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].codename, "PHANTOM");
}

#[test]
fn test_agent_and_mission_selection_independent() {
    let mut engine = engine();
    engine.queue_commands([select_agent("009"), select_mission("M-002")]);
    let snap = engine.tick();
    assert_eq!(snap.selection.agent_id, Some(AgentId::new("009")));
    assert_eq!(snap.selection.mission_id, Some(MissionId::new("M-002")));

    engine.queue_command(DashboardCommand::ClearMission);
    let snap = engine.tick();
    assert_eq!(snap.selection.agent_id, Some(AgentId::new("009")));
    assert_eq!(snap.selection.mission_id, None);

    engine.queue_command(DashboardCommand::ClearAgent);
    let snap = engine.tick();
    assert_eq!(snap.selection.agent_id, None);
}

#[test]
fn test_unknown_ids_ignored() {
    let mut engine = engine();
    engine.queue_commands([select_agent("007"), select_agent("999"), select_mission("M-404")]);
    let snap = engine.tick();
    assert_eq!(snap.selection.agent_id, Some(AgentId::new("007")));
    assert_eq!(snap.selection.mission_id, None);
}

#[test]
fn test_mission_change_clears_intel_hover() {
    let mut engine = engine();
    engine.queue_commands([
        select_mission("M-001"),
        DashboardCommand::HoverIntel { index: Some(2) },
    ]);
    let snap = engine.tick();
    assert_eq!(snap.hover.intel_index, Some(2));
    let labels = snap.layer(LayerKind::Labels).unwrap();
    assert!(labels.markers().any(|m| m.key == "intel-card-2"));

    engine.queue_command(select_mission("M-002"));
    let snap = engine.tick();
    assert_eq!(snap.hover.intel_index, None);
}

#[test]
fn test_intel_hover_needs_selected_mission() {
    let mut engine = engine();
    engine.queue_command(DashboardCommand::HoverIntel { index: Some(0) });
    assert_eq!(engine.tick().hover.intel_index, None);

    engine.queue_commands([
        select_mission("M-001"),
        DashboardCommand::HoverIntel { index: Some(4) },
    ]);
    assert_eq!(engine.tick().hover.intel_index, None);
}

#[test]
fn test_click_map_picks_nearest_agent() {
    let mut engine = engine();
    let paris = engine.viewport().to_screen(GeoCoord::new(2.3522, 48.8566));

    engine.queue_command(DashboardCommand::ClickMap {
        x: paris.x + 1.0,
        y: paris.y,
    });
    let snap = engine.tick();
    assert_eq!(snap.selection.agent_id, Some(AgentId::new("007")));

    engine.queue_command(DashboardCommand::ClickMap {
        x: paris.x,
        y: paris.y,
    });
    assert_eq!(engine.tick().selection.agent_id, None);
}

#[test]
fn test_click_on_empty_map_keeps_selection() {
    let mut engine = engine();
    engine.queue_commands([
        select_agent("002"),
        DashboardCommand::ClickMap { x: 0.0, y: 0.0 },
    ]);
    assert_eq!(engine.tick().selection.agent_id, Some(AgentId::new("002")));
}

// ---- Hover ----

#[test]
fn test_hovered_agent_gets_label_card() {
    let mut engine = engine();
    engine.queue_command(DashboardCommand::HoverAgent {
        agent_id: Some(AgentId::new("004")),
    });
    let snap = engine.tick();
    let labels: Vec<_> = markers(&snap, LayerKind::Labels);
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].key, "agent-card-004");

    engine.queue_command(DashboardCommand::HoverAgent { agent_id: None });
    let snap = engine.tick();
    assert!(markers(&snap, LayerKind::Labels).is_empty());
}

#[test]
fn test_country_tooltip_follows_pointer() {
    let mut engine = engine();
    engine.queue_command(DashboardCommand::HoverCountry {
        name: Some("France".into()),
        x: 100.0,
        y: 50.0,
    });
    let tooltip = engine.tick().chrome.tooltip.unwrap();
    assert_eq!(tooltip.text, "France");
    assert_eq!((tooltip.x, tooltip.y), (112.0, 42.0));

    engine.queue_command(DashboardCommand::HoverCountry {
        name: None,
        x: 0.0,
        y: 0.0,
    });
    assert!(engine.tick().chrome.tooltip.is_none());
}

// ---- Viewport ----

#[test]
fn test_zoom_commands_clamp_and_label() {
    let mut engine = engine();
    engine.queue_command(DashboardCommand::ZoomBy { factor: 2.0 });
    let snap = engine.tick();
    assert_eq!(snap.viewport.zoom, 2.0);
    assert_eq!(snap.chrome.zoom_label, "ZOOM: 2.0x");

    engine.queue_command(DashboardCommand::ZoomBy { factor: 100.0 });
    assert_eq!(engine.tick().viewport.zoom, 8.0);

    engine.queue_command(DashboardCommand::MoveViewport {
        center: GeoCoord::new(0.0, 0.0),
        zoom: 0.1,
    });
    let snap = engine.tick();
    assert_eq!(snap.viewport.zoom, 1.0);
    assert_eq!(snap.chrome.center_readout, "CENTER: 0.0°N 0.0°E");
}

#[test]
fn test_pan_moves_center() {
    let mut engine = engine();
    let before = engine.viewport().center();
    engine.queue_command(DashboardCommand::PanBy { dx: -40.0, dy: 0.0 });
    let after = engine.tick().viewport.center;
    assert!(after.lng > before.lng, "dragging left reveals the east");
}

// ---- Scene layers ----

#[test]
fn test_layers_in_z_order() {
    let snap = engine().tick();
    let kinds: Vec<_> = snap.layers.iter().map(|l| l.kind).collect();
    assert_eq!(kinds, LayerKind::ALL.to_vec());
}

#[test]
fn test_idle_scene_has_no_zone() {
    let snap = engine().tick();
    for kind in [
        LayerKind::MissionZone,
        LayerKind::IntelConnectors,
        LayerKind::IntelMarkers,
    ] {
        assert!(snap.layer(kind).unwrap().elements.is_empty(), "{kind:?}");
    }
    assert_eq!(markers(&snap, LayerKind::Agents).len(), 8);
    assert!(snap.chrome.zone_card.is_none());
    assert!(snap.chrome.zone_label.is_none());
}

#[test]
fn test_threats_without_coordinates_not_drawn() {
    let snap = engine().tick();
    assert_eq!(markers(&snap, LayerKind::Threats).len(), 5);

    let mut data = Dataset::builtin().unwrap();
    for threat in &mut data.threats {
        threat.coordinates = None;
    }
    let mut engine = DashboardEngine::new(config(), data).unwrap();
    let snap = engine.tick();
    assert!(snap.layer(LayerKind::Threats).unwrap().elements.is_empty());
    assert_eq!(snap.threat_feed.rows.len(), 8);
    assert!(snap.threat_feed.rows.iter().all(|r| r.location.is_none()));
}

#[test]
fn test_dark_agent_has_no_pulse_rings() {
    let snap = engine().tick();
    let wraith = marker(&snap, LayerKind::Agents, "agent-006");
    assert_eq!(wraith.glyphs.len(), 2, "dot and core only");
    let nightshade = marker(&snap, LayerKind::Agents, "agent-007");
    assert_eq!(nightshade.glyphs.len(), 4);
}

#[test]
fn test_arcs_only_for_live_uplinks() {
    let snap = engine().tick();
    let keys: Vec<_> = snap
        .layer(LayerKind::AgentArcs)
        .unwrap()
        .paths()
        .map(|p| p.key.as_str())
        .collect();
    assert_eq!(keys.len(), 6);
    assert!(!keys.contains(&"arc-006"), "dark");
    assert!(!keys.contains(&"arc-008"), "standby");
}

#[test]
fn test_dot_radius_precedence() {
    assert_eq!(dot_radius(true, true, true), 3.5);
    assert_eq!(dot_radius(false, true, false), 3.0);
    assert_eq!(dot_radius(false, false, true), 3.0);
    assert_eq!(dot_radius(false, false, false), 2.2);
}

#[test]
fn test_satellite_longitude_wraps() {
    let east = &SATELLITE_ORBITS[0];
    assert_eq!(satellite_position(east, 0.0).lng, -180.0);
    assert_eq!(satellite_position(east, 450.0).lng, 0.0);
    assert_eq!(satellite_position(east, 900.0).lng, -180.0);

    let west = &SATELLITE_ORBITS[1];
    assert!((satellite_position(west, 100.0).lng - 150.0).abs() < 1e-9);

    for orbit in &SATELLITE_ORBITS {
        for t in [0.0, 17.0, 1234.0, 99_999.0] {
            let lng = satellite_position(orbit, t).lng;
            assert!((-180.0..180.0).contains(&lng), "lng {lng} at t={t}");
        }
    }
}

// ---- Determinism ----

#[test]
fn test_determinism_same_config() {
    let mut a = engine();
    let mut b = engine();
    let commands = [select_mission("M-003"), select_agent("009")];
    a.queue_commands(commands.clone());
    b.queue_commands(commands);

    for _ in 0..200 {
        let json_a = serde_json::to_string(&a.tick()).unwrap();
        let json_b = serde_json::to_string(&b.tick()).unwrap();
        assert_eq!(json_a, json_b, "snapshots diverged");
    }
}

#[test]
fn test_scene_depends_only_on_tick_and_selection() {
    let mut live = engine();
    live.queue_command(select_mission("M-001"));
    let mut snap = live.tick();
    for _ in 0..36 {
        snap = live.tick();
    }
    assert_eq!(snap.time.tick, 37);

    let mut other = engine();
    other.queue_command(select_mission("M-001"));
    other.tick();
    assert_eq!(other.layers_at(37), snap.layers);
}

// ---- Clock ----

#[test]
fn test_clock_is_gap_free() {
    let mut clock = AnimationClock::new(50);
    assert!(!clock.advance(), "a new clock is stopped");
    clock.start();
    for expected in 1..=10 {
        assert!(clock.advance());
        assert_eq!(clock.tick(), expected);
    }
    assert_eq!(clock.time().elapsed_ms, 500);

    clock.stop();
    assert!(!clock.advance());
    assert_eq!(clock.tick(), 10);
}

#[test]
fn test_engine_stop_freezes_time() {
    let mut engine = engine();
    for _ in 0..5 {
        engine.tick();
    }
    engine.stop();
    assert!(!engine.is_running());

    let snap = engine.tick();
    assert_eq!(snap.time.tick, 5);
    assert_eq!(snap.terminal.phase, TerminalPhase::Idle);

    engine.queue_command(select_agent("008"));
    assert_eq!(engine.tick().selection.agent_id, Some(AgentId::new("008")));
}

// ---- Terminal ----

fn two_line_player() -> ScriptedLogPlayer {
    ScriptedLogPlayer::new(
        [("a", 0), ("b", 400)],
        PlayerTiming {
            cycle_ms: 1000,
            restart_pause_ms: 200,
            lead_in_ms: 0,
        },
    )
}

#[test]
fn test_terminal_reveals_then_resets() {
    let mut player = two_line_player();
    assert_eq!(player.phase(0), TerminalPhase::Idle);

    player.activate(0);
    assert_eq!(player.phase(0), TerminalPhase::Playing { revealed: 1 });
    assert_eq!(player.phase(399), TerminalPhase::Playing { revealed: 1 });
    assert_eq!(player.phase(400), TerminalPhase::Playing { revealed: 2 });
    assert_eq!(player.view(999).lines.len(), 2);

    assert_eq!(player.phase(1000), TerminalPhase::Resetting);
    assert!(player.view(1100).lines.is_empty());

    assert_eq!(player.phase(1200), TerminalPhase::Playing { revealed: 1 });
    assert_eq!(player.phase(1600), TerminalPhase::Playing { revealed: 2 });

    player.deactivate();
    assert_eq!(player.phase(1600), TerminalPhase::Idle);
}

#[test]
fn test_terminal_clears_at_cycle_end_without_pause() {
    let mut player = ScriptedLogPlayer::new(
        [("a", 0), ("b", 400)],
        PlayerTiming {
            cycle_ms: 1000,
            restart_pause_ms: 0,
            lead_in_ms: 0,
        },
    );
    player.activate(0);
    assert_eq!(player.phase(999), TerminalPhase::Playing { revealed: 2 });
    assert_eq!(player.phase(1000), TerminalPhase::Resetting);
    assert!(player.view(1000).lines.is_empty());
    assert_eq!(player.phase(1001), TerminalPhase::Playing { revealed: 1 });
}

#[test]
fn test_terminal_script_sorted_stably() {
    let player = ScriptedLogPlayer::new(
        [("late", 500), ("first", 100), ("second", 100)],
        PlayerTiming::default(),
    );
    let texts: Vec<_> = player.script().iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["first", "second", "late"]);
}

#[test]
fn test_terminal_lead_in_delays_first_line() {
    let mut player = ScriptedLogPlayer::new(
        [("a", 0)],
        PlayerTiming {
            lead_in_ms: 500,
            ..PlayerTiming::default()
        },
    );
    player.activate(1000);
    assert_eq!(player.phase(1499), TerminalPhase::Playing { revealed: 0 });
    assert_eq!(player.phase(1500), TerminalPhase::Playing { revealed: 1 });
}

// ---- Config ----

#[test]
fn test_builtin_config_parses() {
    let config = DashboardConfig::builtin().unwrap();
    assert_eq!(config.tick_period_ms, 50);
    assert_eq!(config.terminal.lead_in_ms, 500);
    assert_eq!(config.viewport.max_zoom, 8.0);
    assert_eq!(config.started_at_unix, None);
}

#[test]
fn test_partial_config_uses_defaults() {
    let config = DashboardConfig::from_json_str(r#"{"seed": 7}"#).unwrap();
    assert_eq!(config.seed, 7);
    assert_eq!(config.viewport, DashboardConfig::default().viewport);
}

#[test]
fn test_invalid_config_rejected() {
    let err = DashboardConfig::from_json_str(r#"{"tick_period_ms": 0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err = DashboardConfig::from_json_str(
        r#"{"viewport": {"min_zoom": 4.0, "max_zoom": 2.0}}"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err = DashboardConfig::from_json_str(r#"{"terminal": {"restart_pause_ms": 0}}"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err = DashboardConfig::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_engine_rejects_invalid_config() {
    let mut bad = config();
    bad.viewport.min_zoom = 4.0;
    bad.viewport.max_zoom = 2.0;
    let result = DashboardEngine::new(bad, Dataset::builtin().unwrap());
    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

// ---- Panels ----

#[test]
fn test_dossier_for_dark_agent() {
    let mut engine = engine();
    engine.queue_command(select_agent("006"));
    let dossier = engine.tick().dossier.unwrap();
    assert!(!dossier.pulse);
    assert_eq!(dossier.heartbeat, 0);
    assert_eq!(dossier.heartbeat_tone, Tone::Red);
    assert_eq!(dossier.actions, ["CONTACT", "EXTRACT", "RELOCATE", "TERMINATE"]);
}

#[test]
fn test_panel_counts() {
    let snap = engine().tick();
    assert_eq!(snap.roster.count_label, "8 DEPLOYED");
    assert_eq!(snap.briefing.count_label, "5 OPS");
    assert_eq!(snap.satellites.count_label, "4 SCHEDULED");
    assert_eq!(snap.stats.items.len(), 8);

    let counts: Vec<_> = snap.chrome.counters.iter().map(|c| c.count).collect();
    assert_eq!(counts, [4, 1, 1]);
}
