//! Dashboard snapshot: the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::primitives::Layer;
use crate::types::{AgentId, FrameTime, GeoCoord, MissionId};

/// Complete dashboard state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub time: FrameTime,
    pub selection: SelectionView,
    pub hover: HoverView,
    pub viewport: ViewportView,
    /// Map layers in back-to-front order.
    pub layers: Vec<Layer>,
    pub chrome: MapChrome,
    pub top_bar: TopBarView,
    pub stats: StatsBarView,
    pub roster: RosterView,
    /// Present iff an agent is selected.
    pub dossier: Option<DossierView>,
    pub briefing: BriefingView,
    pub threat_feed: ThreatFeedView,
    pub satellites: SatellitePanelView,
    pub terminal: TerminalView,
    pub radar: RadarView,
}

impl DashboardSnapshot {
    pub fn layer(&self, kind: LayerKind) -> Option<&Layer> {
        self.layers.iter().find(|l| l.kind == kind)
    }
}

/// Read-only selection signal for sibling panels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionView {
    pub agent_id: Option<AgentId>,
    pub mission_id: Option<MissionId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverView {
    pub agent_id: Option<AgentId>,
    pub intel_index: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewportView {
    pub projection: String,
    pub scale: f64,
    pub center: GeoCoord,
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

// ---- Map chrome ----

/// Fixed overlays drawn above every map layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapChrome {
    pub title: String,
    pub projection_label: String,
    /// `"ZOOM: 1.0x"`.
    pub zoom_label: String,
    /// `"ZONE: OP-GOLDEN VIPER"` while a mission is selected.
    pub zone_label: Option<String>,
    /// Scan line position, percent of map height.
    pub scan_line_pct: f64,
    pub legend: Vec<LegendEntry>,
    pub counters: Vec<CounterView>,
    /// `"CENTER: 20.0°N 20.0°E"`.
    pub center_readout: String,
    pub tooltip: Option<TooltipView>,
    pub zone_card: Option<ZoneCardView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterView {
    pub label: String,
    pub count: usize,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipView {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Operational zone card shown over the map for the selected mission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneCardView {
    pub op_name: String,
    pub tone: Tone,
    /// `"TOP SECRET // Western Europe"`.
    pub subtitle: String,
    pub markers: Vec<IntelEntryView>,
    /// `"AGENTS: 007"`.
    pub agents: String,
    /// `"DL: 2026-03-01"`.
    pub deadline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntelEntryView {
    pub kind: IntelKind,
    pub kind_label: String,
    pub tone: Tone,
    pub shape: MarkerShape,
    pub label: String,
}

// ---- Top bar + stats ----

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopBarView {
    pub title: String,
    pub version: String,
    pub banner: String,
    pub subtitle: String,
    /// `"19 Oct 2026 14:32:07 GMT"`.
    pub utc: String,
    /// `"14:32:07Z"`.
    pub zulu: String,
    pub satellites_label: String,
    pub operator: String,
    pub clearance: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsBarView {
    pub items: Vec<StatItemView>,
    pub system_status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatItemView {
    pub label: String,
    pub value: String,
    pub tone: Tone,
    pub pulse: bool,
}

// ---- Sibling panels ----

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterView {
    /// `"8 DEPLOYED"`.
    pub count_label: String,
    pub rows: Vec<RosterRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterRow {
    pub agent_id: AgentId,
    pub codename: String,
    pub status: AgentStatus,
    pub status_label: String,
    pub tone: Tone,
    /// `"Paris, France"`.
    pub place: String,
    pub last_contact: String,
    pub cover_identity: String,
    pub heartbeat: u8,
    pub heartbeat_band: HeartbeatBand,
    pub selected: bool,
}

/// Agent dossier overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DossierView {
    pub agent_id: AgentId,
    pub codename: String,
    pub status_label: String,
    pub tone: Tone,
    pub pulse: bool,
    pub cover_identity: String,
    pub real_name: String,
    pub mission: String,
    pub place: String,
    /// `"48.8566°N, 2.3522°E"`.
    pub coordinates: String,
    pub last_contact: String,
    pub signal: String,
    pub heartbeat: u8,
    pub heartbeat_tone: Tone,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BriefingView {
    /// `"5 OPS"`.
    pub count_label: String,
    pub zone_active: bool,
    pub rows: Vec<BriefingRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BriefingRow {
    pub mission_id: MissionId,
    pub op_name: String,
    pub classification: String,
    pub classification_tone: Tone,
    /// `"P:CRITICAL"`.
    pub priority_label: String,
    pub priority_tone: Tone,
    pub status_label: String,
    pub status_tone: Tone,
    pub status_pulse: bool,
    pub briefing: String,
    /// `"1 AGENT"` / `"2 AGENTS"`.
    pub agents_label: String,
    pub deadline: String,
    pub region: String,
    pub selected: bool,
    /// Expanded `ZONE INTEL MARKERS` list; present only on the selected row.
    pub intel: Option<IntelListView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntelListView {
    pub heading: String,
    pub entries: Vec<IntelEntryView>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThreatFeedView {
    pub rows: Vec<ThreatRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatRow {
    pub id: String,
    pub timestamp: String,
    pub kind_label: String,
    pub icon: String,
    pub severity_label: String,
    pub tone: Tone,
    pub message: String,
    /// `"SRC: SIGINT-ECHELON"`.
    pub source: String,
    /// `"LOC: 55.75°N 37.62°E"`; `None` for unmappable events.
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SatellitePanelView {
    /// `"4 SCHEDULED"`.
    pub count_label: String,
    pub rows: Vec<PassRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassRow {
    pub id: String,
    pub designation: String,
    pub sensor_label: String,
    pub sensor_tone: Tone,
    pub region: String,
    /// `"15:00 - 15:22 UTC"`.
    pub window: String,
    pub status_label: String,
    pub status_tone: Tone,
    pub live: bool,
}

// ---- Terminal + radar ----

/// Scripted log player state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TerminalPhase {
    /// Not activated, or torn down.
    #[default]
    Idle,
    /// Revealing lines; `revealed` only grows within a cycle.
    Playing { revealed: usize },
    /// Cycle finished, lines cleared, waiting to restart.
    Resetting,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TerminalView {
    pub phase: TerminalPhase,
    pub lines: Vec<TerminalLineView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalLineView {
    pub text: String,
    pub style: LineStyle,
    pub tone: Tone,
}

/// Proximity radar widget, 200×200 viewbox.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RadarView {
    /// Sweep angle in degrees, clockwise from north.
    pub sweep_angle: f64,
    pub rings: Vec<f64>,
    pub blips: Vec<BlipView>,
    pub range_label: String,
    pub contacts: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlipView {
    pub x: f64,
    pub y: f64,
    pub tone: Tone,
    pub opacity: f64,
}
