//! Fixture entities. Loaded once at startup and never mutated.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{AgentId, GeoCoord, MissionId};

/// Where an agent is currently operating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub city: String,
    pub country: String,
}

impl Location {
    pub fn coord(&self) -> GeoCoord {
        GeoCoord::new(self.lng, self.lat)
    }
}

/// A field agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub codename: String,
    /// Usually `[REDACTED]`.
    pub real_name: String,
    pub status: AgentStatus,
    pub location: Location,
    /// Display reference to the assigned operation (`"OP-GOLDEN VIPER"`).
    pub mission: String,
    pub last_contact: String,
    /// Link integrity in `[0, 100]`.
    pub heartbeat: u8,
    pub cover_identity: String,
}

impl Agent {
    pub fn heartbeat_band(&self) -> HeartbeatBand {
        HeartbeatBand::classify(self.heartbeat)
    }
}

/// Point of interest inside a mission zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntelMarker {
    pub coords: GeoCoord,
    pub label: String,
    pub kind: IntelKind,
}

/// An operation with its zone geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub id: MissionId,
    pub codename: String,
    pub classification: Classification,
    pub status: MissionStatus,
    pub priority: Priority,
    pub region: String,
    pub briefing: String,
    /// Not checked against the agent roster; dangling ids are reported by
    /// validation and otherwise ignored.
    pub assigned_agents: Vec<AgentId>,
    pub deadline: String,
    pub zone_center: GeoCoord,
    /// Closed ring: the first and last coordinates are equal.
    pub zone_polygon: Vec<GeoCoord>,
    pub intel_markers: Vec<IntelMarker>,
}

impl Mission {
    pub fn is_assigned(&self, agent: &AgentId) -> bool {
        self.assigned_agents.iter().any(|a| a == agent)
    }

    /// Whether the polygon is a closed ring of at least a triangle.
    pub fn zone_is_closed(&self) -> bool {
        match (self.zone_polygon.first(), self.zone_polygon.last()) {
            (Some(first), Some(last)) => self.zone_polygon.len() >= 4 && first == last,
            _ => false,
        }
    }

    /// Polygon vertices without the duplicated closing point.
    pub fn zone_vertices(&self) -> &[GeoCoord] {
        if self.zone_is_closed() {
            &self.zone_polygon[..self.zone_polygon.len() - 1]
        } else {
            &self.zone_polygon
        }
    }

    /// `"OP-GOLDEN VIPER"`.
    pub fn op_name(&self) -> String {
        format!("OP-{}", self.codename)
    }
}

/// An entry in the threat feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatEvent {
    pub id: String,
    pub timestamp: String,
    pub kind: ThreatKind,
    pub severity: Severity,
    pub source: String,
    pub message: String,
    /// `None` means the event is not mappable; it still shows in the feed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<GeoCoord>,
}

/// A scheduled collection window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatellitePass {
    pub id: String,
    pub designation: String,
    pub sensor: SensorType,
    pub region: String,
    pub window_start: String,
    pub window_end: String,
    pub status: PassStatus,
}

/// System-wide counters for the stats bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemStats {
    pub encrypted_channels: u32,
    pub active_interceptions: u32,
    pub satellites_online: u32,
    pub secure_nodes: u32,
    pub data_processed: String,
    pub threat_level: ThreatLevel,
    pub global_alerts: u32,
    pub network_latency: String,
}

/// The complete fixture dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub agents: Vec<Agent>,
    pub missions: Vec<Mission>,
    pub threats: Vec<ThreatEvent>,
    pub satellite_passes: Vec<SatellitePass>,
    pub system_stats: SystemStats,
}

impl Dataset {
    pub fn agent(&self, id: &AgentId) -> Option<&Agent> {
        self.agents.iter().find(|a| &a.id == id)
    }

    pub fn mission(&self, id: &MissionId) -> Option<&Mission> {
        self.missions.iter().find(|m| &m.id == id)
    }

    /// Number of agents with the given status.
    pub fn count_status(&self, status: AgentStatus) -> usize {
        self.agents.iter().filter(|a| a.status == status).count()
    }
}
