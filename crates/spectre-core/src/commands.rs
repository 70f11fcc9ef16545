//! Operator commands sent from the frontend to the dashboard coordinator.
//!
//! Commands are queued and applied at the next tick boundary, so renderers
//! never observe a half-applied change.

use serde::{Deserialize, Serialize};

use crate::types::{AgentId, GeoCoord, MissionId};

/// All possible operator actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DashboardCommand {
    // --- Selection ---
    /// Toggle the agent selection (reselecting clears it).
    SelectAgent { agent_id: AgentId },
    /// Toggle the mission selection (reselecting clears it).
    SelectMission { mission_id: MissionId },
    /// Close the agent dossier.
    ClearAgent,
    /// Close the mission zone.
    ClearMission,

    // --- Pointer ---
    /// Pointer entered (`Some`) or left (`None`) an agent marker.
    HoverAgent { agent_id: Option<AgentId> },
    /// Pointer entered or left an intel marker of the selected mission.
    HoverIntel { index: Option<usize> },
    /// Pointer over a country boundary; `None` name clears the tooltip.
    HoverCountry {
        name: Option<String>,
        x: f64,
        y: f64,
    },
    /// Click on the map canvas at a screen position; picks the nearest agent.
    ClickMap { x: f64, y: f64 },

    // --- Viewport ---
    /// Pan/zoom gesture finished at the given center and zoom.
    MoveViewport { center: GeoCoord, zoom: f64 },
    /// Drag the map by a screen-space delta.
    PanBy { dx: f64, dy: f64 },
    /// Multiply the zoom factor (clamped).
    ZoomBy { factor: f64 },
}
