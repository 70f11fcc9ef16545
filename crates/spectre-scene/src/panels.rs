//! Sibling panel views: roster, dossier, briefing, threat feed, satellite passes.
//!
//! Panels read the selection the coordinator owns; none of them keep
//! selection state of their own.

use spectre_core::entities::{Agent, Dataset, Mission};
use spectre_core::enums::{AgentStatus, MissionStatus, PassStatus, Tone};
use spectre_core::state::{
    BriefingRow, BriefingView, DossierView, IntelListView, PassRow, RosterRow, RosterView,
    SatellitePanelView, ThreatFeedView, ThreatRow,
};

use crate::chrome::intel_entries;
use crate::selection::SelectionState;

pub const INTEL_LIST_HEADING: &str = "ZONE INTEL MARKERS";
pub const DOSSIER_ACTIONS: [&str; 4] = ["CONTACT", "EXTRACT", "RELOCATE", "TERMINATE"];

fn place(agent: &Agent) -> String {
    format!("{}, {}", agent.location.city, agent.location.country)
}

pub fn roster(data: &Dataset, selection: &SelectionState) -> RosterView {
    RosterView {
        count_label: format!("{} DEPLOYED", data.agents.len()),
        rows: data
            .agents
            .iter()
            .map(|agent| RosterRow {
                agent_id: agent.id.clone(),
                codename: agent.codename.clone(),
                status: agent.status,
                status_label: agent.status.label().to_string(),
                tone: agent.status.tone(),
                place: place(agent),
                last_contact: agent.last_contact.clone(),
                cover_identity: agent.cover_identity.clone(),
                heartbeat: agent.heartbeat,
                heartbeat_band: agent.heartbeat_band(),
                selected: selection.is_agent_selected(&agent.id),
            })
            .collect(),
    }
}

/// Dossier vitals color: the readout never goes gray, even at zero.
fn vitals_tone(heartbeat: u8) -> Tone {
    match heartbeat {
        71..=u8::MAX => Tone::Green,
        31..=70 => Tone::Amber,
        0..=30 => Tone::Red,
    }
}

pub fn dossier(data: &Dataset, selection: &SelectionState) -> Option<DossierView> {
    let agent = selection.agent().and_then(|id| data.agent(id))?;
    Some(DossierView {
        agent_id: agent.id.clone(),
        codename: agent.codename.clone(),
        status_label: agent.status.label().to_string(),
        tone: agent.status.tone(),
        pulse: agent.status != AgentStatus::Dark,
        cover_identity: agent.cover_identity.clone(),
        real_name: agent.real_name.clone(),
        mission: agent.mission.clone(),
        place: place(agent),
        coordinates: format!(
            "{:.4}°N, {:.4}°E",
            agent.location.lat, agent.location.lng
        ),
        last_contact: agent.last_contact.clone(),
        signal: agent.heartbeat_band().label().to_string(),
        heartbeat: agent.heartbeat,
        heartbeat_tone: vitals_tone(agent.heartbeat),
        actions: DOSSIER_ACTIONS.iter().map(|a| a.to_string()).collect(),
    })
}

fn agents_label(mission: &Mission) -> String {
    let n = mission.assigned_agents.len();
    format!("{n} AGENT{}", if n > 1 { "S" } else { "" })
}

pub fn briefing(data: &Dataset, selection: &SelectionState) -> BriefingView {
    BriefingView {
        count_label: format!("{} OPS", data.missions.len()),
        zone_active: selection.mission().is_some(),
        rows: data
            .missions
            .iter()
            .map(|mission| {
                let selected = selection.is_mission_selected(&mission.id);
                BriefingRow {
                    mission_id: mission.id.clone(),
                    op_name: mission.op_name(),
                    classification: mission.classification.label().to_string(),
                    classification_tone: mission.classification.tone(),
                    priority_label: format!("P:{}", mission.priority.label()),
                    priority_tone: mission.priority.tone(),
                    status_label: mission.status.label().to_string(),
                    status_tone: mission.status.tone(),
                    status_pulse: mission.status == MissionStatus::Active,
                    briefing: mission.briefing.clone(),
                    agents_label: agents_label(mission),
                    deadline: mission.deadline.clone(),
                    region: mission.region.clone(),
                    selected,
                    intel: selected.then(|| IntelListView {
                        heading: INTEL_LIST_HEADING.to_string(),
                        entries: intel_entries(mission),
                    }),
                }
            })
            .collect(),
    }
}

/// Every threat event, mappable or not.
pub fn threat_feed(data: &Dataset) -> ThreatFeedView {
    ThreatFeedView {
        rows: data
            .threats
            .iter()
            .map(|threat| ThreatRow {
                id: threat.id.clone(),
                timestamp: threat.timestamp.clone(),
                kind_label: threat.kind.label().to_string(),
                icon: threat.kind.icon().to_string(),
                severity_label: threat.severity.label().to_string(),
                tone: threat.severity.feed_tone(),
                message: threat.message.clone(),
                source: format!("SRC: {}", threat.source),
                location: threat.coordinates.map(|c| format!("LOC: {}", c.readout(2))),
            })
            .collect(),
    }
}

pub fn satellite_panel(data: &Dataset) -> SatellitePanelView {
    SatellitePanelView {
        count_label: format!("{} SCHEDULED", data.satellite_passes.len()),
        rows: data
            .satellite_passes
            .iter()
            .map(|pass| PassRow {
                id: pass.id.clone(),
                designation: pass.designation.clone(),
                sensor_label: pass.sensor.label().to_string(),
                sensor_tone: pass.sensor.tone(),
                region: pass.region.clone(),
                window: format!("{} - {} UTC", pass.window_start, pass.window_end),
                status_label: pass.status.label().to_string(),
                status_tone: pass.status.tone(),
                live: pass.status == PassStatus::Active,
            })
            .collect(),
    }
}
