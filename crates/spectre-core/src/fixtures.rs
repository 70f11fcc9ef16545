//! Fixture dataset loading and validation.
//!
//! The builtin dataset is embedded at compile time. Validation never fails
//! the load: it returns the issues found so the caller can log them.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::entities::Dataset;
use crate::types::{AgentId, MissionId};

pub const BUILTIN_DATASET: &str = include_str!("data/dataset.json");

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to parse fixture dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read fixture dataset from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A shape problem found in otherwise well-typed fixture data.
#[derive(Debug, Clone, PartialEq)]
pub enum FixtureIssue {
    /// A mission names an agent id that is not in the roster.
    DanglingAgentRef { mission: MissionId, agent: AgentId },
    /// A mission zone polygon is not a closed ring.
    OpenZonePolygon { mission: MissionId },
    /// Heartbeat outside `[0, 100]`.
    HeartbeatOutOfRange { agent: AgentId, heartbeat: u8 },
    /// Two entities of the same kind share an id.
    DuplicateId { id: String },
}

impl fmt::Display for FixtureIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureIssue::DanglingAgentRef { mission, agent } => {
                write!(f, "mission {mission} references unknown agent {agent}")
            }
            FixtureIssue::OpenZonePolygon { mission } => {
                write!(f, "mission {mission} zone polygon is not closed")
            }
            FixtureIssue::HeartbeatOutOfRange { agent, heartbeat } => {
                write!(f, "agent {agent} heartbeat {heartbeat} exceeds 100")
            }
            FixtureIssue::DuplicateId { id } => write!(f, "duplicate id {id}"),
        }
    }
}

impl Dataset {
    /// Parse the embedded dataset.
    pub fn builtin() -> Result<Self, FixtureError> {
        Self::from_json(BUILTIN_DATASET)
    }

    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path).map_err(|source| FixtureError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Check cross-entity invariants that the type shapes cannot express.
    pub fn validate(&self) -> Vec<FixtureIssue> {
        let mut issues = Vec::new();

        duplicate_ids(self.agents.iter().map(|a| a.id.as_str()), &mut issues);
        duplicate_ids(self.missions.iter().map(|m| m.id.as_str()), &mut issues);
        duplicate_ids(self.threats.iter().map(|t| t.id.as_str()), &mut issues);
        duplicate_ids(
            self.satellite_passes.iter().map(|p| p.id.as_str()),
            &mut issues,
        );

        for agent in &self.agents {
            if agent.heartbeat > 100 {
                issues.push(FixtureIssue::HeartbeatOutOfRange {
                    agent: agent.id.clone(),
                    heartbeat: agent.heartbeat,
                });
            }
        }

        for mission in &self.missions {
            if !mission.zone_is_closed() {
                issues.push(FixtureIssue::OpenZonePolygon {
                    mission: mission.id.clone(),
                });
            }
            for agent in &mission.assigned_agents {
                if self.agent(agent).is_none() {
                    issues.push(FixtureIssue::DanglingAgentRef {
                        mission: mission.id.clone(),
                        agent: agent.clone(),
                    });
                }
            }
        }

        issues
    }
}

/// Ids are only unique within one entity kind.
fn duplicate_ids<'a>(ids: impl Iterator<Item = &'a str>, issues: &mut Vec<FixtureIssue>) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            issues.push(FixtureIssue::DuplicateId { id: id.to_string() });
        }
    }
}
