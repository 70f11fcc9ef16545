//! Enumeration types used throughout the dashboard.
//!
//! Every style lookup (status → tone, kind → shape, ...) is an exhaustive
//! `match`, so a new variant fails to compile until it has a style.

use serde::{Deserialize, Serialize};

/// Theme tone. The frontend maps these onto its palette; `hex()` gives the
/// reference colors for SVG output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Gold,
    Green,
    Red,
    Amber,
    Cyan,
    Gray,
    White,
    /// Dark card background used behind label popups.
    Panel,
    /// Country fill, hover fill and border of the base map.
    Land,
    LandHover,
    Border,
}

impl Tone {
    pub fn hex(self) -> &'static str {
        match self {
            Tone::Gold => "#c9a84c",
            Tone::Green => "#22c55e",
            Tone::Red => "#ef4444",
            Tone::Amber => "#f59e0b",
            Tone::Cyan => "#06b6d4",
            Tone::Gray => "#71717a",
            Tone::White => "#ffffff",
            Tone::Panel => "#111118",
            Tone::Land => "#141420",
            Tone::LandHover => "#1a1a30",
            Tone::Border => "#1e1e3a",
        }
    }
}

/// Field agent operational status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Active,
    Compromised,
    Extraction,
    Dark,
    Standby,
}

impl AgentStatus {
    /// Legend order.
    pub const ALL: [AgentStatus; 5] = [
        AgentStatus::Active,
        AgentStatus::Compromised,
        AgentStatus::Extraction,
        AgentStatus::Dark,
        AgentStatus::Standby,
    ];

    pub fn tone(self) -> Tone {
        match self {
            AgentStatus::Active => Tone::Green,
            AgentStatus::Compromised => Tone::Red,
            AgentStatus::Extraction => Tone::Amber,
            AgentStatus::Dark => Tone::Gray,
            AgentStatus::Standby => Tone::Cyan,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AgentStatus::Active => "ACTIVE",
            AgentStatus::Compromised => "COMPROMISED",
            AgentStatus::Extraction => "EXTRACTION",
            AgentStatus::Dark => "DARK",
            AgentStatus::Standby => "STANDBY",
        }
    }

    /// Whether the agent keeps a live link to HQ (drawn as an arc).
    pub fn has_uplink(self) -> bool {
        match self {
            AgentStatus::Active | AgentStatus::Compromised | AgentStatus::Extraction => true,
            AgentStatus::Dark | AgentStatus::Standby => false,
        }
    }

    /// Dark agents get no ambient pulse rings and a dimmed dot.
    pub fn is_dark(self) -> bool {
        matches!(self, AgentStatus::Dark)
    }
}

/// Mission classification marking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "TOP SECRET")]
    TopSecret,
    #[serde(rename = "SECRET")]
    Secret,
    #[serde(rename = "CLASSIFIED")]
    Classified,
}

impl Classification {
    pub fn label(self) -> &'static str {
        match self {
            Classification::TopSecret => "TOP SECRET",
            Classification::Secret => "SECRET",
            Classification::Classified => "CLASSIFIED",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Classification::TopSecret => Tone::Red,
            Classification::Secret => Tone::Amber,
            Classification::Classified => Tone::Cyan,
        }
    }
}

/// Mission lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionStatus {
    Active,
    Pending,
    Completed,
    Aborted,
}

impl MissionStatus {
    pub fn label(self) -> &'static str {
        match self {
            MissionStatus::Active => "ACTIVE",
            MissionStatus::Pending => "PENDING",
            MissionStatus::Completed => "COMPLETED",
            MissionStatus::Aborted => "ABORTED",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            MissionStatus::Active => Tone::Green,
            MissionStatus::Pending => Tone::Amber,
            MissionStatus::Completed => Tone::Cyan,
            MissionStatus::Aborted => Tone::Red,
        }
    }
}

/// Mission priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
            Priority::Critical => "CRITICAL",
        }
    }

    /// Tone of the briefing row priority tag.
    pub fn tone(self) -> Tone {
        match self {
            Priority::Critical => Tone::Red,
            Priority::High => Tone::Amber,
            Priority::Medium => Tone::Cyan,
            Priority::Low => Tone::Gray,
        }
    }

    /// Tone of the operational zone overlay drawn for a selected mission.
    pub fn zone_tone(self) -> Tone {
        match self {
            Priority::Critical => Tone::Red,
            Priority::High => Tone::Amber,
            Priority::Medium | Priority::Low => Tone::Cyan,
        }
    }
}

/// Glyph drawn for an intel marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerShape {
    Circle,
    Diamond,
    Square,
    Triangle,
}

/// Kind of intel point inside a mission zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntelKind {
    Asset,
    Target,
    Safehouse,
    Comms,
}

impl IntelKind {
    pub fn shape(self) -> MarkerShape {
        match self {
            IntelKind::Asset => MarkerShape::Circle,
            IntelKind::Target => MarkerShape::Diamond,
            IntelKind::Safehouse => MarkerShape::Square,
            IntelKind::Comms => MarkerShape::Triangle,
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            IntelKind::Asset => Tone::Green,
            IntelKind::Target => Tone::Red,
            IntelKind::Safehouse => Tone::Cyan,
            IntelKind::Comms => Tone::Amber,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IntelKind::Asset => "ASSET",
            IntelKind::Target => "TARGET",
            IntelKind::Safehouse => "SAFEHOUSE",
            IntelKind::Comms => "COMMS",
        }
    }
}

/// Threat event category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreatKind {
    Intercept,
    Movement,
    Signal,
    Breach,
    Anomaly,
}

impl ThreatKind {
    pub fn label(self) -> &'static str {
        match self {
            ThreatKind::Intercept => "INTERCEPT",
            ThreatKind::Movement => "MOVEMENT",
            ThreatKind::Signal => "SIGNAL",
            ThreatKind::Breach => "BREACH",
            ThreatKind::Anomaly => "ANOMALY",
        }
    }

    /// Icon name in the frontend icon set.
    pub fn icon(self) -> &'static str {
        match self {
            ThreatKind::Intercept => "radio",
            ThreatKind::Movement => "move",
            ThreatKind::Signal => "signal",
            ThreatKind::Breach => "shield-alert",
            ThreatKind::Anomaly => "zap",
        }
    }
}

/// Threat severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }

    /// Tone of the pulsing map marker.
    pub fn map_tone(self) -> Tone {
        match self {
            Severity::Critical => Tone::Red,
            Severity::High => Tone::Amber,
            Severity::Medium | Severity::Low => Tone::Cyan,
        }
    }

    /// Tone of the feed list badge.
    pub fn feed_tone(self) -> Tone {
        match self {
            Severity::Critical => Tone::Red,
            Severity::High => Tone::Amber,
            Severity::Medium => Tone::Cyan,
            Severity::Low => Tone::Gray,
        }
    }
}

/// Satellite sensor payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorType {
    #[serde(rename = "SIGINT")]
    Sigint,
    #[serde(rename = "IMINT")]
    Imint,
    #[serde(rename = "ELINT")]
    Elint,
    #[serde(rename = "COMINT")]
    Comint,
}

impl SensorType {
    pub fn label(self) -> &'static str {
        match self {
            SensorType::Sigint => "SIGINT",
            SensorType::Imint => "IMINT",
            SensorType::Elint => "ELINT",
            SensorType::Comint => "COMINT",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            SensorType::Sigint => Tone::Cyan,
            SensorType::Imint => Tone::Gold,
            SensorType::Elint => Tone::Amber,
            SensorType::Comint => Tone::Green,
        }
    }
}

/// Satellite pass window status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassStatus {
    Scheduled,
    Active,
    Completed,
}

impl PassStatus {
    pub fn label(self) -> &'static str {
        match self {
            PassStatus::Scheduled => "SCHEDULED",
            PassStatus::Active => "ACTIVE",
            PassStatus::Completed => "COMPLETED",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            PassStatus::Scheduled => Tone::Gray,
            PassStatus::Active => Tone::Green,
            PassStatus::Completed => Tone::Cyan,
        }
    }
}

/// Global threat posture shown in the stats bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ThreatLevel {
    Low,
    Guarded,
    Elevated,
    High,
    Severe,
}

impl ThreatLevel {
    pub fn label(self) -> &'static str {
        match self {
            ThreatLevel::Low => "LOW",
            ThreatLevel::Guarded => "GUARDED",
            ThreatLevel::Elevated => "ELEVATED",
            ThreatLevel::High => "HIGH",
            ThreatLevel::Severe => "SEVERE",
        }
    }
}

/// Heartbeat integrity band, used by the roster bar and dossier signal row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeartbeatBand {
    Strong,
    Weak,
    Critical,
    Lost,
}

impl HeartbeatBand {
    /// Bands are `>70`, `>30`, `>0` and `0`.
    pub fn classify(heartbeat: u8) -> Self {
        match heartbeat {
            71..=u8::MAX => HeartbeatBand::Strong,
            31..=70 => HeartbeatBand::Weak,
            1..=30 => HeartbeatBand::Critical,
            0 => HeartbeatBand::Lost,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HeartbeatBand::Strong => "STRONG",
            HeartbeatBand::Weak => "WEAK",
            HeartbeatBand::Critical => "CRITICAL",
            HeartbeatBand::Lost => "LOST",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            HeartbeatBand::Strong => Tone::Green,
            HeartbeatBand::Weak => Tone::Amber,
            HeartbeatBand::Critical => Tone::Red,
            HeartbeatBand::Lost => Tone::Gray,
        }
    }
}

/// Styling class of a crypto terminal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    /// `>` prefixed command echo.
    Command,
    /// Contains `[ALERT]` or `[WARN]`.
    Warning,
    /// Contains `[OK]`.
    Success,
    Info,
}

impl LineStyle {
    /// Classify a terminal line by its content. Command echo wins over tags.
    pub fn classify(text: &str) -> Self {
        if text.starts_with('>') {
            LineStyle::Command
        } else if text.contains("[ALERT]") || text.contains("[WARN]") {
            LineStyle::Warning
        } else if text.contains("[OK]") {
            LineStyle::Success
        } else {
            LineStyle::Info
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            LineStyle::Command => Tone::Green,
            LineStyle::Warning => Tone::Amber,
            LineStyle::Success => Tone::Cyan,
            LineStyle::Info => Tone::Gray,
        }
    }
}

/// Map layers, back to front. The derived `Ord` is the z-order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    BaseMap,
    Graticule,
    MissionZone,
    DataStreams,
    AgentArcs,
    SurveillanceZones,
    IntelConnectors,
    Threats,
    Satellites,
    Headquarters,
    Agents,
    IntelMarkers,
    Labels,
}

impl LayerKind {
    pub const ALL: [LayerKind; 13] = [
        LayerKind::BaseMap,
        LayerKind::Graticule,
        LayerKind::MissionZone,
        LayerKind::DataStreams,
        LayerKind::AgentArcs,
        LayerKind::SurveillanceZones,
        LayerKind::IntelConnectors,
        LayerKind::Threats,
        LayerKind::Satellites,
        LayerKind::Headquarters,
        LayerKind::Agents,
        LayerKind::IntelMarkers,
        LayerKind::Labels,
    ];
}
