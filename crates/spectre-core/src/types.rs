//! Fundamental geographic and timing types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Geographic coordinate in degrees.
///
/// Serialized as a `[lng, lat]` pair, the order map libraries expect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct GeoCoord {
    /// Longitude, east positive.
    pub lng: f64,
    /// Latitude, north positive.
    pub lat: f64,
}

impl GeoCoord {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// `"48.86°N 2.35°E"` style readout with the given number of decimals.
    ///
    /// Hemisphere letters are fixed; negative values keep their sign.
    pub fn readout(&self, decimals: usize) -> String {
        format!(
            "{:.*}°N {:.*}°E",
            decimals, self.lat, decimals, self.lng
        )
    }
}

impl From<[f64; 2]> for GeoCoord {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self { lng, lat }
    }
}

impl From<GeoCoord> for [f64; 2] {
    fn from(c: GeoCoord) -> Self {
        [c.lng, c.lat]
    }
}

/// Agent identifier (`"007"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(pub String);

/// Mission identifier (`"M-001"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MissionId(pub String);

impl AgentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl MissionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for MissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Animation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameTime {
    /// Current tick number (increments by exactly 1 per firing).
    pub tick: u64,
    /// Elapsed time in milliseconds (`tick * period`).
    pub elapsed_ms: u64,
}

impl FrameTime {
    /// Build the frame time for `tick` at the given period.
    pub fn at(tick: u64, period_ms: u64) -> Self {
        Self {
            tick,
            elapsed_ms: tick.saturating_mul(period_ms),
        }
    }
}
