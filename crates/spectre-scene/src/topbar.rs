//! Top bar with the UTC / Zulu clock.
//!
//! The clock does not read the system time per frame: it shows the start
//! instant plus elapsed animation time, stepped to the refresh period.

use time::macros::format_description;
use time::{Duration, OffsetDateTime};

use spectre_core::entities::SystemStats;
use spectre_core::state::TopBarView;

#[derive(Debug, Clone)]
pub struct TopBarClock {
    started_at: OffsetDateTime,
    refresh_ms: u64,
}

impl TopBarClock {
    pub fn new(started_at: OffsetDateTime, refresh_ms: u64) -> Self {
        Self {
            started_at,
            refresh_ms: refresh_ms.max(1),
        }
    }

    /// Start at a Unix timestamp, or now when `None` or out of range.
    pub fn from_unix(started_at_unix: Option<i64>, refresh_ms: u64) -> Self {
        let started_at = started_at_unix
            .and_then(|secs| OffsetDateTime::from_unix_timestamp(secs).ok())
            .unwrap_or_else(OffsetDateTime::now_utc);
        Self::new(started_at, refresh_ms)
    }

    /// Instant shown `elapsed_ms` after start.
    pub fn displayed_at(&self, elapsed_ms: u64) -> OffsetDateTime {
        let stepped = elapsed_ms / self.refresh_ms * self.refresh_ms;
        self.started_at + Duration::milliseconds(i64::try_from(stepped).unwrap_or(i64::MAX))
    }

    pub fn view(&self, elapsed_ms: u64, stats: &SystemStats) -> TopBarView {
        let now = self.displayed_at(elapsed_ms);
        TopBarView {
            title: "SPECTRE".to_string(),
            version: "v7.3.1".to_string(),
            banner: "TOP SECRET // SCI".to_string(),
            subtitle: "GEO-INTELLIGENCE COMMAND & CONTROL".to_string(),
            utc: now
                .format(format_description!(
                    "[day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
                ))
                .unwrap_or_default(),
            zulu: now
                .format(format_description!("[hour]:[minute]:[second]Z"))
                .unwrap_or_default(),
            satellites_label: format!("{} SAT", stats.satellites_online),
            operator: "DIRECTOR".to_string(),
            clearance: "CLEARANCE: OMEGA".to_string(),
        }
    }
}
