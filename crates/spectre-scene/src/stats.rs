//! Stats bar counters and the interception jitter.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use spectre_core::entities::SystemStats;
use spectre_core::enums::Tone;
use spectre_core::state::{StatItemView, StatsBarView};

/// Random walk of the active interception counter: one ±1 step per period.
#[derive(Debug, Clone)]
pub struct InterceptionJitter {
    rng: ChaCha8Rng,
    period_ms: u64,
    value: u32,
    steps_applied: u64,
}

impl InterceptionJitter {
    pub fn new(seed: u64, period_ms: u64, initial: u32) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            period_ms: period_ms.max(1),
            value: initial,
            steps_applied: 0,
        }
    }

    /// Apply every step due by `elapsed_ms`. Steps are counted, so a late
    /// update never skips one.
    pub fn advance_to(&mut self, elapsed_ms: u64) {
        let due = elapsed_ms / self.period_ms;
        while self.steps_applied < due {
            self.value = if self.rng.gen_bool(0.5) {
                self.value.saturating_add(1)
            } else {
                self.value.saturating_sub(1)
            };
            self.steps_applied += 1;
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

/// `2048` → `"2,048"`.
pub fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn stats_bar(stats: &SystemStats, interceptions: u32) -> StatsBarView {
    let item = |label: &str, value: String, tone: Tone, pulse: bool| StatItemView {
        label: label.to_string(),
        value,
        tone,
        pulse,
    };
    StatsBarView {
        items: vec![
            item("ENCRYPTED CH", stats.encrypted_channels.to_string(), Tone::Gold, false),
            item("SATELLITES", stats.satellites_online.to_string(), Tone::Cyan, false),
            item("INTERCEPTS", interceptions.to_string(), Tone::Amber, true),
            item("SECURE NODES", group_thousands(stats.secure_nodes), Tone::Green, false),
            item("DATA/24H", stats.data_processed.clone(), Tone::Cyan, false),
            item("THREAT LEVEL", stats.threat_level.label().to_string(), Tone::Red, true),
            item("GLOBAL ALERTS", stats.global_alerts.to_string(), Tone::Amber, false),
            item("LATENCY", stats.network_latency.clone(), Tone::Green, false),
        ],
        system_status: "OPERATIONAL".to_string(),
    }
}
