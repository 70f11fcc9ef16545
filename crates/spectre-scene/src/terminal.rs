//! Scripted log player for the crypto terminal.
//!
//! The player is a pure function of time since activation: line `i` is
//! revealed once `elapsed >= lead_in + offset_i`, all lines clear when the
//! cycle ends, and the schedule restarts after a short pause. There are no
//! pending callbacks, so teardown is just forgetting the activation instant.

use spectre_core::constants::TERMINAL_SCRIPT;
use spectre_core::enums::LineStyle;
use spectre_core::state::{TerminalLineView, TerminalPhase, TerminalView};

use crate::config::TerminalConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    pub text: String,
    pub offset_ms: u64,
    pub style: LineStyle,
}

/// Cycle timing of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerTiming {
    /// Time from activation until the revealed lines are cleared.
    pub cycle_ms: u64,
    /// Pause between clearing and replaying.
    pub restart_pause_ms: u64,
    /// Added to every line offset.
    pub lead_in_ms: u64,
}

impl Default for PlayerTiming {
    fn default() -> Self {
        Self {
            cycle_ms: 8000,
            restart_pause_ms: 300,
            lead_in_ms: 0,
        }
    }
}

impl From<&TerminalConfig> for PlayerTiming {
    fn from(config: &TerminalConfig) -> Self {
        Self {
            cycle_ms: config.cycle_ms,
            restart_pause_ms: config.restart_pause_ms,
            lead_in_ms: config.lead_in_ms,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScriptedLogPlayer {
    /// Sorted by offset; equal offsets keep script order.
    script: Vec<ScriptLine>,
    timing: PlayerTiming,
    activated_at_ms: Option<u64>,
}

impl ScriptedLogPlayer {
    pub fn new<S: Into<String>>(
        script: impl IntoIterator<Item = (S, u64)>,
        timing: PlayerTiming,
    ) -> Self {
        let mut script: Vec<ScriptLine> = script
            .into_iter()
            .map(|(text, offset_ms)| {
                let text = text.into();
                ScriptLine {
                    style: LineStyle::classify(&text),
                    text,
                    offset_ms,
                }
            })
            .collect();
        script.sort_by_key(|line| line.offset_ms);
        Self {
            script,
            timing,
            activated_at_ms: None,
        }
    }

    /// The builtin crypto terminal.
    pub fn crypto_terminal(config: &TerminalConfig) -> Self {
        Self::new(TERMINAL_SCRIPT, PlayerTiming::from(config))
    }

    pub fn script(&self) -> &[ScriptLine] {
        &self.script
    }

    pub fn timing(&self) -> PlayerTiming {
        self.timing
    }

    /// Begin playing from `now_ms`. Restarting resets the schedule.
    pub fn activate(&mut self, now_ms: u64) {
        self.activated_at_ms = Some(now_ms);
    }

    /// Tear down: back to idle with nothing scheduled.
    pub fn deactivate(&mut self) {
        self.activated_at_ms = None;
    }

    pub fn is_active(&self) -> bool {
        self.activated_at_ms.is_some()
    }

    /// Lines revealed `elapsed_ms` into a cycle.
    pub fn revealed_count(&self, elapsed_ms: u64) -> usize {
        if elapsed_ms >= self.timing.cycle_ms {
            return 0;
        }
        self.script
            .iter()
            .take_while(|line| self.timing.lead_in_ms.saturating_add(line.offset_ms) <= elapsed_ms)
            .count()
    }

    /// Full period of one reveal cycle plus the restart pause. The pause
    /// lasts at least 1 ms so the cleared view is always observable.
    pub fn period_ms(&self) -> u64 {
        self.timing
            .cycle_ms
            .saturating_add(self.timing.restart_pause_ms.max(1))
    }

    /// Phase `elapsed_ms` after activation.
    pub fn phase_at(&self, elapsed_ms: u64) -> TerminalPhase {
        let into_cycle = elapsed_ms % self.period_ms();
        if into_cycle < self.timing.cycle_ms {
            TerminalPhase::Playing {
                revealed: self.revealed_count(into_cycle),
            }
        } else {
            TerminalPhase::Resetting
        }
    }

    /// Phase at the absolute time `now_ms`.
    pub fn phase(&self, now_ms: u64) -> TerminalPhase {
        match self.activated_at_ms {
            Some(start) => self.phase_at(now_ms.saturating_sub(start)),
            None => TerminalPhase::Idle,
        }
    }

    pub fn view(&self, now_ms: u64) -> TerminalView {
        let phase = self.phase(now_ms);
        let revealed = match phase {
            TerminalPhase::Playing { revealed } => revealed,
            TerminalPhase::Idle | TerminalPhase::Resetting => 0,
        };
        TerminalView {
            phase,
            lines: self.script[..revealed]
                .iter()
                .map(|line| TerminalLineView {
                    text: line.text.clone(),
                    style: line.style,
                    tone: line.style.tone(),
                })
                .collect(),
        }
    }
}
