//! Dashboard coordinator.
//!
//! `DashboardEngine` owns the only mutable state of the dashboard (animation
//! clock, selection, hover, viewport, periodic counters), applies operator
//! commands at tick boundaries, and produces `DashboardSnapshot`s. It has
//! no Tauri dependency, so the whole dashboard can be driven from tests.

use std::collections::VecDeque;

use glam::DVec2;

use spectre_core::commands::DashboardCommand;
use spectre_core::entities::Dataset;
use spectre_core::primitives::Layer;
use spectre_core::state::DashboardSnapshot;
use spectre_core::types::{AgentId, FrameTime, MissionId};

use crate::chrome;
use crate::clock::AnimationClock;
use crate::config::{ConfigError, DashboardConfig};
use crate::hover::HoverState;
use crate::layers::{self, SceneContext};
use crate::panels;
use crate::projection::Viewport;
use crate::radar;
use crate::selection::SelectionState;
use crate::stats::{self, InterceptionJitter};
use crate::terminal::ScriptedLogPlayer;
use crate::topbar::TopBarClock;

pub struct DashboardEngine {
    config: DashboardConfig,
    data: Dataset,
    clock: AnimationClock,
    selection: SelectionState,
    hover: HoverState,
    viewport: Viewport,
    terminal: ScriptedLogPlayer,
    interceptions: InterceptionJitter,
    top_bar: TopBarClock,
    command_queue: VecDeque<DashboardCommand>,
}

impl DashboardEngine {
    /// Create a running dashboard over `data`.
    ///
    /// Fails if the config would stall a timer or invert the zoom range.
    /// Fixture issues are logged and otherwise ignored.
    pub fn new(config: DashboardConfig, data: Dataset) -> Result<Self, ConfigError> {
        config.check()?;
        for issue in data.validate() {
            tracing::warn!(target: "spectre::fixtures", %issue, "fixture.issue");
        }

        let mut clock = AnimationClock::new(config.tick_period_ms);
        clock.start();
        let mut terminal = ScriptedLogPlayer::crypto_terminal(&config.terminal);
        terminal.activate(0);

        tracing::info!(
            target: "spectre::engine",
            agents = data.agents.len(),
            missions = data.missions.len(),
            tick_period_ms = config.tick_period_ms,
            "dashboard.started"
        );

        Ok(Self {
            viewport: Viewport::from_config(&config.viewport),
            interceptions: InterceptionJitter::new(
                config.seed,
                config.stats.jitter_period_ms,
                data.system_stats.active_interceptions,
            ),
            top_bar: TopBarClock::from_unix(config.started_at_unix, config.clock.refresh_ms),
            clock,
            terminal,
            selection: SelectionState::new(),
            hover: HoverState::default(),
            command_queue: VecDeque::new(),
            config,
            data,
        })
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: DashboardCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = DashboardCommand>) {
        self.command_queue.extend(commands);
    }

    /// Apply queued commands, advance one tick and return the snapshot.
    pub fn tick(&mut self) -> DashboardSnapshot {
        self.process_commands();
        if self.clock.advance() {
            self.interceptions.advance_to(self.clock.time().elapsed_ms);
        }
        self.snapshot()
    }

    /// Tear down: the clock stops advancing and the terminal goes idle.
    /// Commands are still applied.
    pub fn stop(&mut self) {
        if self.clock.is_running() {
            self.clock.stop();
            self.terminal.deactivate();
            tracing::info!(
                target: "spectre::engine",
                tick = self.clock.tick(),
                "dashboard.stopped"
            );
        }
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn time(&self) -> FrameTime {
        self.clock.time()
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn data(&self) -> &Dataset {
        &self.data
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Map layers at an arbitrary tick under the current selection and hover.
    pub fn layers_at(&self, tick: u64) -> Vec<Layer> {
        layers::build_layers(&SceneContext::new(
            &self.data,
            tick,
            &self.selection,
            &self.hover,
        ))
    }

    /// Snapshot of the current state without advancing.
    pub fn snapshot(&self) -> DashboardSnapshot {
        let time = self.clock.time();
        let ctx = SceneContext::new(&self.data, time.tick, &self.selection, &self.hover);
        let viewport = self.viewport.view();

        DashboardSnapshot {
            time,
            selection: self.selection.view(),
            hover: self.hover.view(),
            layers: layers::build_layers(&ctx),
            chrome: chrome::map_chrome(&ctx, &viewport),
            viewport,
            top_bar: self.top_bar.view(time.elapsed_ms, &self.data.system_stats),
            stats: stats::stats_bar(&self.data.system_stats, self.interceptions.value()),
            roster: panels::roster(&self.data, &self.selection),
            dossier: panels::dossier(&self.data, &self.selection),
            briefing: panels::briefing(&self.data, &self.selection),
            threat_feed: panels::threat_feed(&self.data),
            satellites: panels::satellite_panel(&self.data),
            terminal: self.terminal.view(time.elapsed_ms),
            radar: radar::radar(time.elapsed_ms),
        }
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: DashboardCommand) {
        match command {
            DashboardCommand::SelectAgent { agent_id } => {
                if self.known_agent(&agent_id) {
                    self.selection.select_agent(agent_id);
                }
            }
            DashboardCommand::SelectMission { mission_id } => {
                if self.known_mission(&mission_id) {
                    self.selection.select_mission(mission_id);
                    self.hover.intel = None;
                }
            }
            DashboardCommand::ClearAgent => self.selection.clear_agent(),
            DashboardCommand::ClearMission => {
                self.selection.clear_mission();
                self.hover.intel = None;
            }
            DashboardCommand::HoverAgent { agent_id } => match agent_id {
                Some(id) if !self.known_agent(&id) => {}
                other => self.hover.agent = other,
            },
            DashboardCommand::HoverIntel { index } => {
                let in_range = |i: usize| {
                    self.selection
                        .mission()
                        .and_then(|id| self.data.mission(id))
                        .is_some_and(|m| i < m.intel_markers.len())
                };
                match index {
                    Some(i) if !in_range(i) => {
                        tracing::debug!(target: "spectre::engine", index = i, "hover.intel_ignored");
                    }
                    other => self.hover.intel = other,
                }
            }
            DashboardCommand::HoverCountry { name, x, y } => self.hover.set_country(name, x, y),
            DashboardCommand::ClickMap { x, y } => {
                if let Some(agent_id) = self.pick_agent(DVec2::new(x, y)) {
                    self.selection.select_agent(agent_id);
                }
            }
            DashboardCommand::MoveViewport { center, zoom } => self.viewport.move_to(center, zoom),
            DashboardCommand::PanBy { dx, dy } => self.viewport.pan_by(dx, dy),
            DashboardCommand::ZoomBy { factor } => self.viewport.zoom_by(factor),
        }
    }

    /// Nearest agent marker within the pick radius of a screen point.
    fn pick_agent(&self, screen: DVec2) -> Option<AgentId> {
        let radius = self.config.viewport.pick_radius;
        self.data
            .agents
            .iter()
            .map(|agent| {
                let d = self.viewport.to_screen(agent.location.coord()).distance(screen);
                (agent, d)
            })
            .filter(|(_, d)| *d <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(agent, _)| agent.id.clone())
    }

    fn known_agent(&self, id: &AgentId) -> bool {
        let known = self.data.agent(id).is_some();
        if !known {
            tracing::warn!(target: "spectre::engine", agent = %id, "command.unknown_agent");
        }
        known
    }

    fn known_mission(&self, id: &MissionId) -> bool {
        let known = self.data.mission(id).is_some();
        if !known {
            tracing::warn!(target: "spectre::engine", mission = %id, "command.unknown_mission");
        }
        known
    }
}
