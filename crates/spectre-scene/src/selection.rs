//! Selection controller.
//!
//! Each selection slot is a two-state machine (`Empty` / `Selected(id)`)
//! driven by a single transition function. Agent and mission slots are
//! independent.

use spectre_core::state::SelectionView;
use spectre_core::types::{AgentId, MissionId};

/// One selection slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Slot<T> {
    #[default]
    Empty,
    Selected(T),
}

/// Input to a slot transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotEvent<T> {
    /// Select `id`, or clear if `id` is already selected.
    Toggle(T),
    Clear,
}

impl<T: PartialEq> Slot<T> {
    /// The only way a slot changes. A different id replaces the current one
    /// directly, with no intermediate empty state.
    pub fn transition(self, event: SlotEvent<T>) -> Self {
        match (self, event) {
            (Slot::Selected(current), SlotEvent::Toggle(id)) if current == id => Slot::Empty,
            (_, SlotEvent::Toggle(id)) => Slot::Selected(id),
            (_, SlotEvent::Clear) => Slot::Empty,
        }
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            Slot::Selected(id) => Some(id),
            Slot::Empty => None,
        }
    }

    pub fn is(&self, id: &T) -> bool {
        self.get() == Some(id)
    }
}

/// Selected agent and mission. Owned by the engine; read-only elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    agent: Slot<AgentId>,
    mission: Slot<MissionId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_agent(&mut self, id: AgentId) {
        self.apply_agent(SlotEvent::Toggle(id));
    }

    pub fn select_mission(&mut self, id: MissionId) {
        self.apply_mission(SlotEvent::Toggle(id));
    }

    pub fn clear_agent(&mut self) {
        self.apply_agent(SlotEvent::Clear);
    }

    pub fn clear_mission(&mut self) {
        self.apply_mission(SlotEvent::Clear);
    }

    pub fn agent(&self) -> Option<&AgentId> {
        self.agent.get()
    }

    pub fn mission(&self) -> Option<&MissionId> {
        self.mission.get()
    }

    pub fn is_agent_selected(&self, id: &AgentId) -> bool {
        self.agent.is(id)
    }

    pub fn is_mission_selected(&self, id: &MissionId) -> bool {
        self.mission.is(id)
    }

    pub fn view(&self) -> SelectionView {
        SelectionView {
            agent_id: self.agent().cloned(),
            mission_id: self.mission().cloned(),
        }
    }

    fn apply_agent(&mut self, event: SlotEvent<AgentId>) {
        let next = std::mem::take(&mut self.agent).transition(event);
        tracing::debug!(
            target: "spectre::selection",
            agent = ?next.get().map(AgentId::as_str),
            "selection.agent"
        );
        self.agent = next;
    }

    fn apply_mission(&mut self, event: SlotEvent<MissionId>) {
        let next = std::mem::take(&mut self.mission).transition(event);
        tracing::debug!(
            target: "spectre::selection",
            mission = ?next.get().map(MissionId::as_str),
            "selection.mission"
        );
        self.mission = next;
    }
}
