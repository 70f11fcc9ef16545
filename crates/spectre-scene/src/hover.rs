//! Pointer hover state reported by the map provider.

use spectre_core::state::{HoverView, TooltipView};
use spectre_core::types::AgentId;

/// Offset of the country tooltip from the pointer, screen units.
const TOOLTIP_OFFSET_X: f64 = 12.0;
const TOOLTIP_OFFSET_Y: f64 = -8.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CountryHover {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoverState {
    pub agent: Option<AgentId>,
    /// Index into the selected mission's intel markers.
    pub intel: Option<usize>,
    pub country: Option<CountryHover>,
}

impl HoverState {
    pub fn is_agent_hovered(&self, id: &AgentId) -> bool {
        self.agent.as_ref() == Some(id)
    }

    pub fn is_intel_hovered(&self, index: usize) -> bool {
        self.intel == Some(index)
    }

    pub fn set_country(&mut self, name: Option<String>, x: f64, y: f64) {
        self.country = name.map(|name| CountryHover { name, x, y });
    }

    pub fn view(&self) -> HoverView {
        HoverView {
            agent_id: self.agent.clone(),
            intel_index: self.intel,
        }
    }

    pub fn tooltip(&self) -> Option<TooltipView> {
        self.country.as_ref().map(|c| TooltipView {
            text: c.name.clone(),
            x: c.x + TOOLTIP_OFFSET_X,
            y: c.y + TOOLTIP_OFFSET_Y,
        })
    }
}
