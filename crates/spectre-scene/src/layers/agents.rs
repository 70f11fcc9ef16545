//! Agent markers and their label cards.

use glam::DVec2;

use spectre_core::entities::Agent;
use spectre_core::enums::Tone;
use spectre_core::primitives::{Dash, Element, Glyph, MapMarker, PointerTarget, Stroke};

use super::SceneContext;
use crate::clock::oscillate;

const DOT_RADIUS: f64 = 2.2;
const DOT_RADIUS_EMPHASIS: f64 = 3.0;
const DOT_RADIUS_SELECTED: f64 = 3.5;
const MISSION_RING_RADIUS: f64 = 12.0;
const SELECTION_RING_RADIUS: f64 = 10.0;

#[derive(Debug, Clone, Default)]
pub struct AgentScene {
    pub markers: Vec<Element>,
    /// Label cards of the selected and hovered agents.
    pub labels: Vec<Element>,
}

pub fn build(ctx: &SceneContext) -> AgentScene {
    let mut scene = AgentScene::default();
    for agent in &ctx.data.agents {
        scene.markers.push(Element::Marker(agent_marker(ctx, agent)));
        let selected = ctx.selection.is_agent_selected(&agent.id);
        if selected || ctx.hover.is_agent_hovered(&agent.id) {
            scene.labels.push(Element::Marker(label_card(agent)));
        }
    }
    scene
}

/// Dot radius: selection beats hover beats mission membership.
pub fn dot_radius(selected: bool, hovered: bool, mission_agent: bool) -> f64 {
    if selected {
        DOT_RADIUS_SELECTED
    } else if hovered || mission_agent {
        DOT_RADIUS_EMPHASIS
    } else {
        DOT_RADIUS
    }
}

fn agent_marker(ctx: &SceneContext, agent: &Agent) -> MapMarker {
    let t = ctx.t();
    let tone = agent.status.tone();
    let dark = agent.status.is_dark();
    let selected = ctx.selection.is_agent_selected(&agent.id);
    let hovered = ctx.hover.is_agent_hovered(&agent.id);
    let mission = ctx
        .selected_mission()
        .filter(|mission| mission.is_assigned(&agent.id));

    let mut marker = MapMarker::new(format!("agent-{}", agent.id), agent.location.coord())
        .with_target(PointerTarget::Agent {
            agent_id: agent.id.clone(),
        });

    if !dark {
        marker.push(Glyph::circle(oscillate(4.0, 2.0, t, 0.06, 0.0)).stroked(Stroke::new(
            tone,
            0.5,
            oscillate(0.2, 0.1, t, 0.06, 0.0),
        )));
        marker.push(
            Glyph::circle(oscillate(7.0, 3.0, t, 0.04, 1.0)).stroked(Stroke::new(tone, 0.3, 0.1)),
        );
    }

    if let Some(mission) = mission {
        marker.push(
            Glyph::circle(MISSION_RING_RADIUS).stroked(
                Stroke::new(
                    mission.priority.zone_tone(),
                    0.6,
                    oscillate(0.4, 0.2, t, 0.08, 0.0),
                )
                .dashed(Dash::new(2.0, 1.5, t * 0.4)),
            ),
        );
    }

    if selected {
        marker.push(Glyph::circle(SELECTION_RING_RADIUS).filled(tone, 0.05));
        marker.push(
            Glyph::circle(SELECTION_RING_RADIUS)
                .stroked(Stroke::new(tone, 0.8, 0.5).dashed(Dash::new(2.0, 2.0, t * 0.3))),
        );
    }

    marker.push(
        Glyph::circle(dot_radius(selected, hovered, mission.is_some()))
            .filled(tone, if dark { 0.3 } else { 0.9 }),
    );
    marker.push(Glyph::circle(1.0).filled(Tone::White, if dark { 0.1 } else { 0.4 }));
    marker
}

/// Floating card: codename, city and status, coordinates.
fn label_card(agent: &Agent) -> MapMarker {
    let tone = agent.status.tone();
    let mut card = MapMarker::new(format!("agent-card-{}", agent.id), agent.location.coord());
    card.push(
        Glyph::rect(DVec2::new(6.0, -14.0), DVec2::new(55.0, 22.0))
            .rounded(1.5)
            .filled(Tone::Panel, 0.95)
            .stroked(Stroke::new(tone, 0.5, 0.95)),
    );
    card.push(
        Glyph::polygon(vec![
            DVec2::new(5.0, -5.0),
            DVec2::new(6.0, -3.0),
            DVec2::new(6.0, -7.0),
        ])
        .filled(Tone::Panel, 1.0)
        .stroked(Stroke::new(tone, 0.3, 1.0)),
    );
    card.push(
        Glyph::text(DVec2::new(10.0, -5.0), agent.codename.clone(), 4.0)
            .bold()
            .filled(tone, 1.0),
    );
    card.push(
        Glyph::text(
            DVec2::new(10.0, 1.0),
            format!("{} // {}", agent.location.city, agent.status.label()),
            2.8,
        )
        .filled(Tone::Gray, 1.0),
    );
    card.push(
        Glyph::text(DVec2::new(10.0, 5.0), agent.location.coord().readout(2), 2.5)
            .filled(Tone::Gray, 1.0),
    );
    card
}
