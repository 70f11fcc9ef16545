//! Data-stream routes and agent uplink arcs.
//!
//! Both are dashed lines whose offset advances with the tick, so the dashes
//! appear to flow from origin to destination.

use spectre_core::constants::*;
use spectre_core::primitives::{Dash, Element, GeoPath, Stroke};

use super::SceneContext;

const STREAM_WIDTH: f64 = 0.6;
const ARC_WIDTH: f64 = 0.5;
const ARC_WIDTH_SELECTED: f64 = 1.2;
const ARC_OPACITY: f64 = 0.15;
const ARC_OPACITY_SELECTED: f64 = 0.6;

/// Dash offset of stream `index` at tick `t`.
pub fn stream_dash_offset(t: f64, index: usize) -> f64 {
    t * STREAM_DASH_SPEED + index as f64 * STREAM_INDEX_OFFSET
}

pub fn data_streams(ctx: &SceneContext) -> Vec<Element> {
    let opacity = if ctx.zone_active() {
        DIMMED_LINK_OPACITY
    } else {
        STREAM_OPACITY
    };
    DATA_STREAMS
        .iter()
        .enumerate()
        .map(|(i, stream)| {
            Element::Path(GeoPath {
                key: format!("stream-{i}"),
                points: vec![stream.from, stream.to],
                stroke: Stroke::new(stream.tone, STREAM_WIDTH, opacity).dashed(Dash::new(
                    4.0,
                    6.0,
                    stream_dash_offset(ctx.t(), i),
                )),
                fill: None,
            })
        })
        .collect()
}

/// One arc from HQ to every agent with a live uplink.
pub fn agent_arcs(ctx: &SceneContext) -> Vec<Element> {
    let zone_active = ctx.zone_active();
    ctx.data
        .agents
        .iter()
        .filter(|agent| agent.status.has_uplink())
        .map(|agent| {
            let selected = ctx.selection.is_agent_selected(&agent.id);
            let (width, opacity) = match (selected, zone_active) {
                (true, _) => (ARC_WIDTH_SELECTED, ARC_OPACITY_SELECTED),
                (false, true) => (ARC_WIDTH, DIMMED_LINK_OPACITY),
                (false, false) => (ARC_WIDTH, ARC_OPACITY),
            };
            Element::Path(GeoPath {
                key: format!("arc-{}", agent.id),
                points: vec![HQ, agent.location.coord()],
                stroke: Stroke::new(agent.status.tone(), width, opacity).dashed(Dash::new(
                    2.0,
                    4.0,
                    ctx.t() * STREAM_DASH_SPEED,
                )),
                fill: None,
            })
        })
        .collect()
}
