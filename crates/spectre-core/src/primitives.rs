//! Drawing primitives for the map overlay.
//!
//! Markers are anchored at a geographic coordinate and carry glyphs in
//! marker-local units (pixels at zoom 1, y down). Lines are drawn in
//! geographic space and projected by the map provider.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{LayerKind, Tone};
use crate::types::{AgentId, GeoCoord, MissionId};

/// Dash pattern with an animated offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dash {
    pub on: f64,
    pub off: f64,
    pub offset: f64,
}

impl Dash {
    pub fn new(on: f64, off: f64, offset: f64) -> Self {
        Self { on, off, offset }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub tone: Tone,
    pub width: f64,
    pub opacity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash: Option<Dash>,
}

impl Stroke {
    pub fn new(tone: Tone, width: f64, opacity: f64) -> Self {
        Self {
            tone,
            width,
            opacity,
            dash: None,
        }
    }

    pub fn dashed(mut self, dash: Dash) -> Self {
        self.dash = Some(dash);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    pub tone: Tone,
    pub opacity: f64,
}

impl Fill {
    pub fn new(tone: Tone, opacity: f64) -> Self {
        Self { tone, opacity }
    }
}

/// Geometry of a glyph, relative to its marker anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Circle {
        center: DVec2,
        r: f64,
    },
    Rect {
        origin: DVec2,
        size: DVec2,
        /// Rotation about the anchor, degrees.
        rotation: f64,
        corner_radius: f64,
    },
    Polygon {
        points: Vec<DVec2>,
    },
    Segment {
        from: DVec2,
        to: DVec2,
    },
    Text {
        at: DVec2,
        text: String,
        size: f64,
        bold: bool,
        centered: bool,
    },
}

/// One styled shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    pub shape: Shape,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Fill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Stroke>,
}

impl Glyph {
    pub fn circle(r: f64) -> Self {
        Self::shape(Shape::Circle {
            center: DVec2::ZERO,
            r,
        })
    }

    pub fn circle_at(center: DVec2, r: f64) -> Self {
        Self::shape(Shape::Circle { center, r })
    }

    pub fn rect(origin: DVec2, size: DVec2) -> Self {
        Self::shape(Shape::Rect {
            origin,
            size,
            rotation: 0.0,
            corner_radius: 0.0,
        })
    }

    /// Square of side `side` centered on the anchor, rotated by `rotation` degrees.
    pub fn centered_square(side: f64, rotation: f64) -> Self {
        Self::shape(Shape::Rect {
            origin: DVec2::splat(-side / 2.0),
            size: DVec2::splat(side),
            rotation,
            corner_radius: 0.0,
        })
    }

    pub fn polygon(points: Vec<DVec2>) -> Self {
        Self::shape(Shape::Polygon { points })
    }

    pub fn segment(from: DVec2, to: DVec2) -> Self {
        Self::shape(Shape::Segment { from, to })
    }

    pub fn text(at: DVec2, text: impl Into<String>, size: f64) -> Self {
        Self::shape(Shape::Text {
            at,
            text: text.into(),
            size,
            bold: false,
            centered: false,
        })
    }

    fn shape(shape: Shape) -> Self {
        Self {
            shape,
            fill: None,
            stroke: None,
        }
    }

    pub fn filled(mut self, tone: Tone, opacity: f64) -> Self {
        self.fill = Some(Fill::new(tone, opacity));
        self
    }

    pub fn stroked(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Bold text. No effect on other shapes.
    pub fn bold(mut self) -> Self {
        if let Shape::Text { bold, .. } = &mut self.shape {
            *bold = true;
        }
        self
    }

    /// Horizontally centered text. No effect on other shapes.
    pub fn centered(mut self) -> Self {
        if let Shape::Text { centered, .. } = &mut self.shape {
            *centered = true;
        }
        self
    }

    /// Rounded rectangle corners. No effect on other shapes.
    pub fn rounded(mut self, r: f64) -> Self {
        if let Shape::Rect { corner_radius, .. } = &mut self.shape {
            *corner_radius = r;
        }
        self
    }
}

/// What a marker reports pointer events for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PointerTarget {
    Agent { agent_id: AgentId },
    Intel { mission_id: MissionId, index: usize },
}

/// A group of glyphs anchored at a coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    /// Stable key for the frontend diff (`"agent-007"`).
    pub key: String,
    pub anchor: GeoCoord,
    pub glyphs: Vec<Glyph>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<PointerTarget>,
}

impl MapMarker {
    pub fn new(key: impl Into<String>, anchor: GeoCoord) -> Self {
        Self {
            key: key.into(),
            anchor,
            glyphs: Vec::new(),
            target: None,
        }
    }

    pub fn with_target(mut self, target: PointerTarget) -> Self {
        self.target = Some(target);
        self
    }

    pub fn push(&mut self, glyph: Glyph) {
        self.glyphs.push(glyph);
    }
}

/// A stroked path in geographic space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPath {
    pub key: String,
    pub points: Vec<GeoCoord>,
    pub stroke: Stroke,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Fill>,
}

/// One drawable item of a layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// Country boundaries, rendered by the map provider from `source`.
    Boundaries {
        source: String,
        fill: Tone,
        stroke: Stroke,
        hover_fill: Tone,
    },
    /// Latitude/longitude grid.
    Graticule { step: f64, stroke: Stroke },
    Path(GeoPath),
    Marker(MapMarker),
}

impl Element {
    pub fn as_marker(&self) -> Option<&MapMarker> {
        match self {
            Element::Marker(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_path(&self) -> Option<&GeoPath> {
        match self {
            Element::Path(p) => Some(p),
            _ => None,
        }
    }
}

/// One z-ordered layer of the map scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub kind: LayerKind,
    pub elements: Vec<Element>,
}

impl Layer {
    pub fn markers(&self) -> impl Iterator<Item = &MapMarker> {
        self.elements.iter().filter_map(Element::as_marker)
    }

    pub fn paths(&self) -> impl Iterator<Item = &GeoPath> {
        self.elements.iter().filter_map(Element::as_path)
    }
}
