//! Map projection capability: geographic ↔ screen conversion and pan/zoom state.
//!
//! The frontend map provider draws with the same named projection; the
//! coordinator needs its own copy only for hit-testing clicks and drags.

use glam::DVec2;

use spectre_core::constants::PROJECTION_NAME;
use spectre_core::state::ViewportView;
use spectre_core::types::GeoCoord;

use crate::config::ViewportConfig;

/// Newton iterations for inverting the latitude polynomial.
const INVERT_ITERATIONS: usize = 25;
const INVERT_EPSILON: f64 = 1e-9;

/// A unit-scale map projection. Projected y points north.
pub trait Projector {
    /// Name understood by the frontend map provider.
    fn name(&self) -> &'static str;

    fn project(&self, coord: GeoCoord) -> DVec2;

    fn invert(&self, point: DVec2) -> GeoCoord;
}

/// Natural Earth I (Šavrič et al.), polynomial form.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalEarth;

impl Projector for NaturalEarth {
    fn name(&self) -> &'static str {
        PROJECTION_NAME
    }

    fn project(&self, coord: GeoCoord) -> DVec2 {
        let lambda = coord.lng.to_radians();
        let phi = coord.lat.to_radians();
        let phi2 = phi * phi;
        let phi4 = phi2 * phi2;
        DVec2::new(
            lambda
                * (0.8707 - 0.131979 * phi2
                    + phi4 * (-0.013791 + phi4 * (0.003971 * phi2 - 0.001529 * phi4))),
            phi * (1.007226
                + phi2 * (0.015085 + phi4 * (-0.044475 + 0.028874 * phi2 - 0.005916 * phi4))),
        )
    }

    fn invert(&self, point: DVec2) -> GeoCoord {
        let mut phi = point.y;
        for _ in 0..INVERT_ITERATIONS {
            let phi2 = phi * phi;
            let phi4 = phi2 * phi2;
            let y = phi
                * (1.007226
                    + phi2 * (0.015085 + phi4 * (-0.044475 + 0.028874 * phi2 - 0.005916 * phi4)));
            let dy = 1.007226
                + phi2
                    * (0.015085 * 3.0
                        + phi4
                            * (-0.044475 * 7.0 + 0.028874 * 9.0 * phi2
                                - 0.005916 * 11.0 * phi4));
            let delta = (y - point.y) / dy;
            phi -= delta;
            if delta.abs() < INVERT_EPSILON {
                break;
            }
        }
        let phi2 = phi * phi;
        let x_scale = 0.8707
            + phi2 * (-0.131979 + phi2 * (-0.013791 + phi2 * phi2 * phi2 * (0.003971 - 0.001529 * phi2)));
        GeoCoord::new((point.x / x_scale).to_degrees(), phi.to_degrees())
    }
}

/// Pan/zoom state over a projection.
///
/// Screen space is `width × height` with y down; the center coordinate sits
/// at the middle of the canvas.
#[derive(Debug, Clone)]
pub struct Viewport<P: Projector = NaturalEarth> {
    projector: P,
    scale: f64,
    size: DVec2,
    center: GeoCoord,
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
}

impl Viewport<NaturalEarth> {
    pub fn from_config(config: &ViewportConfig) -> Self {
        Self::new(NaturalEarth, config)
    }
}

impl<P: Projector> Viewport<P> {
    pub fn new(projector: P, config: &ViewportConfig) -> Self {
        let mut viewport = Self {
            projector,
            scale: config.scale,
            size: DVec2::new(config.width, config.height),
            center: config.center,
            zoom: config.zoom,
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
        };
        viewport.move_to(config.center, config.zoom);
        viewport
    }

    pub fn center(&self) -> GeoCoord {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    fn pixels_per_unit(&self) -> f64 {
        self.scale * self.zoom
    }

    pub fn to_screen(&self, coord: GeoCoord) -> DVec2 {
        let d = (self.projector.project(coord) - self.projector.project(self.center))
            * self.pixels_per_unit();
        self.size / 2.0 + DVec2::new(d.x, -d.y)
    }

    pub fn to_geo(&self, screen: DVec2) -> GeoCoord {
        let offset = screen - self.size / 2.0;
        let d = DVec2::new(offset.x, -offset.y) / self.pixels_per_unit();
        self.projector
            .invert(self.projector.project(self.center) + d)
    }

    /// Set center and zoom as reported by a finished gesture. Zoom is clamped,
    /// latitude is clamped to the poles and longitude wrapped.
    pub fn move_to(&mut self, center: GeoCoord, zoom: f64) {
        self.center = normalize(center);
        if zoom.is_finite() {
            self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        }
    }

    /// Drag the map content by a screen delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        let target = self.size / 2.0 - DVec2::new(dx, dy);
        let center = self.to_geo(target);
        if center.lng.is_finite() && center.lat.is_finite() {
            self.center = normalize(center);
        }
    }

    /// Multiply the zoom factor. Non-positive factors are ignored.
    pub fn zoom_by(&mut self, factor: f64) {
        if factor.is_finite() && factor > 0.0 {
            self.zoom = (self.zoom * factor).clamp(self.min_zoom, self.max_zoom);
        }
    }

    pub fn view(&self) -> ViewportView {
        ViewportView {
            projection: self.projector.name().to_string(),
            scale: self.scale,
            center: self.center,
            zoom: self.zoom,
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
        }
    }
}

fn normalize(coord: GeoCoord) -> GeoCoord {
    GeoCoord::new(
        (coord.lng + 180.0).rem_euclid(360.0) - 180.0,
        coord.lat.clamp(-90.0, 90.0),
    )
}
