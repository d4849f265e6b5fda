//! Viewport commands and a slippy-map viewport that obeys them.
//!
//! - `ViewportController`: the two commands renderers issue (`center`, `fit`).
//!   Each call fully supersedes the view left by the previous one.
//! - `Viewport`: Web Mercator, 256 px tiles, integer zoom; `fit` picks the
//!   largest zoom at which the box fits inside the padded viewport.

use nalgebra::Vector2;
use serde::Serialize;
use std::f64::consts::PI;

use crate::geo::{BoundingBox, GeoPoint};

/// Pixel size of one tile at zoom 0.
pub const TILE_SIZE: f64 = 256.0;
/// Web Mercator latitude limit.
pub const MAX_MERCATOR_LAT: f64 = 85.051_128_78;

/// Commands renderers send to whatever owns the visible map region.
pub trait ViewportController {
    /// Move to `point` at `zoom`.
    fn center(&mut self, point: GeoPoint, zoom: u8);
    /// Pan/zoom so `bounds` is fully visible.
    fn fit(&mut self, bounds: BoundingBox);
}

impl<T: ViewportController + ?Sized> ViewportController for &mut T {
    fn center(&mut self, point: GeoPoint, zoom: u8) {
        (**self).center(point, zoom)
    }
    fn fit(&mut self, bounds: BoundingBox) {
        (**self).fit(bounds)
    }
}

/// Project to normalized Web Mercator: x, y ∈ [0,1], y grows southwards.
pub fn project(p: GeoPoint) -> Vector2<f64> {
    let lat = p.lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT).to_radians();
    let x = (p.lng + 180.0) / 360.0;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0;
    Vector2::new(x, y)
}

/// Inverse of [`project`].
pub fn unproject(v: Vector2<f64>) -> GeoPoint {
    let lng = v.x * 360.0 - 180.0;
    let n = PI * (1.0 - 2.0 * v.y);
    GeoPoint::new(n.sinh().atan().to_degrees(), lng)
}

/// Visible map region.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Viewport {
    center: GeoPoint,
    zoom: u8,
    /// Width and height in pixels.
    pub size: (f64, f64),
    pub min_zoom: u8,
    pub max_zoom: u8,
    /// The center never leaves this box.
    pub max_bounds: BoundingBox,
    /// Pixels kept free on every side when fitting.
    pub padding: f64,
}

impl Viewport {
    pub fn new(size: (f64, f64), center: GeoPoint, zoom: u8) -> Self {
        let mut vp = Self {
            center,
            zoom,
            size,
            min_zoom: 0,
            max_zoom: 18,
            max_bounds: BoundingBox::WORLD,
            padding: 0.0,
        };
        vp.set_view(center, zoom);
        vp
    }

    pub fn center_point(&self) -> GeoPoint {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    fn set_view(&mut self, point: GeoPoint, zoom: u8) {
        self.center = self.max_bounds.clamp(point);
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom.max(self.min_zoom));
    }

    /// Largest integer zoom at which `bounds` fits; `max_zoom` for a point.
    pub fn bounds_zoom(&self, bounds: &BoundingBox) -> u8 {
        let sw = project(bounds.south_west);
        let ne = project(bounds.north_east);
        let span = (ne - sw).abs();
        let avail = Vector2::new(
            (self.size.0 - 2.0 * self.padding).max(1.0),
            (self.size.1 - 2.0 * self.padding).max(1.0),
        );
        let fit_axis = |avail: f64, span: f64| {
            if span <= f64::EPSILON {
                f64::INFINITY
            } else {
                avail / (span * TILE_SIZE)
            }
        };
        let scale = fit_axis(avail.x, span.x).min(fit_axis(avail.y, span.y));
        let max_zoom = self.max_zoom.max(self.min_zoom);
        if !scale.is_finite() {
            return max_zoom;
        }
        let z = scale.log2().floor();
        z.clamp(self.min_zoom as f64, max_zoom as f64) as u8
    }

    /// Visible box at the current center and zoom.
    pub fn visible_bounds(&self) -> BoundingBox {
        let world_px = TILE_SIZE * 2f64.powi(self.zoom as i32);
        let half = Vector2::new(self.size.0, self.size.1) / (2.0 * world_px);
        let c = project(self.center);
        BoundingBox::new(
            unproject(Vector2::new(c.x - half.x, (c.y + half.y).min(1.0))),
            unproject(Vector2::new(c.x + half.x, (c.y - half.y).max(0.0))),
        )
    }
}

impl ViewportController for Viewport {
    fn center(&mut self, point: GeoPoint, zoom: u8) {
        tracing::trace!(lat = point.lat, lng = point.lng, zoom, "viewport center");
        self.set_view(point, zoom);
    }

    fn fit(&mut self, bounds: BoundingBox) {
        let zoom = self.bounds_zoom(&bounds);
        let mid = (project(bounds.south_west) + project(bounds.north_east)) * 0.5;
        let center = unproject(mid);
        tracing::trace!(lat = center.lat, lng = center.lng, zoom, "viewport fit");
        self.set_view(center, zoom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new((1024.0, 768.0), GeoPoint::new(25.95681, -35.729687), 2)
    }

    #[test]
    fn project_round_trip() {
        for p in [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(48.1, 11.6),
            GeoPoint::new(-33.9, 151.2),
        ] {
            let q = unproject(project(p));
            assert!((q.lat - p.lat).abs() < 1e-9 && (q.lng - p.lng).abs() < 1e-9);
        }
        let origin = project(GeoPoint::new(0.0, 0.0));
        assert!((origin.x - 0.5).abs() < 1e-12 && (origin.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn center_clamps_zoom_and_position() {
        let mut vp = viewport();
        vp.center(GeoPoint::new(48.1, 11.6), 7);
        assert_eq!(vp.center_point(), GeoPoint::new(48.1, 11.6));
        assert_eq!(vp.zoom(), 7);
        vp.center(GeoPoint::new(120.0, 200.0), 30);
        assert_eq!(vp.center_point(), GeoPoint::new(90.0, 180.0));
        assert_eq!(vp.zoom(), 18);
    }

    #[test]
    fn fit_small_box_zooms_in_and_centers() {
        let mut vp = viewport();
        let bb = BoundingBox::new(GeoPoint::new(0.0, 0.0), GeoPoint::new(3.0, 3.0));
        vp.fit(bb);
        assert_eq!(vp.zoom(), 8);
        let c = vp.center_point();
        assert!((c.lng - 1.5).abs() < 1e-9);
        assert!((c.lat - 1.5).abs() < 1e-2);
        let visible = vp.visible_bounds();
        assert!(visible.contains(bb.south_west) && visible.contains(bb.north_east));
    }

    #[test]
    fn fit_world_zooms_out() {
        let mut vp = viewport();
        vp.fit(BoundingBox::WORLD);
        // 768 px tall viewport holds the 512 px world at zoom 1, not 1024 px at zoom 2
        assert_eq!(vp.zoom(), 1);
    }

    #[test]
    fn fit_single_point_uses_max_zoom() {
        let mut vp = viewport();
        vp.fit(BoundingBox::from_point(GeoPoint::new(10.0, 10.0)));
        assert_eq!(vp.zoom(), vp.max_zoom);
    }

    #[test]
    fn padding_can_only_lower_zoom() {
        let bb = BoundingBox::new(GeoPoint::new(40.0, -10.0), GeoPoint::new(55.0, 20.0));
        let plain = viewport().bounds_zoom(&bb);
        let mut padded = viewport();
        padded.padding = 200.0;
        assert!(padded.bounds_zoom(&bb) <= plain);
    }
}
