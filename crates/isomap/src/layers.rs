//! Layer containers the map engine reads for display.
//!
//! A `FeatureGroup` is created once per map surface and lives as long as it;
//! renderers replace its contents, never its identity. Mutation needs
//! `&mut`, so a reader can never observe a half-rebuilt group.

use serde::Serialize;

use crate::color::Color;
use crate::geo::{BoundingBox, GeoPoint};

/// Named drawing pane with a stacking order (higher draws on top).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Pane {
    pub name: &'static str,
    pub z_index: i32,
    pub opacity: f64,
}

impl Pane {
    /// Background tiles.
    pub const TILES: Pane = Pane {
        name: "tilePane",
        z_index: 200,
        opacity: 1.0,
    };
    /// Isochrone polygons: above tiles, below markers and controls.
    pub const ISOCHRONES: Pane = Pane {
        name: "isochronesPane",
        z_index: 450,
        opacity: 0.9,
    };
    pub const MARKERS: Pane = Pane {
        name: "markerPane",
        z_index: 600,
        opacity: 1.0,
    };
    pub const CONTROLS: Pane = Pane {
        name: "controlPane",
        z_index: 800,
        opacity: 1.0,
    };
}

/// Hover label attached to a marker.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tooltip {
    pub text: String,
    /// Shown only on hover when `false`.
    pub permanent: bool,
    pub open: bool,
}

/// Circle marker for the query center.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CircleMarker {
    pub position: GeoPoint,
    pub radius: f64,
    pub tooltip: Tooltip,
}

/// Path style of an isochrone polygon.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PolygonStyle {
    pub fill_color: Color,
    /// Border width in pixels.
    pub weight: f64,
    /// Border opacity.
    pub opacity: f64,
    /// Border color.
    pub color: Color,
    pub pane: &'static str,
}

/// One filled ring.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Polygon {
    /// Index of the isochrone group this ring belongs to.
    pub group: usize,
    pub ring: Vec<GeoPoint>,
    pub style: PolygonStyle,
}

/// Anything with a geographic extent.
pub trait Bounded {
    fn bounds(&self) -> Option<BoundingBox>;
}

impl Bounded for Polygon {
    fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.ring.iter().copied())
    }
}

/// Ordered, clearable collection of features.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureGroup<T> {
    items: Vec<T>,
}

impl<T> Default for FeatureGroup<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> FeatureGroup<T> {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn clear(&mut self) {
        self.items.clear();
    }
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }
    pub fn len(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Bounded> FeatureGroup<T> {
    /// Box covering every feature; `None` when the group is empty.
    pub fn bounds(&self) -> Option<BoundingBox> {
        self.items
            .iter()
            .filter_map(Bounded::bounds)
            .reduce(|a, b| a.union(&b))
    }
}

impl<'a, T> IntoIterator for &'a FeatureGroup<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

pub type MarkerLayer = FeatureGroup<CircleMarker>;
pub type PolygonLayer = FeatureGroup<Polygon>;
