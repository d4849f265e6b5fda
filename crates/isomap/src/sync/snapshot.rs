//! Read-only state snapshot delivered by the external store.
//!
//! Field names follow the store's JSON (`isochronesCenter`, `component`,
//! `shape`). Missing sections deserialize to "nothing to draw".

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// Full snapshot: `{ settings: { isochronesCenter }, isochrones: { results } }`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub settings: Settings,
    pub isochrones: Isochrones,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub isochrones_center: QueryCenter,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Isochrones {
    pub results: Vec<IsochroneGroup>,
}

/// Point the isochrones were computed from; both halves absent before the first query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryCenter {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

impl QueryCenter {
    pub fn at(lat: f64, lng: f64) -> Self {
        Self {
            lat: Some(lat),
            lng: Some(lng),
        }
    }

    /// The point, if both halves are present and finite. Zero is a valid coordinate.
    pub fn point(&self) -> Option<GeoPoint> {
        let p = GeoPoint::new(self.lat?, self.lng?);
        p.is_finite().then_some(p)
    }
}

/// One travel-time band, possibly split into disjoint pieces.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IsochroneGroup {
    #[serde(default)]
    pub component: Vec<IsochroneComponent>,
}

/// One polygon piece; each vertex is a `"lat,lng"` token.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IsochroneComponent {
    #[serde(default)]
    pub shape: Vec<String>,
}

impl IsochroneComponent {
    pub fn from_points<I: IntoIterator<Item = GeoPoint>>(points: I) -> Self {
        Self {
            shape: points
                .into_iter()
                .map(|p| format!("{},{}", p.lat, p.lng))
                .collect(),
        }
    }
}

impl Snapshot {
    pub fn new(center: QueryCenter, results: Vec<IsochroneGroup>) -> Self {
        Self {
            settings: Settings {
                isochrones_center: center,
            },
            isochrones: Isochrones { results },
        }
    }

    pub fn center(&self) -> &QueryCenter {
        &self.settings.isochrones_center
    }

    pub fn results(&self) -> &[IsochroneGroup] {
        &self.isochrones.results
    }
}
