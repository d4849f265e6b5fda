//! Point and bounding-box types in geographic degrees.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// A geographic point in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
    /// `(lat, lng)` as a column vector.
    #[inline]
    pub fn as_vec(&self) -> Vector2<f64> {
        Vector2::new(self.lat, self.lng)
    }
    #[inline]
    pub fn from_vec(v: Vector2<f64>) -> Self {
        Self { lat: v.x, lng: v.y }
    }
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// Axis-aligned box in lat/lng space.
///
/// Invariant: `south_west.lat <= north_east.lat` and `south_west.lng <= north_east.lng`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub south_west: GeoPoint,
    pub north_east: GeoPoint,
}

impl BoundingBox {
    /// The full pannable world.
    pub const WORLD: BoundingBox = BoundingBox {
        south_west: GeoPoint {
            lat: -90.0,
            lng: -180.0,
        },
        north_east: GeoPoint {
            lat: 90.0,
            lng: 180.0,
        },
    };

    /// Box spanned by two corners given in any order.
    pub fn new(a: GeoPoint, b: GeoPoint) -> Self {
        let (va, vb) = (a.as_vec(), b.as_vec());
        Self {
            south_west: GeoPoint::from_vec(va.inf(&vb)),
            north_east: GeoPoint::from_vec(va.sup(&vb)),
        }
    }

    /// Degenerate box holding a single point.
    #[inline]
    pub fn from_point(p: GeoPoint) -> Self {
        Self {
            south_west: p,
            north_east: p,
        }
    }

    /// Smallest box covering all points, or `None` for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        let mut it = points.into_iter();
        let mut bb = Self::from_point(it.next()?);
        for p in it {
            bb.extend(p);
        }
        Some(bb)
    }

    pub fn extend(&mut self, p: GeoPoint) {
        let v = p.as_vec();
        self.south_west = GeoPoint::from_vec(self.south_west.as_vec().inf(&v));
        self.north_east = GeoPoint::from_vec(self.north_east.as_vec().sup(&v));
    }

    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let mut out = *self;
        out.extend(other.south_west);
        out.extend(other.north_east);
        out
    }

    #[inline]
    pub fn contains(&self, p: GeoPoint) -> bool {
        p.lat >= self.south_west.lat
            && p.lat <= self.north_east.lat
            && p.lng >= self.south_west.lng
            && p.lng <= self.north_east.lng
    }

    /// Clamp a point into the box.
    pub fn clamp(&self, p: GeoPoint) -> GeoPoint {
        GeoPoint::from_vec(
            p.as_vec()
                .sup(&self.south_west.as_vec())
                .inf(&self.north_east.as_vec()),
        )
    }

    /// Arithmetic midpoint in degrees.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::from_vec((self.south_west.as_vec() + self.north_east.as_vec()) * 0.5)
    }
}
