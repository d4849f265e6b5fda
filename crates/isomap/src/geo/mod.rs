//! Geographic primitives and coordinate-token parsing.
//!
//! Purpose
//! - `GeoPoint` / `BoundingBox` are the only geometry the render pipeline sees.
//! - Snapshot data carries vertices as `"lat,lng"` strings; `parse` is the single
//!   place those are decoded, so everything downstream works on structured points.

mod parse;
mod types;

pub use parse::{parse_coordinate, parse_ring};
pub use types::{BoundingBox, GeoPoint};
