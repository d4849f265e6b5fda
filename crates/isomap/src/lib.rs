//! Isochrone layer synchronization for slippy maps.
//!
//! Given a read-only state snapshot (query center + isochrone polygons), the
//! crate rebuilds a center-marker layer and an isochrone-polygon layer and
//! fits the viewport to what was drawn. The map engine itself is external:
//! it reads the layers and reacts to `ViewportController` commands.
//!
//! Layout
//! - `geo`: points, bounding boxes, the one place coordinate tokens are parsed.
//! - `color`: deterministic perceptual gradients.
//! - `layers`, `viewport`, `surface`: what the map engine reads and obeys.
//! - `render`: the two layer renderers.
//! - `sync`: snapshot types and the orchestrator that runs a rebuild cycle.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.

pub mod color;
pub mod config;
pub mod error;
pub mod geo;
pub mod layers;
pub mod render;
pub mod surface;
pub mod sync;
pub mod synth;
pub mod viewport;

#[cfg(test)]
pub(crate) mod testing;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use config::{Config, RenderCfg};
pub use error::RenderError;
pub use geo::{BoundingBox, GeoPoint};
pub use sync::{MapSync, Snapshot, SyncReport};

/// Common exports for hosts wiring a map surface to a state store.
pub mod prelude {
    pub use crate::color::{gradient, Color, ColorScale, Interpolation};
    pub use crate::config::{Config, RenderCfg};
    pub use crate::geo::{parse_coordinate, BoundingBox, GeoPoint};
    pub use crate::layers::{MarkerLayer, PolygonLayer};
    pub use crate::surface::{MapOptions, MapSurface};
    pub use crate::sync::{MapSync, QueryCenter, Snapshot, SyncReport};
    pub use crate::viewport::{Viewport, ViewportController};
}
