//! Layer renderers.
//!
//! Both follow the same contract: clear the target layer, repopulate it from
//! the snapshot slice they are given, then issue at most one viewport command.
//! Per-geometry failures are recorded and skipped, never propagated.
//!
//! - `center`: query point → one circle marker + recenter at neighborhood zoom.
//! - `isochrones`: groups → filled rings with one gradient color per group,
//!   then fit the viewport to everything drawn.

mod center;
mod isochrones;

pub use center::{render_center, tooltip_text};
pub use isochrones::{render_isochrones, IsochroneOutcome, SkippedComponent, MIN_RING_POINTS};

#[cfg(test)]
mod tests;
