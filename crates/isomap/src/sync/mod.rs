//! Snapshot → layers orchestration.
//!
//! `MapSync` owns the two layers and a viewport controller. Each call to
//! `on_snapshot_changed` runs one rebuild cycle, strictly in order:
//! center marker → isochrone polygons (→ fit). A fit issued by the isochrone
//! pass supersedes the recenter issued by the center pass.
//!
//! Cycles take `&mut self` and never suspend, so nothing can interleave with a
//! rebuild. Hosts that deliver notifications from several threads wrap the
//! orchestrator in a `Mutex`.

pub mod snapshot;

use std::sync::Arc;

use crate::color::Color;
use crate::config::RenderCfg;
use crate::geo::{BoundingBox, GeoPoint};
use crate::layers::{MarkerLayer, PolygonLayer};
use crate::render::{render_center, render_isochrones, SkippedComponent};
use crate::viewport::ViewportController;

pub use snapshot::{IsochroneComponent, IsochroneGroup, Isochrones, QueryCenter, Settings, Snapshot};

/// Summary of one rebuild cycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SyncReport {
    pub center: Option<GeoPoint>,
    pub colors: Vec<Color>,
    pub polygons: usize,
    pub skipped: Vec<SkippedComponent>,
    /// No isochrone groups in the snapshot (no colors, no fit).
    pub isochrones_empty: bool,
    pub fitted: Option<BoundingBox>,
}

/// Keeps a marker layer and an isochrone layer in step with snapshots.
pub struct MapSync<V> {
    markers: MarkerLayer,
    isochrones: PolygonLayer,
    viewport: V,
    cfg: RenderCfg,
    last: Option<Arc<Snapshot>>,
    cycles: u64,
}

impl<V: ViewportController> MapSync<V> {
    pub fn new(viewport: V, cfg: RenderCfg) -> Self {
        Self::with_layers(viewport, cfg, MarkerLayer::new(), PolygonLayer::new())
    }

    /// Use caller-provided layers (e.g. ones already attached to a surface).
    pub fn with_layers(
        viewport: V,
        cfg: RenderCfg,
        markers: MarkerLayer,
        isochrones: PolygonLayer,
    ) -> Self {
        Self {
            markers,
            isochrones,
            viewport,
            cfg,
            last: None,
            cycles: 0,
        }
    }

    /// Run one rebuild cycle for `snapshot`.
    ///
    /// Forgets the snapshot remembered by [`observe`](Self::observe), so the
    /// next `observe` call always rebuilds.
    pub fn on_snapshot_changed(&mut self, snapshot: &Snapshot) -> SyncReport {
        self.last = None;
        self.rebuild(snapshot)
    }

    /// Run a cycle only if `snapshot` is a different object than the one the
    /// layers were last built from.
    pub fn observe(&mut self, snapshot: &Arc<Snapshot>) -> Option<SyncReport> {
        if let Some(last) = &self.last {
            if Arc::ptr_eq(last, snapshot) {
                return None;
            }
        }
        let report = self.rebuild(snapshot);
        self.last = Some(Arc::clone(snapshot));
        Some(report)
    }

    fn rebuild(&mut self, snapshot: &Snapshot) -> SyncReport {
        let center = render_center(
            snapshot.center(),
            &mut self.markers,
            &mut self.viewport,
            &self.cfg,
        );
        let iso = render_isochrones(
            snapshot.results(),
            &mut self.isochrones,
            &mut self.viewport,
            &self.cfg,
        );
        self.cycles += 1;
        tracing::debug!(
            cycle = self.cycles,
            markers = self.markers.len(),
            polygons = iso.polygons,
            colors = iso.colors.len(),
            skipped = iso.skipped.len(),
            "map sync cycle"
        );
        SyncReport {
            center,
            isochrones_empty: snapshot.results().is_empty(),
            colors: iso.colors,
            polygons: iso.polygons,
            skipped: iso.skipped,
            fitted: iso.bounds,
        }
    }

    pub fn markers(&self) -> &MarkerLayer {
        &self.markers
    }

    pub fn isochrones(&self) -> &PolygonLayer {
        &self.isochrones
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn cfg(&self) -> &RenderCfg {
        &self.cfg
    }

    /// Number of cycles run so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }
}
