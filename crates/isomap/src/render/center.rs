use crate::config::RenderCfg;
use crate::geo::GeoPoint;
use crate::layers::{CircleMarker, MarkerLayer, Tooltip};
use crate::sync::QueryCenter;
use crate::viewport::ViewportController;

/// Label shown on hover over the center marker.
pub fn tooltip_text(p: GeoPoint) -> String {
    format!("latitude: {}, longitude: {}", p.lat, p.lng)
}

/// Rebuild `layer` from the query center; recenter on it when present.
///
/// Returns the drawn point, `None` when the center is absent (layer left empty,
/// viewport untouched).
pub fn render_center<V: ViewportController + ?Sized>(
    center: &QueryCenter,
    layer: &mut MarkerLayer,
    viewport: &mut V,
    cfg: &RenderCfg,
) -> Option<GeoPoint> {
    layer.clear();
    let point = center.point()?;
    layer.add(CircleMarker {
        position: point,
        radius: cfg.marker_radius,
        tooltip: Tooltip {
            text: tooltip_text(point),
            permanent: false,
            open: true,
        },
    });
    viewport.center(point, cfg.neighborhood_zoom);
    Some(point)
}
