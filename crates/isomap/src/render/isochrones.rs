use crate::color::Color;
use crate::config::RenderCfg;
use crate::error::RenderError;
use crate::geo::{parse_ring, BoundingBox, GeoPoint};
use crate::layers::{Pane, Polygon, PolygonLayer, PolygonStyle};
use crate::sync::IsochroneGroup;
use crate::viewport::ViewportController;

/// Fewest vertices that still enclose an area.
pub const MIN_RING_POINTS: usize = 3;

/// A component left out of the layer, and why.
#[derive(Clone, Debug, PartialEq)]
pub struct SkippedComponent {
    pub group: usize,
    pub component: usize,
    pub error: RenderError,
}

/// What one isochrone rebuild produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IsochroneOutcome {
    /// One color per input group, in group order.
    pub colors: Vec<Color>,
    pub polygons: usize,
    pub skipped: Vec<SkippedComponent>,
    /// Box the viewport was fitted to; `None` if nothing was drawn.
    pub bounds: Option<BoundingBox>,
}

/// Rebuild `layer` from isochrone groups and fit the viewport to the result.
///
/// Group `i` is filled with gradient color `i` whether or not any of its
/// components survive, so colors stay stable as components come and go.
pub fn render_isochrones<V: ViewportController + ?Sized>(
    groups: &[IsochroneGroup],
    layer: &mut PolygonLayer,
    viewport: &mut V,
    cfg: &RenderCfg,
) -> IsochroneOutcome {
    layer.clear();
    if groups.is_empty() {
        return IsochroneOutcome::default();
    }

    let colors = cfg.scale.colors(groups.len());
    let mut out = IsochroneOutcome {
        colors,
        ..IsochroneOutcome::default()
    };

    for (gi, (group, &fill)) in groups.iter().zip(&out.colors).enumerate() {
        for (ci, component) in group.component.iter().enumerate() {
            match ring(gi, ci, &component.shape) {
                Ok(ring) => {
                    layer.add(Polygon {
                        group: gi,
                        ring,
                        style: style(fill, cfg),
                    });
                    out.polygons += 1;
                }
                Err(error) => {
                    tracing::warn!(group = gi, component = ci, %error, "skipping isochrone component");
                    out.skipped.push(SkippedComponent {
                        group: gi,
                        component: ci,
                        error,
                    });
                }
            }
        }
    }

    out.bounds = layer.bounds();
    if let Some(bounds) = out.bounds {
        viewport.fit(bounds);
    }
    out
}

fn ring(group: usize, component: usize, shape: &[String]) -> Result<Vec<GeoPoint>, RenderError> {
    let ring = parse_ring(shape)?;
    if ring.len() < MIN_RING_POINTS {
        return Err(RenderError::DegenerateComponent {
            group,
            component,
            points: ring.len(),
        });
    }
    Ok(ring)
}

fn style(fill: Color, cfg: &RenderCfg) -> PolygonStyle {
    PolygonStyle {
        fill_color: fill,
        weight: cfg.border_weight,
        opacity: cfg.border_opacity,
        color: cfg.border_color,
        pane: Pane::ISOCHRONES.name,
    }
}
