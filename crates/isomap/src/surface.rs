//! Map surface: the once-per-lifetime setup around the synced layers.
//!
//! `MapSurface::mount` builds the viewport (bounded to the world), the pane
//! stack, the background tile source and the corner controls. None of this is
//! touched again by sync cycles; they only drive the viewport through
//! `ViewportController`.

use serde::{Deserialize, Serialize};

use crate::geo::{BoundingBox, GeoPoint};
use crate::layers::Pane;
use crate::viewport::{Viewport, ViewportController};

/// Raster tile source in `{s}/{z}/{x}/{y}` template form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileSource {
    pub url_template: String,
    pub attribution: String,
    /// Values substituted for `{s}`.
    pub subdomains: Vec<String>,
}

impl Default for TileSource {
    fn default() -> Self {
        Self {
            url_template: "https://{s}.tile.osm.org/{z}/{x}/{y}.png".to_string(),
            attribution:
                "&copy; <a href=\"https://osm.org/copyright\">OpenStreetMap</a> contributors"
                    .to_string(),
            subdomains: ["a", "b", "c"].map(String::from).to_vec(),
        }
    }
}

/// Screen corner a control is pinned to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Static overlay controls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Control {
    Zoom { corner: Corner },
    /// Branding box with fixed markup.
    Brand { corner: Corner, html: String },
}

impl Control {
    pub fn corner(&self) -> Corner {
        match self {
            Control::Zoom { corner } | Control::Brand { corner, .. } => *corner,
        }
    }
}

/// Startup options for a map surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapOptions {
    pub center: GeoPoint,
    pub zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    /// Pannable extent.
    pub max_bounds: BoundingBox,
    /// Viewport size in pixels.
    pub size: (f64, f64),
    /// Padding in pixels applied when fitting to bounds.
    pub fit_padding: f64,
    pub tiles: TileSource,
    pub controls: Vec<Control>,
    pub isochrone_pane_opacity: f64,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center: GeoPoint::new(25.95681, -35.729687),
            zoom: 2,
            min_zoom: 0,
            max_zoom: 18,
            max_bounds: BoundingBox::WORLD,
            size: (1024.0, 768.0),
            fit_padding: 0.0,
            tiles: TileSource::default(),
            controls: vec![
                Control::Zoom {
                    corner: Corner::TopRight,
                },
                Control::Brand {
                    corner: Corner::BottomRight,
                    html: "&copy; isomap".to_string(),
                },
            ],
            isochrone_pane_opacity: Pane::ISOCHRONES.opacity,
        }
    }
}

/// A mounted map: viewport, panes, tiles and controls.
#[derive(Clone, Debug, Serialize)]
pub struct MapSurface {
    options: MapOptions,
    viewport: Viewport,
    panes: Vec<Pane>,
}

impl MapSurface {
    pub fn mount(options: MapOptions) -> Self {
        let mut viewport = Viewport::new(options.size, options.center, options.zoom);
        viewport.min_zoom = options.min_zoom;
        viewport.max_zoom = options.max_zoom;
        viewport.max_bounds = options.max_bounds;
        viewport.padding = options.fit_padding;
        // re-apply the initial view under the configured limits
        viewport.center(options.center, options.zoom);

        let isochrones = Pane {
            opacity: options.isochrone_pane_opacity.clamp(0.0, 1.0),
            ..Pane::ISOCHRONES
        };
        let mut panes = vec![Pane::TILES, isochrones, Pane::MARKERS, Pane::CONTROLS];
        panes.sort_by_key(|p| p.z_index);

        tracing::debug!(
            lat = options.center.lat,
            lng = options.center.lng,
            zoom = viewport.zoom(),
            controls = options.controls.len(),
            "map surface mounted"
        );
        Self {
            options,
            viewport,
            panes,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Panes in drawing order (bottom first).
    pub fn panes(&self) -> &[Pane] {
        &self.panes
    }

    pub fn pane(&self, name: &str) -> Option<&Pane> {
        self.panes.iter().find(|p| p.name == name)
    }

    pub fn tiles(&self) -> &TileSource {
        &self.options.tiles
    }

    pub fn controls(&self) -> &[Control] {
        &self.options.controls
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }
}

impl Default for MapSurface {
    fn default() -> Self {
        Self::mount(MapOptions::default())
    }
}

impl ViewportController for MapSurface {
    fn center(&mut self, point: GeoPoint, zoom: u8) {
        self.viewport.center(point, zoom);
    }
    fn fit(&mut self, bounds: BoundingBox) {
        self.viewport.fit(bounds);
    }
}
