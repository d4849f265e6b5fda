//! Render and surface configuration.
//!
//! Plain structs with `Default`; `Config` deserializes from a partial JSON
//! document (missing keys keep their defaults).

use serde::{Deserialize, Serialize};

use crate::color::{Color, ColorScale};
use crate::surface::MapOptions;

/// Styling and zoom constants used by the renderers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderCfg {
    /// Zoom used when recentering on the query point (city-scale area).
    pub neighborhood_zoom: u8,
    /// Center marker radius in pixels.
    pub marker_radius: f64,
    /// Polygon border width in pixels.
    pub border_weight: f64,
    pub border_opacity: f64,
    pub border_color: Color,
    /// Gradient path for isochrone fills, low (near) to high (far).
    pub scale: ColorScale,
}

impl Default for RenderCfg {
    fn default() -> Self {
        Self {
            neighborhood_zoom: 7,
            marker_radius: 10.0,
            border_weight: 2.0,
            border_opacity: 1.0,
            border_color: Color::WHITE,
            scale: ColorScale::default(),
        }
    }
}

/// Everything a host needs to mount a surface and run sync cycles.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderCfg,
    pub map: MapOptions,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Interpolation;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: Config = serde_json::from_str(
            r##"{"render": {"neighborhood_zoom": 11, "scale": {"stops": ["#000000", "#ffffff"], "mode": "hsl"}}}"##,
        )
        .unwrap();
        assert_eq!(cfg.render.neighborhood_zoom, 11);
        assert_eq!(cfg.render.border_weight, 2.0);
        assert_eq!(cfg.render.border_color, Color::WHITE);
        assert_eq!(cfg.render.scale.mode(), Interpolation::Hsl);
        assert_eq!(cfg.map, MapOptions::default());
    }

    #[test]
    fn empty_document_is_default() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn rejects_bad_color() {
        let res = serde_json::from_str::<Config>(r#"{"render": {"border_color": "white"}}"#);
        assert!(res.is_err());
    }
}
