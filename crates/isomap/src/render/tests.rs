use super::*;
use crate::color::gradient;
use crate::config::RenderCfg;
use crate::error::RenderError;
use crate::geo::{BoundingBox, GeoPoint};
use crate::layers::{MarkerLayer, Pane, PolygonLayer};
use crate::sync::{IsochroneGroup, QueryCenter};
use crate::testing::{group, RecordingViewport};

#[test]
fn center_present_adds_marker_and_recenters() {
    let cfg = RenderCfg::default();
    let mut layer = MarkerLayer::new();
    let mut vp = RecordingViewport::default();
    let drawn = render_center(&QueryCenter::at(48.1, 11.6), &mut layer, &mut vp, &cfg);

    assert_eq!(drawn, Some(GeoPoint::new(48.1, 11.6)));
    assert_eq!(layer.len(), 1);
    let marker = &layer.as_slice()[0];
    assert_eq!(marker.position, GeoPoint::new(48.1, 11.6));
    assert_eq!(marker.tooltip.text, "latitude: 48.1, longitude: 11.6");
    assert!(!marker.tooltip.permanent);
    assert_eq!(vp.centers(), vec![(GeoPoint::new(48.1, 11.6), cfg.neighborhood_zoom)]);
}

#[test]
fn center_absent_clears_and_leaves_viewport() {
    let cfg = RenderCfg::default();
    let mut layer = MarkerLayer::new();
    let mut vp = RecordingViewport::default();
    render_center(&QueryCenter::at(1.0, 2.0), &mut layer, &mut vp, &cfg);
    vp.calls.clear();

    for center in [
        QueryCenter::default(),
        QueryCenter {
            lat: Some(1.0),
            lng: None,
        },
        QueryCenter {
            lat: Some(f64::NAN),
            lng: Some(2.0),
        },
    ] {
        assert!(render_center(&center, &mut layer, &mut vp, &cfg).is_none());
        assert!(layer.is_empty());
    }
    assert!(vp.calls.is_empty());
}

#[test]
fn center_at_origin_is_present() {
    let mut layer = MarkerLayer::new();
    let mut vp = RecordingViewport::default();
    let drawn = render_center(&QueryCenter::at(0.0, 0.0), &mut layer, &mut vp, &RenderCfg::default());
    assert_eq!(drawn, Some(GeoPoint::new(0.0, 0.0)));
    assert_eq!(layer.len(), 1);
}

#[test]
fn two_groups_get_two_colors_and_one_fit() {
    let groups = vec![
        group(&[&["0,0", "0,1", "1,1"]]),
        group(&[&["2,2", "2,3", "3,3"]]),
    ];
    let mut layer = PolygonLayer::new();
    let mut vp = RecordingViewport::default();
    let out = render_isochrones(&groups, &mut layer, &mut vp, &RenderCfg::default());

    let g = gradient(2);
    assert_eq!(out.colors, g);
    assert_eq!(out.polygons, 2);
    let fills: Vec<_> = layer.iter().map(|p| p.style.fill_color).collect();
    assert_eq!(fills, g);
    let expected = BoundingBox::new(GeoPoint::new(0.0, 0.0), GeoPoint::new(3.0, 3.0));
    assert_eq!(vp.fits(), vec![expected]);
    assert_eq!(out.bounds, Some(expected));
}

#[test]
fn polygon_style_is_fixed_apart_from_fill() {
    let cfg = RenderCfg::default();
    let mut layer = PolygonLayer::new();
    render_isochrones(
        &[group(&[&["0,0", "0,1", "1,1"]])],
        &mut layer,
        &mut RecordingViewport::default(),
        &cfg,
    );
    let style = &layer.as_slice()[0].style;
    assert_eq!(style.weight, 2.0);
    assert_eq!(style.opacity, 1.0);
    assert_eq!(style.color, crate::color::Color::WHITE);
    assert_eq!(style.pane, Pane::ISOCHRONES.name);
}

#[test]
fn empty_result_draws_nothing_and_skips_fit() {
    let mut layer = PolygonLayer::new();
    let mut vp = RecordingViewport::default();
    render_isochrones(
        &[group(&[&["0,0", "0,1", "1,1"]])],
        &mut layer,
        &mut vp,
        &RenderCfg::default(),
    );
    vp.calls.clear();

    let out = render_isochrones(&[], &mut layer, &mut vp, &RenderCfg::default());
    assert!(layer.is_empty());
    assert!(out.colors.is_empty());
    assert!(vp.calls.is_empty());
}

#[test]
fn degenerate_component_skipped_siblings_keep_group_color() {
    let groups = vec![
        group(&[&["0,0", "0,1", "1,1"]]),
        group(&[&["1,1", "2,2"], &["5,5", "5,6", "6,6"]]),
    ];
    let mut layer = PolygonLayer::new();
    let mut vp = RecordingViewport::default();
    let out = render_isochrones(&groups, &mut layer, &mut vp, &RenderCfg::default());

    assert_eq!(out.polygons, 2);
    assert_eq!(
        out.skipped[0].error,
        RenderError::DegenerateComponent {
            group: 1,
            component: 0,
            points: 2
        }
    );
    let second = &layer.as_slice()[1];
    assert_eq!(second.group, 1);
    assert_eq!(second.style.fill_color, out.colors[1]);
}

#[test]
fn malformed_token_skips_only_its_component() {
    let groups = vec![group(&[&["0,0", "x,1", "1,1"], &["2,2", "2,3", "3,3"]])];
    let mut layer = PolygonLayer::new();
    let mut vp = RecordingViewport::default();
    let out = render_isochrones(&groups, &mut layer, &mut vp, &RenderCfg::default());

    assert_eq!(layer.len(), 1);
    assert_eq!(out.skipped.len(), 1);
    assert!(matches!(
        out.skipped[0].error,
        RenderError::MalformedCoordinate { ref token, .. } if token == "x,1"
    ));
    assert_eq!(
        vp.fits(),
        vec![BoundingBox::new(GeoPoint::new(2.0, 2.0), GeoPoint::new(3.0, 3.0))]
    );
}

#[test]
fn empty_groups_still_consume_colors() {
    let groups = vec![
        IsochroneGroup::default(),
        group(&[&["0,0", "0,1", "1,1"]]),
        IsochroneGroup::default(),
    ];
    let mut layer = PolygonLayer::new();
    let out = render_isochrones(
        &groups,
        &mut layer,
        &mut RecordingViewport::default(),
        &RenderCfg::default(),
    );
    assert_eq!(out.colors, gradient(3));
    assert_eq!(layer.as_slice()[0].style.fill_color, gradient(3)[1]);
}

#[test]
fn all_components_invalid_means_no_fit() {
    let groups = vec![group(&[&["1,1", "2,2"]]), group(&[&["bad"]])];
    let mut layer = PolygonLayer::new();
    let mut vp = RecordingViewport::default();
    let out = render_isochrones(&groups, &mut layer, &mut vp, &RenderCfg::default());
    assert_eq!(out.colors.len(), 2);
    assert_eq!(out.skipped.len(), 2);
    assert!(layer.is_empty());
    assert!(vp.fits().is_empty());
}
