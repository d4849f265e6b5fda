//! Test doubles shared across module tests.

use crate::geo::{BoundingBox, GeoPoint};
use crate::viewport::ViewportController;

#[derive(Clone, Debug, PartialEq)]
pub enum ViewCall {
    Center(GeoPoint, u8),
    Fit(BoundingBox),
}

/// Records every viewport command in order.
#[derive(Default, Debug)]
pub struct RecordingViewport {
    pub calls: Vec<ViewCall>,
}

impl RecordingViewport {
    pub fn fits(&self) -> Vec<BoundingBox> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ViewCall::Fit(b) => Some(*b),
                _ => None,
            })
            .collect()
    }

    pub fn centers(&self) -> Vec<(GeoPoint, u8)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ViewCall::Center(p, z) => Some((*p, *z)),
                _ => None,
            })
            .collect()
    }
}

impl ViewportController for RecordingViewport {
    fn center(&mut self, point: GeoPoint, zoom: u8) {
        self.calls.push(ViewCall::Center(point, zoom));
    }
    fn fit(&mut self, bounds: BoundingBox) {
        self.calls.push(ViewCall::Fit(bounds));
    }
}

/// Group whose components are given as token lists.
pub fn group(components: &[&[&str]]) -> crate::sync::IsochroneGroup {
    crate::sync::IsochroneGroup {
        component: components
            .iter()
            .map(|shape| crate::sync::IsochroneComponent {
                shape: shape.iter().map(|s| s.to_string()).collect(),
            })
            .collect(),
    }
}
