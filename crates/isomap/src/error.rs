//! Error types for geometry parsing and layer rendering.
//!
//! Every error is scoped to one geometry. Renderers record and skip; nothing
//! here is fatal to a sync cycle.

use thiserror::Error;

/// Errors raised while turning snapshot data into layer geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// A coordinate token is not of the form `"<lat>,<lng>"`.
    #[error("malformed coordinate {token:?}: {reason}")]
    MalformedCoordinate { token: String, reason: String },

    /// A component has fewer than three vertices and cannot form a polygon.
    #[error("component {component} of group {group} has {points} point(s), need at least 3")]
    DegenerateComponent {
        group: usize,
        component: usize,
        points: usize,
    },
}

impl RenderError {
    pub(crate) fn malformed(token: &str, reason: impl Into<String>) -> Self {
        RenderError::MalformedCoordinate {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}
