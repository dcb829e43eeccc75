//! Error types for hull construction and hull checking.

use thiserror::Error;

/// Errors raised while validating builder input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HullError {
    /// A coordinate is NaN or infinite.
    #[error("point {index} has a non-finite coordinate ({x}, {y})")]
    NonFinite { index: usize, x: f64, y: f64 },

    /// A coordinate is so large that squared distances and cross products
    /// would overflow (see `MAX_COORD`).
    #[error("point {index} ({x:e}, {y:e}) exceeds the coordinate limit {limit:e}")]
    OutOfRange {
        index: usize,
        x: f64,
        y: f64,
        limit: f64,
    },

    /// A tolerance in `HullCfg` is negative or non-finite.
    #[error("invalid hull config: {reason}")]
    InvalidCfg { reason: String },
}

impl HullError {
    pub(crate) fn invalid_cfg(reason: impl Into<String>) -> Self {
        Self::InvalidCfg {
            reason: reason.into(),
        }
    }
}

/// First violated hull invariant reported by `Hull::check_against`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HullViolation {
    /// A hull vertex is not an element of the input set.
    #[error("hull vertex {index} ({x}, {y}) is not an input point")]
    NotInInput { index: usize, x: f64, y: f64 },

    /// An input point lies strictly right of a directed hull edge.
    #[error("input point {point_index} lies right of hull edge {edge} (orient = {orient:e})")]
    OutsideEdge {
        edge: usize,
        point_index: usize,
        orient: f64,
    },

    /// Vertex `index` is collinear with (or reflex to) its neighbours.
    #[error("hull vertex {index} is not a strictly convex corner")]
    NotStrictlyConvex { index: usize },
}
