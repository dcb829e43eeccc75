//! 2D geometry primitives for the hull builders.
//!
//! Purpose
//! - `Point` with exact hashing and explicit tolerance equality.
//! - Orientation predicate shared by both builders.
//! - Angular metric (`Angle`, `angle_from`, `distance`) used as the Graham sort key.
//! - `HullCfg`: the tolerances, threaded explicitly into every call.
//!
//! Code cross-refs: `hull::{naive, graham}`.

mod angle;
mod predicates;
mod types;

pub use angle::{angle_from, distance, Angle};
pub use predicates::{equals, orient, reference_index, reflex_or_collinear};
pub use types::{HullCfg, Point, MAX_COORD};
