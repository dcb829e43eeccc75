//! Basic 2D types and tolerances shared by both hull builders.
//!
//! - `Point`: immutable 2D point backed by `nalgebra::Vector2<f64>`.
//! - `HullCfg`: centralizes the equality and orientation epsilons.
//!
//! Equality policy
//! - `PartialEq`/`Eq`/`Hash` on `Point` are exact (bit pattern, `-0.0 == 0.0`),
//!   so points can be used as map/set keys without breaking the hash contract.
//! - Tolerance equality is explicit (`Point::approx_eq`) and only used by the
//!   geometric predicates and input deduplication. It is reflexive and
//!   symmetric but NOT transitive.

use std::hash::{Hash, Hasher};

use nalgebra::Vector2;

use crate::error::HullError;

/// Largest accepted coordinate magnitude.
///
/// Differences of two coordinates stay below `2 * MAX_COORD`, so sums of two
/// squared differences (norms, cross products) remain finite.
pub const MAX_COORD: f64 = 1e150;

/// Hull configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullCfg {
    /// Per-coordinate tolerance for point equality and angle equality.
    pub eps_eq: f64,
    /// Slack for the orientation predicate: `cross <= eps_orient` counts as
    /// reflex-or-collinear.
    pub eps_orient: f64,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            eps_eq: 1e-36,
            eps_orient: 0.0,
        }
    }
}

impl HullCfg {
    /// Both tolerances must be finite and non-negative.
    pub fn validate(&self) -> Result<(), HullError> {
        if !self.eps_eq.is_finite() || self.eps_eq < 0.0 {
            return Err(HullError::invalid_cfg(format!(
                "eps_eq must be finite and >= 0, got {}",
                self.eps_eq
            )));
        }
        if !self.eps_orient.is_finite() || self.eps_orient < 0.0 {
            return Err(HullError::invalid_cfg(format!(
                "eps_orient must be finite and >= 0, got {}",
                self.eps_orient
            )));
        }
        Ok(())
    }
}

/// Immutable point in the plane.
#[derive(Clone, Copy, Debug)]
pub struct Point(pub Vector2<f64>);

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self(Vector2::new(x, y))
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn coords(&self) -> Vector2<f64> {
        self.0
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.x.is_finite() && self.0.y.is_finite()
    }

    /// Both coordinates lie within `±MAX_COORD`.
    #[inline]
    pub fn in_range(&self) -> bool {
        self.0.x.abs() <= MAX_COORD && self.0.y.abs() <= MAX_COORD
    }

    /// Tolerance equality: both coordinate differences are within `eps`.
    #[inline]
    pub fn approx_eq(&self, other: &Point, eps: f64) -> bool {
        (self.0.x - other.0.x).abs() <= eps && (self.0.y - other.0.y).abs() <= eps
    }

    /// Exact hash key; `-0.0` and `0.0` map to the same key.
    #[inline]
    fn key(&self) -> (u64, u64) {
        (canonical_bits(self.0.x), canonical_bits(self.0.y))
    }
}

#[inline]
fn canonical_bits(v: f64) -> u64 {
    if v == 0.0 {
        0.0f64.to_bits()
    } else {
        v.to_bits()
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for [f64; 2] {
    #[inline]
    fn from(p: Point) -> Self {
        [p.0.x, p.0.y]
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self(v)
    }
}
