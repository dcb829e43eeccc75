//! Convex hull builders.
//!
//! Purpose
//! - Two independent builders over the same primitives: a brute-force O(n³)
//!   edge test (`naive_hull`) and an O(n log n) Graham scan (`graham_hull`).
//! - Both validate input (finite coordinates, sane `HullCfg`), drop tolerance
//!   duplicates, and return the hull counter-clockwise from the reference point
//!   (lowest y, ties → highest x).
//!
//! Degenerate input
//! - Fewer than three distinct points is not an error: the hull is the distinct
//!   points themselves, reference point first.
//!
//! Code cross-refs: `geom::{reflex_or_collinear, angle_from, HullCfg}`, `Hull::check_against`.

mod graham;
mod naive;
mod prepare;
mod types;

pub use graham::graham_hull;
pub use naive::naive_hull;
pub use types::Hull;

use std::fmt;
use std::str::FromStr;

use crate::error::HullError;
use crate::geom::{HullCfg, Point};

/// Common interface of the hull builders.
pub trait HullBuilder {
    fn name(&self) -> &'static str;
    fn build(&self, points: &[Point], cfg: HullCfg) -> Result<Hull, HullError>;
}

/// Brute-force edge test.
#[derive(Clone, Copy, Debug, Default)]
pub struct Naive;

/// Angular sweep.
#[derive(Clone, Copy, Debug, Default)]
pub struct Graham;

impl HullBuilder for Naive {
    fn name(&self) -> &'static str {
        "naive"
    }
    fn build(&self, points: &[Point], cfg: HullCfg) -> Result<Hull, HullError> {
        naive_hull(points, cfg)
    }
}

impl HullBuilder for Graham {
    fn name(&self) -> &'static str {
        "graham"
    }
    fn build(&self, points: &[Point], cfg: HullCfg) -> Result<Hull, HullError> {
        graham_hull(points, cfg)
    }
}

/// Builder selection by value (CLI flags, benchmarks).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Naive,
    Graham,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Naive, Algorithm::Graham];

    pub fn builder(self) -> &'static dyn HullBuilder {
        match self {
            Algorithm::Naive => &Naive,
            Algorithm::Graham => &Graham,
        }
    }
}

impl HullBuilder for Algorithm {
    fn name(&self) -> &'static str {
        self.builder().name()
    }
    fn build(&self, points: &[Point], cfg: HullCfg) -> Result<Hull, HullError> {
        self.builder().build(points, cfg)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "naive" => Ok(Algorithm::Naive),
            "graham" => Ok(Algorithm::Graham),
            other => Err(format!("unknown hull algorithm: {other}")),
        }
    }
}
