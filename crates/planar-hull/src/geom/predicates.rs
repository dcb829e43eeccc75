//! Orientation and equality predicates.
//!
//! Both builders go through `reflex_or_collinear`, but with different argument
//! roles:
//! - naive edge test: `reflex_or_collinear(k, i, j)` is true iff `k` lies on or
//!   to the left of the directed line `i → j`;
//! - Graham pop test: `reflex_or_collinear(candidate, top, second)` is true iff
//!   `top` is a reflex (or collinear) vertex of `second → top → candidate`.

use super::types::{HullCfg, Point};

/// Tolerance equality of two points (see `Point::approx_eq`).
#[inline]
pub fn equals(a: &Point, b: &Point, eps: f64) -> bool {
    a.approx_eq(b, eps)
}

/// Signed doubled area of the triangle `(p, q, r)`; positive for a left turn.
#[inline]
pub fn orient(p: &Point, q: &Point, r: &Point) -> f64 {
    (q.0 - p.0).perp(&(r.0 - p.0))
}

/// `(v.x−w.x)(u.y−w.y) − (v.y−w.y)(u.x−w.x) <= eps_orient`.
///
/// The cross product equals `orient(w, v, u)`.
#[inline]
pub fn reflex_or_collinear(u: &Point, v: &Point, w: &Point, cfg: &HullCfg) -> bool {
    let a = v.0 - w.0;
    let b = u.0 - w.0;
    a.x * b.y - a.y * b.x <= cfg.eps_orient
}

/// Reference point for both builders: minimum y, ties broken by maximum x.
///
/// Returns the index into `points`, or `None` for an empty slice.
pub fn reference_index(points: &[Point]) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            a.y()
                .total_cmp(&b.y())
                .then_with(|| b.x().total_cmp(&a.x()))
        })
        .map(|(i, _)| i)
}
