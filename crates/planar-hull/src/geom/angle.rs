//! Angular metric used as the Graham sort key.
//!
//! The angle is `acos(dx / |d|)` in `[0, π]`. It only orders points by true
//! polar angle when all of them lie in the closed upper half-plane of the
//! reference, which holds for the lowest-then-rightmost reference point.

use std::cmp::Ordering;

use super::types::Point;

/// Angle of a point seen from a reference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Angle {
    /// The point coincides with the reference (within tolerance).
    Undefined,
    Radians(f64),
}

impl Angle {
    /// Tolerance ordering: `Undefined` sorts first; radians within `eps` are equal.
    pub fn cmp_eps(&self, other: &Angle, eps: f64) -> Ordering {
        match (self, other) {
            (Angle::Undefined, Angle::Undefined) => Ordering::Equal,
            (Angle::Undefined, Angle::Radians(_)) => Ordering::Less,
            (Angle::Radians(_), Angle::Undefined) => Ordering::Greater,
            (Angle::Radians(a), Angle::Radians(b)) => {
                if (a - b).abs() <= eps {
                    Ordering::Equal
                } else {
                    a.total_cmp(b)
                }
            }
        }
    }

    #[inline]
    pub fn eq_eps(&self, other: &Angle, eps: f64) -> bool {
        self.cmp_eps(other, eps) == Ordering::Equal
    }

    /// Exact total order (no tolerance), consistent with `cmp_eps` at `eps = 0`.
    pub fn total_cmp(&self, other: &Angle) -> Ordering {
        self.cmp_eps(other, 0.0)
    }

    pub fn radians(&self) -> Option<f64> {
        match *self {
            Angle::Undefined => None,
            Angle::Radians(r) => Some(r),
        }
    }
}

/// Euclidean distance.
#[inline]
pub fn distance(u: &Point, v: &Point) -> f64 {
    (u.0 - v.0).norm()
}

/// Angle of `point` relative to the x-axis through `reference`.
pub fn angle_from(reference: &Point, point: &Point, eps: f64) -> Angle {
    if point.approx_eq(reference, eps) {
        return Angle::Undefined;
    }
    let d = distance(point, reference);
    if d <= 0.0 {
        // Distinct within eps but the difference underflows the norm.
        return Angle::Undefined;
    }
    let cosine = ((point.x() - reference.x()) / d).clamp(-1.0, 1.0);
    Angle::Radians(cosine.acos())
}
