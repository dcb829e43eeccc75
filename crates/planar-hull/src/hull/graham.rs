//! Graham scan: angular sort around the reference point, then a stack sweep.
//!
//! Ordering
//! - Ascending `angle_from(reference, p)`, ties (within `eps_eq`) broken by
//!   descending distance, so the farthest point on each ray comes first.
//! - Only that farthest point enters the sweep; nearer points on the same ray
//!   are interior to the hull or to one of its edges.
//!
//! The standard sort only ever sees the exact total order on `(angle, -dist)`.
//! Runs are formed afterwards against the first entry of each run: an entry
//! joins when its angle is within `eps_eq` or when it lies exactly on the same
//! ray from the reference. Points on one ray can get `acos` keys an ulp apart
//! (`(1, 1)` and `(3, 3)`), and the farther one may then sort first.

use crate::error::HullError;
use crate::geom::{
    angle_from, distance, orient, reference_index, reflex_or_collinear, Angle, HullCfg, Point,
};

use super::prepare::{degenerate, prepare};
use super::types::Hull;

/// Graham scan hull in counter-clockwise sweep order, starting at the reference point.
pub fn graham_hull(points: &[Point], cfg: HullCfg) -> Result<Hull, HullError> {
    let pts = prepare(points, &cfg)?;
    let vertices = match degenerate(&pts) {
        Some(v) => v,
        None => sweep(&pts, &cfg),
    };
    tracing::debug!(input = points.len(), hull = vertices.len(), "graham hull");
    Ok(Hull::from_vertices(vertices))
}

#[derive(Clone, Copy, Debug)]
struct Keyed {
    angle: Angle,
    dist: f64,
    point: Point,
}

/// `a` and `b` lie on the same ray leaving `reference`.
#[inline]
fn same_ray(reference: &Point, a: &Point, b: &Point) -> bool {
    orient(reference, a, b) == 0.0 && (a.0 - reference.0).dot(&(b.0 - reference.0)) > 0.0
}

/// Farthest point of each run of tolerance-equal angles (or of exactly
/// collinear points on one ray), in ascending angle order.
///
/// Points whose angle is `Undefined` coincide with the reference and are dropped.
fn angular_representatives(reference: &Point, pts: &[Point], eps: f64) -> Vec<Keyed> {
    let mut keyed: Vec<Keyed> = pts
        .iter()
        .map(|p| Keyed {
            angle: angle_from(reference, p, eps),
            dist: distance(reference, p),
            point: *p,
        })
        .filter(|k| k.angle != Angle::Undefined)
        .collect();
    keyed.sort_by(|a, b| {
        a.angle
            .total_cmp(&b.angle)
            .then_with(|| b.dist.total_cmp(&a.dist))
    });
    let mut reps: Vec<Keyed> = Vec::with_capacity(keyed.len());
    let mut start = 0;
    while start < keyed.len() {
        let head = keyed[start];
        let mut end = start + 1;
        while end < keyed.len()
            && (keyed[end].angle.eq_eps(&head.angle, eps)
                || same_ray(reference, &head.point, &keyed[end].point))
        {
            end += 1;
        }
        let farthest = keyed[start..end]
            .iter()
            .copied()
            .reduce(|best, k| if k.dist > best.dist { k } else { best });
        if let Some(k) = farthest {
            reps.push(k);
        }
        start = end;
    }
    reps
}

fn sweep(pts: &[Point], cfg: &HullCfg) -> Vec<Point> {
    let Some(r) = reference_index(pts) else {
        return Vec::new();
    };
    let reference = pts[r];
    let mut stack: Vec<Point> = Vec::with_capacity(pts.len());
    stack.push(reference);
    for k in angular_representatives(&reference, pts, cfg.eps_eq) {
        while let [.., second, top] = stack.as_slice() {
            if !reflex_or_collinear(&k.point, top, second, cfg) {
                break;
            }
            stack.pop();
        }
        stack.push(k.point);
    }
    stack
}
