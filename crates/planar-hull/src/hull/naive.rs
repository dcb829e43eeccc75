//! Brute-force hull: test every ordered pair as a candidate edge.
//!
//! A pair `(i, j)` is a hull edge iff every other point lies on or left of the
//! directed line `i → j`. Collinear candidates from the same origin are reduced
//! to the longest one, then the edges are stitched into a cycle starting at the
//! reference point. O(n³) time, O(n) extra space.

use crate::error::HullError;
use crate::geom::{distance, reference_index, reflex_or_collinear, HullCfg, Point};

use super::prepare::{degenerate, prepare};
use super::types::Hull;

/// Naive O(n³) hull in counter-clockwise order, starting at the reference point.
pub fn naive_hull(points: &[Point], cfg: HullCfg) -> Result<Hull, HullError> {
    let pts = prepare(points, &cfg)?;
    let vertices = match degenerate(&pts) {
        Some(v) => v,
        None => stitch(&pts, candidate_edges(&pts, &cfg)),
    };
    tracing::debug!(input = points.len(), hull = vertices.len(), "naive hull");
    Ok(Hull::from_vertices(vertices))
}

/// Best directed edge found so far for each origin index.
///
/// An edge is replaced only by a strictly longer one, so sub-segments of a
/// boundary edge never win over the full edge.
#[derive(Debug)]
struct BestEdges {
    to: Vec<Option<(usize, f64)>>,
}

impl BestEdges {
    fn new(n: usize) -> Self {
        Self { to: vec![None; n] }
    }

    fn offer(&mut self, from: usize, to: usize, len: f64) {
        match self.to[from] {
            Some((_, best)) if best >= len => {}
            _ => self.to[from] = Some((to, len)),
        }
    }

    /// Remove and return the edge leaving `from`.
    fn take(&mut self, from: usize) -> Option<usize> {
        self.to[from].take().map(|(to, _)| to)
    }
}

fn candidate_edges(pts: &[Point], cfg: &HullCfg) -> BestEdges {
    let n = pts.len();
    let mut edges = BestEdges::new(n);
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let supporting = (0..n)
                .filter(|&k| k != i && k != j)
                .all(|k| reflex_or_collinear(&pts[k], &pts[i], &pts[j], cfg));
            if supporting {
                edges.offer(i, j, distance(&pts[i], &pts[j]));
            }
        }
    }
    edges
}

/// Follow edges from the reference point until the walk returns to a vertex
/// it has already emitted (normally the start).
///
/// Edges leaving collinear interior points are never reached and get dropped.
fn stitch(pts: &[Point], mut edges: BestEdges) -> Vec<Point> {
    let Some(start) = reference_index(pts) else {
        return Vec::new();
    };
    let mut visited = vec![false; pts.len()];
    visited[start] = true;
    let mut hull = vec![pts[start]];
    let mut cur = start;
    while let Some(next) = edges.take(cur) {
        if visited[next] {
            if next != start {
                tracing::debug!(vertex = next, "naive walk re-entered a vertex before closing");
            }
            break;
        }
        visited[next] = true;
        hull.push(pts[next]);
        cur = next;
    }
    hull
}
