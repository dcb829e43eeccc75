//! Hull output type and invariant checker.

use std::collections::HashSet;

use crate::error::HullViolation;
use crate::geom::{orient, Point};

/// Hull boundary in traversal order (counter-clockwise, implicitly closed).
///
/// Invariants (checked by `check_against`):
/// - every vertex is an input point;
/// - every input point lies on or left of every directed edge;
/// - no three consecutive vertices are collinear.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hull {
    vertices: Vec<Point>,
}

impl Hull {
    pub(crate) fn from_vertices(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    /// Directed edges in traversal order, including the closing edge.
    ///
    /// Empty for fewer than two vertices; a two-vertex hull yields both directions.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = if self.vertices.len() < 2 {
            0
        } else {
            self.vertices.len()
        };
        (0..n).map(move |k| (self.vertices[k], self.vertices[(k + 1) % n]))
    }

    /// Vertices with the first one appended again, for polygon plotting.
    pub fn closed(&self) -> Vec<Point> {
        let mut out = self.vertices.clone();
        if let Some(first) = self.vertices.first() {
            out.push(*first);
        }
        out
    }

    /// Same vertex set, ignoring start point and traversal order.
    pub fn same_vertex_set(&self, other: &Hull) -> bool {
        let a: HashSet<Point> = self.vertices.iter().copied().collect();
        let b: HashSet<Point> = other.vertices.iter().copied().collect();
        a == b
    }

    /// Input points that are not hull vertices, in input order.
    pub fn interior_points(&self, points: &[Point]) -> Vec<Point> {
        let on_hull: HashSet<Point> = self.vertices.iter().copied().collect();
        points
            .iter()
            .filter(|p| !on_hull.contains(p))
            .copied()
            .collect()
    }

    /// Check the hull invariants against the input set.
    ///
    /// `tol` is the containment slack: a point with `orient(u, v, p) >= -tol`
    /// counts as on or left of edge `u → v`.
    pub fn check_against(&self, points: &[Point], tol: f64) -> Result<(), HullViolation> {
        let input: HashSet<Point> = points.iter().copied().collect();
        for (index, v) in self.vertices.iter().enumerate() {
            if !input.contains(v) {
                return Err(HullViolation::NotInInput {
                    index,
                    x: v.x(),
                    y: v.y(),
                });
            }
        }
        for (edge, (u, v)) in self.edges().enumerate() {
            for (point_index, p) in points.iter().enumerate() {
                let o = orient(&u, &v, p);
                if o < -tol {
                    return Err(HullViolation::OutsideEdge {
                        edge,
                        point_index,
                        orient: o,
                    });
                }
            }
        }
        let n = self.vertices.len();
        if n >= 3 {
            for k in 0..n {
                let prev = &self.vertices[(k + n - 1) % n];
                let cur = &self.vertices[k];
                let next = &self.vertices[(k + 1) % n];
                if orient(prev, cur, next) <= 0.0 {
                    return Err(HullViolation::NotStrictlyConvex { index: k });
                }
            }
        }
        Ok(())
    }
}
