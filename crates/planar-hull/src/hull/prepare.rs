//! Input validation and deduplication shared by both builders.

use crate::error::HullError;
use crate::geom::{reference_index, HullCfg, Point, MAX_COORD};

/// Validate `cfg` and coordinates, then drop tolerance duplicates.
///
/// The result is sorted by `(x, y)`; builders do not depend on input order.
pub(crate) fn prepare(points: &[Point], cfg: &HullCfg) -> Result<Vec<Point>, HullError> {
    cfg.validate()?;
    for (index, p) in points.iter().enumerate() {
        if !p.is_finite() {
            return Err(HullError::NonFinite {
                index,
                x: p.x(),
                y: p.y(),
            });
        }
        if !p.in_range() {
            return Err(HullError::OutOfRange {
                index,
                x: p.x(),
                y: p.y(),
                limit: MAX_COORD,
            });
        }
    }
    let mut sorted: Vec<Point> = points.to_vec();
    sorted.sort_by(|a, b| a.x().total_cmp(&b.x()).then_with(|| a.y().total_cmp(&b.y())));

    // Any kept duplicate of `p` has `x >= p.x - eps`, so only the tail needs scanning.
    let mut kept: Vec<Point> = Vec::with_capacity(sorted.len());
    for p in sorted {
        let duplicate = kept
            .iter()
            .rev()
            .take_while(|q| q.x() >= p.x() - cfg.eps_eq)
            .any(|q| q.approx_eq(&p, cfg.eps_eq));
        if !duplicate {
            kept.push(p);
        }
    }
    let dropped = points.len() - kept.len();
    if dropped > 0 {
        tracing::debug!(dropped, kept = kept.len(), "dropped duplicate input points");
    }
    Ok(kept)
}

/// Hull of fewer than three distinct points: the points themselves,
/// reference point first. `None` when a real hull has to be built.
pub(crate) fn degenerate(points: &[Point]) -> Option<Vec<Point>> {
    if points.len() >= 3 {
        return None;
    }
    let mut out = points.to_vec();
    if let Some(r) = reference_index(&out) {
        out.swap(0, r);
    }
    Some(out)
}
