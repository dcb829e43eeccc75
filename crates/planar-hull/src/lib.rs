//! Planar convex hulls: brute-force edge test and Graham scan.
//!
//! Both builders share the same primitives (`geom`) and tolerance config
//! (`HullCfg`), validate their input, and return a `Hull` in counter-clockwise
//! order starting at the lowest (then rightmost) input point.
//!
//! API Policy
//! - Free functions (`naive_hull`, `graham_hull`) are the primary entry points.
//! - `HullBuilder`/`Algorithm` exist for callers that pick the builder at runtime.

pub mod error;
pub mod geom;
pub mod hull;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{HullError, HullViolation};
pub use geom::{HullCfg, Point, MAX_COORD};
pub use hull::{graham_hull, naive_hull, Algorithm, Graham, Hull, HullBuilder, Naive};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{HullError, HullViolation};
    pub use crate::geom::{angle_from, distance, equals, orient, reflex_or_collinear, Angle};
    pub use crate::geom::{HullCfg, Point, MAX_COORD};
    pub use crate::hull::{graham_hull, naive_hull, Algorithm, Graham, Hull, HullBuilder, Naive};
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn core_types_are_send_and_sync() {
        assert_send_sync::<Point>();
        assert_send_sync::<HullCfg>();
        assert_send_sync::<Hull>();
        assert_send_sync::<geom::Angle>();
        assert_send_sync::<HullError>();
    }

    #[test]
    fn builders_run_concurrently_on_shared_input() {
        let input: Vec<Point> = (0..50)
            .map(|k| {
                let t = k as f64 * 0.37;
                Point::new(t.cos() * (1.0 + 0.1 * (k % 3) as f64), t.sin())
            })
            .collect();
        let cfg = HullCfg::default();
        let (a, b) = std::thread::scope(|s| {
            let ha = s.spawn(|| naive_hull(&input, cfg));
            let hb = s.spawn(|| graham_hull(&input, cfg));
            (ha.join().unwrap(), hb.join().unwrap())
        });
        let (a, b) = (a.unwrap(), b.unwrap());
        assert!(a.same_vertex_set(&b));
    }
}
