//! Run both builders on a seeded random point set and compare.
//!
//! Usage:
//!   cargo run -p planar-hull --example compare_builders -- 500
//!
//! Prints hull sizes, wall times, and whether the vertex sets agree.

use planar_hull::{Algorithm, HullBuilder, HullCfg, Point};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;

fn main() {
    let n: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(200);
    let mut rng = StdRng::seed_from_u64(2025);
    let points: Vec<Point> = (0..n)
        .map(|_| Point::new(rng.gen::<f64>(), rng.gen::<f64>()))
        .collect();
    let cfg = HullCfg::default();

    let mut hulls = Vec::new();
    for algo in Algorithm::ALL {
        let t0 = Instant::now();
        match algo.build(&points, cfg) {
            Ok(hull) => {
                println!(
                    "{algo}: n={n}, hull={} vertices, {:.3} ms",
                    hull.len(),
                    t0.elapsed().as_secs_f64() * 1e3
                );
                hulls.push(hull);
            }
            Err(err) => {
                eprintln!("{algo}: {err}");
                return;
            }
        }
    }
    if let [a, b] = hulls.as_slice() {
        println!("vertex sets agree: {}", a.same_vertex_set(b));
    }
}
