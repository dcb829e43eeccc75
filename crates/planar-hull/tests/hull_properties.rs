//! Property-based tests for both hull builders.
//!
//! - Subset: every hull vertex is an input point.
//! - Containment/convexity: every input point is on or left of every hull edge,
//!   and no hull vertex is a collinear or reflex corner.
//! - Agreement: naive and Graham return the same vertex set.
//! - Duplication: adding an exact duplicate does not change the hull.
//!
//! Each property runs over continuous coordinates and over a small integer
//! lattice; the lattice makes collinear boundary points and shared rays from
//! the reference point common.

use planar_hull::prelude::*;
use proptest::prelude::*;
use std::collections::HashSet;

/// Strategy for generating finite f64 coordinates
fn finite_coordinate() -> impl Strategy<Value = f64> {
    (-100.0..100.0).prop_filter("must be finite", |x: &f64| x.is_finite())
}

fn point_2d() -> impl Strategy<Value = Point> {
    (finite_coordinate(), finite_coordinate()).prop_map(Point::from)
}

fn point_set(max: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec(point_2d(), 0..max)
}

fn lattice_point() -> impl Strategy<Value = Point> {
    (-10i32..10, -10i32..10).prop_map(|(x, y)| Point::new(f64::from(x), f64::from(y)))
}

fn lattice_set(max: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec(lattice_point(), 0..max)
}

/// Containment slack scaled to the coordinate range.
const TOL: f64 = 1e-9;

proptest! {
    #[test]
    fn prop_hull_is_subset_of_input(points in point_set(40)) {
        let input: HashSet<Point> = points.iter().copied().collect();
        for algo in Algorithm::ALL {
            let hull = algo.build(&points, HullCfg::default()).unwrap();
            prop_assert!(hull.vertices().iter().all(|v| input.contains(v)), "{}", algo);
        }
    }

    #[test]
    fn prop_hull_contains_all_points(points in point_set(40)) {
        for algo in Algorithm::ALL {
            let hull = algo.build(&points, HullCfg::default()).unwrap();
            let checked = hull.check_against(&points, TOL);
            prop_assert!(checked.is_ok(), "{}: {:?}", algo, checked);
        }
    }

    #[test]
    fn prop_builders_agree(points in point_set(40)) {
        let cfg = HullCfg::default();
        let naive = naive_hull(&points, cfg).unwrap();
        let graham = graham_hull(&points, cfg).unwrap();
        prop_assert!(naive.same_vertex_set(&graham), "{:?} vs {:?}", naive, graham);
    }

    #[test]
    fn prop_duplicate_point_does_not_change_hull(
        points in prop::collection::vec(point_2d(), 1..30),
        pick in any::<prop::sample::Index>(),
    ) {
        let cfg = HullCfg::default();
        let mut with_dup = points.clone();
        with_dup.push(points[pick.index(points.len())]);
        for algo in Algorithm::ALL {
            let base = algo.build(&points, cfg).unwrap();
            let dup = algo.build(&with_dup, cfg).unwrap();
            prop_assert_eq!(base.vertices(), dup.vertices());
        }
    }

    #[test]
    fn prop_lattice_hull_is_subset_of_input(points in lattice_set(60)) {
        let input: HashSet<Point> = points.iter().copied().collect();
        for algo in Algorithm::ALL {
            let hull = algo.build(&points, HullCfg::default()).unwrap();
            prop_assert!(hull.vertices().iter().all(|v| input.contains(v)), "{}", algo);
        }
    }

    #[test]
    fn prop_lattice_hull_contains_all_points(points in lattice_set(60)) {
        for algo in Algorithm::ALL {
            let hull = algo.build(&points, HullCfg::default()).unwrap();
            // Integer coordinates keep every cross product exact.
            let checked = hull.check_against(&points, 0.0);
            prop_assert!(checked.is_ok(), "{}: {:?} for {:?}", algo, checked, hull);
        }
    }

    #[test]
    fn prop_lattice_builders_agree(points in lattice_set(60)) {
        let cfg = HullCfg::default();
        let naive = naive_hull(&points, cfg).unwrap();
        let graham = graham_hull(&points, cfg).unwrap();
        prop_assert_eq!(naive.vertices(), graham.vertices());
    }

    #[test]
    fn prop_lattice_duplicate_point_does_not_change_hull(
        points in prop::collection::vec(lattice_point(), 1..40),
        pick in any::<prop::sample::Index>(),
    ) {
        let cfg = HullCfg::default();
        let mut with_dup = points.clone();
        with_dup.push(points[pick.index(points.len())]);
        for algo in Algorithm::ALL {
            let base = algo.build(&points, cfg).unwrap();
            let dup = algo.build(&with_dup, cfg).unwrap();
            prop_assert_eq!(base.vertices(), dup.vertices());
        }
    }

    #[test]
    fn prop_small_inputs_return_distinct_points(points in point_set(3)) {
        let distinct: HashSet<Point> = points.iter().copied().collect();
        for algo in Algorithm::ALL {
            let hull = algo.build(&points, HullCfg::default()).unwrap();
            if distinct.len() < 3 {
                prop_assert_eq!(hull.len(), distinct.len());
            } else {
                prop_assert!(hull.len() == 3 || hull.len() == 2);
            }
        }
    }
}

#[test]
fn non_finite_input_is_rejected_by_every_builder() {
    let points = vec![Point::new(0.0, 0.0), Point::new(f64::INFINITY, 1.0)];
    for algo in Algorithm::ALL {
        let err = algo.build(&points, HullCfg::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "point 1 has a non-finite coordinate (inf, 1)"
        );
    }
}

#[test]
fn huge_coordinates_are_rejected_by_every_builder() {
    let s = 1e200;
    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(s, 0.0),
        Point::new(s, s),
        Point::new(0.0, s),
        Point::new(s / 2.0, s / 2.0),
    ];
    for algo in Algorithm::ALL {
        assert!(matches!(
            algo.build(&points, HullCfg::default()),
            Err(HullError::OutOfRange { index: 1, .. })
        ));
    }
    // The same square scaled into range builds normally.
    let scaled: Vec<Point> = points.iter().map(|p| Point::new(p.x() / s, p.y() / s)).collect();
    for algo in Algorithm::ALL {
        let hull = algo.build(&scaled, HullCfg::default()).unwrap();
        assert_eq!(hull.len(), 4, "{algo}");
        assert_eq!(hull.check_against(&scaled, TOL), Ok(()));
    }
}
