use fem1d::basis::{HatBasis, HatKind};
use matrixcompare::assert_scalar_eq;
use proptest::prelude::*;
use util::assert_panics;

#[test]
fn hat_values_on_three_point_mesh() {
    let basis = HatBasis::new(0.0, 2.0, 3);
    assert_eq!(basis.len(), 2);
    assert_eq!(basis.spacing(), 1.0);

    assert_eq!(basis.value(1, 1.0), 1.0);
    assert_eq!(basis.value(1, 0.0), 0.0);
    assert_eq!(basis.value(1, 2.0), 0.0);
    assert_eq!(basis.value(1, 0.5), 0.5);
    assert_eq!(basis.value(1, 1.5), 0.5);

    assert_eq!(basis.value(0, 0.0), 1.0);
    assert_eq!(basis.value(0, 1.0), 0.0);
    assert_eq!(basis.value(0, 0.25), 0.75);
}

#[test]
fn hat_kinds_and_supports() {
    let basis = HatBasis::new(0.0, 2.0, 5);
    assert_eq!(basis.len(), 4);
    assert_eq!(basis.function(0).kind(), HatKind::LeftBoundary);
    assert!(basis.iter().skip(1).all(|phi| phi.kind() == HatKind::Interior));

    assert_eq!(basis.support(0), [0.0, 0.5]);
    assert_eq!(basis.support(1), [0.0, 1.0]);
    assert_eq!(basis.support(3), [1.0, 2.0]);
    assert_eq!(basis.node(0), 0.0);
    assert_eq!(basis.node(2), 1.0);
    assert_eq!(basis.node(4), 2.0);
}

#[test]
fn hat_derivatives() {
    let basis = HatBasis::new(0.0, 2.0, 5);
    let h = basis.spacing();

    // Rising and falling edges of the hat at x = 1
    assert_eq!(basis.derivative(2, 0.75), 1.0 / h);
    assert_eq!(basis.derivative(2, 1.25), -1.0 / h);
    assert_eq!(basis.derivative(2, 1.0), 0.0);
    assert_eq!(basis.derivative(2, 1.6), 0.0);
    assert_eq!(basis.derivative(2, 0.4), 0.0);

    // The boundary half hat has constant slope on its closed support
    assert_eq!(basis.derivative(0, 0.0), -1.0 / h);
    assert_eq!(basis.derivative(0, 0.5), -1.0 / h);
    assert_eq!(basis.derivative(0, 0.6), 0.0);
    assert_eq!(basis.derivative(0, -0.1), 0.0);
}

#[test]
fn values_vanish_outside_the_mesh() {
    let basis = HatBasis::new(-1.0, 1.0, 9);
    for phi in &basis {
        assert_eq!(phi.value(-1.5), 0.0);
        assert_eq!(phi.value(1.5), 0.0);
        assert_eq!(phi.derivative(-1.5), 0.0);
        assert_eq!(phi.derivative(1.5), 0.0);
    }
}

#[test]
fn cells_cover_the_interval() {
    let basis = HatBasis::new(0.0, 1.0, 5);
    let cells: Vec<_> = basis.cells().collect();
    assert_eq!(cells.len(), 4);
    assert_eq!(cells[0], [0.0, 0.25]);
    assert_eq!(cells[3], [0.75, 1.0]);
    for pair in cells.windows(2) {
        assert_eq!(pair[0][1], pair[1][0]);
    }
}

#[test]
fn invalid_construction_panics() {
    assert_panics!(HatBasis::new(0.0, 1.0, 1));
    assert_panics!(HatBasis::new(0.0, 1.0, 0));
    assert_panics!(HatBasis::new(1.0, 0.0, 5));
    assert_panics!(HatBasis::new(0.0, f64::INFINITY, 5));
    assert_panics!(HatBasis::new(f64::NAN, 1.0, 5));
}

#[test]
fn out_of_range_index_panics() {
    let basis = HatBasis::new(0.0, 1.0, 4);
    assert_panics!(basis.value(3, 0.5));
    assert_panics!(basis.derivative(3, 0.5));
    assert_panics!(basis.support(10));
    assert_panics!(basis.node(4));
}

#[test]
fn hats_are_exact_kronecker_deltas_at_mesh_points() {
    for (start, end) in [(0.0, 2.0), (-1.0, 0.7)] {
        for n in 2..=333 {
            let basis = HatBasis::new(start, end, n);
            for i in 0..basis.len() {
                let x = basis.node(i);
                for j in 0..basis.len() {
                    let expected = if i == j { 1.0 } else { 0.0 };
                    assert_eq!(basis.value(j, x), expected, "n = {}, i = {}, j = {}", n, i, j);
                }
            }
            // No function is associated with the right boundary node
            assert!(basis.iter().all(|phi| phi.value(end) == 0.0));
        }
    }
}

proptest! {
    #[test]
    fn hats_sum_to_one_away_from_the_right_boundary(x in 0.0 ..= 1.5f64) {
        let basis = HatBasis::new(0.0, 2.0, 9);
        let sum: f64 = basis.iter().map(|phi| phi.value(x)).sum();
        assert_scalar_eq!(sum, 1.0, comp = abs, tol = 1e-12);
    }

    #[test]
    fn functions_near_never_misses_a_supporting_function(x in -1.0 ..= 3.0f64, n in 2 .. 30usize) {
        let basis = HatBasis::new(0.0, 2.0, n);
        let near = basis.functions_near(x);
        for i in (0..basis.len()).filter(|i| !near.contains(i)) {
            prop_assert_eq!(basis.value(i, x), 0.0);
            prop_assert_eq!(basis.derivative(i, x), 0.0);
        }
    }

    #[test]
    fn values_are_bounded_by_zero_and_one(x in -0.5 ..= 2.5f64) {
        let basis = HatBasis::new(0.0, 2.0, 7);
        for phi in &basis {
            let value = phi.value(x);
            prop_assert!(value >= 0.0 && value <= 1.0 + 1e-12);
            prop_assert!(value == 0.0 || phi.contains(x));
        }
    }
}
