use fem1d_quadrature::univariate::GaussOrder;
use fem1d_quadrature::{integrate_reference, Error};
use matrixcompare::assert_scalar_eq;
use std::convert::TryFrom;

#[test]
fn gauss_weights_sum_to_reference_length() {
    for order in GaussOrder::ALL {
        let sum: f64 = order.weights().iter().sum();
        assert_scalar_eq!(sum, 2.0, comp = abs, tol = 1e-12);
        // Also test that weights are positive
        assert!(order.weights().iter().all(|&w| w > 0.0));
    }
}

#[test]
fn gauss_points_are_symmetric() {
    for order in GaussOrder::ALL {
        let (weights, points) = order.rule();
        let n = points.len();
        for i in 0..n {
            assert_scalar_eq!(points[i], -points[n - i - 1], comp = abs, tol = 1e-15);
            assert_scalar_eq!(weights[i], weights[n - i - 1], comp = abs, tol = 1e-15);
        }

        if n % 2 == 1 {
            assert_eq!(points[n / 2], 0.0);
        } else {
            assert!(points.iter().all(|&xi| xi != 0.0));
        }
    }
}

#[test]
fn gauss_rules_satisfy_expected_accuracy() {
    for order in GaussOrder::ALL {
        let expected_polynomial_degree = order.polynomial_degree();

        // Integrate all monomials of degree <= expected polynomial degree that can be
        // exactly integrated
        for alpha in 0..=expected_polynomial_degree as i32 {
            let monomial_integral = (1.0 - (-1.0f64).powi(alpha + 1)) / (alpha as f64 + 1.0);
            let estimated_integral = integrate_reference(order.rule(), |x| x.powi(alpha));

            assert_scalar_eq!(estimated_integral, monomial_integral, comp = abs, tol = 1e-14);
        }
    }
}

#[test]
fn gauss_rules_do_not_integrate_next_even_degree_exactly() {
    // Guards against a table that happens to be a higher-order rule by mistake
    for order in GaussOrder::ALL {
        let alpha = 2 * order.num_points() as i32;
        let exact = 2.0 / (alpha as f64 + 1.0);
        let estimated = integrate_reference(order.rule(), |x| x.powi(alpha));
        assert!((estimated - exact).abs() > 1e-6);
    }
}

#[test]
fn gauss_order_from_number_of_points() {
    for n in 1..=6 {
        let order = GaussOrder::try_from(n).unwrap();
        assert_eq!(order.num_points(), n);
        assert_eq!(usize::from(order), n);
    }

    assert_eq!(GaussOrder::try_from(0), Err(Error::NoRuleAvailable { num_points: 0 }));
    assert_eq!(GaussOrder::try_from(7), Err(Error::NoRuleAvailable { num_points: 7 }));
}

#[test]
fn unsupported_order_error_mentions_requested_points() {
    let err = GaussOrder::try_from(12).unwrap_err();
    assert!(err.to_string().contains("12"));
}
