//! Functionality for error estimation.
use crate::quadrature::CompositeGauss;
use crate::solution::Solution;

/// Estimate the squared $L^2$ error $\norm{u_h - u}^2_{L^2}$ on the given cell.
#[allow(non_snake_case)]
pub fn estimate_element_L2_error_squared<B>(
    u_h: &Solution<B>,
    u: impl Fn(f64) -> f64,
    element: [f64; 2],
    quadrature: &CompositeGauss,
) -> f64
where
    B: Fn(f64) -> f64,
{
    let [a, b] = element;
    quadrature.integrate(
        |x| {
            let error = u_h.result_at(x) - u(x);
            error * error
        },
        a,
        b,
    )
}

/// Estimate the squared $H^1$ *seminorm* error $\seminorm{u_h - u}^2_{H^1}$ on the given cell.
///
/// The bias of `u_h` is assumed to be affine on the cell. Its contribution to the derivative
/// is approximated by the slope between the cell endpoints.
#[allow(non_snake_case)]
pub fn estimate_element_H1_seminorm_error_squared<B>(
    u_h: &Solution<B>,
    u_prime: impl Fn(f64) -> f64,
    element: [f64; 2],
    quadrature: &CompositeGauss,
) -> f64
where
    B: Fn(f64) -> f64,
{
    let [a, b] = element;
    let bias_slope = (u_h.bias(b) - u_h.bias(a)) / (b - a);
    quadrature.integrate(
        |x| {
            let error = u_h.derivative_at(x) + bias_slope - u_prime(x);
            error * error
        },
        a,
        b,
    )
}

/// Estimate the squared $L^2$ error $\norm{u_h - u}^2_{L^2}$ over the whole mesh, applying
/// `quadrature` to every cell.
#[allow(non_snake_case)]
pub fn estimate_L2_error_squared<B>(u_h: &Solution<B>, u: impl Fn(f64) -> f64, quadrature: &CompositeGauss) -> f64
where
    B: Fn(f64) -> f64,
{
    u_h.basis()
        .cells()
        .map(|element| estimate_element_L2_error_squared(u_h, &u, element, quadrature))
        .sum()
}

/// Estimate the $L^2$ error $\norm{u_h - u}_{L^2}$ over the whole mesh.
#[allow(non_snake_case)]
pub fn estimate_L2_error<B>(u_h: &Solution<B>, u: impl Fn(f64) -> f64, quadrature: &CompositeGauss) -> f64
where
    B: Fn(f64) -> f64,
{
    estimate_L2_error_squared(u_h, u, quadrature).sqrt()
}

/// Estimate the squared $H^1$ *seminorm* error $\seminorm{u_h - u}^2_{H^1}$ over the whole mesh.
#[allow(non_snake_case)]
pub fn estimate_H1_seminorm_error_squared<B>(
    u_h: &Solution<B>,
    u_prime: impl Fn(f64) -> f64,
    quadrature: &CompositeGauss,
) -> f64
where
    B: Fn(f64) -> f64,
{
    u_h.basis()
        .cells()
        .map(|element| estimate_element_H1_seminorm_error_squared(u_h, &u_prime, element, quadrature))
        .sum()
}

/// Estimate the $H^1$ *seminorm* error $\seminorm{u_h - u}_{H^1}$ over the whole mesh.
#[allow(non_snake_case)]
pub fn estimate_H1_seminorm_error<B>(
    u_h: &Solution<B>,
    u_prime: impl Fn(f64) -> f64,
    quadrature: &CompositeGauss,
) -> f64
where
    B: Fn(f64) -> f64,
{
    estimate_H1_seminorm_error_squared(u_h, u_prime, quadrature).sqrt()
}
