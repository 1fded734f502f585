//! The reconstructed approximation $u_h(x) = g(x) + \sum_i c_i \varphi_i(x)$.
use crate::basis::HatBasis;
use nalgebra::DVector;

/// A finite element function over a [`HatBasis`] with an additive bias $g$.
///
/// The bias carries inhomogeneous boundary values that the basis itself cannot represent.
#[derive(Clone)]
pub struct Solution<'a, B = fn(f64) -> f64> {
    basis: &'a HatBasis,
    coefficients: DVector<f64>,
    bias: B,
}

impl<B> std::fmt::Debug for Solution<'_, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solution")
            .field("basis", self.basis)
            .field("coefficients", &self.coefficients)
            .finish_non_exhaustive()
    }
}

fn zero_bias(_: f64) -> f64 {
    0.0
}

impl<'a> Solution<'a> {
    /// # Panics
    ///
    /// Panics if there are more coefficients than basis functions.
    pub fn new(basis: &'a HatBasis, coefficients: DVector<f64>) -> Self {
        assert!(
            coefficients.len() <= basis.len(),
            "at most one coefficient per basis function ({} coefficients, {} functions)",
            coefficients.len(),
            basis.len()
        );
        Self {
            basis,
            coefficients,
            bias: zero_bias,
        }
    }
}

impl<'a, B> Solution<'a, B>
where
    B: Fn(f64) -> f64,
{
    pub fn with_bias<B2>(self, bias: B2) -> Solution<'a, B2>
    where
        B2: Fn(f64) -> f64,
    {
        Solution {
            basis: self.basis,
            coefficients: self.coefficients,
            bias,
        }
    }

    pub fn basis(&self) -> &'a HatBasis {
        self.basis
    }

    pub fn coefficients(&self) -> &DVector<f64> {
        &self.coefficients
    }

    pub fn bias(&self, x: f64) -> f64 {
        (self.bias)(x)
    }

    fn active_coefficients(&self, x: f64) -> impl Iterator<Item = (usize, f64)> + '_ {
        let range = self.basis.functions_near(x);
        let end = range.end.min(self.coefficients.len());
        (range.start..end).map(move |i| (i, self.coefficients[i]))
    }

    /// Evaluates $u_h(x)$.
    pub fn result_at(&self, x: f64) -> f64 {
        let sum: f64 = self
            .active_coefficients(x)
            .map(|(i, c_i)| c_i * self.basis.value(i, x))
            .sum();
        self.bias(x) + sum
    }

    /// The derivative of the finite element part $\sum_i c_i \varphi_i'(x)$.
    ///
    /// The bias is not differentiated. At mesh nodes the kink conventions of
    /// [`HatFunction::derivative`](crate::basis::HatFunction::derivative) apply.
    pub fn derivative_at(&self, x: f64) -> f64 {
        self.active_coefficients(x)
            .map(|(i, c_i)| c_i * self.basis.derivative(i, x))
            .sum()
    }

    /// Evaluates the solution at `num_samples` evenly spaced points of `[from, to]`,
    /// including both endpoints, returning `[x, u_h(x)]` pairs.
    pub fn sample(&self, from: f64, to: f64, num_samples: usize) -> Vec<[f64; 2]> {
        sample_points(from, to, num_samples)
            .map(|x| [x, self.result_at(x)])
            .collect()
    }
}

/// `n` evenly spaced points of `[from, to]` including both endpoints. A single point
/// is placed at `from`.
pub fn sample_points(from: f64, to: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 { (to - from) / (n - 1) as f64 } else { 0.0 };
    (0..n).map(move |i| if i + 1 == n && n > 1 { to } else { from + i as f64 * step })
}
