//! Quadrature rules for one-dimensional finite element computations.
//!
//! The main purpose of this crate is to support the `fem1d` library. The rules
//! live on the reference interval `[-1, 1]` and can be used independently of `fem1d`.

use std::fmt;
use std::fmt::{Display, Formatter};

pub mod composite;
pub mod univariate;

pub use composite::{integrate, CompositeGauss};
pub use univariate::GaussOrder;

/// Library-wide error type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Indicates that no rule with the requested number of points is available.
    NoRuleAvailable { num_points: usize },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRuleAvailable { num_points } => {
                write!(
                    f,
                    "There is no Gauss-Legendre rule with {} points available (supported: 1 to 6)",
                    num_points
                )
            }
        }
    }
}

impl std::error::Error for Error {}

/// A rule on the reference interval, given as `(weights, points)`.
pub type Rule = (&'static [f64], &'static [f64]);

/// Approximates the integral of `f` over `[-1, 1]` with the given rule.
pub fn integrate_reference(rule: Rule, f: impl Fn(f64) -> f64) -> f64 {
    let (weights, points) = rule;
    weights
        .iter()
        .zip(points)
        .map(|(w, xi)| w * f(*xi))
        .sum()
}
