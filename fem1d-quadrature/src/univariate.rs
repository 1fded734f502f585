//! Gauss-Legendre rules for the one-dimensional reference domain `[-1, 1]`.

use crate::{Error, Rule};
use std::convert::TryFrom;

const GAUSS1_WEIGHTS: [f64; 1] = [2.0];
const GAUSS1_POINTS: [f64; 1] = [0.0];

const GAUSS2_WEIGHTS: [f64; 2] = [1.0, 1.0];
const GAUSS2_POINTS: [f64; 2] = [-0.5773502691896257, 0.5773502691896257];

const GAUSS3_WEIGHTS: [f64; 3] = [0.5555555555555556, 0.8888888888888888, 0.5555555555555556];
const GAUSS3_POINTS: [f64; 3] = [-0.7745966692414834, 0.0, 0.7745966692414834];

const GAUSS4_WEIGHTS: [f64; 4] = [
    0.3478548451374538,
    0.6521451548625461,
    0.6521451548625461,
    0.3478548451374538,
];
const GAUSS4_POINTS: [f64; 4] = [
    -0.8611363115940526,
    -0.3399810435848563,
    0.3399810435848563,
    0.8611363115940526,
];

const GAUSS5_WEIGHTS: [f64; 5] = [
    0.2369268850561891,
    0.4786286704993665,
    0.5688888888888889,
    0.4786286704993665,
    0.2369268850561891,
];
const GAUSS5_POINTS: [f64; 5] = [
    -0.9061798459386640,
    -0.5384693101056831,
    0.0,
    0.5384693101056831,
    0.9061798459386640,
];

const GAUSS6_WEIGHTS: [f64; 6] = [
    0.1713244923791704,
    0.3607615730481386,
    0.4679139345726910,
    0.4679139345726910,
    0.3607615730481386,
    0.1713244923791704,
];
const GAUSS6_POINTS: [f64; 6] = [
    -0.9324695142031521,
    -0.6612093864662645,
    -0.2386191860831969,
    0.2386191860831969,
    0.6612093864662645,
    0.9324695142031521,
];

/// Number of points of a Gauss-Legendre rule.
///
/// Given `n` points, the [Gauss quadrature rule] integrates polynomials of degree up to
/// `2 n - 1` exactly. Only the orders with a precomputed table are representable, so an
/// unsupported order is rejected when the `GaussOrder` is constructed rather than when
/// the rule is used.
///
/// Points are stored in ascending order.
///
/// [Gauss quadrature rule]: https://en.wikipedia.org/wiki/Gaussian_quadrature
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GaussOrder {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
}

impl GaussOrder {
    /// All supported orders, in increasing order.
    pub const ALL: [GaussOrder; 6] = [
        GaussOrder::One,
        GaussOrder::Two,
        GaussOrder::Three,
        GaussOrder::Four,
        GaussOrder::Five,
        GaussOrder::Six,
    ];

    pub fn num_points(self) -> usize {
        self as usize
    }

    /// The highest polynomial degree integrated exactly by this rule.
    pub fn polynomial_degree(self) -> usize {
        2 * self.num_points() - 1
    }

    pub fn weights(self) -> &'static [f64] {
        match self {
            Self::One => &GAUSS1_WEIGHTS,
            Self::Two => &GAUSS2_WEIGHTS,
            Self::Three => &GAUSS3_WEIGHTS,
            Self::Four => &GAUSS4_WEIGHTS,
            Self::Five => &GAUSS5_WEIGHTS,
            Self::Six => &GAUSS6_WEIGHTS,
        }
    }

    pub fn points(self) -> &'static [f64] {
        match self {
            Self::One => &GAUSS1_POINTS,
            Self::Two => &GAUSS2_POINTS,
            Self::Three => &GAUSS3_POINTS,
            Self::Four => &GAUSS4_POINTS,
            Self::Five => &GAUSS5_POINTS,
            Self::Six => &GAUSS6_POINTS,
        }
    }

    /// Returns the `(weights, points)` table of this rule.
    pub fn rule(self) -> Rule {
        (self.weights(), self.points())
    }
}

impl Default for GaussOrder {
    fn default() -> Self {
        Self::Three
    }
}

impl TryFrom<usize> for GaussOrder {
    type Error = Error;

    fn try_from(num_points: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|order| order.num_points() == num_points)
            .ok_or(Error::NoRuleAvailable { num_points })
    }
}

impl From<GaussOrder> for usize {
    fn from(order: GaussOrder) -> Self {
        order.num_points()
    }
}
