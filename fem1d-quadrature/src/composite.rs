//! Composite Gauss-Legendre integration over arbitrary intervals.
use crate::univariate::GaussOrder;

/// Number of panels used for a given number of subdivision points.
///
/// `num_points` counts the equally spaced subdivision points including both endpoints,
/// so the interval is split into `num_points - 1` panels. Zero or one point degenerates to
/// a single panel covering the whole interval.
pub fn num_panels(num_points: usize) -> usize {
    num_points.saturating_sub(1).max(1)
}

/// Approximates $\int_a^b f(x) \, \mathrm{d}x$ with a composite Gauss-Legendre rule.
///
/// The interval `[from, to]` is split into [`num_panels(num_points)`](num_panels) panels of
/// equal, signed width, and the rule of the given order is mapped affinely onto each panel.
/// Consequently `from > to` gives the negated integral over `[to, from]`, and `from == to`
/// returns exactly zero without evaluating `f`.
///
/// The caller is responsible for integrability of `f`; no special care is taken for
/// singular integrands.
pub fn integrate<F>(f: F, from: f64, to: f64, order: GaussOrder, num_points: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    if from == to {
        return 0.0;
    }

    let (weights, points) = order.rule();
    let panels = num_panels(num_points);
    let panel_width = (to - from) / panels as f64;
    let half_width = panel_width / 2.0;

    let mut sum = 0.0;
    for panel in 0..panels {
        let a = from + panel as f64 * panel_width;
        let midpoint = a + half_width;
        let mut panel_sum = 0.0;
        for (w, xi) in weights.iter().zip(points) {
            panel_sum += w * f(half_width * xi + midpoint);
        }
        sum += half_width * panel_sum;
    }
    sum
}

/// Composite Gauss-Legendre settings: rule order and number of subdivision points.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CompositeGauss {
    pub order: GaussOrder,
    pub num_points: usize,
}

impl CompositeGauss {
    pub fn new(order: GaussOrder, num_points: usize) -> Self {
        Self { order, num_points }
    }

    pub fn num_panels(&self) -> usize {
        num_panels(self.num_points)
    }

    /// See [`integrate`].
    pub fn integrate<F>(&self, f: F, from: f64, to: f64) -> f64
    where
        F: Fn(f64) -> f64,
    {
        integrate(f, from, to, self.order, self.num_points)
    }
}

impl Default for CompositeGauss {
    fn default() -> Self {
        Self::new(GaussOrder::default(), 100)
    }
}
