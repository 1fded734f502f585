//! The weak form of $-(k u')' = f$ discretized with hat functions.
//!
//! [`BilinearForm`] computes the entries of the system matrix and [`LinearForm`] the
//! entries of the right-hand side. Both are pure functions of the basis indices passed
//! to them, so a single form may be evaluated from several threads at once.
use crate::basis::HatBasis;
use crate::quadrature::{integrate, GaussOrder};

/// Point evaluations added to the integral part of the bilinear form.
///
/// With flux point $p_f$ and trace point $p_t$ the form reads
///
/// $$ B(u, v) = u'(p_f) v(p_f) - u(p_t) v(p_t) + \int k u' v' \, \mathrm{d}x. $$
///
/// A point set to `None` drops the corresponding term.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundaryTerms {
    pub flux_point: Option<f64>,
    pub trace_point: Option<f64>,
}

impl BoundaryTerms {
    /// No boundary contributions; only the stiffness integral remains.
    pub fn none() -> Self {
        Self {
            flux_point: None,
            trace_point: None,
        }
    }

    /// A Robin-type trace term at `x`, without a flux term.
    pub fn trace_at(x: f64) -> Self {
        Self {
            flux_point: None,
            trace_point: Some(x),
        }
    }

    pub fn evaluate(&self, basis: &HatBasis, u: usize, v: usize) -> f64 {
        let flux = self
            .flux_point
            .map(|x| basis.derivative(u, x) * basis.value(v, x))
            .unwrap_or(0.0);
        let trace = self
            .trace_point
            .map(|x| basis.value(u, x) * basis.value(v, x))
            .unwrap_or(0.0);
        flux - trace
    }
}

impl Default for BoundaryTerms {
    /// Flux term at `x = 1` and trace term at `x = 0`.
    fn default() -> Self {
        Self {
            flux_point: Some(1.0),
            trace_point: Some(0.0),
        }
    }
}

/// Intersection of two closed intervals, or `None` if it has no interior.
pub fn intersect_intervals(a: [f64; 2], b: [f64; 2]) -> Option<[f64; 2]> {
    let lo = a[0].max(b[0]);
    let hi = a[1].min(b[1]);
    (lo < hi).then_some([lo, hi])
}

/// The bilinear form $B(u, v)$ for a diffusion coefficient $k$.
#[derive(Debug, Clone)]
pub struct BilinearForm<'a, K> {
    basis: &'a HatBasis,
    coefficient: K,
    boundary: BoundaryTerms,
    order: GaussOrder,
}

impl<'a, K> BilinearForm<'a, K>
where
    K: Fn(f64) -> f64,
{
    /// Creates the form with [default boundary terms](BoundaryTerms::default) and a
    /// six-point Gauss rule.
    pub fn new(basis: &'a HatBasis, coefficient: K) -> Self {
        Self {
            basis,
            coefficient,
            boundary: BoundaryTerms::default(),
            order: GaussOrder::Six,
        }
    }

    pub fn with_boundary_terms(self, boundary: BoundaryTerms) -> Self {
        Self { boundary, ..self }
    }

    pub fn with_quadrature_order(self, order: GaussOrder) -> Self {
        Self { order, ..self }
    }

    pub fn basis(&self) -> &'a HatBasis {
        self.basis
    }

    pub fn boundary_terms(&self) -> &BoundaryTerms {
        &self.boundary
    }

    pub fn quadrature_order(&self) -> GaussOrder {
        self.order
    }

    pub fn coefficient(&self, x: f64) -> f64 {
        (self.coefficient)(x)
    }

    /// The interval on which $k u' v'$ can be non-zero within `domain`.
    ///
    /// # Panics
    ///
    /// Panics if `u` or `v` is not a valid basis index.
    pub fn integration_range(&self, u: usize, v: usize, domain: [f64; 2]) -> Option<[f64; 2]> {
        let overlap = intersect_intervals(self.basis.support(u), self.basis.support(v))?;
        intersect_intervals(overlap, domain)
    }

    /// Evaluates $B(\varphi_u, \varphi_v)$.
    ///
    /// The stiffness integral is taken over the overlap of both supports with `domain`,
    /// using a composite rule with `num_points` subdivision points. When the supports do not
    /// overlap within `domain` the integral contributes exactly zero and only the boundary
    /// terms remain.
    ///
    /// # Panics
    ///
    /// Panics if `u` or `v` is not a valid basis index.
    pub fn evaluate(&self, u: usize, v: usize, domain: [f64; 2], num_points: usize) -> f64 {
        let phi_u = self.basis.function(u);
        let phi_v = self.basis.function(v);
        let boundary = self.boundary.evaluate(self.basis, u, v);

        let integral = match self.integration_range(u, v, domain) {
            Some([from, to]) => {
                let integrand = |x: f64| self.coefficient(x) * phi_u.derivative(x) * phi_v.derivative(x);
                integrate(integrand, from, to, self.order, num_points)
            }
            None => 0.0,
        };

        boundary + integral
    }
}

/// A concentrated load $P \delta(x - a)$ contributing $P \varphi_i(a)$ to the right-hand side.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointLoad {
    pub at: f64,
    pub value: f64,
}

/// The linear form $L(v) = \int f v \, \mathrm{d}x + \sum_j P_j v(a_j)$.
#[derive(Debug, Clone)]
pub struct LinearForm<'a, F> {
    basis: &'a HatBasis,
    source: F,
    point_loads: Vec<PointLoad>,
    order: GaussOrder,
}

impl<'a> LinearForm<'a, fn(f64) -> f64> {
    /// A form with zero source and no point loads.
    pub fn zero(basis: &'a HatBasis) -> Self {
        fn zero_source(_: f64) -> f64 {
            0.0
        }
        Self::new(basis, zero_source as fn(f64) -> f64)
    }
}

impl<'a, F> LinearForm<'a, F>
where
    F: Fn(f64) -> f64,
{
    pub fn new(basis: &'a HatBasis, source: F) -> Self {
        Self {
            basis,
            source,
            point_loads: Vec::new(),
            order: GaussOrder::Six,
        }
    }

    pub fn with_point_load(mut self, load: PointLoad) -> Self {
        self.point_loads.push(load);
        self
    }

    pub fn with_point_loads(mut self, loads: impl IntoIterator<Item = PointLoad>) -> Self {
        self.point_loads.extend(loads);
        self
    }

    pub fn with_quadrature_order(self, order: GaussOrder) -> Self {
        Self { order, ..self }
    }

    pub fn basis(&self) -> &'a HatBasis {
        self.basis
    }

    pub fn source(&self, x: f64) -> f64 {
        (self.source)(x)
    }

    pub fn point_loads(&self) -> &[PointLoad] {
        &self.point_loads
    }

    /// Evaluates $L(\varphi_v)$, integrating the source over `support(v) ∩ domain`.
    ///
    /// # Panics
    ///
    /// Panics if `v` is not a valid basis index.
    pub fn evaluate(&self, v: usize, domain: [f64; 2], num_points: usize) -> f64 {
        let phi_v = self.basis.function(v);
        let concentrated: f64 = self
            .point_loads
            .iter()
            .map(|load| load.value * phi_v.value(load.at))
            .sum();

        let distributed = match intersect_intervals(phi_v.support(), domain) {
            Some([from, to]) => integrate(|x| (self.source)(x) * phi_v.value(x), from, to, self.order, num_points),
            None => 0.0,
        };

        concentrated + distributed
    }
}
