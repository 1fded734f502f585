//! Assembly of the dense Galerkin system from the bilinear and linear forms.
use crate::basis::HatBasis;
use crate::forms::{BilinearForm, LinearForm};
use crate::linalg::DenseSystem;
use itertools::zip_eq;
use log::debug;
use rayon::prelude::*;

/// Integration settings shared by all entries of the system.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AssemblySettings {
    /// Integrals are restricted to this interval.
    pub domain: [f64; 2],
    /// Number of composite subdivision points per integral.
    pub num_quadrature_points: usize,
}

impl AssemblySettings {
    pub fn new(domain: [f64; 2], num_quadrature_points: usize) -> Self {
        Self {
            domain,
            num_quadrature_points,
        }
    }

    /// Settings integrating over the whole mesh interval of `basis`.
    pub fn covering(basis: &HatBasis, num_quadrature_points: usize) -> Self {
        Self::new(basis.interval(), num_quadrature_points)
    }
}

/// Column indices of the entries in `row` that can be non-zero.
///
/// Hat functions only overlap with their immediate neighbours, so the system is tridiagonal.
pub fn band_columns(row: usize, dim: usize) -> std::ops::Range<usize> {
    row.saturating_sub(1)..(row + 2).min(dim)
}

/// Assembles $A_{uv} = B(\varphi_u, \varphi_v)$ and $b_u = L(\varphi_u)$ for every basis function.
///
/// Rows are evaluated in parallel. Every entry is computed independently, so the result does
/// not depend on the number of threads.
///
/// # Panics
///
/// Panics if the two forms are defined over bases of different size.
pub fn assemble_system<K, F>(
    form: &BilinearForm<K>,
    load: &LinearForm<F>,
    settings: &AssemblySettings,
) -> DenseSystem<f64>
where
    K: Fn(f64) -> f64 + Sync,
    F: Fn(f64) -> f64 + Sync,
{
    let n = form.basis().len();
    assert_eq!(n, load.basis().len(), "bilinear and linear forms must share the basis");
    let AssemblySettings {
        domain,
        num_quadrature_points,
    } = *settings;
    debug!(
        "Assembling {}x{} system over [{}, {}] with {} quadrature points",
        n, n, domain[0], domain[1], num_quadrature_points
    );

    let rows: Vec<(Vec<f64>, f64)> = (0..n)
        .into_par_iter()
        .with_min_len(16)
        .map(|u| {
            let entries = band_columns(u, n)
                .map(|v| form.evaluate(u, v, domain, num_quadrature_points))
                .collect();
            let rhs = load.evaluate(u, domain, num_quadrature_points);
            (entries, rhs)
        })
        .collect();

    let mut system = DenseSystem::zeros(n);
    let mut rhs = Vec::with_capacity(n);
    let mut num_entries = 0;
    for (u, (entries, b_u)) in rows.into_iter().enumerate() {
        for (v, a_uv) in zip_eq(band_columns(u, n), entries) {
            system.set(u, v, a_uv);
            num_entries += 1;
        }
        rhs.push(b_u);
    }
    system.set_result_vector(&rhs);
    debug!("Assembled {} matrix entries", num_entries);

    system
}
