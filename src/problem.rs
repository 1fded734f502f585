//! A complete boundary value problem built from a [`SolverConfig`].
use crate::assembly::{assemble_system, AssemblySettings};
use crate::basis::HatBasis;
use crate::config::{ScalarFunction, SolverConfig};
use crate::forms::{BilinearForm, BoundaryTerms, LinearForm, PointLoad};
use crate::linalg::DenseSystem;
use crate::quadrature::GaussOrder;
use crate::solution::Solution;
use eyre::WrapErr;
use log::info;

pub struct Problem {
    basis: HatBasis,
    coefficient: ScalarFunction,
    source: ScalarFunction,
    boundary: BoundaryTerms,
    point_loads: Vec<PointLoad>,
    order: GaussOrder,
    settings: AssemblySettings,
    bias: f64,
}

impl std::fmt::Debug for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Problem")
            .field("basis", &self.basis)
            .field("boundary", &self.boundary)
            .field("point_loads", &self.point_loads)
            .field("order", &self.order)
            .field("settings", &self.settings)
            .field("bias", &self.bias)
            .finish_non_exhaustive()
    }
}

impl Problem {
    pub fn from_config(config: &SolverConfig) -> eyre::Result<Self> {
        config.validate().wrap_err("invalid solver configuration")?;
        let [start, end] = config.domain;
        info!(
            "Constructing basis for {} mesh points over [{}, {}]",
            config.num_points, start, end
        );
        let basis = HatBasis::new(start, end, config.num_points);
        Ok(Self {
            basis,
            coefficient: config.coefficient.to_function(),
            source: config.source.to_function(),
            boundary: config.boundary.into(),
            point_loads: config.point_loads.iter().copied().map(PointLoad::from).collect(),
            order: config.gauss_order()?,
            settings: AssemblySettings::new(config.domain, config.num_quadrature_points),
            bias: config.bias,
        })
    }

    pub fn basis(&self) -> &HatBasis {
        &self.basis
    }

    pub fn settings(&self) -> &AssemblySettings {
        &self.settings
    }

    pub fn quadrature_order(&self) -> GaussOrder {
        self.order
    }

    pub fn bilinear_form(&self) -> BilinearForm<'_, &(dyn Fn(f64) -> f64 + Send + Sync)> {
        BilinearForm::new(&self.basis, self.coefficient.as_ref())
            .with_boundary_terms(self.boundary)
            .with_quadrature_order(self.order)
    }

    pub fn linear_form(&self) -> LinearForm<'_, &(dyn Fn(f64) -> f64 + Send + Sync)> {
        LinearForm::new(&self.basis, self.source.as_ref())
            .with_point_loads(self.point_loads.iter().copied())
            .with_quadrature_order(self.order)
    }

    pub fn assemble(&self) -> DenseSystem<f64> {
        info!("Assembling system with {} unknowns", self.basis.len());
        assemble_system(&self.bilinear_form(), &self.linear_form(), &self.settings)
    }

    /// Assembles and solves the system, returning $u_h$ with the configured constant bias.
    pub fn solve(&self) -> eyre::Result<Solution<'_, impl Fn(f64) -> f64>> {
        let system = self.assemble();
        info!("Solving {}x{} dense system", system.dim(), system.dim());
        let coefficients = system
            .solve()
            .wrap_err("failed to solve the assembled system")?
            .solution();
        let bias = self.bias;
        Ok(Solution::new(&self.basis, coefficients).with_bias(move |_| bias))
    }

    /// Plot title describing the discretization, counting mesh points as probing functions.
    pub fn title(&self) -> String {
        format!(
            "{} probing functions, {} integration points, {} Legendre polynomial roots",
            self.basis.num_points(),
            self.settings.num_quadrature_points,
            self.order.num_points()
        )
    }
}
