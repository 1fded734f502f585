//! Solver configuration, loadable from JSON.
//!
//! Every field has a default, so an empty JSON object `{}` describes the reference problem:
//! $-(k u')' = 0$ on $[0, 2]$ with $k = 1$ for $x \leq 1$ and $k = 2$ otherwise, a Robin
//! condition at the left end driven by a point load of $-20$, and $u(2) = 0$.
use crate::forms::{BoundaryTerms, PointLoad};
use crate::quadrature::GaussOrder;
use eyre::{eyre, WrapErr};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// A scalar function of $x$ owned by the solver and shareable between threads.
pub type ScalarFunction = Box<dyn Fn(f64) -> f64 + Send + Sync>;

/// The diffusion coefficient $k(x)$.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum CoefficientConfig {
    Constant { value: f64 },
    /// `left` for $x \leq$ `split`, `right` otherwise.
    Piecewise { split: f64, left: f64, right: f64 },
}

impl Default for CoefficientConfig {
    fn default() -> Self {
        Self::Piecewise {
            split: 1.0,
            left: 1.0,
            right: 2.0,
        }
    }
}

impl CoefficientConfig {
    pub fn to_function(&self) -> ScalarFunction {
        match *self {
            Self::Constant { value } => Box::new(move |_| value),
            Self::Piecewise { split, left, right } => Box::new(move |x| if x <= split { left } else { right }),
        }
    }

    /// Some value the coefficient attains that is not strictly positive.
    fn non_positive_value(&self) -> Option<f64> {
        match *self {
            Self::Constant { value } => (value <= 0.0 || !value.is_finite()).then_some(value),
            Self::Piecewise { left, right, .. } => [left, right]
                .into_iter()
                .find(|&v| v <= 0.0 || !v.is_finite()),
        }
    }
}

/// The distributed source $f(x)$.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum SourceConfig {
    Constant { value: f64 },
    /// $f(x) = c_0 + c_1 x + c_2 x^2 + \dots$
    Polynomial { coefficients: Vec<f64> },
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::Constant { value: 0.0 }
    }
}

impl SourceConfig {
    pub fn to_function(&self) -> ScalarFunction {
        match self {
            &Self::Constant { value } => Box::new(move |_| value),
            Self::Polynomial { coefficients } => {
                let coefficients = coefficients.clone();
                Box::new(move |x| coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c))
            }
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoundaryConfig {
    pub flux_point: Option<f64>,
    pub trace_point: Option<f64>,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        let BoundaryTerms {
            flux_point,
            trace_point,
        } = BoundaryTerms::default();
        Self {
            flux_point,
            trace_point,
        }
    }
}

impl From<BoundaryConfig> for BoundaryTerms {
    fn from(config: BoundaryConfig) -> Self {
        BoundaryTerms {
            flux_point: config.flux_point,
            trace_point: config.trace_point,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PointLoadConfig {
    pub at: f64,
    pub value: f64,
}

impl From<PointLoadConfig> for PointLoad {
    fn from(config: PointLoadConfig) -> Self {
        PointLoad {
            at: config.at,
            value: config.value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    pub domain: [f64; 2],
    /// Number of mesh points, including both ends of the domain.
    pub num_points: usize,
    /// Composite subdivision points for every integral.
    pub num_quadrature_points: usize,
    /// Number of Gauss-Legendre points per panel, 1 to 6.
    pub gauss_points: usize,
    pub coefficient: CoefficientConfig,
    pub source: SourceConfig,
    pub boundary: BoundaryConfig,
    pub point_loads: Vec<PointLoadConfig>,
    /// Constant bias added to the solution, which is also its value at the right end.
    pub bias: f64,
    pub output: PathBuf,
    pub vtk_output: Option<PathBuf>,
    pub plot_samples: usize,
    pub plot_width: u32,
    pub plot_height: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            domain: [0.0, 2.0],
            num_points: 200,
            num_quadrature_points: 150,
            gauss_points: 6,
            coefficient: CoefficientConfig::default(),
            source: SourceConfig::default(),
            boundary: BoundaryConfig::default(),
            point_loads: vec![PointLoadConfig { at: 0.0, value: -20.0 }],
            bias: 0.0,
            output: PathBuf::from("test.png"),
            vtk_output: None,
            plot_samples: 500,
            plot_width: 1920,
            plot_height: 1080,
        }
    }
}

impl SolverConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).wrap_err_with(|| format!("failed to open config file {}", path.display()))?;
        let config: Self = serde_json::from_reader(BufReader::new(file))
            .wrap_err_with(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> eyre::Result<Self> {
        serde_json::from_str(json).wrap_err("failed to parse solver config")
    }

    pub fn to_json_string(&self) -> eyre::Result<String> {
        serde_json::to_string_pretty(self).wrap_err("failed to serialize solver config")
    }

    pub fn gauss_order(&self) -> eyre::Result<GaussOrder> {
        GaussOrder::try_from(self.gauss_points).wrap_err("invalid gauss_points")
    }

    /// Checks the configuration for values the solver cannot work with.
    pub fn validate(&self) -> eyre::Result<()> {
        let [start, end] = self.domain;
        if !(start.is_finite() && end.is_finite() && start < end) {
            return Err(eyre!("domain [{}, {}] must be finite and non-empty", start, end));
        }
        if self.num_points < 2 {
            return Err(eyre!("num_points must be at least 2, got {}", self.num_points));
        }
        self.gauss_order()?;
        if let Some(value) = self.coefficient.non_positive_value() {
            return Err(eyre!("coefficient must be positive and finite, got {}", value));
        }
        if self.plot_samples < 2 {
            return Err(eyre!("plot_samples must be at least 2, got {}", self.plot_samples));
        }
        if self.plot_width == 0 || self.plot_height == 0 {
            return Err(eyre!(
                "plot dimensions must be non-zero, got {}x{}",
                self.plot_width,
                self.plot_height
            ));
        }
        Ok(())
    }
}
