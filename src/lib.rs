//! Piecewise-linear finite elements for the one-dimensional boundary value problem
//! $-(k(x) u'(x))' = f(x)$.
//!
//! The numerical pipeline consists of
//!
//! - [`quadrature`]: fixed-order Gauss-Legendre rules and composite integration,
//! - [`basis`]: hat functions over a uniform mesh,
//! - [`forms`]: the bilinear form (stiffness entries) and the load functional,
//! - [`linalg`]: dense Gaussian elimination with partial pivoting,
//! - [`assembly`]: glue that fills the dense system from the forms,
//! - [`solution`]: the reconstructed FEM solution $u_h$.
//!
//! [`problem`], [`config`] and [`io`] wire these together into a complete solver that
//! writes the solution to PNG and VTK files.
use nalgebra::RealField;

pub mod assembly;
pub mod basis;
pub mod config;
pub mod error;
pub mod forms;
pub mod io;
pub mod linalg;
pub mod problem;
pub mod solution;

pub mod quadrature {
    pub use fem1d_quadrature::*;
}

pub extern crate nalgebra;

/// Scalar types supported by the generic linear algebra routines.
pub trait Real: RealField + Copy {}

impl<T: RealField + Copy> Real for T {}
