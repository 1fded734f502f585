//! Dense Gaussian elimination with partial pivoting.
use crate::Real;
use log::{debug, warn};
use nalgebra::{DMatrix, DVector};
use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// Pivots smaller than this in magnitude are accepted but reported.
pub const SMALL_PIVOT_THRESHOLD: f64 = 1e-12;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// Every candidate pivot in the given column was exactly zero.
    SingularMatrix { column: usize },
}

impl Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            &SolveError::SingularMatrix { column } => {
                write!(f, "Matrix is singular: no non-zero pivot in column {}.", column)
            }
        }
    }
}

impl Error for SolveError {}

/// A square linear system $A x = b$ held in dense storage.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseSystem<T: Real> {
    matrix: DMatrix<T>,
    rhs: DVector<T>,
}

impl<T: Real> DenseSystem<T> {
    /// An `n × n` system with zero matrix and zero right-hand side.
    pub fn zeros(n: usize) -> Self {
        Self {
            matrix: DMatrix::zeros(n, n),
            rhs: DVector::zeros(n),
        }
    }

    /// # Panics
    ///
    /// Panics if the matrix is not square or if the dimensions of the matrix and the
    /// right-hand side do not agree.
    pub fn from_parts(matrix: DMatrix<T>, rhs: DVector<T>) -> Self {
        assert!(matrix.is_square(), "system matrix must be square");
        assert_eq!(matrix.nrows(), rhs.len(), "matrix and right-hand side dimensions must agree");
        Self { matrix, rhs }
    }

    pub fn dim(&self) -> usize {
        self.rhs.len()
    }

    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.matrix[(row, col)] = value;
    }

    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.matrix[(row, col)]
    }

    /// Overwrites an entire row of the matrix.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds or `values.len() != self.dim()`.
    pub fn set_row(&mut self, row: usize, values: &[T]) {
        assert_eq!(values.len(), self.dim(), "row length must equal system dimension");
        for (col, &value) in values.iter().enumerate() {
            self.matrix[(row, col)] = value;
        }
    }

    /// Overwrites the right-hand side.
    ///
    /// # Panics
    ///
    /// Panics if `values.len() != self.dim()`.
    pub fn set_result_vector(&mut self, values: &[T]) {
        assert_eq!(values.len(), self.dim(), "right-hand side length must equal system dimension");
        self.rhs.copy_from_slice(values);
    }

    pub fn matrix(&self) -> &DMatrix<T> {
        &self.matrix
    }

    pub fn rhs(&self) -> &DVector<T> {
        &self.rhs
    }

    pub fn into_parts(self) -> (DMatrix<T>, DVector<T>) {
        (self.matrix, self.rhs)
    }

    /// Reduces the system to upper triangular form by forward elimination.
    ///
    /// At step `k` the row among `k..n` with the largest magnitude in column `k` is swapped
    /// into row `k` together with its right-hand side entry, and column `k` is eliminated from
    /// every row below. Eliminated entries are set to exactly zero. No scaling or
    /// equilibration is performed.
    ///
    /// Pivots smaller than [`SMALL_PIVOT_THRESHOLD`] are logged as a warning.
    pub fn solve(self) -> Result<UpperTriangularSystem<T>, SolveError> {
        let Self { mut matrix, mut rhs } = self;
        let n = rhs.len();
        let small_pivot: T = nalgebra::convert(SMALL_PIVOT_THRESHOLD);
        debug!("Forward elimination of dense {}x{} system", n, n);

        for k in 0..n {
            let mut pivot_row = k;
            for r in (k + 1)..n {
                if matrix[(r, k)].abs() > matrix[(pivot_row, k)].abs() {
                    pivot_row = r;
                }
            }

            let pivot = matrix[(pivot_row, k)];
            if pivot == T::zero() {
                return Err(SolveError::SingularMatrix { column: k });
            }
            if pivot.abs() < small_pivot {
                warn!("Small pivot {} in column {} of {}", pivot, k, n);
            }

            if pivot_row != k {
                matrix.swap_rows(k, pivot_row);
                rhs.swap_rows(k, pivot_row);
            }

            for r in (k + 1)..n {
                let factor = matrix[(r, k)] / pivot;
                for c in (k + 1)..n {
                    let update = factor * matrix[(k, c)];
                    matrix[(r, c)] -= update;
                }
                let update = factor * rhs[k];
                rhs[r] -= update;
                matrix[(r, k)] = T::zero();
            }
        }

        Ok(UpperTriangularSystem { matrix, rhs })
    }
}

/// The result of forward elimination: an upper triangular matrix with non-zero diagonal
/// and the correspondingly transformed right-hand side.
#[derive(Debug, Clone, PartialEq)]
pub struct UpperTriangularSystem<T: Real> {
    matrix: DMatrix<T>,
    rhs: DVector<T>,
}

impl<T: Real> UpperTriangularSystem<T> {
    pub fn matrix(&self) -> &DMatrix<T> {
        &self.matrix
    }

    pub fn rhs(&self) -> &DVector<T> {
        &self.rhs
    }

    pub fn dim(&self) -> usize {
        self.rhs.len()
    }

    /// Computes the solution by back substitution. The triangular system is left untouched.
    pub fn solution(&self) -> DVector<T> {
        let n = self.dim();
        let mut x = DVector::zeros(n);
        for i in (0..n).rev() {
            let mut sum = self.rhs[i];
            for j in (i + 1)..n {
                sum -= self.matrix[(i, j)] * x[j];
            }
            x[i] = sum / self.matrix[(i, i)];
        }
        x
    }
}

/// Solves $A x = b$ by Gaussian elimination with partial pivoting.
///
/// # Panics
///
/// Panics if the dimensions are not compatible (see [`DenseSystem::from_parts`]).
pub fn solve_dense<T: Real>(matrix: DMatrix<T>, rhs: DVector<T>) -> Result<DVector<T>, SolveError> {
    let triangular = DenseSystem::from_parts(matrix, rhs).solve()?;
    Ok(triangular.solution())
}
