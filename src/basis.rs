//! Piecewise-linear hat functions over a uniform one-dimensional mesh.
//!
//! A mesh over `[start, end]` with `n` points has spacing `h = (end - start) / (n - 1)`.
//! [`HatBasis`] holds `n - 1` functions: a half hat at the left boundary followed by the
//! full hats of the interior nodes. No function is associated with the right boundary node,
//! which is where the Dirichlet condition of the problem is imposed.
use std::ops::Range;
use std::slice;

/// The shape of a single hat function.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HatKind {
    /// Equal to one at the left boundary node and decaying to zero one cell to the right.
    LeftBoundary,
    /// Rising from zero to one over the cell left of the node and falling back to zero
    /// over the cell right of it.
    Interior,
}

/// A piecewise-linear function associated with a single mesh node.
///
/// Both [`value`](Self::value) and [`derivative`](Self::derivative) are defined on the whole
/// real line and vanish outside [`support`](Self::support).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HatFunction {
    kind: HatKind,
    node: f64,
    h: f64,
    support: [f64; 2],
}

impl HatFunction {
    pub fn left_boundary(node: f64, h: f64) -> Self {
        Self::with_support(HatKind::LeftBoundary, node, h, [node, node + h])
    }

    pub fn interior(node: f64, h: f64) -> Self {
        Self::with_support(HatKind::Interior, node, h, [node - h, node + h])
    }

    /// A hat whose support ends exactly at the given neighbouring mesh nodes.
    fn with_support(kind: HatKind, node: f64, h: f64, support: [f64; 2]) -> Self {
        Self { kind, node, h, support }
    }

    pub fn kind(&self) -> HatKind {
        self.kind
    }

    /// The mesh node at which the function attains the value one.
    pub fn node(&self) -> f64 {
        self.node
    }

    /// The closed interval outside of which the function is zero.
    pub fn support(&self) -> [f64; 2] {
        self.support
    }

    pub fn contains(&self, x: f64) -> bool {
        let [lo, hi] = self.support;
        lo <= x && x <= hi
    }

    pub fn value(&self, x: f64) -> f64 {
        if !self.contains(x) {
            return 0.0;
        }
        // Normalized by the actual node distances, so nodal values are exact
        let [lo, hi] = self.support;
        match self.kind {
            _ if x == self.node => 1.0,
            HatKind::LeftBoundary => (hi - x) / (hi - self.node),
            HatKind::Interior if x < self.node => (x - lo) / (self.node - lo),
            HatKind::Interior => (hi - x) / (hi - self.node),
        }
    }

    /// The slope of the function at `x`.
    ///
    /// The derivative is not defined at the kinks. By convention it is taken to be zero
    /// exactly at the peak of an interior hat, and the one-sided slope of the support at
    /// the support endpoints. It is zero outside the support.
    pub fn derivative(&self, x: f64) -> f64 {
        if !self.contains(x) {
            return 0.0;
        }
        match self.kind {
            HatKind::LeftBoundary => -1.0 / self.h,
            HatKind::Interior if x == self.node => 0.0,
            HatKind::Interior if x < self.node => 1.0 / self.h,
            HatKind::Interior => -1.0 / self.h,
        }
    }
}

/// The set of hat functions over a uniform mesh.
///
/// Immutable after construction, and therefore safe to share between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct HatBasis {
    interval: [f64; 2],
    num_points: usize,
    h: f64,
    functions: Vec<HatFunction>,
}

impl HatBasis {
    /// Constructs the basis for a uniform mesh of `num_points` points over `[start, end]`.
    ///
    /// # Panics
    ///
    /// Panics if `num_points < 2`, or if `start` and `end` are not finite with `start < end`.
    pub fn new(start: f64, end: f64, num_points: usize) -> Self {
        assert!(num_points >= 2, "a mesh needs at least two points");
        assert!(
            start.is_finite() && end.is_finite() && start < end,
            "mesh interval must be finite and non-empty"
        );

        let h = (end - start) / (num_points - 1) as f64;
        let mesh_point = |i: usize| {
            if i + 1 == num_points {
                end
            } else {
                start + i as f64 * h
            }
        };
        let functions = (0..num_points - 1)
            .map(|i| {
                let node = mesh_point(i);
                if i == 0 {
                    HatFunction::with_support(HatKind::LeftBoundary, node, h, [node, mesh_point(1)])
                } else {
                    let support = [mesh_point(i - 1), mesh_point(i + 1)];
                    HatFunction::with_support(HatKind::Interior, node, h, support)
                }
            })
            .collect();

        Self {
            interval: [start, end],
            num_points,
            h,
            functions,
        }
    }

    /// Number of basis functions, which is one less than the number of mesh points.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    /// The mesh spacing `h`.
    pub fn spacing(&self) -> f64 {
        self.h
    }

    pub fn interval(&self) -> [f64; 2] {
        self.interval
    }

    /// The coordinate of mesh point `i`, for `i` in `0 .. num_points()`.
    pub fn node(&self, i: usize) -> f64 {
        assert!(i < self.num_points, "mesh point index out of bounds");
        if i + 1 == self.num_points {
            self.interval[1]
        } else {
            self.interval[0] + i as f64 * self.h
        }
    }

    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn function(&self, i: usize) -> &HatFunction {
        &self.functions[i]
    }

    pub fn functions(&self) -> &[HatFunction] {
        &self.functions
    }

    pub fn iter(&self) -> slice::Iter<HatFunction> {
        self.functions.iter()
    }

    /// A range of basis indices containing every function whose support contains `x`.
    ///
    /// The range may include a few functions that vanish at `x`, but never misses one that
    /// does not.
    pub fn functions_near(&self, x: f64) -> Range<usize> {
        let t = (x - self.interval[0]) / self.h;
        if !t.is_finite() {
            return 0..0;
        }
        // Float-to-integer casts saturate, so points far outside the mesh give empty ranges
        let lo = ((t.floor() - 1.0).max(0.0) as usize).min(self.len());
        let hi = ((t.ceil() + 2.0).max(0.0) as usize).min(self.len());
        lo..hi.max(lo)
    }

    /// The mesh cells `[node(j), node(j + 1)]` in order.
    pub fn cells(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        (0..self.num_points - 1).map(move |j| [self.node(j), self.node(j + 1)])
    }

    pub fn value(&self, i: usize, x: f64) -> f64 {
        self.function(i).value(x)
    }

    pub fn derivative(&self, i: usize, x: f64) -> f64 {
        self.function(i).derivative(x)
    }

    pub fn support(&self, i: usize) -> [f64; 2] {
        self.function(i).support()
    }
}

impl<'a> IntoIterator for &'a HatBasis {
    type Item = &'a HatFunction;
    type IntoIter = slice::Iter<'a, HatFunction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
