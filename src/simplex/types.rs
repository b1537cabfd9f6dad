//! Relaxation oracle interface.

use crate::error::RelaxationError;
use crate::model::{ProblemModel, VariableBound};

/// Verdict of one LP relaxation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LpStatus {
    /// A finite optimum was found.
    Optimal,
    /// The constraint system has no non-negative solution.
    Infeasible,
    /// The objective can grow without limit.
    Unbounded,
}

/// Result of solving a continuous relaxation.
#[derive(Debug, Clone, PartialEq)]
pub struct Relaxation {
    pub status: LpStatus,
    /// Variable values in canonical order. Empty unless `status` is optimal.
    pub values: Vec<f64>,
    /// `cᵗx` recomputed from `values`; `-inf` when infeasible, `+inf` when unbounded.
    pub objective: f64,
    /// Pivots performed.
    pub iterations: usize,
    /// Variables whose column was a clean identity column on a row owned by
    /// another column. Their value was defaulted to 0.
    pub degenerate_columns: Vec<usize>,
}

impl Relaxation {
    pub fn infeasible(iterations: usize) -> Self {
        Self {
            status: LpStatus::Infeasible,
            values: Vec::new(),
            objective: f64::NEG_INFINITY,
            iterations,
            degenerate_columns: Vec::new(),
        }
    }

    pub fn unbounded(iterations: usize) -> Self {
        Self {
            status: LpStatus::Unbounded,
            values: Vec::new(),
            objective: f64::INFINITY,
            iterations,
            degenerate_columns: Vec::new(),
        }
    }

    pub fn is_optimal(&self) -> bool {
        self.status == LpStatus::Optimal
    }
}

/// Solves the continuous relaxation of a model under extra variable bounds.
///
/// The branch-and-bound engine only relies on this contract, so an external
/// LP backend can be swapped in (e.g. to cross-check the built-in simplex).
/// Implementations must not mutate anything observable between calls: the
/// same inputs must give the same [`Relaxation`].
pub trait RelaxationSolver {
    /// Solves `max cᵗx` over the model's constraints, `x >= 0` and `bounds`.
    ///
    /// Returns `Err` only when no verdict could be reached (e.g. the pivot
    /// cap was hit); infeasible and unbounded relaxations are `Ok`.
    fn solve(
        &self,
        model: &ProblemModel,
        bounds: &[VariableBound],
    ) -> Result<Relaxation, RelaxationError>;
}

impl<S: RelaxationSolver + ?Sized> RelaxationSolver for &S {
    fn solve(
        &self,
        model: &ProblemModel,
        bounds: &[VariableBound],
    ) -> Result<Relaxation, RelaxationError> {
        (**self).solve(model, bounds)
    }
}
