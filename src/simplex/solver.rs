//! Two-phase primal simplex over a dense tableau.
//!
//! # Algorithm
//!
//! 1. Every `>=` row (base constraint or branching bound) is negated into a
//!    `<=` row and receives a slack column.
//! 2. Rows whose rhs is negative are negated once more so all rhs values are
//!    non-negative. Such a row now carries a `-1` slack and gets an
//!    artificial column to start from a feasible basis.
//! 3. Phase I (only when artificials exist) maximizes `-Σ artificials`. A
//!    strictly negative optimum proves the relaxation infeasible.
//! 4. Phase II maximizes `cᵗx`, never letting an artificial column re-enter.
//!
//! Pivoting: entering column is the most negative objective-row entry (lowest
//! index on ties); leaving row is the minimum ratio over strictly positive
//! column entries (lowest row on ties). No ratio candidate means unbounded.
//!
//! Values are read from clean identity columns and the objective is
//! recomputed from them instead of trusting the tableau corner.

use super::config::SimplexConfig;
use super::tableau::Tableau;
use super::types::{LpStatus, Relaxation, RelaxationSolver};
use crate::error::RelaxationError;
use crate::model::{ProblemModel, Sense, VariableBound};

enum PhaseOutcome {
    Optimal,
    Unbounded,
}

/// Built-in relaxation oracle.
///
/// # Examples
///
/// ```
/// use u_intprog::model::{LinearConstraint, ProblemModel};
/// use u_intprog::simplex::{LpStatus, RelaxationSolver, SimplexSolver};
///
/// let model = ProblemModel::new(
///     ["x"],
///     [("x", 1.0)],
///     vec![LinearConstraint::le([("x", 2.0)], 3.0)],
/// )
/// .unwrap();
///
/// let relaxation = SimplexSolver::default().solve(&model, &[]).unwrap();
/// assert_eq!(relaxation.status, LpStatus::Optimal);
/// assert!((relaxation.values[0] - 1.5).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimplexSolver {
    config: SimplexConfig,
}

impl SimplexSolver {
    pub fn new(config: SimplexConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimplexConfig {
        &self.config
    }

    /// Builds the initial tableau. Returns it with the number of artificial
    /// columns.
    fn build_tableau(&self, model: &ProblemModel, bounds: &[VariableBound]) -> (Tableau, usize) {
        let n = model.num_variables();

        // Everything as `<=` over the structural columns.
        let mut rows: Vec<(Vec<f64>, f64)> = Vec::with_capacity(model.num_constraints() + bounds.len());
        for row in model.dense_rows() {
            match row.sense {
                Sense::Le => rows.push((row.coefficients.clone(), row.rhs)),
                Sense::Ge => rows.push((row.coefficients.iter().map(|a| -a).collect(), -row.rhs)),
            }
        }
        for b in bounds {
            let mut coefficients = vec![0.0; n];
            match b.sense {
                Sense::Le => {
                    coefficients[b.var] = 1.0;
                    rows.push((coefficients, b.bound));
                }
                Sense::Ge => {
                    coefficients[b.var] = -1.0;
                    rows.push((coefficients, -b.bound));
                }
            }
        }

        let m = rows.len();
        let artificials = rows.iter().filter(|(_, rhs)| *rhs < 0.0).count();
        let mut t = Tableau::zeros(m, n + m + artificials + 1);
        let rhs_col = t.rhs_col();

        let mut next_artificial = n + m;
        for (r, (coefficients, rhs)) in rows.into_iter().enumerate() {
            t.row_mut(r)[..n].copy_from_slice(&coefficients);
            t.set(r, n + r, 1.0);
            t.set(r, rhs_col, rhs);
            t.basis[r] = n + r;
            if rhs < 0.0 {
                t.negate_row(r);
                t.set(r, next_artificial, 1.0);
                t.basis[r] = next_artificial;
                next_artificial += 1;
            }
        }

        (t, artificials)
    }

    /// Pivots until optimal or unbounded. Only columns `0..limit` may enter.
    fn optimize(
        &self,
        t: &mut Tableau,
        limit: usize,
        iterations: &mut usize,
    ) -> Result<PhaseOutcome, RelaxationError> {
        loop {
            let Some(col) = t.entering_column(limit, self.config.optimality_tol) else {
                return Ok(PhaseOutcome::Optimal);
            };
            let Some(row) = t.leaving_row(col, self.config.pivot_tol) else {
                return Ok(PhaseOutcome::Unbounded);
            };
            if *iterations >= self.config.max_iterations {
                return Err(RelaxationError::SolverDivergence {
                    iterations: *iterations,
                });
            }
            t.pivot(row, col);
            *iterations += 1;
        }
    }

    /// Phase I. Returns `false` if the relaxation is infeasible.
    fn find_feasible_basis(
        &self,
        t: &mut Tableau,
        first_artificial: usize,
        iterations: &mut usize,
    ) -> Result<bool, RelaxationError> {
        let obj = t.objective_row();
        let all = t.rhs_col();
        for c in first_artificial..all {
            t.set(obj, c, 1.0);
        }
        for r in 0..t.num_rows() {
            if t.basis[r] >= first_artificial {
                t.sub_scaled_row(obj, r, 1.0);
            }
        }

        match self.optimize(t, all, iterations)? {
            PhaseOutcome::Optimal => {}
            PhaseOutcome::Unbounded => {
                // The auxiliary objective is bounded by 0.
                log::warn!("phase I reported an unbounded direction; treating relaxation as infeasible");
                return Ok(false);
            }
        }
        if t.objective_value() < -self.config.feasibility_tol {
            return Ok(false);
        }

        // Basic artificials at zero level leave the basis where possible.
        for r in 0..t.num_rows() {
            if t.basis[r] < first_artificial {
                continue;
            }
            let replacement =
                (0..first_artificial).find(|&c| t.get(r, c).abs() > self.config.pivot_tol);
            if let Some(c) = replacement {
                t.pivot(r, c);
                *iterations += 1;
            }
        }
        Ok(true)
    }

    /// Installs `max cᵗx` in the objective row, priced out against the basis.
    fn install_objective(t: &mut Tableau, objective: &[f64]) {
        let obj = t.objective_row();
        for v in t.row_mut(obj) {
            *v = 0.0;
        }
        for (c, &coef) in objective.iter().enumerate() {
            t.set(obj, c, -coef);
        }
        for r in 0..t.num_rows() {
            let b = t.basis[r];
            let factor = t.get(obj, b);
            t.sub_scaled_row(obj, r, factor);
        }
    }

    /// Reads structural values from clean identity columns.
    fn extract(&self, t: &Tableau, n: usize) -> (Vec<f64>, Vec<usize>) {
        let mut values = vec![0.0; n];
        let mut degenerate = Vec::new();
        for (j, value) in values.iter_mut().enumerate() {
            if let Some(r) = t.identity_row(j, self.config.identity_tol) {
                if t.basis[r] == j {
                    *value = t.rhs(r);
                } else {
                    log::debug!("variable column {j} duplicates the identity column of row {r}; defaulting to 0");
                    degenerate.push(j);
                }
            }
        }
        (values, degenerate)
    }
}

impl RelaxationSolver for SimplexSolver {
    fn solve(
        &self,
        model: &ProblemModel,
        bounds: &[VariableBound],
    ) -> Result<Relaxation, RelaxationError> {
        let n = model.num_variables();
        let (mut t, artificials) = self.build_tableau(model, bounds);
        let first_artificial = t.rhs_col() - artificials;
        let mut iterations = 0;

        if artificials > 0 && !self.find_feasible_basis(&mut t, first_artificial, &mut iterations)? {
            return Ok(Relaxation::infeasible(iterations));
        }

        Self::install_objective(&mut t, model.objective_vector());
        if let PhaseOutcome::Unbounded = self.optimize(&mut t, first_artificial, &mut iterations)? {
            return Ok(Relaxation::unbounded(iterations));
        }

        let (values, degenerate_columns) = self.extract(&t, n);
        let objective = model.evaluate(&values);
        Ok(Relaxation {
            status: LpStatus::Optimal,
            values,
            objective,
            iterations,
            degenerate_columns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LinearConstraint;

    fn solve(model: &ProblemModel, bounds: &[VariableBound]) -> Relaxation {
        SimplexSolver::default().solve(model, bounds).unwrap()
    }

    fn textbook() -> ProblemModel {
        ProblemModel::new(
            ["x1", "x2"],
            [("x1", 3.0), ("x2", 2.0)],
            vec![
                LinearConstraint::le([("x1", 2.0), ("x2", 1.0)], 18.0),
                LinearConstraint::le([("x1", 2.0), ("x2", 3.0)], 42.0),
                LinearConstraint::le([("x1", 3.0), ("x2", 1.0)], 24.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_textbook_optimum() {
        let r = solve(&textbook(), &[]);
        assert_eq!(r.status, LpStatus::Optimal);
        assert!((r.values[0] - 3.0).abs() < 1e-9, "x1 = {}", r.values[0]);
        assert!((r.values[1] - 12.0).abs() < 1e-9, "x2 = {}", r.values[1]);
        assert!((r.objective - 33.0).abs() < 1e-9);
        assert_eq!(r.iterations, 3);
        assert!(r.degenerate_columns.is_empty());
    }

    #[test]
    fn test_fractional_optimum() {
        // max 5x + 4y s.t. 6x + 4y <= 24, x + 2y <= 6  ->  (3, 1.5), z = 21
        let model = ProblemModel::new(
            ["x", "y"],
            [("x", 5.0), ("y", 4.0)],
            vec![
                LinearConstraint::le([("x", 6.0), ("y", 4.0)], 24.0),
                LinearConstraint::le([("x", 1.0), ("y", 2.0)], 6.0),
            ],
        )
        .unwrap();
        let r = solve(&model, &[]);
        assert_eq!(r.status, LpStatus::Optimal);
        assert!((r.values[0] - 3.0).abs() < 1e-9);
        assert!((r.values[1] - 1.5).abs() < 1e-9);
        assert!((r.objective - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_conflicting_bounds_infeasible() {
        let model = ProblemModel::new(
            ["x"],
            [("x", 1.0)],
            vec![
                LinearConstraint::ge([("x", 1.0)], 5.0),
                LinearConstraint::le([("x", 1.0)], 2.0),
            ],
        )
        .unwrap();
        let r = solve(&model, &[]);
        assert_eq!(r.status, LpStatus::Infeasible);
        assert!(r.values.is_empty());
        assert_eq!(r.objective, f64::NEG_INFINITY);
    }

    #[test]
    fn test_ge_constraint_feasible() {
        // max -x - y (i.e. minimize x + y) s.t. x + y >= 3, x <= 2
        let model = ProblemModel::new(
            ["x", "y"],
            [("x", -1.0), ("y", -1.0)],
            vec![
                LinearConstraint::ge([("x", 1.0), ("y", 1.0)], 3.0),
                LinearConstraint::le([("x", 1.0)], 2.0),
            ],
        )
        .unwrap();
        let r = solve(&model, &[]);
        assert_eq!(r.status, LpStatus::Optimal);
        assert!((r.values[0] + r.values[1] - 3.0).abs() < 1e-9);
        assert!((r.objective + 3.0).abs() < 1e-9);
        assert!(model.is_feasible(&r.values, 1e-9));
    }

    #[test]
    fn test_unbounded() {
        // max x with only x - y <= 1: increase both forever.
        let model = ProblemModel::new(
            ["x", "y"],
            [("x", 1.0)],
            vec![LinearConstraint::le([("x", 1.0), ("y", -1.0)], 1.0)],
        )
        .unwrap();
        let r = solve(&model, &[]);
        assert_eq!(r.status, LpStatus::Unbounded);
        assert_eq!(r.objective, f64::INFINITY);
    }

    #[test]
    fn test_no_constraints_zero_objective() {
        let model = ProblemModel::new(["x"], [("x", -2.0)], vec![]).unwrap();
        let r = solve(&model, &[]);
        assert_eq!(r.status, LpStatus::Optimal);
        assert_eq!(r.values, vec![0.0]);
        assert_eq!(r.objective, 0.0);
        assert_eq!(r.iterations, 0);
    }

    #[test]
    fn test_branch_bounds_applied() {
        let model = ProblemModel::new(
            ["x"],
            [("x", 1.0)],
            vec![LinearConstraint::le([("x", 2.0)], 3.0)],
        )
        .unwrap();

        let down = solve(&model, &[VariableBound::upper(0, 1.0)]);
        assert_eq!(down.status, LpStatus::Optimal);
        assert!((down.values[0] - 1.0).abs() < 1e-9);

        let up = solve(&model, &[VariableBound::lower(0, 2.0)]);
        assert_eq!(up.status, LpStatus::Infeasible);
    }

    #[test]
    fn test_lower_bound_moves_optimum() {
        // max 10x + 11y s.t. 2x + y <= 6, y <= 3, x >= 2  ->  (2, 2)
        let model = ProblemModel::new(
            ["x", "y"],
            [("x", 10.0), ("y", 11.0)],
            vec![
                LinearConstraint::le([("x", 2.0), ("y", 1.0)], 6.0),
                LinearConstraint::le([("y", 1.0)], 3.0),
            ],
        )
        .unwrap();
        let r = solve(&model, &[VariableBound::lower(0, 2.0)]);
        assert_eq!(r.status, LpStatus::Optimal);
        assert!((r.values[0] - 2.0).abs() < 1e-9);
        assert!((r.values[1] - 2.0).abs() < 1e-9);
        assert!((r.objective - 42.0).abs() < 1e-9);
    }

    #[test]
    fn test_duplicate_columns_reported_degenerate() {
        // x and y have identical columns; only one can own the row.
        let model = ProblemModel::new(
            ["x", "y"],
            [("x", 1.0), ("y", 1.0)],
            vec![LinearConstraint::le([("x", 1.0), ("y", 1.0)], 4.0)],
        )
        .unwrap();
        let r = solve(&model, &[]);
        assert_eq!(r.status, LpStatus::Optimal);
        assert_eq!(r.values, vec![4.0, 0.0]);
        assert_eq!(r.degenerate_columns, vec![1]);
        assert!((r.objective - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_iteration_cap_is_divergence() {
        let solver = SimplexSolver::new(SimplexConfig::default().with_max_iterations(1));
        let err = solver.solve(&textbook(), &[]).unwrap_err();
        assert_eq!(err, RelaxationError::SolverDivergence { iterations: 1 });
    }

    #[test]
    fn test_redundant_equality_pair() {
        // x + y >= 2 and x + y <= 2 pin the sum; max x picks (2, 0).
        let model = ProblemModel::new(
            ["x", "y"],
            [("x", 1.0)],
            vec![
                LinearConstraint::ge([("x", 1.0), ("y", 1.0)], 2.0),
                LinearConstraint::le([("x", 1.0), ("y", 1.0)], 2.0),
            ],
        )
        .unwrap();
        let r = solve(&model, &[]);
        assert_eq!(r.status, LpStatus::Optimal);
        assert!((r.values[0] - 2.0).abs() < 1e-9);
        assert!(r.values[1].abs() < 1e-9);
    }
}
