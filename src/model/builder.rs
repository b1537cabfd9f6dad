//! Incremental model construction.

use super::problem::{LinearConstraint, ProblemModel, Sense};
use crate::error::ModelError;

/// A constraint whose sense has not been parsed yet.
#[derive(Debug, Clone)]
struct PendingConstraint {
    coefficients: Vec<(String, f64)>,
    sense: String,
    rhs: f64,
}

/// Collects variables, objective terms and constraints, then validates them
/// all at once in [`build`](ProblemBuilder::build).
///
/// Useful for front ends that assemble a model from user input, where the
/// sense may arrive as text.
///
/// # Examples
///
/// ```
/// use u_intprog::model::{ProblemBuilder, Sense};
///
/// let model = ProblemBuilder::new()
///     .variables(["x1", "x2"])
///     .maximize([("x1", 3.0), ("x2", 2.0)])
///     .constraint([("x1", 2.0), ("x2", 1.0)], Sense::Le, 18.0)
///     .constraint_str([("x1", 3.0), ("x2", 1.0)], "<=", 24.0)
///     .build()
///     .unwrap();
/// assert_eq!(model.num_constraints(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProblemBuilder {
    variables: Vec<String>,
    objective: Vec<(String, f64)>,
    constraints: Vec<PendingConstraint>,
}

impl ProblemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares one variable, appended to the canonical order.
    pub fn variable(mut self, name: impl Into<String>) -> Self {
        self.variables.push(name.into());
        self
    }

    /// Declares several variables in order.
    pub fn variables<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.variables.extend(names.into_iter().map(Into::into));
        self
    }

    /// Adds objective terms (maximization). Repeated terms accumulate.
    pub fn maximize<S: Into<String>>(mut self, terms: impl IntoIterator<Item = (S, f64)>) -> Self {
        self.objective
            .extend(terms.into_iter().map(|(name, coef)| (name.into(), coef)));
        self
    }

    /// Adds a typed constraint.
    pub fn constraint<S: Into<String>>(
        self,
        coefficients: impl IntoIterator<Item = (S, f64)>,
        sense: Sense,
        rhs: f64,
    ) -> Self {
        self.constraint_str(coefficients, sense.symbol(), rhs)
    }

    /// Adds a constraint whose sense is given as text (`<=`, `>=`, `≤`, `≥`).
    ///
    /// An unrecognized sense is reported by [`build`](Self::build).
    pub fn constraint_str<S: Into<String>>(
        mut self,
        coefficients: impl IntoIterator<Item = (S, f64)>,
        sense: &str,
        rhs: f64,
    ) -> Self {
        self.constraints.push(PendingConstraint {
            coefficients: coefficients
                .into_iter()
                .map(|(name, coef)| (name.into(), coef))
                .collect(),
            sense: sense.to_string(),
            rhs,
        });
        self
    }

    /// Validates everything and produces the immutable model.
    pub fn build(self) -> Result<ProblemModel, ModelError> {
        let constraints = self
            .constraints
            .into_iter()
            .map(|c| -> Result<LinearConstraint, ModelError> {
                let sense: Sense = c.sense.parse()?;
                Ok(LinearConstraint::new(c.coefficients, sense, c.rhs))
            })
            .collect::<Result<Vec<_>, _>>()?;
        ProblemModel::new(self.variables, self.objective, constraints)
    }
}
