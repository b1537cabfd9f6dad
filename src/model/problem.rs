//! Integer program definition.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::ModelError;

/// Direction of a linear inequality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "&'static str")
)]
pub enum Sense {
    /// `lhs <= rhs`
    Le,
    /// `lhs >= rhs`
    Ge,
}

impl Sense {
    /// ASCII symbol used in documents and log output.
    pub fn symbol(self) -> &'static str {
        match self {
            Sense::Le => "<=",
            Sense::Ge => ">=",
        }
    }
}

impl fmt::Display for Sense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Sense {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "<=" | "≤" => Ok(Sense::Le),
            ">=" | "≥" => Ok(Sense::Ge),
            other => Err(ModelError::InvalidSense(other.to_string())),
        }
    }
}

impl TryFrom<String> for Sense {
    type Error = ModelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Sense> for &'static str {
    fn from(sense: Sense) -> Self {
        sense.symbol()
    }
}

/// A linear inequality `Σ coefficients[v]·v  (<= | >=)  rhs`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearConstraint {
    /// Coefficient per variable identifier. Missing variables have coefficient 0.
    pub coefficients: IndexMap<String, f64>,
    /// Inequality direction.
    pub sense: Sense,
    /// Right-hand side.
    pub rhs: f64,
}

impl LinearConstraint {
    /// Creates a constraint. Repeated variables have their coefficients summed.
    pub fn new<S, I>(coefficients: I, sense: Sense, rhs: f64) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, f64)>,
    {
        Self {
            coefficients: collect_terms(coefficients),
            sense,
            rhs,
        }
    }

    /// Shorthand for a `<=` constraint.
    pub fn le<S, I>(coefficients: I, rhs: f64) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, f64)>,
    {
        Self::new(coefficients, Sense::Le, rhs)
    }

    /// Shorthand for a `>=` constraint.
    pub fn ge<S, I>(coefficients: I, rhs: f64) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, f64)>,
    {
        Self::new(coefficients, Sense::Ge, rhs)
    }
}

/// A constraint expanded over the canonical variable order.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseRow {
    /// One coefficient per declared variable.
    pub coefficients: Vec<f64>,
    /// Inequality direction.
    pub sense: Sense,
    /// Right-hand side.
    pub rhs: f64,
}

/// Plain three-field form of a [`ProblemModel`], used for persistence.
///
/// Converting back into a model re-runs validation.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelDocument {
    pub variables: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub objective: IndexMap<String, f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub constraints: Vec<LinearConstraint>,
}

/// An integer linear program: maximize `cᵗx` subject to linear inequalities,
/// `x >= 0` and `x` integer.
///
/// The declared variable order is the canonical order used for every
/// iteration inside the crate (tableau columns, branching scans, solution
/// output). A model is immutable once built; per-node branching bounds are
/// layered on top by the search engine.
///
/// # Examples
///
/// ```
/// use u_intprog::model::{LinearConstraint, ProblemModel};
///
/// let model = ProblemModel::new(
///     ["x1", "x2"],
///     [("x1", 3.0), ("x2", 2.0)],
///     vec![
///         LinearConstraint::le([("x1", 2.0), ("x2", 1.0)], 18.0),
///         LinearConstraint::le([("x1", 2.0), ("x2", 3.0)], 42.0),
///     ],
/// )
/// .unwrap();
/// assert_eq!(model.num_variables(), 2);
/// assert_eq!(model.objective_coefficient("x2"), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ModelDocument", into = "ModelDocument")
)]
pub struct ProblemModel {
    variables: Vec<String>,
    objective: IndexMap<String, f64>,
    constraints: Vec<LinearConstraint>,
    index: HashMap<String, usize>,
    objective_dense: Vec<f64>,
    rows: Vec<DenseRow>,
}

impl ProblemModel {
    /// Builds and validates a model.
    ///
    /// Fails if an identifier is empty or declared twice, if the objective or
    /// a constraint references an undeclared variable, or if any coefficient
    /// or right-hand side is not finite.
    pub fn new<V, VS, O, OS>(
        variables: V,
        objective: O,
        constraints: Vec<LinearConstraint>,
    ) -> Result<Self, ModelError>
    where
        V: IntoIterator<Item = VS>,
        VS: Into<String>,
        O: IntoIterator<Item = (OS, f64)>,
        OS: Into<String>,
    {
        let variables: Vec<String> = variables.into_iter().map(Into::into).collect();

        let mut index = HashMap::with_capacity(variables.len());
        for (i, name) in variables.iter().enumerate() {
            if name.is_empty() {
                return Err(ModelError::EmptyVariableName);
            }
            if index.insert(name.clone(), i).is_some() {
                return Err(ModelError::DuplicateVariable(name.clone()));
            }
        }

        let objective = collect_terms(objective);
        let mut objective_dense = vec![0.0; variables.len()];
        for (name, &coef) in &objective {
            let &col = index
                .get(name)
                .ok_or_else(|| ModelError::UndeclaredVariable {
                    name: name.clone(),
                    location: "objective".into(),
                })?;
            if !coef.is_finite() {
                return Err(ModelError::NonFinite {
                    location: format!("objective coefficient of `{name}`"),
                });
            }
            objective_dense[col] = coef;
        }

        let mut rows = Vec::with_capacity(constraints.len());
        for (k, constraint) in constraints.iter().enumerate() {
            if !constraint.rhs.is_finite() {
                return Err(ModelError::NonFinite {
                    location: format!("right-hand side of constraint {k}"),
                });
            }
            let mut coefficients = vec![0.0; variables.len()];
            for (name, &coef) in &constraint.coefficients {
                let &col = index
                    .get(name)
                    .ok_or_else(|| ModelError::UndeclaredVariable {
                        name: name.clone(),
                        location: format!("constraint {k}"),
                    })?;
                if !coef.is_finite() {
                    return Err(ModelError::NonFinite {
                        location: format!("coefficient of `{name}` in constraint {k}"),
                    });
                }
                coefficients[col] = coef;
            }
            rows.push(DenseRow {
                coefficients,
                sense: constraint.sense,
                rhs: constraint.rhs,
            });
        }

        Ok(Self {
            variables,
            objective,
            constraints,
            index,
            objective_dense,
            rows,
        })
    }

    /// Declared variable identifiers in canonical order.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Objective coefficients as supplied (maximization).
    pub fn objective(&self) -> &IndexMap<String, f64> {
        &self.objective
    }

    /// Base constraints in declaration order.
    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Canonical position of a variable, if declared.
    pub fn variable_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Identifier at a canonical position.
    ///
    /// # Panics
    /// Panics if `index >= num_variables()`.
    pub fn variable_name(&self, index: usize) -> &str {
        &self.variables[index]
    }

    /// Objective coefficient of a variable; 0 when absent or undeclared.
    pub fn objective_coefficient(&self, name: &str) -> f64 {
        self.variable_index(name)
            .map_or(0.0, |i| self.objective_dense[i])
    }

    /// Objective coefficients in canonical order.
    pub fn objective_vector(&self) -> &[f64] {
        &self.objective_dense
    }

    /// Base constraints expanded over the canonical order.
    pub fn dense_rows(&self) -> &[DenseRow] {
        &self.rows
    }

    /// Objective value of a point given in canonical order.
    pub fn evaluate(&self, values: &[f64]) -> f64 {
        self.objective_dense
            .iter()
            .zip(values)
            .map(|(c, v)| c * v)
            .sum()
    }

    /// Whether a point (canonical order) satisfies `x >= 0` and every base
    /// constraint within `tol`.
    pub fn is_feasible(&self, values: &[f64], tol: f64) -> bool {
        if values.len() != self.variables.len() || values.iter().any(|&v| v < -tol) {
            return false;
        }
        self.rows.iter().all(|row| {
            let lhs: f64 = row.coefficients.iter().zip(values).map(|(a, v)| a * v).sum();
            match row.sense {
                Sense::Le => lhs <= row.rhs + tol,
                Sense::Ge => lhs >= row.rhs - tol,
            }
        })
    }

    /// Copies the model into its persistence form.
    pub fn to_document(&self) -> ModelDocument {
        ModelDocument {
            variables: self.variables.clone(),
            objective: self.objective.clone(),
            constraints: self.constraints.clone(),
        }
    }
}

impl TryFrom<ModelDocument> for ProblemModel {
    type Error = ModelError;

    fn try_from(doc: ModelDocument) -> Result<Self, Self::Error> {
        ProblemModel::new(doc.variables, doc.objective, doc.constraints)
    }
}

impl From<ProblemModel> for ModelDocument {
    fn from(model: ProblemModel) -> Self {
        ModelDocument {
            variables: model.variables,
            objective: model.objective,
            constraints: model.constraints,
        }
    }
}

fn collect_terms<S, I>(terms: I) -> IndexMap<String, f64>
where
    S: Into<String>,
    I: IntoIterator<Item = (S, f64)>,
{
    let mut map: IndexMap<String, f64> = IndexMap::new();
    for (name, coef) in terms {
        *map.entry(name.into()).or_insert(0.0) += coef;
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_model_creation() {
        let model = textbook();
        assert_eq!(model.num_variables(), 2);
        assert_eq!(model.num_constraints(), 3);
        assert_eq!(model.variable_index("x2"), Some(1));
        assert_eq!(model.variable_name(0), "x1");
        assert_eq!(model.objective_vector(), &[3.0, 2.0]);
        assert_eq!(model.dense_rows()[1].coefficients, vec![2.0, 3.0]);
    }

    #[test]
    fn test_missing_objective_entry_defaults_to_zero() {
        let model = ProblemModel::new(
            ["a", "b"],
            [("a", 1.0)],
            vec![LinearConstraint::le([("b", 1.0)], 4.0)],
        )
        .unwrap();
        assert_eq!(model.objective_coefficient("b"), 0.0);
        assert_eq!(model.objective_vector(), &[1.0, 0.0]);
        assert_eq!(model.dense_rows()[0].coefficients, vec![0.0, 1.0]);
    }

    #[test]
    fn test_undeclared_in_objective() {
        let err = ProblemModel::new(["x"], [("y", 1.0)], vec![]).unwrap_err();
        assert_eq!(
            err,
            ModelError::UndeclaredVariable {
                name: "y".into(),
                location: "objective".into()
            }
        );
    }

    #[test]
    fn test_undeclared_in_constraint() {
        let err = ProblemModel::new(
            ["x"],
            [("x", 1.0)],
            vec![
                LinearConstraint::le([("x", 1.0)], 3.0),
                LinearConstraint::ge([("z", 1.0)], 1.0),
            ],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ModelError::UndeclaredVariable { ref name, ref location }
                if name == "z" && location == "constraint 1"
        ));
    }

    #[test]
    fn test_duplicate_variable() {
        let err = ProblemModel::new(["x", "x"], Vec::<(String, f64)>::new(), vec![]).unwrap_err();
        assert_eq!(err, ModelError::DuplicateVariable("x".into()));
    }

    #[test]
    fn test_empty_name() {
        let err = ProblemModel::new([""], Vec::<(String, f64)>::new(), vec![]).unwrap_err();
        assert_eq!(err, ModelError::EmptyVariableName);
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = ProblemModel::new(["x"], [("x", f64::NAN)], vec![]).unwrap_err();
        assert!(matches!(err, ModelError::NonFinite { .. }));

        let err = ProblemModel::new(
            ["x"],
            [("x", 1.0)],
            vec![LinearConstraint::le([("x", 1.0)], f64::INFINITY)],
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::NonFinite { .. }));
    }

    #[test]
    fn test_sense_parsing() {
        assert_eq!("<=".parse::<Sense>().unwrap(), Sense::Le);
        assert_eq!("≤".parse::<Sense>().unwrap(), Sense::Le);
        assert_eq!(" >= ".parse::<Sense>().unwrap(), Sense::Ge);
        assert_eq!("≥".parse::<Sense>().unwrap(), Sense::Ge);
        assert_eq!(
            "==".parse::<Sense>().unwrap_err(),
            ModelError::InvalidSense("==".into())
        );
        assert_eq!(Sense::Ge.to_string(), ">=");
    }

    #[test]
    fn test_repeated_terms_are_summed() {
        let c = LinearConstraint::le([("x", 1.0), ("y", 2.0), ("x", 0.5)], 3.0);
        assert_eq!(c.coefficients.len(), 2);
        assert_eq!(c.coefficients["x"], 1.5);
    }

    #[test]
    fn test_evaluate_and_feasibility() {
        let model = textbook();
        assert_eq!(model.evaluate(&[3.0, 12.0]), 33.0);
        assert!(model.is_feasible(&[3.0, 12.0], 1e-9));
        assert!(!model.is_feasible(&[4.0, 12.0], 1e-9));
        assert!(!model.is_feasible(&[-1.0, 0.0], 1e-9));
        assert!(!model.is_feasible(&[1.0], 1e-9));
    }

    #[test]
    fn test_document_round_trip() {
        let model = textbook();
        let doc = model.to_document();
        assert_eq!(doc.variables, vec!["x1", "x2"]);
        let back = ProblemModel::try_from(doc).unwrap();
        assert_eq!(back, model);
    }

    #[test]
    fn test_document_revalidates() {
        let doc = ModelDocument {
            variables: vec!["x".into()],
            objective: IndexMap::from([("ghost".to_string(), 1.0)]),
            constraints: vec![],
        };
        assert!(ProblemModel::try_from(doc).is_err());
    }
}
