//! Error types for model construction, relaxation solving and the search engine.

use thiserror::Error;

/// A malformed [`ProblemModel`](crate::model::ProblemModel).
///
/// Raised at construction time; a model that fails validation never reaches
/// the search engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// The objective or a constraint mentions a variable that was not declared.
    #[error("undeclared variable `{name}` referenced in {location}")]
    UndeclaredVariable { name: String, location: String },

    /// The same identifier was declared twice.
    #[error("duplicate variable `{0}`")]
    DuplicateVariable(String),

    /// An empty string was used as a variable identifier.
    #[error("variable identifiers must be non-empty")]
    EmptyVariableName,

    /// A constraint sense other than `<=` / `>=` was supplied.
    #[error("invalid constraint sense `{0}` (expected `<=` or `>=`)")]
    InvalidSense(String),

    /// A coefficient or right-hand side is NaN or infinite.
    #[error("non-finite value in {location}")]
    NonFinite { location: String },
}

/// Failure of a single LP relaxation.
///
/// Infeasible and unbounded relaxations are ordinary outcomes reported through
/// [`LpStatus`](crate::simplex::LpStatus); this type covers the cases where the
/// solver could not reach a verdict at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelaxationError {
    /// The pivot loop hit its iteration cap.
    #[error("simplex did not terminate within {iterations} pivots")]
    SolverDivergence { iterations: usize },
}

/// Errors returned when setting up a branch-and-bound engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BnbError {
    /// The engine or simplex configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
