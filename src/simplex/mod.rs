//! LP relaxation oracle.
//!
//! Solves the continuous relaxation of a [`ProblemModel`](crate::model::ProblemModel)
//! under the extra variable bounds accumulated by branching.
//!
//! # Key Types
//!
//! - [`RelaxationSolver`]: the oracle contract used by the search engine
//! - [`SimplexSolver`]: built-in dense two-phase primal simplex
//! - [`Relaxation`] / [`LpStatus`]: solve result
//! - [`SimplexConfig`]: pivot cap and tolerances
//!
//! # References
//!
//! - Dantzig, G. B. (1963), *Linear Programming and Extensions*
//! - Chvátal, V. (1983), *Linear Programming*, ch. 2–3

mod config;
mod solver;
mod tableau;
mod types;

pub use config::SimplexConfig;
pub use solver::SimplexSolver;
pub use types::{LpStatus, Relaxation, RelaxationSolver};
