//! Integer linear programming by branch-and-bound.
//!
//! Solves pure integer programs of the form
//!
//! ```text
//! maximize    cᵗx
//! subject to  Ax (<= | >=) b
//!             x >= 0, x integer
//! ```
//!
//! - **Model**: validated, immutable problem description with a canonical
//!   variable order ([`model`]).
//! - **Simplex**: dense two-phase tableau simplex solving the LP relaxation
//!   under per-node variable bounds ([`simplex`]).
//! - **Branch-and-bound**: depth-first search over an arena tree with
//!   most-fractional branching and bound-based pruning ([`bnb`]).
//!
//! # Example
//!
//! ```
//! use u_intprog::model::{ProblemBuilder, Sense};
//!
//! let model = ProblemBuilder::default()
//!     .variables(["x1", "x2"])
//!     .maximize([("x1", 3.0), ("x2", 2.0)])
//!     .constraint([("x1", 2.0), ("x2", 1.0)], Sense::Le, 18.0)
//!     .constraint([("x1", 2.0), ("x2", 3.0)], Sense::Le, 42.0)
//!     .constraint([("x1", 3.0), ("x2", 1.0)], Sense::Le, 24.0)
//!     .build()
//!     .unwrap();
//!
//! let outcome = u_intprog::solve(&model);
//! let solution = outcome.solution().unwrap();
//! assert_eq!(solution.value("x1"), 3);
//! assert_eq!(solution.value("x2"), 12);
//! ```
//!
//! # Logging
//!
//! The crate emits records through the [`log`] facade and installs no logger.
//!
//! # Features
//!
//! - `serde`: (de)serialization of models, configs and results
//! - `parallel`: [`bnb::solve_batch`] over independent models with rayon

pub mod bnb;
pub mod error;
pub mod model;
pub mod simplex;

pub use bnb::{solve, BnbConfig, Engine, SolveOutcome};
pub use error::{BnbError, ModelError, RelaxationError};
pub use model::{LinearConstraint, ProblemBuilder, ProblemModel, Sense};
