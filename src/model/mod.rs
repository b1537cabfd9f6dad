//! Integer linear program model.
//!
//! A [`ProblemModel`] describes `maximize cᵗx` subject to `Ax (<= | >=) b`,
//! `x >= 0`, `x` integer. It is validated once at construction and never
//! mutated afterwards; the search engine layers per-node branching bounds on
//! top of it.
//!
//! # Key Types
//!
//! - [`ProblemModel`]: validated, immutable model with a canonical variable order
//! - [`LinearConstraint`] / [`Sense`]: one inequality row
//! - [`VariableBound`]: single-variable bound added by branching
//! - [`ProblemBuilder`]: incremental construction from loosely typed input
//! - [`ModelDocument`]: three-field persistence form (serde with the `serde` feature)

mod bound;
mod builder;
mod problem;

pub use bound::VariableBound;
pub use builder::ProblemBuilder;
pub use problem::{DenseRow, LinearConstraint, ModelDocument, ProblemModel, Sense};
