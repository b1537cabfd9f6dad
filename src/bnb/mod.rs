//! Branch-and-bound search.
//!
//! Explores a binary tree of LP relaxations depth-first. Each node carries the
//! variable bounds accumulated on its root path; its relaxation either prunes
//! it (infeasible, dominated by the incumbent, or integral) or splits it on the
//! most fractional variable.
//!
//! # Key Types
//!
//! - [`Engine`]: owns the search state and runs the loop
//! - [`SearchTree`] / [`SearchNode`]: arena of evaluated and pending nodes
//! - [`FathomPolicy`]: pruning rules
//! - [`BranchPolicy`]: most-fractional variable selection
//! - [`SolveOutcome`] / [`SolveStats`]: result and counters
//!
//! # References
//!
//! - Land & Doig (1960), "An Automatic Method of Solving Discrete Programming Problems"
//! - Wolsey (1998), *Integer Programming*, ch. 7

mod branching;
mod config;
mod fathom;
mod incumbent;
mod node;
mod runner;
mod tree;
mod types;

pub use branching::{BranchCandidate, BranchOutcome, BranchPolicy};
pub use config::BnbConfig;
pub use fathom::FathomPolicy;
pub use incumbent::Incumbent;
pub use node::{BranchDecision, FathomReason, NodeId, RelaxationStatus, SearchNode, Signature};
#[cfg(feature = "parallel")]
pub use runner::solve_batch;
pub use runner::{solve, Engine};
pub use tree::SearchTree;
pub use types::{IntegerSolution, SolveOutcome, SolveStats};
