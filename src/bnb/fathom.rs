//! Pruning rules.

use super::incumbent::Incumbent;
use super::node::{FathomReason, RelaxationStatus, SearchNode};

/// Decides whether a solved node can be pruned.
///
/// Rules are checked in order, first match wins:
///
/// 1. relaxation not optimal → [`FathomReason::InfeasibleOrUnbounded`]
///    ([`FathomReason::SolverDivergence`] when the oracle diverged)
/// 2. `objective <= incumbent + bound_tol` → [`FathomReason::BoundDominated`]
/// 3. every value within `integrality_tol` of an integer → the rounded point
///    becomes the incumbent if strictly better; [`FathomReason::IntegerSolution`]
///
/// A node matching none of them stays open for branching.
#[derive(Debug, Clone)]
pub struct FathomPolicy {
    integrality_tol: f64,
    bound_tol: f64,
}

impl FathomPolicy {
    pub fn new(integrality_tol: f64, bound_tol: f64) -> Self {
        Self {
            integrality_tol,
            bound_tol,
        }
    }

    /// Whether every value lies within tolerance of its nearest integer.
    pub fn is_integral(&self, values: &[f64]) -> bool {
        values
            .iter()
            .all(|v| (v - v.round()).abs() <= self.integrality_tol)
    }

    /// Applies the rules to a solved node, updating `incumbent` on rule 3.
    pub fn evaluate(&self, node: &SearchNode, incumbent: &mut Incumbent) -> Option<FathomReason> {
        match node.relaxation_status() {
            RelaxationStatus::Optimal => {}
            RelaxationStatus::Divergent => return Some(FathomReason::SolverDivergence),
            _ => return Some(FathomReason::InfeasibleOrUnbounded),
        }

        let objective = node.relaxation_objective().unwrap_or(f64::NEG_INFINITY);
        if objective <= incumbent.objective() + self.bound_tol {
            return Some(FathomReason::BoundDominated);
        }

        if self.is_integral(node.relaxation_solution()) {
            if incumbent.offer(node.relaxation_solution(), objective, node.id()) {
                log::info!("new incumbent {objective} at node {} (depth {})", node.id(), node.depth());
            }
            return Some(FathomReason::IntegerSolution);
        }

        None
    }
}
