//! Solve results and statistics.

use indexmap::IndexMap;

use super::node::FathomReason;

/// An integer solution with its objective.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntegerSolution {
    /// Value per variable, in the model's declared order.
    pub values: IndexMap<String, i64>,
    /// Relaxation objective of the node that produced the solution.
    pub objective: f64,
    /// Nodes popped and evaluated (duplicate signatures excluded).
    pub nodes_processed: usize,
}

impl IntegerSolution {
    /// Value of a variable; 0 for unknown names.
    pub fn value(&self, name: &str) -> i64 {
        self.values.get(name).copied().unwrap_or(0)
    }
}

/// Result of [`Engine::solve`](super::Engine::solve).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolveOutcome {
    /// The tree was exhausted; the solution is optimal.
    Optimal(IntegerSolution),
    /// The tree was exhausted without any integer-feasible node.
    Infeasible,
    /// The node limit stopped the search after an integer solution was found.
    Feasible(IntegerSolution),
    /// The node limit stopped the search before any integer solution was found.
    Undetermined { nodes_processed: usize },
}

impl SolveOutcome {
    /// The solution, if one was found.
    pub fn solution(&self) -> Option<&IntegerSolution> {
        match self {
            SolveOutcome::Optimal(s) | SolveOutcome::Feasible(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_optimal(&self) -> bool {
        matches!(self, SolveOutcome::Optimal(_))
    }

    pub fn is_infeasible(&self) -> bool {
        matches!(self, SolveOutcome::Infeasible)
    }

    pub fn nodes_processed(&self) -> usize {
        match self {
            SolveOutcome::Optimal(s) | SolveOutcome::Feasible(s) => s.nodes_processed,
            SolveOutcome::Undetermined { nodes_processed } => *nodes_processed,
            // The sentinel carries no count; see `Engine::stats`.
            SolveOutcome::Infeasible => 0,
        }
    }
}

/// Counters collected during a solve.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveStats {
    /// Nodes popped and evaluated.
    pub nodes_processed: usize,
    /// Pops skipped because their signature was already evaluated.
    pub duplicates_skipped: usize,
    /// Nodes split into two children.
    pub nodes_branched: usize,
    pub fathomed_infeasible: usize,
    pub fathomed_divergence: usize,
    pub fathomed_bound: usize,
    pub fathomed_integer: usize,
    pub fathomed_exhausted: usize,
    /// Times the incumbent was replaced.
    pub incumbent_updates: usize,
    /// Variables defaulted to 0 because of duplicate identity columns.
    pub degenerate_extractions: usize,
    /// Pivots across all relaxations.
    pub simplex_pivots: usize,
    /// Deepest evaluated node.
    pub max_depth: usize,
    /// Whether the node limit stopped the search.
    pub truncated: bool,
    /// Wall-clock time of the solve in milliseconds.
    pub elapsed_ms: u64,
}

impl SolveStats {
    pub(crate) fn record_fathom(&mut self, reason: FathomReason) {
        match reason {
            FathomReason::InfeasibleOrUnbounded => self.fathomed_infeasible += 1,
            FathomReason::SolverDivergence => self.fathomed_divergence += 1,
            FathomReason::BoundDominated => self.fathomed_bound += 1,
            FathomReason::IntegerSolution => self.fathomed_integer += 1,
            FathomReason::BranchExhaustion => self.fathomed_exhausted += 1,
        }
    }

    /// Total fathomed nodes.
    pub fn nodes_fathomed(&self) -> usize {
        self.fathomed_infeasible
            + self.fathomed_divergence
            + self.fathomed_bound
            + self.fathomed_integer
            + self.fathomed_exhausted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors() {
        let sol = IntegerSolution {
            values: IndexMap::from([("x".to_string(), 3), ("y".to_string(), 1)]),
            objective: 7.0,
            nodes_processed: 4,
        };
        assert_eq!(sol.value("x"), 3);
        assert_eq!(sol.value("nope"), 0);

        let optimal = SolveOutcome::Optimal(sol.clone());
        assert!(optimal.is_optimal());
        assert_eq!(optimal.solution(), Some(&sol));
        assert_eq!(optimal.nodes_processed(), 4);

        assert!(SolveOutcome::Infeasible.is_infeasible());
        assert!(SolveOutcome::Infeasible.solution().is_none());
        assert_eq!(
            SolveOutcome::Undetermined { nodes_processed: 9 }.nodes_processed(),
            9
        );
    }

    #[test]
    fn test_stats_fathom_counts() {
        let mut stats = SolveStats::default();
        stats.record_fathom(FathomReason::BoundDominated);
        stats.record_fathom(FathomReason::BoundDominated);
        stats.record_fathom(FathomReason::IntegerSolution);
        stats.record_fathom(FathomReason::SolverDivergence);
        assert_eq!(stats.fathomed_bound, 2);
        assert_eq!(stats.fathomed_divergence, 1);
        assert_eq!(stats.nodes_fathomed(), 4);
    }
}
