//! Branching variable selection and child creation.

use super::node::{BranchDecision, FathomReason, NodeId};
use super::tree::SearchTree;
use crate::model::{Sense, VariableBound};

/// A fractional variable chosen for branching.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BranchCandidate {
    /// Canonical variable index.
    pub var: usize,
    /// Relaxation value.
    pub value: f64,
    /// `min(value - floor(value), ceil(value) - value)`.
    pub fractionality: f64,
}

/// What happened to a node handed to [`BranchPolicy::branch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchOutcome {
    /// Two children were created and linked.
    Branched { left: NodeId, right: NodeId },
    /// No fractional variable: the node was fathomed with
    /// [`FathomReason::BranchExhaustion`].
    Exhausted,
}

/// Most-fractional branching.
///
/// Scans variables in canonical order and keeps the first one with the
/// largest fractionality above `integrality_tol`. The left child adds
/// `x <= floor(v)`, the right child `x >= ceil(v)`.
#[derive(Debug, Clone)]
pub struct BranchPolicy {
    integrality_tol: f64,
}

impl BranchPolicy {
    pub fn new(integrality_tol: f64) -> Self {
        Self { integrality_tol }
    }

    /// Picks the branching variable, if any value is fractional.
    pub fn select(&self, values: &[f64]) -> Option<BranchCandidate> {
        let mut best: Option<BranchCandidate> = None;
        for (var, &value) in values.iter().enumerate() {
            let fractionality = (value - value.floor()).min(value.ceil() - value);
            // Also skips NaN, which compares false.
            if !(fractionality > self.integrality_tol) {
                continue;
            }
            if best.map_or(true, |b| fractionality > b.fractionality) {
                best = Some(BranchCandidate {
                    var,
                    value,
                    fractionality,
                });
            }
        }
        best
    }

    /// Splits an open, solved node into two children.
    ///
    /// The children are created left first, so the left child always has the
    /// smaller id. A node without a fractional variable is fathomed instead.
    pub fn branch(&self, tree: &mut SearchTree, id: NodeId) -> BranchOutcome {
        let Some(candidate) = self.select(tree[id].relaxation_solution()) else {
            tree.get_mut(id).fathom(FathomReason::BranchExhaustion);
            return BranchOutcome::Exhausted;
        };

        let BranchCandidate { var, value, .. } = candidate;
        let left = tree.add_child(
            id,
            VariableBound::upper(var, value.floor()),
            BranchDecision {
                var,
                direction: Sense::Le,
                value,
            },
        );
        let right = tree.add_child(
            id,
            VariableBound::lower(var, value.ceil()),
            BranchDecision {
                var,
                direction: Sense::Ge,
                value,
            },
        );
        tree.set_children(id, left, right);
        BranchOutcome::Branched { left, right }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplex::{LpStatus, Relaxation};

    fn solved_root(values: Vec<f64>) -> SearchTree {
        let mut tree = SearchTree::new();
        let root = tree.add_root();
        tree.get_mut(root).record_relaxation(Relaxation {
            status: LpStatus::Optimal,
            values,
            objective: 0.0,
            iterations: 0,
            degenerate_columns: vec![],
        });
        tree
    }

    #[test]
    fn test_select_most_fractional() {
        let policy = BranchPolicy::new(1e-5);
        let c = policy.select(&[1.2, 3.5, 2.7]).unwrap();
        assert_eq!(c.var, 1);
        assert!((c.fractionality - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_select_tie_first_wins() {
        let policy = BranchPolicy::new(1e-5);
        // 0.25 and 0.75 are both 0.25 away from an integer.
        let c = policy.select(&[2.0, 0.25, 4.75]).unwrap();
        assert_eq!(c.var, 1);
    }

    #[test]
    fn test_select_ignores_near_integers() {
        let policy = BranchPolicy::new(1e-5);
        assert!(policy.select(&[1.000_001, 2.0, 2.999_999_5]).is_none());
        assert!(policy.select(&[]).is_none());
        assert!(policy.select(&[f64::NAN, f64::INFINITY]).is_none());
    }

    #[test]
    fn test_branch_creates_floor_and_ceiling_children() {
        let policy = BranchPolicy::new(1e-5);
        let mut tree = solved_root(vec![1.5, 3.0]);

        let outcome = policy.branch(&mut tree, 0);
        assert_eq!(outcome, BranchOutcome::Branched { left: 1, right: 2 });

        let root = &tree[0];
        assert_eq!(root.left_child(), Some(1));
        assert_eq!(root.right_child(), Some(2));
        assert!(!root.is_fathomed());

        let left = &tree[1];
        assert_eq!(left.extra_constraints(), &[VariableBound::upper(0, 1.0)]);
        assert_eq!(left.depth(), 1);
        assert_eq!(left.parent(), Some(0));
        assert_eq!(left.branching().unwrap().direction, Sense::Le);
        assert_eq!(left.branching().unwrap().value, 1.5);

        let right = &tree[2];
        assert_eq!(right.extra_constraints(), &[VariableBound::lower(0, 2.0)]);
        assert_eq!(right.branching().unwrap().direction, Sense::Ge);
    }

    #[test]
    fn test_branch_exhaustion_fathoms() {
        let policy = BranchPolicy::new(1e-5);
        let mut tree = solved_root(vec![1.0, 2.0]);

        assert_eq!(policy.branch(&mut tree, 0), BranchOutcome::Exhausted);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].fathom_reason(), Some(FathomReason::BranchExhaustion));
        assert!(tree[0].is_leaf());
    }
}
