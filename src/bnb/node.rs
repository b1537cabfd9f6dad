//! Search node representation.

use std::fmt;

use crate::model::{Sense, VariableBound};
use crate::simplex::{LpStatus, Relaxation};

/// Index of a node in its [`SearchTree`](super::SearchTree).
pub type NodeId = usize;

/// Canonical form of a node's bound list: sorted, order-independent.
pub type Signature = Vec<(usize, Sense, i64)>;

/// Relaxation state of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RelaxationStatus {
    /// Not solved yet.
    Unsolved,
    Optimal,
    Infeasible,
    Unbounded,
    /// The oracle hit its iteration cap without a verdict.
    Divergent,
}

impl From<LpStatus> for RelaxationStatus {
    fn from(status: LpStatus) -> Self {
        match status {
            LpStatus::Optimal => RelaxationStatus::Optimal,
            LpStatus::Infeasible => RelaxationStatus::Infeasible,
            LpStatus::Unbounded => RelaxationStatus::Unbounded,
        }
    }
}

/// Why a node was pruned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FathomReason {
    /// The relaxation is infeasible or unbounded.
    InfeasibleOrUnbounded,
    /// The relaxation oracle diverged.
    SolverDivergence,
    /// The relaxation bound cannot beat the incumbent.
    BoundDominated,
    /// The relaxation optimum is integral.
    IntegerSolution,
    /// No fractional variable was found on an otherwise open node.
    BranchExhaustion,
}

impl FathomReason {
    pub fn description(self) -> &'static str {
        match self {
            FathomReason::InfeasibleOrUnbounded => "infeasible or unbounded relaxation",
            FathomReason::SolverDivergence => "solver divergence",
            FathomReason::BoundDominated => "bound dominated",
            FathomReason::IntegerSolution => "integer solution",
            FathomReason::BranchExhaustion => "branch exhaustion",
        }
    }
}

impl fmt::Display for FathomReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// The branching decision that created a node.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BranchDecision {
    /// Canonical index of the branching variable.
    pub var: usize,
    /// `Le` for the floor branch, `Ge` for the ceiling branch.
    pub direction: Sense,
    /// Fractional relaxation value of the variable in the parent.
    pub value: f64,
}

/// A node in the branch-and-bound tree.
///
/// Nodes live in a [`SearchTree`](super::SearchTree) arena; `parent` and the
/// child links are arena indices. Fields are read through accessors: the
/// engine is the only writer, and a node is never changed once it is either
/// fathomed or has children.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub(crate) id: NodeId,
    pub(crate) depth: usize,
    pub(crate) parent: Option<NodeId>,
    pub(crate) extra_constraints: Vec<VariableBound>,
    pub(crate) relaxation_solution: Vec<f64>,
    pub(crate) relaxation_objective: Option<f64>,
    pub(crate) relaxation_status: RelaxationStatus,
    pub(crate) fathom_reason: Option<FathomReason>,
    pub(crate) branching: Option<BranchDecision>,
    pub(crate) children: Option<(NodeId, NodeId)>,
}

impl SearchNode {
    /// A root node with an empty bound list.
    pub(crate) fn root(id: NodeId) -> Self {
        Self {
            id,
            depth: 0,
            parent: None,
            extra_constraints: Vec::new(),
            relaxation_solution: Vec::new(),
            relaxation_objective: None,
            relaxation_status: RelaxationStatus::Unsolved,
            fathom_reason: None,
            branching: None,
            children: None,
        }
    }

    /// A child: full copy of this node's bounds plus `bound`.
    pub(crate) fn child(&self, id: NodeId, bound: VariableBound, decision: BranchDecision) -> Self {
        let mut extra_constraints = Vec::with_capacity(self.extra_constraints.len() + 1);
        extra_constraints.extend_from_slice(&self.extra_constraints);
        extra_constraints.push(bound);
        Self {
            id,
            depth: self.depth + 1,
            parent: Some(self.id),
            extra_constraints,
            relaxation_solution: Vec::new(),
            relaxation_objective: None,
            relaxation_status: RelaxationStatus::Unsolved,
            fathom_reason: None,
            branching: Some(decision),
            children: None,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Bounds contributed by the branching decisions on the root path, in
    /// path order.
    pub fn extra_constraints(&self) -> &[VariableBound] {
        &self.extra_constraints
    }

    /// Relaxation values in canonical variable order; empty unless optimal.
    pub fn relaxation_solution(&self) -> &[f64] {
        &self.relaxation_solution
    }

    pub fn relaxation_objective(&self) -> Option<f64> {
        self.relaxation_objective
    }

    pub fn relaxation_status(&self) -> RelaxationStatus {
        self.relaxation_status
    }

    pub fn is_fathomed(&self) -> bool {
        self.fathom_reason.is_some()
    }

    pub fn fathom_reason(&self) -> Option<FathomReason> {
        self.fathom_reason
    }

    /// The decision that produced this node (`None` for the root).
    pub fn branching(&self) -> Option<BranchDecision> {
        self.branching
    }

    pub fn left_child(&self) -> Option<NodeId> {
        self.children.map(|(left, _)| left)
    }

    pub fn right_child(&self) -> Option<NodeId> {
        self.children.map(|(_, right)| right)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Sorted bound list, identifying structurally identical subproblems.
    pub fn signature(&self) -> Signature {
        let mut signature: Signature = self.extra_constraints.iter().map(VariableBound::key).collect();
        signature.sort_unstable();
        signature
    }

    pub(crate) fn record_relaxation(&mut self, relaxation: Relaxation) {
        debug_assert_eq!(self.relaxation_status, RelaxationStatus::Unsolved);
        self.relaxation_status = relaxation.status.into();
        self.relaxation_objective = Some(relaxation.objective);
        self.relaxation_solution = relaxation.values;
    }

    pub(crate) fn record_divergence(&mut self) {
        debug_assert_eq!(self.relaxation_status, RelaxationStatus::Unsolved);
        self.relaxation_status = RelaxationStatus::Divergent;
    }

    pub(crate) fn fathom(&mut self, reason: FathomReason) {
        debug_assert!(self.fathom_reason.is_none() && self.children.is_none());
        self.fathom_reason = Some(reason);
    }

    pub(crate) fn set_children(&mut self, left: NodeId, right: NodeId) {
        debug_assert!(self.fathom_reason.is_none() && self.children.is_none());
        self.children = Some((left, right));
    }
}
