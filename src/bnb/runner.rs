//! Depth-first branch-and-bound engine.
//!
//! # Algorithm
//!
//! 1. Create the root with an empty bound list and push it
//! 2. While the frontier is not empty:
//!    a. Pop the most recently pushed node (LIFO → depth-first)
//!    b. Skip it if its signature (sorted bound list) was already evaluated
//!    c. Solve its LP relaxation under the model plus its bounds
//!    d. Apply the fathoming rules (may update the incumbent)
//!    e. Otherwise branch: push the `>=` child, then the `<=` child
//! 3. Report the incumbent, or `Infeasible` if none was found
//!
//! # Reference
//!
//! Land, A. H. & Doig, A. G. (1960). "An Automatic Method of Solving Discrete
//! Programming Problems", *Econometrica* 28(3), 497-520.

use std::collections::HashSet;
use std::time::Instant;

use super::branching::{BranchOutcome, BranchPolicy};
use super::config::BnbConfig;
use super::fathom::FathomPolicy;
use super::incumbent::Incumbent;
use super::node::{FathomReason, NodeId, Signature};
use super::tree::SearchTree;
use super::types::{IntegerSolution, SolveOutcome, SolveStats};
use crate::error::BnbError;
use crate::model::ProblemModel;
use crate::simplex::{LpStatus, RelaxationSolver, SimplexSolver};

/// Branch-and-bound engine for one model.
///
/// All search state (frontier, visited signatures, incumbent, counters, tree)
/// lives in the engine, so independent engines can run side by side.
///
/// # Examples
///
/// ```
/// use u_intprog::bnb::Engine;
/// use u_intprog::model::{LinearConstraint, ProblemModel};
///
/// let model = ProblemModel::new(
///     ["x", "y"],
///     [("x", 10.0), ("y", 11.0)],
///     vec![
///         LinearConstraint::le([("x", 2.0), ("y", 1.0)], 6.0),
///         LinearConstraint::le([("y", 1.0)], 3.0),
///     ],
/// )
/// .unwrap();
///
/// let mut engine = Engine::new(&model);
/// let outcome = engine.solve();
/// let solution = outcome.solution().unwrap();
/// assert_eq!(solution.value("x"), 1);
/// assert_eq!(solution.value("y"), 3);
/// assert_eq!(engine.tree()[0].left_child(), Some(1));
/// ```
pub struct Engine<'m, S: RelaxationSolver = SimplexSolver> {
    model: &'m ProblemModel,
    solver: S,
    config: BnbConfig,
    fathom: FathomPolicy,
    branching: BranchPolicy,
    tree: SearchTree,
    frontier: Vec<NodeId>,
    visited: HashSet<Signature>,
    incumbent: Incumbent,
    node_counter: usize,
    stats: SolveStats,
}

impl<'m> Engine<'m, SimplexSolver> {
    /// Engine with the built-in simplex and default configuration.
    pub fn new(model: &'m ProblemModel) -> Self {
        Self::build(model, SimplexSolver::default(), BnbConfig::default())
    }

    /// Engine with the built-in simplex and a custom configuration.
    pub fn with_config(model: &'m ProblemModel, config: BnbConfig) -> Result<Self, BnbError> {
        Self::with_solver(model, SimplexSolver::default(), config)
    }
}

impl<'m, S: RelaxationSolver> Engine<'m, S> {
    /// Engine with a custom relaxation oracle.
    pub fn with_solver(model: &'m ProblemModel, solver: S, config: BnbConfig) -> Result<Self, BnbError> {
        config.validate().map_err(BnbError::InvalidConfig)?;
        Ok(Self::build(model, solver, config))
    }

    fn build(model: &'m ProblemModel, solver: S, config: BnbConfig) -> Self {
        Self {
            model,
            solver,
            fathom: FathomPolicy::new(config.integrality_tol, config.bound_tol),
            branching: BranchPolicy::new(config.integrality_tol),
            config,
            tree: SearchTree::new(),
            frontier: Vec::new(),
            visited: HashSet::new(),
            incumbent: Incumbent::new(),
            node_counter: 0,
            stats: SolveStats::default(),
        }
    }

    pub fn model(&self) -> &ProblemModel {
        self.model
    }

    pub fn config(&self) -> &BnbConfig {
        &self.config
    }

    /// Tree of the last solve.
    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }

    /// Statistics of the last solve.
    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }

    pub fn incumbent(&self) -> &Incumbent {
        &self.incumbent
    }

    /// Nodes evaluated so far in the current or last solve.
    pub fn nodes_processed(&self) -> usize {
        self.node_counter
    }

    fn reset(&mut self) {
        self.tree.clear();
        self.frontier.clear();
        self.visited.clear();
        self.incumbent = Incumbent::new();
        self.node_counter = 0;
        self.stats = SolveStats::default();
    }

    /// Runs the search from scratch. Calling it again repeats the whole solve.
    pub fn solve(&mut self) -> SolveOutcome {
        let start = Instant::now();
        self.reset();

        let root = self.tree.add_root();
        self.frontier.push(root);

        while let Some(id) = self.frontier.pop() {
            if self.config.node_limit.is_some_and(|limit| self.node_counter >= limit) {
                log::info!(
                    "node limit reached after {} nodes, {} still open",
                    self.node_counter,
                    self.frontier.len() + 1
                );
                self.stats.truncated = true;
                break;
            }

            if !self.visited.insert(self.tree[id].signature()) {
                log::trace!("node {id}: signature already evaluated, skipping");
                self.stats.duplicates_skipped += 1;
                continue;
            }

            self.node_counter += 1;
            self.process(id);
        }

        self.stats.nodes_processed = self.node_counter;
        self.stats.elapsed_ms = start.elapsed().as_millis() as u64;

        let outcome = self.outcome();
        log::info!(
            "branch-and-bound finished: {} nodes, {} fathomed, {} branched, incumbent {}",
            self.stats.nodes_processed,
            self.stats.nodes_fathomed(),
            self.stats.nodes_branched,
            self.incumbent.objective()
        );
        outcome
    }

    /// Solves, fathoms or branches one node.
    fn process(&mut self, id: NodeId) {
        self.stats.max_depth = self.stats.max_depth.max(self.tree[id].depth());

        match self.solver.solve(self.model, self.tree[id].extra_constraints()) {
            Ok(relaxation) => {
                self.stats.simplex_pivots += relaxation.iterations;
                self.stats.degenerate_extractions += relaxation.degenerate_columns.len();
                if id == 0 && relaxation.status == LpStatus::Unbounded {
                    log::warn!("root relaxation is unbounded; reporting the model as infeasible");
                }
                self.tree.get_mut(id).record_relaxation(relaxation);
            }
            Err(err) => {
                log::warn!("node {id}: {err}");
                self.tree.get_mut(id).record_divergence();
            }
        }

        let node = &self.tree[id];
        log::debug!(
            "node {id} depth {}: {:?} objective {:?}",
            node.depth(),
            node.relaxation_status(),
            node.relaxation_objective()
        );

        let before = self.incumbent.objective();
        if let Some(reason) = self.fathom.evaluate(node, &mut self.incumbent) {
            if self.incumbent.objective() > before {
                self.stats.incumbent_updates += 1;
            }
            self.tree.get_mut(id).fathom(reason);
            self.stats.record_fathom(reason);
            return;
        }

        match self.branching.branch(&mut self.tree, id) {
            BranchOutcome::Branched { left, right } => {
                // Right first so the `<=` child is popped next.
                self.frontier.push(right);
                self.frontier.push(left);
                self.stats.nodes_branched += 1;
            }
            BranchOutcome::Exhausted => {
                log::warn!("node {id}: open node without a fractional variable; fathomed");
                self.stats.record_fathom(FathomReason::BranchExhaustion);
            }
        }
    }

    fn outcome(&self) -> SolveOutcome {
        let solution = self.incumbent.values().map(|values| IntegerSolution {
            values: self
                .model
                .variables()
                .iter()
                .cloned()
                .zip(values.iter().copied())
                .collect(),
            objective: self.incumbent.objective(),
            nodes_processed: self.node_counter,
        });

        match (solution, self.stats.truncated) {
            (Some(s), false) => SolveOutcome::Optimal(s),
            (Some(s), true) => SolveOutcome::Feasible(s),
            (None, false) => SolveOutcome::Infeasible,
            (None, true) => SolveOutcome::Undetermined {
                nodes_processed: self.node_counter,
            },
        }
    }
}

/// Solves a model with the default engine.
pub fn solve(model: &ProblemModel) -> SolveOutcome {
    Engine::new(model).solve()
}

/// Solves independent models concurrently, one engine per model.
///
/// Results are in input order.
#[cfg(feature = "parallel")]
pub fn solve_batch(models: &[ProblemModel], config: &BnbConfig) -> Result<Vec<SolveOutcome>, BnbError> {
    use rayon::prelude::*;

    config.validate().map_err(BnbError::InvalidConfig)?;
    Ok(models
        .par_iter()
        .map(|model| Engine::build(model, SimplexSolver::default(), config.clone()).solve())
        .collect())
}
