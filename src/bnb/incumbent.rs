//! Best integer-feasible solution found so far.

use super::node::NodeId;

/// Incumbent holder. Starts empty with objective `-inf`.
///
/// Only strictly better offers are accepted, so the objective is
/// non-decreasing over a solve.
#[derive(Debug, Clone)]
pub struct Incumbent {
    values: Option<Vec<i64>>,
    objective: f64,
    node: Option<NodeId>,
}

impl Default for Incumbent {
    fn default() -> Self {
        Self::new()
    }
}

impl Incumbent {
    pub fn new() -> Self {
        Self {
            values: None,
            objective: f64::NEG_INFINITY,
            node: None,
        }
    }

    /// Objective value of the incumbent, `-inf` if none.
    pub fn objective(&self) -> f64 {
        self.objective
    }

    /// Rounded variable values in canonical order.
    pub fn values(&self) -> Option<&[i64]> {
        self.values.as_deref()
    }

    /// Node that produced the incumbent.
    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    pub fn is_some(&self) -> bool {
        self.values.is_some()
    }

    /// Installs `relaxation` (rounded to the nearest integers) if `objective`
    /// strictly improves. Returns whether it was installed.
    pub fn offer(&mut self, relaxation: &[f64], objective: f64, node: NodeId) -> bool {
        if objective <= self.objective {
            return false;
        }
        self.values = Some(relaxation.iter().map(|v| v.round() as i64).collect());
        self.objective = objective;
        self.node = Some(node);
        true
    }
}
