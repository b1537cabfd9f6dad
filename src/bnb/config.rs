//! Branch-and-bound configuration.

/// Configuration parameters for the search engine.
///
/// # Examples
///
/// ```
/// use u_intprog::bnb::BnbConfig;
///
/// let config = BnbConfig::default()
///     .with_integrality_tol(1e-6)
///     .with_node_limit(10_000);
/// assert_eq!(config.node_limit, Some(10_000));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BnbConfig {
    /// A value within this distance of its nearest integer counts as integral.
    pub integrality_tol: f64,
    /// A node whose bound does not beat the incumbent by more than this is
    /// pruned.
    pub bound_tol: f64,
    /// Stop after evaluating this many nodes. `None` explores the whole tree.
    pub node_limit: Option<usize>,
}

impl Default for BnbConfig {
    fn default() -> Self {
        Self {
            integrality_tol: 1e-5,
            bound_tol: 1e-9,
            node_limit: None,
        }
    }
}

impl BnbConfig {
    /// Sets the integrality tolerance.
    pub fn with_integrality_tol(mut self, tol: f64) -> Self {
        self.integrality_tol = tol;
        self
    }

    /// Sets the bound-dominance tolerance.
    pub fn with_bound_tol(mut self, tol: f64) -> Self {
        self.bound_tol = tol;
        self
    }

    /// Caps the number of evaluated nodes.
    pub fn with_node_limit(mut self, limit: usize) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.integrality_tol.is_finite() && self.integrality_tol >= 0.0) {
            return Err(format!(
                "integrality_tol must be finite and non-negative, got {}",
                self.integrality_tol
            ));
        }
        if self.integrality_tol >= 0.5 {
            return Err(format!(
                "integrality_tol must be below 0.5, got {}",
                self.integrality_tol
            ));
        }
        if !(self.bound_tol.is_finite() && self.bound_tol >= 0.0) {
            return Err(format!(
                "bound_tol must be finite and non-negative, got {}",
                self.bound_tol
            ));
        }
        if self.node_limit == Some(0) {
            return Err("node_limit must be at least 1".into());
        }
        Ok(())
    }
}
