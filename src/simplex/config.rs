//! Simplex configuration.

/// Numerical parameters of the tableau simplex.
///
/// # Examples
///
/// ```
/// use u_intprog::simplex::SimplexConfig;
///
/// let config = SimplexConfig::default()
///     .with_max_iterations(5_000)
///     .with_optimality_tol(1e-10);
/// assert_eq!(config.max_iterations, 5_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimplexConfig {
    /// Pivot cap across both phases. Exceeding it is a solver divergence.
    pub max_iterations: usize,
    /// An objective-row entry below `-optimality_tol` can still improve.
    pub optimality_tol: f64,
    /// Column entries must exceed this to take part in the ratio test.
    pub pivot_tol: f64,
    /// Phase I optimum below `-feasibility_tol` proves infeasibility.
    pub feasibility_tol: f64,
    /// Tolerance for recognizing 0 and 1 in identity columns.
    pub identity_tol: f64,
}

impl Default for SimplexConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            optimality_tol: 1e-9,
            pivot_tol: 1e-9,
            feasibility_tol: 1e-7,
            identity_tol: 1e-9,
        }
    }
}

impl SimplexConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_optimality_tol(mut self, tol: f64) -> Self {
        self.optimality_tol = tol;
        self
    }

    pub fn with_pivot_tol(mut self, tol: f64) -> Self {
        self.pivot_tol = tol;
        self
    }

    pub fn with_feasibility_tol(mut self, tol: f64) -> Self {
        self.feasibility_tol = tol;
        self
    }

    pub fn with_identity_tol(mut self, tol: f64) -> Self {
        self.identity_tol = tol;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        for (name, tol) in [
            ("optimality_tol", self.optimality_tol),
            ("pivot_tol", self.pivot_tol),
            ("feasibility_tol", self.feasibility_tol),
            ("identity_tol", self.identity_tol),
        ] {
            if !(tol.is_finite() && tol >= 0.0) {
                return Err(format!("{name} must be finite and non-negative, got {tol}"));
            }
        }
        Ok(())
    }
}
