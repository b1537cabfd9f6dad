//! Single-variable bounds layered on top of a model.

use super::problem::Sense;

/// `x[var] (<= | >=) bound`, contributed by a branching decision.
///
/// `var` is a canonical variable index into the owning
/// [`ProblemModel`](super::ProblemModel). Branching only ever produces
/// integral bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableBound {
    pub var: usize,
    pub sense: Sense,
    pub bound: f64,
}

impl VariableBound {
    /// `x[var] <= bound`
    pub fn upper(var: usize, bound: f64) -> Self {
        Self {
            var,
            sense: Sense::Le,
            bound,
        }
    }

    /// `x[var] >= bound`
    pub fn lower(var: usize, bound: f64) -> Self {
        Self {
            var,
            sense: Sense::Ge,
            bound,
        }
    }

    /// Totally ordered, hashable form used for signature comparison.
    pub fn key(&self) -> (usize, Sense, i64) {
        (self.var, self.sense, self.bound.round() as i64)
    }

    /// Whether `value` satisfies this bound within `tol`.
    pub fn is_satisfied_by(&self, value: f64, tol: f64) -> bool {
        match self.sense {
            Sense::Le => value <= self.bound + tol,
            Sense::Ge => value >= self.bound - tol,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let up = VariableBound::upper(2, 3.0);
        assert_eq!(up.sense, Sense::Le);
        assert_eq!(up.key(), (2, Sense::Le, 3));

        let lo = VariableBound::lower(0, 4.0);
        assert_eq!(lo.key(), (0, Sense::Ge, 4));
    }

    #[test]
    fn test_key_ordering() {
        let mut keys = vec![
            VariableBound::lower(1, 2.0).key(),
            VariableBound::upper(1, 1.0).key(),
            VariableBound::upper(0, 5.0).key(),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![(0, Sense::Le, 5), (1, Sense::Le, 1), (1, Sense::Ge, 2)]
        );
    }

    #[test]
    fn test_satisfaction() {
        let up = VariableBound::upper(0, 2.0);
        assert!(up.is_satisfied_by(2.0, 1e-9));
        assert!(!up.is_satisfied_by(2.5, 1e-9));
        let lo = VariableBound::lower(0, 2.0);
        assert!(lo.is_satisfied_by(1.9999999999, 1e-9));
        assert!(!lo.is_satisfied_by(1.0, 1e-9));
    }
}
