//! Error types.
//!
//! Every fallible operation in the crate returns [`Result`]. Errors are
//! unrecoverable at the point of detection: components propagate them to the
//! [`EvolutionaryAlgorithm`](crate::algorithm::EvolutionaryAlgorithm), which
//! aborts the run. There is no internal retry.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MoeaError>;

/// Coarse classification of a [`MoeaError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A caller passed an argument outside the accepted domain.
    InvalidArgument,
    /// A component detected a broken internal invariant.
    InvariantViolation,
}

/// Errors raised by MOEA components.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MoeaError {
    #[error("{operator}: probability {value} is not in [0, 1]")]
    InvalidProbability { operator: &'static str, value: f64 },

    #[error("{operator}: distribution index {value} must be finite and non-negative")]
    InvalidDistributionIndex { operator: &'static str, value: f64 },

    #[error("cannot select from an empty front")]
    EmptyFront,

    #[error("rank {rank} requested but only {available} fronts are available")]
    InvalidRank { rank: usize, available: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid bounds at variable {index}: lower {lower} > upper {upper}")]
    InvalidBounds { index: usize, lower: f64, upper: f64 },

    #[error("{operator} expects {expected} parents, got {actual}")]
    ParentCountMismatch {
        operator: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("solution has {actual} objectives, problem declares {expected}")]
    ObjectiveCountMismatch { expected: usize, actual: usize },

    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    #[error("evaluation failed: {0}")]
    Evaluation(String),
}

impl MoeaError {
    /// Maps the error onto the two-way taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MoeaError::InvalidProbability { .. }
            | MoeaError::InvalidDistributionIndex { .. }
            | MoeaError::EmptyFront
            | MoeaError::InvalidRank { .. }
            | MoeaError::InvalidConfig(_)
            | MoeaError::InvalidBounds { .. }
            | MoeaError::ParentCountMismatch { .. }
            | MoeaError::DimensionMismatch { .. } => ErrorKind::InvalidArgument,
            MoeaError::ObjectiveCountMismatch { .. }
            | MoeaError::InvariantViolation(_)
            | MoeaError::Evaluation(_) => ErrorKind::InvariantViolation,
        }
    }
}

/// Rejects a probability outside `[0, 1]` (NaN included).
pub(crate) fn check_probability(operator: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(MoeaError::InvalidProbability { operator, value })
    }
}

/// Rejects a negative or non-finite distribution index.
pub(crate) fn check_distribution_index(operator: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(MoeaError::InvalidDistributionIndex { operator, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(MoeaError::EmptyFront.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            MoeaError::InvalidRank { rank: 3, available: 1 }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            MoeaError::InvariantViolation("broken".into()).kind(),
            ErrorKind::InvariantViolation
        );
        assert_eq!(
            MoeaError::ObjectiveCountMismatch { expected: 2, actual: 1 }.kind(),
            ErrorKind::InvariantViolation
        );
    }

    #[test]
    fn test_check_probability() {
        assert!(check_probability("op", 0.0).is_ok());
        assert!(check_probability("op", 1.0).is_ok());
        assert!(check_probability("op", 0.5).is_ok());
        assert!(check_probability("op", -0.1).is_err());
        assert!(check_probability("op", 1.1).is_err());
        assert!(check_probability("op", f64::NAN).is_err());
    }

    #[test]
    fn test_check_distribution_index() {
        assert!(check_distribution_index("op", 20.0).is_ok());
        assert!(check_distribution_index("op", 0.0).is_ok());
        assert!(check_distribution_index("op", -1.0).is_err());
        assert!(check_distribution_index("op", f64::INFINITY).is_err());
    }

    #[test]
    fn test_display() {
        let err = MoeaError::InvalidProbability {
            operator: "SBX",
            value: 1.5,
        };
        assert_eq!(err.to_string(), "SBX: probability 1.5 is not in [0, 1]");
    }
}
