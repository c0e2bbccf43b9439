//! Problem definitions.
//!
//! Users plug their domain into the engine by implementing [`Problem`]. It
//! covers solution creation and evaluation; variation is supplied separately
//! through [`operators`](crate::operators).
//!
//! # Benchmarks
//!
//! - [`Zdt1`], [`Zdt2`]: unconstrained bi-objective problems (Zitzler et al., 2000)
//! - [`Srinivas`]: constrained bi-objective problem (Srinivas & Deb, 1994)
//!
//! # References
//!
//! - Zitzler, Deb & Thiele (2000), "Comparison of Multiobjective Evolutionary
//!   Algorithms: Empirical Results"
//! - Srinivas & Deb (1994), "Multiobjective Optimization Using Nondominated
//!   Sorting in Genetic Algorithms"

mod srinivas;
mod zdt;

pub use srinivas::Srinivas;
pub use zdt::{Zdt1, Zdt2};

use crate::error::{MoeaError, Result};
use crate::solution::Solution;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Defines a multi-objective optimization problem.
///
/// # Thread Safety
///
/// `Problem` must be `Send + Sync` because evaluation may run in parallel
/// using rayon.
pub trait Problem: Send + Sync {
    /// Decision variable type.
    type Variable: Clone + Send + Sync;

    /// Human-readable problem name.
    fn name(&self) -> &str;

    fn number_of_variables(&self) -> usize;

    fn number_of_objectives(&self) -> usize;

    fn number_of_constraints(&self) -> usize {
        0
    }

    /// Creates a random, unevaluated solution.
    fn create_solution<R: Rng + ?Sized>(&self, rng: &mut R) -> Solution<Self::Variable>;

    /// Computes objectives and constraints in place.
    ///
    /// Lower objective values are better. A negative constraint value marks
    /// a violation.
    fn evaluate(&self, solution: &mut Solution<Self::Variable>) -> Result<()>;
}

/// A real-coded problem with box-bounded variables.
pub trait FloatProblem: Problem<Variable = f64> {
    fn bounds(&self) -> &Bounds;
}

/// Per-variable box bounds `[lower[i], upper[i]]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl Bounds {
    /// Creates bounds, rejecting mismatched lengths and inverted intervals.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Result<Self> {
        if lower.len() != upper.len() {
            return Err(MoeaError::DimensionMismatch {
                expected: lower.len(),
                actual: upper.len(),
            });
        }
        if let Some(index) = lower.iter().zip(&upper).position(|(lo, hi)| lo.is_nan() || hi.is_nan() || lo > hi) {
            return Err(MoeaError::InvalidBounds {
                index,
                lower: lower[index],
                upper: upper[index],
            });
        }
        Ok(Self { lower, upper })
    }

    /// Same interval `[lower, upper]` for all `n` variables.
    pub fn uniform(n: usize, lower: f64, upper: f64) -> Result<Self> {
        Self::new(vec![lower; n], vec![upper; n])
    }

    pub fn len(&self) -> usize {
        self.lower.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }

    pub fn lower(&self, i: usize) -> f64 {
        self.lower[i]
    }

    pub fn upper(&self, i: usize) -> f64 {
        self.upper[i]
    }

    /// Clamps `value` into the domain of variable `i`.
    pub fn clamp(&self, i: usize, value: f64) -> f64 {
        value.clamp(self.lower[i], self.upper[i])
    }

    /// Draws a uniformly random point inside the box.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        self.lower
            .iter()
            .zip(&self.upper)
            .map(|(&lo, &hi)| lo + (hi - lo) * rng.random::<f64>())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_bounds_rejects_inverted() {
        let err = Bounds::new(vec![0.0, 2.0], vec![1.0, 1.0]).unwrap_err();
        assert!(matches!(err, MoeaError::InvalidBounds { index: 1, .. }));
    }

    #[test]
    fn test_bounds_rejects_mismatched_lengths() {
        assert!(matches!(
            Bounds::new(vec![0.0], vec![1.0, 1.0]),
            Err(MoeaError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_bounds_sample_within_box() {
        let bounds = Bounds::new(vec![-1.0, 10.0], vec![1.0, 20.0]).unwrap();
        let mut rng = create_rng(42);
        for _ in 0..200 {
            let x = bounds.sample(&mut rng);
            assert!((-1.0..=1.0).contains(&x[0]));
            assert!((10.0..=20.0).contains(&x[1]));
        }
    }

    #[test]
    fn test_bounds_clamp() {
        let bounds = Bounds::uniform(2, 0.0, 1.0).unwrap();
        assert_eq!(bounds.clamp(0, -0.5), 0.0);
        assert_eq!(bounds.clamp(1, 1.5), 1.0);
        assert_eq!(bounds.clamp(1, 0.25), 0.25);
    }
}
