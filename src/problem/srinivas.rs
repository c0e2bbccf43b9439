//! Srinivas constrained benchmark.

use super::{Bounds, FloatProblem, Problem};
use crate::error::{MoeaError, Result};
use crate::solution::Solution;
use rand::Rng;

/// Srinivas: two variables in `[-20, 20]`, two objectives, two constraints.
///
/// ```text
/// f1 = 2 + (x1 - 2)^2 + (x2 - 1)^2
/// f2 = 9 x1 - (x2 - 1)^2
/// c1 = 1 - (x1^2 + x2^2) / 225        >= 0
/// c2 = (3 x2 - x1) / 10 - 1           >= 0
/// ```
#[derive(Debug, Clone)]
pub struct Srinivas {
    bounds: Bounds,
}

impl Srinivas {
    pub fn new() -> Self {
        Self {
            bounds: Bounds {
                lower: vec![-20.0; 2],
                upper: vec![20.0; 2],
            },
        }
    }
}

impl Default for Srinivas {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for Srinivas {
    type Variable = f64;

    fn name(&self) -> &str {
        "Srinivas"
    }

    fn number_of_variables(&self) -> usize {
        2
    }

    fn number_of_objectives(&self) -> usize {
        2
    }

    fn number_of_constraints(&self) -> usize {
        2
    }

    fn create_solution<R: Rng + ?Sized>(&self, rng: &mut R) -> Solution<f64> {
        Solution::new(self.bounds.sample(rng), 2, 2)
    }

    fn evaluate(&self, solution: &mut Solution<f64>) -> Result<()> {
        let [x1, x2] = solution.variables[..] else {
            return Err(MoeaError::DimensionMismatch {
                expected: 2,
                actual: solution.variables.len(),
            });
        };

        solution.objectives = vec![
            2.0 + (x1 - 2.0).powi(2) + (x2 - 1.0).powi(2),
            9.0 * x1 - (x2 - 1.0).powi(2),
        ];
        solution.constraints = vec![
            1.0 - (x1 * x1 + x2 * x2) / 225.0,
            (3.0 * x2 - x1) / 10.0 - 1.0,
        ];
        Ok(())
    }
}

impl FloatProblem for Srinivas {
    fn bounds(&self) -> &Bounds {
        &self.bounds
    }
}
