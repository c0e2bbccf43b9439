//! ZDT benchmark family.

use super::{Bounds, FloatProblem, Problem};
use crate::error::{MoeaError, Result};
use crate::solution::Solution;
use rand::Rng;

/// `g(x) = 1 + 9 * sum(x[1..]) / (n - 1)`, shared by ZDT1 and ZDT2.
fn zdt_g(variables: &[f64]) -> f64 {
    let n = variables.len();
    if n < 2 {
        return 1.0;
    }
    let tail: f64 = variables[1..].iter().sum();
    1.0 + 9.0 * tail / (n - 1) as f64
}

fn check_len(expected: usize, solution: &Solution<f64>) -> Result<()> {
    if expected == 0 {
        return Err(MoeaError::InvalidConfig(
            "ZDT problems need at least one variable".into(),
        ));
    }
    if solution.variables.len() != expected {
        return Err(MoeaError::DimensionMismatch {
            expected,
            actual: solution.variables.len(),
        });
    }
    Ok(())
}

/// ZDT1: convex Pareto front `f2 = 1 - sqrt(f1)`.
///
/// The optimal front has a hypervolume of about 0.666 with reference point
/// `(1, 1)`.
///
/// ```
/// use u_moea::problem::{Problem, Zdt1};
/// use u_moea::solution::Solution;
///
/// let problem = Zdt1::new(30);
/// let mut s = Solution::new(vec![0.25; 30], 2, 0);
/// s.variables[1..].iter_mut().for_each(|x| *x = 0.0);
/// problem.evaluate(&mut s).unwrap();
/// assert!((s.objectives[1] - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Zdt1 {
    bounds: Bounds,
}

impl Zdt1 {
    /// Creates ZDT1 with `n` variables in `[0, 1]`. The standard size is 30.
    ///
    /// With `n == 0` every evaluation fails with
    /// [`MoeaError::InvalidConfig`].
    pub fn new(n: usize) -> Self {
        Self {
            bounds: Bounds {
                lower: vec![0.0; n],
                upper: vec![1.0; n],
            },
        }
    }
}

impl Default for Zdt1 {
    fn default() -> Self {
        Self::new(30)
    }
}

impl Problem for Zdt1 {
    type Variable = f64;

    fn name(&self) -> &str {
        "ZDT1"
    }

    fn number_of_variables(&self) -> usize {
        self.bounds.len()
    }

    fn number_of_objectives(&self) -> usize {
        2
    }

    fn create_solution<R: Rng + ?Sized>(&self, rng: &mut R) -> Solution<f64> {
        Solution::new(self.bounds.sample(rng), 2, 0)
    }

    fn evaluate(&self, solution: &mut Solution<f64>) -> Result<()> {
        check_len(self.bounds.len(), solution)?;
        let f1 = solution.variables[0];
        let g = zdt_g(&solution.variables);
        let h = 1.0 - (f1 / g).sqrt();
        solution.objectives = vec![f1, g * h];
        Ok(())
    }
}

impl FloatProblem for Zdt1 {
    fn bounds(&self) -> &Bounds {
        &self.bounds
    }
}

/// ZDT2: concave Pareto front `f2 = 1 - f1^2`.
#[derive(Debug, Clone)]
pub struct Zdt2 {
    bounds: Bounds,
}

impl Zdt2 {
    pub fn new(n: usize) -> Self {
        Self {
            bounds: Bounds {
                lower: vec![0.0; n],
                upper: vec![1.0; n],
            },
        }
    }
}

impl Default for Zdt2 {
    fn default() -> Self {
        Self::new(30)
    }
}

impl Problem for Zdt2 {
    type Variable = f64;

    fn name(&self) -> &str {
        "ZDT2"
    }

    fn number_of_variables(&self) -> usize {
        self.bounds.len()
    }

    fn number_of_objectives(&self) -> usize {
        2
    }

    fn create_solution<R: Rng + ?Sized>(&self, rng: &mut R) -> Solution<f64> {
        Solution::new(self.bounds.sample(rng), 2, 0)
    }

    fn evaluate(&self, solution: &mut Solution<f64>) -> Result<()> {
        check_len(self.bounds.len(), solution)?;
        let f1 = solution.variables[0];
        let g = zdt_g(&solution.variables);
        let h = 1.0 - (f1 / g).powi(2);
        solution.objectives = vec![f1, g * h];
        Ok(())
    }
}

impl FloatProblem for Zdt2 {
    fn bounds(&self) -> &Bounds {
        &self.bounds
    }
}
