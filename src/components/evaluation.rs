//! Population evaluation.

use crate::error::{MoeaError, Result};
use crate::problem::Problem;
use crate::solution::Solution;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// How a batch of solutions is scored against the problem.
///
/// Both strategies return the solutions in input order with identical
/// objective values; only the dispatch differs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Evaluation {
    /// Evaluates one solution after another.
    #[default]
    Sequential,

    /// Evaluates solutions on the rayon pool.
    ///
    /// Falls back to sequential evaluation when the `parallel` feature is
    /// disabled.
    Parallel,
}

impl Evaluation {
    /// Evaluates every solution in place.
    ///
    /// # Errors
    ///
    /// Propagates the first evaluation error. Fails with
    /// [`MoeaError::ObjectiveCountMismatch`] if the problem writes the wrong
    /// number of objectives.
    pub fn evaluate<P: Problem>(
        &self,
        mut solutions: Vec<Solution<P::Variable>>,
        problem: &P,
    ) -> Result<Vec<Solution<P::Variable>>> {
        match self {
            #[cfg(feature = "parallel")]
            Evaluation::Parallel => {
                solutions
                    .par_iter_mut()
                    .try_for_each(|s| evaluate_one(problem, s))?;
            }
            _ => {
                for s in solutions.iter_mut() {
                    evaluate_one(problem, s)?;
                }
            }
        }
        Ok(solutions)
    }

    /// Returns `true` if this strategy actually runs in parallel in the
    /// current build.
    pub fn is_parallel(&self) -> bool {
        cfg!(feature = "parallel") && *self == Evaluation::Parallel
    }
}

fn evaluate_one<P: Problem>(problem: &P, solution: &mut Solution<P::Variable>) -> Result<()> {
    problem.evaluate(solution)?;

    let expected = problem.number_of_objectives();
    if solution.objectives.len() != expected {
        return Err(MoeaError::ObjectiveCountMismatch {
            expected,
            actual: solution.objectives.len(),
        });
    }
    let expected = problem.number_of_constraints();
    if solution.constraints.len() != expected {
        return Err(MoeaError::InvariantViolation(format!(
            "solution has {} constraints, problem declares {expected}",
            solution.constraints.len()
        )));
    }
    Ok(())
}
