//! Variation operators.
//!
//! [`Crossover`] and [`Mutation`] are open traits: problem-specific operators
//! plug into [`Variation`](crate::components::Variation) by implementing them.
//! Both take the RNG as `&mut dyn RngCore` so they can live behind a `Box`.
//!
//! # Real-coded
//!
//! - [`SbxCrossover`]: Simulated binary crossover (Deb & Agrawal, 1995)
//! - [`PolynomialMutation`]: Polynomial mutation (Deb & Goyal, 1996)
//!
//! # Binary
//!
//! - [`SinglePointCrossover`]: Swap the bit tail after one cut point
//! - [`BitFlipMutation`]: Flip each bit independently
//!
//! # Permutation
//!
//! - [`PmxCrossover`]: Partially mapped crossover (Goldberg & Lingle, 1985)
//! - [`SwapMutation`]: Exchange two random positions
//!
//! # Contract
//!
//! Constructors reject probabilities outside `[0, 1]`. Crossover never
//! touches its parents: it clones them into children whose attributes are
//! cleared. Operators that detect a corrupted solution return
//! [`MoeaError::InvariantViolation`] instead of handing it back.
//!
//! # References
//!
//! - Deb & Agrawal (1995), "Simulated Binary Crossover for Continuous Search Space"
//! - Deb & Goyal (1996), "A Combined Genetic Adaptive Search (GeneAS) for
//!   Engineering Design"
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"

mod binary;
mod permutation;
mod real;

pub use binary::{BitFlipMutation, SinglePointCrossover};
pub use permutation::{PmxCrossover, SwapMutation};
pub use real::{PolynomialMutation, SbxCrossover};

use crate::error::{MoeaError, Result};
use crate::solution::Solution;
use rand::RngCore;

/// Recombines `number_of_parents` solutions into `number_of_children`.
pub trait Crossover<T>: Send + Sync {
    /// Probability of recombining a given parent group.
    fn probability(&self) -> f64;

    fn number_of_parents(&self) -> usize;

    fn number_of_children(&self) -> usize;

    /// Produces exactly `number_of_children` fresh solutions.
    ///
    /// # Errors
    /// [`MoeaError::ParentCountMismatch`] if `parents.len()` differs from
    /// [`number_of_parents`](Self::number_of_parents).
    fn execute(&self, parents: &[&Solution<T>], rng: &mut dyn RngCore) -> Result<Vec<Solution<T>>>;

    fn name(&self) -> &str;
}

/// Perturbs a single solution.
pub trait Mutation<T>: Send + Sync {
    /// Per-gene mutation probability.
    fn probability(&self) -> f64;

    fn execute(&self, solution: Solution<T>, rng: &mut dyn RngCore) -> Result<Solution<T>>;

    fn name(&self) -> &str;
}

// ============================================================================
// Helpers
// ============================================================================

fn check_parents<T>(operator: &'static str, expected: usize, parents: &[&Solution<T>]) -> Result<()> {
    if parents.len() != expected {
        return Err(MoeaError::ParentCountMismatch {
            operator,
            expected,
            actual: parents.len(),
        });
    }
    Ok(())
}

fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(MoeaError::DimensionMismatch { expected, actual });
    }
    Ok(())
}

/// Clones a parent into an unranked child.
fn offspring_of<T: Clone>(parent: &Solution<T>) -> Solution<T> {
    let mut child = parent.clone();
    child.attributes.clear();
    child
}
