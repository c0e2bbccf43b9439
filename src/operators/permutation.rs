//! Permutation-coded operators.
//!
//! Variables must form a permutation of `0..n`. Both operators verify this
//! and refuse to return a corrupted solution.

use super::{check_len, check_parents, offspring_of, Crossover, Mutation};
use crate::error::{check_probability, MoeaError, Result};
use crate::solution::Solution;
use rand::{Rng, RngCore};

/// Partially Mapped Crossover (PMX).
///
/// Preserves the **absolute position** of elements from both parents
/// as much as possible.
///
/// # Algorithm (Goldberg & Lingle, 1985)
///
/// 1. Select a random segment `[start, end]`
/// 2. Copy the segment from one parent into the child
/// 3. Place the other parent's displaced segment elements by following the
///    position mapping chain
/// 4. Fill remaining positions from the other parent
///
/// # Complexity
/// O(n²) worst case for the mapping chain, O(n) space
#[derive(Debug, Clone)]
pub struct PmxCrossover {
    probability: f64,
}

impl PmxCrossover {
    pub fn new(probability: f64) -> Result<Self> {
        check_probability("PMX crossover", probability)?;
        Ok(Self { probability })
    }
}

impl Crossover<usize> for PmxCrossover {
    fn probability(&self) -> f64 {
        self.probability
    }

    fn number_of_parents(&self) -> usize {
        2
    }

    fn number_of_children(&self) -> usize {
        2
    }

    fn execute(
        &self,
        parents: &[&Solution<usize>],
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Solution<usize>>> {
        check_parents("PMX crossover", 2, parents)?;
        let (p1, p2) = (parents[0], parents[1]);
        let n = p1.variables.len();
        check_len(n, p2.variables.len())?;
        check_permutation("PMX crossover", &p1.variables)?;
        check_permutation("PMX crossover", &p2.variables)?;

        let mut c1 = offspring_of(p1);
        let mut c2 = offspring_of(p2);

        if n < 2 || rng.random::<f64>() > self.probability {
            return Ok(vec![c1, c2]);
        }

        let (start, end) = random_segment(n, rng);
        c1.variables = pmx_build_child(&p1.variables, &p2.variables, start, end)?;
        c2.variables = pmx_build_child(&p2.variables, &p1.variables, start, end)?;

        Ok(vec![c1, c2])
    }

    fn name(&self) -> &str {
        "PMX crossover"
    }
}

/// Build one PMX child: copy segment from `template`, map from `donor`.
fn pmx_build_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Result<Vec<usize>> {
    let n = template.len();
    let sentinel = usize::MAX;
    let mut child = vec![sentinel; n];
    let mut placed = vec![false; n];

    let mut donor_pos = vec![0usize; n];
    for (i, &v) in donor.iter().enumerate() {
        donor_pos[v] = i;
    }

    for i in start..=end {
        child[i] = template[i];
        placed[template[i]] = true;
    }

    for i in start..=end {
        let donor_val = donor[i];
        if placed[donor_val] {
            continue;
        }
        let mut pos = i;
        // Each hop lands on a distinct segment slot.
        for _ in 0..=n {
            let target = donor_pos[template[pos]];
            if target < start || target > end {
                child[target] = donor_val;
                placed[donor_val] = true;
                break;
            }
            pos = target;
        }
        if !placed[donor_val] {
            return Err(MoeaError::InvariantViolation(
                "PMX mapping chain did not terminate".into(),
            ));
        }
    }

    for (slot, &d) in child.iter_mut().zip(donor) {
        if *slot == sentinel {
            *slot = d;
        }
    }

    check_permutation("PMX crossover", &child)?;
    Ok(child)
}

/// Swap mutation: exchange two random positions.
///
/// Applied once per solution with `probability`.
///
/// # Complexity
/// O(n) for the permutation check, O(1) for the swap
#[derive(Debug, Clone)]
pub struct SwapMutation {
    probability: f64,
}

impl SwapMutation {
    pub fn new(probability: f64) -> Result<Self> {
        check_probability("Swap mutation", probability)?;
        Ok(Self { probability })
    }
}

impl Mutation<usize> for SwapMutation {
    fn probability(&self) -> f64 {
        self.probability
    }

    fn execute(&self, mut solution: Solution<usize>, rng: &mut dyn RngCore) -> Result<Solution<usize>> {
        check_permutation("Swap mutation", &solution.variables)?;

        let n = solution.variables.len();
        if n >= 2 && rng.random::<f64>() <= self.probability {
            let i = rng.random_range(0..n);
            let j = rng.random_range(0..n);
            solution.variables.swap(i, j);
        }
        Ok(solution)
    }

    fn name(&self) -> &str {
        "Swap mutation"
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Pick a random segment `[start, end]` within `0..n` where `start <= end`.
fn random_segment(n: usize, rng: &mut dyn RngCore) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn is_permutation(values: &[usize]) -> bool {
    let n = values.len();
    let mut seen = vec![false; n];
    values.iter().all(|&v| v < n && !std::mem::replace(&mut seen[v], true))
}

fn check_permutation(operator: &str, values: &[usize]) -> Result<()> {
    if is_permutation(values) {
        Ok(())
    } else {
        Err(MoeaError::InvariantViolation(format!(
            "{operator}: {values:?} is not a permutation of 0..{}",
            values.len()
        )))
    }
}
