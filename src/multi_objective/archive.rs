//! Unbounded archive of mutually non-dominated solutions.

use crate::comparator::Comparator;
use crate::solution::Solution;
use std::cmp::Ordering;

/// Keeps only solutions that no other member dominates.
///
/// Adding a solution evicts every member it dominates. A solution that is
/// dominated, or whose objective vector equals a member's, is rejected.
#[derive(Debug, Clone)]
pub struct NonDominatedArchive<T> {
    solutions: Vec<Solution<T>>,
    comparator: Comparator,
}

impl<T> Default for NonDominatedArchive<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NonDominatedArchive<T> {
    pub fn new() -> Self {
        Self::with_comparator(Comparator::Dominance)
    }

    pub fn with_comparator(comparator: Comparator) -> Self {
        Self {
            solutions: Vec::new(),
            comparator,
        }
    }

    /// Offers `solution` to the archive. Returns `true` if it was inserted.
    pub fn add(&mut self, solution: Solution<T>) -> bool {
        let rejected = self.solutions.iter().any(|member| {
            match self.comparator.compare(&solution, member) {
                Ordering::Greater => true,
                Ordering::Equal => solution.objectives == member.objectives,
                Ordering::Less => false,
            }
        });
        if rejected {
            return false;
        }

        let comparator = &self.comparator;
        self.solutions
            .retain(|member| comparator.compare(&solution, member) != Ordering::Less);
        self.solutions.push(solution);
        true
    }

    pub fn solutions(&self) -> &[Solution<T>] {
        &self.solutions
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn into_solutions(self) -> Vec<Solution<T>> {
        self.solutions
    }
}

/// Returns the non-dominated subset of `solutions`, without duplicates.
///
/// # Example
///
/// ```
/// use u_moea::multi_objective::get_non_dominated_solutions;
/// use u_moea::solution::Solution;
///
/// let pop: Vec<Solution<f64>> = [[1.0, 3.0], [2.0, 2.0], [2.0, 2.0], [3.0, 3.0]]
///     .iter()
///     .map(|o| {
///         let mut s = Solution::new(vec![], 2, 0);
///         s.objectives = o.to_vec();
///         s
///     })
///     .collect();
///
/// let front = get_non_dominated_solutions(&pop);
/// assert_eq!(front.len(), 2);
/// ```
pub fn get_non_dominated_solutions<T: Clone>(solutions: &[Solution<T>]) -> Vec<Solution<T>> {
    let mut archive = NonDominatedArchive::new();
    for s in solutions {
        archive.add(s.clone());
    }
    archive.into_solutions()
}
