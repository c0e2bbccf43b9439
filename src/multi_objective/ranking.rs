//! Fast non-dominated ranking.

use crate::comparator::Comparator;
use crate::error::{MoeaError, Result};
use crate::solution::Solution;
use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Fronts produced by [`FastNonDominatedRanking`].
///
/// Each front is a list of indices into the ranked slice. `fronts[0]` is the
/// non-dominated front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    fronts: Vec<Vec<usize>>,
    number_of_comparisons: usize,
}

impl Ranking {
    /// All retained fronts, best first.
    pub fn fronts(&self) -> &[Vec<usize>] {
        &self.fronts
    }

    /// Indices of the non-dominated solutions (empty if nothing was ranked).
    pub fn nondominated(&self) -> &[usize] {
        self.fronts.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Front at `rank`.
    ///
    /// # Errors
    /// [`MoeaError::InvalidRank`] if `rank` is past the last retained front.
    pub fn subfront(&self, rank: usize) -> Result<&[usize]> {
        self.fronts
            .get(rank)
            .map(Vec::as_slice)
            .ok_or(MoeaError::InvalidRank {
                rank,
                available: self.fronts.len(),
            })
    }

    pub fn number_of_subfronts(&self) -> usize {
        self.fronts.len()
    }

    /// Pairwise comparisons performed: `n * (n - 1) / 2`.
    pub fn number_of_comparisons(&self) -> usize {
        self.number_of_comparisons
    }

    pub fn into_fronts(self) -> Vec<Vec<usize>> {
        self.fronts
    }
}

/// Fast non-dominated sorting (Deb et al., 2002).
///
/// # Algorithm
///
/// 1. Compare every unordered pair `(p, q)`, `p < q`, exactly once
/// 2. Track how many solutions dominate each solution, and whom it dominates
/// 3. Undominated solutions form front 0
/// 4. Peel each front off, decrementing counts; zero-count solutions form the next front
///
/// # Complexity
///
/// O(m * n²) where m = number of objectives, n = number of solutions.
///
/// # Example
///
/// ```
/// use u_moea::multi_objective::FastNonDominatedRanking;
/// use u_moea::solution::Solution;
///
/// let mut pop: Vec<Solution<f64>> = [[1.0, 5.0], [3.0, 3.0], [4.0, 4.0]]
///     .iter()
///     .map(|o| {
///         let mut s = Solution::new(vec![], 2, 0);
///         s.objectives = o.to_vec();
///         s
///     })
///     .collect();
///
/// let ranking = FastNonDominatedRanking::default().compute_ranking(&mut pop, None);
/// assert_eq!(ranking.fronts(), &[vec![0, 1], vec![2]]);
/// assert_eq!(pop[2].attributes.dominance_ranking, Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FastNonDominatedRanking {
    comparator: Comparator,
    parallel: bool,
}

impl FastNonDominatedRanking {
    /// Ranks with a custom comparator.
    pub fn new(comparator: Comparator) -> Self {
        Self {
            comparator,
            parallel: false,
        }
    }

    /// Runs pairwise comparisons on the rayon pool.
    ///
    /// Results are identical to the sequential path. Without the `parallel`
    /// feature this flag is ignored.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    pub fn comparator(&self) -> &Comparator {
        &self.comparator
    }

    /// Partitions `solutions` into fronts and writes each solution's
    /// `dominance_ranking`.
    ///
    /// With `k = Some(n)`, fronts are kept until their cumulative size first
    /// reaches `n`; later fronts are dropped from the returned [`Ranking`]
    /// (their solutions still carry a rank). `Some(0)` keeps every front.
    pub fn compute_ranking<T: Send + Sync>(
        &self,
        solutions: &mut [Solution<T>],
        k: Option<usize>,
    ) -> Ranking {
        let n = solutions.len();
        let number_of_comparisons = n * n.saturating_sub(1) / 2;
        if n == 0 {
            return Ranking {
                fronts: Vec::new(),
                number_of_comparisons,
            };
        }

        let rows = self.comparison_rows(solutions);

        let mut domination_count = vec![0usize; n];
        let mut dominates: Vec<Vec<usize>> = vec![Vec::new(); n];

        for (p, row) in rows.iter().enumerate() {
            for (offset, ord) in row.iter().enumerate() {
                let q = p + 1 + offset;
                match ord {
                    Ordering::Less => {
                        dominates[p].push(q);
                        domination_count[q] += 1;
                    }
                    Ordering::Greater => {
                        dominates[q].push(p);
                        domination_count[p] += 1;
                    }
                    Ordering::Equal => {}
                }
            }
        }

        let front_0: Vec<usize> = (0..n).filter(|&i| domination_count[i] == 0).collect();
        let mut fronts = vec![front_0];
        loop {
            let current = &fronts[fronts.len() - 1];
            let mut next_front = Vec::new();

            for &p in current {
                for &q in &dominates[p] {
                    domination_count[q] -= 1;
                    if domination_count[q] == 0 {
                        next_front.push(q);
                    }
                }
            }

            if next_front.is_empty() {
                break;
            }
            fronts.push(next_front);
        }

        for (rank, front) in fronts.iter().enumerate() {
            for &i in front {
                solutions[i].attributes.dominance_ranking = Some(rank);
            }
        }

        if let Some(k) = k.filter(|&k| k > 0) {
            let mut count = 0;
            let mut keep = fronts.len();
            for (rank, front) in fronts.iter().enumerate() {
                count += front.len();
                if count >= k {
                    keep = rank + 1;
                    break;
                }
            }
            fronts.truncate(keep);
        }

        Ranking {
            fronts,
            number_of_comparisons,
        }
    }

    /// Row `p` holds `compare(p, q)` for every `q > p`.
    fn comparison_rows<T: Send + Sync>(&self, solutions: &[Solution<T>]) -> Vec<Vec<Ordering>> {
        let n = solutions.len();
        let row = |p: usize| -> Vec<Ordering> {
            ((p + 1)..n)
                .map(|q| self.comparator.compare(&solutions[p], &solutions[q]))
                .collect()
        };

        #[cfg(feature = "parallel")]
        if self.parallel {
            return (0..n).into_par_iter().map(row).collect();
        }

        (0..n).map(row).collect()
    }
}
