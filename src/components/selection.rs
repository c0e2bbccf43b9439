//! Mating selection.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use crate::comparator::Comparator;
use crate::error::{MoeaError, Result};
use crate::solution::Solution;
use rand::seq::index;
use rand::{Rng, RngCore};
use std::cmp::Ordering;

/// Strategy for filling the mating pool.
///
/// Selection borrows from the population; it never clones solutions.
///
/// # Examples
///
/// ```
/// use u_moea::comparator::Comparator;
/// use u_moea::components::Selection;
///
/// let tournament = Selection::BinaryTournament {
///     mating_pool_size: 100,
///     comparator: Comparator::ranking_and_crowding(),
/// };
/// assert_eq!(tournament.mating_pool_size(), 100);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// Draw two distinct solutions, keep the preferred one; ties are broken
    /// uniformly at random.
    ///
    /// A single-element front yields exactly that one element, regardless of
    /// `mating_pool_size`.
    BinaryTournament {
        mating_pool_size: usize,
        comparator: Comparator,
    },

    /// Draw uniformly with replacement.
    Random { mating_pool_size: usize },
}

impl Selection {
    pub fn mating_pool_size(&self) -> usize {
        match self {
            Selection::BinaryTournament {
                mating_pool_size, ..
            }
            | Selection::Random { mating_pool_size } => *mating_pool_size,
        }
    }

    /// Fills the mating pool from `front`.
    ///
    /// # Errors
    /// [`MoeaError::EmptyFront`] if `front` is empty.
    pub fn select<'a, T>(
        &self,
        front: &'a [Solution<T>],
        rng: &mut dyn RngCore,
    ) -> Result<Vec<&'a Solution<T>>> {
        if front.is_empty() {
            return Err(MoeaError::EmptyFront);
        }

        match self {
            Selection::BinaryTournament {
                mating_pool_size,
                comparator,
            } => {
                if front.len() == 1 {
                    return Ok(vec![&front[0]]);
                }
                Ok((0..*mating_pool_size)
                    .map(|_| binary_tournament(front, comparator, rng))
                    .collect())
            }
            Selection::Random { mating_pool_size } => Ok((0..*mating_pool_size)
                .map(|_| &front[rng.random_range(0..front.len())])
                .collect()),
        }
    }
}

fn binary_tournament<'a, T>(
    front: &'a [Solution<T>],
    comparator: &Comparator,
    rng: &mut dyn RngCore,
) -> &'a Solution<T> {
    let picks = index::sample(rng, front.len(), 2);
    let a = &front[picks.index(0)];
    let b = &front[picks.index(1)];

    match comparator.compare(a, b) {
        Ordering::Less => a,
        Ordering::Greater => b,
        Ordering::Equal => {
            if rng.random::<f64>() < 0.5 {
                a
            } else {
                b
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn sol(objectives: &[f64]) -> Solution<f64> {
        let mut s = Solution::new(vec![], objectives.len(), 0);
        s.objectives = objectives.to_vec();
        s
    }

    fn tournament(k: usize) -> Selection {
        Selection::BinaryTournament {
            mating_pool_size: k,
            comparator: Comparator::Dominance,
        }
    }

    #[test]
    fn test_empty_front_errors() {
        let mut rng = create_rng(42);
        let front: Vec<Solution<f64>> = Vec::new();
        assert_eq!(
            tournament(10).select(&front, &mut rng),
            Err(MoeaError::EmptyFront)
        );
        assert_eq!(
            Selection::Random {
                mating_pool_size: 10
            }
            .select(&front, &mut rng),
            Err(MoeaError::EmptyFront)
        );
    }

    #[test]
    fn test_single_element_front() {
        let mut rng = create_rng(42);
        let front = vec![sol(&[1.0, 1.0])];
        let pool = tournament(100).select(&front, &mut rng).unwrap();
        assert_eq!(pool.len(), 1);
        assert!(std::ptr::eq(pool[0], &front[0]));
    }

    #[test]
    fn test_pool_size() {
        let mut rng = create_rng(42);
        let front: Vec<Solution<f64>> = (0..10).map(|i| sol(&[i as f64, 10.0 - i as f64])).collect();
        assert_eq!(tournament(37).select(&front, &mut rng).unwrap().len(), 37);
        assert_eq!(
            Selection::Random {
                mating_pool_size: 13
            }
            .select(&front, &mut rng)
            .unwrap()
            .len(),
            13
        );
    }

    #[test]
    fn test_dominated_never_wins_pairwise() {
        let mut rng = create_rng(42);
        let front = vec![sol(&[1.0, 4.0]), sol(&[0.0, 3.0])];
        let pool = tournament(50).select(&front, &mut rng).unwrap();
        assert!(pool.iter().all(|s| std::ptr::eq(*s, &front[1])));
    }

    #[test]
    fn test_tie_picks_both() {
        let mut rng = create_rng(42);
        let front = vec![sol(&[1.0, 2.0]), sol(&[0.0, 3.0])];
        let pool = tournament(200).select(&front, &mut rng).unwrap();
        let firsts = pool.iter().filter(|s| std::ptr::eq(**s, &front[0])).count();
        assert!(firsts > 0 && firsts < 200);
    }

    #[test]
    fn test_random_single_element_front_fills_pool() {
        let mut rng = create_rng(42);
        let front = vec![sol(&[1.0])];
        let pool = Selection::Random { mating_pool_size: 4 }
            .select(&front, &mut rng)
            .unwrap();
        assert_eq!(pool.len(), 4);
    }
}
